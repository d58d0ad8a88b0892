use tracing::debug;

use crate::domain::{INTENTS, Intent};
use crate::services::canned::CANNED_RESPONSES;
use crate::services::fuzzy;

pub const UNRECOGNIZED_REPLY: &str = "I'm not sure what you're asking. Could you rephrase your question?";

/// Intención reconocida junto con la frase que la disparó.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentMatch {
  pub intent: Intent,
  pub phrase: &'static str,
  lowered: String,
}

impl IntentMatch {
  /// Texto del usuario en minúsculas sin ninguna aparición de la frase.
  pub fn residual(&self) -> String {
    self.lowered.replace(self.phrase, "").trim().to_string()
  }
}

/// Clasificador por frases: gana la primera intención (y dentro de ella la
/// primera frase) contenida en el texto en minúsculas.
#[derive(Debug, Clone, Copy)]
pub struct IntentClassifier {
  intents: &'static [(Intent, &'static [&'static str])],
}

impl Default for IntentClassifier {
  fn default() -> Self {
    Self::with_table(INTENTS)
  }
}

impl IntentClassifier {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_table(intents: &'static [(Intent, &'static [&'static str])]) -> Self {
    Self { intents }
  }

  pub fn classify(&self, utterance: &str) -> Option<IntentMatch> {
    let lowered = utterance.to_lowercase();

    let (intent, phrase) = self
      .intents
      .iter()
      .find_map(|(intent, phrases)| phrases.iter().find(|p| lowered.contains(**p)).map(|p| (*intent, *p)))?;

    debug!(%intent, phrase, "intent matched");
    Some(IntentMatch { intent, phrase, lowered })
  }
}

/// Respuesta de último recurso por similitud contra la tabla enlatada.
#[derive(Debug, Clone, Copy)]
pub struct FallbackResponder {
  table: &'static [(&'static str, &'static str)],
  threshold: u8,
}

impl FallbackResponder {
  pub fn new(threshold: u8) -> Self {
    Self::with_table(CANNED_RESPONSES, threshold)
  }

  pub fn with_table(table: &'static [(&'static str, &'static str)], threshold: u8) -> Self {
    Self { table, threshold }
  }

  /// Respuesta enlatada cuya pregunta se parece lo suficiente, si la hay.
  pub fn lookup(&self, utterance: &str) -> Option<&'static str> {
    let (idx, score) = fuzzy::best_match(utterance, self.table.iter().map(|(q, _)| *q))?;
    let (question, answer) = self.table[idx];
    debug!(question, score, threshold = self.threshold, "fuzzy fallback candidate");

    (score >= f64::from(self.threshold)).then_some(answer)
  }

  pub fn respond(&self, utterance: &str) -> &'static str {
    self.lookup(utterance).unwrap_or(UNRECOGNIZED_REPLY)
  }
}
