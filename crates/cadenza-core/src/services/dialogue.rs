use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::domain::{Collection, ParameterSpec, SessionState};
use crate::services::{format, recommender};

pub const INTRO: &str = "Sure! Let's find songs based on your preferences.";

/// Máquina de estados que pregunta las preferencias una a una.
///
/// No guarda estado propio: cada transición recibe la sesión actual y
/// devuelve la respuesta junto con la sesión siguiente.
#[derive(Debug, Clone, Copy)]
pub struct PreferenceDialogue<'a> {
  catalog: &'a Catalog,
  top_n: usize,
}

impl<'a> PreferenceDialogue<'a> {
  pub fn new(catalog: &'a Catalog, top_n: usize) -> Self {
    Self { catalog, top_n }
  }

  /// `Idle -> Collecting`, o reinicio si ya se estaba preguntando.
  ///
  /// Sin títulos en el catálogo no hay nada que recomendar y no se pregunta.
  pub fn start(&self) -> (String, SessionState) {
    if !self.catalog.schema().name {
      return (format::NO_TITLES_REPLY.to_string(), SessionState::Idle);
    }
    let (prompt, state) = self.advance(Collection::start());
    (format!("{INTRO}\n{prompt}"), state)
  }

  /// Trata `utterance` como la respuesta al parámetro actual.
  ///
  /// Si no valida, la sesión vuelve intacta con el motivo del rechazo.
  pub fn answer(&self, mut collection: Collection, utterance: &str) -> (String, SessionState) {
    let Some(feature) = collection.current() else {
      return self.advance(collection);
    };
    let Some(spec) = ParameterSpec::for_feature(feature) else {
      warn!(%feature, "pending parameter cannot be collected, skipping it");
      collection.cursor += 1;
      return self.advance(collection);
    };

    match spec.validate(utterance) {
      Ok(value) => {
        debug!(%feature, value, "preference stored");
        collection.preferences.insert(feature, value);
        collection.cursor += 1;
        self.advance(collection)
      }
      Err(err) => (err.to_string(), SessionState::CollectingPreferences(collection)),
    }
  }

  /// Pregunta el siguiente parámetro o, si no quedan, recomienda y vuelve a `Idle`.
  fn advance(&self, mut collection: Collection) -> (String, SessionState) {
    while let Some(feature) = collection.current() {
      match ParameterSpec::for_feature(feature) {
        Some(spec) => return (spec.prompt_text(), SessionState::CollectingPreferences(collection)),
        None => {
          warn!(%feature, "pending parameter cannot be collected, skipping it");
          collection.cursor += 1;
        }
      }
    }

    debug!(preferences = collection.preferences.len(), "preferences complete");
    let reply = recommender::recommend(self.catalog, &collection.preferences, self.top_n).render(self.catalog.schema());
    (reply, SessionState::Idle)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{AudioFeature, CatalogSchema, PREFERENCE_PARAMS};
  use crate::test_support::{catalog, catalog_with, track};

  fn collecting(state: SessionState) -> Collection {
    match state {
      SessionState::CollectingPreferences(c) => c,
      SessionState::Idle => panic!("expected to be collecting"),
    }
  }

  #[test]
  fn start_asks_for_valence() {
    let catalog = catalog(vec![track("A", "X", 1.0)]);
    let (reply, state) = PreferenceDialogue::new(&catalog, 5).start();

    assert!(reply.starts_with("Sure! Let's find songs based on your preferences.\nValence describes"));
    assert!(reply.ends_with("What **valence** value do you prefer? (Enter a number between 0 and 1)"));
    let c = collecting(state);
    assert_eq!(c.cursor, 0);
    assert!(c.preferences.is_empty());
  }

  #[test]
  fn nameless_catalog_does_not_open_the_questionnaire() {
    let mut schema = CatalogSchema::minimal();
    schema.name = false;
    let catalog = catalog_with(vec![track("", "X", 1.0)], schema);

    let (reply, state) = PreferenceDialogue::new(&catalog, 5).start();
    assert_eq!(reply, format::NO_TITLES_REPLY);
    assert_eq!(state, SessionState::Idle);
  }

  #[test]
  fn valid_answer_advances_to_next_parameter() {
    let catalog = catalog(vec![track("A", "X", 1.0)]);
    let dialogue = PreferenceDialogue::new(&catalog, 5);
    let (reply, state) = dialogue.answer(Collection::start(), "0.7");

    assert_eq!(reply, PREFERENCE_PARAMS[1].prompt_text());
    let c = collecting(state);
    assert_eq!(c.cursor, 1);
    assert_eq!(c.preferences.get(AudioFeature::Valence), Some(0.7));
  }

  #[test]
  fn invalid_answers_keep_the_session_unchanged() {
    let catalog = catalog(vec![track("A", "X", 1.0)]);
    let dialogue = PreferenceDialogue::new(&catalog, 5);

    let (reply, state) = dialogue.answer(Collection::start(), "very happy");
    assert_eq!(reply, "Please enter a valid number for valence.");
    assert_eq!(collecting(state), Collection::start());

    let (reply, state) = dialogue.answer(Collection::start(), "1.2");
    assert_eq!(reply, "Please enter a number between 0 and 1 for valence.");
    assert_eq!(collecting(state), Collection::start());
  }

  #[test]
  fn tempo_answer_is_checked_in_bpm() {
    let catalog = catalog(vec![track("A", "X", 1.0)]);
    let dialogue = PreferenceDialogue::new(&catalog, 5);
    let mut c = Collection::start();
    c.cursor = 4;

    let (reply, state) = dialogue.answer(c.clone(), "20");
    assert_eq!(reply, "Please enter a realistic tempo value between 40 and 250 BPM.");
    assert_eq!(collecting(state), c);
  }

  #[test]
  fn last_answer_recommends_and_goes_idle() {
    let catalog = catalog(vec![track("A", "X", 1.0)]);
    let dialogue = PreferenceDialogue::new(&catalog, 5);
    let mut c = Collection::start();
    for (feature, value) in [(AudioFeature::Valence, 0.5), (AudioFeature::Acousticness, 0.5), (AudioFeature::Danceability, 0.5), (AudioFeature::Energy, 0.5)] {
      c.preferences.insert(feature, value);
    }
    c.cursor = 4;

    let (reply, state) = dialogue.answer(c, "125");
    assert_eq!(state, SessionState::Idle);
    assert_eq!(reply, "Here are some songs that match your preferences:\n- \"A\" by X");
  }

  #[test]
  fn unknown_pending_parameters_are_skipped() {
    let catalog = catalog(vec![track("A", "X", 1.0)]);
    let dialogue = PreferenceDialogue::new(&catalog, 5);
    let c = Collection { pending_params: vec![AudioFeature::Loudness, AudioFeature::Energy], cursor: 0, preferences: Default::default() };

    let (reply, state) = dialogue.answer(c, "-4");
    assert_eq!(reply, PREFERENCE_PARAMS[3].prompt_text());
    assert_eq!(collecting(state).current(), Some(AudioFeature::Energy));
  }
}
