use std::sync::Arc;

use tracing::debug;

use crate::catalog::Catalog;
use crate::domain::{Intent, SessionState};
use crate::errors::CoreError;
use crate::ports::{Clock, ReplySink, SystemClock};
use crate::services::classifier::{FallbackResponder, IntentClassifier};
use crate::services::dialogue::PreferenceDialogue;
use crate::services::handlers::{artist_stats, song_info, top_songs, trending};
use crate::services::settings::ChatSettings;

/// Punto de entrada de una conversación.
///
/// El chatbot es inmutable y se puede compartir; el estado de cada
/// conversación vive en el [`SessionState`] que el llamador pasa y recibe en
/// cada turno.
pub struct Chatbot<C = SystemClock>
where
  C: Clock,
{
  catalog: Arc<Catalog>,
  settings: ChatSettings,
  clock: C,
  classifier: IntentClassifier,
  fallback: FallbackResponder,
}

impl<C> Chatbot<C>
where
  C: Clock,
{
  pub fn new(catalog: Arc<Catalog>, settings: ChatSettings, clock: C) -> Result<Self, CoreError> {
    settings.validate()?;
    let fallback = FallbackResponder::new(settings.fuzzy_threshold);
    Ok(Self { catalog, settings, clock, classifier: IntentClassifier::new(), fallback })
  }

  pub fn catalog(&self) -> &Catalog {
    &self.catalog
  }

  pub fn settings(&self) -> &ChatSettings {
    &self.settings
  }

  /// Procesa un turno: devuelve la respuesta y la sesión siguiente.
  ///
  /// Mientras se recogen preferencias todo se toma como respuesta, salvo una
  /// nueva petición de recomendación, que reinicia el cuestionario.
  pub fn respond(&self, utterance: &str, session: SessionState) -> (String, SessionState) {
    let matched = self.classifier.classify(utterance);
    let dialogue = PreferenceDialogue::new(&self.catalog, self.settings.top_n);
    let restart = matched.as_ref().is_some_and(|m| m.intent == Intent::RecommendSongs);

    if let SessionState::CollectingPreferences(collection) = session {
      if !restart {
        return dialogue.answer(collection, utterance);
      }
      debug!("restarting preference collection");
    }

    let Some(matched) = matched else {
      return (self.fallback.respond(utterance).to_string(), SessionState::Idle);
    };

    let catalog = self.catalog.as_ref();
    let reply = match matched.intent {
      Intent::RecommendSongs => return dialogue.start(),
      Intent::SongInformation => song_info::answer(catalog, &matched.residual()),
      Intent::ArtistInformation => artist_stats::answer(catalog, &matched.residual()),
      Intent::TrendingSongs => {
        trending::answer(catalog, self.clock.today(), self.settings.trending_window_months, self.settings.top_n)
      }
      Intent::TopSongs => top_songs::answer(catalog, self.settings.top_n),
    };
    (reply, SessionState::Idle)
  }

  /// Igual que [`Chatbot::respond`] pero actualiza la sesión en sitio y
  /// entrega la respuesta a `sink`.
  pub fn reply_to<S>(&self, utterance: &str, session: &mut SessionState, sink: &mut S) -> Result<(), S::Error>
  where
    S: ReplySink,
  {
    let (reply, next) = self.respond(utterance, std::mem::take(session));
    *session = next;
    sink.deliver(&reply)
  }
}
