use serde::{Deserialize, Serialize};

use crate::domain::feature::AudioFeature;
use crate::domain::preference::{PREFERENCE_PARAMS, PreferenceVector};

/// Estado de conversación de un usuario.
///
/// Es un valor explícito: entra en cada turno y sale actualizado. El host
/// guarda uno por usuario; el núcleo no comparte estado entre sesiones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SessionState {
  #[default]
  Idle,
  CollectingPreferences(Collection),
}

/// Progreso del diálogo de preferencias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
  pub pending_params: Vec<AudioFeature>,
  pub cursor: usize,
  pub preferences: PreferenceVector,
}

impl Collection {
  /// Colección recién empezada con la lista fija de parámetros.
  pub fn start() -> Self {
    Self { pending_params: PREFERENCE_PARAMS.iter().map(|p| p.feature).collect(), cursor: 0, preferences: PreferenceVector::new() }
  }

  /// Parámetro que se está preguntando ahora.
  pub fn current(&self) -> Option<AudioFeature> {
    self.pending_params.get(self.cursor).copied()
  }
}

impl SessionState {
  pub fn is_collecting(&self) -> bool {
    matches!(self, SessionState::CollectingPreferences(_))
  }

  pub fn collection(&self) -> Option<&Collection> {
    match self {
      SessionState::Idle => None,
      SessionState::CollectingPreferences(collection) => Some(collection),
    }
  }
}
