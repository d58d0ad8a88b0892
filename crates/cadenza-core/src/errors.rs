use thiserror::Error;

use crate::domain::AudioFeature;

/// Error genérico del núcleo de Cadenza.
///
/// Ninguna conversación falla por estos errores: solo aparecen al construir
/// el catálogo o el chatbot, antes del primer turno. Las capas superiores
/// (CLI, tests) los convierten en mensajes o logs.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("catalog is missing mandatory feature columns: {}", join_features(.0))]
  MissingFeatureColumns(Vec<AudioFeature>),

  #[error("invalid chat settings: {0}")]
  InvalidSettings(String),
}

fn join_features(features: &[AudioFeature]) -> String {
  features.iter().map(|f| f.column()).collect::<Vec<_>>().join(", ")
}
