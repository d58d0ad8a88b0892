use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Ajustes del chatbot, sección `[chat]` de `cadenza.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSettings {
  /// Puntuación mínima (0–100) para aceptar una respuesta enlatada.
  pub fuzzy_threshold: u8,
  /// Cuántas canciones se listan en cada respuesta.
  pub top_n: usize,
  /// Ventana de "reciente" para las canciones en tendencia, en meses naturales.
  pub trending_window_months: u32,
}

impl Default for ChatSettings {
  fn default() -> Self {
    Self { fuzzy_threshold: 70, top_n: 5, trending_window_months: 1 }
  }
}

impl ChatSettings {
  pub fn validate(&self) -> Result<(), CoreError> {
    if self.fuzzy_threshold > 100 {
      return Err(CoreError::InvalidSettings(format!("fuzzy_threshold {} is above 100", self.fuzzy_threshold)));
    }
    if self.top_n == 0 {
      return Err(CoreError::InvalidSettings("top_n must be at least 1".into()));
    }
    Ok(())
  }
}
