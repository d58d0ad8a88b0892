use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::feature::{AudioFeature, AudioFeatures};

/// Una fila del catálogo ya limpia.
///
/// Es inmutable una vez cargada: solo el [`crate::Catalog`] la posee y las
/// consultas trabajan con referencias.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
  /// Título de la pista.
  pub name: String,

  /// Intérpretes en texto libre; puede listar varios artistas en una sola cadena.
  pub artists: String,

  /// Fecha de publicación cuando el dataset la trae completa.
  pub release_date: Option<NaiveDate>,

  /// Año de publicación. El proveedor de datos ya descartó las filas anteriores
  /// al año mínimo configurado.
  pub release_year: Option<i32>,

  /// Popularidad 0–100.
  pub popularity: Option<f64>,

  /// Duración en milisegundos.
  pub duration_ms: Option<f64>,

  pub features: AudioFeatures,
}

impl Track {
  pub fn feature(&self, feature: AudioFeature) -> Option<f64> {
    self.features.get(feature)
  }

  pub fn duration_minutes(&self) -> Option<f64> {
    self.duration_ms.map(|ms| ms / 60_000.0)
  }
}
