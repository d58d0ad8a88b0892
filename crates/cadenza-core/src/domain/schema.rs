use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::feature::AudioFeature;

/// Columnas disponibles en el catálogo cargado.
///
/// Se calcula una sola vez al cargar el dataset; los handlers consultan estas
/// banderas en vez de comprobar columnas en cada consulta. Una columna ausente
/// desactiva la funcionalidad que depende de ella, nunca provoca un fallo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSchema {
  pub name: bool,
  pub artists: bool,
  pub popularity: bool,
  pub release_date: bool,
  pub release_year: bool,
  pub duration: bool,
  features: BTreeSet<AudioFeature>,
}

impl CatalogSchema {
  /// Esquema sin ninguna columna; se completa con los `with_*`.
  pub fn empty() -> Self {
    Self {
      name: false,
      artists: false,
      popularity: false,
      release_date: false,
      release_year: false,
      duration: false,
      features: BTreeSet::new(),
    }
  }

  /// Todas las columnas conocidas presentes.
  pub fn complete() -> Self {
    Self {
      name: true,
      artists: true,
      popularity: true,
      release_date: true,
      release_year: true,
      duration: true,
      features: AudioFeature::MANDATORY.into_iter().chain(AudioFeature::OPTIONAL).collect(),
    }
  }

  /// Esquema mínimo aceptable: nombre, artistas y los cinco rasgos obligatorios.
  pub fn minimal() -> Self {
    Self { name: true, artists: true, ..Self::empty() }.with_features(AudioFeature::MANDATORY)
  }

  pub fn with_feature(mut self, feature: AudioFeature) -> Self {
    self.features.insert(feature);
    self
  }

  pub fn with_features(mut self, features: impl IntoIterator<Item = AudioFeature>) -> Self {
    self.features.extend(features);
    self
  }

  pub fn without_feature(mut self, feature: AudioFeature) -> Self {
    self.features.remove(&feature);
    self
  }

  pub fn has_feature(&self, feature: AudioFeature) -> bool {
    self.features.contains(&feature)
  }

  /// Rasgos presentes, en el orden de [`AudioFeature::DISPLAY_ORDER`].
  pub fn display_features(&self) -> impl Iterator<Item = AudioFeature> + '_ {
    AudioFeature::DISPLAY_ORDER.into_iter().filter(|f| self.has_feature(*f))
  }

  pub fn missing_mandatory(&self) -> Vec<AudioFeature> {
    AudioFeature::MANDATORY.into_iter().filter(|f| !self.has_feature(*f)).collect()
  }
}

impl Default for CatalogSchema {
  fn default() -> Self {
    Self::minimal()
  }
}
