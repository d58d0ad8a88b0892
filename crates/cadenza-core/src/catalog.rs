use std::cmp::Ordering;

use tracing::info;

use crate::domain::{AudioFeature, Band, CatalogSchema, Track};
use crate::errors::CoreError;

/// Campo de texto de una pista sobre el que se puede buscar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
  Name,
  Artists,
}

impl TextField {
  fn of(self, track: &Track) -> &str {
    match self {
      TextField::Name => &track.name,
      TextField::Artists => &track.artists,
    }
  }
}

/// Vista de solo lectura sobre el dataset ya limpio.
///
/// Las pistas se guardan en el orden de ingesta, que es también el criterio de
/// desempate de todas las ordenaciones. No hay operaciones de escritura: una vez
/// construido, el catálogo se puede compartir entre sesiones sin bloqueo.
#[derive(Debug, Clone)]
pub struct Catalog {
  tracks: Vec<Track>,
  schema: CatalogSchema,
}

impl Catalog {
  /// Construye el catálogo comprobando que estén los rasgos obligatorios.
  pub fn new(tracks: Vec<Track>, schema: CatalogSchema) -> Result<Self, CoreError> {
    let missing = schema.missing_mandatory();
    if !missing.is_empty() {
      return Err(CoreError::MissingFeatureColumns(missing));
    }

    info!("catalog ready with {} tracks", tracks.len());
    Ok(Self { tracks, schema })
  }

  pub fn schema(&self) -> &CatalogSchema {
    &self.schema
  }

  pub fn tracks(&self) -> &[Track] {
    &self.tracks
  }

  pub fn len(&self) -> usize {
    self.tracks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tracks.is_empty()
  }

  pub fn all(&self) -> Vec<&Track> {
    self.tracks.iter().collect()
  }

  /// Pistas que cumplen `predicate`, en orden de ingesta. Sin coincidencias
  /// devuelve un vector vacío.
  pub fn find<P>(&self, predicate: P) -> Vec<&Track>
  where
    P: Fn(&Track) -> bool,
  {
    self.tracks.iter().filter(|t| predicate(*t)).collect()
  }

  /// Ordena por popularidad descendente.
  ///
  /// La ordenación es estable: a igual popularidad se conserva el orden de
  /// entrada, y las pistas sin popularidad van al final.
  pub fn sort_by_popularity_desc(mut tracks: Vec<&Track>) -> Vec<&Track> {
    tracks.sort_by(|a, b| match (a.popularity, b.popularity) {
      (Some(x), Some(y)) => y.total_cmp(&x),
      (Some(_), None) => Ordering::Less,
      (None, Some(_)) => Ordering::Greater,
      (None, None) => Ordering::Equal,
    });
    tracks
  }

  /// Las `n` más populares de `tracks`.
  pub fn top_by_popularity(tracks: Vec<&Track>, n: usize) -> Vec<&Track> {
    let mut sorted = Self::sort_by_popularity_desc(tracks);
    sorted.truncate(n);
    sorted
  }
}

/// Predicado de búsqueda por subcadena, sin escapar ni límites de palabra.
pub fn contains_text(field: TextField, needle: &str, case_insensitive: bool) -> impl Fn(&Track) -> bool {
  let needle = if case_insensitive { needle.to_lowercase() } else { needle.to_string() };
  move |track: &Track| {
    let haystack = field.of(track);
    if case_insensitive { haystack.to_lowercase().contains(&needle) } else { haystack.contains(&needle) }
  }
}

/// Igualdad exacta ignorando mayúsculas.
pub fn equals_text(field: TextField, needle: &str) -> impl Fn(&Track) -> bool {
  let needle = needle.to_lowercase();
  move |track: &Track| field.of(track).to_lowercase() == needle
}

/// Pistas cuyo rasgo cae dentro de la banda; sin valor nunca coincide.
pub fn within_band(feature: AudioFeature, band: Band) -> impl Fn(&Track) -> bool {
  move |track: &Track| track.feature(feature).is_some_and(|v| band.contains(v))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::AudioFeatures;

  fn track(name: &str, artists: &str, popularity: Option<f64>) -> Track {
    Track { name: name.into(), artists: artists.into(), popularity, ..Default::default() }
  }

  fn catalog(tracks: Vec<Track>) -> Catalog {
    Catalog::new(tracks, CatalogSchema::complete()).unwrap()
  }

  #[test]
  fn rejects_schema_without_mandatory_features() {
    let schema = CatalogSchema::complete().without_feature(AudioFeature::Energy);
    let err = Catalog::new(vec![], schema).unwrap_err();
    assert_eq!(err.to_string(), "catalog is missing mandatory feature columns: energy");
  }

  #[test]
  fn find_returns_empty_on_no_match() {
    let catalog = catalog(vec![track("Imagine", "John Lennon", Some(80.0))]);
    assert!(catalog.find(equals_text(TextField::Name, "yesterday")).is_empty());
  }

  #[test]
  fn equals_text_ignores_case() {
    let catalog = catalog(vec![track("Imagine", "John Lennon", Some(80.0)), track("Imagine Me", "X", None)]);
    let found = catalog.find(equals_text(TextField::Name, "IMAGINE"));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].artists, "John Lennon");
  }

  #[test]
  fn contains_text_is_raw_substring() {
    let catalog = catalog(vec![track("a", "Anna", None), track("b", "Ann Peebles", None), track("c", "Bob", None)]);
    let found = catalog.find(contains_text(TextField::Artists, "ann", true));
    assert_eq!(found.len(), 2);

    let found = catalog.find(contains_text(TextField::Artists, "ann", false));
    assert!(found.is_empty());
  }

  #[test]
  fn popularity_sort_is_stable_and_puts_unknown_last() {
    let catalog = catalog(vec![
      track("first", "", Some(50.0)),
      track("unknown", "", None),
      track("second", "", Some(50.0)),
      track("top", "", Some(90.0)),
    ]);
    let sorted = Catalog::sort_by_popularity_desc(catalog.all());
    let names: Vec<_> = sorted.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["top", "first", "second", "unknown"]);
  }

  #[test]
  fn within_band_is_inclusive() {
    let band = Band { lo: 0.4, hi: 0.6 };
    let t = Track { features: AudioFeatures { valence: 0.6, ..Default::default() }, ..Default::default() };
    assert!(within_band(AudioFeature::Valence, band)(&t));
    assert!(!within_band(AudioFeature::Loudness, band)(&t));
  }
}
