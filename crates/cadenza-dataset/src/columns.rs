use std::collections::BTreeMap;

use cadenza_core::domain::AudioFeature;
use csv::StringRecord;

pub const KEYS_NAME: &[&str] = &["name", "track_name", "trackname", "title", "song"];

pub const KEYS_ARTISTS: &[&str] = &["artists", "artist", "artist_name", "artistname", "artists_names"];

pub const KEYS_POPULARITY: &[&str] = &["popularity", "track_popularity"];

// "Release Date" queda como "releasedate" tras normalizar
pub const KEYS_RELEASE_DATE: &[&str] = &["release_date", "releasedate", "album_release_date"];

pub const KEYS_YEAR: &[&str] = &["year", "release_year", "releaseyear"];

pub const KEYS_DURATION: &[&str] = &["duration_ms", "durationms", "duration"];

/// Cabecera en minúsculas y sin nada que no sea letra, dígito o `_`.
pub fn normalize_header(raw: &str) -> String {
  raw.chars().filter(|c| c.is_alphanumeric() || *c == '_').flat_map(char::to_lowercase).collect()
}

/// Índice de la primera cabecera que coincide con alguna clave, en el orden de `keys`.
pub fn find_column(headers: &[String], keys: &[&str]) -> Option<usize> {
  keys.iter().find_map(|key| headers.iter().position(|h| h == key))
}

/// Posición de cada columna conocida en el CSV.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
  pub name: Option<usize>,
  pub artists: Option<usize>,
  pub popularity: Option<usize>,
  pub release_date: Option<usize>,
  pub year: Option<usize>,
  pub duration: Option<usize>,
  pub features: BTreeMap<AudioFeature, usize>,
}

impl ColumnMap {
  pub fn resolve(headers: &StringRecord) -> Self {
    let normalized: Vec<String> = headers.iter().map(normalize_header).collect();

    // los rasgos se reconocen con el mismo parser del dominio; gana la primera columna
    let mut features = BTreeMap::new();
    for (idx, header) in normalized.iter().enumerate() {
      if let Ok(feature) = header.parse::<AudioFeature>() {
        features.entry(feature).or_insert(idx);
      }
    }

    Self {
      name: find_column(&normalized, KEYS_NAME),
      artists: find_column(&normalized, KEYS_ARTISTS),
      popularity: find_column(&normalized, KEYS_POPULARITY),
      release_date: find_column(&normalized, KEYS_RELEASE_DATE),
      year: find_column(&normalized, KEYS_YEAR),
      duration: find_column(&normalized, KEYS_DURATION),
      features,
    }
  }

  pub fn missing_mandatory(&self) -> Vec<AudioFeature> {
    AudioFeature::MANDATORY.into_iter().filter(|f| !self.features.contains_key(f)).collect()
  }
}
