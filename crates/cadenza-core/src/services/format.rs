//! Helpers de presentación compartidos por los handlers.

use chrono::NaiveDate;

use crate::domain::{AudioFeature, CatalogSchema, Track};

pub const NO_TITLES_REPLY: &str = "Sorry, my database has no song titles, so I can't list songs.";

pub const NO_ARTISTS_REPLY: &str = "Sorry, my database has no artist information.";

/// Número sin decimales superfluos: `80.0` se muestra como `80`.
pub fn number(value: f64) -> String {
  if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 { format!("{value:.0}") } else { value.to_string() }
}

/// Fecha larga en inglés, p.ej. `March 5, 2021`.
pub fn date(value: NaiveDate) -> String {
  value.format("%B %-d, %Y").to_string()
}

/// Primera letra en mayúscula (`valence` -> `Valence`).
pub fn capitalize(text: &str) -> String {
  let mut chars = text.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

pub fn feature_label(feature: AudioFeature) -> String {
  capitalize(feature.column())
}

/// Título (entre comillas si `quoted`) seguido de la autoría, que se omite
/// cuando el catálogo no tiene columna de artistas.
pub fn credit(track: &Track, schema: &CatalogSchema, quoted: bool) -> String {
  let title = if quoted { format!("\"{}\"", track.name) } else { track.name.clone() };
  if schema.artists { format!("{title} by {}", track.artists) } else { title }
}

/// Línea de lista: `- "name" by artists`.
pub fn song_line(track: &Track, schema: &CatalogSchema, quoted: bool) -> String {
  format!("- {}", credit(track, schema, quoted))
}
