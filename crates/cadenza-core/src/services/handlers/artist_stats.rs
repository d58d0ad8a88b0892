use chrono::NaiveDate;
use tracing::debug;

use crate::catalog::{Catalog, TextField, contains_text};
use crate::domain::AudioFeature;
use crate::services::format;

pub const MISSING_ARTIST_REPLY: &str =
  "Which artist would you like to know about? Try \"tell me about the artist Adele\".";

/// Media, mínimo y máximo de un rasgo sobre las pistas del artista.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureStats {
  pub feature: AudioFeature,
  pub mean: f64,
  pub min: f64,
  pub max: f64,
}

impl FeatureStats {
  fn from_values(feature: AudioFeature, values: &[f64]) -> Option<Self> {
    if values.is_empty() {
      return None;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(Self { feature, mean, min, max })
  }
}

/// Agregados de un artista.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistStats {
  pub artist: String,
  pub total_songs: usize,
  pub avg_popularity: Option<f64>,
  pub most_recent: Option<NaiveDate>,
  pub features: Vec<FeatureStats>,
}

/// Quita la puntuación dejando letras, dígitos, `_` y espacios.
pub fn clean_artist_name(residual: &str) -> String {
  residual.chars().filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace()).collect::<String>().trim().to_string()
}

fn mean(values: &[f64]) -> Option<f64> {
  (!values.is_empty()).then(|| values.iter().sum::<f64>() / values.len() as f64)
}

impl ArtistStats {
  /// Busca el nombre como subcadena (sin mayúsculas) del campo de artistas.
  ///
  /// Es una coincidencia cruda: "ann" también encuentra a "Anna".
  pub fn compute(catalog: &Catalog, artist: &str) -> Option<Self> {
    let songs = catalog.find(contains_text(TextField::Artists, artist, true));
    if songs.is_empty() {
      return None;
    }
    debug!(artist, songs = songs.len(), "artist songs found");

    let schema = catalog.schema();

    let avg_popularity = if schema.popularity {
      mean(&songs.iter().filter_map(|t| t.popularity).collect::<Vec<_>>())
    } else {
      None
    };

    let most_recent = if schema.release_date { songs.iter().filter_map(|t| t.release_date).max() } else { None };

    let features = schema
      .display_features()
      .filter_map(|feature| {
        let values: Vec<f64> = songs.iter().filter_map(|t| t.feature(feature)).collect();
        FeatureStats::from_values(feature, &values)
      })
      .collect();

    Some(Self { artist: artist.to_string(), total_songs: songs.len(), avg_popularity, most_recent, features })
  }

  pub fn render(&self) -> String {
    let mut lines = vec![
      format!("Here's what I know about {}:", self.artist),
      format!("- **Total songs in the database**: {}", self.total_songs),
    ];

    if let Some(avg) = self.avg_popularity {
      lines.push(format!("- **Average popularity**: {avg:.2}/100"));
    }
    if let Some(date) = self.most_recent {
      lines.push(format!("- Most recent release: {}", format::date(date)));
    }

    lines.push(String::new());
    lines.push("Musical features:".to_string());
    for stats in &self.features {
      lines.push(format!("- **{}**:", format::feature_label(stats.feature)));
      lines.push(format!("  Average: {:.2}", stats.mean));
      lines.push(format!("  Range: {:.2} - {:.2}", stats.min, stats.max));
    }

    lines.join("\n")
  }
}

pub fn answer(catalog: &Catalog, residual: &str) -> String {
  if !catalog.schema().artists {
    return format::NO_ARTISTS_REPLY.to_string();
  }

  let artist = clean_artist_name(residual);
  if artist.is_empty() {
    return MISSING_ARTIST_REPLY.to_string();
  }

  match ArtistStats::compute(catalog, &artist) {
    Some(stats) => stats.render(),
    None => format!("I couldn't find any songs by {artist} in my database."),
  }
}
