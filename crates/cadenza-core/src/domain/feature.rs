use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Rasgos de audio numéricos que puede traer una fila del catálogo.
///
/// Los cinco primeros son obligatorios en cualquier catálogo válido
/// (ver [`AudioFeature::MANDATORY`]); el resto es opcional y su presencia
/// queda registrada en [`crate::domain::CatalogSchema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFeature {
  /// Positividad musical (0 = triste/tenso, 1 = alegre).
  Valence,
  /// Confianza en que la pista sea acústica.
  Acousticness,
  /// Qué tan bailable es la pista.
  Danceability,
  /// Intensidad percibida.
  Energy,
  /// Tempo estimado en BPM.
  Tempo,
  Instrumentalness,
  Speechiness,
  /// Sonoridad media en dB (normalmente negativa).
  Loudness,
}

impl AudioFeature {
  /// Columnas que el proveedor de datos debe garantizar.
  pub const MANDATORY: [AudioFeature; 5] = [
    AudioFeature::Valence,
    AudioFeature::Acousticness,
    AudioFeature::Danceability,
    AudioFeature::Energy,
    AudioFeature::Tempo,
  ];

  pub const OPTIONAL: [AudioFeature; 3] =
    [AudioFeature::Instrumentalness, AudioFeature::Speechiness, AudioFeature::Loudness];

  /// Orden en el que se describen los rasgos al usuario (ficha de canción y
  /// estadísticas de artista).
  pub const DISPLAY_ORDER: [AudioFeature; 8] = [
    AudioFeature::Valence,
    AudioFeature::Energy,
    AudioFeature::Danceability,
    AudioFeature::Tempo,
    AudioFeature::Acousticness,
    AudioFeature::Instrumentalness,
    AudioFeature::Speechiness,
    AudioFeature::Loudness,
  ];

  /// Nombre de columna normalizado (minúsculas, sin separadores).
  pub fn column(&self) -> &'static str {
    match self {
      AudioFeature::Valence => "valence",
      AudioFeature::Acousticness => "acousticness",
      AudioFeature::Danceability => "danceability",
      AudioFeature::Energy => "energy",
      AudioFeature::Tempo => "tempo",
      AudioFeature::Instrumentalness => "instrumentalness",
      AudioFeature::Speechiness => "speechiness",
      AudioFeature::Loudness => "loudness",
    }
  }
}

impl fmt::Display for AudioFeature {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.column())
  }
}

/// Error producido cuando una cadena no corresponde a ningún [`AudioFeature`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown audio feature: {input}")]
pub struct AudioFeatureParseError {
  pub input: String,
}

impl FromStr for AudioFeature {
  type Err = AudioFeatureParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.trim().to_lowercase().replace(['-', ' ', '_'], "");

    let feature = match normalized.as_str() {
      "valence" => AudioFeature::Valence,
      "acousticness" => AudioFeature::Acousticness,
      "danceability" => AudioFeature::Danceability,
      "energy" => AudioFeature::Energy,
      "tempo" | "bpm" => AudioFeature::Tempo,
      "instrumentalness" => AudioFeature::Instrumentalness,
      "speechiness" => AudioFeature::Speechiness,
      "loudness" => AudioFeature::Loudness,
      _ => return Err(AudioFeatureParseError { input: s.to_string() }),
    };

    Ok(feature)
  }
}

/// Valores de rasgos de audio de una pista.
///
/// Los obligatorios son `f64` planos; los opcionales quedan en `None` cuando
/// la columna no existe o la celda no pudo convertirse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
  pub valence: f64,
  pub acousticness: f64,
  pub danceability: f64,
  pub energy: f64,
  pub tempo: f64,
  pub instrumentalness: Option<f64>,
  pub speechiness: Option<f64>,
  pub loudness: Option<f64>,
}

impl AudioFeatures {
  pub fn get(&self, feature: AudioFeature) -> Option<f64> {
    match feature {
      AudioFeature::Valence => Some(self.valence),
      AudioFeature::Acousticness => Some(self.acousticness),
      AudioFeature::Danceability => Some(self.danceability),
      AudioFeature::Energy => Some(self.energy),
      AudioFeature::Tempo => Some(self.tempo),
      AudioFeature::Instrumentalness => self.instrumentalness,
      AudioFeature::Speechiness => self.speechiness,
      AudioFeature::Loudness => self.loudness,
    }
  }
}
