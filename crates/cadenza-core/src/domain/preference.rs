use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::feature::AudioFeature;

/// Tipo de pregunta que se le hace al usuario para un parámetro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
  /// Valor en `[0, 1]`.
  UnitInterval,
  /// Tempo en BPM.
  Bpm,
}

/// Respuesta rechazada durante la recogida de preferencias.
///
/// El `Display` es directamente el mensaje de re-pregunta que ve el usuario.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnswerError {
  #[error("Please enter a valid number for {0}.")]
  NotANumber(AudioFeature),

  #[error("Please enter a realistic tempo value between {min} and {max} BPM.")]
  TempoOutOfRange { min: f64, max: f64 },

  #[error("Please enter a number between {min} and {max} for {feature}.")]
  OutOfRange { feature: AudioFeature, min: f64, max: f64 },
}

/// Rango cerrado `[lo, hi]` que admite filas en el filtro de recomendación.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
  pub lo: f64,
  pub hi: f64,
}

impl Band {
  pub fn contains(&self, value: f64) -> bool {
    self.lo <= value && value <= self.hi
  }
}

/// Descripción de un parámetro que el diálogo de preferencias pregunta.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
  pub feature: AudioFeature,
  /// Dominio válido de la respuesta.
  pub min: f64,
  pub max: f64,
  /// Semiancho de la banda de filtrado.
  pub tolerance: f64,
  /// Límites a los que se recorta la banda (`None` = sin techo).
  pub band_floor: f64,
  pub band_ceiling: Option<f64>,
  pub explanation: &'static str,
  pub prompt: PromptKind,
}

const fn unit_param(feature: AudioFeature, explanation: &'static str) -> ParameterSpec {
  ParameterSpec {
    feature,
    min: 0.0,
    max: 1.0,
    tolerance: 0.1,
    band_floor: 0.0,
    band_ceiling: Some(1.0),
    explanation,
    prompt: PromptKind::UnitInterval,
  }
}

/// Parámetros del diálogo de preferencias, en el orden en que se preguntan.
pub static PREFERENCE_PARAMS: [ParameterSpec; 5] = [
  unit_param(
    AudioFeature::Valence,
    "Valence describes the musical positiveness conveyed by a track. High valence sounds more positive \
     (happy, cheerful), while low valence sounds more negative (sad, angry).",
  ),
  unit_param(
    AudioFeature::Acousticness,
    "Acousticness measures how acoustic a song is. Higher values indicate more acoustic sounds.",
  ),
  unit_param(
    AudioFeature::Danceability,
    "Danceability describes how suitable a track is for dancing based on tempo, rhythm stability, \
     beat strength, and overall regularity.",
  ),
  unit_param(
    AudioFeature::Energy,
    "Energy represents a perceptual measure of intensity and activity. Energetic tracks feel fast, \
     loud, and noisy.",
  ),
  ParameterSpec {
    feature: AudioFeature::Tempo,
    min: 40.0,
    max: 250.0,
    tolerance: 10.0,
    band_floor: 0.0,
    band_ceiling: None,
    explanation: "Tempo is the speed of the song measured in beats per minute (BPM). Please enter your \
                  preferred tempo as a number.",
    prompt: PromptKind::Bpm,
  },
];

impl ParameterSpec {
  pub fn for_feature(feature: AudioFeature) -> Option<&'static ParameterSpec> {
    PREFERENCE_PARAMS.iter().find(|p| p.feature == feature)
  }

  /// Interpreta la respuesta del usuario y la valida contra el dominio.
  pub fn validate(&self, raw: &str) -> Result<f64, AnswerError> {
    let value: f64 = raw.trim().parse().map_err(|_| AnswerError::NotANumber(self.feature))?;

    // NaN cae fuera de cualquier rango
    if !(self.min..=self.max).contains(&value) {
      return Err(match self.prompt {
        PromptKind::Bpm => AnswerError::TempoOutOfRange { min: self.min, max: self.max },
        PromptKind::UnitInterval => AnswerError::OutOfRange { feature: self.feature, min: self.min, max: self.max },
      });
    }

    Ok(value)
  }

  /// Banda `value ± tolerance` recortada a los límites del parámetro.
  pub fn band(&self, value: f64) -> Band {
    let lo = (value - self.tolerance).max(self.band_floor);
    let hi = value + self.tolerance;
    let hi = match self.band_ceiling {
      Some(ceiling) => hi.min(ceiling),
      None => hi,
    };
    Band { lo, hi }
  }

  /// Explicación del parámetro seguida de la pregunta.
  pub fn prompt_text(&self) -> String {
    let hint = match self.prompt {
      PromptKind::UnitInterval => "(Enter a number between 0 and 1)",
      PromptKind::Bpm => "(Enter a number, e.g., 60-180 BPM)",
    };
    format!("{}\nWhat **{}** value do you prefer? {hint}", self.explanation, self.feature)
  }
}

/// Preferencias ya validadas, en orden de inserción (= orden de las preguntas).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceVector {
  entries: Vec<(AudioFeature, f64)>,
}

impl PreferenceVector {
  pub fn new() -> Self {
    Self::default()
  }

  /// Guarda `value`; si el rasgo ya estaba, lo reemplaza sin moverlo.
  pub fn insert(&mut self, feature: AudioFeature, value: f64) {
    match self.entries.iter_mut().find(|(f, _)| *f == feature) {
      Some(entry) => entry.1 = value,
      None => self.entries.push((feature, value)),
    }
  }

  pub fn get(&self, feature: AudioFeature) -> Option<f64> {
    self.entries.iter().find(|(f, _)| *f == feature).map(|(_, v)| *v)
  }

  pub fn iter(&self) -> impl Iterator<Item = (AudioFeature, f64)> + '_ {
    self.entries.iter().copied()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl FromIterator<(AudioFeature, f64)> for PreferenceVector {
  fn from_iter<I: IntoIterator<Item = (AudioFeature, f64)>>(iter: I) -> Self {
    let mut prefs = PreferenceVector::new();
    for (feature, value) in iter {
      prefs.insert(feature, value);
    }
    prefs
  }
}
