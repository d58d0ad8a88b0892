use serde::{Deserialize, Serialize};
use std::fmt;

/// Objetivo del usuario reconocido a partir de frases disparadoras.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
  SongInformation,
  TrendingSongs,
  ArtistInformation,
  /// Recomendación directa sin preguntar preferencias.
  TopSongs,
  /// Arranca el diálogo de preferencias.
  RecommendSongs,
}

impl Intent {
  pub fn name(&self) -> &'static str {
    match self {
      Intent::SongInformation => "song_information",
      Intent::TrendingSongs => "trending_songs",
      Intent::ArtistInformation => "artist_information",
      Intent::TopSongs => "top_songs",
      Intent::RecommendSongs => "recommend_songs",
    }
  }
}

impl fmt::Display for Intent {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Tabla de intenciones en orden de prioridad.
///
/// El orden importa: gana la primera intención con alguna frase contenida en
/// el texto, y dentro de ella la primera frase declarada. Por eso las frases
/// más específicas van antes que las genéricas ("quick recommendation" antes
/// que "recommend").
pub static INTENTS: &[(Intent, &[&str])] = &[
  (
    Intent::SongInformation,
    &[
      "tell me about the song",
      "information about the song",
      "info about the song",
      "details about the song",
      "what do you know about the song",
      "song information for",
      "song info for",
    ],
  ),
  (
    Intent::TrendingSongs,
    &["trending songs", "latest trending", "what's trending", "whats trending", "top trending", "popular right now"],
  ),
  (
    Intent::ArtistInformation,
    &[
      "tell me about the artist",
      "information about the artist",
      "info about the artist",
      "artist statistics for",
      "artist stats for",
      "stats for artist",
      "statistics for artist",
    ],
  ),
  (
    Intent::TopSongs,
    &["quick recommendation", "just recommend something", "surprise me", "top songs", "most popular songs"],
  ),
  (
    Intent::RecommendSongs,
    &["recommend songs", "recommend me", "recommend some", "song recommendations", "suggest songs", "recommend"],
  ),
];
