use crate::catalog::{Catalog, TextField, contains_text, equals_text};
use crate::domain::Track;
use crate::services::format;

pub const MISSING_SONG_REPLY: &str =
  "Which song would you like to know about? Try \"tell me about the song Imagine by John Lennon\".";

/// Canción pedida, con el artista opcional que acota la búsqueda.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongQuery {
  pub song: String,
  pub artist: Option<String>,
}

impl SongQuery {
  /// Separa `"<song> by <artist>"` por el primer `" by "`; sin él todo el
  /// texto es la canción.
  pub fn parse(residual: &str) -> Self {
    let residual = residual.trim();
    if let Some((song, artist)) = residual.split_once(" by ") {
      let (song, artist) = (song.trim(), artist.trim());
      if !song.is_empty() && !artist.is_empty() {
        return Self { song: song.to_lowercase(), artist: Some(artist.to_lowercase()) };
      }
    }
    Self { song: residual.to_lowercase(), artist: None }
  }

  /// Nombre exacto (sin mayúsculas) y, si hay artista, subcadena en artistas.
  /// Con varias coincidencias se queda la más popular.
  pub fn find<'a>(&self, catalog: &'a Catalog) -> Option<&'a Track> {
    let mut matches = catalog.find(equals_text(TextField::Name, &self.song));
    if let Some(artist) = &self.artist {
      let by_artist = contains_text(TextField::Artists, artist, true);
      matches.retain(|t| by_artist(*t));
    }
    Catalog::sort_by_popularity_desc(matches).into_iter().next()
  }

  fn not_found(&self) -> String {
    match &self.artist {
      Some(artist) => format!("Sorry, I couldn't find the song '{}' by '{}'.", self.song, artist),
      None => format!("Sorry, I couldn't find any information about the song '{}'.", self.song),
    }
  }
}

/// Ficha de la pista: fecha, popularidad, duración y rasgos presentes.
///
/// Cada línea depende de que el catálogo tenga la columna correspondiente.
pub fn describe(catalog: &Catalog, track: &Track) -> String {
  let schema = catalog.schema();
  let title = format!("'{}'", track.name);
  let header = if schema.artists { format!("{title} by {}", track.artists) } else { title };
  let mut lines = vec![format!("Here's some information about {header}:")];

  let date = track.release_date.filter(|_| schema.release_date);
  let year = track.release_year.filter(|_| schema.release_year);
  if let Some(date) = date {
    lines.push(format!("- Release date: {}", format::date(date)));
  } else if let Some(year) = year {
    lines.push(format!("- Release year: {year}"));
  }
  if let Some(popularity) = track.popularity.filter(|_| schema.popularity) {
    lines.push(format!("- Popularity: {}/100", format::number(popularity)));
  }
  if let Some(minutes) = track.duration_minutes().filter(|_| schema.duration) {
    lines.push(format!("- Duration: {minutes:.2} minutes"));
  }

  lines.push(String::new());
  lines.push("Musical features:".to_string());
  for feature in schema.display_features() {
    if let Some(value) = track.feature(feature) {
      lines.push(format!("- {}: {}", format::feature_label(feature), format::number(value)));
    }
  }

  lines.join("\n")
}

pub fn answer(catalog: &Catalog, residual: &str) -> String {
  let schema = catalog.schema();
  if !schema.name {
    return format::NO_TITLES_REPLY.to_string();
  }

  let query = SongQuery::parse(residual);
  if query.song.is_empty() {
    return MISSING_SONG_REPLY.to_string();
  }
  if query.artist.is_some() && !schema.artists {
    return format::NO_ARTISTS_REPLY.to_string();
  }

  match query.find(catalog) {
    Some(track) => describe(catalog, track),
    None => query.not_found(),
  }
}
