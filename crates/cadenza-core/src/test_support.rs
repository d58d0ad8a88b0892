use chrono::NaiveDate;

use crate::catalog::Catalog;
use crate::domain::{AudioFeatures, CatalogSchema, Track};

pub fn track(name: &str, artists: &str, popularity: f64) -> Track {
  Track {
    name: name.to_string(),
    artists: artists.to_string(),
    popularity: Some(popularity),
    features: AudioFeatures { valence: 0.5, acousticness: 0.5, danceability: 0.5, energy: 0.5, tempo: 120.0, ..Default::default() },
    ..Default::default()
  }
}

pub fn released(mut track: Track, y: i32, m: u32, d: u32) -> Track {
  let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
  track.release_date = Some(date);
  track.release_year = Some(y);
  track
}

pub fn catalog(tracks: Vec<Track>) -> Catalog {
  Catalog::new(tracks, CatalogSchema::complete()).unwrap()
}

pub fn catalog_with(tracks: Vec<Track>, schema: CatalogSchema) -> Catalog {
  Catalog::new(tracks, schema).unwrap()
}
