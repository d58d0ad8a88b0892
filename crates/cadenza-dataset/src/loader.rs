use std::fs::File;
use std::io::Read;
use std::path::Path;

use cadenza_core::domain::{AudioFeature, AudioFeatures, CatalogSchema, Track};
use cadenza_core::{Catalog, CoreError};
use chrono::{Datelike, NaiveDate};
use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;
use tracing::{info, warn};

use crate::columns::ColumnMap;

#[derive(Debug, Error)]
pub enum DatasetError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("csv error: {0}")]
  Csv(#[from] csv::Error),

  #[error("missing mandatory columns: {}", .0.iter().map(|f| f.column()).collect::<Vec<_>>().join(", "))]
  MissingColumns(Vec<AudioFeature>),

  #[error("dataset has neither a release date nor a year column")]
  NoReleaseYear,

  #[error("no tracks left after cleaning the dataset")]
  Empty,

  #[error(transparent)]
  Catalog(#[from] CoreError),
}

/// Fecha de publicación tal como suele venir en los CSV de música:
/// `2021-03-05`, `2021-03`, `2021`, `03/05/2021` o con hora detrás.
pub fn parse_release_date(raw: &str) -> Option<NaiveDate> {
  let raw = raw.trim();
  let date_part = raw.split(['T', ' ']).next().unwrap_or(raw);

  if let Ok(d) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
    return Some(d);
  }
  if let Ok(d) = NaiveDate::parse_from_str(&format!("{date_part}-01"), "%Y-%m-%d") {
    return Some(d);
  }
  if let Ok(d) = NaiveDate::parse_from_str(date_part, "%m/%d/%Y") {
    return Some(d);
  }
  if date_part.len() == 4 {
    return date_part.parse::<i32>().ok().and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1));
  }
  None
}

/// Año numérico; acepta `1999` y `1999.0`.
pub fn parse_year(raw: &str) -> Option<i32> {
  let raw = raw.trim();
  if let Ok(y) = raw.parse::<i32>() {
    return Some(y);
  }
  raw.parse::<f64>().ok().filter(|y| y.is_finite() && y.fract() == 0.0).map(|y| y as i32)
}

fn parse_number(raw: &str) -> Option<f64> {
  raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn cell(record: &StringRecord, idx: Option<usize>) -> Option<&str> {
  idx.and_then(|i| record.get(i)).map(str::trim).filter(|s| !s.is_empty())
}

/// Fila ya con fecha resuelta, pendiente de convertir los rasgos.
struct DatedRow {
  record: StringRecord,
  release_date: Option<NaiveDate>,
  release_year: i32,
}

/// Lee un CSV desde disco y lo convierte en un [`Catalog`] limpio.
pub fn load_catalog(path: &Path, min_release_year: i32) -> Result<Catalog, DatasetError> {
  info!("loading dataset from {:?}", path);
  let file = File::open(path)?;
  load_catalog_from_reader(file, min_release_year)
}

/// Normaliza cabeceras, resuelve el año de publicación, descarta filas
/// anteriores a `min_release_year` y filas con rasgos obligatorios no
/// numéricos.
pub fn load_catalog_from_reader<R: Read>(reader: R, min_release_year: i32) -> Result<Catalog, DatasetError> {
  let mut rdr = ReaderBuilder::new().has_headers(true).flexible(true).trim(csv::Trim::Headers).from_reader(reader);
  let headers = rdr.headers()?.clone();
  let columns = ColumnMap::resolve(&headers);

  let missing = columns.missing_mandatory();
  if !missing.is_empty() {
    warn!("available columns: {:?}", headers.iter().collect::<Vec<_>>());
    return Err(DatasetError::MissingColumns(missing));
  }
  if columns.release_date.is_none() && columns.year.is_none() {
    return Err(DatasetError::NoReleaseYear);
  }

  let records = rdr.records().collect::<Result<Vec<_>, _>>()?;
  let rows_read = records.len();

  // 1) Año de publicación: la fecha manda si la columna existe
  let dated: Vec<DatedRow> = records
    .into_iter()
    .filter_map(|record| {
      if columns.release_date.is_some() {
        let date = cell(&record, columns.release_date).and_then(parse_release_date)?;
        Some(DatedRow { record, release_date: Some(date), release_year: date.year() })
      } else {
        let year = cell(&record, columns.year).and_then(parse_year)?;
        Some(DatedRow { record, release_date: None, release_year: year })
      }
    })
    .collect();
  info!(rows_read, with_release_year = dated.len(), "release years resolved");

  // 2) Filtro por año
  let recent: Vec<DatedRow> = dated.into_iter().filter(|r| r.release_year >= min_release_year).collect();
  info!(min_release_year, remaining = recent.len(), "filtered by release year");
  if recent.is_empty() {
    return Err(DatasetError::Empty);
  }

  // 3) Rasgos obligatorios numéricos
  let before = recent.len();
  let tracks: Vec<Track> = recent.into_iter().filter_map(|row| to_track(&columns, row)).collect();
  if tracks.len() < before {
    warn!(dropped = before - tracks.len(), "rows without numeric mandatory features dropped");
  }
  if tracks.is_empty() {
    return Err(DatasetError::Empty);
  }

  let schema = schema_for(&columns);
  info!(tracks = tracks.len(), "dataset cleaned");
  Ok(Catalog::new(tracks, schema)?)
}

fn to_track(columns: &ColumnMap, row: DatedRow) -> Option<Track> {
  let record = &row.record;
  let feature = |f: AudioFeature| cell(record, columns.features.get(&f).copied()).and_then(parse_number);

  let features = AudioFeatures {
    valence: feature(AudioFeature::Valence)?,
    acousticness: feature(AudioFeature::Acousticness)?,
    danceability: feature(AudioFeature::Danceability)?,
    energy: feature(AudioFeature::Energy)?,
    tempo: feature(AudioFeature::Tempo)?,
    instrumentalness: feature(AudioFeature::Instrumentalness),
    speechiness: feature(AudioFeature::Speechiness),
    loudness: feature(AudioFeature::Loudness),
  };

  Some(Track {
    name: cell(record, columns.name).unwrap_or_default().to_string(),
    artists: cell(record, columns.artists).unwrap_or_default().to_string(),
    release_date: row.release_date,
    release_year: Some(row.release_year),
    popularity: cell(record, columns.popularity).and_then(parse_number),
    duration_ms: cell(record, columns.duration).and_then(parse_number),
    features,
  })
}

fn schema_for(columns: &ColumnMap) -> CatalogSchema {
  let mut schema = CatalogSchema::empty().with_features(columns.features.keys().copied());
  schema.name = columns.name.is_some();
  schema.artists = columns.artists.is_some();
  schema.popularity = columns.popularity.is_some();
  schema.release_date = columns.release_date.is_some();
  schema.release_year = true;
  schema.duration = columns.duration.is_some();
  schema
}

#[cfg(test)]
mod tests {
  use super::*;

  const HEADER: &str = "name,artists,release_date,popularity,duration_ms,valence,acousticness,danceability,energy,tempo";

  fn load(body: &str) -> Result<Catalog, DatasetError> {
    load_catalog_from_reader(format!("{HEADER}\n{body}").as_bytes(), 1980)
  }

  #[test]
  fn parses_common_date_shapes() {
    let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d);
    assert_eq!(parse_release_date("2021-03-05"), d(2021, 3, 5));
    assert_eq!(parse_release_date("2021-03"), d(2021, 3, 1));
    assert_eq!(parse_release_date("2021"), d(2021, 1, 1));
    assert_eq!(parse_release_date("2021-03-05T10:00:00Z"), d(2021, 3, 5));
    assert_eq!(parse_release_date("03/05/2021"), d(2021, 3, 5));
    assert_eq!(parse_release_date("soon"), None);
  }

  #[test]
  fn parses_float_years() {
    assert_eq!(parse_year("1999"), Some(1999));
    assert_eq!(parse_year("1999.0"), Some(1999));
    assert_eq!(parse_year("1999.5"), None);
    assert_eq!(parse_year("n/a"), None);
  }

  #[test]
  fn loads_and_cleans_rows() {
    let catalog = load(
      "Imagine,John Lennon,1988-10-04,80,183000,0.5,0.9,0.5,0.3,75\n\
       Old,Someone,1975-01-01,50,100000,0.5,0.5,0.5,0.5,100\n\
       Broken,Someone,not a date,50,100000,0.5,0.5,0.5,0.5,100\n\
       NoTempo,Someone,2001-01-01,50,100000,0.5,0.5,0.5,0.5,fast\n\
       Fresh,Someone,2024-05,,,0.1,0.2,0.3,0.4,128\n",
    )
    .unwrap();

    let names: Vec<_> = catalog.tracks().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Imagine", "Fresh"]);

    let fresh = &catalog.tracks()[1];
    assert_eq!(fresh.popularity, None);
    assert_eq!(fresh.release_year, Some(2024));
    assert_eq!(fresh.features.tempo, 128.0);

    let schema = catalog.schema();
    assert!(schema.popularity && schema.release_date && schema.duration);
    assert!(!schema.has_feature(AudioFeature::Loudness));
  }

  #[test]
  fn falls_back_to_year_column() {
    let csv = "name,artists,year,valence,acousticness,danceability,energy,tempo\n\
               A,X,1999.0,0.5,0.5,0.5,0.5,100\n\
               B,Y,unknown,0.5,0.5,0.5,0.5,100\n";
    let catalog = load_catalog_from_reader(csv.as_bytes(), 1980).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.tracks()[0].release_year, Some(1999));
    assert!(!catalog.schema().release_date);
  }

  #[test]
  fn rejects_missing_feature_columns() {
    let csv = "name,artists,year,valence,energy\nA,X,2000,0.5,0.5\n";
    let err = load_catalog_from_reader(csv.as_bytes(), 1980).unwrap_err();
    assert!(matches!(err, DatasetError::MissingColumns(ref m) if m.len() == 3));
    assert_eq!(err.to_string(), "missing mandatory columns: acousticness, danceability, tempo");
  }

  #[test]
  fn schema_reflects_the_header() {
    let csv = "year,popularity,valence,acousticness,danceability,energy,bpm\n2001,40,0.5,0.5,0.5,0.5,100\n";
    let catalog = load_catalog_from_reader(csv.as_bytes(), 1980).unwrap();
    let schema = catalog.schema();

    assert!(!schema.name);
    assert!(!schema.artists);
    assert!(!schema.release_date);
    assert!(!schema.duration);
    assert!(schema.popularity);
    assert!(schema.release_year);
    assert_eq!(catalog.tracks()[0].features.tempo, 100.0);
  }

  #[test]
  fn rejects_datasets_without_any_year() {
    let csv = "name,valence,acousticness,danceability,energy,tempo\nA,0.5,0.5,0.5,0.5,100\n";
    assert!(matches!(load_catalog_from_reader(csv.as_bytes(), 1980), Err(DatasetError::NoReleaseYear)));
  }

  #[test]
  fn everything_too_old_is_empty() {
    let err = load("Old,Someone,1975-01-01,50,100000,0.5,0.5,0.5,0.5,100\n").unwrap_err();
    assert!(matches!(err, DatasetError::Empty));
  }

  #[test]
  fn custom_minimum_year_is_honoured() {
    let body = "Old,Someone,1975-01-01,50,100000,0.5,0.5,0.5,0.5,100\n";
    let catalog = load_catalog_from_reader(format!("{HEADER}\n{body}").as_bytes(), 1970).unwrap();
    assert_eq!(catalog.len(), 1);
  }
}
