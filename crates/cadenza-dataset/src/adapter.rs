use std::path::PathBuf;

use cadenza_config::CadenzaPaths;
use cadenza_core::Catalog;
use cadenza_core::ports::{CatalogSource, CatalogSourceError};

use crate::config::DatasetConfig;
use crate::loader::{DatasetError, load_catalog};

/// Implementación de `CatalogSource` sobre un fichero CSV.
#[derive(Debug, Clone)]
pub struct CsvCatalogSource {
  path: PathBuf,
  min_release_year: i32,
}

impl CsvCatalogSource {
  pub fn new(path: impl Into<PathBuf>, min_release_year: i32) -> Self {
    Self { path: path.into(), min_release_year }
  }

  pub fn from_config(config: &DatasetConfig, paths: &CadenzaPaths) -> Self {
    Self::new(config.resolve_path(paths), config.min_release_year)
  }

  pub fn path(&self) -> &PathBuf {
    &self.path
  }
}

impl CatalogSource for CsvCatalogSource {
  fn load_catalog(&self) -> Result<Catalog, CatalogSourceError> {
    load_catalog(&self.path, self.min_release_year).map_err(map_dataset_error)
  }
}

fn map_dataset_error(err: DatasetError) -> CatalogSourceError {
  match err {
    DatasetError::Io(e) => CatalogSourceError::Io(e.to_string()),
    DatasetError::Csv(e) if e.is_io_error() => CatalogSourceError::Io(e.to_string()),
    e @ (DatasetError::Csv(_) | DatasetError::MissingColumns(_) | DatasetError::NoReleaseYear | DatasetError::Empty) => {
      CatalogSourceError::Invalid(e.to_string())
    }
    DatasetError::Catalog(e) => CatalogSourceError::Internal(e.to_string()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::tempdir;

  #[test]
  fn loads_catalog_from_file() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("tracks.csv");
    fs::write(
      &path,
      "Name,Artists,Release Date,Popularity,Valence,Acousticness,Danceability,Energy,Tempo\n\
       Hello,Adele,2015-10-23,85,0.28,0.33,0.48,0.45,157.9\n",
    )
    .unwrap();

    let catalog = CsvCatalogSource::new(&path, 1980).load_catalog().unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.tracks()[0].artists, "Adele");
  }

  #[test]
  fn maps_errors_to_port_errors() {
    let tmp = tempdir().unwrap();
    let missing = CsvCatalogSource::new(tmp.path().join("nope.csv"), 1980);
    assert!(matches!(missing.load_catalog(), Err(CatalogSourceError::Io(_))));

    let path = tmp.path().join("bad.csv");
    fs::write(&path, "name,valence\nA,0.5\n").unwrap();
    let invalid = CsvCatalogSource::new(&path, 1980);
    assert!(matches!(invalid.load_catalog(), Err(CatalogSourceError::Invalid(_))));
  }
}
