use cadenza_config::{CadenzaPaths, ConfigBackend, ConfigError, TomlConfigBackend};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const SECTION: &str = "dataset";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DatasetConfig {
  /// CSV a cargar. Sin valor se usa `data/tracks.csv` bajo los directorios de Cadenza.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub path: Option<PathBuf>,

  /// Año mínimo de publicación; lo anterior se descarta al cargar.
  #[serde(default = "default_min_release_year")]
  pub min_release_year: i32,
}

fn default_min_release_year() -> i32 {
  1980
}

impl Default for DatasetConfig {
  fn default() -> Self {
    DatasetConfig { path: None, min_release_year: default_min_release_year() }
  }
}

impl DatasetConfig {
  /// Lee `[dataset]` y la vuelve a escribir para que el usuario vea los valores efectivos.
  pub fn load(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg: DatasetConfig = backend.load_section_with_default(SECTION)?;
    backend.save_section(SECTION, &cfg)?;
    Ok(cfg)
  }

  pub fn resolve_path(&self, paths: &CadenzaPaths) -> PathBuf {
    self.path.clone().unwrap_or_else(|| paths.default_dataset_file())
  }
}
