use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Variable que fuerza un layout portable bajo una sola raíz.
pub const BASE_DIR_ENV: &str = "CADENZA_BASE_DIR";

/// Directorios de Cadenza: configuración, datos (dataset) y caché (historial).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CadenzaPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
  pub data_dir: PathBuf,
  pub cache_dir: PathBuf,
}

impl CadenzaPaths {
  /// Layout portable: `config/`, `data/` y `cache/` dentro de `base`.
  pub fn portable(base: impl AsRef<Path>) -> Self {
    let base = base.as_ref();
    Self {
      base_dir: base.to_path_buf(),
      config_dir: base.join("config"),
      data_dir: base.join("data"),
      cache_dir: base.join("cache"),
    }
  }

  /// Directorios estándar del sistema operativo.
  pub fn system() -> Result<Self, ConfigError> {
    let dirs = ProjectDirs::from("com", "cadenza", "cadenza").ok_or(ConfigError::Directories)?;
    Ok(Self {
      base_dir: dirs.config_dir().to_path_buf(),
      config_dir: dirs.config_dir().to_path_buf(),
      data_dir: dirs.data_dir().to_path_buf(),
      cache_dir: dirs.cache_dir().to_path_buf(),
    })
  }

  /// Resuelve el layout (portable si `CADENZA_BASE_DIR` está definida) y crea
  /// los directorios que falten.
  pub fn detect() -> Result<Self, ConfigError> {
    let paths = match std::env::var_os(BASE_DIR_ENV) {
      Some(base) => Self::portable(base),
      None => Self::system()?,
    };
    paths.ensure_dirs()?;
    Ok(paths)
  }

  pub fn ensure_dirs(&self) -> Result<(), ConfigError> {
    for dir in [&self.config_dir, &self.data_dir, &self.cache_dir] {
      std::fs::create_dir_all(dir)?;
    }
    Ok(())
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("cadenza.toml")
  }

  /// Dataset usado cuando `[dataset]` no indica otra ruta.
  pub fn default_dataset_file(&self) -> PathBuf {
    self.data_dir.join("tracks.csv")
  }

  pub fn history_file(&self) -> PathBuf {
    self.cache_dir.join("history.txt")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn portable_layout_lives_under_base() {
    let tmp = tempdir().unwrap();
    let paths = CadenzaPaths::portable(tmp.path());

    assert_eq!(paths.config_file(), tmp.path().join("config/cadenza.toml"));
    assert_eq!(paths.default_dataset_file(), tmp.path().join("data/tracks.csv"));
    assert_eq!(paths.history_file(), tmp.path().join("cache/history.txt"));
    assert!(!paths.data_dir.exists());

    paths.ensure_dirs().unwrap();
    assert!(paths.config_dir.is_dir() && paths.data_dir.is_dir() && paths.cache_dir.is_dir());
  }

  #[test]
  fn detect_honours_base_dir_env() {
    let tmp = tempdir().unwrap();
    let original = std::env::var_os(BASE_DIR_ENV);
    unsafe { std::env::set_var(BASE_DIR_ENV, tmp.path()) };

    let detected = CadenzaPaths::detect();

    match original {
      Some(val) => unsafe { std::env::set_var(BASE_DIR_ENV, val) },
      None => unsafe { std::env::remove_var(BASE_DIR_ENV) },
    }

    let paths = detected.unwrap();
    assert_eq!(paths, CadenzaPaths::portable(tmp.path()));
    assert!(paths.cache_dir.is_dir());
  }
}
