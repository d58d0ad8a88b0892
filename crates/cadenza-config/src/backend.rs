use crate::error::ConfigError;
use crate::io::atomic_write_str;
use crate::paths::CadenzaPaths;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

// toml_edit para escribir sin perder comentarios del usuario
use toml_edit::{DocumentMut, Item};

pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

/// Backend de configuración sobre un único `cadenza.toml`, una sección por componente.
pub struct TomlConfigBackend {
  config_file: PathBuf,
}

impl TomlConfigBackend {
  pub fn new(paths: &CadenzaPaths) -> Self {
    Self { config_file: paths.config_file() }
  }

  /// Usa un fichero concreto en vez del resuelto por [`CadenzaPaths`].
  pub fn with_file(config_file: impl Into<PathBuf>) -> Self {
    Self { config_file: config_file.into() }
  }

  pub fn config_file(&self) -> &Path {
    &self.config_file
  }

  /// Como [`ConfigBackend::load_section`], pero un fichero o sección ausentes
  /// devuelven `T::default()` en lugar de error.
  pub fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    use std::io::ErrorKind;

    let content = match fs::read_to_string(&self.config_file) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        debug!("config file {:?} not found, using defaults for [{section}]", self.config_file);
        return Ok(T::default());
      }
      Err(e) => return Err(e.into()),
    };

    let toml_val: toml::Value = toml::from_str(&content)?;

    let Some(table) = toml_val.get(section) else {
      return Ok(T::default());
    };

    decode_section(table.clone(), section)
  }
}

fn decode_section<T: DeserializeOwned>(table: toml::Value, section: &str) -> Result<T, ConfigError> {
  table.try_into().map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let content = fs::read_to_string(&self.config_file)?;
    let toml_val: toml::Value = toml::from_str(&content)?;

    let table = toml_val
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {:?}", self.config_file)))?;

    decode_section(table.clone(), section)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    use std::io::ErrorKind;

    // 1) Documento actual, o uno vacío si todavía no existe.
    let mut doc: DocumentMut = match fs::read_to_string(&self.config_file) {
      Ok(content) => {
        content.parse::<DocumentMut>().map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?
      }
      Err(e) if e.kind() == ErrorKind::NotFound => DocumentMut::new(),
      Err(e) => return Err(e.into()),
    };

    // 2) La sección se serializa con `toml` y se reinterpreta como tabla editable.
    let section_str =
      toml::to_string(value).map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;

    let section_doc = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?;

    // 3) Reemplazar solo esa sección; el resto del documento queda intacto.
    doc[section] = Item::Table(section_doc.as_table().clone());

    atomic_write_str(&self.config_file, &doc.to_string())?;
    debug!("saved section [{section}] to {:?}", self.config_file);

    Ok(())
  }
}
