use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temporal junto a `path` con `.tmp` añadido al nombre completo
/// (`cadenza.toml` -> `cadenza.toml.tmp`).
fn sibling_tmp(path: &Path) -> PathBuf {
  let mut name = path.file_name().map(OsString::from).unwrap_or_default();
  name.push(".tmp");
  path.with_file_name(name)
}

/// Reemplaza `path` de forma atómica: escribe un temporal hermano, lo
/// sincroniza y lo renombra encima. Crea el directorio padre si falta.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    fs::create_dir_all(parent)?;
  }

  let tmp_path = sibling_tmp(path);
  let mut file = File::create(&tmp_path)?;
  file.write_all(contents.as_bytes())?;
  file.sync_all()?;
  drop(file);

  fs::rename(&tmp_path, path)
}
