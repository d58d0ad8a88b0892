use crate::catalog::Catalog;

#[derive(Debug, thiserror::Error)]
pub enum CatalogSourceError {
  #[error("io error: {0}")]
  Io(String),

  #[error("invalid dataset: {0}")]
  Invalid(String),

  #[error("internal error: {0}")]
  Internal(String),
}

/// Port que abstrae de dónde sale el catálogo limpio.
///
/// El adapter se encarga de leer, normalizar columnas, convertir tipos y
/// descartar filas inválidas; el núcleo solo recibe el [`Catalog`] terminado.
pub trait CatalogSource {
  fn load_catalog(&self) -> Result<Catalog, CatalogSourceError>;
}
