pub mod adapter;
pub mod columns;
pub mod config;
pub mod loader;

pub use adapter::CsvCatalogSource;
pub use config::DatasetConfig;
pub use loader::{DatasetError, load_catalog, load_catalog_from_reader};
