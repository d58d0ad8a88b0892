mod backend;
mod error;
mod io;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use error::ConfigError;
pub use io::atomic_write_str;
pub use paths::{BASE_DIR_ENV, CadenzaPaths};
