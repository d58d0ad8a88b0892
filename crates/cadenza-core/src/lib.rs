pub mod catalog;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

pub use catalog::Catalog;
pub use errors::CoreError;
pub use services::{ChatSettings, Chatbot};
