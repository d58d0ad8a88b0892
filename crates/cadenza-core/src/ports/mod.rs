pub mod catalog_source;
pub mod clock;
pub mod reply_sink;

pub use catalog_source::{CatalogSource, CatalogSourceError};
pub use clock::{Clock, FixedClock, SystemClock};
pub use reply_sink::{CollectingSink, ReplySink};
