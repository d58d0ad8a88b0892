pub mod feature;
pub mod intent;
pub mod preference;
pub mod schema;
pub mod session;
pub mod track;

pub use feature::{AudioFeature, AudioFeatures};
pub use intent::{INTENTS, Intent};
pub use preference::{AnswerError, Band, PREFERENCE_PARAMS, ParameterSpec, PreferenceVector, PromptKind};
pub use schema::CatalogSchema;
pub use session::{Collection, SessionState};
pub use track::Track;
