pub mod canned;
pub mod chatbot;
pub mod classifier;
pub mod dialogue;
pub mod format;
pub mod fuzzy;
pub mod handlers;
pub mod recommender;
pub mod settings;

pub use chatbot::Chatbot;
pub use classifier::{FallbackResponder, IntentClassifier, IntentMatch, UNRECOGNIZED_REPLY};
pub use dialogue::PreferenceDialogue;
pub use recommender::Recommendation;
pub use settings::ChatSettings;
