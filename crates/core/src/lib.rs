pub mod intent;
pub mod models;
pub mod responder;
pub mod tables;

pub use intent::{extract_entities, extract_intent, normalize_text};
pub use models::*;
pub use responder::{generate_contextual_response, welcome_bundle};
