//! Prompt templates
//!
//! All prompts are compiled into the binary; stages fill the placeholders
//! with `format!`.

mod embedded;

pub use embedded::{PLACE_SUGGESTION, ROUTE_ORDER, VOICE_EXTRACTION};
