//! vocadrill-providers — Word-list sources and feedback providers.
//!
//! Implements the `WordSource` and `FeedbackProvider` traits from
//! `vocadrill-core` against the HTTP word API, local TOML files, and the
//! Gemini generative API, plus mock implementations for tests.

pub mod config;
pub mod error;
pub mod file;
pub mod gemini;
pub mod http;
pub mod mock;

pub use config::{create_feedback_provider, create_word_source, load_config, VocadrillConfig};
