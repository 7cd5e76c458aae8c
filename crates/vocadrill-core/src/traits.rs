//! Trait definitions for external collaborators.
//!
//! The drill engine itself is pure and synchronous; the word list and the
//! translation-feedback capability arrive from outside. These async traits
//! are implemented by the `vocadrill-providers` crate.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::model::Word;

// ---------------------------------------------------------------------------
// Word source trait
// ---------------------------------------------------------------------------

/// Trait for backends that supply the vocabulary list.
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Human-readable source name (e.g. "http", "file").
    fn name(&self) -> &str;

    /// Fetch the full word list. A one-shot call; the session owns the
    /// result afterwards.
    async fn fetch_words(&self) -> anyhow::Result<Vec<Word>>;
}

// ---------------------------------------------------------------------------
// Translation feedback trait
// ---------------------------------------------------------------------------

/// Trait for generative backends that review a paragraph translation.
#[async_trait]
pub trait FeedbackProvider: Send + Sync {
    /// Human-readable provider name (e.g. "gemini").
    fn name(&self) -> &str;

    /// Analyze a translation attempt and produce feedback.
    async fn analyze(&self, request: &FeedbackRequest) -> anyhow::Result<Feedback>;
}

/// A translation attempt to review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRequest {
    /// The Vietnamese original paragraph.
    pub original: String,
    /// The user's English translation.
    pub translation: String,
}

/// Feedback on a translation attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    /// The feedback message (in Vietnamese, per product convention).
    pub message: String,
    /// Latency of the provider call in milliseconds.
    pub latency_ms: u64,
}

/// Instruction template sent with every feedback request. The `{original}`
/// and `{translation}` markers are substituted by [`feedback_prompt`].
pub const FEEDBACK_PROMPT_TEMPLATE: &str = "Analyze this English translation of a Vietnamese sentence. Provide feedback in Vietnamese about:\n1. Grammar errors\n2. Missing punctuation\n3. Suggested corrections\n4. Overall accuracy\n\nVietnamese original: \"{original}\"\nEnglish translation: \"{translation}\"\n\nFormat the response as a clear, constructive feedback message in Vietnamese.";

/// Render the feedback prompt for a request.
pub fn feedback_prompt(request: &FeedbackRequest) -> String {
    FEEDBACK_PROMPT_TEMPLATE
        .replace("{original}", &request.original)
        .replace("{translation}", &request.translation)
}
