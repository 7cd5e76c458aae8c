//! Mock word source and feedback provider for testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use vocadrill_core::model::Word;
use vocadrill_core::traits::{Feedback, FeedbackProvider, FeedbackRequest, WordSource};

/// A word source that serves a fixed in-memory list.
pub struct MockWordSource {
    words: Vec<Word>,
    call_count: AtomicU32,
}

impl MockWordSource {
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            words,
            call_count: AtomicU32::new(0),
        }
    }

    /// Number of fetches made against this source.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl WordSource for MockWordSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_words(&self) -> anyhow::Result<Vec<Word>> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        Ok(self.words.clone())
    }
}

/// A feedback provider that always returns the same message and records
/// the last request it saw.
pub struct MockFeedback {
    message: String,
    call_count: AtomicU32,
    last_request: Mutex<Option<FeedbackRequest>>,
}

impl MockFeedback {
    pub fn with_fixed_message(message: &str) -> Self {
        Self {
            message: message.to_string(),
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn last_request(&self) -> Option<FeedbackRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeedbackProvider for MockFeedback {
    fn name(&self) -> &str {
        "mock"
    }

    async fn analyze(&self, request: &FeedbackRequest) -> anyhow::Result<Feedback> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_request.lock().unwrap() = Some(request.clone());

        Ok(Feedback {
            message: self.message.clone(),
            latency_ms: 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_source_serves_fixed_words() {
        let source = MockWordSource::new(vec![Word::new("cat", "mèo")]);
        let words = source.fetch_words().await.unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test]
    async fn mock_feedback_records_request() {
        let provider = MockFeedback::with_fixed_message("Tốt lắm!");
        let request = FeedbackRequest {
            original: "Xin chào.".into(),
            translation: "Hello.".into(),
        };

        let feedback = provider.analyze(&request).await.unwrap();
        assert_eq!(feedback.message, "Tốt lắm!");
        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.last_request().unwrap().original, "Xin chào.");
    }
}
