//! HTTP word source against the vocabulary backend API.
//!
//! The backend exposes `GET {base_url}/words` returning a JSON array of
//! vocabulary entries. Bookkeeping fields the backend adds (`id`,
//! timestamps) are accepted and dropped.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use vocadrill_core::model::Word;
use vocadrill_core::traits::WordSource;

use crate::error::SourceError;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Word source backed by the vocabulary HTTP API.
pub struct HttpWordSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpWordSource {
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }
}

/// Wire shape of one entry as the backend serves it.
#[derive(Deserialize)]
struct WireWord {
    english: String,
    vietnamese: String,
    #[serde(default)]
    ipa: Option<String>,
    #[serde(default, rename = "type")]
    word_type: Option<String>,
}

#[async_trait]
impl WordSource for HttpWordSource {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_words(&self) -> anyhow::Result<Vec<Word>> {
        let response = self
            .client
            .get(format!("{}/words", self.base_url))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SourceError::Timeout(DEFAULT_TIMEOUT_SECS)
                } else if e.is_connect() {
                    SourceError::NetworkError(format!(
                        "word API not reachable at {}",
                        self.base_url
                    ))
                } else {
                    SourceError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        if status == 404 {
            return Err(SourceError::NotFound(format!(
                "no /words endpoint at {}",
                self.base_url
            ))
            .into());
        }
        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::ApiError {
                status,
                message: body,
            }
            .into());
        }

        let entries: Vec<WireWord> =
            response.json().await.map_err(|e| SourceError::ApiError {
                status: 0,
                message: format!("failed to parse word list: {e}"),
            })?;

        Ok(entries
            .into_iter()
            .map(|w| Word {
                english: w.english,
                vietnamese: w.vietnamese,
                ipa: w.ipa,
                word_type: w.word_type,
            })
            .collect())
    }
}
