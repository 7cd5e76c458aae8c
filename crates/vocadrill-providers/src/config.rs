//! Application configuration and provider factory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use vocadrill_core::blanks::DEFAULT_BLANK_RATIO;
use vocadrill_core::traits::{FeedbackProvider, WordSource};

use crate::file::FileWordSource;
use crate::gemini::GeminiFeedback;
use crate::http::HttpWordSource;

/// Where the word list comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceConfig {
    Http {
        base_url: String,
    },
    File {
        path: PathBuf,
    },
}

/// Configuration for the translation-feedback provider.
///
/// Note: Custom Debug impl masks the API key to prevent accidental
/// exposure in logs.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FeedbackConfig {
    Gemini {
        api_key: String,
        #[serde(default)]
        base_url: Option<String>,
        #[serde(default)]
        model: Option<String>,
    },
}

impl std::fmt::Debug for FeedbackConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedbackConfig::Gemini {
                api_key: _,
                base_url,
                model,
            } => f
                .debug_struct("Gemini")
                .field("api_key", &"***")
                .field("base_url", base_url)
                .field("model", model)
                .finish(),
        }
    }
}

/// Top-level vocadrill configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocadrillConfig {
    /// Word-list source.
    #[serde(default = "default_source")]
    pub source: SourceConfig,
    /// Translation-feedback provider, if configured.
    #[serde(default)]
    pub feedback: Option<FeedbackConfig>,
    /// Default fraction of characters to blank.
    #[serde(default = "default_ratio")]
    pub blank_ratio: f64,
    /// Hold time on a correct answer before advancing, in milliseconds.
    #[serde(default = "default_advance_delay")]
    pub advance_delay_ms: u64,
    /// Shuffle the word list at session start.
    #[serde(default = "default_shuffle")]
    pub shuffle: bool,
}

fn default_source() -> SourceConfig {
    SourceConfig::File {
        path: PathBuf::from("word-sets"),
    }
}
fn default_ratio() -> f64 {
    DEFAULT_BLANK_RATIO
}
fn default_advance_delay() -> u64 {
    1500
}
fn default_shuffle() -> bool {
    true
}

impl Default for VocadrillConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            feedback: None,
            blank_ratio: default_ratio(),
            advance_delay_ms: default_advance_delay(),
            shuffle: default_shuffle(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

fn resolve_feedback_config(config: &FeedbackConfig) -> FeedbackConfig {
    match config {
        FeedbackConfig::Gemini {
            api_key,
            base_url,
            model,
        } => FeedbackConfig::Gemini {
            api_key: resolve_env_vars(api_key),
            base_url: base_url.as_ref().map(|u| resolve_env_vars(u)),
            model: model.clone(),
        },
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `vocadrill.toml` in the current directory
/// 2. `~/.config/vocadrill/config.toml`
///
/// Environment variable override: `VOCADRILL_GEMINI_KEY`.
pub fn load_config() -> Result<VocadrillConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<VocadrillConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("vocadrill.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<VocadrillConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => VocadrillConfig::default(),
    };

    // Apply env var override
    if let Ok(key) = std::env::var("VOCADRILL_GEMINI_KEY") {
        match config.feedback.as_mut() {
            Some(FeedbackConfig::Gemini { api_key, .. }) => *api_key = key,
            None => {
                config.feedback = Some(FeedbackConfig::Gemini {
                    api_key: key,
                    base_url: None,
                    model: None,
                });
            }
        }
    }

    config.feedback = config.feedback.as_ref().map(resolve_feedback_config);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("vocadrill"))
}

/// Create a word source from its configuration.
pub fn create_word_source(config: &SourceConfig) -> Arc<dyn WordSource> {
    match config {
        SourceConfig::Http { base_url } => Arc::new(HttpWordSource::new(base_url)),
        SourceConfig::File { path } => Arc::new(FileWordSource::new(path.clone())),
    }
}

/// Create a feedback provider from its configuration.
pub fn create_feedback_provider(config: &FeedbackConfig) -> Arc<dyn FeedbackProvider> {
    match config {
        FeedbackConfig::Gemini {
            api_key,
            base_url,
            model,
        } => Arc::new(GeminiFeedback::new(
            api_key,
            base_url.clone(),
            model.clone(),
        )),
    }
}
