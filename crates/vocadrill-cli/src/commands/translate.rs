//! The `vocadrill translate` command.

use std::path::PathBuf;

use anyhow::Result;

use vocadrill_core::traits::FeedbackRequest;
use vocadrill_providers::config::{create_feedback_provider, load_config_from};

pub async fn execute(
    original: String,
    translation: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(!original.trim().is_empty(), "original must not be empty");
    anyhow::ensure!(
        !translation.trim().is_empty(),
        "translation must not be empty"
    );

    let config = load_config_from(config_path.as_deref())?;
    let Some(feedback_config) = &config.feedback else {
        anyhow::bail!(
            "no feedback provider configured. Add a [feedback] section to \
             vocadrill.toml or set VOCADRILL_GEMINI_KEY."
        );
    };
    let provider = create_feedback_provider(feedback_config);

    let request = FeedbackRequest {
        original,
        translation,
    };
    let feedback = provider.analyze(&request).await?;

    println!("{}", feedback.message);
    tracing::debug!("feedback latency: {}ms", feedback.latency_ms);

    Ok(())
}
