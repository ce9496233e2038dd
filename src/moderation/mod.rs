//! Content-safety gate for submitted text.
//!
//! The gate is an explicit two-stage pipeline: an AI classification
//! attempt (when a credential is configured) followed by a deterministic
//! local blocklist scan. It never fails — every call produces a
//! [`ModerationResult`] carrying the verdict and which stage produced it.

pub mod api;
pub mod blocklist;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the AI classification attempt. With `api_key`
/// unset the gate skips straight to the local scan.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModerationConfig {
    /// Bearer credential for the classification endpoint.
    #[serde(default)]
    pub api_key: Option<String>,

    /// OpenAI-compatible chat-completions URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Model identifier sent with each request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Whole-request timeout in seconds. A timed-out attempt is treated
    /// exactly like a network failure: fall back, never hang the caller.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_timeout_secs() -> u64 {
    8
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_api_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Which stage of the gate produced the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationSource {
    Openai,
    Local,
}

/// Verdict for one block of text. Returned synchronously to the caller
/// and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationResult {
    pub is_clean: bool,
    pub reason: String,
    pub source: ModerationSource,
}

/// The content-safety gate.
pub struct ModerationGate {
    cfg: ModerationConfig,
    client: reqwest::Client,
}

impl ModerationGate {
    pub fn new(cfg: ModerationConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .connect_timeout(Duration::from_secs(cfg.timeout_secs.min(5)))
            .build()
            .expect("Failed to build HTTP client");
        Self { cfg, client }
    }

    /// Decides whether `text` is publishable. Never fails: when the AI
    /// attempt is unavailable or errors, the local blocklist scan
    /// produces the verdict instead.
    pub async fn moderate(&self, text: &str) -> ModerationResult {
        if self.cfg.api_key.is_some() {
            match api::classify(&self.client, &self.cfg, text).await {
                Ok(verdict) => {
                    return ModerationResult {
                        is_clean: verdict.is_clean,
                        reason: verdict.reason,
                        source: ModerationSource::Openai,
                    };
                }
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        "AI moderation attempt failed, falling back to local scan"
                    );
                }
            }
        }
        self.moderate_local(text)
    }

    /// The deterministic fallback path, also usable directly in tests
    /// and offline deployments.
    pub fn moderate_local(&self, text: &str) -> ModerationResult {
        match blocklist::scan(text) {
            Some(term) => ModerationResult {
                is_clean: false,
                reason: format!("Content contains a blocked term: \"{term}\""),
                source: ModerationSource::Local,
            },
            None => ModerationResult {
                is_clean: true,
                reason: "No flagged terms found".to_string(),
                source: ModerationSource::Local,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_gate() -> ModerationGate {
        ModerationGate::new(ModerationConfig::default())
    }

    #[tokio::test]
    async fn falls_back_to_local_without_credential() {
        let gate = offline_gate();
        let result = gate.moderate("an ordinary story about school").await;
        assert!(result.is_clean);
        assert_eq!(result.source, ModerationSource::Local);
    }

    #[tokio::test]
    async fn local_verdict_names_the_matched_term() {
        let gate = offline_gate();
        let result = gate.moderate("this is complete SHIT honestly").await;
        assert!(!result.is_clean);
        assert_eq!(result.source, ModerationSource::Local);
        assert!(result.reason.contains("shit"), "reason: {}", result.reason);
    }

    #[tokio::test]
    async fn unreachable_endpoint_falls_back_instead_of_failing() {
        let gate = ModerationGate::new(ModerationConfig {
            api_key: Some("test-key".to_string()),
            api_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
            ..ModerationConfig::default()
        });
        let result = gate.moderate("hello from the fallback path").await;
        assert!(result.is_clean);
        assert_eq!(result.source, ModerationSource::Local);
    }

    #[tokio::test]
    async fn empty_text_is_clean() {
        let result = offline_gate().moderate("").await;
        assert!(result.is_clean);
    }
}
