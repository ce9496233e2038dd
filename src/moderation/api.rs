//! AI-backed content classification via an OpenAI-compatible
//! chat-completions endpoint.
//!
//! One attempt per moderation call, no retries: any transport failure,
//! non-success status, timeout, or malformed payload is an error for the
//! attempt and the caller falls back to the local blocklist scan. A
//! failed attempt never yields a "clean" verdict.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ModerationConfig;

/// System instruction sent with every classification request. The model
/// must answer with a bare JSON object so the response parses without
/// any prose stripping.
const SYSTEM_INSTRUCTION: &str = "You are a strict content-safety classifier for a peer-support \
     community of young people. Decide whether the user's text is safe to \
     publish. Respond with only a JSON object of the exact shape \
     {\"is_clean\": boolean, \"reason\": string} and nothing else.";

/// Errors from a single classification attempt.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("no API credential configured")]
    MissingCredential,

    #[error("classification request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("classification service returned status {0}")]
    Status(u16),

    #[error("malformed classification response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

/// Verdict payload embedded in the model's reply. The camelCase
/// `isClean` spelling is accepted as an alternate success shape.
#[derive(Debug, Deserialize)]
pub struct Verdict {
    #[serde(alias = "isClean")]
    pub is_clean: bool,
    pub reason: String,
}

/// Runs one classification attempt against the configured endpoint.
pub async fn classify(
    client: &reqwest::Client,
    cfg: &ModerationConfig,
    text: &str,
) -> Result<Verdict, ClassifyError> {
    let api_key = cfg
        .api_key
        .as_deref()
        .ok_or(ClassifyError::MissingCredential)?;

    let body = ChatRequest {
        model: &cfg.model,
        messages: vec![
            ChatMessage {
                role: "system",
                content: SYSTEM_INSTRUCTION,
            },
            ChatMessage {
                role: "user",
                content: text,
            },
        ],
        temperature: 0.0,
        response_format: ResponseFormat {
            format_type: "json_object",
        },
    };

    let response = client
        .post(&cfg.api_url)
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ClassifyError::Status(status.as_u16()));
    }

    let envelope: Value = response.json().await?;
    let content = envelope["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| {
            ClassifyError::MalformedResponse("missing choices[0].message.content".to_string())
        })?;

    serde_json::from_str(content)
        .map_err(|err| ClassifyError::MalformedResponse(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_accepts_snake_case() {
        let v: Verdict =
            serde_json::from_str(r#"{"is_clean": true, "reason": "ok"}"#).expect("parse");
        assert!(v.is_clean);
        assert_eq!(v.reason, "ok");
    }

    #[test]
    fn verdict_accepts_camel_case_alias() {
        let v: Verdict =
            serde_json::from_str(r#"{"isClean": false, "reason": "profanity"}"#).expect("parse");
        assert!(!v.is_clean);
    }

    #[test]
    fn verdict_rejects_missing_fields() {
        assert!(serde_json::from_str::<Verdict>(r#"{"reason": "ok"}"#).is_err());
        assert!(serde_json::from_str::<Verdict>("not json").is_err());
    }
}
