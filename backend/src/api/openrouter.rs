use std::time::Duration;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::persona_prompt::{CONNECTION_TROUBLE_REPLY, OFFLINE_REPLY, SYSTEM_INSTRUCTION};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptRole {
    User,
    #[serde(alias = "model")]
    Assistant,
}

/// One line of the visitor's chat history, as the browser sends it back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub role: TranscriptRole,
    pub text: String,
    // opaque, handed back to the model exactly as it gave it to us
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning_details: Option<Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning_details: Option<Value>,
}

impl ChatReply {
    fn canned(text: &str) -> Self {
        ChatReply {
            text: text.to_string(),
            reasoning_details: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpstreamMessage {
    pub role: &'static str,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning_details: Option<Value>,
}

#[derive(Serialize)]
struct ReasoningFlag {
    enabled: bool,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<UpstreamMessage>,
    reasoning: ReasoningFlag,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    reasoning_details: Option<Value>,
}

#[derive(Debug, thiserror::Error)]
enum RelayError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream returned {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },
    #[error("upstream returned no message content")]
    EmptyReply,
}

pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// Forwards visitor questions to an OpenAI-style chat completions API.
pub struct ChatRelay {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl ChatRelay {
    pub fn new(api_key: Option<String>, model: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::with_timeout(api_key, model, base_url, UPSTREAM_TIMEOUT)
    }

    /// A hung upstream call gives up after `timeout` and answers with the apology.
    pub fn with_timeout(
        api_key: Option<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder().timeout(timeout).build().unwrap_or_else(|e| {
            tracing::warn!("Failed to build timed http client, using defaults: {}", e);
            Client::new()
        });
        Self {
            client,
            api_key,
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn is_online(&self) -> bool {
        self.api_key.is_some()
    }

    /// Never fails. Without a key, or when the upstream call goes wrong, the
    /// visitor gets a canned reply instead.
    pub async fn relay(&self, user_text: &str, history: &[TranscriptEntry]) -> ChatReply {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!("OpenRouter API key is missing, answering with the offline reply");
            return ChatReply::canned(OFFLINE_REPLY);
        };

        match self.complete(api_key, compose_messages(user_text, history)).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("Error communicating with OpenRouter: {}", e);
                ChatReply::canned(CONNECTION_TROUBLE_REPLY)
            }
        }
    }

    async fn complete(
        &self,
        api_key: &str,
        messages: Vec<UpstreamMessage>,
    ) -> Result<ChatReply, RelayError> {
        let body = CompletionRequest {
            model: &self.model,
            messages,
            reasoning: ReasoningFlag { enabled: true },
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Status { status, body });
        }

        let parsed: CompletionResponse = response.json().await?;
        let message = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or(RelayError::EmptyReply)?;

        Ok(ChatReply {
            text: message.content.ok_or(RelayError::EmptyReply)?,
            reasoning_details: message.reasoning_details,
        })
    }
}

/// System prompt, then the prior transcript, then the new question.
pub(crate) fn compose_messages(user_text: &str, history: &[TranscriptEntry]) -> Vec<UpstreamMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(UpstreamMessage {
        role: "system",
        content: SYSTEM_INSTRUCTION.to_string(),
        reasoning_details: None,
    });
    messages.extend(history.iter().map(|entry| UpstreamMessage {
        role: match entry.role {
            TranscriptRole::User => "user",
            TranscriptRole::Assistant => "assistant",
        },
        content: entry.text.clone(),
        reasoning_details: entry.reasoning_details.clone(),
    }));
    messages.push(UpstreamMessage {
        role: "user",
        content: user_text.to_string(),
        reasoning_details: None,
    });
    messages
}
