#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ChatPrompt;
use crate::domain::models::ChatTransport;
use crate::domain::models::APOLOGY_CONNECTION;
use crate::domain::models::APOLOGY_NO_RESPONSE;
use crate::domain::models::APOLOGY_TIMEOUT;
use crate::domain::models::DEMO_REPLY;

#[derive(Debug, thiserror::Error)]
enum ChatError {
    #[error("request to Gemini failed: {0}")]
    Connection(reqwest::Error),
    #[error("request to Gemini timed out")]
    Timeout,
    #[error("Gemini responded with status {0}")]
    Status(u16),
    #[error("Gemini response could not be parsed: {0}")]
    Malformed(serde_json::Error),
    #[error("Gemini response contained no text")]
    EmptyResponse,
}

impl ChatError {
    fn apology(&self) -> &'static str {
        match self {
            ChatError::Connection(_) => return APOLOGY_CONNECTION,
            ChatError::Timeout => return APOLOGY_TIMEOUT,
            ChatError::Status(_) | ChatError::Malformed(_) | ChatError::EmptyResponse => {
                return APOLOGY_NO_RESPONSE
            }
        }
    }
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> ChatError {
        if err.is_timeout() {
            return ChatError::Timeout;
        }

        // The request URL carries the API key.
        return ChatError::Connection(err.without_url());
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CompletionRequest {
    contents: Vec<Content>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

pub struct Gemini {
    url: String,
    model: String,
    token: String,
    timeout: Duration,
    demo_delay: Duration,
}

impl Gemini {
    pub fn from_config() -> Result<Gemini> {
        return Ok(Gemini {
            url: Config::get(ConfigKey::GeminiURL),
            model: Config::get(ConfigKey::GeminiModel),
            token: Config::get(ConfigKey::GeminiToken),
            timeout: Config::get_duration(ConfigKey::ChatTimeout)?,
            demo_delay: Config::get_duration(ConfigKey::DemoDelay)?,
        });
    }

    /// The override wins when it is non-blank, then the configured token.
    fn resolve_credential(&self, credential: Option<String>) -> Option<String> {
        return credential
            .map(|key| return key.trim().to_string())
            .filter(|key| return !key.is_empty())
            .or_else(|| {
                if self.token.trim().is_empty() {
                    return None;
                }
                return Some(self.token.trim().to_string());
            });
    }

    async fn generate(&self, prompt: &ChatPrompt, key: &str) -> Result<String, ChatError> {
        let req = CompletionRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.render(),
                }],
            }],
        };

        tracing::debug!(model = self.model, "Requesting Gemini completion");
        let res = reqwest::Client::new()
            .post(format!(
                "{url}/v1beta/models/{model}:generateContent",
                url = self.url,
                model = self.model,
            ))
            .query(&[("key", key)])
            .timeout(self.timeout)
            .json(&req)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(ChatError::Status(status.as_u16()));
        }

        let body = res.text().await?;
        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(ChatError::Malformed)?;

        let text = parsed
            .candidates
            .first()
            .and_then(|candidate| return candidate.content.parts.first())
            .map(|part| return part.text.to_string())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(ChatError::EmptyResponse);
        }

        return Ok(text);
    }
}

#[async_trait]
impl ChatTransport for Gemini {
    #[allow(clippy::implicit_return)]
    async fn ask(&self, prompt: ChatPrompt, credential: Option<String>) -> String {
        let key = match self.resolve_credential(credential) {
            Some(key) => key,
            None => {
                tokio::time::sleep(self.demo_delay).await;
                return DEMO_REPLY.to_string();
            }
        };

        match self.generate(&prompt, &key).await {
            Ok(text) => return text,
            Err(err) => {
                tracing::error!(error = %err, "Gemini request failed");
                return err.apology().to_string();
            }
        }
    }
}
