use crate::config::Config;
use crate::error::ExpertError;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

pub const OPENAI_MODEL: &str = "gpt-4o-mini";
pub const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
}

/// Anything that can turn an instruction plus user text into a completion.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, instruction: &str, user_text: &str) -> Result<Completion, ExpertError>;

    fn model(&self) -> &str;
}

/// System instruction first, user text second. Both verbatim.
pub fn build_messages(instruction: &str, user_text: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage { role: Role::System, content: instruction.to_string() },
        ChatMessage { role: Role::User, content: user_text.to_string() },
    ]
}

/// Pulls `choices[0].message.content` out of a chat-completion body.
pub fn decode_completion(body: &Value) -> Result<Completion, ExpertError> {
    let text = body["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| ExpertError::MalformedResponse("No completion text returned".into()))?;

    Ok(Completion { text: text.to_string() })
}

pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: Option<String>,
    api_base: String,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Result<Self, ExpertError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ExpertError::Config(format!("Cannot build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            api_base: config.api_base.clone(),
        })
    }

    // One attempt only. Failures go straight back to the caller.
    async fn send(&self, instruction: &str, user_text: &str) -> Result<Completion, ExpertError> {
        let api_key = self.api_key.as_deref().ok_or(ExpertError::MissingCredential)?;
        let url = format!("{}/chat/completions", self.api_base);

        let payload = ChatRequest {
            model: OPENAI_MODEL,
            temperature: TEMPERATURE,
            messages: build_messages(instruction, user_text),
        };

        let res = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            log::error!("Chat completion failed with {}: {}", status, body);
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ExpertError::Unauthorized {
                    status: status.as_u16(),
                    body,
                },
                StatusCode::TOO_MANY_REQUESTS => ExpertError::RateLimited { body },
                _ => ExpertError::Api { status: status.as_u16(), body },
            });
        }

        let raw = res.text().await?;
        let body: Value = serde_json::from_str(&raw)
            .map_err(|e| ExpertError::MalformedResponse(format!("Response is not JSON: {}", e)))?;

        decode_completion(&body)
    }
}

#[async_trait]
impl CompletionBackend for OpenAiClient {
    async fn complete(&self, instruction: &str, user_text: &str) -> Result<Completion, ExpertError> {
        self.send(instruction, user_text).await
    }

    fn model(&self) -> &str {
        OPENAI_MODEL
    }
}
