use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::config::Config;
use crate::error::{AppError, Result};

const OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
}

/// Generative-text collaborator: one prompt in, one text blob out. A
/// single attempt is made per call; failures are never retried here.
#[async_trait]
pub trait MetaGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

pub struct OpenRouterClient {
    http: Client,
    api_key: String,
    model: String,
}

impl OpenRouterClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            api_key: config.openrouter_api_key.clone(),
            model: config.model.clone(),
        }
    }
}

#[async_trait]
impl MetaGenerator for OpenRouterClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".into(),
                content: prompt.into(),
            }],
        };

        let res = self
            .http
            .post(OPENROUTER_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::LlmError(e.to_string()))?;

        let json: serde_json::Value = res
            .json()
            .await
            .map_err(|e| AppError::LlmError(e.to_string()))?;
        let reply = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| AppError::LlmError("Invalid response format from LLM".to_string()))?
            .to_string();

        Ok(reply)
    }
}
