use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::{AiConfig, Provider};
use crate::error::ApiError;

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";
const GROQ_CHAT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

const SYSTEM_PROMPT: &str =
    "You are a financial analyst generating an in-depth financial report.";

/// Opaque text-generation collaborator. Credentials and model selection are
/// fixed at construction; both providers speak the same chat-completions
/// wire shape.
#[derive(Clone)]
pub struct NarrativeClient {
    http: Client,
    config: AiConfig,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl NarrativeClient {
    pub fn new(http: Client, config: AiConfig) -> Self {
        Self { http, config }
    }

    pub async fn generate(&self, government_level: &str, region: &str) -> Result<String, ApiError> {
        let prompt = format!(
            "Generate a financial report analyzing budget data, GDP growth, inflation rates, \
             employment trends, debt-to-GDP ratios, and bond yields for {} - {}.",
            government_level, region
        );

        let url = match self.config.provider {
            Provider::OpenAi => OPENAI_CHAT_URL,
            Provider::Groq => GROQ_CHAT_URL,
        };
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage { role: "system", content: SYSTEM_PROMPT },
                ChatMessage { role: "user", content: &prompt },
            ],
        };

        tracing::debug!("Requesting narrative from {}", url);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::Upstream {
                message: format!("Narrative generation request failed: {}", e),
                status: e.status().map(|s| s.as_u16()),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Upstream {
                message: "Narrative provider returned an error".to_string(),
                status: Some(status.as_u16()),
            });
        }

        let body: ChatResponse = response.json().await.map_err(|e| ApiError::Upstream {
            message: format!("Narrative response could not be decoded: {}", e),
            status: None,
        })?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ApiError::Upstream {
                message: "Narrative provider returned no choices".to_string(),
                status: None,
            })
    }
}
