//! OpenAI Chat Client - 调用 Chat Completions API
//!
//! 实现 ChatCompletionPort trait
//!
//! 外部 API:
//! POST {base_url}/chat/completions
//! Request: {"model": "...", "messages": [{"role": "system", ...}, {"role": "user", ...}]}
//! Response: {"choices": [{"message": {"content": "..."}}]}

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{ChatCompletionPort, ChatError, ChatMessage};

/// OpenAI 默认地址
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// 默认模型
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4.1-mini";

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// OpenAI 客户端配置
#[derive(Debug, Clone)]
pub struct OpenAiChatClientConfig {
    /// API 基础 URL（不含 /chat/completions）
    pub base_url: String,
    /// API key（为空时首次调用报错）
    pub api_key: String,
    /// 模型名称
    pub model: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for OpenAiChatClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            api_key: String::new(),
            model: DEFAULT_CHAT_MODEL.to_string(),
            timeout_secs: 120,
        }
    }
}

impl OpenAiChatClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// OpenAI Chat Completions 客户端
pub struct OpenAiChatClient {
    client: Client,
    config: OpenAiChatClientConfig,
}

impl OpenAiChatClient {
    pub fn new(config: OpenAiChatClientConfig) -> Result<Self, ChatError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ChatError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl ChatCompletionPort for OpenAiChatClient {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, ChatError> {
        if self.config.api_key.is_empty() {
            return Err(ChatError::MissingApiKey);
        }

        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages: &messages,
        };

        tracing::debug!(
            url = %self.completions_url(),
            model = %self.config.model,
            message_count = messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChatError::Timeout
                } else if e.is_connect() {
                    ChatError::NetworkError(format!("Cannot connect to chat service: {}", e))
                } else {
                    ChatError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let detail = format!("HTTP {}: {}", status, error_text);
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ChatError::Unauthorized(detail),
                StatusCode::TOO_MANY_REQUESTS => ChatError::RateLimited(detail),
                _ => ChatError::ServiceError(detail),
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ChatError::InvalidResponse(e.to_string()))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ChatError::InvalidResponse("response has no choices".to_string()))?;

        let text = choice.message.content.unwrap_or_default();

        tracing::info!(
            model = %self.config.model,
            reply_len = text.len(),
            "Chat completion finished"
        );

        Ok(text)
    }
}
