//! Chat Completion Port - 聊天模型抽象
//!
//! 定义对话补全的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 聊天模型错误
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Chat API key is not configured")]
    MissingApiKey,

    #[error("Chat API rejected credentials: {0}")]
    Unauthorized(String),

    #[error("Chat API rate limited: {0}")]
    RateLimited(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 消息角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// 对话消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Chat Completion Port
///
/// 发送一段对话，返回第一条候选回复的文本
#[async_trait]
pub trait ChatCompletionPort: Send + Sync {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, ChatError>;
}
