//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::ChatResult;

// ============================================================================
// Chat DTOs
// ============================================================================

/// `POST /chat` 请求体
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// "gpt" | "funny"，其他值返回 unknown voice type
    pub voice: String,
}

/// `POST /chat` 响应体
///
/// `audio` 为空时序列化为 `null`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub text: String,
    pub voice: String,
    pub audio: Option<String>,
}

impl From<ChatResult> for ChatResponse {
    fn from(result: ChatResult) -> Self {
        Self {
            text: result.text,
            voice: result.voice.as_str().to_string(),
            audio: result.audio.map(|name| name.url_path()),
        }
    }
}
