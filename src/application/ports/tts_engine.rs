//! TTS Engine Port - 语音合成引擎抽象
//!
//! 定义 TTS 的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("TTS API key is not configured")]
    MissingApiKey,

    #[error("TTS API rejected credentials: {0}")]
    Unauthorized(String),

    #[error("TTS API rate limited: {0}")]
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

/// TTS 合成请求
#[derive(Debug, Clone)]
pub struct SynthesizeRequest {
    /// 要合成的文本内容（未转义的原文）
    pub text: String,
}

/// TTS 合成响应
#[derive(Debug, Clone)]
pub struct SynthesizeResponse {
    /// 原始音频数据，原样落盘
    pub audio_data: Vec<u8>,
    /// 上游返回的 Content-Type
    pub content_type: Option<String>,
}

/// TTS Engine Port
///
/// 外部 TTS 服务的抽象接口
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    /// 执行语音合成
    async fn synthesize(&self, request: SynthesizeRequest) -> Result<SynthesizeResponse, TtsError>;
}
