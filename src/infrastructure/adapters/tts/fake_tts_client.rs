//! Fake TTS Client - 用于测试的 TTS 客户端
//!
//! 始终返回固定的音频字节，不实际调用 TTS 服务

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::application::ports::{SynthesizeRequest, SynthesizeResponse, TtsEnginePort, TtsError};

/// Fake TTS Client 配置
#[derive(Debug, Clone)]
pub struct FakeTtsClientConfig {
    /// 固定返回的音频数据
    pub audio_data: Vec<u8>,
    /// 设置后每次调用都返回 ServiceError
    pub failure: Option<String>,
}

impl Default for FakeTtsClientConfig {
    fn default() -> Self {
        Self {
            audio_data: b"RIFF\0\0\0\0WAVE".to_vec(),
            failure: None,
        }
    }
}

/// Fake TTS Client
///
/// 记录调用次数和最后一次的文本，便于断言
pub struct FakeTtsClient {
    config: FakeTtsClientConfig,
    calls: AtomicUsize,
    last_text: Mutex<Option<String>>,
}

impl FakeTtsClient {
    pub fn new(config: FakeTtsClientConfig) -> Self {
        Self {
            config,
            calls: AtomicUsize::new(0),
            last_text: Mutex::new(None),
        }
    }

    /// 每次调用都失败的客户端
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(FakeTtsClientConfig {
            failure: Some(message.into()),
            ..Default::default()
        })
    }

    /// 已调用次数
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// 最后一次请求的文本
    pub fn last_text(&self) -> Option<String> {
        self.last_text
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TtsEnginePort for FakeTtsClient {
    async fn synthesize(&self, request: SynthesizeRequest) -> Result<SynthesizeResponse, TtsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_text.lock() {
            *last = Some(request.text.clone());
        }

        tracing::debug!(
            text_len = request.text.len(),
            "FakeTtsClient: returning fixed audio"
        );

        if let Some(message) = &self.config.failure {
            return Err(TtsError::ServiceError(message.clone()));
        }

        Ok(SynthesizeResponse {
            audio_data: self.config.audio_data.clone(),
            content_type: Some("audio/wav".to_string()),
        })
    }
}
