//! Kakao TTS Client - 调用 Kakao Newtone 语音合成服务
//!
//! 实现 TtsEnginePort trait
//!
//! 外部 TTS API:
//! POST https://kakaoi-newtone-openapi.kakao.com/v1/synthesize
//! Headers: Authorization: KakaoAK <key>, Content-Type: application/xml
//! Request: `<speak><voice name="...">text</voice></speak>`
//! Response: 音频二进制

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use std::time::Duration;

use crate::application::ports::{SynthesizeRequest, SynthesizeResponse, TtsEnginePort, TtsError};
use crate::domain::build_ssml;

/// Kakao TTS 默认地址
pub const DEFAULT_KAKAO_TTS_URL: &str = "https://kakaoi-newtone-openapi.kakao.com/v1/synthesize";

/// 默认音色
pub const DEFAULT_KAKAO_VOICE: &str = "WOMAN_READ_CALM";

/// Kakao TTS 客户端配置
#[derive(Debug, Clone)]
pub struct KakaoTtsClientConfig {
    /// 合成接口完整 URL
    pub url: String,
    /// REST API key（为空时首次调用报错）
    pub api_key: String,
    /// SSML voice name
    pub voice: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for KakaoTtsClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_KAKAO_TTS_URL.to_string(),
            api_key: String::new(),
            voice: DEFAULT_KAKAO_VOICE.to_string(),
            timeout_secs: 120,
        }
    }
}

impl KakaoTtsClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Kakao TTS 客户端
pub struct KakaoTtsClient {
    client: Client,
    config: KakaoTtsClientConfig,
}

impl KakaoTtsClient {
    /// 创建新的 Kakao TTS 客户端
    pub fn new(config: KakaoTtsClientConfig) -> Result<Self, TtsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl TtsEnginePort for KakaoTtsClient {
    async fn synthesize(&self, request: SynthesizeRequest) -> Result<SynthesizeResponse, TtsError> {
        if self.config.api_key.is_empty() {
            return Err(TtsError::MissingApiKey);
        }

        let body = build_ssml(&self.config.voice, &request.text);

        tracing::debug!(
            url = %self.config.url,
            voice = %self.config.voice,
            text_len = request.text.len(),
            "Sending TTS synthesize request"
        );

        let response = self
            .client
            .post(&self.config.url)
            .header(header::AUTHORIZATION, format!("KakaoAK {}", self.config.api_key))
            .header(header::CONTENT_TYPE, "application/xml")
            .body(body.into_bytes())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TtsError::Timeout
                } else if e.is_connect() {
                    TtsError::NetworkError(format!("Cannot connect to TTS service: {}", e))
                } else {
                    TtsError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let detail = format!("HTTP {}: {}", status, error_text);
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => TtsError::Unauthorized(detail),
                StatusCode::TOO_MANY_REQUESTS => TtsError::RateLimited(detail),
                _ => TtsError::ServiceError(detail),
            });
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        // 直接获取音频字节，不校验格式
        let audio_data = response
            .bytes()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::info!(
            audio_size = audio_data.len(),
            content_type = ?content_type,
            "TTS synthesis completed"
        );

        Ok(SynthesizeResponse {
            audio_data,
            content_type,
        })
    }
}
