//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::DEFAULT_SYSTEM_PROMPT;
use crate::infrastructure::adapters::{
    DEFAULT_CHAT_MODEL, DEFAULT_KAKAO_TTS_URL, DEFAULT_KAKAO_VOICE, DEFAULT_OPENAI_BASE_URL,
};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 聊天模型配置
    #[serde(default)]
    pub llm: LlmConfig,

    /// TTS 配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 请求体大小上限（字节）
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_body_limit() -> usize {
    1024 * 1024 // 1 MiB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit_bytes: default_body_limit(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 聊天模型配置
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// API 基础 URL
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,

    /// API key
    #[serde(default)]
    pub api_key: String,

    /// 模型名称
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// 人设指令
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_llm_base_url() -> String {
    DEFAULT_OPENAI_BASE_URL.to_string()
}

fn default_llm_model() -> String {
    DEFAULT_CHAT_MODEL.to_string()
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

fn default_timeout() -> u64 {
    120
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_llm_base_url(),
            api_key: String::new(),
            model: default_llm_model(),
            system_prompt: default_system_prompt(),
            timeout_secs: default_timeout(),
        }
    }
}

/// TTS 配置
#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    /// 合成接口 URL
    #[serde(default = "default_tts_url")]
    pub url: String,

    /// API key
    #[serde(default)]
    pub api_key: String,

    /// SSML voice name
    #[serde(default = "default_tts_voice")]
    pub voice: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_tts_url() -> String {
    DEFAULT_KAKAO_TTS_URL.to_string()
}

fn default_tts_voice() -> String {
    DEFAULT_KAKAO_VOICE.to_string()
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            url: default_tts_url(),
            api_key: String::new(),
            voice: default_tts_voice(),
            timeout_secs: default_timeout(),
        }
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 音频存储目录
    #[serde(default = "default_audio_dir")]
    pub audio_dir: PathBuf,
}

fn default_audio_dir() -> PathBuf {
    PathBuf::from("audio")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            audio_dir: default_audio_dir(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// 打印用的密钥掩码
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "<missing>".to_string();
    }
    let tail: String = secret
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    if secret.chars().count() <= 8 {
        "****".to_string()
    } else {
        format!("****{}", tail)
    }
}
