//! Sambeom - 带人设的语音聊天后端
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Voice Context: 语音模式、音频文件名
//! - 人设指令、SSML 封装
//!
//! 应用层 (application/):
//! - Ports: ChatCompletion, TtsEngine, AudioStorage
//! - Commands: 聊天
//! - Queries: 音频读取
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: /chat, /audio/{filename}
//! - Adapters: OpenAI Chat Client, Kakao TTS Client, 文件存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
