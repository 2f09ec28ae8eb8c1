//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（ChatCompletion、TtsEngine、AudioStorage）
//! - commands: 聊天命令及处理器
//! - queries: 音频查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{handlers::ChatHandler, ChatCommand, ChatResult};

pub use error::ApplicationError;

pub use ports::{
    // Audio storage
    AudioStorageError,
    AudioStoragePort,
    StoredAudio,
    // Chat completion
    ChatCompletionPort,
    ChatError,
    ChatMessage,
    ChatRole,
    // TTS engine
    SynthesizeRequest,
    SynthesizeResponse,
    TtsEnginePort,
    TtsError,
};

pub use queries::{
    handlers::{GetAudioHandler, AUDIO_CONTENT_TYPE},
    GetAudioQuery, GetAudioResponse,
};
