//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_storage;
mod chat_completion;
mod tts_engine;

pub use audio_storage::{AudioStorageError, AudioStoragePort, StoredAudio};
pub use chat_completion::{ChatCompletionPort, ChatError, ChatMessage, ChatRole};
pub use tts_engine::{SynthesizeRequest, SynthesizeResponse, TtsEnginePort, TtsError};
