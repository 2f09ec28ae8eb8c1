//! Voice Context - 语音模式与音频文件限界上下文
//!
//! 职责:
//! - 语音模式 (gpt / funny) 解析
//! - 音频文件名生成与校验

mod errors;
mod value_objects;

pub use errors::VoiceError;
pub use value_objects::{AudioFileName, VoiceMode, AUDIO_EXTENSION};
