//! Domain Layer - 领域层
//!
//! - Voice Context: 语音模式、音频文件名
//! - persona: 聊天人设
//! - speech_markup: TTS 请求的 SSML 封装

pub mod persona;
pub mod speech_markup;
pub mod voice;

pub use persona::DEFAULT_SYSTEM_PROMPT;
pub use speech_markup::{build_ssml, escape_xml};
