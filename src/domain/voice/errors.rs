//! Voice Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("unknown voice type: {0}")]
    UnknownVoiceMode(String),

    #[error("invalid audio file name: {0}")]
    InvalidAudioFileName(String),
}
