//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{AudioStorageError, ChatError, TtsError};
use crate::domain::voice::VoiceError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 未知的语音模式
    #[error("unknown voice type")]
    UnknownVoiceMode(String),

    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 聊天模型调用失败
    #[error("Chat completion failed: {0}")]
    ChatService(#[from] ChatError),

    /// 语音合成调用失败
    #[error("Speech synthesis failed: {0}")]
    SpeechService(#[from] TtsError),

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 是否为本地配置缺失（API key 未设置）
    pub fn is_missing_credentials(&self) -> bool {
        matches!(
            self,
            Self::ChatService(ChatError::MissingApiKey) | Self::SpeechService(TtsError::MissingApiKey)
        )
    }
}

impl From<AudioStorageError> for ApplicationError {
    fn from(err: AudioStorageError) -> Self {
        match err {
            AudioStorageError::FileNotFound(name) => Self::not_found("Audio", name),
            AudioStorageError::IoError(msg) => Self::StorageError(msg),
        }
    }
}

impl From<VoiceError> for ApplicationError {
    fn from(err: VoiceError) -> Self {
        match err {
            VoiceError::UnknownVoiceMode(mode) => Self::UnknownVoiceMode(mode),
            VoiceError::InvalidAudioFileName(_) => Self::ValidationError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_voice_message() {
        let err: ApplicationError = VoiceError::UnknownVoiceMode("loud".into()).into();
        assert_eq!(err.to_string(), "unknown voice type");
    }

    #[test]
    fn test_storage_not_found_maps_to_not_found() {
        let err: ApplicationError = AudioStorageError::FileNotFound("x.wav".into()).into();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }

    #[test]
    fn test_missing_credentials() {
        assert!(ApplicationError::from(ChatError::MissingApiKey).is_missing_credentials());
        assert!(ApplicationError::from(TtsError::MissingApiKey).is_missing_credentials());
        assert!(!ApplicationError::from(TtsError::Timeout).is_missing_credentials());
    }
}
