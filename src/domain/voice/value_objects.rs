//! Voice Context - Value Objects

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use super::VoiceError;

/// 语音模式
///
/// - `Gpt`: 只返回文本
/// - `Funny`: 文本 + 合成音频
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceMode {
    Gpt,
    Funny,
}

impl VoiceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gpt => "gpt",
            Self::Funny => "funny",
        }
    }

    /// 是否需要语音合成
    pub fn wants_audio(&self) -> bool {
        matches!(self, Self::Funny)
    }
}

impl FromStr for VoiceMode {
    type Err = VoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gpt" => Ok(Self::Gpt),
            "funny" => Ok(Self::Funny),
            other => Err(VoiceError::UnknownVoiceMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for VoiceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 音频文件扩展名
pub const AUDIO_EXTENSION: &str = "wav";

/// 音频文件名 - `<uuid>.wav`
///
/// 不变量:
/// - 只能由随机 v4 UUID 生成，或从完全相同格式的字符串解析
/// - 不含路径分隔符，不能逃出音频目录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AudioFileName(Uuid);

impl AudioFileName {
    /// 生成新的随机文件名
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn id(&self) -> &Uuid {
        &self.0
    }

    /// 对外暴露的音频 URL 路径
    pub fn url_path(&self) -> String {
        format!("/audio/{}", self)
    }
}

impl FromStr for AudioFileName {
    type Err = VoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || VoiceError::InvalidAudioFileName(s.to_string());

        let stem = s
            .strip_suffix(AUDIO_EXTENSION)
            .and_then(|rest| rest.strip_suffix('.'))
            .ok_or_else(invalid)?;
        let id = Uuid::parse_str(stem).map_err(|_| invalid())?;

        // 只接受规范的小写连字符格式，保证与磁盘上的文件名一一对应
        if id.hyphenated().to_string() != stem {
            return Err(invalid());
        }

        Ok(Self(id))
    }
}

impl std::fmt::Display for AudioFileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0.hyphenated(), AUDIO_EXTENSION)
    }
}
