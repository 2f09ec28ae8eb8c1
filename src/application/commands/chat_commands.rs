//! Chat Commands

use crate::domain::voice::{AudioFileName, VoiceMode};

/// 聊天命令
///
/// `voice` 保留客户端原始字符串，由 handler 在生成文本之后解析
#[derive(Debug, Clone)]
pub struct ChatCommand {
    pub message: String,
    pub voice: String,
}

/// 聊天结果
#[derive(Debug, Clone)]
pub struct ChatResult {
    pub text: String,
    pub voice: VoiceMode,
    /// 仅 `VoiceMode::Funny` 时存在
    pub audio: Option<AudioFileName>,
}
