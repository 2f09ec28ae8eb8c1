//! Chat Command Handlers

use std::sync::Arc;

use crate::application::commands::{ChatCommand, ChatResult};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    AudioStoragePort, ChatCompletionPort, ChatMessage, SynthesizeRequest, TtsEnginePort,
};
use crate::domain::voice::VoiceMode;

/// Chat Handler
///
/// 流程: 聊天模型生成文本 → (funny) 语音合成 → 落盘
pub struct ChatHandler {
    chat_client: Arc<dyn ChatCompletionPort>,
    tts_engine: Arc<dyn TtsEnginePort>,
    audio_storage: Arc<dyn AudioStoragePort>,
    system_prompt: String,
}

impl ChatHandler {
    pub fn new(
        chat_client: Arc<dyn ChatCompletionPort>,
        tts_engine: Arc<dyn TtsEnginePort>,
        audio_storage: Arc<dyn AudioStoragePort>,
        system_prompt: impl Into<String>,
    ) -> Self {
        Self {
            chat_client,
            tts_engine,
            audio_storage,
            system_prompt: system_prompt.into(),
        }
    }

    pub async fn handle(&self, command: ChatCommand) -> Result<ChatResult, ApplicationError> {
        let messages = vec![
            ChatMessage::system(self.system_prompt.clone()),
            ChatMessage::user(command.message),
        ];

        let text = self.chat_client.complete(messages).await?;

        tracing::debug!(
            voice = %command.voice,
            text_len = text.len(),
            "Chat completion received"
        );

        // 文本总是先生成；未知模式在这里返回，不会触发语音合成
        let voice: VoiceMode = command.voice.parse()?;

        if !voice.wants_audio() {
            return Ok(ChatResult {
                text,
                voice,
                audio: None,
            });
        }

        let synthesized = self
            .tts_engine
            .synthesize(SynthesizeRequest { text: text.clone() })
            .await?;

        let audio = self.audio_storage.save_audio(&synthesized.audio_data).await?;

        tracing::info!(
            audio = %audio,
            audio_size = synthesized.audio_data.len(),
            content_type = ?synthesized.content_type,
            "Speech audio saved"
        );

        Ok(ChatResult {
            text,
            voice,
            audio: Some(audio),
        })
    }
}
