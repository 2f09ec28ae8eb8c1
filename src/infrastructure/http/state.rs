//! Application State
//!
//! 持有所有 Command/Query Handlers，在请求之间只读共享

use std::sync::Arc;

use crate::application::{
    AudioStoragePort, ChatCompletionPort, ChatHandler, GetAudioHandler, TtsEnginePort,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub chat_handler: ChatHandler,

    // ========== Query Handlers ==========
    pub get_audio_handler: GetAudioHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        chat_client: Arc<dyn ChatCompletionPort>,
        tts_engine: Arc<dyn TtsEnginePort>,
        audio_storage: Arc<dyn AudioStoragePort>,
        system_prompt: impl Into<String>,
    ) -> Self {
        Self {
            chat_handler: ChatHandler::new(
                chat_client,
                tts_engine,
                audio_storage.clone(),
                system_prompt,
            ),
            get_audio_handler: GetAudioHandler::new(audio_storage),
        }
    }
}
