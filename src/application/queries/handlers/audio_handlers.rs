//! Audio Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::AudioStoragePort;
use crate::application::queries::audio_queries::{GetAudioQuery, GetAudioResponse};
use crate::domain::voice::AudioFileName;

/// 音频固定的 Content-Type
pub const AUDIO_CONTENT_TYPE: &str = "audio/wav";

/// GetAudio Handler - 读取已生成的音频
pub struct GetAudioHandler {
    audio_storage: Arc<dyn AudioStoragePort>,
}

impl GetAudioHandler {
    pub fn new(audio_storage: Arc<dyn AudioStoragePort>) -> Self {
        Self { audio_storage }
    }

    pub async fn handle(&self, query: GetAudioQuery) -> Result<GetAudioResponse, ApplicationError> {
        // 只有本服务签发过的 `<uuid>.wav` 才可能存在，其余直接视为不存在，不触碰文件系统
        let name: AudioFileName = query
            .filename
            .parse()
            .map_err(|_| ApplicationError::not_found("Audio", query.filename.as_str()))?;

        let stored = self.audio_storage.open_audio(&name).await?;

        Ok(GetAudioResponse {
            file: stored.file,
            size: stored.size,
            content_type: AUDIO_CONTENT_TYPE,
        })
    }
}
