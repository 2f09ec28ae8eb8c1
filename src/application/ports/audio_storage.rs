//! Audio Storage Port - 出站端口
//!
//! 定义音频文件存储的抽象接口

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::voice::AudioFileName;

/// 音频存储错误
#[derive(Debug, Error)]
pub enum AudioStorageError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// 已打开的音频文件
#[derive(Debug)]
pub struct StoredAudio {
    pub file: tokio::fs::File,
    /// 文件大小（字节）
    pub size: u64,
}

/// Audio Storage Port - 出站端口
///
/// 音频文件只写入一次、之后只读，不做清理
#[async_trait]
pub trait AudioStoragePort: Send + Sync {
    /// 获取音频文件路径
    fn audio_path(&self, name: &AudioFileName) -> PathBuf;

    /// 保存音频数据，返回新生成的文件名
    ///
    /// 返回时数据已完整写入磁盘
    async fn save_audio(&self, data: &[u8]) -> Result<AudioFileName, AudioStorageError>;

    /// 打开音频文件用于读取
    async fn open_audio(&self, name: &AudioFileName) -> Result<StoredAudio, AudioStorageError>;

    /// 检查音频是否存在
    async fn audio_exists(&self, name: &AudioFileName) -> bool;
}
