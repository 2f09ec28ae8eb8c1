//! File Storage - 文件系统音频存储实现
//!
//! 实现 AudioStoragePort trait，所有音频平铺在同一目录下

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{AudioStorageError, AudioStoragePort, StoredAudio};
use crate::domain::voice::AudioFileName;

/// 文件系统音频存储
pub struct FileAudioStorage {
    /// 存储根目录
    base_dir: PathBuf,
}

impl FileAudioStorage {
    /// 创建新的文件存储
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self, AudioStorageError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        // 确保目录存在
        fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        Ok(Self { base_dir })
    }

    /// 获取存储根目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

#[async_trait]
impl AudioStoragePort for FileAudioStorage {
    fn audio_path(&self, name: &AudioFileName) -> PathBuf {
        self.base_dir.join(name.to_string())
    }

    async fn save_audio(&self, data: &[u8]) -> Result<AudioFileName, AudioStorageError> {
        // 目录可能在运行期间被外部删除
        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        let name = AudioFileName::generate();
        let audio_path = self.audio_path(&name);

        fs::write(&audio_path, data)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        tracing::debug!(
            "Saved audio: file={}, size={} bytes",
            name,
            data.len()
        );

        Ok(name)
    }

    async fn open_audio(&self, name: &AudioFileName) -> Result<StoredAudio, AudioStorageError> {
        let audio_path = self.audio_path(name);

        let file = fs::File::open(&audio_path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                AudioStorageError::FileNotFound(name.to_string())
            } else {
                AudioStorageError::IoError(e.to_string())
            }
        })?;

        let size = file
            .metadata()
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?
            .len();

        Ok(StoredAudio { file, size })
    }

    async fn audio_exists(&self, name: &AudioFileName) -> bool {
        fs::try_exists(self.audio_path(name)).await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn test_save_and_open_audio() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();

        let data = b"fake wav data";

        // Save
        let name = storage.save_audio(data).await.unwrap();
        let path = storage.audio_path(&name);
        assert!(path.exists());
        assert_eq!(path.parent(), Some(temp_dir.path()));

        // Open
        let mut stored = storage.open_audio(&name).await.unwrap();
        assert_eq!(stored.size, data.len() as u64);
        let mut buf = Vec::new();
        stored.file.read_to_end(&mut buf).await.unwrap();
        assert_eq!(buf, data);

        // Exists
        assert!(storage.audio_exists(&name).await);
    }

    #[tokio::test]
    async fn test_open_missing_audio() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();

        let name = AudioFileName::generate();
        assert!(!storage.audio_exists(&name).await);
        assert!(matches!(
            storage.open_audio(&name).await,
            Err(AudioStorageError::FileNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_new_creates_nested_dir() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("audio");
        let storage = FileAudioStorage::new(&nested).await.unwrap();

        assert!(nested.is_dir());
        assert_eq!(storage.base_dir(), nested.as_path());
    }

    #[tokio::test]
    async fn test_save_recreates_removed_dir() {
        let temp_dir = tempdir().unwrap();
        let dir = temp_dir.path().join("audio");
        let storage = FileAudioStorage::new(&dir).await.unwrap();
        std::fs::remove_dir(&dir).unwrap();

        let name = storage.save_audio(b"x").await.unwrap();
        assert!(storage.audio_exists(&name).await);
    }

    #[tokio::test]
    async fn test_empty_body_is_saved_verbatim() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();

        let name = storage.save_audio(b"").await.unwrap();
        assert_eq!(std::fs::read(storage.audio_path(&name)).unwrap().len(), 0);
    }
}
