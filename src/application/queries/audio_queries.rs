//! Audio Queries - 音频查询

/// 获取音频查询
///
/// `filename` 为调用方传入的原始路径段，尚未校验
#[derive(Debug, Clone)]
pub struct GetAudioQuery {
    pub filename: String,
}

/// 获取音频响应
#[derive(Debug)]
pub struct GetAudioResponse {
    pub file: tokio::fs::File,
    pub size: u64,
    pub content_type: &'static str,
}
