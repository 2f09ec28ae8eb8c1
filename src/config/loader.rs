//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量（`SAMBEOM_` 前缀）
//! 2. 配置文件（config.toml）
//! 3. `OPENAI_API_KEY` / `KAKAO_API_KEY`
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{mask_secret, AppConfig};
use crate::domain::DEFAULT_SYSTEM_PROMPT;
use crate::infrastructure::adapters::{
    DEFAULT_CHAT_MODEL, DEFAULT_KAKAO_TTS_URL, DEFAULT_KAKAO_VOICE, DEFAULT_OPENAI_BASE_URL,
};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 聊天模型 API key 的环境变量
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Kakao TTS API key 的环境变量
pub const KAKAO_API_KEY_ENV: &str = "KAKAO_API_KEY";

/// 加载应用配置
///
/// # 环境变量示例
/// - `OPENAI_API_KEY=sk-...`
/// - `KAKAO_API_KEY=...`
/// - `SAMBEOM_SERVER__PORT=8080`
/// - `SAMBEOM_LLM__MODEL=gpt-4.1`
/// - `SAMBEOM_STORAGE__AUDIO_DIR=/data/audio`
///
/// API key 缺失不会导致启动失败，首次调用对应服务时才会报错
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级），API key 从通用环境变量取
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("server.body_limit_bytes", 1024 * 1024)?
        .set_default("llm.base_url", DEFAULT_OPENAI_BASE_URL)?
        .set_default("llm.api_key", std::env::var(OPENAI_API_KEY_ENV).unwrap_or_default())?
        .set_default("llm.model", DEFAULT_CHAT_MODEL)?
        .set_default("llm.system_prompt", DEFAULT_SYSTEM_PROMPT)?
        .set_default("llm.timeout_secs", 120)?
        .set_default("tts.url", DEFAULT_KAKAO_TTS_URL)?
        .set_default("tts.api_key", std::env::var(KAKAO_API_KEY_ENV).unwrap_or_default())?
        .set_default("tts.voice", DEFAULT_KAKAO_VOICE)?
        .set_default("tts.timeout_secs", 120)?
        .set_default("storage.audio_dir", "audio")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: SAMBEOM_，层级分隔符: __
    // 例如: SAMBEOM_TTS__VOICE=MAN_DIALOG_BRIGHT
    builder = builder.add_source(
        Environment::with_prefix("SAMBEOM")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.llm.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "LLM base URL cannot be empty".to_string(),
        ));
    }

    if config.llm.model.is_empty() {
        return Err(ConfigError::ValidationError(
            "LLM model cannot be empty".to_string(),
        ));
    }

    if config.tts.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS URL cannot be empty".to_string(),
        ));
    }

    if config.tts.voice.is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS voice cannot be empty".to_string(),
        ));
    }

    if config.storage.audio_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Audio directory cannot be empty".to_string(),
        ));
    }

    if config.llm.timeout_secs == 0 || config.tts.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Timeouts must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("LLM Base URL: {}", config.llm.base_url);
    tracing::info!("LLM Model: {}", config.llm.model);
    tracing::info!("LLM API Key: {}", mask_secret(&config.llm.api_key));
    tracing::info!("LLM Timeout: {}s", config.llm.timeout_secs);
    tracing::info!("TTS URL: {}", config.tts.url);
    tracing::info!("TTS Voice: {}", config.tts.voice);
    tracing::info!("TTS API Key: {}", mask_secret(&config.tts.api_key));
    tracing::info!("TTS Timeout: {}s", config.tts.timeout_secs);
    tracing::info!("Audio Directory: {:?}", config.storage.audio_dir);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");

    if config.llm.api_key.is_empty() {
        tracing::warn!("{} is not set; /chat will fail until it is", OPENAI_API_KEY_ENV);
    }
    if config.tts.api_key.is_empty() {
        tracing::warn!("{} is not set; funny voice will fail until it is", KAKAO_API_KEY_ENV);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_tts_url() {
        let mut config = AppConfig::default();
        config.tts.url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_model() {
        let mut config = AppConfig::default();
        config.llm.model = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_timeout() {
        let mut config = AppConfig::default();
        config.tts.timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_missing_api_keys_pass_validation() {
        let mut config = AppConfig::default();
        config.llm.api_key = String::new();
        config.tts.api_key = String::new();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 9001

[tts]
voice = "MAN_DIALOG_BRIGHT"

[storage]
audio_dir = "/tmp/sambeom-audio"
"#
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.tts.voice, "MAN_DIALOG_BRIGHT");
        assert_eq!(
            config.storage.audio_dir,
            std::path::PathBuf::from("/tmp/sambeom-audio")
        );
        assert_eq!(config.llm.model, "gpt-4.1-mini");
    }
}
