//! Sambeom - 带人设的语音聊天后端
//!
//! POST /chat 生成回复，funny 模式下调用 Kakao TTS 并通过 /audio 提供音频

use std::sync::Arc;

use sambeom::config::{load_config, print_config, LogConfig};
use sambeom::infrastructure::adapters::{
    FileAudioStorage, KakaoTtsClient, KakaoTtsClientConfig, OpenAiChatClient,
    OpenAiChatClientConfig,
};
use sambeom::infrastructure::http::{AppState, HttpServer, ServerConfig};

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},sambeom={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 可选
    let dotenv_loaded = dotenvy::dotenv().ok();

    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Sambeom voice chat backend v{}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = dotenv_loaded {
        tracing::info!("Loaded environment from {}", path.display());
    }
    print_config(&config);

    // 音频目录在启动时创建
    let audio_storage = Arc::new(
        FileAudioStorage::new(&config.storage.audio_dir)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to prepare audio directory: {}", e))?,
    );

    let chat_config = OpenAiChatClientConfig::new(config.llm.api_key.clone())
        .with_base_url(config.llm.base_url.clone())
        .with_model(config.llm.model.clone())
        .with_timeout(config.llm.timeout_secs);
    let chat_client = Arc::new(OpenAiChatClient::new(chat_config)?);

    let tts_config = KakaoTtsClientConfig::new(config.tts.api_key.clone())
        .with_url(config.tts.url.clone())
        .with_voice(config.tts.voice.clone())
        .with_timeout(config.tts.timeout_secs);
    let tts_engine = Arc::new(KakaoTtsClient::new(tts_config)?);

    let state = AppState::new(
        chat_client,
        tts_engine,
        audio_storage,
        config.llm.system_prompt.clone(),
    );

    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_body_limit(config.server.body_limit_bytes);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
