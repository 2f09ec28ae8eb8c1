//! HTTP Routes
//!
//! API Endpoints:
//! - /chat               POST  聊天（gpt: 纯文本，funny: 文本 + 语音）
//! - /audio/{filename}   GET   获取生成的音频
//! - /api/ping           GET   健康检查

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/chat", post(handlers::chat))
        .route("/audio/:filename", get(handlers::get_audio))
        .nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new().route("/ping", get(handlers::ping))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    use crate::infrastructure::adapters::{
        FakeChatClient, FakeTtsClient, FakeTtsClientConfig, FileAudioStorage,
    };

    const STUB_REPLY: &str = "또 질문이군. 플럭스 보정 완료.";
    const STUB_AUDIO: &[u8] = b"RIFF\x24\0\0\0WAVEfmt stub-audio";

    struct TestApp {
        router: Router,
        tts: Arc<FakeTtsClient>,
        dir: TempDir,
    }

    async fn test_app_with(chat: FakeChatClient) -> TestApp {
        let dir = tempfile::tempdir().unwrap();
        let tts = Arc::new(FakeTtsClient::new(FakeTtsClientConfig {
            audio_data: STUB_AUDIO.to_vec(),
            ..Default::default()
        }));
        let storage = Arc::new(FileAudioStorage::new(dir.path()).await.unwrap());
        let state = AppState::new(Arc::new(chat), tts.clone(), storage, "persona");
        let router = create_routes().with_state(Arc::new(state));
        TestApp { router, tts, dir }
    }

    async fn test_app() -> TestApp {
        test_app_with(FakeChatClient::replying(STUB_REPLY)).await
    }

    async fn post_chat(app: &TestApp, body: &str) -> Response {
        let request = Request::builder()
            .method("POST")
            .uri("/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        app.router.clone().oneshot(request).await.unwrap()
    }

    async fn get_uri(app: &TestApp, uri: &str) -> Response {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        app.router.clone().oneshot(request).await.unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    fn audio_file_name(audio: &str) -> &str {
        audio.strip_prefix("/audio/").expect("audio path prefix")
    }

    #[tokio::test]
    async fn test_gpt_voice_returns_text_only() {
        let app = test_app().await;

        let response = post_chat(&app, r#"{"message":"안녕","voice":"gpt"}"#).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(
            body,
            json!({"text": STUB_REPLY, "voice": "gpt", "audio": null})
        );
        assert_eq!(app.tts.call_count(), 0);
    }

    #[tokio::test]
    async fn test_funny_voice_writes_audio_file() {
        let app = test_app().await;

        let response = post_chat(&app, r#"{"message":"안녕","voice":"funny"}"#).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["text"], STUB_REPLY);
        assert_eq!(body["voice"], "funny");

        let audio = body["audio"].as_str().expect("audio should be set");
        let name = audio_file_name(audio);
        assert!(name.ends_with(".wav"));
        assert!(name
            .parse::<crate::domain::voice::AudioFileName>()
            .is_ok());

        let stored = std::fs::read(app.dir.path().join(name)).unwrap();
        assert_eq!(stored, STUB_AUDIO);
    }

    #[tokio::test]
    async fn test_unknown_voice_returns_error_payload() {
        let app = test_app().await;

        let response = post_chat(&app, r#"{"message":"안녕","voice":"loud"}"#).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"error": "unknown voice type"})
        );
        assert_eq!(app.tts.call_count(), 0);
        assert_eq!(std::fs::read_dir(app.dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_repeated_funny_requests_get_distinct_files() {
        let app = test_app().await;
        let payload = r#"{"message":"같은 말","voice":"funny"}"#;

        let first = body_json(post_chat(&app, payload).await).await;
        let second = body_json(post_chat(&app, payload).await).await;

        let a = first["audio"].as_str().unwrap().to_string();
        let b = second["audio"].as_str().unwrap().to_string();
        assert_ne!(a, b);
        assert_eq!(std::fs::read_dir(app.dir.path()).unwrap().count(), 2);
    }

    #[tokio::test]
    async fn test_audio_round_trip() {
        let app = test_app().await;

        let body = body_json(post_chat(&app, r#"{"message":"x","voice":"funny"}"#).await).await;
        let audio = body["audio"].as_str().unwrap().to_string();

        let response = get_uri(&app, &audio).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "audio/wav"
        );
        assert_eq!(
            response.headers().get(header::CONTENT_LENGTH).unwrap(),
            &STUB_AUDIO.len().to_string()
        );
        assert_eq!(body_bytes(response).await, STUB_AUDIO);
    }

    #[tokio::test]
    async fn test_missing_audio_is_not_found() {
        let app = test_app().await;

        let response = get_uri(&app, "/audio/does-not-exist.wav").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_json(response).await["error"].is_string());

        let missing = crate::domain::voice::AudioFileName::generate();
        let response = get_uri(&app, &missing.url_path()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_audio_traversal_is_not_found() {
        let app = test_app().await;
        std::fs::write(app.dir.path().join("secret.wav"), b"secret").unwrap();

        for uri in ["/audio/..%2FCargo.toml", "/audio/secret.wav", "/audio/%2E%2E"] {
            let response = get_uri(&app, uri).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
            let body = body_bytes(response).await;
            assert_ne!(body, b"secret");
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let app = test_app().await;

        for body in [r#"{"message":"x"}"#, "not json", r#"{"message":5,"voice":"gpt"}"#] {
            let response = post_chat(&app, body).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", body);
            assert!(body_json(response).await["error"].is_string());
        }
    }

    #[tokio::test]
    async fn test_missing_content_type_is_unsupported_media_type() {
        let app = test_app().await;

        let request = Request::builder()
            .method("POST")
            .uri("/chat")
            .body(Body::from(r#"{"message":"x","voice":"gpt"}"#))
            .unwrap();
        let response = app.router.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_chat_upstream_failure_is_bad_gateway() {
        let app = test_app_with(FakeChatClient::failing("HTTP 429: slow down")).await;

        let response = post_chat(&app, r#"{"message":"x","voice":"funny"}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(app.tts.call_count(), 0);
    }

    #[tokio::test]
    async fn test_ping() {
        let app = test_app().await;

        let response = get_uri(&app, "/api/ping").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }
}
