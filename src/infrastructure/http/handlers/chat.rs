//! Chat Handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::application::ChatCommand;
use crate::infrastructure::http::dto::{ChatRequest, ChatResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 聊天：生成文本，funny 模式下额外合成语音
pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = payload?;

    tracing::info!(
        voice = %req.voice,
        message_len = req.message.len(),
        "Chat request"
    );

    let command = ChatCommand {
        message: req.message,
        voice: req.voice,
    };

    let result = state.chat_handler.handle(command).await?;

    Ok(Json(ChatResponse::from(result)))
}
