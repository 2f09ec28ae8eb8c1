//! HTTP Error Handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// 未知语音模式的固定提示
pub const UNKNOWN_VOICE_TYPE: &str = "unknown voice type";

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 未知语音模式，兼容旧客户端：HTTP 200 + error 字段
    UnknownVoiceType,
    BadRequest(String),
    /// 请求体被框架拒绝（413 过大、415 缺少 Content-Type 等），保留原状态码
    Rejected(StatusCode, String),
    NotFound(String),
    /// 上游聊天/语音服务失败
    BadGateway(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnknownVoiceType => StatusCode::OK,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Rejected(status, _) => *status,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::UnknownVoiceType => {
                tracing::warn!("Unknown voice type requested");
                UNKNOWN_VOICE_TYPE.to_string()
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                msg
            }
            ApiError::Rejected(status, msg) => {
                tracing::warn!(status = %status, error = %msg, "Request rejected");
                msg
            }
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
                msg
            }
            ApiError::BadGateway(msg) => {
                tracing::error!(error = %msg, "Upstream service failed");
                msg
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                msg
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // 语法错误与字段缺失/类型不符统一为 400
            JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
                ApiError::BadRequest(rejection.body_text())
            }
            other => ApiError::Rejected(other.status(), other.body_text()),
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        if e.is_missing_credentials() {
            return ApiError::Internal(e.to_string());
        }

        match e {
            ApplicationError::UnknownVoiceMode(_) => ApiError::UnknownVoiceType,
            ApplicationError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::ChatService(_) | ApplicationError::SpeechService(_) => {
                ApiError::BadGateway(e.to_string())
            }
            ApplicationError::StorageError(_) => ApiError::Internal(e.to_string()),
        }
    }
}
