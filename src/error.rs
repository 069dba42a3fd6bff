use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// 统一错误类型，所有 handler 以 `?` 向上传播
#[derive(Debug)]
pub enum AppError {
    NotFound(&'static str),
    Validation(String),
    Internal,
    Database(sqlx::Error),
}

/// 统一错误响应结构
#[derive(Serialize)]
struct ErrorResponse {
    kind: &'static str,
    message: String,
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Database(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(_: serde_json::Error) -> Self {
        AppError::Internal
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.to_string()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation", msg),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal",
                "内部服务器错误".to_string(),
            ),
            AppError::Database(e) => {
                // 驱动错误细节只进日志，不回传给客户端
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database",
                    "数据库查询失败".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse { kind, message });

        (status, body).into_response()
    }
}
