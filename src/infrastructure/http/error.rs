//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ports::StoreError;

/// 404 响应体
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// 400 校验失败响应体
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<String>,
}

/// API 错误
///
/// 仅两类终态错误：校验失败（400，逐条信息）与资源不存在（404）
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Validation(Vec<String>),
}

impl ApiError {
    /// 菜单项不存在
    pub fn menu_item_not_found() -> Self {
        ApiError::NotFound("Menu item not found".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorResponse { error: msg }),
                )
                    .into_response()
            }
            ApiError::Validation(errors) => {
                tracing::warn!(count = errors.len(), "Payload validation failed");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationErrorResponse { errors }),
                )
                    .into_response()
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => ApiError::menu_item_not_found(),
        }
    }
}
