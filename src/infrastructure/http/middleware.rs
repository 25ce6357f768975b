//! HTTP Middleware
//!
//! 请求日志中间件：记录时间戳、方法、路径；POST/PUT 额外回显请求体

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::Method,
    middleware::Next,
    response::Response,
};
use chrono::Utc;

/// 请求日志中间件
///
/// 在路由匹配前记录每个请求，只产生日志副作用，不拒绝也不修改请求。
/// POST/PUT 的请求体会被完整缓冲后回填，再交给后续 handler。
/// 响应返回后按状态码补记 4xx/5xx 日志。
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let timestamp = Utc::now().to_rfc3339();
    let method = request.method().clone();
    let uri = request.uri().clone();

    let request = if method == Method::POST || method == Method::PUT {
        let (parts, body) = request.into_parts();
        match to_bytes(body, usize::MAX).await {
            Ok(bytes) => {
                tracing::info!(
                    timestamp = %timestamp,
                    method = %method,
                    uri = %uri,
                    body = %String::from_utf8_lossy(&bytes),
                    "Incoming request"
                );
                Request::from_parts(parts, Body::from(bytes))
            }
            Err(e) => {
                tracing::warn!(
                    timestamp = %timestamp,
                    method = %method,
                    uri = %uri,
                    error = %e,
                    "Failed to buffer request body"
                );
                Request::from_parts(parts, Body::empty())
            }
        }
    } else {
        tracing::info!(
            timestamp = %timestamp,
            method = %method,
            uri = %uri,
            "Incoming request"
        );
        request
    };

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{Request as HttpRequest, StatusCode},
        routing::{get, post},
        Router,
    };
    use tower::util::ServiceExt;

    async fn ok_handler() -> &'static str {
        "OK"
    }

    async fn echo_handler(body: String) -> String {
        body
    }

    async fn not_found_handler() -> StatusCode {
        StatusCode::NOT_FOUND
    }

    fn create_test_router() -> Router {
        Router::new()
            .route("/ok", get(ok_handler))
            .route("/echo", post(echo_handler))
            .route("/not-found", get(not_found_handler))
            .layer(axum::middleware::from_fn(request_logging_middleware))
    }

    #[tokio::test]
    async fn test_get_request_passes_through() {
        let app = create_test_router();
        let request = HttpRequest::builder()
            .uri("/ok")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_post_body_survives_logging() {
        // 请求体被缓冲记录后必须原样回填
        let app = create_test_router();
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/echo")
            .body(Body::from("hello menu"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"hello menu");
    }

    #[tokio::test]
    async fn test_client_error_logs_warning() {
        let app = create_test_router();
        let request = HttpRequest::builder()
            .uri("/not-found")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
