//! Data Transfer Objects
//!
//! POST/PUT 请求体在进入 handler 之前由 `ValidMenuItem` 完成校验：
//! 任何一条规则失败都会以 400 短路，handler 不会被调用

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde_json::Value;

use crate::domain::menu::{validate_menu_payload, MenuItemPayload};

use super::error::ApiError;

/// 校验通过的菜单项载荷
///
/// 校验规则对创建和更新完全一致，载荷必须携带全部必填字段；
/// `available` 缺省时已在载荷中补为 true
pub struct ValidMenuItem(pub MenuItemPayload);

#[async_trait]
impl<S> FromRequest<S> for ValidMenuItem
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| ApiError::Validation(vec![format!("Invalid JSON body: {}", e)]))?;

        let payload = validate_menu_payload(&body).map_err(ApiError::Validation)?;
        Ok(Self(payload))
    }
}
