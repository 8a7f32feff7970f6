use axum::{body::Bytes, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};

use crate::auth::authenticate;
use crate::domain::User;
use super::error::ApiError;

#[derive(Debug, Default, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    /// Reads the credentials from any body. Missing content type, malformed JSON or
    /// non-string fields all leave the field blank, which never matches an account.
    pub fn from_body(body: &[u8]) -> Self {
        let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
        let field = |key: &str| value.get(key).and_then(Value::as_str).unwrap_or_default().to_string();
        Self { username: field("username"), password: field("password") }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: User,
    pub token: &'static str,
}

#[instrument(skip(body))]
pub async fn login(body: Bytes) -> Result<Json<LoginResponse>, ApiError> {
    let request = LoginRequest::from_body(&body);
    let session = authenticate(&request.username, &request.password)?;
    info!(username = session.user.username, admin = session.user.is_admin(), "Session opened");
    Ok(Json(LoginResponse { success: true, user: session.user, token: session.token }))
}
