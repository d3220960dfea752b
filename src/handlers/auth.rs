use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::auth::bearer_token;
use crate::error::ApiError;
use crate::router::AppState;

use super::{DataResponse, DeleteResponse};

#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    pub password: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct LoginData {
    pub token: Uuid,
    pub expires_in: u64,
}

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let password = payload.password.ok_or(ApiError::MissingField("password"))?;

    if password != state.config.admin_password {
        debug!("Rejected admin login attempt");
        return Err(ApiError::Unauthorized);
    }

    let token = state.sessions.issue();
    info!("Admin session issued");
    Ok(Json(DataResponse::new(LoginData {
        token,
        expires_in: state.sessions.ttl().as_secs(),
    })))
}

/// POST /api/admin/logout — revokes the presented session token.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    // The admin middleware has already validated the token; re-parse it
    // here to know which session to drop.
    let token = bearer_token(headers.get(AUTHORIZATION)).ok_or(ApiError::Unauthorized)?;
    state.sessions.revoke(token);
    info!("Admin session revoked");
    Ok(Json(DeleteResponse::ok()))
}
