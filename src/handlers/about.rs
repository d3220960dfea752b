use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tokio::task;
use tracing::debug;

use crate::db::models::about_section::UpdateAboutSection;
use crate::db::repositories::about_section::AboutSectionRepository;
use crate::error::ApiError;
use crate::router::AppState;

use super::{DataResponse, UpdateRequest};

/// GET /v0/about
pub async fn get_about(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    debug!("Fetching about section");

    let repo = AboutSectionRepository::new(state.pool.clone());
    let about = task::spawn_blocking(move || repo.find_current()).await??;

    let about = about.ok_or(ApiError::NotFound("about section"))?;
    Ok(Json(DataResponse::new(about)))
}

/// POST /api/admin/about
pub async fn update_about(
    State(state): State<AppState>,
    Json(payload): Json<UpdateRequest<UpdateAboutSection>>,
) -> Result<impl IntoResponse, ApiError> {
    let pk_id = payload.id()?;
    debug!("Updating about section {}", pk_id);

    let repo = AboutSectionRepository::new(state.pool.clone());
    let changes = payload.changes;
    let updated = task::spawn_blocking(move || repo.update(pk_id, &changes)).await??;

    Ok(Json(DataResponse::new(updated)))
}
