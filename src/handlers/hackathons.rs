use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use tokio::task;
use tracing::debug;

use crate::db::models::hackathons::{NewHackathon, UpdateHackathon};
use crate::db::repositories::hackathons::HackathonRepository;
use crate::error::ApiError;
use crate::router::AppState;

use super::{DataResponse, DeleteResponse, IdQuery, UpdateRequest};

/// GET /v0/hackathons — active hackathons only.
pub async fn list_hackathons(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    debug!("Fetching hackathons");

    let repo = HackathonRepository::new(state.pool.clone());
    let hackathons = task::spawn_blocking(move || repo.find_active()).await??;

    Ok(Json(DataResponse::new(hackathons)))
}

/// PUT /api/admin/hackathons
pub async fn create_hackathon(
    State(state): State<AppState>,
    Json(payload): Json<NewHackathon>,
) -> Result<impl IntoResponse, ApiError> {
    debug!("Creating hackathon");

    let repo = HackathonRepository::new(state.pool.clone());
    let created = task::spawn_blocking(move || repo.create(payload)).await??;

    Ok(Json(DataResponse::new(created)))
}

/// POST /api/admin/hackathons
pub async fn update_hackathon(
    State(state): State<AppState>,
    Json(payload): Json<UpdateRequest<UpdateHackathon>>,
) -> Result<impl IntoResponse, ApiError> {
    let pk_id = payload.id()?;
    debug!("Updating hackathon {}", pk_id);

    let repo = HackathonRepository::new(state.pool.clone());
    let changes = payload.changes;
    let updated = task::spawn_blocking(move || repo.update(pk_id, &changes)).await??;

    Ok(Json(DataResponse::new(updated)))
}

/// DELETE /api/admin/hackathons?id=
pub async fn delete_hackathon(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let pk_id = query.id()?;
    debug!("Deleting hackathon {}", pk_id);

    let repo = HackathonRepository::new(state.pool.clone());
    task::spawn_blocking(move || repo.delete(pk_id)).await??;

    Ok(Json(DeleteResponse::ok()))
}
