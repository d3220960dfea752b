use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use tokio::task;
use tracing::debug;

use crate::db::models::competitions::{NewCompetition, UpdateCompetition};
use crate::db::repositories::competitions::CompetitionRepository;
use crate::error::ApiError;
use crate::router::AppState;

use super::{DataResponse, DeleteResponse, IdQuery, UpdateRequest};

/// GET /v0/competitions — active competitions only.
pub async fn list_competitions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    debug!("Fetching competitions");

    let repo = CompetitionRepository::new(state.pool.clone());
    let competitions = task::spawn_blocking(move || repo.find_active()).await??;

    Ok(Json(DataResponse::new(competitions)))
}

/// PUT /api/admin/competitions
pub async fn create_competition(
    State(state): State<AppState>,
    Json(payload): Json<NewCompetition>,
) -> Result<impl IntoResponse, ApiError> {
    debug!("Creating competition");

    let repo = CompetitionRepository::new(state.pool.clone());
    let created = task::spawn_blocking(move || repo.create(payload)).await??;

    Ok(Json(DataResponse::new(created)))
}

/// POST /api/admin/competitions
pub async fn update_competition(
    State(state): State<AppState>,
    Json(payload): Json<UpdateRequest<UpdateCompetition>>,
) -> Result<impl IntoResponse, ApiError> {
    let pk_id = payload.id()?;
    debug!("Updating competition {}", pk_id);

    let repo = CompetitionRepository::new(state.pool.clone());
    let changes = payload.changes;
    let updated = task::spawn_blocking(move || repo.update(pk_id, &changes)).await??;

    Ok(Json(DataResponse::new(updated)))
}

/// DELETE /api/admin/competitions?id=
pub async fn delete_competition(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let pk_id = query.id()?;
    debug!("Deleting competition {}", pk_id);

    let repo = CompetitionRepository::new(state.pool.clone());
    task::spawn_blocking(move || repo.delete(pk_id)).await??;

    Ok(Json(DeleteResponse::ok()))
}
