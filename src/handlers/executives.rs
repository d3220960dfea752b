use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use tokio::task;
use tracing::debug;

use crate::db::models::executives::{NewExecutive, UpdateExecutive};
use crate::db::repositories::executives::ExecutiveRepository;
use crate::error::ApiError;
use crate::router::AppState;

use super::{DataResponse, DeleteResponse, IdQuery, UpdateRequest};

/// GET /v0/executives
pub async fn list_executives(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    debug!("Fetching executives");

    let repo = ExecutiveRepository::new(state.pool.clone());
    let executives = task::spawn_blocking(move || repo.find_ordered()).await??;

    Ok(Json(DataResponse::new(executives)))
}

/// PUT /api/admin/executives
pub async fn create_executive(
    State(state): State<AppState>,
    Json(payload): Json<NewExecutive>,
) -> Result<impl IntoResponse, ApiError> {
    debug!("Creating executive");

    let repo = ExecutiveRepository::new(state.pool.clone());
    let created = task::spawn_blocking(move || repo.create(payload)).await??;

    Ok(Json(DataResponse::new(created)))
}

/// POST /api/admin/executives
pub async fn update_executive(
    State(state): State<AppState>,
    Json(payload): Json<UpdateRequest<UpdateExecutive>>,
) -> Result<impl IntoResponse, ApiError> {
    let pk_id = payload.id()?;
    debug!("Updating executive {}", pk_id);

    let repo = ExecutiveRepository::new(state.pool.clone());
    let changes = payload.changes;
    let updated = task::spawn_blocking(move || repo.update(pk_id, &changes)).await??;

    Ok(Json(DataResponse::new(updated)))
}

/// DELETE /api/admin/executives?id=
pub async fn delete_executive(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let pk_id = query.id()?;
    debug!("Deleting executive {}", pk_id);

    let repo = ExecutiveRepository::new(state.pool.clone());
    task::spawn_blocking(move || repo.delete(pk_id)).await??;

    Ok(Json(DeleteResponse::ok()))
}
