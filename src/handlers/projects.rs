use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tokio::task;
use tracing::debug;

use crate::db::models::featured_projects::{NewFeaturedProject, UpdateFeaturedProject};
use crate::db::repositories::featured_projects::FeaturedProjectRepository;
use crate::error::ApiError;
use crate::router::AppState;

use super::{DataResponse, DeleteResponse, IdQuery, UpdateRequest};

#[derive(Deserialize, Debug)]
pub struct ProjectQuery {
    pub tag: Option<String>,
}

/// GET /v0/projects?tag=
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectQuery>,
) -> Result<impl IntoResponse, ApiError> {
    debug!("Fetching featured projects (tag: {:?})", query.tag);

    let repo = FeaturedProjectRepository::new(state.pool.clone());
    let projects = task::spawn_blocking(move || match query.tag {
        Some(tag) => repo.find_by_tag(&tag),
        None => repo.find_all(),
    })
    .await??;

    Ok(Json(DataResponse::new(projects)))
}

/// PUT /api/admin/projects
pub async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<NewFeaturedProject>,
) -> Result<impl IntoResponse, ApiError> {
    debug!("Creating featured project");

    let repo = FeaturedProjectRepository::new(state.pool.clone());
    let created = task::spawn_blocking(move || repo.create(payload)).await??;

    Ok(Json(DataResponse::new(created)))
}

/// POST /api/admin/projects
pub async fn update_project(
    State(state): State<AppState>,
    Json(payload): Json<UpdateRequest<UpdateFeaturedProject>>,
) -> Result<impl IntoResponse, ApiError> {
    let pk_id = payload.id()?;
    debug!("Updating featured project {}", pk_id);

    let repo = FeaturedProjectRepository::new(state.pool.clone());
    let changes = payload.changes;
    let updated = task::spawn_blocking(move || repo.update(pk_id, &changes)).await??;

    Ok(Json(DataResponse::new(updated)))
}

/// DELETE /api/admin/projects?id=
pub async fn delete_project(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let pk_id = query.id()?;
    debug!("Deleting featured project {}", pk_id);

    let repo = FeaturedProjectRepository::new(state.pool.clone());
    task::spawn_blocking(move || repo.delete(pk_id)).await??;

    Ok(Json(DeleteResponse::ok()))
}
