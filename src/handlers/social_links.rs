use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use tokio::task;
use tracing::debug;

use crate::db::models::social_links::{NewSocialLink, UpdateSocialLink};
use crate::db::repositories::social_links::SocialLinkRepository;
use crate::error::ApiError;
use crate::router::AppState;

use super::{DataResponse, DeleteResponse, IdQuery, UpdateRequest};

/// GET /v0/social-links
pub async fn list_social_links(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    debug!("Fetching social links");

    let repo = SocialLinkRepository::new(state.pool.clone());
    let links = task::spawn_blocking(move || repo.find_ordered()).await??;

    Ok(Json(DataResponse::new(links)))
}

/// PUT /api/admin/social-links
pub async fn create_social_link(
    State(state): State<AppState>,
    Json(payload): Json<NewSocialLink>,
) -> Result<impl IntoResponse, ApiError> {
    debug!("Creating social link");

    let repo = SocialLinkRepository::new(state.pool.clone());
    let created = task::spawn_blocking(move || repo.create(payload)).await??;

    Ok(Json(DataResponse::new(created)))
}

/// POST /api/admin/social-links
pub async fn update_social_link(
    State(state): State<AppState>,
    Json(payload): Json<UpdateRequest<UpdateSocialLink>>,
) -> Result<impl IntoResponse, ApiError> {
    let pk_id = payload.id()?;
    debug!("Updating social link {}", pk_id);

    let repo = SocialLinkRepository::new(state.pool.clone());
    let changes = payload.changes;
    let updated = task::spawn_blocking(move || repo.update(pk_id, &changes)).await??;

    Ok(Json(DataResponse::new(updated)))
}

/// DELETE /api/admin/social-links?id=
pub async fn delete_social_link(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let pk_id = query.id()?;
    debug!("Deleting social link {}", pk_id);

    let repo = SocialLinkRepository::new(state.pool.clone());
    task::spawn_blocking(move || repo.delete(pk_id)).await??;

    Ok(Json(DeleteResponse::ok()))
}
