use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tokio::task;
use tracing::debug;

use crate::db::models::gallery_images::{NewGalleryImage, UpdateGalleryImage};
use crate::db::repositories::gallery_images::GalleryImageRepository;
use crate::error::ApiError;
use crate::router::AppState;

use super::{DataResponse, DeleteResponse, IdQuery, UpdateRequest};

#[derive(Deserialize, Debug)]
pub struct GalleryQuery {
    pub event_type: Option<String>,
}

/// GET /v0/gallery?event_type=
pub async fn list_gallery_images(
    State(state): State<AppState>,
    Query(query): Query<GalleryQuery>,
) -> Result<impl IntoResponse, ApiError> {
    debug!("Fetching gallery images (event_type: {:?})", query.event_type);

    let repo = GalleryImageRepository::new(state.pool.clone());
    let images = task::spawn_blocking(move || match query.event_type {
        Some(event) => repo.find_by_event_type(&event),
        None => repo.find_ordered(),
    })
    .await??;

    Ok(Json(DataResponse::new(images)))
}

/// PUT /api/admin/gallery
pub async fn create_gallery_image(
    State(state): State<AppState>,
    Json(payload): Json<NewGalleryImage>,
) -> Result<impl IntoResponse, ApiError> {
    debug!("Creating gallery image");

    let repo = GalleryImageRepository::new(state.pool.clone());
    let created = task::spawn_blocking(move || repo.create(payload)).await??;

    Ok(Json(DataResponse::new(created)))
}

/// POST /api/admin/gallery
pub async fn update_gallery_image(
    State(state): State<AppState>,
    Json(payload): Json<UpdateRequest<UpdateGalleryImage>>,
) -> Result<impl IntoResponse, ApiError> {
    let pk_id = payload.id()?;
    debug!("Updating gallery image {}", pk_id);

    let repo = GalleryImageRepository::new(state.pool.clone());
    let changes = payload.changes;
    let updated = task::spawn_blocking(move || repo.update(pk_id, &changes)).await??;

    Ok(Json(DataResponse::new(updated)))
}

/// DELETE /api/admin/gallery?id=
pub async fn delete_gallery_image(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let pk_id = query.id()?;
    debug!("Deleting gallery image {}", pk_id);

    let repo = GalleryImageRepository::new(state.pool.clone());
    task::spawn_blocking(move || repo.delete(pk_id)).await??;

    Ok(Json(DeleteResponse::ok()))
}
