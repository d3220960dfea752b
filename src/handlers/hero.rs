use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tokio::task;
use tracing::debug;

use crate::db::models::hero_content::UpdateHeroContent;
use crate::db::repositories::hero_content::HeroContentRepository;
use crate::error::ApiError;
use crate::router::AppState;

use super::{DataResponse, UpdateRequest};

/// GET /v0/hero
pub async fn get_hero(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    debug!("Fetching hero content");

    let repo = HeroContentRepository::new(state.pool.clone());
    let hero = task::spawn_blocking(move || repo.find_current()).await??;

    let hero = hero.ok_or(ApiError::NotFound("hero content"))?;
    Ok(Json(DataResponse::new(hero)))
}

/// POST /api/admin/hero
pub async fn update_hero(
    State(state): State<AppState>,
    Json(payload): Json<UpdateRequest<UpdateHeroContent>>,
) -> Result<impl IntoResponse, ApiError> {
    let pk_id = payload.id()?;
    debug!("Updating hero content {}", pk_id);

    let repo = HeroContentRepository::new(state.pool.clone());
    let changes = payload.changes;
    let updated = task::spawn_blocking(move || repo.update(pk_id, &changes)).await??;

    Ok(Json(DataResponse::new(updated)))
}
