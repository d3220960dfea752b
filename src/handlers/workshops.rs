use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tokio::task;
use tracing::debug;

use crate::db::models::workshop_materials::NewWorkshopMaterial;
use crate::db::models::workshops::{NewWorkshop, UpdateWorkshop, WorkshopWithMaterials};
use crate::db::repositories::workshop_materials::WorkshopMaterialRepository;
use crate::db::repositories::workshops::WorkshopRepository;
use crate::error::ApiError;
use crate::router::AppState;

use super::{DataResponse, DeleteResponse, IdQuery, UpdateRequest};

#[derive(Deserialize, Debug)]
pub struct WorkshopQuery {
    pub week: Option<i32>,
}

/// One week of the program as the workshops page renders it.
#[derive(Serialize, Debug)]
pub struct WorkshopWeek {
    pub week_number: i32,
    pub workshops: Vec<WorkshopWithMaterials>,
}

/// Folds a week-ordered workshop list into per-week groups, keeping the
/// incoming order inside each group.
pub fn group_by_week(workshops: Vec<WorkshopWithMaterials>) -> Vec<WorkshopWeek> {
    let mut weeks: Vec<WorkshopWeek> = Vec::new();
    for workshop in workshops {
        match weeks.last_mut() {
            Some(week) if week.week_number == workshop.workshop.week_number => {
                week.workshops.push(workshop);
            }
            _ => weeks.push(WorkshopWeek {
                week_number: workshop.workshop.week_number,
                workshops: vec![workshop],
            }),
        }
    }
    weeks
}

/// GET /v0/workshops?week=
pub async fn list_workshops(
    State(state): State<AppState>,
    Query(query): Query<WorkshopQuery>,
) -> Result<impl IntoResponse, ApiError> {
    debug!("Fetching workshops (week: {:?})", query.week);

    let repo = WorkshopRepository::new(state.pool.clone());
    let workshops = task::spawn_blocking(move || repo.find_all_with_materials()).await??;

    let mut weeks = group_by_week(workshops);
    if let Some(week) = query.week {
        weeks.retain(|group| group.week_number == week);
    }

    Ok(Json(DataResponse::new(weeks)))
}

/// PUT /api/admin/workshops
pub async fn create_workshop(
    State(state): State<AppState>,
    Json(payload): Json<NewWorkshop>,
) -> Result<impl IntoResponse, ApiError> {
    debug!("Creating workshop");

    let repo = WorkshopRepository::new(state.pool.clone());
    let created = task::spawn_blocking(move || repo.create(payload)).await??;

    Ok(Json(DataResponse::new(created)))
}

/// POST /api/admin/workshops
pub async fn update_workshop(
    State(state): State<AppState>,
    Json(payload): Json<UpdateRequest<UpdateWorkshop>>,
) -> Result<impl IntoResponse, ApiError> {
    let pk_id = payload.id()?;
    debug!("Updating workshop {}", pk_id);

    let repo = WorkshopRepository::new(state.pool.clone());
    let changes = payload.changes;
    let updated = task::spawn_blocking(move || repo.update(pk_id, &changes)).await??;

    Ok(Json(DataResponse::new(updated)))
}

/// DELETE /api/admin/workshops?id= — materials go with the workshop.
pub async fn delete_workshop(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let pk_id = query.id()?;
    debug!("Deleting workshop {} and its materials", pk_id);

    let repo = WorkshopRepository::new(state.pool.clone());
    task::spawn_blocking(move || repo.delete_with_materials(pk_id)).await??;

    Ok(Json(DeleteResponse::ok()))
}

/// PUT /api/admin/workshop-materials
pub async fn create_workshop_material(
    State(state): State<AppState>,
    Json(payload): Json<NewWorkshopMaterial>,
) -> Result<impl IntoResponse, ApiError> {
    debug!("Creating material for workshop {}", payload.workshop_id);

    let workshop_repo = WorkshopRepository::new(state.pool.clone());
    let material_repo = WorkshopMaterialRepository::new(state.pool.clone());

    let created = task::spawn_blocking(move || {
        // Reject materials pointing at a workshop that is gone; the FK
        // would catch it anyway but this keeps the error a clean 404.
        if workshop_repo.find(payload.workshop_id)?.is_none() {
            return Err(diesel::result::Error::NotFound);
        }
        material_repo.create(payload)
    })
    .await?
    .map_err(|err| match err {
        diesel::result::Error::NotFound => ApiError::NotFound("workshop"),
        other => ApiError::from(other),
    })?;

    Ok(Json(DataResponse::new(created)))
}

/// DELETE /api/admin/workshop-materials?id=
pub async fn delete_workshop_material(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let pk_id = query.id()?;
    debug!("Deleting workshop material {}", pk_id);

    let repo = WorkshopMaterialRepository::new(state.pool.clone());
    task::spawn_blocking(move || repo.delete(pk_id)).await??;

    Ok(Json(DeleteResponse::ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::workshops::Workshop;
    use chrono::Utc;
    use uuid::Uuid;

    fn workshop(week_number: i32, title: &str) -> WorkshopWithMaterials {
        WorkshopWithMaterials {
            workshop: Workshop {
                id: Uuid::new_v4(),
                title: title.to_string(),
                description: String::new(),
                date: "2024-10-01".to_string(),
                week_number,
                image_url: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            materials: Vec::new(),
        }
    }

    #[test]
    fn groups_consecutive_weeks_in_order() {
        let weeks = group_by_week(vec![
            workshop(1, "intro"),
            workshop(1, "setup"),
            workshop(2, "variables"),
            workshop(4, "functions"),
        ]);

        assert_eq!(weeks.len(), 3);
        assert_eq!(weeks[0].week_number, 1);
        assert_eq!(weeks[0].workshops.len(), 2);
        assert_eq!(weeks[0].workshops[1].workshop.title, "setup");
        assert_eq!(weeks[1].week_number, 2);
        assert_eq!(weeks[2].week_number, 4);
        assert_eq!(weeks[2].workshops.len(), 1);
    }

    #[test]
    fn empty_input_yields_no_weeks() {
        assert!(group_by_week(Vec::new()).is_empty());
    }
}
