use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tokio::task;
use tracing::debug;

use crate::db::models::coding_challenges::{
    CodingChallenge, NewCodingChallenge, UpdateCodingChallenge,
};
use crate::db::repositories::coding_challenges::CodingChallengeRepository;
use crate::error::ApiError;
use crate::router::AppState;

use super::{DataResponse, DeleteResponse, IdQuery, UpdateRequest};

#[derive(Deserialize, Debug)]
pub struct ChallengeQuery {
    pub week: Option<i32>,
    pub platform: Option<String>,
}

/// One week of challenges as the challenges page renders it.
#[derive(Serialize, Debug)]
pub struct ChallengeWeek {
    pub week_number: i32,
    pub challenges: Vec<CodingChallenge>,
}

/// Folds a week-ordered challenge list into per-week groups.
pub fn group_by_week(challenges: Vec<CodingChallenge>) -> Vec<ChallengeWeek> {
    let mut weeks: Vec<ChallengeWeek> = Vec::new();
    for challenge in challenges {
        match weeks.last_mut() {
            Some(week) if week.week_number == challenge.week_number => {
                week.challenges.push(challenge);
            }
            _ => weeks.push(ChallengeWeek {
                week_number: challenge.week_number,
                challenges: vec![challenge],
            }),
        }
    }
    weeks
}

/// GET /v0/challenges?week=&platform= — active challenges only.
pub async fn list_challenges(
    State(state): State<AppState>,
    Query(query): Query<ChallengeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    debug!(
        "Fetching challenges (week: {:?}, platform: {:?})",
        query.week, query.platform
    );

    let repo = CodingChallengeRepository::new(state.pool.clone());
    let platform = query.platform.clone();
    let challenges =
        task::spawn_blocking(move || repo.find_active(platform.as_deref())).await??;

    let mut weeks = group_by_week(challenges);
    if let Some(week) = query.week {
        weeks.retain(|group| group.week_number == week);
    }

    Ok(Json(DataResponse::new(weeks)))
}

/// PUT /api/admin/challenges
pub async fn create_challenge(
    State(state): State<AppState>,
    Json(payload): Json<NewCodingChallenge>,
) -> Result<impl IntoResponse, ApiError> {
    debug!("Creating coding challenge");

    let repo = CodingChallengeRepository::new(state.pool.clone());
    let created = task::spawn_blocking(move || repo.create(payload)).await??;

    Ok(Json(DataResponse::new(created)))
}

/// POST /api/admin/challenges
pub async fn update_challenge(
    State(state): State<AppState>,
    Json(payload): Json<UpdateRequest<UpdateCodingChallenge>>,
) -> Result<impl IntoResponse, ApiError> {
    let pk_id = payload.id()?;
    debug!("Updating coding challenge {}", pk_id);

    let repo = CodingChallengeRepository::new(state.pool.clone());
    let changes = payload.changes;
    let updated = task::spawn_blocking(move || repo.update(pk_id, &changes)).await??;

    Ok(Json(DataResponse::new(updated)))
}

/// DELETE /api/admin/challenges?id=
pub async fn delete_challenge(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let pk_id = query.id()?;
    debug!("Deleting coding challenge {}", pk_id);

    let repo = CodingChallengeRepository::new(state.pool.clone());
    task::spawn_blocking(move || repo.delete(pk_id)).await??;

    Ok(Json(DeleteResponse::ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn challenge(week_number: i32, title: &str) -> CodingChallenge {
        CodingChallenge {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: String::new(),
            url: "https://dmoj.ca/problem/ccc15j1".to_string(),
            week_number,
            platform: "dmoj".to_string(),
            difficulty: "beginner".to_string(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn groups_challenges_by_week() {
        let weeks = group_by_week(vec![
            challenge(1, "ccc15j1"),
            challenge(1, "ccc15j2"),
            challenge(3, "ccc16j1"),
        ]);

        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].week_number, 1);
        assert_eq!(weeks[0].challenges.len(), 2);
        assert_eq!(weeks[1].week_number, 3);
        assert_eq!(weeks[1].challenges[0].title, "ccc16j1");
    }

    #[test]
    fn single_week_collapses_to_one_group() {
        let weeks = group_by_week(vec![challenge(2, "a"), challenge(2, "b")]);
        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks[0].challenges.len(), 2);
    }
}
