use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::postgres::schema::coding_challenges;

/// Weekly problem posted for the club. platform is one of: dmoj, leetcode,
/// hackerrank, tournament, other; difficulty one of: beginner, medium,
/// advanced, na.
#[derive(Queryable, Identifiable, Debug, Clone, Serialize)]
#[diesel(table_name = coding_challenges)]
#[diesel(primary_key(id))]
pub struct CodingChallenge {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub url: String,
    pub week_number: i32,
    pub platform: String,
    pub difficulty: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug, Clone)]
#[diesel(table_name = coding_challenges)]
pub struct NewCodingChallenge {
    pub title: String,
    pub description: String,
    pub url: String,
    pub week_number: i32,
    pub platform: String,
    pub difficulty: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(AsChangeset, Deserialize, Debug, Clone, Default)]
#[diesel(table_name = coding_challenges)]
pub struct UpdateCodingChallenge {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub week_number: Option<i32>,
    pub platform: Option<String>,
    pub difficulty: Option<String>,
    pub is_active: Option<bool>,
}
