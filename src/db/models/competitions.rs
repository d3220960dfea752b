use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::postgres::schema::competitions;

#[derive(Queryable, Identifiable, Debug, Clone, Serialize)]
#[diesel(table_name = competitions)]
#[diesel(primary_key(id))]
pub struct Competition {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub platform: String,
    pub date: String,
    pub registration_deadline: String,
    pub url: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug, Clone)]
#[diesel(table_name = competitions)]
pub struct NewCompetition {
    pub title: String,
    pub description: String,
    pub platform: String,
    pub date: String,
    pub registration_deadline: String,
    pub url: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(AsChangeset, Deserialize, Debug, Clone, Default)]
#[diesel(table_name = competitions)]
pub struct UpdateCompetition {
    pub title: Option<String>,
    pub description: Option<String>,
    pub platform: Option<String>,
    pub date: Option<String>,
    pub registration_deadline: Option<String>,
    pub url: Option<String>,
    pub is_active: Option<bool>,
}
