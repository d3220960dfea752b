use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::postgres::schema::hackathons;

#[derive(Queryable, Identifiable, Debug, Clone, Serialize)]
#[diesel(table_name = hackathons)]
#[diesel(primary_key(id))]
pub struct Hackathon {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub url: String,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug, Clone)]
#[diesel(table_name = hackathons)]
pub struct NewHackathon {
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub url: String,
    pub image_url: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(AsChangeset, Deserialize, Debug, Clone, Default)]
#[diesel(table_name = hackathons)]
pub struct UpdateHackathon {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}
