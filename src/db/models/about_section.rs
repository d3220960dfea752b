use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::postgres::schema::about_section;

/// About block shown on the home page. Single-row resource like the hero.
#[derive(Queryable, Identifiable, Debug, Clone, Serialize)]
#[diesel(table_name = about_section)]
#[diesel(primary_key(id))]
pub struct AboutSection {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub meeting_location: String,
    pub meeting_time: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(AsChangeset, Deserialize, Debug, Clone, Default)]
#[diesel(table_name = about_section)]
pub struct UpdateAboutSection {
    pub title: Option<String>,
    pub description: Option<String>,
    pub meeting_location: Option<String>,
    pub meeting_time: Option<String>,
}
