use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::postgres::schema::hero_content;

/// Landing-page hero block. The table holds a single row in practice;
/// reads always take the first row.
#[derive(Queryable, Identifiable, Debug, Clone, Serialize)]
#[diesel(table_name = hero_content)]
#[diesel(primary_key(id))]
pub struct HeroContent {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub primary_button_text: String,
    pub primary_button_link: String,
    pub secondary_button_text: String,
    pub secondary_button_link: String,
    pub hero_image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(AsChangeset, Deserialize, Debug, Clone, Default)]
#[diesel(table_name = hero_content)]
pub struct UpdateHeroContent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub primary_button_text: Option<String>,
    pub primary_button_link: Option<String>,
    pub secondary_button_text: Option<String>,
    pub secondary_button_link: Option<String>,
    pub hero_image_url: Option<String>,
}
