use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::postgres::schema::social_links;

/// button_style is one of: default, instagram, discord.
#[derive(Queryable, Identifiable, Debug, Clone, Serialize)]
#[diesel(table_name = social_links)]
#[diesel(primary_key(id))]
pub struct SocialLink {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub link: String,
    pub button_text: String,
    pub button_style: String,
    pub order_position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug, Clone)]
#[diesel(table_name = social_links)]
pub struct NewSocialLink {
    pub title: String,
    pub description: String,
    pub link: String,
    pub button_text: String,
    pub button_style: String,
    pub order_position: i32,
}

#[derive(AsChangeset, Deserialize, Debug, Clone, Default)]
#[diesel(table_name = social_links)]
pub struct UpdateSocialLink {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub button_text: Option<String>,
    pub button_style: Option<String>,
    pub order_position: Option<i32>,
}
