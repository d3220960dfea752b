use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::postgres::schema::gallery_images;

/// `date` is the display date of the pictured event, kept as the free-form
/// string the admin typed rather than a parsed timestamp.
#[derive(Queryable, Identifiable, Debug, Clone, Serialize)]
#[diesel(table_name = gallery_images)]
#[diesel(primary_key(id))]
pub struct GalleryImage {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub event_type: String,
    pub date: String,
    pub order_position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug, Clone)]
#[diesel(table_name = gallery_images)]
pub struct NewGalleryImage {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub event_type: String,
    pub date: String,
    pub order_position: i32,
}

#[derive(AsChangeset, Deserialize, Debug, Clone, Default)]
#[diesel(table_name = gallery_images)]
pub struct UpdateGalleryImage {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub event_type: Option<String>,
    pub date: Option<String>,
    pub order_position: Option<i32>,
}
