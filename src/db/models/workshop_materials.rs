use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::models::workshops::Workshop;
use crate::db::postgres::schema::workshop_materials;

/// material_type is one of: document, video, slides, code, other.
#[derive(Queryable, Identifiable, Associations, Debug, Clone, Serialize)]
#[diesel(table_name = workshop_materials)]
#[diesel(belongs_to(Workshop))]
#[diesel(primary_key(id))]
pub struct WorkshopMaterial {
    pub id: Uuid,
    pub workshop_id: Uuid,
    pub title: String,
    pub url: String,
    pub material_type: String,
    pub order_position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug, Clone)]
#[diesel(table_name = workshop_materials)]
pub struct NewWorkshopMaterial {
    pub workshop_id: Uuid,
    pub title: String,
    pub url: String,
    pub material_type: String,
    pub order_position: i32,
}
