use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::models::workshop_materials::WorkshopMaterial;
use crate::db::postgres::schema::workshops;

#[derive(Queryable, Identifiable, Debug, Clone, Serialize)]
#[diesel(table_name = workshops)]
#[diesel(primary_key(id))]
pub struct Workshop {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: String,
    pub week_number: i32,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug, Clone)]
#[diesel(table_name = workshops)]
pub struct NewWorkshop {
    pub title: String,
    pub description: String,
    pub date: String,
    pub week_number: i32,
    pub image_url: Option<String>,
}

#[derive(AsChangeset, Deserialize, Debug, Clone, Default)]
#[diesel(table_name = workshops)]
pub struct UpdateWorkshop {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub week_number: Option<i32>,
    pub image_url: Option<String>,
}

/// Workshop with its materials attached, as the workshops page consumes it.
#[derive(Debug, Clone, Serialize)]
pub struct WorkshopWithMaterials {
    #[serde(flatten)]
    pub workshop: Workshop,
    pub materials: Vec<WorkshopMaterial>,
}
