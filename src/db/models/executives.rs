use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::postgres::schema::executives;

#[derive(Queryable, Identifiable, Debug, Clone, Serialize)]
#[diesel(table_name = executives)]
#[diesel(primary_key(id))]
pub struct Executive {
    pub id: Uuid,
    pub name: String,
    pub grade: i32,
    pub role: Option<String>,
    pub order_position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug, Clone)]
#[diesel(table_name = executives)]
pub struct NewExecutive {
    pub name: String,
    pub grade: i32,
    pub role: Option<String>,
    pub order_position: i32,
}

#[derive(AsChangeset, Deserialize, Debug, Clone, Default)]
#[diesel(table_name = executives)]
pub struct UpdateExecutive {
    pub name: Option<String>,
    pub grade: Option<i32>,
    pub role: Option<String>,
    pub order_position: Option<i32>,
}
