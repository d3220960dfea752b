use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::postgres::schema::featured_projects;

#[derive(Queryable, Identifiable, Debug, Clone, Serialize)]
#[diesel(table_name = featured_projects)]
#[diesel(primary_key(id))]
pub struct FeaturedProject {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub project_url: String,
    pub github_url: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug, Clone)]
#[diesel(table_name = featured_projects)]
pub struct NewFeaturedProject {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub project_url: String,
    pub github_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(AsChangeset, Deserialize, Debug, Clone, Default)]
#[diesel(table_name = featured_projects)]
pub struct UpdateFeaturedProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub tags: Option<Vec<String>>,
}
