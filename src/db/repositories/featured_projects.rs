use std::sync::Arc;

use chrono::Utc;
use diesel::prelude::*;
use diesel::result::Error;
use uuid::Uuid;

use crate::db::models::featured_projects::{
    FeaturedProject, NewFeaturedProject, UpdateFeaturedProject,
};
use crate::db::postgres::schema::featured_projects::dsl::*;

use super::{get_conn, DBPool};

#[derive(Clone)]
pub struct FeaturedProjectRepository {
    pool: Arc<DBPool>,
}

impl FeaturedProjectRepository {
    pub fn new(pool: Arc<DBPool>) -> Self {
        FeaturedProjectRepository { pool }
    }

    pub fn create(&self, new_item: NewFeaturedProject) -> Result<FeaturedProject, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::insert_into(featured_projects)
            .values(&new_item)
            .get_result(&mut conn)
    }

    /// Newest projects first, matching the order they are showcased in.
    pub fn find_all(&self) -> Result<Vec<FeaturedProject>, Error> {
        let mut conn = get_conn(&self.pool)?;
        featured_projects
            .order(created_at.desc())
            .load::<FeaturedProject>(&mut conn)
    }

    /// Projects carrying the given tag, via Postgres array containment.
    pub fn find_by_tag(&self, tag: &str) -> Result<Vec<FeaturedProject>, Error> {
        let mut conn = get_conn(&self.pool)?;
        featured_projects
            .filter(tags.contains(vec![tag.to_string()]))
            .order(created_at.desc())
            .load::<FeaturedProject>(&mut conn)
    }

    pub fn update(
        &self,
        pk_id: Uuid,
        changes: &UpdateFeaturedProject,
    ) -> Result<FeaturedProject, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::update(featured_projects.filter(id.eq(pk_id)))
            .set((changes, updated_at.eq(Utc::now())))
            .get_result(&mut conn)
    }

    pub fn delete(&self, pk_id: Uuid) -> Result<usize, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::delete(featured_projects.filter(id.eq(pk_id))).execute(&mut conn)
    }
}
