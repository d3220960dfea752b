use std::sync::Arc;

use chrono::Utc;
use diesel::prelude::*;
use diesel::result::Error;
use uuid::Uuid;

use crate::db::models::hero_content::{HeroContent, UpdateHeroContent};
use crate::db::postgres::schema::hero_content::dsl::*;

use super::{get_conn, DBPool};

/// Repository for the single-row hero block.
#[derive(Clone)]
pub struct HeroContentRepository {
    pool: Arc<DBPool>,
}

impl HeroContentRepository {
    pub fn new(pool: Arc<DBPool>) -> Self {
        HeroContentRepository { pool }
    }

    /// Returns the hero row the landing page renders. Reads take the oldest
    /// row so a stray duplicate cannot change what visitors see.
    pub fn find_current(&self) -> Result<Option<HeroContent>, Error> {
        let mut conn = get_conn(&self.pool)?;
        hero_content
            .order(created_at.asc())
            .first(&mut conn)
            .optional()
    }

    pub fn update(&self, pk_id: Uuid, changes: &UpdateHeroContent) -> Result<HeroContent, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::update(hero_content.filter(id.eq(pk_id)))
            .set((changes, updated_at.eq(Utc::now())))
            .get_result(&mut conn)
    }
}
