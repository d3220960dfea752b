use std::sync::Arc;

use chrono::Utc;
use diesel::prelude::*;
use diesel::result::Error;
use uuid::Uuid;

use crate::db::models::about_section::{AboutSection, UpdateAboutSection};
use crate::db::postgres::schema::about_section::dsl::*;

use super::{get_conn, DBPool};

#[derive(Clone)]
pub struct AboutSectionRepository {
    pool: Arc<DBPool>,
}

impl AboutSectionRepository {
    pub fn new(pool: Arc<DBPool>) -> Self {
        AboutSectionRepository { pool }
    }

    pub fn find_current(&self) -> Result<Option<AboutSection>, Error> {
        let mut conn = get_conn(&self.pool)?;
        about_section
            .order(created_at.asc())
            .first(&mut conn)
            .optional()
    }

    pub fn update(&self, pk_id: Uuid, changes: &UpdateAboutSection) -> Result<AboutSection, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::update(about_section.filter(id.eq(pk_id)))
            .set((changes, updated_at.eq(Utc::now())))
            .get_result(&mut conn)
    }
}
