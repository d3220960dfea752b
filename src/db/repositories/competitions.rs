use std::sync::Arc;

use chrono::Utc;
use diesel::prelude::*;
use diesel::result::Error;
use uuid::Uuid;

use crate::db::models::competitions::{Competition, NewCompetition, UpdateCompetition};
use crate::db::postgres::schema::competitions::dsl::*;

use super::{get_conn, DBPool};

#[derive(Clone)]
pub struct CompetitionRepository {
    pool: Arc<DBPool>,
}

impl CompetitionRepository {
    pub fn new(pool: Arc<DBPool>) -> Self {
        CompetitionRepository { pool }
    }

    pub fn create(&self, new_item: NewCompetition) -> Result<Competition, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::insert_into(competitions)
            .values(&new_item)
            .get_result(&mut conn)
    }

    pub fn find_active(&self) -> Result<Vec<Competition>, Error> {
        let mut conn = get_conn(&self.pool)?;
        competitions
            .filter(is_active.eq(true))
            .order(date.asc())
            .load::<Competition>(&mut conn)
    }

    pub fn update(&self, pk_id: Uuid, changes: &UpdateCompetition) -> Result<Competition, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::update(competitions.filter(id.eq(pk_id)))
            .set((changes, updated_at.eq(Utc::now())))
            .get_result(&mut conn)
    }

    pub fn delete(&self, pk_id: Uuid) -> Result<usize, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::delete(competitions.filter(id.eq(pk_id))).execute(&mut conn)
    }
}
