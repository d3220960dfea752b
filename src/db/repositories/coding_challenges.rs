use std::sync::Arc;

use chrono::Utc;
use diesel::prelude::*;
use diesel::result::Error;
use uuid::Uuid;

use crate::db::models::coding_challenges::{
    CodingChallenge, NewCodingChallenge, UpdateCodingChallenge,
};
use crate::db::postgres::schema::coding_challenges::dsl::*;

use super::{get_conn, DBPool};

#[derive(Clone)]
pub struct CodingChallengeRepository {
    pool: Arc<DBPool>,
}

impl CodingChallengeRepository {
    pub fn new(pool: Arc<DBPool>) -> Self {
        CodingChallengeRepository { pool }
    }

    pub fn create(&self, new_item: NewCodingChallenge) -> Result<CodingChallenge, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::insert_into(coding_challenges)
            .values(&new_item)
            .get_result(&mut conn)
    }

    /// Active challenges in week order, optionally narrowed to one platform.
    pub fn find_active(&self, target_platform: Option<&str>) -> Result<Vec<CodingChallenge>, Error> {
        let mut conn = get_conn(&self.pool)?;
        let mut query = coding_challenges.filter(is_active.eq(true)).into_boxed();
        if let Some(p) = target_platform {
            query = query.filter(platform.eq(p.to_string()));
        }
        query
            .order(week_number.asc())
            .load::<CodingChallenge>(&mut conn)
    }

    pub fn update(
        &self,
        pk_id: Uuid,
        changes: &UpdateCodingChallenge,
    ) -> Result<CodingChallenge, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::update(coding_challenges.filter(id.eq(pk_id)))
            .set((changes, updated_at.eq(Utc::now())))
            .get_result(&mut conn)
    }

    pub fn delete(&self, pk_id: Uuid) -> Result<usize, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::delete(coding_challenges.filter(id.eq(pk_id))).execute(&mut conn)
    }
}
