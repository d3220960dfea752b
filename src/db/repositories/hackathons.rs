use std::sync::Arc;

use chrono::Utc;
use diesel::prelude::*;
use diesel::result::Error;
use uuid::Uuid;

use crate::db::models::hackathons::{Hackathon, NewHackathon, UpdateHackathon};
use crate::db::postgres::schema::hackathons::dsl::*;

use super::{get_conn, DBPool};

#[derive(Clone)]
pub struct HackathonRepository {
    pool: Arc<DBPool>,
}

impl HackathonRepository {
    pub fn new(pool: Arc<DBPool>) -> Self {
        HackathonRepository { pool }
    }

    pub fn create(&self, new_item: NewHackathon) -> Result<Hackathon, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::insert_into(hackathons)
            .values(&new_item)
            .get_result(&mut conn)
    }

    pub fn find_active(&self) -> Result<Vec<Hackathon>, Error> {
        let mut conn = get_conn(&self.pool)?;
        hackathons
            .filter(is_active.eq(true))
            .order(start_date.asc())
            .load::<Hackathon>(&mut conn)
    }

    pub fn update(&self, pk_id: Uuid, changes: &UpdateHackathon) -> Result<Hackathon, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::update(hackathons.filter(id.eq(pk_id)))
            .set((changes, updated_at.eq(Utc::now())))
            .get_result(&mut conn)
    }

    pub fn delete(&self, pk_id: Uuid) -> Result<usize, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::delete(hackathons.filter(id.eq(pk_id))).execute(&mut conn)
    }
}
