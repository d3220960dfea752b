use std::sync::Arc;

use chrono::Utc;
use diesel::prelude::*;
use diesel::result::Error;
use uuid::Uuid;

use crate::db::models::executives::{Executive, NewExecutive, UpdateExecutive};
use crate::db::postgres::schema::executives::dsl::*;

use super::{get_conn, DBPool};

#[derive(Clone)]
pub struct ExecutiveRepository {
    pool: Arc<DBPool>,
}

impl ExecutiveRepository {
    pub fn new(pool: Arc<DBPool>) -> Self {
        ExecutiveRepository { pool }
    }

    pub fn create(&self, new_item: NewExecutive) -> Result<Executive, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::insert_into(executives)
            .values(&new_item)
            .get_result(&mut conn)
    }

    pub fn find_ordered(&self) -> Result<Vec<Executive>, Error> {
        let mut conn = get_conn(&self.pool)?;
        executives
            .order(order_position.asc())
            .load::<Executive>(&mut conn)
    }

    pub fn update(&self, pk_id: Uuid, changes: &UpdateExecutive) -> Result<Executive, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::update(executives.filter(id.eq(pk_id)))
            .set((changes, updated_at.eq(Utc::now())))
            .get_result(&mut conn)
    }

    pub fn delete(&self, pk_id: Uuid) -> Result<usize, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::delete(executives.filter(id.eq(pk_id))).execute(&mut conn)
    }
}
