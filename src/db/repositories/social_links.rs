use std::sync::Arc;

use chrono::Utc;
use diesel::prelude::*;
use diesel::result::Error;
use uuid::Uuid;

use crate::db::models::social_links::{NewSocialLink, SocialLink, UpdateSocialLink};
use crate::db::postgres::schema::social_links::dsl::*;

use super::{get_conn, DBPool};

#[derive(Clone)]
pub struct SocialLinkRepository {
    pool: Arc<DBPool>,
}

impl SocialLinkRepository {
    pub fn new(pool: Arc<DBPool>) -> Self {
        SocialLinkRepository { pool }
    }

    /// Creates a new SocialLink record.
    pub fn create(&self, new_item: NewSocialLink) -> Result<SocialLink, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::insert_into(social_links)
            .values(&new_item)
            .get_result(&mut conn)
    }

    /// Retrieves all links in display order.
    pub fn find_ordered(&self) -> Result<Vec<SocialLink>, Error> {
        let mut conn = get_conn(&self.pool)?;
        social_links
            .order(order_position.asc())
            .load::<SocialLink>(&mut conn)
    }

    /// Updates an existing SocialLink identified by its primary key.
    pub fn update(&self, pk_id: Uuid, changes: &UpdateSocialLink) -> Result<SocialLink, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::update(social_links.filter(id.eq(pk_id)))
            .set((changes, updated_at.eq(Utc::now())))
            .get_result(&mut conn)
    }

    /// Deletes a SocialLink by its primary key.
    /// Returns the number of deleted rows (should be 0 or 1).
    pub fn delete(&self, pk_id: Uuid) -> Result<usize, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::delete(social_links.filter(id.eq(pk_id))).execute(&mut conn)
    }
}
