use std::sync::Arc;

use chrono::Utc;
use diesel::prelude::*;
use diesel::result::Error;
use uuid::Uuid;

use crate::db::models::gallery_images::{GalleryImage, NewGalleryImage, UpdateGalleryImage};
use crate::db::postgres::schema::gallery_images::dsl::*;

use super::{get_conn, DBPool};

#[derive(Clone)]
pub struct GalleryImageRepository {
    pool: Arc<DBPool>,
}

impl GalleryImageRepository {
    pub fn new(pool: Arc<DBPool>) -> Self {
        GalleryImageRepository { pool }
    }

    pub fn create(&self, new_item: NewGalleryImage) -> Result<GalleryImage, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::insert_into(gallery_images)
            .values(&new_item)
            .get_result(&mut conn)
    }

    pub fn find_ordered(&self) -> Result<Vec<GalleryImage>, Error> {
        let mut conn = get_conn(&self.pool)?;
        gallery_images
            .order(order_position.asc())
            .load::<GalleryImage>(&mut conn)
    }

    /// Retrieves images for one event category, still in display order.
    pub fn find_by_event_type(&self, event: &str) -> Result<Vec<GalleryImage>, Error> {
        let mut conn = get_conn(&self.pool)?;
        gallery_images
            .filter(event_type.eq(event))
            .order(order_position.asc())
            .load::<GalleryImage>(&mut conn)
    }

    pub fn update(&self, pk_id: Uuid, changes: &UpdateGalleryImage) -> Result<GalleryImage, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::update(gallery_images.filter(id.eq(pk_id)))
            .set((changes, updated_at.eq(Utc::now())))
            .get_result(&mut conn)
    }

    pub fn delete(&self, pk_id: Uuid) -> Result<usize, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::delete(gallery_images.filter(id.eq(pk_id))).execute(&mut conn)
    }
}
