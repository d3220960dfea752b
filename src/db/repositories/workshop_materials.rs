use std::sync::Arc;

use diesel::prelude::*;
use diesel::result::Error;
use uuid::Uuid;

use crate::db::models::workshop_materials::{NewWorkshopMaterial, WorkshopMaterial};
use crate::db::postgres::schema::workshop_materials::dsl::*;

use super::{get_conn, DBPool};

#[derive(Clone)]
pub struct WorkshopMaterialRepository {
    pool: Arc<DBPool>,
}

impl WorkshopMaterialRepository {
    pub fn new(pool: Arc<DBPool>) -> Self {
        WorkshopMaterialRepository { pool }
    }

    pub fn create(&self, new_item: NewWorkshopMaterial) -> Result<WorkshopMaterial, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::insert_into(workshop_materials)
            .values(&new_item)
            .get_result(&mut conn)
    }

    pub fn delete(&self, pk_id: Uuid) -> Result<usize, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::delete(workshop_materials.filter(id.eq(pk_id))).execute(&mut conn)
    }
}
