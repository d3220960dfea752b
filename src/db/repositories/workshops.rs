use std::sync::Arc;

use chrono::Utc;
use diesel::prelude::*;
use diesel::result::Error;
use uuid::Uuid;

use crate::db::models::workshop_materials::WorkshopMaterial;
use crate::db::models::workshops::{NewWorkshop, UpdateWorkshop, Workshop, WorkshopWithMaterials};
use crate::db::postgres::schema::{workshop_materials, workshops};

use super::{get_conn, DBPool};

#[derive(Clone)]
pub struct WorkshopRepository {
    pool: Arc<DBPool>,
}

impl WorkshopRepository {
    pub fn new(pool: Arc<DBPool>) -> Self {
        WorkshopRepository { pool }
    }

    pub fn create(&self, new_item: NewWorkshop) -> Result<Workshop, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::insert_into(workshops::table)
            .values(&new_item)
            .get_result(&mut conn)
    }

    pub fn find(&self, pk_id: Uuid) -> Result<Option<Workshop>, Error> {
        let mut conn = get_conn(&self.pool)?;
        workshops::table
            .filter(workshops::id.eq(pk_id))
            .first(&mut conn)
            .optional()
    }

    /// Loads every workshop in week order with its materials attached,
    /// batching the material lookup with `belonging_to` rather than one
    /// query per workshop.
    pub fn find_all_with_materials(&self) -> Result<Vec<WorkshopWithMaterials>, Error> {
        let mut conn = get_conn(&self.pool)?;
        let all_workshops = workshops::table
            .order(workshops::week_number.asc())
            .load::<Workshop>(&mut conn)?;

        let materials = WorkshopMaterial::belonging_to(&all_workshops)
            .order(workshop_materials::order_position.asc())
            .load::<WorkshopMaterial>(&mut conn)?
            .grouped_by(&all_workshops);

        Ok(all_workshops
            .into_iter()
            .zip(materials)
            .map(|(workshop, materials)| WorkshopWithMaterials {
                workshop,
                materials,
            })
            .collect())
    }

    pub fn update(&self, pk_id: Uuid, changes: &UpdateWorkshop) -> Result<Workshop, Error> {
        let mut conn = get_conn(&self.pool)?;
        diesel::update(workshops::table.filter(workshops::id.eq(pk_id)))
            .set((changes, workshops::updated_at.eq(Utc::now())))
            .get_result(&mut conn)
    }

    /// Deletes a workshop and everything attached to it. Materials go first
    /// inside one transaction so the FK holds even on databases restored
    /// without the cascade.
    pub fn delete_with_materials(&self, pk_id: Uuid) -> Result<usize, Error> {
        let mut conn = get_conn(&self.pool)?;
        conn.transaction(|conn| {
            diesel::delete(
                workshop_materials::table.filter(workshop_materials::workshop_id.eq(pk_id)),
            )
            .execute(conn)?;
            diesel::delete(workshops::table.filter(workshops::id.eq(pk_id))).execute(conn)
        })
    }
}
