// Declare the repository implementation modules
pub mod about_section;
pub mod coding_challenges;
pub mod competitions;
pub mod executives;
pub mod featured_projects;
pub mod gallery_images;
pub mod hackathons;
pub mod hero_content;
pub mod social_links;
pub mod workshop_materials;
pub mod workshops;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::result::Error;

pub use super::DBPool;

/// Checks out a connection from the pool, mapping the r2d2 error into a
/// diesel error so repository methods keep a single error type.
pub(crate) fn get_conn(
    pool: &DBPool,
) -> Result<PooledConnection<ConnectionManager<PgConnection>>, Error> {
    pool.get().map_err(|e| {
        Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UnableToSendCommand,
            Box::new(format!("Failed to get DB connection: {}", e)),
        )
    })
}
