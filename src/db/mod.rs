// Declare database submodules
pub mod models;
pub mod postgres; // Contains schema.rs
pub mod repositories;

use diesel::pg::PgConnection;
use diesel::r2d2::{self, ConnectionManager};

// Define the common DBPool type alias, making it available to submodules
pub type DBPool = r2d2::Pool<ConnectionManager<PgConnection>>;
