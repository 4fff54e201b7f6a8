//! Infrastructure: SQLite connection, bundled resources.

pub mod db;
pub mod resources;

pub use db::{get_connection, open_db, Db, MUSIC_SCHEMA};
pub use resources::read_resource;
