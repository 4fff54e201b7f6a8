//! SQLite connection bootstrap.

use crate::error::AppError;
use rusqlite::Connection;

/// Schema the music script and queries address. The SQL in `app::music`
/// and `resources/music-create.sql` spells it out as `study.music`.
pub const MUSIC_SCHEMA: &str = "study";

/// The single connection used for the whole run. Passed explicitly to every
/// operation.
pub struct Db(pub Connection);

/// Open a fresh in-memory database with the music schema attached.
pub fn open_db() -> Result<Db, AppError> {
    let conn = Connection::open_in_memory().map_err(|e| AppError::Db(e.to_string()))?;
    init_connection(&conn)?;
    log::info!("In-memory database opened, schema '{}' attached", MUSIC_SCHEMA);
    Ok(Db(conn))
}

fn init_connection(conn: &Connection) -> Result<(), AppError> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(|e| AppError::Db(e.to_string()))?;
    // SQLite has no CREATE SCHEMA; a second in-memory database attached by
    // name gives the same `schema.table` addressing.
    conn.execute_batch(&format!("ATTACH DATABASE ':memory:' AS {};", MUSIC_SCHEMA))
        .map_err(|e| AppError::Db(e.to_string()))?;
    Ok(())
}

/// Get the connection behind the handle.
pub fn get_connection(db: &Db) -> &Connection {
    &db.0
}

/// In-memory database with the default schema attached, for tests.
pub fn init_test_db() -> Db {
    open_db().expect("open test db")
}
