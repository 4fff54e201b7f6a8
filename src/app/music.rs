//! Music use cases: script load, listings, max+1 inserts.

use crate::error::AppError;
use crate::infra::{get_connection, Db};
use rusqlite::params;

#[derive(Debug, Clone, PartialEq)]
pub struct MusicTrackDto {
    pub id: i64,
    pub name: String,
}

/// Execute the music DDL + seed script as one batch.
pub fn music_load_script(db: &Db, script: &str) -> Result<(), AppError> {
    let conn = get_connection(db);
    conn.execute_batch(script).map_err(|e| {
        log::error!("Music script failed: {}", e);
        AppError::Db(e.to_string())
    })
}

/// All tracks in insertion order.
pub fn music_list(db: &Db) -> Result<Vec<MusicTrackDto>, AppError> {
    query_tracks(db, "SELECT id, name FROM study.music ORDER BY rowid")
}

/// Tracks whose name has neither 'm' nor 't', ignoring case.
pub fn music_list_without_m_t(db: &Db) -> Result<Vec<MusicTrackDto>, AppError> {
    query_tracks(
        db,
        "SELECT id, name FROM study.music
         WHERE LOWER(name) NOT LIKE '%m%' AND LOWER(name) NOT LIKE '%t%'
         ORDER BY rowid",
    )
}

fn query_tracks(db: &Db, sql: &str) -> Result<Vec<MusicTrackDto>, AppError> {
    collect_tracks(db, sql).inspect_err(|e| log::error!("Music query failed: {}", e))
}

fn collect_tracks(db: &Db, sql: &str) -> Result<Vec<MusicTrackDto>, AppError> {
    let conn = get_connection(db);
    let mut stmt = conn.prepare(sql).map_err(|e| AppError::Db(e.to_string()))?;
    let rows = stmt.query_map([], |row| {
        Ok(MusicTrackDto {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| AppError::Db(e.to_string()))?);
    }
    Ok(out)
}

/// Current max id + 1, or 1 for an empty table.
pub fn music_next_id(db: &Db) -> Result<i64, AppError> {
    let conn = get_connection(db);
    let max_id: i64 = conn
        .query_row("SELECT COALESCE(MAX(id), 0) FROM study.music", [], |r| {
            r.get(0)
        })
        .map_err(|e| {
            log::error!("Failed to read max music id: {}", e);
            AppError::Db(e.to_string())
        })?;
    Ok(max_id + 1)
}

/// Append a track with id = max + 1. The max is read at insert time, so this
/// is only safe with a single writer.
pub fn music_add(db: &Db, name: &str) -> Result<i64, AppError> {
    let id = music_next_id(db)?;
    let conn = get_connection(db);
    conn.execute(
        "INSERT INTO study.music (id, name) VALUES (?1, ?2)",
        params![id, name],
    )
    .map_err(|e| {
        log::error!("Failed to add track '{}': {}", name, e);
        AppError::Db(e.to_string())
    })?;
    log::debug!("Track '{}' added with id {}", name, id);
    Ok(id)
}
