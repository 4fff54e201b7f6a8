//! Bundled resource files (SQL script, JSON fixture).

use crate::error::AppError;
use std::io::ErrorKind;
use std::path::Path;

/// Read a bundled resource by file name from `dir`.
pub fn read_resource(dir: &Path, name: &str) -> Result<String, AppError> {
    let path = dir.join(name);
    std::fs::read_to_string(&path).map_err(|e| {
        log::error!("Failed to read resource {}: {}", path.display(), e);
        match e.kind() {
            ErrorKind::NotFound => AppError::ResourceNotFound(name.to_string()),
            _ => AppError::ResourceNotFound(format!("{}: {}", name, e)),
        }
    })
}
