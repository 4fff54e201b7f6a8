//! Stable error codes for the demo run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("{0}")]
    Db(String),

    #[error("Generated id not returned: {0}")]
    IdRetrieval(String),

    #[error("Invalid fixture: {0}")]
    Fixture(String),

    #[error("Console output failed: {0}")]
    Output(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::ResourceNotFound(_) => "RESOURCE_NOT_FOUND",
            Self::Db(_) => "DB_ERROR",
            Self::IdRetrieval(_) => "ID_RETRIEVAL_FAILED",
            Self::Fixture(_) => "FIXTURE_INVALID",
            Self::Output(_) => "OUTPUT_ERROR",
        }
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Db(e.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Output(e.to_string())
    }
}
