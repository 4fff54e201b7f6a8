//! Visitor fixture records and JSON decoding.

use crate::error::AppError;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorRecord {
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subscribed: bool,
    #[serde(default)]
    pub favorite_books: Vec<BookRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    /// Book title; the fixture calls it `name`.
    pub name: String,
    pub author: String,
    #[serde(default)]
    pub publishing_year: Option<i64>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
}

/// Decode the fixture document. No database involved.
pub fn parse_fixture(json: &str) -> Result<Vec<VisitorRecord>, AppError> {
    serde_json::from_str(json).map_err(|e| AppError::Fixture(e.to_string()))
}
