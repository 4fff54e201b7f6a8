//! Demo configuration. Values are compiled in; there are no flags or env vars.

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DemoConfig {
    /// Directory holding the bundled script and fixture.
    pub resources_dir: PathBuf,
    pub music_script: String,
    pub fixture: String,
    /// Lower bound (inclusive) for the "recent books" listing.
    pub year_threshold: i64,
    pub log_level: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            resources_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/resources")),
            music_script: "music-create.sql".to_string(),
            fixture: "books.json".to_string(),
            year_threshold: 2000,
            log_level: "info".to_string(),
        }
    }
}

impl DemoConfig {
    /// Maps `log_level` onto a `log` filter; unknown names fall back to Info.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level
            .parse::<log::LevelFilter>()
            .unwrap_or(log::LevelFilter::Info)
    }
}
