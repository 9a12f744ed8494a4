//! The schema & load stage: recreate the fixed relational schema in an
//! embedded SQLite file and bulk-import the generated CSVs into it.

pub mod import;
pub mod infer;
pub mod schema;

use std::fs;
use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::{Result, StoreGenError};

/// Open (creating if needed) the embedded database file.
///
/// A single connection is all the loader needs, and foreign keys are
/// enforced for the whole session so a bad load fails instead of leaving
/// dangling references behind.
pub async fn connect(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| StoreGenError::Output {
                message: format!("creating database directory {}", parent.display()),
                source: e,
            })?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| StoreGenError::Connection {
            message: "Failed to open embedded database".to_string(),
            db_path: db_path.display().to_string(),
            source: e,
        })
}
