//! # Error Types
//!
//! Defines `StoreGenError`, the unified error enum for both stages. Every
//! variant carries enough context (file path, table name, row index, SQL
//! snippet) to debug a failed run from the message alone. Nothing is caught
//! or retried anywhere: storegen is a one-shot setup tool, so every error
//! aborts the current stage and surfaces to the caller.

use thiserror::Error;

/// All errors that can occur in storegen operations.
#[derive(Error, Debug)]
pub enum StoreGenError {
    #[error("Output error: {message}: {source}")]
    Output {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Database connection failed: {message}\n  Database file: {db_path}\n  Cause: {source}")]
    Connection {
        message: String,
        db_path: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("SQL execution failed: {statement}\n  DB error: {source}")]
    Sql {
        statement: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Insert failed on {table} row {row_index}\n  SQL: {sql_preview}\n  DB error: {source}")]
    InsertFailed {
        table: String,
        row_index: usize,
        sql_preview: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Cannot load table '{table}' from {path}: {message}")]
    LoadData {
        table: String,
        path: String,
        message: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, StoreGenError>;
