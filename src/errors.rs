//! Unified application error type.
//! All modules (store, core, cli, db) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / encoding
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Record encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration format error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Journal database
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Timer lookups and state
    // ---------------------------
    #[error("No clock with name \"{0}\" exists")]
    NotFound(String),

    #[error("{0}")]
    StateConflict(String),

    #[error("Clock \"{name}\" is corrupted: {reason}")]
    Corrupted { name: String, reason: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Conditions the user can fix by running another command.
    /// They are reported as warnings and do not fail the process.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, AppError::StateConflict(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
