//! SQLite connection wrapper for the journal database.

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

pub const JOURNAL_FILE: &str = "punchclock.sqlite";

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (creating if needed) the journal living in `storage_root`.
    pub fn open_in(storage_root: &Path) -> AppResult<Self> {
        fs::create_dir_all(storage_root)?;
        Self::new(&journal_path(storage_root))
    }

    pub fn new(path: &Path) -> AppResult<Self> {
        let conn = Connection::open(path)?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    #[cfg(test)]
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }
}

pub fn journal_path(storage_root: &Path) -> PathBuf {
    storage_root.join(JOURNAL_FILE)
}
