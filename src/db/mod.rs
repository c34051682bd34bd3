//! Internal journal: an SQLite `log` table recording every mutating command.

pub mod initialize;
pub mod log;
pub mod pool;

use crate::ui::messages::warning;
use std::path::Path;

/// Record an operation in the journal of `storage_root`.
/// Failures are reported but never abort the command.
pub fn journal(storage_root: &Path, operation: &str, target: &str, message: &str) {
    let res = pool::DbPool::open_in(storage_root)
        .and_then(|pool| log::ttlog(&pool.conn, operation, target, message));
    if let Err(e) = res {
        warning(format!("Failed to write internal log: {}", e));
    }
}
