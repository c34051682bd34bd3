//! Flat-file timer persistence.
//!
//! Every timer lives in its own JSON record `<root>/pc_<name>.json`.

pub mod clock;

use crate::errors::{AppError, AppResult};
use crate::models::Timer;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub use clock::{ClockIn, CurrentSession};

pub const RECORD_PREFIX: &str = "pc_";
pub const RECORD_EXT: &str = ".json";

pub struct TimerStore {
    root: PathBuf,
}

impl TimerStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the record for `name`. Rejects names that cannot be a
    /// plain file name.
    pub fn record_path(&self, name: &str) -> AppResult<PathBuf> {
        validate_name(name)?;
        Ok(self
            .root
            .join(format!("{RECORD_PREFIX}{name}{RECORD_EXT}")))
    }

    pub fn exists(&self, name: &str) -> AppResult<bool> {
        Ok(self.record_path(name)?.is_file())
    }

    pub fn load(&self, name: &str) -> AppResult<Timer> {
        let path = self.record_path(name)?;
        if !path.is_file() {
            return Err(AppError::NotFound(name.to_string()));
        }

        let raw = fs::read_to_string(&path)?;
        let timer: Timer = serde_json::from_str(&raw).map_err(|e| AppError::Corrupted {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        if let Some(pos) = timer.find_dangling_open() {
            return Err(AppError::Corrupted {
                name: name.to_string(),
                reason: format!("session #{} is open but is not the last one", pos + 1),
            });
        }

        Ok(timer)
    }

    /// Replace the record with `timer`. The new content is written to a
    /// sibling file first and then renamed over the record.
    pub fn save(&self, name: &str, timer: &Timer) -> AppResult<()> {
        let path = self.record_path(name)?;
        fs::create_dir_all(&self.root)?;

        let tmp = self.root.join(format!(".{RECORD_PREFIX}{name}{RECORD_EXT}.tmp"));
        {
            let mut file = fs::File::create(&tmp)?;
            serde_json::to_writer(&mut file, timer)?;
            file.write_all(b"\n")?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    pub fn delete(&self, name: &str) -> AppResult<()> {
        let path = self.record_path(name)?;
        if !path.is_file() {
            return Err(AppError::NotFound(name.to_string()));
        }
        fs::remove_file(path)?;
        Ok(())
    }

    /// Names of every stored timer, sorted.
    pub fn list_all(&self) -> AppResult<Vec<String>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if let Some(name) = file_name
                .strip_prefix(RECORD_PREFIX)
                .and_then(|rest| rest.strip_suffix(RECORD_EXT))
                .filter(|n| validate_name(n).is_ok())
            {
                names.push(name.to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    /// Names of the timers whose last session is still open.
    pub fn list_running(&self) -> AppResult<Vec<String>> {
        let mut running = Vec::new();
        for name in self.list_all()? {
            if self.load(&name)?.is_running() {
                running.push(name);
            }
        }
        Ok(running)
    }
}

fn validate_name(name: &str) -> AppResult<()> {
    if name.is_empty()
        || name.starts_with('.')
        || name.contains(['/', '\\'])
        || name.chars().any(char::is_control)
    {
        return Err(AppError::InvalidArgument(format!(
            "\"{name}\" is not a valid clock name"
        )));
    }
    Ok(())
}
