use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one record per clock plus the journal database.
    #[serde(default = "default_storage_root")]
    pub storage_root: String,
    /// strftime format for times on the timeline.
    #[serde(default = "default_time_format")]
    pub time_format: String,
    /// strftime format for dates on the timeline.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Accepted format for date arguments.
    #[serde(default = "default_date_input_format")]
    pub date_input_format: String,
    /// How many populated days `plot` shows.
    #[serde(default = "default_plot_days")]
    pub plot_days: usize,
}

fn default_storage_root() -> String {
    Config::config_dir()
        .join("clocks")
        .to_string_lossy()
        .to_string()
}
fn default_time_format() -> String {
    "%I:%M %p".to_string()
}
fn default_date_format() -> String {
    "%a %Y/%m/%d".to_string()
}
fn default_date_input_format() -> String {
    crate::utils::date::DEFAULT_INPUT_FORMAT.to_string()
}
fn default_plot_days() -> usize {
    7
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_root: default_storage_root(),
            time_format: default_time_format(),
            date_format: default_date_format(),
            date_input_format: default_date_input_format(),
            plot_days: default_plot_days(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.punchclock`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".punchclock")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchclock.conf")
    }

    /// Storage root with `~` expanded.
    pub fn storage_root(&self) -> PathBuf {
        expand_tilde(&self.storage_root)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // an empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(content)?;
        if cfg.plot_days == 0 {
            return Err(AppError::Config("plot_days must be at least 1".into()));
        }
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Initialize configuration file and storage directory.
    /// In test mode the configuration file is left alone.
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            fs::write(Self::config_file(), self.to_yaml()?)?;
            success(format!("Config file: {:?}", Self::config_file()));
        }

        fs::create_dir_all(self.storage_root())?;
        success(format!("Storage:     {:?}", self.storage_root()));
        Ok(())
    }
}
