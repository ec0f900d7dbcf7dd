use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::tui::theme::ThemeConfig;

#[derive(Debug, Default, Deserialize, Clone)]
pub struct Config {
    /// Alternative location for the `SQLite` database. `~` expands to the home directory.
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Config {
    /// Database path: explicit override first, then `database` from the config file,
    /// then `~/.dayplan/dayplan.db`.
    pub fn db_path(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = cli_override {
            return Ok(path.to_path_buf());
        }
        self.database.as_deref().map_or_else(db_path, expand_home)
    }
}

/// Expand a leading `~` (alone or followed by `/`) to the home directory.
fn expand_home(path: &str) -> Result<PathBuf> {
    let rest = if path == "~" {
        ""
    } else if let Some(rest) = path.strip_prefix("~/") {
        rest
    } else {
        return Ok(PathBuf::from(path));
    };
    let home = dirs::home_dir().context("could not determine home directory")?;
    Ok(home.join(rest))
}

/// Returns the base dayplan directory: ~/.dayplan/
pub fn base_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    Ok(home.join(".dayplan"))
}

/// Returns the default path to the `SQLite` database
pub fn db_path() -> Result<PathBuf> {
    Ok(base_dir()?.join("dayplan.db"))
}

/// Returns the path of the log file written by the tracing subscriber
pub fn log_path() -> Result<PathBuf> {
    Ok(base_dir()?.join("dayplan.log"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(base_dir()?.join("config.toml"))
}

/// Ensure the base directory exists
pub fn ensure_dirs() -> Result<()> {
    let base = base_dir()?;
    fs::create_dir_all(&base).context("failed to create ~/.dayplan/")?;
    Ok(())
}

/// Load config from ~/.dayplan/config.toml (or return defaults if it doesn't exist)
pub fn load() -> Result<Config> {
    load_from(&config_path()?)
}

pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(config)
}
