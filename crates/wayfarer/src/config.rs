//! # Configuration
//!
//! Server configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files, environment variables, and programmatic overrides. The
//! struct itself derives [`confique::Config`] for defaults.
//!
//! ## Resolution Order
//!
//! Configuration is resolved in priority order:
//! 1. **Overrides**: command line flags (and the env vars the binary binds to
//!    them, such as `PORT`), passed in as [`ConfigOverrides`].
//! 2. **Environment variables**: `WAYFARER__PORT`, `WAYFARER__LISTS_PATH`, ...
//! 3. **Explicit directory**: `--config-dir <dir>` holding a `wayfarer.toml`.
//! 4. **Working directory**: `./wayfarer.toml`.
//! 5. **User config**: OS-appropriate config directory (via `directories` crate).
//! 6. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `host` | `0.0.0.0` | Interface to bind |
//! | `port` | `5001` | TCP port |
//! | `dataset_path` | `data/destinations.csv` | CSV dataset loaded at startup |
//! | `lists_path` | `data/lists.json` | JSON document holding user lists |
//! | `log_format` | `pretty` | `pretty` or `json` |

use crate::error::{Result, WayfarerError};
use clapfig::{Clapfig, SearchMode, SearchPath};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "wayfarer";
pub const CONFIG_FILENAME: &str = "wayfarer.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable, multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Configuration for the wayfarer server, stored in `wayfarer.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind the HTTP listener on.
    #[config(default = "0.0.0.0")]
    pub host: String,

    /// TCP port for the HTTP listener.
    #[config(default = 5001)]
    pub port: u16,

    /// CSV file holding the destination dataset.
    #[config(default = "data/destinations.csv")]
    pub dataset_path: PathBuf,

    /// JSON document holding user lists. Created on first write.
    #[config(default = "data/lists.json")]
    pub lists_path: PathBuf,

    /// Log output format: "pretty" or "json".
    #[config(default = "pretty")]
    pub log_format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5001,
            dataset_path: PathBuf::from("data/destinations.csv"),
            lists_path: PathBuf::from("data/lists.json"),
            log_format: "pretty".to_string(),
        }
    }
}

/// Values that win over every file and environment layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub dataset_path: Option<PathBuf>,
    pub lists_path: Option<PathBuf>,
    pub log_format: Option<String>,
}

impl ServerConfig {
    /// Load configuration for a server started in `cwd`.
    ///
    /// `explicit_dir` must contain a `wayfarer.toml` when given; the other
    /// locations are optional.
    pub fn load(
        cwd: &Path,
        explicit_dir: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> Result<Self> {
        // later paths win
        let mut search_paths = Vec::new();
        if let Some(dirs) = ProjectDirs::from("com", APP_NAME, APP_NAME) {
            search_paths.push(SearchPath::Path(dirs.config_dir().to_path_buf()));
        }
        search_paths.push(SearchPath::Path(cwd.to_path_buf()));

        if let Some(dir) = explicit_dir {
            if !dir.join(CONFIG_FILENAME).is_file() {
                return Err(WayfarerError::Config(format!(
                    "no {CONFIG_FILENAME} in {}",
                    dir.display()
                )));
            }
            search_paths.push(SearchPath::Path(dir.to_path_buf()));
        }

        Clapfig::builder::<ServerConfig>()
            .app_name(APP_NAME)
            .file_name(CONFIG_FILENAME)
            .search_paths(search_paths)
            .search_mode(SearchMode::Merge)
            .cli_override("host", overrides.host.clone())
            .cli_override("port", overrides.port.map(i64::from))
            .cli_override("dataset_path", overrides.dataset_path.as_deref().map(path_value))
            .cli_override("lists_path", overrides.lists_path.as_deref().map(path_value))
            .cli_override("log_format", overrides.log_format.clone())
            .load()
            .map_err(|e| WayfarerError::Config(e.to_string()))
    }

    /// Socket address string, e.g. `0.0.0.0:5001`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parsed log format. Unknown values fall back to pretty output.
    pub fn log_format(&self) -> LogFormat {
        match self.log_format.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

fn path_value(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
