//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! gridcolor has two configuration scopes:
//! - **Global**: User-level defaults
//! - **Local**: `gridcolor.toml` in the working directory
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Local config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$GRIDCOLOR_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gridcolor/config.toml`
//! 3. `~/.gridcolor/config.toml` (canonical write location)
//!
//! # Example
//!
//! ```no_run
//! use gridcolor::core::config::Config;
//! use std::path::Path;
//!
//! let result = Config::load(Some(Path::new("/path/to/project"))).unwrap();
//! let config = result.config;
//!
//! println!("Title: {}", config.vtk_title());
//! println!("Stats: {}", config.stats());
//! ```

pub mod schema;

pub use schema::{GridConfig, VtkConfig};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit global config file.
pub const CONFIG_ENV: &str = "GRIDCOLOR_CONFIG";

/// File name of the local config.
pub const LOCAL_CONFIG_FILE: &str = "gridcolor.toml";

/// Default VTK header title.
pub const DEFAULT_TITLE: &str = "some rectangular colored grid";

/// Default name of the per-point scalar array.
pub const DEFAULT_SCALAR_NAME: &str = "Color";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence automatically: local overrides global.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GridConfig,
    /// Local configuration (if a `gridcolor.toml` was found)
    pub local: Option<GridConfig>,
    pub(crate) global_path: Option<PathBuf>,
    pub(crate) local_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `dir` is provided, also loads `gridcolor.toml` from it.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed.
    /// Missing config files are not an error (defaults are used).
    pub fn load(dir: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();
        let global_path = Self::find_global(&mut warnings);
        let local_path = dir
            .map(|d| d.join(LOCAL_CONFIG_FILE))
            .filter(|p| p.exists());

        let mut result = Self::load_from(global_path.as_deref(), local_path.as_deref())?;
        warnings.append(&mut result.warnings);
        result.warnings = warnings;
        Ok(result)
    }

    /// Load configuration from explicit file paths.
    ///
    /// Either path may be `None` to use defaults for that scope.
    pub fn load_from(
        global_path: Option<&Path>,
        local_path: Option<&Path>,
    ) -> Result<ConfigLoadResult, ConfigError> {
        let global = match global_path {
            Some(path) => Self::read_config(path)?,
            None => GridConfig::default(),
        };
        let local = local_path.map(Self::read_config).transpose()?;

        global.validate()?;
        if let Some(ref l) = local {
            l.validate()?;
        }

        let mut warnings = Vec::new();
        if let (Some(l), Some(path)) = (&local, local_path) {
            if l.vtk.is_some() && global.vtk.is_some() {
                warnings.push(ConfigWarning {
                    message: "local [vtk] settings override the global ones".into(),
                    path: path.to_path_buf(),
                });
            }
        }

        tracing::debug!(
            global = ?global_path,
            local = ?local_path,
            "loaded configuration"
        );

        Ok(ConfigLoadResult {
            config: Config {
                global,
                local,
                global_path: global_path.map(Path::to_path_buf),
                local_path: local_path.map(Path::to_path_buf),
            },
            warnings,
        })
    }

    /// Locate the global config file, if any.
    fn find_global(warnings: &mut Vec<ConfigWarning>) -> Option<PathBuf> {
        // 1. Check $GRIDCOLOR_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
            warnings.push(ConfigWarning {
                message: format!("{} points at a missing file, ignoring it", CONFIG_ENV),
                path,
            });
        }

        // 2. Check $XDG_CONFIG_HOME/gridcolor/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("gridcolor/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.gridcolor/config.toml
        Self::global_config_path().ok().filter(|p| p.exists())
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<GridConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical path for global config.
    ///
    /// Returns `~/.gridcolor/config.toml`.
    pub fn global_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".gridcolor/config.toml"))
    }

    /// Write `config` to `path` atomically.
    ///
    /// Creates parent directories if needed. The file is written to a
    /// temporary sibling and renamed into place.
    pub fn write_atomic(path: &Path, config: &GridConfig) -> Result<(), ConfigError> {
        config.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    /// The configuration written by `config init`.
    pub fn starter() -> GridConfig {
        GridConfig {
            rows: None,
            cols: None,
            stats: Some(true),
            verify: Some(false),
            vtk: Some(VtkConfig {
                title: Some(DEFAULT_TITLE.into()),
                scalar_name: Some(DEFAULT_SCALAR_NAME.into()),
            }),
        }
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Global and local settings merged into one.
    pub fn merged(&self) -> GridConfig {
        match &self.local {
            Some(local) => self.global.merge(local),
            None => self.global.clone(),
        }
    }

    /// Default row count, if configured.
    pub fn rows(&self) -> Option<u32> {
        self.local.as_ref().and_then(|l| l.rows).or(self.global.rows)
    }

    /// Default column count, if configured.
    pub fn cols(&self) -> Option<u32> {
        self.local.as_ref().and_then(|l| l.cols).or(self.global.cols)
    }

    /// Whether to print color usage after rendering.
    ///
    /// Defaults to `true` if not configured.
    pub fn stats(&self) -> bool {
        self.local
            .as_ref()
            .and_then(|l| l.stats)
            .or(self.global.stats)
            .unwrap_or(true)
    }

    /// Whether to verify the coloring before exporting.
    ///
    /// Defaults to `false` if not configured.
    pub fn verify(&self) -> bool {
        self.local
            .as_ref()
            .and_then(|l| l.verify)
            .or(self.global.verify)
            .unwrap_or(false)
    }

    /// VTK header title.
    ///
    /// Defaults to [`DEFAULT_TITLE`].
    pub fn vtk_title(&self) -> &str {
        self.vtk_value(|v| v.title.as_deref())
            .unwrap_or(DEFAULT_TITLE)
    }

    /// Name of the per-point scalar array.
    ///
    /// Defaults to [`DEFAULT_SCALAR_NAME`].
    pub fn scalar_name(&self) -> &str {
        self.vtk_value(|v| v.scalar_name.as_deref())
            .unwrap_or(DEFAULT_SCALAR_NAME)
    }

    fn vtk_value<'a>(&'a self, get: impl Fn(&'a VtkConfig) -> Option<&'a str>) -> Option<&'a str> {
        self.local
            .as_ref()
            .and_then(|l| l.vtk.as_ref())
            .and_then(&get)
            .or_else(|| self.global.vtk.as_ref().and_then(&get))
    }

    /// Path of the global config file that was loaded, if any.
    pub fn global_path(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Path of the local config file that was loaded, if any.
    pub fn local_path(&self) -> Option<&Path> {
        self.local_path.as_deref()
    }
}
