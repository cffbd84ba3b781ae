//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Locations
//!
//! The same schema is used for the global file and the local
//! `gridcolor.toml`; see [`super`] for lookup order.
//!
//! # Validation
//!
//! Values are validated after parsing so that a bad file is reported as a
//! configuration error before any lattice is built.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Longest accepted VTK title, in characters.
pub const MAX_TITLE_LEN: usize = 256;

/// Configuration file contents.
///
/// # Example
///
/// ```toml
/// rows = 4
/// cols = 4
/// stats = true
/// verify = false
///
/// [vtk]
/// title = "some rectangular colored grid"
/// scalar_name = "Color"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Default number of lattice rows (`--nx`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,

    /// Default number of lattice columns (`--ny`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cols: Option<u32>,

    /// Print color usage after rendering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<bool>,

    /// Verify the coloring before exporting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify: Option<bool>,

    /// VTK output settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vtk: Option<VtkConfig>,
}

impl GridConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == Some(0) {
            return Err(ConfigError::InvalidValue("rows must be at least 1".into()));
        }
        if self.cols == Some(0) {
            return Err(ConfigError::InvalidValue("cols must be at least 1".into()));
        }
        if let Some(vtk) = &self.vtk {
            vtk.validate()?;
        }
        Ok(())
    }

    /// Overlay `other` on top of `self`; values set in `other` win.
    pub fn merge(&self, other: &GridConfig) -> GridConfig {
        let vtk = match (&self.vtk, &other.vtk) {
            (Some(base), Some(over)) => Some(VtkConfig {
                title: over.title.clone().or_else(|| base.title.clone()),
                scalar_name: over.scalar_name.clone().or_else(|| base.scalar_name.clone()),
            }),
            (base, over) => over.clone().or_else(|| base.clone()),
        };

        GridConfig {
            rows: other.rows.or(self.rows),
            cols: other.cols.or(self.cols),
            stats: other.stats.or(self.stats),
            verify: other.verify.or(self.verify),
            vtk,
        }
    }
}

/// VTK output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct VtkConfig {
    /// Header title line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Name of the per-point scalar array
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scalar_name: Option<String>,
}

impl VtkConfig {
    /// Validate VTK settings.
    ///
    /// The title must fit on a single header line; the scalar name is a
    /// whitespace-delimited token in the file format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(title) = &self.title {
            if title.contains(['\n', '\r']) {
                return Err(ConfigError::InvalidValue(
                    "vtk.title must be a single line".into(),
                ));
            }
            if title.chars().count() > MAX_TITLE_LEN {
                return Err(ConfigError::InvalidValue(format!(
                    "vtk.title must be at most {} characters",
                    MAX_TITLE_LEN
                )));
            }
        }
        if let Some(name) = &self.scalar_name {
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidValue(format!(
                    "vtk.scalar_name '{}' must be a non-empty word",
                    name
                )));
            }
        }
        Ok(())
    }
}
