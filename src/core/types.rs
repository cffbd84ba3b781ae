//! core::types
//!
//! Strong types for lattice dimensions, vertices and colors.
//!
//! # Types
//!
//! - [`Dimensions`] - Validated `rows x cols` lattice size
//! - [`VertexId`] - Row-major vertex index
//! - [`Color`] - Color id assigned by the colorer
//!
//! # Validation
//!
//! `Dimensions` enforces its bounds at construction time: every vertex index
//! of a constructed lattice fits [`VertexId`], and the neighbour table fits
//! in memory addressing. Code downstream of it never re-checks.
//!
//! # Examples
//!
//! ```
//! use gridcolor::core::types::Dimensions;
//!
//! let dims = Dimensions::new(3, 4).unwrap();
//! assert_eq!(dims.num_vertices(), 12);
//! assert_eq!(dims.index(1, 2), 6);
//!
//! assert!(Dimensions::new(0, 4).is_err());
//! assert!(Dimensions::new(u32::MAX, 2).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Row-major vertex index, `I = j + i * cols`.
pub type VertexId = u32;

/// Errors from dimension validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DimensionError {
    #[error("lattice dimensions must be positive, got {rows} x {cols}")]
    ZeroDimension { rows: u32, cols: u32 },

    #[error("index overflow: {rows} x {cols} vertices cannot be indexed with 32-bit ids")]
    IndexOverflow { rows: u32, cols: u32 },
}

/// Size of a rectilinear lattice.
///
/// `rows` is the number of lattice rows (`ni`), `cols` the number of
/// columns (`nj`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDimensions")]
pub struct Dimensions {
    rows: u32,
    cols: u32,
}

/// Unvalidated wire form of [`Dimensions`].
#[derive(Deserialize)]
struct RawDimensions {
    rows: u32,
    cols: u32,
}

impl TryFrom<RawDimensions> for Dimensions {
    type Error = DimensionError;

    fn try_from(raw: RawDimensions) -> Result<Self, Self::Error> {
        Dimensions::new(raw.rows, raw.cols)
    }
}

impl Dimensions {
    /// Validate and create lattice dimensions.
    ///
    /// # Errors
    ///
    /// - [`DimensionError::ZeroDimension`] if either side is 0
    /// - [`DimensionError::IndexOverflow`] if `rows * cols` does not fit
    ///   [`VertexId`] or the neighbour table size does not fit `usize`
    pub fn new(rows: u32, cols: u32) -> Result<Self, DimensionError> {
        if rows == 0 || cols == 0 {
            return Err(DimensionError::ZeroDimension { rows, cols });
        }

        // The neighbour table holds fewer than 4N entries.
        rows.checked_mul(cols)
            .and_then(|n| usize::try_from(n).ok())
            .and_then(|n| n.checked_mul(4))
            .ok_or(DimensionError::IndexOverflow { rows, cols })?;

        Ok(Self { rows, cols })
    }

    /// Number of rows (`ni`).
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns (`nj`).
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total vertex count `N = rows * cols`.
    pub fn num_vertices(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Number of neighbour-table entries (twice the undirected edge count).
    ///
    /// Equals `4 * rows * cols - 2 * (rows + cols)`.
    pub fn num_endpoints(&self) -> usize {
        let (r, c) = (self.rows as usize, self.cols as usize);
        2 * (r * (c - 1) + c * (r - 1))
    }

    /// Row-major vertex index for `(row, col)`.
    pub fn index(&self, row: u32, col: u32) -> VertexId {
        col + row * self.cols
    }

    /// Inverse of [`Dimensions::index`].
    pub fn position(&self, vertex: VertexId) -> (u32, u32) {
        (vertex / self.cols, vertex % self.cols)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A color id.
///
/// Ids handed out by the colorer are contiguous starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    /// Color id as a table index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
