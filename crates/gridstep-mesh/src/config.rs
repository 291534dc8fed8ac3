//! Grid configuration and validation.

use gridstep_core::{Axis, ConfigError};

/// Dimensions of a uniform Cartesian grid.
///
/// `nx` and `ny` are node counts along x and y (at least 2 each, so
/// that every axis has at least one cell); `lx` and `ly` are the
/// physical extents. [`validate()`](GridConfig::validate) is called by
/// [`Grid::new`](crate::Grid::new) before anything is allocated.
///
/// # Examples
///
/// ```
/// use gridstep_mesh::GridConfig;
///
/// let config = GridConfig::new(32, 16).with_extent(2.0, 1.0);
/// assert!(config.validate().is_ok());
/// assert!(GridConfig::new(1, 16).validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Node count in x.
    pub nx: usize,
    /// Node count in y.
    pub ny: usize,
    /// Domain length in x.
    pub lx: f64,
    /// Domain length in y.
    pub ly: f64,
}

impl GridConfig {
    /// Extent used by [`new`](Self::new) on both axes.
    pub const DEFAULT_EXTENT: f64 = 1.0;

    /// Minimum node count per axis.
    pub const MIN_CELLS: usize = 2;

    /// A unit-square configuration with the given node counts.
    pub fn new(nx: usize, ny: usize) -> Self {
        Self {
            nx,
            ny,
            lx: Self::DEFAULT_EXTENT,
            ly: Self::DEFAULT_EXTENT,
        }
    }

    /// Replace the physical extents.
    pub fn with_extent(mut self, lx: f64, ly: f64) -> Self {
        self.lx = lx;
        self.ly = ly;
        self
    }

    /// Check the structural invariants: `nx, ny >= 2` and `lx, ly`
    /// finite and positive. Counts are checked before extents, x before y.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, count) in [(Axis::X, self.nx), (Axis::Y, self.ny)] {
            if count < Self::MIN_CELLS {
                return Err(ConfigError::TooFewCells { axis, count });
            }
        }
        for (axis, value) in [(Axis::X, self.lx), (Axis::Y, self.ly)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidExtent { axis, value });
            }
        }
        Ok(())
    }

    /// Node spacing in x, `lx / (nx - 1)`. Meaningful once validated.
    pub fn dx(&self) -> f64 {
        self.lx / (self.nx - 1) as f64
    }

    /// Node spacing in y, `ly / (ny - 1)`. Meaningful once validated.
    pub fn dy(&self) -> f64 {
        self.ly / (self.ny - 1) as f64
    }
}
