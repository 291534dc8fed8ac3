//! The Cartesian grid: node coordinates, boundary tags and cell centers.

use crate::config::GridConfig;
use gridstep_core::{
    BoundaryType, ConfigError, Event, InvalidSideError, Observer, Side, TracingObserver,
};
use indexmap::IndexMap;
use ndarray::{s, Array1, Array2, ArrayView1, ArrayViewMut1};
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// A uniform 2D Cartesian grid with per-node boundary tags.
///
/// Node coordinates are `x[[j, i]] = i * dx` and `y[[j, i]] = j * dy`
/// (a `meshgrid` of two `linspace`s), with the last node pinned exactly
/// to `lx` / `ly`. The boundary array has the same `(ny, nx)` shape and
/// aligns 1:1 with the coordinates.
///
/// # Thread safety
///
/// Readers may run concurrently; [`set_boundary`](Self::set_boundary)
/// takes `&mut self`, so the borrow checker serializes writers.
///
/// # Examples
///
/// ```
/// use gridstep_core::{BoundaryType, Side};
/// use gridstep_mesh::{Grid, GridConfig};
///
/// let mut grid = Grid::new(GridConfig::new(3, 3)).unwrap();
/// assert_eq!(grid.boundary_at(0, 1), Some(BoundaryType::Wall));
/// assert_eq!(grid.boundary_at(1, 1), Some(BoundaryType::Internal));
///
/// grid.set_boundary(Side::Left, BoundaryType::Inlet);
/// assert!(grid.side(Side::Left).iter().all(|&b| b == BoundaryType::Inlet));
///
/// let (xc, yc) = grid.cell_centers();
/// assert_eq!(xc.dim(), (2, 2));
/// assert!((xc[[0, 0]] - 0.25).abs() < 1e-12);
/// assert!((yc[[0, 0]] - 0.25).abs() < 1e-12);
/// ```
#[derive(Clone)]
pub struct Grid {
    config: GridConfig,
    dx: f64,
    dy: f64,
    x: Array2<f64>,
    y: Array2<f64>,
    boundaries: Array2<BoundaryType>,
    observer: Arc<dyn Observer>,
}

impl Grid {
    /// Build a grid, reporting events through `tracing`.
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        Self::with_observer(config, Arc::new(TracingObserver))
    }

    /// Build a grid that reports events to `observer`.
    ///
    /// Validation happens first; on failure nothing is allocated and the
    /// observer sees no event.
    pub fn with_observer(
        config: GridConfig,
        observer: Arc<dyn Observer>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let GridConfig { nx, ny, lx, ly } = config;

        let xs = nodes(lx, nx);
        let ys = nodes(ly, ny);
        let x = Array2::from_shape_fn((ny, nx), |(_, i)| xs[i]);
        let y = Array2::from_shape_fn((ny, nx), |(j, _)| ys[j]);

        let mut grid = Self {
            config,
            dx: config.dx(),
            dy: config.dy(),
            x,
            y,
            boundaries: Array2::from_elem((ny, nx), BoundaryType::Internal),
            observer,
        };
        grid.apply_default_boundaries();
        grid.observer.on_event(&Event::GridCreated { nx, ny, lx, ly });
        Ok(grid)
    }

    /// Walls on all four borders. Written bottom, top, left, right, so
    /// the column writes own the corners.
    fn apply_default_boundaries(&mut self) {
        for side in [Side::Bottom, Side::Top, Side::Left, Side::Right] {
            self.side_mut(side).fill(BoundaryType::Wall);
        }
    }

    /// The configuration this grid was built from.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Node count in x.
    pub fn nx(&self) -> usize {
        self.config.nx
    }

    /// Node count in y.
    pub fn ny(&self) -> usize {
        self.config.ny
    }

    /// Array shape `(ny, nx)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.config.ny, self.config.nx)
    }

    /// Node spacing in x.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Node spacing in y.
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Node x coordinates, shape `(ny, nx)`.
    pub fn x(&self) -> &Array2<f64> {
        &self.x
    }

    /// Node y coordinates, shape `(ny, nx)`.
    pub fn y(&self) -> &Array2<f64> {
        &self.y
    }

    /// Coordinates of node `[row, col]`, or `None` if out of range.
    pub fn node(&self, row: usize, col: usize) -> Option<(f64, f64)> {
        Some((*self.x.get((row, col))?, *self.y.get((row, col))?))
    }

    /// The boundary tag array, shape `(ny, nx)`.
    pub fn boundaries(&self) -> &Array2<BoundaryType> {
        &self.boundaries
    }

    /// Tag of node `[row, col]`, or `None` if out of range.
    pub fn boundary_at(&self, row: usize, col: usize) -> Option<BoundaryType> {
        self.boundaries.get((row, col)).copied()
    }

    /// Overwrite every tag on `side` with `boundary`.
    ///
    /// Repeated calls are not checked: the last write wins, including at
    /// the corners shared by two sides.
    pub fn set_boundary(&mut self, side: Side, boundary: BoundaryType) {
        self.side_mut(side).fill(boundary);
        self.observer.on_event(&Event::BoundaryChanged { side, boundary });
    }

    /// [`set_boundary`](Self::set_boundary) keyed by side name
    /// (`"left"`, `"right"`, `"top"`, `"bottom"`).
    ///
    /// An unrecognised name leaves every tag unchanged.
    pub fn set_boundary_named(
        &mut self,
        side: &str,
        boundary: BoundaryType,
    ) -> Result<(), InvalidSideError> {
        let side: Side = side.parse()?;
        self.set_boundary(side, boundary);
        Ok(())
    }

    /// Read-only view of the tags along `side`, in increasing index order.
    pub fn side(&self, side: Side) -> ArrayView1<'_, BoundaryType> {
        let (ny, nx) = self.shape();
        match side {
            Side::Left => self.boundaries.column(0),
            Side::Right => self.boundaries.column(nx - 1),
            Side::Top => self.boundaries.row(ny - 1),
            Side::Bottom => self.boundaries.row(0),
        }
    }

    fn side_mut(&mut self, side: Side) -> ArrayViewMut1<'_, BoundaryType> {
        let (ny, nx) = self.shape();
        match side {
            Side::Left => self.boundaries.column_mut(0),
            Side::Right => self.boundaries.column_mut(nx - 1),
            Side::Top => self.boundaries.row_mut(ny - 1),
            Side::Bottom => self.boundaries.row_mut(0),
        }
    }

    /// Sides whose nodes, corners excluded, are all tagged `boundary`.
    ///
    /// Corners are skipped because they belong to whichever adjacent side
    /// was written last. A side with no non-corner nodes (length 2) is
    /// judged on its corners.
    pub fn sides_with(&self, boundary: BoundaryType) -> SmallVec<[Side; 4]> {
        Side::ALL
            .into_iter()
            .filter(|&side| {
                let tags = self.side(side);
                let n = tags.len();
                let span = if n > 2 {
                    tags.slice_move(s![1..n - 1])
                } else {
                    tags
                };
                span.iter().all(|&b| b == boundary)
            })
            .collect()
    }

    /// Node count per tag, keyed in order of first appearance in a
    /// row-major scan.
    pub fn tag_counts(&self) -> IndexMap<BoundaryType, usize> {
        let mut counts = IndexMap::new();
        for &b in &self.boundaries {
            *counts.entry(b).or_insert(0) += 1;
        }
        counts
    }

    /// Cell-center coordinates, each of shape `(ny - 1, nx - 1)`.
    ///
    /// The center of cell `[j, i]` is the mean of its two diagonal corner
    /// nodes `[j, i]` and `[j + 1, i + 1]`. Returned arrays are fresh
    /// copies; repeated calls give identical results.
    // Edge-midpoint averaging is a known alternative; it is not used.
    pub fn cell_centers(&self) -> (Array2<f64>, Array2<f64>) {
        let xc = (&self.x.slice(s![..-1, ..-1]) + &self.x.slice(s![1.., 1..])) / 2.0;
        let yc = (&self.y.slice(s![..-1, ..-1]) + &self.y.slice(s![1.., 1..])) / 2.0;
        (xc, yc)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("config", &self.config)
            .field("dx", &self.dx)
            .field("dy", &self.dy)
            .finish_non_exhaustive()
    }
}

/// `n` evenly spaced points on `[0, extent]`, the last pinned to `extent`.
fn nodes(extent: f64, n: usize) -> Array1<f64> {
    let step = extent / (n - 1) as f64;
    Array1::from_shape_fn(n, |i| if i + 1 == n { extent } else { i as f64 * step })
}

/// Build a grid from node counts and extents.
///
/// Shorthand for `Grid::new(GridConfig::new(nx, ny).with_extent(lx, ly))`.
pub fn create_grid(nx: usize, ny: usize, lx: f64, ly: f64) -> Result<Grid, ConfigError> {
    Grid::new(GridConfig::new(nx, ny).with_extent(lx, ly))
}
