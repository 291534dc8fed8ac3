//! Benchmark profiles and utilities for the gridstep kernel.
//!
//! - [`reference_grid`]: 100x100 nodes with inlet/outlet on the x sides
//! - [`stress_grid`]: 316x316 nodes (~100K), same tagging
//! - [`gaussian_bump`]: a smooth initial field sampled at cell centers
//! - [`relaxation_rhs`]: `du/dt = -λ (u - u_ref)` over a whole field

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::Arc;

use gridstep_core::{BoundaryType, ConfigError, NoopObserver, Side};
use gridstep_mesh::{Grid, GridConfig};
use ndarray::Array2;

/// Build a channel-flow grid: walls top and bottom, inlet left, outlet right.
///
/// Uses a [`NoopObserver`] so that benchmark loops carry no logging cost.
pub fn channel_grid(nx: usize, ny: usize, lx: f64, ly: f64) -> Result<Grid, ConfigError> {
    let config = GridConfig::new(nx, ny).with_extent(lx, ly);
    let mut grid = Grid::with_observer(config, Arc::new(NoopObserver))?;
    grid.set_boundary(Side::Left, BoundaryType::Inlet);
    grid.set_boundary(Side::Right, BoundaryType::Outlet);
    Ok(grid)
}

/// 100x100-node channel over `[0, 2] x [0, 1]`.
pub fn reference_grid() -> Result<Grid, ConfigError> {
    channel_grid(100, 100, 2.0, 1.0)
}

/// 316x316-node channel over `[0, 2] x [0, 1]`.
pub fn stress_grid() -> Result<Grid, ConfigError> {
    channel_grid(316, 316, 2.0, 1.0)
}

/// `exp(-r² / (2 w²))` centred on the domain, one value per cell.
pub fn gaussian_bump(grid: &Grid, width: f64) -> Array2<f64> {
    let (xc, yc) = grid.cell_centers();
    let cx = grid.config().lx / 2.0;
    let cy = grid.config().ly / 2.0;
    let denom = 2.0 * width * width;
    let mut field = xc;
    field.zip_mut_with(&yc, |x, &y| {
        let r2 = (*x - cx).powi(2) + (y - cy).powi(2);
        *x = (-r2 / denom).exp();
    });
    field
}

/// Linear relaxation of every cell toward `u_ref` at rate `lambda`.
pub fn relaxation_rhs(lambda: f64, u_ref: f64) -> impl Fn(&Array2<f64>) -> Array2<f64> {
    move |u| u.mapv(|v| -lambda * (v - u_ref))
}
