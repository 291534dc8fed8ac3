//! Uniform 2D Cartesian meshes for gridstep simulations.
//!
//! A [`Grid`] is built from a validated [`GridConfig`]: a tensor product
//! of evenly spaced nodes over `[0, lx] x [0, ly]`, plus a same-shaped
//! array of [`BoundaryType`](gridstep_core::BoundaryType) tags. Borders
//! start out as walls; whole sides are retagged with
//! [`Grid::set_boundary`]. Geometry is fixed for the grid's lifetime.
//!
//! Arrays are indexed `[row, col]`, i.e. `[y, x]`, with shape `(ny, nx)`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod config;
pub mod grid;

pub use config::GridConfig;
pub use grid::{create_grid, Grid};
