//! gridstep: a minimal structured-grid simulation kernel.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the gridstep sub-crates. A driver builds a [`mesh::Grid`] for the
//! geometry and boundary tags, picks a [`stepper::TimeStepper`], and owns
//! the loop that feeds the stepper its right-hand side.
//!
//! # Quick start
//!
//! ```rust
//! use gridstep::prelude::*;
//! use ndarray::Array2;
//!
//! let mut grid = create_grid(16, 8, 2.0, 1.0).unwrap();
//! grid.set_boundary(Side::Left, BoundaryType::Inlet);
//! grid.set_boundary_named("right", BoundaryType::Outlet).unwrap();
//!
//! let stepper = TimeStepper::new(Method::Rk4, 0.5).unwrap();
//! let dt = stepper.compute_time_step(grid.dx(), 1.0).unwrap();
//!
//! // One field value per cell center, decaying uniformly.
//! let (xc, _yc) = grid.cell_centers();
//! let u0: Array2<f64> = xc.mapv(|x| x.sin());
//! let u1 = stepper.step(u0.clone(), dt, |u: &Array2<f64>| -u).unwrap();
//! assert!(u1.iter().zip(u0.iter()).all(|(a, b)| a.abs() <= b.abs()));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridstep-core` | Boundary tags, sides, methods, errors, observers |
//! | [`mesh`] | `gridstep-mesh` | `GridConfig`, `Grid`, cell centers |
//! | [`stepper`] | `gridstep-stepper` | `TimeStepper`, scheme kernels, CFL estimate |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core enums, error types and the observer interface (`gridstep-core`).
pub use gridstep_core as types;

/// Cartesian meshes and boundary tagging (`gridstep-mesh`).
pub use gridstep_mesh as mesh;

/// Explicit time integration (`gridstep-stepper`).
pub use gridstep_stepper as stepper;

/// Common imports for typical gridstep usage.
///
/// ```rust
/// use gridstep::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gridstep_core::{BoundaryType, Method, Side};

    // Errors
    pub use gridstep_core::{
        ConfigError, InvalidSideError, StepError, StepperError, UnknownMethodError,
    };

    // Observers
    pub use gridstep_core::{Event, NoopObserver, Observer, TracingObserver};

    // Mesh
    pub use gridstep_mesh::{create_grid, Grid, GridConfig};

    // Stepper
    pub use gridstep_stepper::{Integration, TimeStepper};
}
