//! Structured event reporting.
//!
//! Components never write log output themselves. They hold an
//! `Arc<dyn Observer>` and hand it an [`Event`] whenever something
//! observable happens. [`TracingObserver`] forwards events to the
//! `tracing` facade and is what the default constructors install;
//! [`NoopObserver`] discards everything. Tests substitute a recording
//! observer.

use crate::boundary::{BoundaryType, Side};
use crate::method::Method;
use ndarray::ArrayViewD;

/// Severity of an [`Event`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventLevel {
    /// Per-step diagnostics.
    Debug,
    /// Construction and configuration changes.
    Info,
}

/// Something observable that happened inside a component.
#[derive(Clone, Debug)]
pub enum Event<'a> {
    /// A grid finished construction.
    GridCreated {
        /// Node count in x.
        nx: usize,
        /// Node count in y.
        ny: usize,
        /// Domain extent in x.
        lx: f64,
        /// Domain extent in y.
        ly: f64,
    },
    /// A whole side of the grid was retagged.
    BoundaryChanged {
        /// The side that was overwritten.
        side: Side,
        /// The tag written to every node on that side.
        boundary: BoundaryType,
    },
    /// A time stepper was constructed.
    StepperCreated {
        /// The integration scheme.
        method: Method,
        /// The CFL safety factor.
        cfl: f64,
    },
    /// A CFL time step was estimated.
    TimeStepComputed {
        /// Grid spacing.
        dx: f64,
        /// Maximum velocity.
        u_max: f64,
        /// The resulting step.
        dt: f64,
    },
    /// A step of the integration loop completed.
    Step {
        /// Simulation time after the step.
        time: f64,
        /// Step size used.
        dt: f64,
        /// State after the step.
        state: ArrayViewD<'a, f64>,
    },
}

impl Event<'_> {
    /// Severity of this event.
    pub fn level(&self) -> EventLevel {
        match self {
            Self::GridCreated { .. }
            | Self::BoundaryChanged { .. }
            | Self::StepperCreated { .. } => EventLevel::Info,
            Self::TimeStepComputed { .. } | Self::Step { .. } => EventLevel::Debug,
        }
    }
}

/// Receiver for component events.
///
/// `Send + Sync` so that a single stepper, and the observer inside it,
/// can be shared across threads integrating independent states.
pub trait Observer: Send + Sync {
    /// Handle one event. Must not panic; must not call back into the
    /// component that emitted it.
    fn on_event(&self, event: &Event<'_>);
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn on_event(&self, _event: &Event<'_>) {}
}

/// Observer that forwards events to `tracing`.
///
/// Construction and boundary events are logged at `INFO`, time-step and
/// step diagnostics at `DEBUG`. Formatting and output belong to the
/// subscriber the application installs.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_event(&self, event: &Event<'_>) {
        match event {
            Event::GridCreated { nx, ny, lx, ly } => {
                tracing::info!(
                    nx = *nx,
                    ny = *ny,
                    lx = *lx,
                    ly = *ly,
                    "created {nx}x{ny} Cartesian grid"
                );
            }
            Event::BoundaryChanged { side, boundary } => {
                tracing::info!(
                    side = %side,
                    boundary = %boundary,
                    "set {boundary} boundary condition on {side} side"
                );
            }
            Event::StepperCreated { method, cfl } => {
                tracing::info!(method = %method, cfl = *cfl, "initialized time stepping");
            }
            Event::TimeStepComputed { dx, u_max, dt } => {
                tracing::debug!(dx = *dx, u_max = *u_max, dt = *dt, "computed time step");
            }
            Event::Step { time, dt, state } => {
                tracing::debug!(time = *time, dt = *dt, state = ?state, "step");
            }
        }
    }
}
