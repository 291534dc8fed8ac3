//! Test utilities for gridstep development.
//!
//! Provides a [`RecordingObserver`] that captures every event a
//! component emits, and the linear decay problem `du/dt = -λu` with
//! closed-form amplification factors for each explicit scheme.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::{Arc, Mutex, MutexGuard};

use gridstep_core::{BoundaryType, Event, EventLevel, Method, Observer, Side};
use ndarray::{Array, Dimension};

/// Owned copy of an [`Event`], with the step state flattened.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    GridCreated {
        nx: usize,
        ny: usize,
        lx: f64,
        ly: f64,
    },
    BoundaryChanged {
        side: Side,
        boundary: BoundaryType,
    },
    StepperCreated {
        method: Method,
        cfl: f64,
    },
    TimeStepComputed {
        dx: f64,
        u_max: f64,
        dt: f64,
    },
    Step {
        time: f64,
        dt: f64,
        state: Vec<f64>,
    },
}

impl RecordedEvent {
    fn capture(event: &Event<'_>) -> Self {
        match event {
            Event::GridCreated { nx, ny, lx, ly } => Self::GridCreated {
                nx: *nx,
                ny: *ny,
                lx: *lx,
                ly: *ly,
            },
            Event::BoundaryChanged { side, boundary } => Self::BoundaryChanged {
                side: *side,
                boundary: *boundary,
            },
            Event::StepperCreated { method, cfl } => Self::StepperCreated {
                method: *method,
                cfl: *cfl,
            },
            Event::TimeStepComputed { dx, u_max, dt } => Self::TimeStepComputed {
                dx: *dx,
                u_max: *u_max,
                dt: *dt,
            },
            Event::Step { time, dt, state } => Self::Step {
                time: *time,
                dt: *dt,
                state: state.iter().copied().collect(),
            },
        }
    }
}

/// Observer that keeps every event it receives, with its level.
///
/// Cheap to clone; clones share the same log. Hand one clone to the
/// component under test (via [`RecordingObserver::shared`]) and inspect
/// the other.
#[derive(Clone, Default)]
pub struct RecordingObserver {
    log: Arc<Mutex<Vec<(EventLevel, RecordedEvent)>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle suitable for `with_observer` constructors.
    pub fn shared(&self) -> Arc<dyn Observer> {
        Arc::new(self.clone())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(EventLevel, RecordedEvent)>> {
        // A panicking test thread must not hide the events it recorded.
        self.log.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// All recorded events in arrival order.
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.lock().iter().map(|(_, e)| e.clone()).collect()
    }

    /// Recorded events at exactly `level`.
    pub fn at_level(&self, level: EventLevel) -> Vec<RecordedEvent> {
        self.lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, e)| e.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Observer for RecordingObserver {
    fn on_event(&self, event: &Event<'_>) {
        self.lock().push((event.level(), RecordedEvent::capture(event)));
    }
}

/// Right-hand side of `du/dt = -λu`.
pub fn decay_rhs<D: Dimension>(lambda: f64) -> impl Fn(&Array<f64, D>) -> Array<f64, D> {
    move |u| u * -lambda
}

/// One-step amplification factor of `method` on `du/dt = -λu`, i.e. the
/// truncated Taylor series of `exp(-λ dt)` to the scheme's order.
pub fn amplification(method: Method, lambda: f64, dt: f64) -> f64 {
    let z = -lambda * dt;
    let mut term = 1.0;
    let mut sum = 1.0;
    for k in 1..=method.order() {
        term *= z / k as f64;
        sum += term;
    }
    sum
}

/// Absolute-tolerance float comparison with a readable failure message.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual} (tolerance {tol})"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    #[test]
    fn amplification_matches_known_polynomials() {
        let dt: f64 = 0.1;
        assert_close(amplification(Method::Euler, 1.0, dt), 0.9, 1e-15);
        assert_close(amplification(Method::Rk2, 1.0, dt), 1.0 - dt + dt * dt / 2.0, 1e-15);
        let rk4 = 1.0 - dt + dt.powi(2) / 2.0 - dt.powi(3) / 6.0 + dt.powi(4) / 24.0;
        assert_close(amplification(Method::Rk4, 1.0, dt), rk4, 1e-15);
    }

    #[test]
    fn decay_rhs_negates_and_scales() {
        let f = decay_rhs(2.0);
        let out = f(&arr1(&[1.0, -0.5]));
        assert_eq!(out, arr1(&[-2.0, 1.0]));
    }

    #[test]
    fn recorder_keeps_levels_and_order() {
        let rec = RecordingObserver::new();
        let obs = rec.shared();
        obs.on_event(&Event::GridCreated {
            nx: 2,
            ny: 2,
            lx: 1.0,
            ly: 1.0,
        });
        obs.on_event(&Event::TimeStepComputed {
            dx: 0.1,
            u_max: 1.0,
            dt: 0.05,
        });
        assert_eq!(rec.len(), 2);
        assert_eq!(rec.at_level(EventLevel::Debug).len(), 1);
        assert!(matches!(rec.events()[0], RecordedEvent::GridCreated { nx: 2, .. }));
        rec.clear();
        assert!(rec.is_empty());
    }
}
