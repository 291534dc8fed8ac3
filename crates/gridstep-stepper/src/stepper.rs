//! The [`TimeStepper`] strategy object.

use crate::cfl::cfl_time_step;
use crate::scheme::{check_dt, forward_euler, runge_kutta_2, runge_kutta_4};
use gridstep_core::{Event, Method, Observer, StepError, StepperError, TracingObserver};
use ndarray::{Array, Dimension};
use std::fmt;
use std::sync::Arc;

/// Explicit time stepper with a fixed scheme and CFL factor.
///
/// # Contract
///
/// - The method is resolved at construction; an unknown scheme name
///   fails in [`from_name`](Self::from_name), never inside a step.
/// - `step()` and `compute_time_step()` take `&self` and keep no per-call
///   state, so a single stepper may be shared across threads.
/// - The CFL estimate is advisory: `step()` never checks a caller's `dt`
///   against it.
///
/// # Examples
///
/// ```
/// use gridstep_core::Method;
/// use gridstep_stepper::TimeStepper;
/// use ndarray::{arr1, Array1};
///
/// let stepper = TimeStepper::new(Method::Euler, 0.5).unwrap();
/// let u = stepper.step(arr1(&[1.0]), 0.1, |u: &Array1<f64>| -u).unwrap();
/// assert!((u[0] - 0.9).abs() < 1e-15);
///
/// assert!(stepper.compute_time_step(0.1, 0.0).is_err());
/// ```
#[derive(Clone)]
pub struct TimeStepper {
    method: Method,
    cfl: f64,
    observer: Arc<dyn Observer>,
}

/// Result of [`TimeStepper::integrate`].
#[derive(Clone, Debug, PartialEq)]
pub struct Integration<D: Dimension> {
    /// State at the final time.
    pub state: Array<f64, D>,
    /// Final simulation time, `steps * dt`.
    pub time: f64,
    /// Number of steps taken.
    pub steps: usize,
}

impl TimeStepper {
    /// CFL factor used by [`Default`].
    pub const DEFAULT_CFL: f64 = 0.5;

    /// Build a stepper that reports events through `tracing`.
    pub fn new(method: Method, cfl: f64) -> Result<Self, StepperError> {
        Self::with_observer(method, cfl, Arc::new(TracingObserver))
    }

    /// Build a stepper that reports events to `observer`.
    ///
    /// `cfl` must be finite and positive.
    pub fn with_observer(
        method: Method,
        cfl: f64,
        observer: Arc<dyn Observer>,
    ) -> Result<Self, StepperError> {
        if !(cfl.is_finite() && cfl > 0.0) {
            return Err(StepperError::InvalidCfl { value: cfl });
        }
        observer.on_event(&Event::StepperCreated { method, cfl });
        Ok(Self {
            method,
            cfl,
            observer,
        })
    }

    /// Build a stepper from a scheme name (`"euler"`, `"rk2"`, `"rk4"`).
    pub fn from_name(method: &str, cfl: f64) -> Result<Self, StepperError> {
        Self::new(method.parse()?, cfl)
    }

    /// The configured scheme.
    pub fn method(&self) -> Method {
        self.method
    }

    /// The CFL safety factor.
    pub fn cfl(&self) -> f64 {
        self.cfl
    }

    /// Advisory stable step `cfl * dx / |u_max|`.
    ///
    /// See [`cfl_time_step`] for the failure cases.
    pub fn compute_time_step(&self, dx: f64, u_max: f64) -> Result<f64, StepError> {
        let dt = cfl_time_step(self.cfl, dx, u_max)?;
        self.observer.on_event(&Event::TimeStepComputed { dx, u_max, dt });
        Ok(dt)
    }

    /// Advance `u` by one step of size `dt` under the configured scheme.
    ///
    /// `dt` must be finite and positive. `rhs` must return an array of
    /// the same shape as its input; ndarray panics otherwise.
    pub fn step<D, F>(&self, u: Array<f64, D>, dt: f64, rhs: F) -> Result<Array<f64, D>, StepError>
    where
        D: Dimension,
        F: Fn(&Array<f64, D>) -> Array<f64, D>,
    {
        match self.method {
            Method::Euler => forward_euler(u, dt, rhs),
            Method::Rk2 => runge_kutta_2(u, dt, rhs),
            Method::Rk4 => runge_kutta_4(u, dt, rhs),
        }
    }

    /// Step from `t = 0` while `t < t_end`, reporting a
    /// [`Event::Step`] after each step.
    ///
    /// Time is tracked as `steps * dt`, so the loop stops after exactly
    /// `ceil(t_end / dt)` steps and may overshoot `t_end` by less than
    /// one step. A `t_end <= 0` returns `u0` unchanged.
    pub fn integrate<D, F>(
        &self,
        u0: Array<f64, D>,
        t_end: f64,
        dt: f64,
        rhs: F,
    ) -> Result<Integration<D>, StepError>
    where
        D: Dimension,
        F: Fn(&Array<f64, D>) -> Array<f64, D>,
    {
        check_dt(dt)?;
        if !t_end.is_finite() {
            return Err(StepError::InvalidEndTime { t_end });
        }

        let mut state = u0;
        let mut steps = 0usize;
        let mut time = 0.0;
        while time < t_end {
            state = self.step(state, dt, &rhs)?;
            steps += 1;
            time = steps as f64 * dt;
            self.observer.on_event(&Event::Step {
                time,
                dt,
                state: state.view().into_dyn(),
            });
        }
        Ok(Integration { state, time, steps })
    }
}

impl Default for TimeStepper {
    /// Forward Euler with CFL 0.5, reporting through `tracing`.
    fn default() -> Self {
        Self::default_with(Arc::new(TracingObserver))
    }
}

impl TimeStepper {
    /// Default configuration reporting to `observer`. The default CFL is
    /// known valid, so this cannot fail.
    fn default_with(observer: Arc<dyn Observer>) -> Self {
        let method = Method::default();
        let cfl = Self::DEFAULT_CFL;
        observer.on_event(&Event::StepperCreated { method, cfl });
        Self {
            method,
            cfl,
            observer,
        }
    }
}

impl fmt::Debug for TimeStepper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeStepper")
            .field("method", &self.method)
            .field("cfl", &self.cfl)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstep_core::{EventLevel, UnknownMethodError};
    use gridstep_test_utils::{
        amplification, assert_close, decay_rhs, RecordedEvent, RecordingObserver,
    };
    use ndarray::arr1;

    #[test]
    fn from_name_fails_fast_on_unknown_method() {
        let err = TimeStepper::from_name("rk3", 0.5).unwrap_err();
        assert_eq!(
            err,
            StepperError::UnknownMethod(UnknownMethodError { name: "rk3".into() })
        );
        assert_eq!(TimeStepper::from_name("rk2", 0.5).unwrap().method(), Method::Rk2);
    }

    #[test]
    fn invalid_cfl_rejected_and_unreported() {
        let rec = RecordingObserver::new();
        for cfl in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let r = TimeStepper::with_observer(Method::Rk4, cfl, rec.shared());
            assert!(matches!(r, Err(StepperError::InvalidCfl { .. })));
        }
        assert!(rec.is_empty());
    }

    #[test]
    fn construction_reported_at_info() {
        let rec = RecordingObserver::new();
        let _s = TimeStepper::with_observer(Method::Rk4, 0.8, rec.shared()).unwrap();
        assert_eq!(
            rec.at_level(EventLevel::Info),
            vec![RecordedEvent::StepperCreated {
                method: Method::Rk4,
                cfl: 0.8
            }]
        );
    }

    #[test]
    fn default_is_euler_half_cfl() {
        let s = TimeStepper::default();
        assert_eq!(s.method(), Method::Euler);
        assert_eq!(s.cfl(), 0.5);
    }

    #[test]
    fn default_construction_is_reported() {
        let rec = RecordingObserver::new();
        let s = TimeStepper::default_with(rec.shared());
        assert_eq!(s.method(), Method::Euler);
        assert_eq!(
            rec.events(),
            vec![RecordedEvent::StepperCreated {
                method: Method::Euler,
                cfl: TimeStepper::DEFAULT_CFL
            }]
        );
    }

    #[test]
    fn step_dispatches_on_method() {
        for method in Method::ALL {
            let s = TimeStepper::new(method, 0.5).unwrap();
            let u = s.step(arr1(&[1.0]), 0.1, decay_rhs(1.0)).unwrap();
            assert_close(u[0], amplification(method, 1.0, 0.1), 1e-15);
        }
    }

    #[test]
    fn compute_time_step_reports_debug_event() {
        let rec = RecordingObserver::new();
        let s = TimeStepper::with_observer(Method::Euler, 0.5, rec.shared()).unwrap();
        rec.clear();

        let dt = s.compute_time_step(0.1, 2.0).unwrap();
        assert_close(dt, 0.025, 1e-15);
        assert_eq!(rec.at_level(EventLevel::Debug).len(), 1);

        assert_eq!(
            s.compute_time_step(0.1, 0.0),
            Err(StepError::Division { dx: 0.1, u_max: 0.0 })
        );
        assert_eq!(rec.len(), 1);
    }

    #[test]
    fn integrate_counts_steps_without_drift() {
        let s = TimeStepper::with_observer(
            Method::Rk4,
            0.5,
            Arc::new(gridstep_core::NoopObserver),
        )
        .unwrap();
        let out = s.integrate(arr1(&[1.0]), 1.0, 0.1, decay_rhs(1.0)).unwrap();
        assert_eq!(out.steps, 10);
        assert_close(out.time, 1.0, 1e-12);
        assert_close(out.state[0], (-1.0f64).exp(), 1e-6);
    }

    #[test]
    fn integrate_reports_each_step() {
        let rec = RecordingObserver::new();
        let s = TimeStepper::with_observer(Method::Euler, 0.5, rec.shared()).unwrap();
        rec.clear();

        s.integrate(arr1(&[1.0]), 0.25, 0.1, decay_rhs(1.0)).unwrap();
        let events = rec.events();
        assert_eq!(events.len(), 3);
        match &events[0] {
            RecordedEvent::Step { time, dt, state } => {
                assert_close(*time, 0.1, 1e-15);
                assert_eq!(*dt, 0.1);
                assert_close(state[0], 0.9, 1e-15);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn integrate_with_non_positive_end_is_identity() {
        let s = TimeStepper::default();
        let out = s.integrate(arr1(&[2.0]), 0.0, 0.1, decay_rhs(1.0)).unwrap();
        assert_eq!(out.steps, 0);
        assert_eq!(out.state, arr1(&[2.0]));
    }

    #[test]
    fn integrate_rejects_bad_arguments() {
        let s = TimeStepper::default();
        assert!(matches!(
            s.integrate(arr1(&[1.0]), 1.0, 0.0, decay_rhs(1.0)),
            Err(StepError::InvalidStep { .. })
        ));
        assert!(matches!(
            s.integrate(arr1(&[1.0]), f64::INFINITY, 0.1, decay_rhs(1.0)),
            Err(StepError::InvalidEndTime { .. })
        ));
    }

    #[test]
    fn debug_shows_configuration() {
        let s = TimeStepper::new(Method::Rk2, 0.25).unwrap();
        assert_eq!(
            format!("{s:?}"),
            "TimeStepper { method: Rk2, cfl: 0.25, .. }"
        );
    }
}
