//! CFL-based stable time-step estimate.

use gridstep_core::StepError;

/// Speeds below this magnitude count as zero in [`cfl_time_step`].
pub const MIN_SPEED: f64 = 1e-12;

/// `cfl * dx / |u_max|`, the largest step an explicit advection scheme
/// can take at speed `u_max` on spacing `dx` with safety factor `cfl`.
///
/// The sign of `u_max` is ignored; it is a speed bound. A `u_max` whose
/// magnitude is below [`MIN_SPEED`], or that is non-finite, yields
/// [`StepError::Division`] rather than a huge, infinite or zero step.
/// `dx` must be finite and positive.
///
/// # Examples
///
/// ```
/// use gridstep_core::StepError;
/// use gridstep_stepper::cfl_time_step;
///
/// let dt = cfl_time_step(0.5, 0.1, 2.0).unwrap();
/// assert!((dt - 0.025).abs() < 1e-15);
///
/// assert_eq!(
///     cfl_time_step(0.5, 0.1, 0.0),
///     Err(StepError::Division { dx: 0.1, u_max: 0.0 })
/// );
/// ```
pub fn cfl_time_step(cfl: f64, dx: f64, u_max: f64) -> Result<f64, StepError> {
    if !(dx.is_finite() && dx > 0.0) {
        return Err(StepError::InvalidSpacing { dx });
    }
    let speed = u_max.abs();
    if !(speed.is_finite() && speed >= MIN_SPEED) {
        return Err(StepError::Division { dx, u_max });
    }
    let dt = cfl * dx / speed;
    if !(dt.is_finite() && dt > 0.0) {
        return Err(StepError::Division { dx, u_max });
    }
    Ok(dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_linearly() {
        let a = cfl_time_step(1.0, 0.2, 1.0).unwrap();
        let b = cfl_time_step(0.5, 0.2, 1.0).unwrap();
        assert!((a - 0.2).abs() < 1e-15);
        assert!((b - 0.1).abs() < 1e-15);
    }

    #[test]
    fn negative_velocity_uses_magnitude() {
        assert_eq!(cfl_time_step(0.5, 0.1, -2.0), cfl_time_step(0.5, 0.1, 2.0));
    }

    #[test]
    fn zero_and_near_zero_velocity_rejected() {
        assert!(matches!(
            cfl_time_step(0.5, 0.1, 0.0),
            Err(StepError::Division { .. })
        ));
        assert!(matches!(
            cfl_time_step(0.5, 0.1, -0.0),
            Err(StepError::Division { .. })
        ));
        for u_max in [5e-324, 1e-300, -1e-13] {
            assert_eq!(
                cfl_time_step(0.5, 0.1, u_max),
                Err(StepError::Division { dx: 0.1, u_max }),
                "u_max={u_max} accepted"
            );
        }
    }

    #[test]
    fn threshold_speed_is_accepted() {
        let dt = cfl_time_step(0.5, 0.1, MIN_SPEED).unwrap();
        assert!(dt.is_finite() && dt > 0.0);
    }

    #[test]
    fn non_finite_velocity_rejected() {
        for u_max in [f64::NAN, f64::INFINITY] {
            assert!(matches!(
                cfl_time_step(0.5, 0.1, u_max),
                Err(StepError::Division { .. })
            ));
        }
    }

    #[test]
    fn bad_spacing_rejected_first() {
        assert_eq!(
            cfl_time_step(0.5, 0.0, 0.0),
            Err(StepError::InvalidSpacing { dx: 0.0 })
        );
        assert!(matches!(
            cfl_time_step(0.5, f64::NAN, 1.0),
            Err(StepError::InvalidSpacing { .. })
        ));
    }
}
