//! The explicit Runge–Kutta kernels.
//!
//! Each kernel consumes the current state and returns the next one,
//! reusing the input buffer for the result. `rhs` is evaluated exactly
//! [`Method::stages`](gridstep_core::Method::stages) times.

use gridstep_core::StepError;
use ndarray::{Array, Dimension};

pub(crate) fn check_dt(dt: f64) -> Result<(), StepError> {
    if dt.is_finite() && dt > 0.0 {
        Ok(())
    } else {
        Err(StepError::InvalidStep { dt })
    }
}

/// `u + h * k` as a new array.
fn offset<D: Dimension>(u: &Array<f64, D>, h: f64, k: &Array<f64, D>) -> Array<f64, D> {
    let mut out = u.clone();
    out.scaled_add(h, k);
    out
}

/// Forward Euler: `u + dt * rhs(u)`.
pub fn forward_euler<D, F>(
    mut u: Array<f64, D>,
    dt: f64,
    rhs: F,
) -> Result<Array<f64, D>, StepError>
where
    D: Dimension,
    F: Fn(&Array<f64, D>) -> Array<f64, D>,
{
    check_dt(dt)?;
    let k1 = rhs(&u);
    u.scaled_add(dt, &k1);
    Ok(u)
}

/// Heun's method:
/// `k1 = rhs(u)`, `k2 = rhs(u + dt k1)`, `u + dt/2 (k1 + k2)`.
pub fn runge_kutta_2<D, F>(
    mut u: Array<f64, D>,
    dt: f64,
    rhs: F,
) -> Result<Array<f64, D>, StepError>
where
    D: Dimension,
    F: Fn(&Array<f64, D>) -> Array<f64, D>,
{
    check_dt(dt)?;
    let k1 = rhs(&u);
    let mut k2 = rhs(&offset(&u, dt, &k1));

    k2 += &k1;
    u.scaled_add(dt / 2.0, &k2);
    Ok(u)
}

/// Classical fourth-order Runge–Kutta:
/// `u + dt/6 (k1 + 2 k2 + 2 k3 + k4)` with midpoint stages.
pub fn runge_kutta_4<D, F>(
    mut u: Array<f64, D>,
    dt: f64,
    rhs: F,
) -> Result<Array<f64, D>, StepError>
where
    D: Dimension,
    F: Fn(&Array<f64, D>) -> Array<f64, D>,
{
    check_dt(dt)?;
    let half = dt / 2.0;
    let k1 = rhs(&u);
    let k2 = rhs(&offset(&u, half, &k1));
    let k3 = rhs(&offset(&u, half, &k2));
    let k4 = rhs(&offset(&u, dt, &k3));

    let mut sum = k1;
    sum.scaled_add(2.0, &k2);
    sum.scaled_add(2.0, &k3);
    sum += &k4;
    u.scaled_add(dt / 6.0, &sum);
    Ok(u)
}
