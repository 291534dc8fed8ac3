//! End-to-end driver example.
//!
//! Demonstrates: install a tracing subscriber → build and tag a grid →
//! pick a scheme → choose dt from the CFL bound → integrate a field
//! defined on cell centers → compare against the exact decay.
//!
//! Set `GRIDSTEP_DEBUG` to any value to also see per-step debug events.

use gridstep_core::{BoundaryType, Method, Side};
use gridstep_mesh::create_grid;
use gridstep_stepper::TimeStepper;
use ndarray::{arr1, Array1};
use tracing_subscriber::filter::LevelFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let level = if std::env::var_os("GRIDSTEP_DEBUG").is_some() {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    println!("=== gridstep decay driver ===\n");

    // --- Grid ---
    let mut grid = create_grid(32, 32, 1.0, 1.0)?;
    grid.set_boundary(Side::Left, BoundaryType::Inlet);
    grid.set_boundary_named("right", BoundaryType::Outlet)?;
    let (xc, yc) = grid.cell_centers();
    println!(
        "grid {}x{} nodes, {}x{} cells, dx={:.4}",
        grid.nx(),
        grid.ny(),
        xc.ncols(),
        yc.nrows(),
        grid.dx()
    );
    for (tag, count) in grid.tag_counts() {
        println!("  {tag:<8} {count}");
    }

    // --- Scalar ODE: du/dt = -u on [0, 1] ---
    println!("\nScalar decay, dt = 0.1, t_end = 1.0");
    let rhs = |u: &Array1<f64>| -u;
    for method in Method::ALL {
        let stepper = TimeStepper::new(method, 0.5)?;
        let out = stepper.integrate(arr1(&[1.0]), 1.0, 0.1, rhs)?;
        let exact = (-out.time).exp();
        println!(
            "  {method:<5} steps={:>2} u={:.8} exact={:.8} err={:.2e}",
            out.steps,
            out.state[0],
            exact,
            (out.state[0] - exact).abs()
        );
    }

    // --- Field ODE on cell centers, dt from the CFL bound ---
    let stepper = TimeStepper::from_name("rk4", 0.5)?;
    let dt = stepper.compute_time_step(grid.dx(), 2.0)?;
    let u0 = xc.mapv(|x| (std::f64::consts::PI * x).sin()) * &yc;
    let peak0 = u0.iter().cloned().fold(0.0, f64::max);
    let out = stepper.integrate(u0, 0.5, dt, |u: &ndarray::Array2<f64>| u * -2.0)?;
    let peak = out.state.iter().cloned().fold(0.0, f64::max);
    println!(
        "\nField decay with CFL dt={dt:.5}: {} steps, peak {:.6} -> {:.6} (exact {:.6})",
        out.steps,
        peak0,
        peak,
        peak0 * (-2.0 * out.time).exp()
    );

    Ok(())
}
