//! Explicit time integration for gridstep simulations.
//!
//! A [`TimeStepper`] is a stateless strategy: a [`Method`] and a CFL
//! factor fixed at construction. [`TimeStepper::step`] advances any
//! owned `ndarray` state by one step of the chosen scheme given a
//! caller-supplied right-hand side; [`TimeStepper::compute_time_step`]
//! offers an advisory CFL bound. States are passed in and returned,
//! never retained, so one stepper can drive any number of independent
//! states, from any number of threads.
//!
//! The right-hand side must be a pure function of its input; the
//! stepper performs no shape checks on what it returns.
//!
//! [`Method`]: gridstep_core::Method

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cfl;
pub mod scheme;
pub mod stepper;

pub use cfl::{cfl_time_step, MIN_SPEED};
pub use scheme::{forward_euler, runge_kutta_2, runge_kutta_4};
pub use stepper::{Integration, TimeStepper};
