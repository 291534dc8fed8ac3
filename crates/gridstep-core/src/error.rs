//! Error types for the gridstep kernel.
//!
//! Organized by the operation that can fail: grid construction
//! ([`ConfigError`]), boundary mutation ([`InvalidSideError`]), stepper
//! construction ([`StepperError`], [`UnknownMethodError`]) and per-call
//! stepping ([`StepError`]). Every error is reported to the immediate
//! caller; no operation is partially applied when it fails.

use std::error::Error;
use std::fmt;

/// Coordinate axis of a 2D grid, used to locate configuration errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x direction (`nx`, `lx`, columns).
    X,
    /// The y direction (`ny`, `ly`, rows).
    Y,
}

impl Axis {
    /// Name of the cell-count parameter for this axis.
    pub fn count_name(self) -> &'static str {
        match self {
            Self::X => "nx",
            Self::Y => "ny",
        }
    }

    /// Name of the extent parameter for this axis.
    pub fn extent_name(self) -> &'static str {
        match self {
            Self::X => "lx",
            Self::Y => "ly",
        }
    }
}

/// Errors detected while validating a grid configuration.
///
/// Construction is aborted before any grid storage is allocated.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Fewer than two nodes along an axis.
    TooFewCells {
        /// The offending axis.
        axis: Axis,
        /// The configured count.
        count: usize,
    },
    /// A domain extent is zero, negative, NaN or infinite.
    InvalidExtent {
        /// The offending axis.
        axis: Axis,
        /// The configured extent.
        value: f64,
    },
}

impl ConfigError {
    /// Human-readable reason for the rejection.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewCells { axis, count } => write!(
                f,
                "grid must have at least 2 cells in each direction, got {}={count}",
                axis.count_name()
            ),
            Self::InvalidExtent { axis, value } => write!(
                f,
                "domain dimensions must be finite and positive, got {}={value}",
                axis.extent_name()
            ),
        }
    }
}

impl Error for ConfigError {}

/// An unrecognised domain side name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidSideError {
    /// The name that failed to parse.
    pub name: String,
}

impl fmt::Display for InvalidSideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid side '{}': expected one of left, right, top, bottom",
            self.name
        )
    }
}

impl Error for InvalidSideError {}

/// An unrecognised time-integration scheme name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownMethodError {
    /// The name that failed to parse.
    pub name: String,
}

impl fmt::Display for UnknownMethodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown time-stepping method '{}': expected one of euler, rk2, rk4",
            self.name
        )
    }
}

impl Error for UnknownMethodError {}

/// Errors from constructing a time stepper.
#[derive(Clone, Debug, PartialEq)]
pub enum StepperError {
    /// The scheme name did not match a known method.
    UnknownMethod(UnknownMethodError),
    /// The CFL factor is zero, negative, NaN or infinite.
    InvalidCfl {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for StepperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMethod(e) => write!(f, "{e}"),
            Self::InvalidCfl { value } => {
                write!(f, "cfl must be finite and positive, got {value}")
            }
        }
    }
}

impl Error for StepperError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownMethod(e) => Some(e),
            Self::InvalidCfl { .. } => None,
        }
    }
}

impl From<UnknownMethodError> for StepperError {
    fn from(e: UnknownMethodError) -> Self {
        Self::UnknownMethod(e)
    }
}

/// Errors from a single step or time-step estimate.
#[derive(Clone, Debug, PartialEq)]
pub enum StepError {
    /// The requested `dt` is zero, negative, NaN or infinite.
    InvalidStep {
        /// The rejected step size.
        dt: f64,
    },
    /// The grid spacing passed to the CFL estimate is not finite and positive.
    InvalidSpacing {
        /// The rejected spacing.
        dx: f64,
    },
    /// The end time of an integration run is NaN or infinite.
    InvalidEndTime {
        /// The rejected end time.
        t_end: f64,
    },
    /// The CFL estimate divided by a zero or vanishing velocity, or
    /// otherwise produced a non-finite result.
    Division {
        /// Grid spacing used in the estimate.
        dx: f64,
        /// Maximum velocity used in the estimate.
        u_max: f64,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStep { dt } => {
                write!(f, "time step must be finite and positive, got dt={dt}")
            }
            Self::InvalidSpacing { dx } => {
                write!(f, "grid spacing must be finite and positive, got dx={dx}")
            }
            Self::InvalidEndTime { t_end } => {
                write!(f, "end time must be finite, got t_end={t_end}")
            }
            Self::Division { dx, u_max } => write!(
                f,
                "cfl time step is not finite for dx={dx}, u_max={u_max}"
            ),
        }
    }
}

impl Error for StepError {}
