//! Explicit time-integration schemes.

use crate::error::UnknownMethodError;
use std::fmt;
use std::str::FromStr;

/// An explicit Runge–Kutta family member.
///
/// Resolved once when a stepper is built; dispatch on it is an
/// exhaustive `match`, never a per-step name comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Method {
    /// Forward Euler, first order, one stage.
    #[default]
    Euler,
    /// Heun's method, second order, two stages.
    Rk2,
    /// Classical fourth-order Runge–Kutta, four stages.
    Rk4,
}

impl Method {
    /// All supported schemes.
    pub const ALL: [Method; 3] = [Self::Euler, Self::Rk2, Self::Rk4];

    /// Lower-case name as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Euler => "euler",
            Self::Rk2 => "rk2",
            Self::Rk4 => "rk4",
        }
    }

    /// Formal order of accuracy.
    pub fn order(self) -> u32 {
        match self {
            Self::Euler => 1,
            Self::Rk2 => 2,
            Self::Rk4 => 4,
        }
    }

    /// Right-hand-side evaluations per step.
    pub fn stages(self) -> usize {
        match self {
            Self::Euler => 1,
            Self::Rk2 => 2,
            Self::Rk4 => 4,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Method {
    type Err = UnknownMethodError;

    /// # Examples
    ///
    /// ```
    /// use gridstep_core::Method;
    ///
    /// assert_eq!("rk4".parse::<Method>().unwrap(), Method::Rk4);
    /// assert!("rk3".parse::<Method>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "euler" => Ok(Self::Euler),
            "rk2" => Ok(Self::Rk2),
            "rk4" => Ok(Self::Rk4),
            other => Err(UnknownMethodError {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for m in Method::ALL {
            assert_eq!(m.name().parse::<Method>(), Ok(m));
        }
    }

    #[test]
    fn stages_match_order_for_these_schemes() {
        for m in Method::ALL {
            assert_eq!(m.stages(), m.order() as usize);
        }
    }

    #[test]
    fn unknown_name_is_reported_verbatim() {
        let err = "heun".parse::<Method>().unwrap_err();
        assert_eq!(err.name, "heun");
    }

    #[test]
    fn default_is_euler() {
        assert_eq!(Method::default(), Method::Euler);
    }
}
