//! Boundary-condition tags and the sides of a rectangular domain.

use crate::error::InvalidSideError;
use std::fmt;
use std::str::FromStr;

/// Boundary condition attached to a grid node.
///
/// `Internal` marks non-boundary nodes and is the default tag. The
/// other three variants are assignable to any of the four domain sides.
///
/// # Examples
///
/// ```
/// use gridstep_core::BoundaryType;
///
/// assert_eq!(BoundaryType::default(), BoundaryType::Internal);
/// assert_eq!(BoundaryType::Inlet.code(), 2);
/// assert!(!BoundaryType::Wall.is_internal());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundaryType {
    /// Not on a boundary.
    #[default]
    Internal,
    /// Solid no-through-flow wall.
    Wall,
    /// Inflow boundary.
    Inlet,
    /// Outflow boundary.
    Outlet,
}

impl BoundaryType {
    /// All tags in code order.
    pub const ALL: [BoundaryType; 4] = [Self::Internal, Self::Wall, Self::Inlet, Self::Outlet];

    /// Tags a caller may assign to a domain side (legend entries for a renderer).
    pub const ASSIGNABLE: [BoundaryType; 3] = [Self::Wall, Self::Inlet, Self::Outlet];

    /// Stable integer code, suitable for colour-mapping a tag array.
    pub fn code(self) -> u8 {
        match self {
            Self::Internal => 0,
            Self::Wall => 1,
            Self::Inlet => 2,
            Self::Outlet => 3,
        }
    }

    /// Upper-case display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Internal => "INTERNAL",
            Self::Wall => "WALL",
            Self::Inlet => "INLET",
            Self::Outlet => "OUTLET",
        }
    }

    /// Whether this is the non-boundary tag.
    pub fn is_internal(self) -> bool {
        self == Self::Internal
    }
}

impl fmt::Display for BoundaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One of the four sides of a rectangular domain.
///
/// In grid index space `left` is the first column, `right` the last
/// column, `bottom` the first row and `top` the last row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// First column (`x = 0`).
    Left,
    /// Last column (`x = lx`).
    Right,
    /// Last row (`y = ly`).
    Top,
    /// First row (`y = 0`).
    Bottom,
}

impl Side {
    /// All sides.
    pub const ALL: [Side; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Lower-case name as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Side {
    type Err = InvalidSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            other => Err(InvalidSideError {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct_and_ordered() {
        let codes: Vec<u8> = BoundaryType::ALL.iter().map(|b| b.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3]);
    }

    #[test]
    fn assignable_excludes_internal() {
        assert!(BoundaryType::ASSIGNABLE.iter().all(|b| !b.is_internal()));
    }

    #[test]
    fn side_parses_known_names() {
        for side in Side::ALL {
            assert_eq!(side.name().parse::<Side>(), Ok(side));
        }
    }

    #[test]
    fn side_rejects_unknown_and_miscased_names() {
        assert_eq!(
            "bogus".parse::<Side>(),
            Err(InvalidSideError {
                name: "bogus".into()
            })
        );
        assert!("Left".parse::<Side>().is_err());
        assert!("".parse::<Side>().is_err());
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(BoundaryType::Outlet.to_string(), "OUTLET");
        assert_eq!(Side::Bottom.to_string(), "bottom");
    }
}
