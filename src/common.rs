//! Common types for Battleships: attack outcomes and the errors raised while
//! decoding locations or sizing the grid.

use std::string::String;

use serde::Serialize;

use crate::ship::ShipType;

/// Result of a single attack against an enemy fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttackOutcome {
    /// Attack found only water, or a ship that was already sunk.
    Miss,
    /// Attack damaged a ship that is still afloat.
    Hit(ShipType),
    /// Attack damaged a ship and this hit sank it.
    Sunk(ShipType),
}

impl AttackOutcome {
    /// Returns `true` for both `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, AttackOutcome::Miss)
    }
}

/// Errors returned while decoding or encoding grid locations and orientations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// Input is not a capital letter followed by one or two digits.
    Malformed(String),
    /// Input is well formed but its row number cannot map onto a grid row.
    RowOutOfRange(String),
    /// Column index has no letter in A-Z.
    ColumnOutOfRange(usize),
    /// Input is not one of `h`, `H`, `v` or `V`.
    InvalidOrientation(String),
}

impl core::fmt::Display for LocationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LocationError::Malformed(s) => write!(f, "Location '{}' is not a letter and number", s),
            LocationError::RowOutOfRange(s) => write!(f, "Location '{}' has no matching row", s),
            LocationError::ColumnOutOfRange(c) => {
                write!(f, "Column {} cannot be written as a letter A-Z", c)
            }
            LocationError::InvalidOrientation(s) => {
                write!(f, "Orientation '{}' is not valid, use H or V", s)
            }
        }
    }
}

impl std::error::Error for LocationError {}

/// Errors returned when sizing a game grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero.
    Empty,
    /// More columns than the letters A-Z can address.
    TooWide(usize),
    /// More rows than a two digit row number can address.
    TooTall(usize),
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::Empty => write!(f, "Grid must have at least one row and one column"),
            GridError::TooWide(w) => write!(f, "Grid width {} exceeds 26 columns", w),
            GridError::TooTall(h) => write!(f, "Grid height {} exceeds 99 rows", h),
        }
    }
}

impl std::error::Error for GridError {}

/// Errors returned when a fleet composition cannot be deployed on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionError {
    /// A ship type is longer than both grid dimensions.
    ShipTooLong { ship_type: ShipType, width: usize, height: usize },
    /// The ships together cover more cells than the grid has.
    TooManyCells { ships: usize, cells: usize, area: usize },
}

impl core::fmt::Display for CompositionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CompositionError::ShipTooLong { ship_type, width, height } => write!(
                f,
                "{} of {} cells cannot fit on a {}x{} grid",
                ship_type,
                ship_type.size(),
                width,
                height
            ),
            CompositionError::TooManyCells { ships, cells, area } => write!(
                f,
                "{} ships covering {} cells cannot fit on a grid of {} cells",
                ships, cells, area
            ),
        }
    }
}

impl std::error::Error for CompositionError {}
