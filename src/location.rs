//! Text encodings of grid locations, orientations and attack records.
//!
//! A location is one capital letter for the column (`A` = 0) followed by a one
//! or two digit row number counted from 1, e.g. `E10` is column 4, row 9.

use core::fmt;
use std::string::String;

use serde::Serialize;

use crate::common::LocationError;
use crate::grid::{Cell, MAX_COLUMNS};
use crate::ship::Orientation;

/// Check the shape of a location string without checking it against a grid.
/// Two digit rows may not start with `0`, so every accepted string is the
/// one `stringify_location` writes back.
pub fn is_location(input: &str) -> bool {
    let bytes = input.as_bytes();
    matches!(bytes.len(), 2 | 3)
        && bytes[0].is_ascii_uppercase()
        && bytes[1..].iter().all(u8::is_ascii_digit)
        && !(bytes.len() == 3 && bytes[1] == b'0')
}

/// Parse a location string such as `A1` or `E10` into a zero-indexed cell.
pub fn parse_location(input: &str) -> Result<Cell, LocationError> {
    if !is_location(input) {
        return Err(LocationError::Malformed(input.to_string()));
    }
    let column = (input.as_bytes()[0] - b'A') as usize;
    let row: usize = input[1..]
        .parse()
        .map_err(|_| LocationError::Malformed(input.to_string()))?;
    if row == 0 {
        return Err(LocationError::RowOutOfRange(input.to_string()));
    }
    Ok(Cell::new(column, row - 1))
}

/// Render a cell as a location string. Fails for columns beyond `Z`.
pub fn stringify_location(cell: Cell) -> Result<String, LocationError> {
    if cell.column >= MAX_COLUMNS {
        return Err(LocationError::ColumnOutOfRange(cell.column));
    }
    Ok(format!("{}{}", (b'A' + cell.column as u8) as char, cell.row + 1))
}

/// Check that `input` is a single `h`, `H`, `v` or `V`.
pub fn is_orientation(input: &str) -> bool {
    input.parse::<Orientation>().is_ok()
}

pub fn parse_orientation(input: &str) -> Result<Orientation, LocationError> {
    input.parse()
}

/// One entry of a player's attack audit log, written as `<location><marker>`
/// where the marker is `*` for a hit and `_` for a miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttackRecord {
    pub location: Cell,
    pub hit: bool,
}

impl AttackRecord {
    pub fn new(location: Cell, hit: bool) -> Self {
        Self { location, hit }
    }
}

impl fmt::Display for AttackRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.hit { '*' } else { '_' };
        write!(f, "{}{}", self.location, marker)
    }
}
