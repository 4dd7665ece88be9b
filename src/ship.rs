//! Ship definitions with damage tracked in a fixed-width `Condition` mask.

use core::fmt;
use core::str::FromStr;

use serde::Serialize;

use crate::common::LocationError;
use crate::condition::Condition;
use crate::grid::{Bounds, Cell};

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    /// Extends along increasing columns.
    Horizontal,
    /// Extends along increasing rows.
    Vertical,
}

impl FromStr for Orientation {
    type Err = LocationError;

    /// Single letter, case-insensitive: `H` or `V`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h" | "H" => Ok(Orientation::Horizontal),
            "v" | "V" => Ok(Orientation::Vertical),
            _ => Err(LocationError::InvalidOrientation(s.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "H"),
            Orientation::Vertical => write!(f, "V"),
        }
    }
}

/// Size class of a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ShipType {
    Destroyer,
    Battleship,
}

impl ShipType {
    /// Number of cells the ship occupies.
    pub const fn size(&self) -> usize {
        match self {
            ShipType::Destroyer => 4,
            ShipType::Battleship => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShipType::Destroyer => "Destroyer",
            ShipType::Battleship => "Battleship",
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rectangle covered by a ship of `size` cells at `location`.
pub fn ship_bounds(location: Cell, size: usize, orientation: Orientation) -> Bounds {
    match orientation {
        Orientation::Horizontal => Bounds::new(location, size, 1),
        Orientation::Vertical => Bounds::new(location, 1, size),
    }
}

/// A deployed ship. Type, location and orientation never change once
/// deployed; only the condition mask loses bits as hits land.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    location: Cell,
    orientation: Orientation,
    condition: Condition<u8>,
}

impl Ship {
    /// Deploy a ship with every cell intact.
    pub fn new(ship_type: ShipType, location: Cell, orientation: Orientation) -> Self {
        Ship {
            ship_type,
            location,
            orientation,
            condition: Condition::intact(ship_type.size()),
        }
    }

    /// Clear the damage bit for the cell `offset` steps from the origin.
    /// Offsets wrap modulo the ship size and repeated hits have no effect.
    pub fn record_hit(&mut self, offset: usize) {
        self.condition.clear(offset);
    }

    /// Offset of `cell` along the ship's axis. Only meaningful for cells
    /// inside [`Ship::bounds`].
    pub fn offset_of(&self, cell: Cell) -> usize {
        match self.orientation {
            Orientation::Horizontal => cell.column.saturating_sub(self.location.column),
            Orientation::Vertical => cell.row.saturating_sub(self.location.row),
        }
    }

    /// Check if the ship is sunk (every cell damaged).
    pub fn is_sunk(&self) -> bool {
        self.condition.is_zero()
    }

    pub fn bounds(&self) -> Bounds {
        ship_bounds(self.location, self.size(), self.orientation)
    }

    pub fn size(&self) -> usize {
        self.ship_type.size()
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn location(&self) -> Cell {
        self.location
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Raw damage mask; bit `i` set means cell `i` is intact.
    pub fn condition(&self) -> u8 {
        self.condition.bits()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ type: {}, location: {}, orientation: {:?}, condition: {:?} }}",
            self.ship_type, self.location, self.orientation, self.condition,
        )
    }
}

/// Where and which way a ship is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployment {
    pub location: Cell,
    pub orientation: Orientation,
}

impl Deployment {
    pub fn new(location: Cell, orientation: Orientation) -> Self {
        Self {
            location,
            orientation,
        }
    }

    /// Rectangle a ship of `ship_type` would cover with this deployment.
    pub fn bounds(&self, ship_type: ShipType) -> Bounds {
        ship_bounds(self.location, ship_type.size(), self.orientation)
    }
}
