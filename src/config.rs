use std::collections::BTreeMap;

use crate::common::CompositionError;
use crate::grid::Grid;
use crate::ship::ShipType;

pub const GRID_WIDTH: usize = 10;
pub const GRID_HEIGHT: usize = 10;
pub const NUMBER_OF_DESTROYERS: usize = 2;
pub const NUMBER_OF_BATTLESHIPS: usize = 1;

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "BATTLESHIPS_LOG";

/// How many ships of each type one side deploys. Types are deployed in
/// `ShipType` order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FleetComposition {
    counts: BTreeMap<ShipType, usize>,
}

impl FleetComposition {
    /// Composition with no ships.
    pub fn new() -> Self {
        Self::default()
    }

    /// Two destroyers and a battleship.
    pub fn standard() -> Self {
        Self::new()
            .with(ShipType::Destroyer, NUMBER_OF_DESTROYERS)
            .with(ShipType::Battleship, NUMBER_OF_BATTLESHIPS)
    }

    /// Set the number of `ship_type` ships, replacing any earlier count.
    pub fn with(mut self, ship_type: ShipType, count: usize) -> Self {
        self.counts.insert(ship_type, count);
        self
    }

    pub fn count(&self, ship_type: ShipType) -> usize {
        self.counts.get(&ship_type).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShipType, usize)> + '_ {
        self.counts.iter().map(|(t, n)| (*t, *n))
    }

    pub fn total_ships(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of grid cells the whole composition occupies.
    pub fn total_cells(&self) -> usize {
        self.iter().map(|(t, n)| t.size() * n).sum()
    }

    /// Reject compositions that can never be deployed on `grid`: a ship
    /// longer than both sides, or more ship cells than the grid holds.
    pub fn check_fits(&self, grid: &Grid) -> Result<(), CompositionError> {
        let (width, height) = (grid.width(), grid.height());
        if let Some((ship_type, _)) = self
            .iter()
            .find(|(t, n)| *n > 0 && t.size() > width && t.size() > height)
        {
            return Err(CompositionError::ShipTooLong { ship_type, width, height });
        }
        let (cells, area) = (self.total_cells(), width * height);
        if cells > area {
            return Err(CompositionError::TooManyCells {
                ships: self.total_ships(),
                cells,
                area,
            });
        }
        Ok(())
    }
}
