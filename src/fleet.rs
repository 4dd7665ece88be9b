//! A player's fleet: deployed ships plus collision and hit detection.

use core::fmt;

use crate::grid::{Bounds, Cell};
use crate::ship::Ship;

/// Ships in deployment order. Ships are never removed, even once sunk.
#[derive(Clone, Default)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Create an empty fleet.
    pub fn new() -> Self {
        Self { ships: Vec::new() }
    }

    /// Create a fleet already holding `ships`.
    pub fn from_ships(ships: impl IntoIterator<Item = Ship>) -> Self {
        Self {
            ships: ships.into_iter().collect(),
        }
    }

    /// Immutable view of the ships.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Append a ship. `None` is ignored.
    pub fn add_ship(&mut self, ship: Option<Ship>) {
        if let Some(ship) = ship {
            self.ships.push(ship);
        }
    }

    /// Returns `true` when `bounds` shares at least one cell with a deployed
    /// ship. Callers check this before every `add_ship` during deployment.
    pub fn does_ship_bounds_clash(&self, bounds: &Bounds) -> bool {
        self.ships.iter().any(|s| bounds.intersects(&s.bounds()))
    }

    /// Record an attack on `cell` against the first ship still afloat that
    /// covers it, returning that ship. Sunk ships are skipped.
    pub fn check_for_and_record_any_hit(&mut self, cell: Cell) -> Option<&Ship> {
        let ship = self
            .ships
            .iter_mut()
            .find(|s| !s.is_sunk() && s.bounds().contains(cell))?;
        let offset = ship.offset_of(cell);
        ship.record_hit(offset);
        Some(&*ship)
    }

    /// Returns `true` when every ship is sunk, including when there are none.
    pub fn are_all_ships_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk())
    }
}

impl fmt::Debug for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ships.iter()).finish()
    }
}
