//! Players and the strategy traits that drive them
//!
//! A [`Player`] owns a fleet and an attack log and is driven by four
//! independently pluggable behaviours:
//! - [`FleetBuilder`]: deploys the fleet before play begins
//! - [`GoActioner`]: decides and executes one turn
//! - [`InputHandler`]: supplies commands
//! - [`OutputHandler`]: receives messages
//!
//! Human and AI variants of the builder and actioner live in [`human`] and
//! [`ai`]. The game engine only ever sees the traits.

use core::fmt;
use std::sync::Arc;

use crate::common::AttackOutcome;
use crate::config::FleetComposition;
use crate::fleet::Fleet;
use crate::game::GameControl;
use crate::grid::{Cell, Grid};
use crate::input::{InputCommand, InputHandler};
use crate::location::AttackRecord;
use crate::output::OutputHandler;
use crate::ship::{Orientation, Ship, ShipType};

/// Whether a fleet build deployed every requested ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStatus {
    Complete,
    /// The player asked to quit part way through deployment.
    Quit,
}

/// Populates a player's fleet before play begins.
#[async_trait::async_trait]
pub trait FleetBuilder: Send + Sync {
    /// Deploy `composition` onto `player`'s fleet inside `grid`. Every
    /// placement is in bounds and clear of ships already deployed.
    async fn build(
        &self,
        grid: &Grid,
        player: &mut Player,
        composition: &FleetComposition,
    ) -> anyhow::Result<BuildStatus>;
}

/// Takes one player's turn against the opposing player.
#[async_trait::async_trait]
pub trait GoActioner: Send + Sync {
    /// Either attack `enemy` once or call [`GameControl::quit`].
    async fn action(
        &self,
        control: &mut GameControl,
        player: &mut Player,
        enemy: &mut Player,
    ) -> anyhow::Result<()>;
}

/// The behaviours one side of the game is built from.
pub struct Strategy {
    pub fleet_builder: Arc<dyn FleetBuilder>,
    pub go_actioner: Arc<dyn GoActioner>,
    pub input: Box<dyn InputHandler>,
}

impl Strategy {
    pub fn new(
        fleet_builder: impl FleetBuilder + 'static,
        go_actioner: impl GoActioner + 'static,
        input: impl InputHandler + 'static,
    ) -> Self {
        Self {
            fleet_builder: Arc::new(fleet_builder),
            go_actioner: Arc::new(go_actioner),
            input: Box::new(input),
        }
    }
}

/// One side of the game.
pub struct Player {
    fleet: Fleet,
    fleet_builder: Arc<dyn FleetBuilder>,
    go_actioner: Arc<dyn GoActioner>,
    input: Box<dyn InputHandler>,
    output: Arc<dyn OutputHandler>,
    attacks: Vec<AttackRecord>,
}

impl Player {
    /// Create a player with an empty fleet and no attacks.
    pub fn new(strategy: Strategy, output: Arc<dyn OutputHandler>) -> Self {
        Self {
            fleet: Fleet::new(),
            fleet_builder: strategy.fleet_builder,
            go_actioner: strategy.go_actioner,
            input: strategy.input,
            output,
            attacks: Vec::new(),
        }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn fleet_builder(&self) -> Arc<dyn FleetBuilder> {
        Arc::clone(&self.fleet_builder)
    }

    pub fn go_actioner(&self) -> Arc<dyn GoActioner> {
        Arc::clone(&self.go_actioner)
    }

    /// Wait for the next command from this player's input handler.
    pub async fn next_command(&mut self) -> anyhow::Result<InputCommand> {
        self.input.get_input().await
    }

    /// Send a message through this player's output handler.
    pub fn say(&self, text: &str) {
        self.output.message(text);
    }

    pub fn add_ship_to_fleet(&mut self, ship_type: ShipType, location: Cell, orientation: Orientation) {
        self.fleet
            .add_ship(Some(Ship::new(ship_type, location, orientation)));
    }

    pub fn add_attack(&mut self, record: AttackRecord) {
        self.attacks.push(record);
    }

    /// Copy of the attack log, oldest first.
    pub fn attacks(&self) -> Vec<AttackRecord> {
        self.attacks.clone()
    }

    pub fn is_fleet_sunk(&self) -> bool {
        self.fleet.are_all_ships_sunk()
    }

    /// Attack `cell` on `enemy`'s fleet and log the attack.
    pub fn fire_at(&mut self, enemy: &mut Player, cell: Cell) -> AttackOutcome {
        let outcome = match enemy.fleet.check_for_and_record_any_hit(cell) {
            Some(ship) if ship.is_sunk() => AttackOutcome::Sunk(ship.ship_type()),
            Some(ship) => AttackOutcome::Hit(ship.ship_type()),
            None => AttackOutcome::Miss,
        };
        self.add_attack(AttackRecord::new(cell, outcome.is_hit()));
        log::debug!("attack at {} -> {:?}", cell, outcome);
        outcome
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("fleet", &self.fleet)
            .field("attacks", &self.attacks)
            .finish_non_exhaustive()
    }
}

pub mod ai;
pub use ai::{AiGoActioner, AiRandomFleetBuilder};

pub mod human;
pub use human::{HumanFleetBuilder, HumanGoActioner};
