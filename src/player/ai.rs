use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tokio::sync::Mutex;

use crate::{
    common::AttackOutcome,
    config::FleetComposition,
    fleet::Fleet,
    game::GameControl,
    grid::{Cell, Grid},
    input::{AiRandomInputHandler, InputCommand},
    location::parse_location,
    ship::{Deployment, Orientation, ShipType},
};

use super::{BuildStatus, FleetBuilder, GoActioner, Player, Strategy};

/// Deploys ships by rejection sampling: pick a random orientation and an
/// in-bounds origin for it, and try again on collision. Compositions that
/// can never fit the grid are rejected up front.
pub struct AiRandomFleetBuilder {
    rng: Mutex<SmallRng>,
}

impl AiRandomFleetBuilder {
    pub fn new(rng: SmallRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn random_deployment(
        rng: &mut SmallRng,
        grid: &Grid,
        fleet: &Fleet,
        ship_type: ShipType,
    ) -> Deployment {
        let size = ship_type.size();
        let mut attempts = 0u64;
        loop {
            attempts += 1;
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_col, max_row) = match orientation {
                Orientation::Horizontal => (grid.width().checked_sub(size), Some(grid.height() - 1)),
                Orientation::Vertical => (Some(grid.width() - 1), grid.height().checked_sub(size)),
            };
            // ship too long for this axis
            let (Some(max_col), Some(max_row)) = (max_col, max_row) else {
                continue;
            };
            let location = Cell::new(rng.random_range(0..=max_col), rng.random_range(0..=max_row));
            let deployment = Deployment::new(location, orientation);
            if !fleet.does_ship_bounds_clash(&deployment.bounds(ship_type)) {
                log::trace!("{} placed after {} attempt(s)", ship_type, attempts);
                return deployment;
            }
            log::trace!("{} at {} {} clashes, resampling", ship_type, location, orientation);
        }
    }
}

#[async_trait::async_trait]
impl FleetBuilder for AiRandomFleetBuilder {
    async fn build(
        &self,
        grid: &Grid,
        player: &mut Player,
        composition: &FleetComposition,
    ) -> anyhow::Result<BuildStatus> {
        composition.check_fits(grid)?;
        let mut rng = self.rng.lock().await;
        for (ship_type, count) in composition.iter() {
            for _ in 0..count {
                let d = Self::random_deployment(&mut rng, grid, player.fleet(), ship_type);
                log::debug!("AI deployed {} at {} {}", ship_type, d.location, d.orientation);
                player.add_ship_to_fleet(ship_type, d.location, d.orientation);
            }
        }
        Ok(BuildStatus::Complete)
    }
}

/// Attacks whatever cell the player's input handler names. No memory of
/// earlier attacks, so the same cell may be attacked again.
#[derive(Debug, Default, Clone, Copy)]
pub struct AiGoActioner;

impl AiGoActioner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl GoActioner for AiGoActioner {
    async fn action(
        &self,
        control: &mut GameControl,
        player: &mut Player,
        enemy: &mut Player,
    ) -> anyhow::Result<()> {
        let data = match player.next_command().await? {
            InputCommand::Location(data) => data,
            InputCommand::Quit => {
                control.quit();
                return Ok(());
            }
            other => anyhow::bail!("AI input produced {:?} instead of a grid location", other),
        };
        let cell = parse_location(&data)?;
        let report = match player.fire_at(enemy, cell) {
            AttackOutcome::Hit(ship) => format!("AI fires at {} and hits a {}!\n\n", data, ship),
            AttackOutcome::Sunk(ship) => {
                format!("AI fires at {} and sinks a {}!\n\n", data, ship)
            }
            AttackOutcome::Miss => format!("AI fires at {} and misses.\n\n", data),
        };
        player.say(&report);
        Ok(())
    }
}

impl Strategy {
    /// Random deployment and random targeting, seeded from `rng`.
    pub fn ai(grid: Grid, rng: &mut SmallRng) -> Self {
        Strategy::new(
            AiRandomFleetBuilder::new(SmallRng::from_rng(&mut *rng)),
            AiGoActioner::new(),
            AiRandomInputHandler::new(SmallRng::from_rng(&mut *rng), grid),
        )
    }
}
