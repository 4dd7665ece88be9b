use crate::{
    common::{AttackOutcome, LocationError},
    config::FleetComposition,
    game::GameControl,
    grid::{Cell, Grid},
    input::{ConsoleInputHandler, InputCommand, SHOW_OWN_ATTACKS},
    location::{parse_location, parse_orientation, AttackRecord},
    ship::{Deployment, ShipType},
};

use super::{BuildStatus, FleetBuilder, GoActioner, Player, Strategy};

const BAD_LOCATION: &str = "✗ That is not a grid location (try E4 or D10).\n\n";
const BAD_ORIENTATION: &str = "✗ That is not an orientation (use H or V).\n\n";
const OFF_GRID: &str = "✗ The ship does not fit inside the battle area there.\n\n";
const COLLISION: &str = "✗ The ship would ram one already deployed there.\n\n";

/// Asks the player for every ship's location and orientation, re-prompting
/// until each placement is on the grid and clear of other ships.
#[derive(Debug, Default, Clone, Copy)]
pub struct HumanFleetBuilder;

impl HumanFleetBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Prompt until a valid deployment is entered. `None` means the player
    /// asked to quit.
    async fn request_deployment(
        grid: &Grid,
        player: &mut Player,
        ship_type: ShipType,
        ordinal: usize,
    ) -> anyhow::Result<Option<Deployment>> {
        loop {
            player.say(&format!(
                "Where shall we deploy {} {} ({} cells)? Enter a grid location, then H or V.\n",
                ship_type,
                ordinal,
                ship_type.size()
            ));
            player.say("(enter X or x to quit the game)\n");

            player.say("Grid location: ");
            let location = match player.next_command().await? {
                InputCommand::Location(data) => parse_location(&data),
                InputCommand::Quit => return Ok(None),
                _ => {
                    player.say(BAD_LOCATION);
                    continue;
                }
            };
            let location = match location {
                Ok(cell) => cell,
                Err(LocationError::RowOutOfRange(_)) => {
                    player.say(OFF_GRID);
                    continue;
                }
                Err(_) => {
                    player.say(BAD_LOCATION);
                    continue;
                }
            };

            player.say("Orientation: ");
            let orientation = match player.next_command().await? {
                InputCommand::Orientation(data) => parse_orientation(&data),
                InputCommand::Quit => return Ok(None),
                _ => {
                    player.say(BAD_ORIENTATION);
                    continue;
                }
            };
            let Ok(orientation) = orientation else {
                player.say(BAD_ORIENTATION);
                continue;
            };

            let deployment = Deployment::new(location, orientation);
            let bounds = deployment.bounds(ship_type);
            if !grid.fits(&bounds) {
                player.say(OFF_GRID);
                continue;
            }
            if player.fleet().does_ship_bounds_clash(&bounds) {
                player.say(COLLISION);
                continue;
            }

            player.say(&format!("✓ {} {} deployed.\n\n", ship_type, ordinal));
            return Ok(Some(deployment));
        }
    }
}

#[async_trait::async_trait]
impl FleetBuilder for HumanFleetBuilder {
    async fn build(
        &self,
        grid: &Grid,
        player: &mut Player,
        composition: &FleetComposition,
    ) -> anyhow::Result<BuildStatus> {
        player.say("Captain, where shall we deploy the fleet?\n\n");
        for (ship_type, count) in composition.iter() {
            for ordinal in 1..=count {
                let Some(d) = Self::request_deployment(grid, player, ship_type, ordinal).await? else {
                    log::info!("fleet deployment abandoned at {} {}", ship_type, ordinal);
                    return Ok(BuildStatus::Quit);
                };
                log::debug!("deployed {} at {} {}", ship_type, d.location, d.orientation);
                player.add_ship_to_fleet(ship_type, d.location, d.orientation);
            }
        }
        player.say("Radar reports the enemy fleet in range!\n\n");
        Ok(BuildStatus::Complete)
    }
}

/// Command loop for one human turn. Help and attack listings do not use up
/// the turn; a valid attack or a quit ends it.
#[derive(Debug, Default, Clone, Copy)]
pub struct HumanGoActioner;

impl HumanGoActioner {
    pub fn new() -> Self {
        Self
    }

    fn show_help(player: &Player, grid: &Grid) {
        let last = Cell::new(grid.width() - 1, grid.height() - 1);
        player.say("  !         - Show our attacks on the enemy fleet\n");
        player.say("  *         - Show the enemy's attacks on our fleet\n");
        player.say("  X or x    - Quit the game\n");
        player.say("  ?         - Show this help\n");
        player.say(&format!("  A1 .. {}   - Grid location to attack (eg. A5, E10)\n\n", last));
    }

    fn show_attacks(player: &Player, attacks: &[AttackRecord], empty: &str, heading: &str) {
        if attacks.is_empty() {
            player.say(empty);
            return;
        }
        player.say(heading);
        let listing: Vec<String> = attacks.iter().map(AttackRecord::to_string).collect();
        player.say(&listing.join(" "));
        player.say("\n\n");
    }
}

#[async_trait::async_trait]
impl GoActioner for HumanGoActioner {
    async fn action(
        &self,
        control: &mut GameControl,
        player: &mut Player,
        enemy: &mut Player,
    ) -> anyhow::Result<()> {
        let grid = *control.grid();
        loop {
            player.say("Captain, what are your orders?\n");
            player.say("(enter ? for help): ");
            match player.next_command().await? {
                InputCommand::HelpRequest => Self::show_help(player, &grid),
                InputCommand::ShowAttacks(data) if data == SHOW_OWN_ATTACKS => Self::show_attacks(
                    player,
                    &player.attacks(),
                    "We have not attacked yet.\n\n",
                    "Our attacks so far:\n",
                ),
                InputCommand::ShowAttacks(_) => Self::show_attacks(
                    player,
                    &enemy.attacks(),
                    "We have not been attacked yet.\n\n",
                    "The enemy's attacks so far:\n",
                ),
                InputCommand::Location(data) => {
                    let cell = match parse_location(&data) {
                        Ok(cell) if grid.contains(cell) => cell,
                        Ok(_) | Err(LocationError::RowOutOfRange(_)) => {
                            player.say("✗ That location is out of range of our guns.\n\n");
                            continue;
                        }
                        Err(_) => {
                            player.say(BAD_LOCATION);
                            continue;
                        }
                    };
                    let report = match player.fire_at(enemy, cell) {
                        AttackOutcome::Hit(_) => "💥 Hit! We struck an enemy ship!\n\n",
                        AttackOutcome::Sunk(_) => "💥 Hit! We struck an enemy ship and it sank!\n\n",
                        AttackOutcome::Miss => "💧 Our attack missed.\n\n",
                    };
                    player.say(report);
                    return Ok(());
                }
                InputCommand::Quit => {
                    control.quit();
                    return Ok(());
                }
                InputCommand::None | InputCommand::Orientation(_) => {
                    player.say("✗ Invalid command, please repeat.\n");
                    player.say("(enter ? for help)\n\n");
                }
            }
        }
    }
}

impl Strategy {
    /// Human deployment and turns, reading commands from stdin.
    pub fn human() -> Self {
        Strategy::new(
            HumanFleetBuilder::new(),
            HumanGoActioner::new(),
            ConsoleInputHandler::stdin(),
        )
    }
}
