#![allow(dead_code)]

use std::sync::Arc;

use battleships::{
    AiGoActioner, BuildStatus, CapturedOutput, Cell, FleetBuilder, FleetComposition, Grid,
    HumanFleetBuilder, HumanGoActioner, InputCommand, Orientation, OutputHandler, Player,
    ScriptedInputHandler, ShipType, Strategy,
};

/// Deploys a fixed list of ships, ignoring the requested composition.
pub struct PresetFleetBuilder {
    ships: Vec<(ShipType, Cell, Orientation)>,
}

impl PresetFleetBuilder {
    pub fn new(ships: Vec<(ShipType, Cell, Orientation)>) -> Self {
        Self { ships }
    }
}

#[async_trait::async_trait]
impl FleetBuilder for PresetFleetBuilder {
    async fn build(
        &self,
        _grid: &Grid,
        player: &mut Player,
        _composition: &FleetComposition,
    ) -> anyhow::Result<BuildStatus> {
        for &(ship_type, location, orientation) in &self.ships {
            player.add_ship_to_fleet(ship_type, location, orientation);
        }
        Ok(BuildStatus::Complete)
    }
}

pub fn grid() -> Grid {
    Grid::new(10, 10).unwrap()
}

pub fn capture() -> (Arc<CapturedOutput>, Arc<dyn OutputHandler>) {
    let captured = Arc::new(CapturedOutput::new());
    let output: Arc<dyn OutputHandler> = captured.clone();
    (captured, output)
}

/// Player driven by scripted lines, with human builder and actioner.
pub fn human_player(lines: &[&str], output: Arc<dyn OutputHandler>) -> Player {
    let strategy = Strategy::new(
        HumanFleetBuilder::new(),
        HumanGoActioner::new(),
        ScriptedInputHandler::from_lines(lines.iter().copied()),
    );
    Player::new(strategy, output)
}

/// Player with preset ships that fires at scripted cells like the AI does.
pub fn preset_player(
    ships: Vec<(ShipType, Cell, Orientation)>,
    targets: &[&str],
    output: Arc<dyn OutputHandler>,
) -> Player {
    Player::new(preset_strategy(ships, targets), output)
}

pub fn preset_strategy(ships: Vec<(ShipType, Cell, Orientation)>, targets: &[&str]) -> Strategy {
    Strategy::new(
        PresetFleetBuilder::new(ships),
        AiGoActioner::new(),
        ScriptedInputHandler::new(
            targets
                .iter()
                .map(|t| InputCommand::Location(t.to_string())),
        ),
    )
}

/// Strategy with preset ships whose turns come from typed human commands.
pub fn preset_human_strategy(ships: Vec<(ShipType, Cell, Orientation)>, lines: &[&str]) -> Strategy {
    Strategy::new(
        PresetFleetBuilder::new(ships),
        HumanGoActioner::new(),
        ScriptedInputHandler::from_lines(lines.iter().copied()),
    )
}
