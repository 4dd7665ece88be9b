use std::sync::Arc;

use battleships::{
    init_logging, ConsoleOutputHandler, FleetComposition, Game, Grid, Lineup, OutputHandler,
    ShipType, Strategy, GRID_HEIGHT, GRID_WIDTH, NUMBER_OF_BATTLESHIPS, NUMBER_OF_DESTROYERS,
};
use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PlayerType {
    Human,
    Ai,
}

#[derive(Parser)]
#[command(author, version, about = "Battleships against the computer", long_about = None)]
struct Cli {
    /// Who commands fleet One (moves first).
    #[arg(long, value_enum, default_value_t = PlayerType::Human)]
    player_one: PlayerType,
    /// Who commands fleet Two.
    #[arg(long, value_enum, default_value_t = PlayerType::Ai)]
    player_two: PlayerType,
    #[arg(long, help = "Fix RNG seed for reproducible AI play (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = GRID_WIDTH)]
    width: usize,
    #[arg(long, default_value_t = GRID_HEIGHT)]
    height: usize,
    #[arg(long, default_value_t = NUMBER_OF_DESTROYERS)]
    destroyers: usize,
    #[arg(long, default_value_t = NUMBER_OF_BATTLESHIPS)]
    battleships: usize,
}

fn strategy(player: PlayerType, grid: Grid, rng: &mut SmallRng) -> Strategy {
    match player {
        PlayerType::Human => Strategy::human(),
        PlayerType::Ai => Strategy::ai(grid, rng),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let grid = Grid::new(cli.width, cli.height).map_err(|e| anyhow::anyhow!(e))?;
    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (AI play will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let fleet = FleetComposition::new()
        .with(ShipType::Destroyer, cli.destroyers)
        .with(ShipType::Battleship, cli.battleships);
    fleet.check_fits(&grid)?;
    let output: Arc<dyn OutputHandler> = Arc::new(ConsoleOutputHandler);
    let lineups = [
        Lineup::new(strategy(cli.player_one, grid, &mut rng), fleet.clone()),
        Lineup::new(strategy(cli.player_two, grid, &mut rng), fleet),
    ];

    let mut game = Game::new(grid, output, lineups);
    let outcome = game.run().await?;
    log::info!("final outcome: {:?}", outcome);
    Ok(())
}
