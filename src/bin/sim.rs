use std::sync::Arc;

use battleships::{
    init_logging, CapturedOutput, FleetComposition, Game, Grid, Lineup, OutputHandler, PlayerId,
    Strategy, GRID_HEIGHT, GRID_WIDTH,
};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);
    let grid = Grid::new(GRID_WIDTH, GRID_HEIGHT).map_err(|e| anyhow::anyhow!(e))?;

    let output: Arc<dyn OutputHandler> = Arc::new(CapturedOutput::new());
    let lineups = [
        Lineup::new(Strategy::ai(grid, &mut rng1), FleetComposition::standard()),
        Lineup::new(Strategy::ai(grid, &mut rng2), FleetComposition::standard()),
    ];
    let mut game = Game::new(grid, output, lineups);
    let outcome = game.run().await?;

    let attacks = |id: PlayerId| game.player(id).map(|p| p.attacks().len()).unwrap_or(0);
    let result = json!({
        "outcome": outcome,
        "player1": {"attacks": attacks(PlayerId::One)},
        "player2": {"attacks": attacks(PlayerId::Two)},
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
