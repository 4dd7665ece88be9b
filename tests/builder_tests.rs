mod support;

use battleships::{
    AiRandomFleetBuilder, BuildStatus, Cell, FleetBuilder, FleetComposition, Grid, Orientation,
    Player, ShipType, Strategy,
};
use rand::{rngs::SmallRng, SeedableRng};

use support::{capture, grid, human_player};

fn ai_player(grid: Grid, seed: u64) -> Player {
    let mut rng = SmallRng::seed_from_u64(seed);
    let (_, output) = capture();
    Player::new(Strategy::ai(grid, &mut rng), output)
}

fn assert_valid_fleet(grid: &Grid, player: &Player) {
    let ships = player.fleet().ships();
    for (i, ship) in ships.iter().enumerate() {
        assert!(grid.fits(&ship.bounds()), "{:?} off grid", ship);
        for other in &ships[i + 1..] {
            assert!(!ship.bounds().intersects(&other.bounds()), "{:?} overlaps {:?}", ship, other);
        }
    }
}

#[tokio::test]
async fn test_ai_builder_deploys_standard_fleet() {
    let grid = grid();
    for seed in 0..50 {
        let mut player = ai_player(grid, seed);
        let builder = AiRandomFleetBuilder::new(SmallRng::seed_from_u64(seed));
        let status = builder
            .build(&grid, &mut player, &FleetComposition::standard())
            .await
            .unwrap();
        assert_eq!(status, BuildStatus::Complete);
        assert_eq!(player.fleet().len(), 3);
        assert_valid_fleet(&grid, &player);
    }
}

#[tokio::test]
async fn test_ai_builder_uses_last_row_and_column() {
    // only one placement exists, in the far corner of a one-row grid
    let grid = Grid::new(5, 1).unwrap();
    let mut player = ai_player(grid, 3);
    let builder = AiRandomFleetBuilder::new(SmallRng::seed_from_u64(3));
    let composition = FleetComposition::new().with(ShipType::Battleship, 1);
    builder.build(&grid, &mut player, &composition).await.unwrap();

    let ship = &player.fleet().ships()[0];
    assert_eq!(ship.location(), Cell::new(0, 0));
    assert_eq!(ship.orientation(), Orientation::Horizontal);
    assert_eq!(ship.bounds().last(), Cell::new(4, 0));
}

#[tokio::test]
async fn test_ai_builder_fails_when_ship_cannot_fit() {
    let grid = Grid::new(3, 3).unwrap();
    let mut player = ai_player(grid, 1);
    let builder = AiRandomFleetBuilder::new(SmallRng::seed_from_u64(1));
    let composition = FleetComposition::new().with(ShipType::Destroyer, 1);
    assert!(builder.build(&grid, &mut player, &composition).await.is_err());
    assert!(player.fleet().is_empty());
}

#[tokio::test]
async fn test_ai_builder_rejects_overfull_composition() {
    let grid = grid();
    let mut player = ai_player(grid, 1);
    let builder = AiRandomFleetBuilder::new(SmallRng::seed_from_u64(1));
    let composition = FleetComposition::new().with(ShipType::Battleship, 21);
    let err = builder.build(&grid, &mut player, &composition).await.unwrap_err();
    assert!(err.to_string().contains("105 cells"));
    assert!(player.fleet().is_empty());
}

#[tokio::test]
async fn test_ai_builder_is_reproducible() {
    let grid = grid();
    let mut placements = Vec::new();
    for _ in 0..2 {
        let mut player = ai_player(grid, 9);
        let builder = AiRandomFleetBuilder::new(SmallRng::seed_from_u64(42));
        builder
            .build(&grid, &mut player, &FleetComposition::standard())
            .await
            .unwrap();
        let ships: Vec<_> = player
            .fleet()
            .ships()
            .iter()
            .map(|s| (s.ship_type(), s.location(), s.orientation()))
            .collect();
        placements.push(ships);
    }
    assert_eq!(placements[0], placements[1]);
}

#[tokio::test]
async fn test_human_builder_rejects_bad_placements() {
    let grid = grid();
    let (captured, output) = capture();
    let mut player = human_player(
        &[
            "e4", // lowercase
            "A0", // row zero
            "H1", "H", // runs off the right edge
            "A1", "Q", // not an orientation
            "A1", "h", // first destroyer
            "B1", "V", // crosses the first destroyer
            "A2", "H", // second destroyer
        ],
        output,
    );
    let composition = FleetComposition::new().with(ShipType::Destroyer, 2);
    let builder = player.fleet_builder();
    let status = builder.build(&grid, &mut player, &composition).await.unwrap();

    assert_eq!(status, BuildStatus::Complete);
    let ships = player.fleet().ships();
    assert_eq!(ships.len(), 2);
    assert_eq!(ships[0].location(), Cell::new(0, 0));
    assert_eq!(ships[1].location(), Cell::new(0, 1));
    assert_valid_fleet(&grid, &player);

    let transcript = captured.transcript();
    assert_eq!(transcript.matches("not a grid location").count(), 1);
    assert_eq!(transcript.matches("does not fit inside").count(), 2);
    assert_eq!(transcript.matches("not an orientation").count(), 1);
    assert_eq!(transcript.matches("would ram").count(), 1);
    assert!(transcript.contains("✓ Destroyer 1 deployed."));
    assert!(transcript.contains("✓ Destroyer 2 deployed."));
    assert!(transcript.ends_with("Radar reports the enemy fleet in range!\n\n"));
}

#[tokio::test]
async fn test_human_builder_quit() {
    let grid = grid();
    let (captured, output) = capture();
    let mut player = human_player(&["A1", "h", "C3", "x"], output);
    let builder = player.fleet_builder();
    let status = builder
        .build(&grid, &mut player, &FleetComposition::standard())
        .await
        .unwrap();

    assert_eq!(status, BuildStatus::Quit);
    assert_eq!(player.fleet().len(), 1);
    assert!(!captured.contains("Radar reports"));
}
