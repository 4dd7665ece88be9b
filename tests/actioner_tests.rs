mod support;

use battleships::{
    AiGoActioner, AttackRecord, Cell, GameControl, GameState, GoActioner, Orientation, Player,
    ScriptedInputHandler, ShipType, Strategy,
};

use support::{capture, grid, human_player, preset_player, PresetFleetBuilder};

fn enemy_with_destroyer() -> Player {
    let (_, output) = capture();
    let mut enemy = preset_player(vec![], &[], output);
    enemy.add_ship_to_fleet(ShipType::Destroyer, Cell::new(0, 0), Orientation::Horizontal);
    enemy
}

async fn take_turn(control: &mut GameControl, player: &mut Player, enemy: &mut Player) {
    let actioner = player.go_actioner();
    actioner.action(control, player, enemy).await.unwrap();
}

#[tokio::test]
async fn test_ai_actioner_attacks_and_reports() {
    let mut control = GameControl::new(grid());
    let (captured, output) = capture();
    let mut player = preset_player(vec![], &["A1", "J10"], output);
    let mut enemy = enemy_with_destroyer();

    take_turn(&mut control, &mut player, &mut enemy).await;
    take_turn(&mut control, &mut player, &mut enemy).await;

    assert_eq!(
        player.attacks(),
        vec![
            AttackRecord::new(Cell::new(0, 0), true),
            AttackRecord::new(Cell::new(9, 9), false),
        ]
    );
    assert_eq!(enemy.fleet().ships()[0].condition(), 0b1110);
    assert!(captured.contains("AI fires at A1 and hits a Destroyer!"));
    assert!(captured.contains("AI fires at J10 and misses."));
    assert_eq!(control.state(), GameState::Initializing);

    // script exhausted, so the next command is a quit
    take_turn(&mut control, &mut player, &mut enemy).await;
    assert_eq!(control.state(), GameState::Quit);
    assert_eq!(player.attacks().len(), 2);
}

#[tokio::test]
async fn test_ai_actioner_rejects_non_location_input() {
    let mut control = GameControl::new(grid());
    let (_, output) = capture();
    let strategy = Strategy::new(
        PresetFleetBuilder::new(vec![]),
        AiGoActioner::new(),
        ScriptedInputHandler::from_lines(["?"]),
    );
    let mut player = Player::new(strategy, output);
    let mut enemy = enemy_with_destroyer();

    let actioner = player.go_actioner();
    assert!(actioner.action(&mut control, &mut player, &mut enemy).await.is_err());
    assert!(player.attacks().is_empty());
}

#[tokio::test]
async fn test_human_actioner_command_loop() {
    let mut control = GameControl::new(grid());
    let (captured, output) = capture();
    let mut player = human_player(&["?", "!", "*", "hello", "h", "K1", "A0", "a1", "A1"], output);
    let mut enemy = enemy_with_destroyer();

    take_turn(&mut control, &mut player, &mut enemy).await;

    let transcript = captured.transcript();
    assert!(transcript.contains("A1 .. J10"));
    assert!(transcript.contains("We have not attacked yet.\n\n"));
    assert!(transcript.contains("We have not been attacked yet.\n\n"));
    assert_eq!(transcript.matches("✗ Invalid command, please repeat.").count(), 3);
    assert_eq!(transcript.matches("out of range of our guns").count(), 2);
    assert!(transcript.contains("💥 Hit! We struck an enemy ship!"));
    assert_eq!(transcript.matches("what are your orders?").count(), 9);
    assert_eq!(player.attacks(), vec![AttackRecord::new(Cell::new(0, 0), true)]);
    assert_eq!(control.state(), GameState::Initializing);
}

#[tokio::test]
async fn test_human_actioner_lists_attacks() {
    let mut control = GameControl::new(grid());
    let (captured, output) = capture();
    let mut player = human_player(&["A1", "E10", "!", "*", "B1"], output);
    let mut enemy = enemy_with_destroyer();
    enemy.add_attack(AttackRecord::new(Cell::new(2, 4), false));
    enemy.add_attack(AttackRecord::new(Cell::new(3, 0), true));

    for _ in 0..3 {
        take_turn(&mut control, &mut player, &mut enemy).await;
    }

    let transcript = captured.transcript();
    assert!(transcript.contains("Our attacks so far:\nA1* E10_\n\n"));
    assert!(transcript.contains("The enemy's attacks so far:\nC5_ D1*\n\n"));
    assert!(transcript.contains("💧 Our attack missed."));
    assert_eq!(player.attacks().len(), 3);
}

#[tokio::test]
async fn test_human_actioner_reports_sinking() {
    let mut control = GameControl::new(grid());
    let (captured, output) = capture();
    let mut player = human_player(&["A1", "B1", "C1", "D1"], output);
    let mut enemy = enemy_with_destroyer();

    for _ in 0..4 {
        take_turn(&mut control, &mut player, &mut enemy).await;
    }

    assert!(enemy.is_fleet_sunk());
    assert_eq!(captured.transcript().matches("💥 Hit!").count(), 4);
    assert!(captured.contains("💥 Hit! We struck an enemy ship and it sank!"));
}

#[tokio::test]
async fn test_human_actioner_quit() {
    let mut control = GameControl::new(grid());
    let (_, output) = capture();
    let mut player = human_player(&["?", "X", "A1"], output);
    let mut enemy = enemy_with_destroyer();

    take_turn(&mut control, &mut player, &mut enemy).await;

    assert_eq!(control.state(), GameState::Quit);
    assert!(player.attacks().is_empty());
    assert_eq!(enemy.fleet().ships()[0].condition(), 0b1111);
}
