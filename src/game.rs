//! Round-based game engine: initialisation, alternating turns, win detection
//! and termination.

use core::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::{
    config::FleetComposition,
    grid::Grid,
    output::OutputHandler,
    player::{BuildStatus, Player, Strategy},
};

/// Number of sides in a game.
pub const NUMBER_OF_PLAYERS: usize = 2;

/// Player slot, fixed for the whole game. `One` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn index(&self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn opponent(&self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::One => write!(f, "One"),
            PlayerId::Two => write!(f, "Two"),
        }
    }
}

/// Game states, in the only order they may be visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum GameState {
    Initializing,
    Playing,
    Won,
    Quit,
}

/// State shared with strategies while a game runs: the grid, the current
/// state and the quit hook.
#[derive(Debug, Clone)]
pub struct GameControl {
    grid: Grid,
    state: GameState,
    winner: Option<PlayerId>,
    rounds: u32,
}

impl GameControl {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            state: GameState::Initializing,
            winner: None,
            rounds: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// End the game at the next opportunity, whatever the current state.
    pub fn quit(&mut self) {
        self.advance(GameState::Quit);
    }

    /// Move forward to `next`. Backward moves are ignored.
    fn advance(&mut self, next: GameState) {
        if next > self.state {
            log::info!("game state {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }

    fn declare_winner(&mut self, id: PlayerId) {
        if self.state == GameState::Playing {
            self.winner = Some(id);
            self.advance(GameState::Won);
        }
    }
}

/// Everything needed to bring one side into the game.
pub struct Lineup {
    pub strategy: Strategy,
    /// `None` makes initialisation fail and the game quit.
    pub fleet: Option<FleetComposition>,
}

impl Lineup {
    pub fn new(strategy: Strategy, fleet: FleetComposition) -> Self {
        Self {
            strategy,
            fleet: Some(fleet),
        }
    }
}

/// Summary of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameOutcome {
    pub winner: Option<PlayerId>,
    pub rounds: u32,
    pub state: GameState,
}

/// One match between two players.
pub struct Game {
    control: GameControl,
    output: Arc<dyn OutputHandler>,
    lineups: Option<[Lineup; NUMBER_OF_PLAYERS]>,
    players: Option<[Player; NUMBER_OF_PLAYERS]>,
    finished: bool,
}

impl Game {
    /// Set up a game on `grid`. Player `lineups[0]` takes the first turn of
    /// every round.
    pub fn new(
        grid: Grid,
        output: Arc<dyn OutputHandler>,
        lineups: [Lineup; NUMBER_OF_PLAYERS],
    ) -> Self {
        Self {
            control: GameControl::new(grid),
            output,
            lineups: Some(lineups),
            players: None,
            finished: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        self.control.grid()
    }

    pub fn state(&self) -> GameState {
        self.control.state()
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.control.winner()
    }

    pub fn rounds(&self) -> u32 {
        self.control.rounds()
    }

    /// The player in slot `id`, once both players are initialised.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.as_ref().map(|p| &p[id.index()])
    }

    /// Force the game to end before any further turns.
    pub fn quit(&mut self) {
        self.control.quit();
    }

    pub fn outcome(&self) -> GameOutcome {
        GameOutcome {
            winner: self.control.winner(),
            rounds: self.control.rounds(),
            state: self.control.state(),
        }
    }

    /// Drive the game from its current state to the end.
    pub async fn run(&mut self) -> anyhow::Result<GameOutcome> {
        self.output.message("GAME OF BATTLESHIPS\n");
        self.output.message("===================\n\n");
        while !self.step().await? {}
        let outcome = self.outcome();
        log::info!("game over after {} round(s), winner {:?}", outcome.rounds, outcome.winner);
        Ok(outcome)
    }

    /// Execute one cycle of the state machine. Returns `true` once the game
    /// has finished; further calls do nothing.
    pub async fn step(&mut self) -> anyhow::Result<bool> {
        if self.finished {
            return Ok(true);
        }
        match self.control.state() {
            GameState::Initializing => {
                let next = if self.initialise().await? {
                    GameState::Playing
                } else {
                    GameState::Quit
                };
                self.control.advance(next);
            }
            GameState::Playing => self.play_round().await?,
            GameState::Won => {
                if let Some(id) = self.control.winner() {
                    self.output.message(&format!(
                        "Well done Captain of fleet {}, you have sunk the enemy and won the day!!!\n\n",
                        id
                    ));
                }
                self.control.advance(GameState::Quit);
            }
            GameState::Quit => {
                self.output.message("\n\nGame finished\n\n");
                self.finished = true;
            }
        }
        Ok(self.finished)
    }

    /// Initialise player one, then player two only if that succeeded. Both
    /// players are kept only when both fleets are built.
    async fn initialise(&mut self) -> anyhow::Result<bool> {
        let Some([first, second]) = self.lineups.take() else {
            return Ok(false);
        };
        let Some(one) = self.initialise_player(PlayerId::One, first).await? else {
            return Ok(false);
        };
        let Some(two) = self.initialise_player(PlayerId::Two, second).await? else {
            return Ok(false);
        };
        self.players = Some([one, two]);
        Ok(true)
    }

    async fn initialise_player(
        &self,
        id: PlayerId,
        lineup: Lineup,
    ) -> anyhow::Result<Option<Player>> {
        let Some(composition) = lineup.fleet else {
            log::warn!("player {} has no fleet composition", id);
            self.output
                .message(&format!("Fleet {} has no ships to deploy, the game cannot start.\n", id));
            return Ok(None);
        };
        let mut player = Player::new(lineup.strategy, Arc::clone(&self.output));
        let builder = player.fleet_builder();
        match builder.build(self.control.grid(), &mut player, &composition).await? {
            BuildStatus::Complete => {
                log::info!("player {} deployed {} ship(s)", id, player.fleet().len());
                Ok(Some(player))
            }
            BuildStatus::Quit => Ok(None),
        }
    }

    /// Player one moves, then player two unless the game was won or quit in
    /// the meantime.
    async fn play_round(&mut self) -> anyhow::Result<()> {
        let Game {
            control,
            output,
            players,
            ..
        } = self;
        let Some([one, two]) = players.as_mut() else {
            control.quit();
            return Ok(());
        };
        control.rounds += 1;

        take_turn(control, &**output, PlayerId::One, one, two).await?;
        if control.state() == GameState::Playing {
            take_turn(control, &**output, PlayerId::Two, two, one).await?;
        }
        output.message("\n");
        Ok(())
    }
}

async fn take_turn(
    control: &mut GameControl,
    output: &dyn OutputHandler,
    id: PlayerId,
    player: &mut Player,
    enemy: &mut Player,
) -> anyhow::Result<()> {
    output.message(&format!("Captain of fleet {}, this is round {}\n", id, control.rounds()));
    output.message("-----------------------------------\n");

    let actioner = player.go_actioner();
    actioner.action(control, player, enemy).await?;

    // a quit pre-empts the win check
    if control.state() == GameState::Playing && enemy.is_fleet_sunk() {
        control.declare_winner(id);
    }
    Ok(())
}
