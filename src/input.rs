//! Input handlers: where a player's commands come from.

use std::collections::VecDeque;
use std::string::String;

use rand::rngs::SmallRng;
use rand::Rng;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines, Stdin};

use crate::grid::{Cell, Grid};
use crate::location::{is_location, is_orientation, stringify_location};

/// Command data for `ShowAttacks` requesting the player's own attacks.
pub const SHOW_OWN_ATTACKS: &str = "!";
/// Command data for `ShowAttacks` requesting the enemy's attacks.
pub const SHOW_ENEMY_ATTACKS: &str = "*";

/// A command read from a player. Location and orientation data are raw
/// strings that still need decoding with [`crate::location`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    /// Unrecognised input.
    None,
    HelpRequest,
    Orientation(String),
    Location(String),
    /// `"!"` for the player's own attacks, `"*"` for the enemy's.
    ShowAttacks(String),
    Quit,
}

/// Source of player commands. Blocks (asynchronously) until a command is
/// available.
#[async_trait::async_trait]
pub trait InputHandler: Send {
    async fn get_input(&mut self) -> anyhow::Result<InputCommand>;
}

/// Classify one line of typed input.
pub fn parse_command(input: &str) -> InputCommand {
    let input = input.trim();
    match input {
        "?" => InputCommand::HelpRequest,
        SHOW_OWN_ATTACKS | SHOW_ENEMY_ATTACKS => InputCommand::ShowAttacks(input.to_string()),
        "x" | "X" => InputCommand::Quit,
        _ if is_location(input) => InputCommand::Location(input.to_string()),
        _ if is_orientation(input) => InputCommand::Orientation(input.to_string()),
        _ => InputCommand::None,
    }
}

/// Reads commands line by line from a console (stdin by default).
pub struct ConsoleInputHandler<R> {
    lines: Lines<BufReader<R>>,
}

impl ConsoleInputHandler<Stdin> {
    pub fn stdin() -> Self {
        Self::new(tokio::io::stdin())
    }
}

impl<R> ConsoleInputHandler<R>
where
    R: AsyncRead + Unpin + Send,
{
    pub fn new(reader: R) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
        }
    }
}

#[async_trait::async_trait]
impl<R> InputHandler for ConsoleInputHandler<R>
where
    R: AsyncRead + Unpin + Send,
{
    /// End of input counts as a request to quit.
    async fn get_input(&mut self) -> anyhow::Result<InputCommand> {
        match self.lines.next_line().await? {
            Some(line) => Ok(parse_command(&line)),
            None => {
                log::info!("console input closed, treating as quit");
                Ok(InputCommand::Quit)
            }
        }
    }
}

/// Picks a uniformly random cell on the grid every time it is asked. It keeps
/// no memory of earlier picks, so repeats are possible.
pub struct AiRandomInputHandler {
    rng: SmallRng,
    grid: Grid,
}

impl AiRandomInputHandler {
    pub fn new(rng: SmallRng, grid: Grid) -> Self {
        Self { rng, grid }
    }
}

#[async_trait::async_trait]
impl InputHandler for AiRandomInputHandler {
    async fn get_input(&mut self) -> anyhow::Result<InputCommand> {
        let cell = Cell::new(
            self.rng.random_range(0..self.grid.width()),
            self.rng.random_range(0..self.grid.height()),
        );
        Ok(InputCommand::Location(stringify_location(cell)?))
    }
}

/// Replays a fixed list of commands, then answers `Quit` forever.
#[derive(Debug, Default)]
pub struct ScriptedInputHandler {
    commands: VecDeque<InputCommand>,
}

impl ScriptedInputHandler {
    pub fn new(commands: impl IntoIterator<Item = InputCommand>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
        }
    }

    /// Script from typed lines, classified as the console would.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(lines.into_iter().map(parse_command))
    }

    /// Commands not yet consumed.
    pub fn remaining(&self) -> usize {
        self.commands.len()
    }
}

#[async_trait::async_trait]
impl InputHandler for ScriptedInputHandler {
    async fn get_input(&mut self) -> anyhow::Result<InputCommand> {
        Ok(self.commands.pop_front().unwrap_or(InputCommand::Quit))
    }
}
