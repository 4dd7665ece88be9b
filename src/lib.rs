mod common;
mod condition;
mod config;
mod fleet;
mod game;
mod grid;
mod input;
mod location;
mod logging;
mod output;
mod player;
mod ship;

pub use common::*;
pub use condition::{Condition, ConditionError};
pub use config::*;
pub use fleet::*;
pub use game::*;
pub use grid::*;
pub use input::*;
pub use location::{
    is_location, is_orientation, parse_location, parse_orientation, stringify_location,
    AttackRecord,
};
pub use logging::init_logging;
pub use output::*;
pub use player::*;
pub use ship::*;
