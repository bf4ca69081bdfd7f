//! Two-player grid naval combat: game-state engine plus terminal wrappers.

pub mod core;
pub mod player;

#[cfg(feature = "cli")]
pub mod cli;
mod logging;
pub mod prelude;

pub use crate::core::*;
pub use logging::{init_logging, LOG_ENV};
pub use player::{take_turn, AiPlayer, Player};
#[cfg(feature = "cli")]
pub use player::CliPlayer;
