//! Commonly used types and utilities for ease of import.

pub use crate::core::{
    check_ready, randomize_placement, AttackOutcome, Board, Coord, Match, MatchError,
    Orientation, PlacementError, PlayerId, Ship, ShipKind,
};
pub use crate::player::{take_turn, AiPlayer, Player};

#[cfg(feature = "cli")]
pub use crate::cli::{render_board, render_player_view};
#[cfg(feature = "cli")]
pub use crate::player::CliPlayer;
