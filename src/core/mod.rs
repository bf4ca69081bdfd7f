//! Core naval combat engine.
//!
//! Pure game state with no I/O: boards and fleets, the spacing rule for
//! placement, attack resolution, the turn state machine and the automated
//! opponent's targeting policy. Everything here is synchronous and assumes a
//! single writer.

pub mod ai;
pub mod board;
pub mod common;
pub mod config;
pub mod fleet;
pub mod game;
pub mod grid;
pub mod placement;
pub mod ship;

// Re-export commonly used types
pub use ai::random_untried_target;
pub use board::{Board, Cell};
pub use common::{AttackOutcome, HitResult, MatchError, PlacementError, PlayerId};
pub use config::*;
pub use fleet::Fleet;
pub use game::{Match, MatchState, Phase};
pub use grid::{Coord, Grid, GridError, Neighbors};
pub use placement::{
    board_is_legal, check_ready, conflicts, is_legal, place_checked, randomize_placement,
    randomize_placement_bounded,
};
pub use ship::{occupied_cells, standard_fleet, Orientation, Ship, ShipKind};
