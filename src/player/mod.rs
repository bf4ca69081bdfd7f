//! Player trait and implementations
//!
//! - AiPlayer: random placement and uniform untried-cell targeting
//! - CliPlayer: interactive terminal player

use rand::rngs::SmallRng;

use crate::core::{AttackOutcome, Board, Coord, Match, MatchError, PlacementError};

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Placing ships on its own board
/// - Selecting cells to attack on the opponent's board
/// - Handling feedback from attacks
pub trait Player {
    /// Place all ships onto the provided board.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), PlacementError>;

    /// Choose the next cell to attack. `target` is the opponent's board;
    /// implementations must only look at its hit state. `None` means the
    /// player has nothing to fire at, or gave up.
    fn select_target(&mut self, rng: &mut SmallRng, target: &Board) -> Option<Coord>;

    /// Inform the player of the result of its last attack.
    fn handle_attack_result(&mut self, _coord: Coord, _outcome: AttackOutcome) {}

    /// Inform the player of an opponent attack against its board.
    fn handle_opponent_attack(&mut self, _coord: Coord, _outcome: AttackOutcome) {}
}

/// Let `player` take the turn of whoever currently holds control of `game`.
pub fn take_turn<P: Player + ?Sized>(
    player: &mut P,
    game: &mut Match,
    rng: &mut SmallRng,
) -> Result<(Coord, AttackOutcome), MatchError> {
    let attacker = game.turn_owner();
    let target = game.board(attacker.opponent());
    let coord = player
        .select_target(rng, target)
        .ok_or(MatchError::NoTargetAvailable)?;
    let outcome = game.submit_attack(attacker, coord)?;
    player.handle_attack_result(coord, outcome);
    Ok((coord, outcome))
}

pub mod ai;
pub use ai::AiPlayer;

pub mod sim;
pub use sim::{simulate, ShotCounts, SimError, SimReport};

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub use cli::CliPlayer;
