//! Computer-vs-computer matches, used by the `sim` binary and tests.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::core::{Board, Match, MatchError, PlacementError, PlayerId};

use super::{take_turn, AiPlayer, Player};

#[derive(Debug, Error)]
pub enum SimError {
    #[error("placement failed: {0}")]
    Placement(#[from] PlacementError),
    #[error("match failed: {0}")]
    Match(#[from] MatchError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotCounts {
    pub player1: usize,
    pub player2: usize,
}

/// Summary of one simulated match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimReport {
    pub first: PlayerId,
    pub winner: PlayerId,
    pub turns: usize,
    pub shots: ShotCounts,
}

/// Play two [`AiPlayer`]s against each other on reference boards.
///
/// Player one places, targets and picks the first mover with `seed1`;
/// player two uses `seed2`.
pub fn simulate(seed1: u64, seed2: u64) -> Result<SimReport, SimError> {
    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);
    let mut p1 = AiPlayer::new();
    let mut p2 = AiPlayer::new();

    let mut game = Match::new(Board::standard(), Board::standard());
    p1.place_ships(&mut rng1, game.board_mut(PlayerId::One)?)?;
    p2.place_ships(&mut rng2, game.board_mut(PlayerId::Two)?)?;
    let first = game.start(&mut rng1)?;

    let mut turns = 0;
    let winner = loop {
        if let Some(winner) = game.winner() {
            break winner;
        }
        match game.turn_owner() {
            PlayerId::One => take_turn(&mut p1, &mut game, &mut rng1)?,
            PlayerId::Two => take_turn(&mut p2, &mut game, &mut rng2)?,
        };
        turns += 1;
    };

    Ok(SimReport {
        first,
        winner,
        turns,
        shots: ShotCounts {
            player1: game.shots_fired(PlayerId::One),
            player2: game.shots_fired(PlayerId::Two),
        },
    })
}
