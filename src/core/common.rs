//! Common types: attack results and the engine's error kinds.

use thiserror::Error;

use super::grid::GridError;
use super::ship::ShipKind;

/// The two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl core::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlayerId::One => f.write_str("player 1"),
            PlayerId::Two => f.write_str("player 2"),
        }
    }
}

/// Result of attacking one cell of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitResult {
    /// The cell held a ship segment.
    pub hit: bool,
    /// The cell had been attacked before; nothing changed.
    pub already_tried: bool,
    /// The ship this attack sank, if it was the ship's last segment.
    pub sunk: Option<ShipKind>,
}

impl HitResult {
    pub(crate) const fn already_tried(hit: bool) -> Self {
        Self {
            hit,
            already_tried: true,
            sunk: None,
        }
    }
}

/// Result of an attack submitted through a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    pub hit: bool,
    pub already_tried: bool,
    pub opponent_eliminated: bool,
    pub sunk: Option<ShipKind>,
}

/// Errors returned by placement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// Part of the ship would lie outside the grid.
    #[error("ship placement is out of bounds")]
    OutOfBounds,
    /// Two ships touch, orthogonally or diagonally.
    #[error("ships are too close to each other")]
    TooClose,
    /// A cell would be covered by two ships.
    #[error("cell is already occupied by another ship")]
    CellOccupied,
    #[error("{0} is already placed on the board")]
    ShipAlreadyPlaced(ShipKind),
    #[error("{0} is not placed on the board")]
    ShipNotPlaced(ShipKind),
    /// The fleet was finalized; its layout can no longer change.
    #[error("fleet placement is locked")]
    PlacementLocked,
    /// Randomized placement gave up on a ship.
    #[error("unable to place {kind} after {attempts} attempts")]
    PlacementImpossible { kind: ShipKind, attempts: u32 },
}

/// Errors returned by the match controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The player's board is incomplete or breaks the spacing rule.
    #[error("fleet of {0} is not ready")]
    FleetNotReady(PlayerId),
    #[error("it is not this player's turn")]
    NotYourTurn,
    #[error("match is already finished")]
    MatchAlreadyFinished,
    #[error("match has not started")]
    MatchNotStarted,
    #[error("match has already started")]
    MatchAlreadyStarted,
    #[error("invalid target: {0}")]
    InvalidTarget(#[from] GridError),
    /// Every cell of the target board has been attacked.
    #[error("no untried cell left to attack")]
    NoTargetAvailable,
}
