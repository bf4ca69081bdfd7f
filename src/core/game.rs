use log::{debug, info};
use rand::Rng;

use crate::core::{
    board::Board,
    common::{AttackOutcome, MatchError, PlayerId},
    grid::Coord,
    placement::check_ready,
};

/// Lifecycle of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Setup,
    InProgress,
    Finished,
}

/// Snapshot of the turn state a front end renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    pub phase: Phase,
    pub turn_owner: PlayerId,
    pub finished: bool,
    pub winner: Option<PlayerId>,
}

/// Turn state machine over the two players' boards.
///
/// All turn and winner bookkeeping lives here; boards are only reachable
/// mutably during setup.
pub struct Match {
    boards: [Board; 2],
    phase: Phase,
    turn_owner: PlayerId,
    winner: Option<PlayerId>,
    shots: [usize; 2],
}

impl Match {
    /// Create a match in the setup phase. `board_a` belongs to
    /// [`PlayerId::One`], `board_b` to [`PlayerId::Two`].
    pub fn new(board_a: Board, board_b: Board) -> Self {
        Self {
            boards: [board_a, board_b],
            phase: Phase::Setup,
            turn_owner: PlayerId::One,
            winner: None,
            shots: [0; 2],
        }
    }

    pub fn board(&self, player: PlayerId) -> &Board {
        &self.boards[player.index()]
    }

    /// Mutable access to a board while fleets are being arranged.
    pub fn board_mut(&mut self, player: PlayerId) -> Result<&mut Board, MatchError> {
        match self.phase {
            Phase::Setup => Ok(&mut self.boards[player.index()]),
            Phase::InProgress => Err(MatchError::MatchAlreadyStarted),
            Phase::Finished => Err(MatchError::MatchAlreadyFinished),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Player allowed to attack next. Meaningless during setup.
    pub fn turn_owner(&self) -> PlayerId {
        self.turn_owner
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Attacks by `player` that changed the opponent's board.
    pub fn shots_fired(&self, player: PlayerId) -> usize {
        self.shots[player.index()]
    }

    pub fn state(&self) -> MatchState {
        MatchState {
            phase: self.phase,
            turn_owner: self.turn_owner,
            finished: self.is_finished(),
            winner: self.winner,
        }
    }

    fn ensure_setup(&self) -> Result<(), MatchError> {
        match self.phase {
            Phase::Setup => Ok(()),
            Phase::InProgress => Err(MatchError::MatchAlreadyStarted),
            Phase::Finished => Err(MatchError::MatchAlreadyFinished),
        }
    }

    /// Start the match with a uniformly random first player.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<PlayerId, MatchError> {
        self.ensure_setup()?;
        let first = if rng.random() {
            PlayerId::One
        } else {
            PlayerId::Two
        };
        self.start_with(first)
    }

    /// Start the match with `first` to move.
    ///
    /// Both fleets must be complete and legally spaced; otherwise the match
    /// stays in setup.
    pub fn start_with(&mut self, first: PlayerId) -> Result<PlayerId, MatchError> {
        self.ensure_setup()?;
        for player in [PlayerId::One, PlayerId::Two] {
            if !check_ready(self.board(player)) {
                return Err(MatchError::FleetNotReady(player));
            }
        }
        for board in self.boards.iter_mut() {
            board.finalize_placement();
        }
        self.turn_owner = first;
        self.phase = Phase::InProgress;
        info!("match started, {} moves first", first);
        Ok(first)
    }

    /// Resolve an attack by `attacker` on the opponent's board at `coord`.
    ///
    /// A repeated coordinate is reported as `already_tried` and keeps the
    /// turn with the attacker. Rejected calls change nothing.
    pub fn submit_attack(
        &mut self,
        attacker: PlayerId,
        coord: Coord,
    ) -> Result<AttackOutcome, MatchError> {
        match self.phase {
            Phase::Setup => return Err(MatchError::MatchNotStarted),
            Phase::Finished => return Err(MatchError::MatchAlreadyFinished),
            Phase::InProgress => {}
        }
        if attacker != self.turn_owner {
            return Err(MatchError::NotYourTurn);
        }

        let defender = attacker.opponent();
        let result = self.boards[defender.index()].attack(coord)?;
        if result.already_tried {
            debug!("{} re-attacked {}", attacker, coord);
            return Ok(AttackOutcome {
                hit: result.hit,
                already_tried: true,
                opponent_eliminated: false,
                sunk: None,
            });
        }
        self.shots[attacker.index()] += 1;

        let eliminated = self.boards[defender.index()].is_fleet_eliminated();
        if eliminated {
            self.phase = Phase::Finished;
            self.winner = Some(attacker);
            info!(
                "{} wins after {} shots",
                attacker,
                self.shots[attacker.index()]
            );
        } else {
            self.turn_owner = defender;
        }

        Ok(AttackOutcome {
            hit: result.hit,
            already_tried: false,
            opponent_eliminated: eliminated,
            sunk: result.sunk,
        })
    }
}

impl core::fmt::Debug for Match {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Match")
            .field("state", &self.state())
            .field("shots", &self.shots)
            .field("player_one", &self.boards[0])
            .field("player_two", &self.boards[1])
            .finish()
    }
}
