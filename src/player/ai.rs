use rand::rngs::SmallRng;

use crate::core::{
    ai, randomize_placement, randomize_placement_bounded, Board, Coord, GameConfig,
    PlacementError,
};

use super::Player;

/// Automated opponent: random legal layout, random untried targets.
#[derive(Debug, Default)]
pub struct AiPlayer {
    placement_attempts: Option<u32>,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Honour the per-ship draw limit of `config`.
    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            placement_attempts: config.placement_attempts,
        }
    }
}

impl Player for AiPlayer {
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), PlacementError> {
        match self.placement_attempts {
            Some(max) => randomize_placement_bounded(board, rng, max),
            None => randomize_placement(board, rng),
        }
    }

    fn select_target(&mut self, rng: &mut SmallRng, target: &Board) -> Option<Coord> {
        ai::random_untried_target(target, rng)
    }
}
