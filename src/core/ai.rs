// Targeting policy for the automated opponent: uniform choice among the
// cells of the target board that have not been attacked yet. No hunting
// around earlier hits.

use rand::seq::IteratorRandom;
use rand::Rng;

use super::board::Board;
use super::grid::Coord;

/// Pick an untried cell of `target` uniformly at random, or `None` if every
/// cell has been attacked.
pub fn random_untried_target<R: Rng + ?Sized>(target: &Board, rng: &mut R) -> Option<Coord> {
    target.untried_cells().choose(rng)
}
