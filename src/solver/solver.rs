use super::Failure;
use crate::equilibrium::Mixed;
use crate::game::Game;

/// A mixed-strategy equilibrium capability.
///
/// Implementations see both payoff matrices through the game and answer
/// with every equilibrium they find, or a per-game failure. They never
/// panic on well-formed games.
pub trait Solver {
    fn name(&self) -> &'static str;
    fn solve(&self, game: &Game) -> Result<Vec<Mixed>, Failure>;
}
