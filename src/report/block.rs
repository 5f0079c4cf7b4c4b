use crate::equilibrium::Pure;
use crate::game::Game;
use crate::solver::Outcome;

/// Line written when the best responses of the two players never meet.
pub const NO_PURE: &str = "No pure-strategy NE found.";
/// Line written when the solver ran and returned nothing.
pub const NO_MIXED: &str = "No mixed-strategy equilibria returned by solver.";
/// Line written for every game when the solver was not available.
pub const UNAVAILABLE: &str = "mixed solver missing: skipped mixed-strategy computation.";
/// Prefix of the line written when the solver failed on a game.
pub const FAILED: &str = "support enumeration failed:";

/// Everything computed for one game.
#[derive(Debug, Clone, PartialEq)]
pub struct Block<'g> {
    pub game: &'g Game,
    pub pure: Vec<Pure>,
    pub mixed: Outcome,
}

impl<'g> Block<'g> {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Game: {}", self.game.name()),
            format!("A (P1) =\n{}", self.game.p1()),
            format!("B (P2) =\n{}", self.game.p2()),
        ];
        match self.pure.as_slice() {
            [] => lines.push(NO_PURE.to_string()),
            found => lines.extend(found.iter().map(|pure| pure.describe(self.game))),
        }
        match &self.mixed {
            Outcome::Solved(found) if found.is_empty() => lines.push(NO_MIXED.to_string()),
            Outcome::Solved(found) => lines.extend(found.iter().map(|mix| mix.describe())),
            Outcome::Failed(failure) => lines.push(format!("{} {}", FAILED, failure)),
            Outcome::Skipped(_) => lines.push(UNAVAILABLE.to_string()),
        }
        lines
    }
}

impl<'g> From<(&'g Game, Outcome)> for Block<'g> {
    /// pure equilibria are always computed here; the mixed stage arrives
    /// already resolved
    fn from((game, mixed): (&'g Game, Outcome)) -> Self {
        Self {
            game,
            pure: game.pure_equilibria(),
            mixed,
        }
    }
}
