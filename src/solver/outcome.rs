use super::Failure;
use super::Unavailable;
use crate::equilibrium::Mixed;

/// What the mixed-strategy stage produced for one game.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// the solver ran; the list may be empty
    Solved(Vec<Mixed>),
    /// the solver ran and gave up on this game
    Failed(Failure),
    /// the solver was never called
    Skipped(Unavailable),
}

impl Outcome {
    pub fn equilibria(&self) -> &[Mixed] {
        match self {
            Self::Solved(found) => found,
            Self::Failed(_) | Self::Skipped(_) => &[],
        }
    }
    pub fn status(&self) -> &'static str {
        match self {
            Self::Solved(_) => "solved",
            Self::Failed(_) => "failed",
            Self::Skipped(_) => "unavailable",
        }
    }
}

impl From<Result<Vec<Mixed>, Failure>> for Outcome {
    fn from(result: Result<Vec<Mixed>, Failure>) -> Self {
        match result {
            Ok(found) => Self::Solved(found),
            Err(failure) => Self::Failed(failure),
        }
    }
}
