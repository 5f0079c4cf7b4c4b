use super::Block;
use crate::Utility;
use crate::equilibrium::Mixed;
use crate::game::Game;
use crate::game::Matrix;
use crate::solver::Outcome;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiPure {
    pub row: String,
    pub col: String,
    pub index: (usize, usize),
    pub payoffs: (Utility, Utility),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiProfile {
    pub p1: Vec<f64>,
    pub p2: Vec<f64>,
    pub payoffs: (Utility, Utility),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiMixed {
    pub status: String,
    pub reason: Option<String>,
    pub equilibria: Vec<ApiProfile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiGame {
    pub name: String,
    pub shape: (usize, usize),
    pub p1: Vec<Vec<Utility>>,
    pub p2: Vec<Vec<Utility>>,
    pub pure: Vec<ApiPure>,
    pub mixed: ApiMixed,
}

impl ApiProfile {
    fn new(mix: &Mixed, game: &Game) -> Self {
        Self {
            p1: mix.p1.rounded(crate::MIXED_DECIMALS),
            p2: mix.p2.rounded(crate::MIXED_DECIMALS),
            payoffs: mix.expected(game),
        }
    }
}

impl ApiMixed {
    fn new(outcome: &Outcome, game: &Game) -> Self {
        let reason = match outcome {
            Outcome::Solved(_) => None,
            Outcome::Failed(failure) => Some(failure.to_string()),
            Outcome::Skipped(reason) => Some(reason.to_string()),
        };
        Self {
            status: outcome.status().to_string(),
            reason,
            equilibria: outcome
                .equilibria()
                .iter()
                .map(|mix| ApiProfile::new(mix, game))
                .collect(),
        }
    }
}

fn grid(matrix: &Matrix) -> Vec<Vec<Utility>> {
    (0..matrix.rows()).map(|i| matrix.row(i).to_vec()).collect()
}

impl From<&Block<'_>> for ApiGame {
    fn from(block: &Block<'_>) -> Self {
        let game = block.game;
        Self {
            name: game.name().to_string(),
            shape: game.shape(),
            p1: grid(game.p1()),
            p2: grid(game.p2()),
            pure: block
                .pure
                .iter()
                .map(|pure| ApiPure {
                    row: game.row_label(pure.row).to_string(),
                    col: game.col_label(pure.col).to_string(),
                    index: (pure.row, pure.col),
                    payoffs: pure.payoffs(game),
                })
                .collect(),
            mixed: ApiMixed::new(&block.mixed, game),
        }
    }
}
