use crate::Utility;
use crate::game::Game;
use crate::game::Matrix;
use std::fmt::Display;
use std::fmt::Formatter;

/// A cell where both actions are mutual best responses.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pure {
    pub row: usize,
    pub col: usize,
}

impl Pure {
    pub fn payoffs(&self, game: &Game) -> (Utility, Utility) {
        game.payoffs(self.row, self.col)
    }
    /// report line naming the cell by its action labels
    pub fn describe(&self, game: &Game) -> String {
        let (a, b) = self.payoffs(game);
        format!(
            "Pure NE at ({}, {}) with payoffs ({}, {})",
            game.row_label(self.row),
            game.col_label(self.col),
            a,
            b
        )
    }
}

impl From<(usize, usize)> for Pure {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl Display for Pure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Best-response masks over the payoff grid.
///
/// `rows[i][j]` holds when row i maximizes P1's payoff against column j.
/// `cols[i][j]` holds when column j maximizes P2's payoff against row i.
/// Ties are kept: every maximizer is marked. Comparison is exact, which is
/// sound for payoffs built from integer literals.
#[derive(Debug, Clone, PartialEq)]
pub struct BestResponses {
    rows: Vec<Vec<bool>>,
    cols: Vec<Vec<bool>>,
}

impl BestResponses {
    pub fn is_row_best(&self, i: usize, j: usize) -> bool {
        self.rows[i][j]
    }
    pub fn is_col_best(&self, i: usize, j: usize) -> bool {
        self.cols[i][j]
    }
    /// cells marked by both players, row-major
    pub fn equilibria(&self) -> Vec<Pure> {
        self.rows
            .iter()
            .zip(self.cols.iter())
            .enumerate()
            .flat_map(|(i, (r, c))| {
                r.iter()
                    .zip(c.iter())
                    .enumerate()
                    .filter(|(_, (r, c))| **r && **c)
                    .map(move |(j, _)| Pure::from((i, j)))
            })
            .collect()
    }
}

impl From<(&Matrix, &Matrix)> for BestResponses {
    fn from((p1, p2): (&Matrix, &Matrix)) -> Self {
        assert!(p1.shape() == p2.shape(), "payoff shapes differ");
        let (m, n) = p1.shape();
        let colmax = (0..n).map(|j| p1.column_max(j)).collect::<Vec<_>>();
        let rowmax = (0..m).map(|i| p2.row_max(i)).collect::<Vec<_>>();
        let rows = (0..m)
            .map(|i| (0..n).map(|j| p1.get(i, j) == colmax[j]).collect())
            .collect();
        let cols = (0..m)
            .map(|i| (0..n).map(|j| p2.get(i, j) == rowmax[i]).collect())
            .collect();
        Self { rows, cols }
    }
}

impl From<&Game> for BestResponses {
    fn from(game: &Game) -> Self {
        Self::from((game.p1(), game.p2()))
    }
}

/// Every pure-strategy Nash equilibrium of the bimatrix game (p1, p2),
/// in row-major order. An empty result is a normal outcome.
pub fn pure_equilibria(p1: &Matrix, p2: &Matrix) -> Vec<Pure> {
    BestResponses::from((p1, p2)).equilibria()
}

impl Game {
    pub fn pure_equilibria(&self) -> Vec<Pure> {
        pure_equilibria(self.p1(), self.p2())
    }
}
