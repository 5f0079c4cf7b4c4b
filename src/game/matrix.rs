use super::Invalid;
use crate::Arbitrary;
use crate::Utility;
use std::fmt::Display;
use std::fmt::Formatter;

/// Row-major grid of payoffs for one player.
///
/// Rows index the row player's actions and columns the column player's,
/// for both players' matrices. The shape is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Utility>,
}

impl Matrix {
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
    pub fn get(&self, i: usize, j: usize) -> Utility {
        assert!(i < self.rows && j < self.cols, "cell out of bounds");
        self.data[i * self.cols + j]
    }
    pub fn row(&self, i: usize) -> &[Utility] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }
    pub fn column(&self, j: usize) -> impl Iterator<Item = Utility> + '_ {
        (0..self.rows).map(move |i| self.get(i, j))
    }
    pub fn values(&self) -> impl Iterator<Item = Utility> + '_ {
        self.data.iter().copied()
    }
    /// best payoff reachable by varying the row, column fixed
    pub fn column_max(&self, j: usize) -> Utility {
        self.column(j).fold(Utility::NEG_INFINITY, Utility::max)
    }
    /// best payoff reachable by varying the column, row fixed
    pub fn row_max(&self, i: usize) -> Utility {
        self.row(i).iter().copied().fold(Utility::NEG_INFINITY, Utility::max)
    }
    pub fn min(&self) -> Utility {
        self.values().fold(Utility::INFINITY, Utility::min)
    }
    pub fn max(&self) -> Utility {
        self.values().fold(Utility::NEG_INFINITY, Utility::max)
    }
    /// largest absolute payoff, zero for an all-zero matrix
    pub fn magnitude(&self) -> Utility {
        self.values().map(Utility::abs).fold(0., Utility::max)
    }
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|x| x.is_finite())
    }
    /// swap the roles of rows and columns
    pub fn transpose(&self) -> Self {
        let data = (0..self.cols)
            .flat_map(|j| self.column(j).collect::<Vec<_>>())
            .collect();
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }
}

/// literal payoff tables are integral, which f64 holds exactly
impl<const M: usize, const N: usize> From<[[i32; N]; M]> for Matrix {
    fn from(grid: [[i32; N]; M]) -> Self {
        assert!(M > 0 && N > 0, "empty payoff literal");
        Self {
            rows: M,
            cols: N,
            data: grid
                .iter()
                .flat_map(|row| row.iter().map(|&x| Utility::from(x)))
                .collect(),
        }
    }
}

impl TryFrom<Vec<Vec<Utility>>> for Matrix {
    type Error = Invalid;
    fn try_from(grid: Vec<Vec<Utility>>) -> Result<Self, Self::Error> {
        let rows = grid.len();
        let cols = grid.first().map(Vec::len).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(Invalid::Empty);
        }
        if let Some(i) = grid.iter().position(|row| row.len() != cols) {
            return Err(Invalid::Ragged(i));
        }
        Ok(Self {
            rows,
            cols,
            data: grid.into_iter().flatten().collect(),
        })
    }
}

/// bracketed grid with right-aligned entries:
///
/// ```text
/// [[-1 -3]
///  [ 0 -2]]
/// ```
impl Display for Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let cells = self.values().map(|x| x.to_string()).collect::<Vec<_>>();
        let width = cells.iter().map(String::len).max().unwrap_or(0);
        for i in 0..self.rows {
            let line = cells[i * self.cols..(i + 1) * self.cols]
                .iter()
                .map(|cell| format!("{:>width$}", cell, width = width))
                .collect::<Vec<_>>()
                .join(" ");
            let open = if i == 0 { "[[" } else { " [" };
            let shut = if i + 1 == self.rows { "]]" } else { "]" };
            write!(f, "{}{}{}", open, line, shut)?;
            if i + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Arbitrary for Matrix {
    fn random() -> Self {
        let rows = rand::random_range(1..=crate::ARBITRARY_ACTIONS);
        let cols = rand::random_range(1..=crate::ARBITRARY_ACTIONS);
        Self::random_shaped(rows, cols)
    }
}

impl Matrix {
    /// small integer payoffs make ties, and therefore multiple equilibria, common
    pub fn random_shaped(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: (0..rows * cols)
                .map(|_| Utility::from(rand::random_range(-3i32..=3)))
                .collect(),
        }
    }
}
