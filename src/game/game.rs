use super::Invalid;
use super::Matrix;
use crate::Arbitrary;
use crate::Utility;

/// A finite two-player game in strategic form.
///
/// Holds one payoff matrix per player over the same (rows × cols) grid,
/// plus the action names used when presenting results. Instances are
/// validated once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    name: String,
    p1: Matrix,
    p2: Matrix,
    rows: Vec<String>,
    cols: Vec<String>,
}

impl Game {
    pub fn new<S>(
        name: &str,
        p1: Matrix,
        p2: Matrix,
        rows: &[S],
        cols: &[S],
    ) -> Result<Self, Invalid>
    where
        S: AsRef<str>,
    {
        if p1.shape() != p2.shape() {
            return Err(Invalid::Shape(p1.shape(), p2.shape()));
        }
        if rows.len() != p1.rows() {
            return Err(Invalid::Labels {
                player: "row",
                expected: p1.rows(),
                found: rows.len(),
            });
        }
        if cols.len() != p1.cols() {
            return Err(Invalid::Labels {
                player: "column",
                expected: p1.cols(),
                found: cols.len(),
            });
        }
        if !p1.is_finite() {
            return Err(Invalid::NonFinite("P1"));
        }
        if !p2.is_finite() {
            return Err(Invalid::NonFinite("P2"));
        }
        Ok(Self {
            name: name.to_string(),
            p1,
            p2,
            rows: rows.iter().map(|s| s.as_ref().to_string()).collect(),
            cols: cols.iter().map(|s| s.as_ref().to_string()).collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    /// row player's payoffs
    pub fn p1(&self) -> &Matrix {
        &self.p1
    }
    /// column player's payoffs
    pub fn p2(&self) -> &Matrix {
        &self.p2
    }
    pub fn shape(&self) -> (usize, usize) {
        self.p1.shape()
    }
    pub fn row_labels(&self) -> &[String] {
        &self.rows
    }
    pub fn col_labels(&self) -> &[String] {
        &self.cols
    }
    pub fn row_label(&self, i: usize) -> &str {
        &self.rows[i]
    }
    pub fn col_label(&self, j: usize) -> &str {
        &self.cols[j]
    }
    /// both players' payoffs at one cell
    pub fn payoffs(&self, i: usize, j: usize) -> (Utility, Utility) {
        (self.p1.get(i, j), self.p2.get(i, j))
    }
    pub fn is_zero_sum(&self) -> bool {
        self.p1
            .values()
            .zip(self.p2.values())
            .all(|(a, b)| a + b == 0.)
    }
}

impl Arbitrary for Game {
    fn random() -> Self {
        let p1 = Matrix::random();
        let p2 = Matrix::random_shaped(p1.rows(), p1.cols());
        let rows = (1..=p1.rows()).map(|i| format!("R{}", i)).collect::<Vec<_>>();
        let cols = (1..=p1.cols()).map(|j| format!("C{}", j)).collect::<Vec<_>>();
        Self::new("arbitrary", p1, p2, &rows, &cols).expect("consistent random game")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid() {
        let game = Game::new(
            "pd",
            Matrix::from([[-1, -3], [0, -2]]),
            Matrix::from([[-1, 0], [-3, -2]]),
            &["C", "D"],
            &["C", "D"],
        )
        .unwrap();
        assert_eq!(game.name(), "pd");
        assert_eq!(game.shape(), (2, 2));
        assert_eq!(game.payoffs(1, 0), (0., -3.));
        assert_eq!(game.row_label(1), "D");
        assert!(!game.is_zero_sum());
    }

    #[test]
    fn shapes() {
        let err = Game::new(
            "bad",
            Matrix::from([[1, 2]]),
            Matrix::from([[1], [2]]),
            &["A"],
            &["X", "Y"],
        )
        .unwrap_err();
        assert_eq!(err, Invalid::Shape((1, 2), (2, 1)));
    }

    #[test]
    fn labels() {
        let err = Game::new(
            "bad",
            Matrix::from([[1, 2]]),
            Matrix::from([[1, 2]]),
            &["A"],
            &["X"],
        )
        .unwrap_err();
        assert_eq!(
            err,
            Invalid::Labels {
                player: "column",
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn finite() {
        let p1 = Matrix::try_from(vec![vec![1., Utility::NAN]]).unwrap();
        let p2 = Matrix::from([[0, 0]]);
        let err = Game::new("bad", p1, p2, &["A"], &["X", "Y"]).unwrap_err();
        assert_eq!(err, Invalid::NonFinite("P1"));
    }

    #[test]
    fn zero_sum() {
        let game = Game::new(
            "pennies",
            Matrix::from([[1, -1], [-1, 1]]),
            Matrix::from([[-1, 1], [1, -1]]),
            &["H", "T"],
            &["H", "T"],
        )
        .unwrap();
        assert!(game.is_zero_sum());
    }

    #[test]
    fn arbitrary() {
        for _ in 0..32 {
            let game = Game::random();
            assert_eq!(game.p1().shape(), game.p2().shape());
            assert_eq!(game.row_labels().len(), game.shape().0);
            assert_eq!(game.col_labels().len(), game.shape().1);
        }
    }
}
