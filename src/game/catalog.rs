use super::Game;
use super::Invalid;
use super::Matrix;

/// The predefined games, in the order they are simulated and reported.
pub fn catalog() -> Result<Vec<Game>, Invalid> {
    Ok(vec![
        prisoners_dilemma()?,
        three_by_three()?,
        matching_pennies()?,
        battle_of_the_sexes()?,
    ])
}

/// Cooperate or Defect. Defection dominates for both players.
pub fn prisoners_dilemma() -> Result<Game, Invalid> {
    Game::new(
        "prisoners_dilemma",
        Matrix::from([[-1, -3], [0, -2]]),
        Matrix::from([[-1, 0], [-3, -2]]),
        &["C", "D"],
        &["C", "D"],
    )
}

/// General-sum 3x3 game whose best responses never line up.
pub fn three_by_three() -> Result<Game, Invalid> {
    Game::new(
        "three_by_three",
        Matrix::from([[3, 1, 2], [2, 3, 0], [0, 4, 1]]),
        Matrix::from([[2, 3, 1], [3, 1, 2], [4, 0, 3]]),
        &["A1", "A2", "A3"],
        &["B1", "B2", "B3"],
    )
}

/// Zero-sum; the row player wins on a match.
pub fn matching_pennies() -> Result<Game, Invalid> {
    Game::new(
        "matching_pennies",
        Matrix::from([[1, -1], [-1, 1]]),
        Matrix::from([[-1, 1], [1, -1]]),
        &["H", "T"],
        &["H", "T"],
    )
}

/// Coordination with conflicting preferences over Opera and Football.
pub fn battle_of_the_sexes() -> Result<Game, Invalid> {
    Game::new(
        "battle_of_the_sexes",
        Matrix::from([[3, 0], [0, 2]]),
        Matrix::from([[2, 0], [0, 3]]),
        &["O", "F"],
        &["O", "F"],
    )
}

/// Matching-pennies-shaped game with payoffs multiplied by `scale`.
/// No pure equilibrium; the unique mixed one is uniform for both players.
#[cfg(test)]
pub(crate) fn magnified(scale: crate::Utility) -> Game {
    let grid = |rows: [[f64; 2]; 2]| {
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|x| x * scale).collect())
            .collect::<Vec<Vec<f64>>>();
        Matrix::try_from(rows).unwrap()
    };
    Game::new(
        "magnified",
        grid([[1.1, -0.7], [-0.9, 1.3]]),
        grid([[-0.3, 1.7], [1.9, -0.1]]),
        &["H", "T"],
        &["H", "T"],
    )
    .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order() {
        let names = catalog()
            .unwrap()
            .iter()
            .map(|g| g.name().to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "prisoners_dilemma",
                "three_by_three",
                "matching_pennies",
                "battle_of_the_sexes",
            ]
        );
    }

    #[test]
    fn shapes() {
        for game in catalog().unwrap() {
            let (m, n) = game.shape();
            assert_eq!(game.row_labels().len(), m);
            assert_eq!(game.col_labels().len(), n);
        }
    }

    #[test]
    fn pennies_is_zero_sum() {
        assert!(matching_pennies().unwrap().is_zero_sum());
        assert!(!prisoners_dilemma().unwrap().is_zero_sum());
    }
}
