use super::Density;
use super::Strategy;
use crate::Probability;
use crate::Utility;
use crate::game::Game;
use std::fmt::Display;
use std::fmt::Formatter;

/// A mixed-strategy profile: one distribution per player.
#[derive(Debug, Clone, PartialEq)]
pub struct Mixed {
    pub p1: Strategy,
    pub p2: Strategy,
}

impl Mixed {
    /// expected payoff of each row against P2's mix
    pub fn row_values(&self, game: &Game) -> Vec<Utility> {
        let (m, n) = game.shape();
        (0..m)
            .map(|i| (0..n).map(|j| game.p1().get(i, j) * self.p2.density(&j)).sum())
            .collect()
    }
    /// expected payoff of each column against P1's mix
    pub fn col_values(&self, game: &Game) -> Vec<Utility> {
        let (m, n) = game.shape();
        (0..n)
            .map(|j| (0..m).map(|i| game.p2().get(i, j) * self.p1.density(&i)).sum())
            .collect()
    }
    /// (P1, P2) expected payoffs under the profile
    pub fn expected(&self, game: &Game) -> (Utility, Utility) {
        let u1 = self
            .row_values(game)
            .iter()
            .enumerate()
            .map(|(i, v)| v * self.p1.density(&i))
            .sum();
        let u2 = self
            .col_values(game)
            .iter()
            .enumerate()
            .map(|(j, v)| v * self.p2.density(&j))
            .sum();
        (u1, u2)
    }
    /// Both mixes are distributions within `tolerance`, and neither player
    /// gains by switching to any pure action. The payoff slack is
    /// `tolerance` scaled by that player's largest absolute payoff, so the
    /// check holds at any payoff magnitude.
    pub fn is_equilibrium(&self, game: &Game, tolerance: Probability) -> bool {
        let (m, n) = game.shape();
        if self.p1.len() != m || self.p2.len() != n {
            return false;
        }
        let valid = |s: &Strategy| {
            s.weights().iter().all(|&p| p >= -tolerance) && (s.mass() - 1.).abs() <= tolerance
        };
        if !valid(&self.p1) || !valid(&self.p2) {
            return false;
        }
        let (u1, u2) = self.expected(game);
        let best1 = self.row_values(game).into_iter().fold(Utility::NEG_INFINITY, Utility::max);
        let best2 = self.col_values(game).into_iter().fold(Utility::NEG_INFINITY, Utility::max);
        let slack1 = tolerance * (1. + game.p1().magnitude());
        let slack2 = tolerance * (1. + game.p2().magnitude());
        best1 <= u1 + slack1 && best2 <= u2 + slack2
    }
    /// report line in the support-enumeration format
    pub fn describe(&self) -> String {
        format!("Mixed NE (support enumeration) -> {}", self)
    }
}

impl From<(Strategy, Strategy)> for Mixed {
    fn from((p1, p2): (Strategy, Strategy)) -> Self {
        Self { p1, p2 }
    }
}

impl Display for Mixed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "P1: {}, P2: {}", self.p1, self.p2)
    }
}
