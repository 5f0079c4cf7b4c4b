use super::Density;
use crate::Probability;
use std::fmt::Display;
use std::fmt::Formatter;

/// One player's mixed strategy: a weight per action, indexed like the
/// payoff matrix rows (P1) or columns (P2).
#[derive(Debug, Clone, PartialEq)]
pub struct Strategy(Vec<Probability>);

impl Strategy {
    /// all mass on a single action
    pub fn pure(n: usize, action: usize) -> Self {
        assert!(action < n, "action out of range");
        Self((0..n).map(|i| if i == action { 1. } else { 0. }).collect())
    }
    pub fn uniform(n: usize) -> Self {
        assert!(n > 0, "empty action set");
        Self(vec![1. / n as Probability; n])
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn weights(&self) -> &[Probability] {
        &self.0
    }
    pub fn mass(&self) -> Probability {
        self.0.iter().sum()
    }
    /// weights rounded half away from zero to `decimals` places
    pub fn rounded(&self, decimals: usize) -> Vec<Probability> {
        let scale = 10f64.powi(decimals as i32);
        self.0
            .iter()
            .map(|p| (p * scale).round() / scale)
            .map(|p| if p == 0. { 0. } else { p })
            .collect()
    }
}

impl From<Vec<Probability>> for Strategy {
    fn from(weights: Vec<Probability>) -> Self {
        Self(weights)
    }
}

impl Density for Strategy {
    type S = usize;
    fn density(&self, x: &Self::S) -> Probability {
        self.0.get(*x).copied().unwrap_or(0.)
    }
    /// actions played with positive probability
    fn support(&self) -> impl Iterator<Item = Self::S> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, p)| **p > crate::SUPPORT_TOLERANCE)
            .map(|(i, _)| i)
    }
}

/// `[0.667 0.333 0.000]`
impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let weights = self
            .rounded(crate::MIXED_DECIMALS)
            .iter()
            .map(|p| format!("{:.*}", crate::MIXED_DECIMALS, p))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "[{}]", weights)
    }
}
