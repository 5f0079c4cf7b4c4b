/// Reasons a payoff table or game instance is rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Invalid {
    #[error("payoff matrix has no cells")]
    Empty,
    #[error("payoff matrix row {0} differs in length from row 0")]
    Ragged(usize),
    #[error("payoff shapes differ: P1 is {0:?}, P2 is {1:?}")]
    Shape((usize, usize), (usize, usize)),
    #[error("expected {expected} {player} labels, found {found}")]
    Labels {
        player: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("payoff matrix for {0} holds a non-finite value")]
    NonFinite(&'static str),
}
