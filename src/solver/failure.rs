/// Why the mixed solver produced nothing for one game.
/// Rendered into that game's report block; other games carry on.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Failure {
    #[error("{player} has {actions} actions, more than the {limit} support enumeration accepts")]
    Oversized {
        player: &'static str,
        actions: usize,
        limit: usize,
    },
    #[error("{0}")]
    Rejected(String),
}

/// Why the mixed solver cannot be used at all during this run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Unavailable {
    #[error("solver not compiled in (build with the `{0}` feature)")]
    Missing(&'static str),
}
