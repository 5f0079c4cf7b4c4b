use crate::report::Report;
use crate::solver::Outcome;
use std::fmt::Display;
use std::fmt::Formatter;
use std::path::PathBuf;

/// Counts from one run, for the closing log line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub games: usize,
    pub pure: usize,
    pub mixed: usize,
    pub failures: usize,
    pub skipped: usize,
    pub files: Vec<PathBuf>,
}

impl From<(&Report<'_>, Vec<PathBuf>)> for Summary {
    fn from((report, files): (&Report<'_>, Vec<PathBuf>)) -> Self {
        let blocks = report.blocks();
        Self {
            games: blocks.len(),
            pure: blocks.iter().map(|b| b.pure.len()).sum(),
            mixed: blocks.iter().map(|b| b.mixed.equilibria().len()).sum(),
            failures: blocks
                .iter()
                .filter(|b| matches!(b.mixed, Outcome::Failed(_)))
                .count(),
            skipped: blocks
                .iter()
                .filter(|b| matches!(b.mixed, Outcome::Skipped(_)))
                .count(),
            files,
        }
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games, {} pure, {} mixed, {} failed, {} skipped, {} files",
            self.games,
            self.pure,
            self.mixed,
            self.failures,
            self.skipped,
            self.files.len()
        )
    }
}
