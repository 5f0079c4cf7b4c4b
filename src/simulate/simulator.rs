use super::Summary;
use crate::game::Game;
use crate::report::Block;
use crate::report::Report;
use crate::solver::Capability;
use anyhow::Context;
use std::path::Path;
use std::path::PathBuf;

/// Runs every game through the equilibrium stages and writes the results.
///
/// Games are handled one after another. The pure stage always runs; the
/// mixed stage runs only when the capability was found at construction.
/// Per-game solver failures end up in the report, while filesystem
/// errors abort the run.
pub struct Simulator {
    dir: PathBuf,
    capability: Capability,
}

impl Simulator {
    pub fn new(dir: impl AsRef<Path>, capability: Capability) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            capability,
        }
    }

    /// probe for the solver once, writing into `results/`
    pub fn probe() -> Self {
        Self::new(crate::RESULTS_DIR, Capability::probe())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn capability(&self) -> &Capability {
        &self.capability
    }

    /// equilibria of one game, pure stage first
    pub fn evaluate<'g>(&self, game: &'g Game) -> Block<'g> {
        log::info!("{:<32}{}", "evaluating game", game.name());
        let block = Block::from((game, self.capability.solve(game)));
        log::info!("{:<32}{}", "pure equilibria", block.pure.len());
        match &block.mixed {
            crate::solver::Outcome::Solved(found) => {
                log::info!("{:<32}{}", "mixed equilibria", found.len())
            }
            crate::solver::Outcome::Failed(failure) => {
                log::warn!("{:<32}{} ({})", "mixed solver failed", game.name(), failure)
            }
            crate::solver::Outcome::Skipped(_) => {
                log::debug!("{:<32}{}", "mixed solver skipped", game.name())
            }
        }
        block
    }

    pub fn run(&self, games: &[Game]) -> anyhow::Result<Summary> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create results directory {}", self.dir.display()))?;
        let report = games.iter().map(|game| self.evaluate(game)).collect::<Report>();
        let mut files = report.save(&self.dir)?;
        for game in games {
            files.extend(crate::heatmap::heatmaps(game, &self.dir)?);
        }
        Ok(Summary::from((&report, files)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equilibrium::Mixed;
    use crate::equilibrium::Strategy;
    use crate::report::*;
    use crate::solver::Failure;
    use crate::solver::Solver;
    use crate::solver::Unavailable;

    /// answers every game with the uniform profile, except one it refuses
    struct Flaky(&'static str);

    impl Solver for Flaky {
        fn name(&self) -> &'static str {
            "flaky"
        }
        fn solve(&self, game: &Game) -> Result<Vec<Mixed>, Failure> {
            if game.name() == self.0 {
                Err(Failure::Rejected("degenerate payoff structure".to_string()))
            } else {
                let (m, n) = game.shape();
                Ok(vec![Mixed::from((Strategy::uniform(m), Strategy::uniform(n)))])
            }
        }
    }

    fn blocks(text: &str) -> Vec<&str> {
        text.split("\n\n").filter(|b| !b.trim().is_empty()).collect()
    }

    #[test]
    fn degraded() {
        let dir = tempfile::tempdir().unwrap();
        let games = crate::game::catalog().unwrap();
        let simulator = Simulator::new(dir.path(), Capability::from(Unavailable::Missing("mixed")));
        let summary = simulator.run(&games).unwrap();
        assert_eq!(summary.games, games.len());
        assert_eq!(summary.mixed, 0);
        let text = std::fs::read_to_string(dir.path().join(crate::REPORT_FILE)).unwrap();
        let blocks = blocks(&text);
        assert_eq!(blocks.len(), games.len());
        assert!(blocks.iter().all(|b| b.contains(UNAVAILABLE)));
    }

    #[test]
    fn isolated() {
        let dir = tempfile::tempdir().unwrap();
        let games = crate::game::catalog().unwrap();
        let flaky = Box::new(Flaky("three_by_three")) as Box<dyn Solver>;
        let simulator = Simulator::new(dir.path(), Capability::from(flaky));
        simulator.run(&games).unwrap();
        let text = std::fs::read_to_string(dir.path().join(crate::REPORT_FILE)).unwrap();
        for block in blocks(&text) {
            if block.starts_with("Game: three_by_three\n") {
                assert!(block.contains("support enumeration failed: degenerate payoff structure"));
                assert!(!block.contains("Mixed NE"));
            } else {
                assert!(block.contains("Mixed NE (support enumeration) -> "));
                assert!(!block.contains(FAILED));
            }
        }
    }

    #[test]
    fn artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("results");
        let games = vec![crate::game::prisoners_dilemma().unwrap()];
        let simulator = Simulator::new(&nested, Capability::from(Unavailable::Missing("mixed")));
        let summary = simulator.run(&games).unwrap();
        assert!(nested.join(crate::REPORT_FILE).exists());
        assert!(nested.join(crate::SUMMARY_FILE).exists());
        assert!(nested.join("prisoners_dilemma_P1_heatmap.png").exists());
        assert!(nested.join("prisoners_dilemma_P2_heatmap.png").exists());
        assert_eq!(summary.files.len(), 4);
        assert_eq!(summary.pure, 1);
    }

    #[test]
    fn evaluate() {
        let game = crate::game::prisoners_dilemma().unwrap();
        let simulator = Simulator::new("unused", Capability::from(Unavailable::Missing("mixed")));
        let block = simulator.evaluate(&game);
        assert_eq!(block.pure.len(), 1);
        assert_eq!(block.mixed.status(), "unavailable");
    }

    #[cfg(feature = "mixed")]
    #[test]
    fn catalog() {
        let dir = tempfile::tempdir().unwrap();
        let games = crate::game::catalog().unwrap();
        let simulator = Simulator::new(dir.path(), Capability::probe());
        let summary = simulator.run(&games).unwrap();
        // 1 + 0 + 0 + 2 pure, 1 + 1 + 1 + 3 mixed
        assert_eq!(summary.pure, 3);
        assert_eq!(summary.mixed, 6);
        assert_eq!(summary.failures, 0);
        let text = std::fs::read_to_string(dir.path().join(crate::REPORT_FILE)).unwrap();
        assert!(text.contains("Pure NE at (D, D) with payoffs (-2, -2)"));
        assert!(text.contains("P1: [0.667 0.333 0.000], P2: [0.667 0.333 0.000]"));
        assert!(text.contains("P1: [0.600 0.400], P2: [0.400 0.600]"));
    }
}
