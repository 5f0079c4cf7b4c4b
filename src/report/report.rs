use super::ApiGame;
use super::Block;
use anyhow::Context;
use std::path::Path;
use std::path::PathBuf;

/// Per-game results in catalog order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Report<'g>(Vec<Block<'g>>);

impl<'g> Report<'g> {
    pub fn push(&mut self, block: Block<'g>) {
        self.0.push(block);
    }
    pub fn blocks(&self) -> &[Block<'g>] {
        &self.0
    }
    /// one block per game, each followed by a blank separator line
    pub fn text(&self) -> String {
        self.0
            .iter()
            .flat_map(|block| block.lines().into_iter().chain(std::iter::once(String::new())))
            .collect::<Vec<_>>()
            .join("\n")
    }
    pub fn json(&self) -> anyhow::Result<String> {
        let games = self.0.iter().map(ApiGame::from).collect::<Vec<_>>();
        serde_json::to_string_pretty(&games).context("serialize equilibria summary")
    }
    /// write the text report and its JSON companion into `dir`
    pub fn save(&self, dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
        let text = dir.join(crate::REPORT_FILE);
        let json = dir.join(crate::SUMMARY_FILE);
        std::fs::write(&text, self.text())
            .with_context(|| format!("write report {}", text.display()))?;
        log::info!("{:<32}{}", "saved equilibria", text.display());
        std::fs::write(&json, self.json()?)
            .with_context(|| format!("write summary {}", json.display()))?;
        log::info!("{:<32}{}", "saved summary", json.display());
        Ok(vec![text, json])
    }
}

impl<'g> FromIterator<Block<'g>> for Report<'g> {
    fn from_iter<I: IntoIterator<Item = Block<'g>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::*;
    use crate::solver::Outcome;
    use crate::solver::Unavailable;

    #[test]
    fn separators() {
        let pd = crate::game::prisoners_dilemma().unwrap();
        let pennies = crate::game::matching_pennies().unwrap();
        let report = [&pd, &pennies]
            .into_iter()
            .map(|game| Block::from((game, Outcome::Skipped(Unavailable::Missing("mixed")))))
            .collect::<Report>();
        let text = report.text();
        assert!(text.starts_with("Game: prisoners_dilemma\n"));
        assert!(text.contains(&format!("{}\n\nGame: matching_pennies\n", UNAVAILABLE)));
        assert!(text.ends_with(&format!("{}\n", UNAVAILABLE)));
        assert_eq!(text.matches(UNAVAILABLE).count(), 2);
    }

    #[test]
    fn json() {
        let game = crate::game::battle_of_the_sexes().unwrap();
        let report = std::iter::once(Block::from((&game, Outcome::Solved(vec![])))).collect::<Report>();
        let parsed = serde_json::from_str::<Vec<ApiGame>>(&report.json().unwrap()).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "battle_of_the_sexes");
        assert_eq!(parsed[0].pure.len(), 2);
        assert_eq!(parsed[0].pure[1].row, "F");
        assert_eq!(parsed[0].pure[1].payoffs, (2., 3.));
        assert_eq!(parsed[0].mixed.status, "solved");
        assert_eq!(parsed[0].mixed.reason, None);
    }

    #[test]
    fn save() {
        let dir = tempfile::tempdir().unwrap();
        let game = crate::game::prisoners_dilemma().unwrap();
        let report = std::iter::once(Block::from((&game, Outcome::Solved(vec![])))).collect::<Report>();
        let paths = report.save(dir.path()).unwrap();
        assert_eq!(paths.len(), 2);
        let text = std::fs::read_to_string(dir.path().join(crate::REPORT_FILE)).unwrap();
        assert_eq!(text, report.text());
        assert!(dir.path().join(crate::SUMMARY_FILE).exists());
    }

    #[test]
    fn missing() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("absent");
        let report = Report::default();
        assert!(report.save(&gone).is_err());
    }
}
