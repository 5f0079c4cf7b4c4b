use super::Failure;
use super::Solver;
use super::Support;
use super::Supports;
use super::linear;
use crate::Probability;
use crate::Utility;
use crate::equilibrium::Mixed;
use crate::equilibrium::Strategy;
use crate::game::Game;
use crate::game::Matrix;

/// Exhaustive support enumeration for bimatrix games.
///
/// For every pair of equal-size supports, solve for the opponent mix that
/// makes each supported action indifferent, keep solutions that are strictly
/// positive on their support, and keep profiles where no outside action
/// does better. Complete for non-degenerate games; degenerate games may
/// yield only the equal-support equilibria.
#[derive(Debug, Default, Clone, Copy)]
pub struct SupportEnumeration;

impl SupportEnumeration {
    /// Weights over `cols` (plus the common value, last) that leave every
    /// row in `rows` indifferent under `payoff`. `None` when the system is
    /// singular or its solution overflows.
    fn indifference(payoff: &Matrix, rows: &[usize], cols: &[usize]) -> Option<Vec<Utility>> {
        let k = cols.len();
        let mut a = rows
            .iter()
            .map(|&i| {
                cols.iter()
                    .map(|&j| payoff.get(i, j))
                    .chain(std::iter::once(-1.))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        a.push(std::iter::repeat_n(1., k).chain(std::iter::once(0.)).collect());
        let mut b = vec![0.; k];
        b.push(1.);
        linear::solve(a, b)
    }

    /// spread weights on a support back over all n actions
    fn extend(n: usize, support: &[usize], weights: &[Probability]) -> Strategy {
        let mut full = vec![0.; n];
        for (&i, &p) in support.iter().zip(weights) {
            full[i] = p;
        }
        Strategy::from(full)
    }

    /// candidate equilibrium for one support pair, if any
    fn candidate(
        game: &Game,
        transposed: &Matrix,
        s1: Support,
        s2: Support,
    ) -> Option<Mixed> {
        let (m, n) = game.shape();
        let rows = s1.indices();
        let cols = s2.indices();
        let q = Self::indifference(game.p1(), &rows, &cols)?;
        let p = Self::indifference(transposed, &cols, &rows)?;
        let k = rows.len();
        let positive = |w: &[Probability]| w.iter().all(|&x| x > crate::SUPPORT_TOLERANCE);
        if !positive(&p[..k]) || !positive(&q[..k]) {
            return None;
        }
        let profile = Mixed::from((
            Self::extend(m, &rows, &p[..k]),
            Self::extend(n, &cols, &q[..k]),
        ));
        profile
            .is_equilibrium(game, crate::SUPPORT_TOLERANCE)
            .then_some(profile)
    }

    fn check(game: &Game) -> Result<(), Failure> {
        let (m, n) = game.shape();
        for (player, actions) in [("P1", m), ("P2", n)] {
            if actions > crate::MAX_ACTIONS {
                return Err(Failure::Oversized {
                    player,
                    actions,
                    limit: crate::MAX_ACTIONS,
                });
            }
        }
        Ok(())
    }
}

impl Solver for SupportEnumeration {
    fn name(&self) -> &'static str {
        "support enumeration"
    }

    fn solve(&self, game: &Game) -> Result<Vec<Mixed>, Failure> {
        Self::check(game)?;
        let (m, n) = game.shape();
        let transposed = game.p2().transpose();
        let mut found = Vec::new();
        for k in 1..=m.min(n) {
            for s1 in Supports::from((m, k)) {
                for s2 in Supports::from((n, k)) {
                    if let Some(profile) = Self::candidate(game, &transposed, s1, s2) {
                        log::debug!("{:<32}{}", "support pair accepted", profile);
                        found.push(profile);
                    }
                }
            }
        }
        if found.len() % 2 == 0 {
            log::warn!(
                "{:<32}{} ({} equilibria, the game may be degenerate)",
                "even equilibrium count",
                game.name(),
                found.len()
            );
        }
        Ok(found)
    }
}
