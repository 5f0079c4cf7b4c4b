use super::Outcome;
use super::Solver;
use super::Unavailable;
use crate::game::Game;

/// Result of probing for the mixed solver, taken once per run.
///
/// Every game consults this value instead of probing again; when the
/// probe failed, games skip the solver and carry the reason instead.
pub enum Capability {
    Available(Box<dyn Solver>),
    Unavailable(Unavailable),
}

impl Capability {
    /// look for a compiled-in solver
    pub fn probe() -> Self {
        match load() {
            Ok(solver) => {
                log::info!("{:<32}{}", "mixed solver available", solver.name());
                Self::Available(solver)
            }
            Err(reason) => {
                log::warn!("{:<32}{}", "mixed solver unavailable", reason);
                log::warn!("falling back to pure-strategy enumeration only");
                Self::Unavailable(reason)
            }
        }
    }
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
    /// run the solver on one game, or record why it was skipped
    pub fn solve(&self, game: &Game) -> Outcome {
        match self {
            Self::Available(solver) => Outcome::from(solver.solve(game)),
            Self::Unavailable(reason) => Outcome::Skipped(reason.clone()),
        }
    }
}

impl From<Box<dyn Solver>> for Capability {
    fn from(solver: Box<dyn Solver>) -> Self {
        Self::Available(solver)
    }
}

impl From<Unavailable> for Capability {
    fn from(reason: Unavailable) -> Self {
        Self::Unavailable(reason)
    }
}

#[cfg(feature = "mixed")]
fn load() -> Result<Box<dyn Solver>, Unavailable> {
    Ok(Box::new(super::SupportEnumeration))
}

#[cfg(not(feature = "mixed"))]
fn load() -> Result<Box<dyn Solver>, Unavailable> {
    Err(Unavailable::Missing("mixed"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equilibrium::Mixed;
    use crate::solver::Failure;

    struct Refusing;
    impl Solver for Refusing {
        fn name(&self) -> &'static str {
            "refusing"
        }
        fn solve(&self, _: &Game) -> Result<Vec<Mixed>, Failure> {
            Err(Failure::Rejected("no".to_string()))
        }
    }

    #[test]
    fn skipped() {
        let capability = Capability::from(Unavailable::Missing("mixed"));
        let game = crate::game::prisoners_dilemma().unwrap();
        assert!(!capability.is_available());
        assert_eq!(
            capability.solve(&game),
            crate::solver::Outcome::Skipped(Unavailable::Missing("mixed"))
        );
    }

    #[test]
    fn failed() {
        let capability = Capability::from(Box::new(Refusing) as Box<dyn Solver>);
        let game = crate::game::prisoners_dilemma().unwrap();
        assert!(capability.is_available());
        assert_eq!(capability.solve(&game).status(), "failed");
    }

    #[cfg(feature = "mixed")]
    #[test]
    fn probed() {
        assert!(Capability::probe().is_available());
    }

    #[cfg(not(feature = "mixed"))]
    #[test]
    fn probed() {
        assert!(!Capability::probe().is_available());
    }
}
