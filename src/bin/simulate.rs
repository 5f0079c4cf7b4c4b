//! Equilibrium Binary
//!
//! Runs every catalog game through the pure and mixed stages, then writes
//! `results/equilibria.txt`, its JSON companion, and two heatmaps per game.

use nashgrid::*;

fn main() -> anyhow::Result<()> {
    log()?;
    let games = game::catalog()?;
    let simulator = simulate::Simulator::probe();
    let summary = simulator.run(&games)?;
    log::info!("{:<32}{}", "finished", summary);
    log::info!("{:<32}{}", "results written to", simulator.dir().display());
    Ok(())
}
