//! Nash equilibria of small two-player strategic-form games.
//!
//! Every game in the catalog is run through the same pipeline:
//! pure-strategy equilibria by best-response intersection, mixed-strategy
//! equilibria by support enumeration (when the capability is compiled in),
//! a text and JSON report, and one payoff heatmap per player.
//!
//! # Module Structure
//!
//! - `game` — payoff matrices, validated game instances, the catalog
//! - `equilibrium` — pure and mixed equilibrium types, the pure finder
//! - `solver` — the mixed-equilibrium capability and its probe
//! - `report` — text and JSON rendering of per-game results
//! - `heatmap` — PNG rendering of payoff matrices
//! - `simulate` — the sequential run over all games

pub mod equilibrium;
pub mod game;
pub mod heatmap;
pub mod report;
pub mod simulate;
pub mod solver;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Payoffs and expected values.
pub type Utility = f64;
/// Mixed strategy weights.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Arbitrary games produced for tests never exceed this many actions.
pub const ARBITRARY_ACTIONS: usize = 4;

// ============================================================================
// OUTPUT LOCATIONS
// ============================================================================
/// Directory receiving the report and heatmaps, relative to the working directory.
pub const RESULTS_DIR: &str = "results";
/// Plain-text equilibria report.
pub const REPORT_FILE: &str = "equilibria.txt";
/// Machine-readable companion of the text report.
pub const SUMMARY_FILE: &str = "equilibria.json";

// ============================================================================
// SUPPORT ENUMERATION
// Candidate supports grow as 2^m · 2^n, so games stay small.
// ============================================================================
/// Largest action count per player accepted by the mixed solver.
pub const MAX_ACTIONS: usize = 8;
/// Slack for strict positivity on the support and for best-response checks.
pub const SUPPORT_TOLERANCE: Probability = 1e-9;
/// Pivots smaller than this mark an indifference system as singular.
pub const PIVOT_TOLERANCE: f64 = 1e-12;
/// Decimal places kept when printing mixed strategies.
pub const MIXED_DECIMALS: usize = 3;

// ============================================================================
// HEATMAP GEOMETRY
// Pixel sizes. Glyphs are 5x7 bitmaps upscaled by HEATMAP_SCALE.
// ============================================================================
/// Side length of one payoff cell.
pub const HEATMAP_CELL: u32 = 96;
/// Integer upscaling applied to every glyph pixel.
pub const HEATMAP_SCALE: u32 = 2;
/// Blank border around the whole figure.
pub const HEATMAP_PADDING: u32 = 16;
/// Width of the colour bar to the right of the grid.
pub const HEATMAP_COLORBAR: u32 = 24;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "runtime")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")?;
    Ok(())
}
