//! # Pattern Recipe
//!
//! Runs the pattern showcase and prints every demo's output.
//!
//! Which demos run is read from `PATTERN_RECIPE_PATTERNS`, `PATTERN_RECIPE_WORKERS` and
//! `PATTERN_RECIPE_YEAR`; see [`ShowcaseConfig`]. Log verbosity comes from `RUST_LOG`.

use pattern_recipe::error::PatternError;
use pattern_recipe::lifecycle::{setup_tracing, Showcase, ShowcaseConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), PatternError> {
    setup_tracing();

    let config = ShowcaseConfig::from_env()?;
    info!(patterns = ?config.patterns, workers = config.workers, "Starting pattern showcase");

    let showcase = Showcase::new(&config);
    for report in showcase.run().await? {
        println!("=== {} ===", report.pattern);
        for line in &report.lines {
            println!("{}", line);
        }
        println!();
    }

    info!("Showcase finished");
    Ok(())
}
