//! Headless client for the train simulation.
//!
//! ```text
//! ClientConfig (env) ──→ ContentFactory ──→ Catalog + GameConfig + Scenario
//!                                               │
//!                                               ▼
//!                                         Simulation ──→ SimulationReport
//! ```
//!
//! The binary in `main.rs` wires these together; tests drive them directly.

pub mod bootstrap;
pub mod config;
pub mod logging;
pub mod report;

pub use bootstrap::Simulation;
pub use config::{ClientConfig, OutputFormat};
pub use report::SimulationReport;

use anyhow::Result;
use train_content::ContentFactory;

/// Loads content and the configured scenario into a ready simulation.
pub fn load_simulation(config: &ClientConfig) -> Result<Simulation> {
    let factory = match &config.data_dir {
        Some(dir) => ContentFactory::new(dir.clone()),
        None => ContentFactory::bundled(),
    };
    tracing::debug!(data_dir = %factory.data_dir().display(), "loading content");

    let catalog = factory.load_catalog()?;
    let game_config = factory.load_config()?;
    let scenario = factory.load_scenario(&config.scenario)?;
    Simulation::from_scenario(catalog, game_config, &scenario, config.seed)
}

/// Resolves the configured number of turns and summarises the run.
pub fn run(config: &ClientConfig) -> Result<SimulationReport> {
    let mut simulation = load_simulation(config)?;

    match simulation.projected_distance() {
        Ok(distance) => tracing::info!(
            time = %simulation.time(),
            distance,
            "projected distance for the first turn"
        ),
        Err(e) => tracing::warn!("{:#}", e),
    }

    let records = simulation.run(config.turns);
    Ok(SimulationReport::new(&config.scenario, &simulation, &records))
}
