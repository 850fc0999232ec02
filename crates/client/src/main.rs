//! Train simulation headless client.
//!
//! Loads content, builds the configured scenario, resolves a number of turns
//! and prints a report. See [`train_client::ClientConfig::from_env`] for the
//! environment variables.
//!
//! ```bash
//! SIM_SCENARIO=handcar_crew SIM_TURNS=24 SIM_OUTPUT=json cargo run -p train-client
//! ```

use anyhow::Result;
use train_client::{ClientConfig, OutputFormat, logging};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    logging::setup_logging()?;

    let config = ClientConfig::from_env();
    tracing::info!(
        scenario = %config.scenario,
        turns = config.turns,
        seed = config.seed,
        output = %config.output,
        "starting simulation"
    );

    let report = train_client::run(&config)?;
    match config.output {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    tracing::info!("simulation complete");
    Ok(())
}
