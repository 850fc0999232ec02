//! Headless client configuration loaded from the environment.
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// How the final report is written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Settings for one headless simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Content directory; the data bundled with `train-content` when unset.
    pub data_dir: Option<PathBuf>,
    pub scenario: String,
    /// Turns to resolve before printing the report.
    pub turns: u32,
    pub seed: u64,
    pub output: OutputFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            scenario: "starter".to_string(),
            turns: 8,
            seed: 0,
            output: OutputFormat::Text,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CONTENT_DATA_DIR` - Content directory (default: bundled data)
    /// - `SIM_SCENARIO` - Scenario name under `scenarios/` (default: starter)
    /// - `SIM_TURNS` - Turns to resolve (default: 8)
    /// - `SIM_SEED` - Game seed (default: 0)
    /// - `SIM_OUTPUT` - `text` or `json` (default: text)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.data_dir = env::var("CONTENT_DATA_DIR").ok().map(PathBuf::from);

        if let Some(scenario) = env::var("SIM_SCENARIO")
            .ok()
            .filter(|scenario| !scenario.trim().is_empty())
        {
            config.scenario = scenario.trim().to_string();
        }

        if let Some(turns) = read_env::<u32>("SIM_TURNS") {
            config.turns = turns;
        }

        if let Some(seed) = read_env::<u64>("SIM_SEED") {
            config.seed = seed;
        }

        if let Some(output) = read_env::<OutputFormat>("SIM_OUTPUT") {
            config.output = output;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!(" text ".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn defaults_run_the_starter_scenario() {
        let config = ClientConfig::default();
        assert_eq!(config.scenario, "starter");
        assert_eq!(config.turns, 8);
        assert_eq!(config.output, OutputFormat::Text);
        assert!(config.data_dir.is_none());
    }
}
