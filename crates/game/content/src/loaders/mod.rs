//! Content loaders for reading game data from files.
//!
//! Each loader parses one RON/TOML file into `train-core` definitions. The
//! [`ContentFactory`] ties them to a data directory and assembles the
//! validated catalog.

pub mod config;
pub mod factory;
pub mod furniture;
pub mod resource;
pub mod scenario;
pub mod wagon;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use furniture::FurnitureLoader;
pub use resource::ResourceLoader;
pub use scenario::{Scenario, ScenarioAssignment, ScenarioFurniture, ScenarioLoader};
pub use wagon::WagonLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
