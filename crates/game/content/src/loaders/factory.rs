//! Content factory for building the catalog from data files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use train_core::{Catalog, GameConfig};

use crate::loaders::{
    ConfigLoader, FurnitureLoader, LoadResult, ResourceLoader, Scenario, ScenarioLoader,
    WagonLoader,
};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── resources.ron
/// ├── furniture.ron
/// ├── wagons.ron
/// └── scenarios/
///     └── starter.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load every catalog file and validate them together.
    ///
    /// Any invalid definition fails the whole load.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        let resources = ResourceLoader::load(&self.data_dir.join("resources.ron"))?;
        let furniture = FurnitureLoader::load(&self.data_dir.join("furniture.ron"))?;
        let wagons = WagonLoader::load(&self.data_dir.join("wagons.ron"))?;

        let catalog = Catalog::builder()
            .resources(resources)
            .furniture_defs(furniture)
            .wagon_layouts(wagons.layouts)
            .wagon_parts(wagons.parts)
            .build()
            .with_context(|| format!("invalid content in {}", self.data_dir.display()))?;

        tracing::info!(
            data_dir = %self.data_dir.display(),
            furniture = catalog.furniture_defs().count(),
            wagon_layouts = catalog.wagon_layouts().count(),
            "content catalog loaded"
        );
        Ok(catalog)
    }

    /// Load a scenario from `scenarios/{name}.ron`.
    pub fn load_scenario(&self, name: &str) -> LoadResult<Scenario> {
        let path = self.data_dir.join("scenarios").join(format!("{}.ron", name));
        ScenarioLoader::load(&path)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
