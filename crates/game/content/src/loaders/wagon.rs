//! Wagon layouts and parts loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use train_core::{WagonLayoutDef, WagonPartDef};

use crate::loaders::{LoadResult, read_file};

/// Wagon catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WagonCatalog {
    #[serde(default)]
    pub layouts: Vec<WagonLayoutDef>,
    #[serde(default)]
    pub parts: Vec<WagonPartDef>,
}

/// Loader for wagon layouts and parts from RON files.
pub struct WagonLoader;

impl WagonLoader {
    pub fn load(path: &Path) -> LoadResult<WagonCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<WagonCatalog> {
        ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse wagon catalog RON: {}", e))
    }
}
