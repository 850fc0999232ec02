//! Furniture catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use train_core::FurnitureDef;

use crate::loaders::{LoadResult, read_file};

/// Furniture catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FurnitureCatalog {
    pub furniture: Vec<FurnitureDef>,
}

/// Loader for furniture definitions from RON files.
///
/// Parsing only checks the shape of the data. Structural invariants are
/// enforced when the catalog is built.
pub struct FurnitureLoader;

impl FurnitureLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<FurnitureDef>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<FurnitureDef>> {
        let catalog: FurnitureCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse furniture catalog RON: {}", e))?;
        Ok(catalog.furniture)
    }
}
