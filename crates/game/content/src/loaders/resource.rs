//! Resource catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use train_core::ResourceDef;

use crate::loaders::{LoadResult, read_file};

/// Resource catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceCatalog {
    pub resources: Vec<ResourceDef>,
}

/// Loader for resource definitions from RON files.
pub struct ResourceLoader;

impl ResourceLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<ResourceDef>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ResourceDef>> {
        let catalog: ResourceCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse resource catalog RON: {}", e))?;
        Ok(catalog.resources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_optional_fields() {
        let resources = ResourceLoader::parse(
            r#"(
                resources: [
                    (id: "PropulsionPower", label: "propulsion power", abbreviation: "PP"),
                    (id: "Coal", label: "coal"),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].abbreviation, "PP");
        assert_eq!(resources[1].id.as_str(), "Coal");
        assert!(resources[1].description.is_empty());
    }
}
