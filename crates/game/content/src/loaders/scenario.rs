//! Scenario loader.
//!
//! A scenario describes the starting train: wagons front to back, furniture
//! placed in them, how many crew to recruit, and which crew operate what.
//! Wagons, furniture and crew are referenced by their index in the scenario.

use std::path::Path;

use serde::{Deserialize, Serialize};
use train_core::{Direction, Position, WagonBlueprint};

use crate::loaders::{LoadResult, read_file};

/// Furniture to place in the wagon at index `wagon`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioFurniture {
    pub furniture: String,
    pub wagon: usize,
    pub origin: Position,
    #[serde(default)]
    pub rotation: Direction,
    #[serde(default)]
    pub mirrored: bool,
}

/// Initial operating mode of the furniture at index `furniture`, run by the
/// recruited crew members at the given indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioAssignment {
    pub furniture: usize,
    pub mode: usize,
    pub crew: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub wagons: Vec<WagonBlueprint>,
    #[serde(default)]
    pub furniture: Vec<ScenarioFurniture>,
    /// Crew to recruit; the configured starter crew size when absent.
    #[serde(default)]
    pub crew: Option<u32>,
    #[serde(default)]
    pub assignments: Vec<ScenarioAssignment>,
}

impl Scenario {
    /// Checks that every index points inside the scenario.
    pub fn validate(&self, crew_size: u32) -> LoadResult<()> {
        for (index, furniture) in self.furniture.iter().enumerate() {
            anyhow::ensure!(
                furniture.wagon < self.wagons.len(),
                "furniture #{index} ({}) references wagon #{} but the scenario has {} wagons",
                furniture.furniture,
                furniture.wagon,
                self.wagons.len()
            );
        }
        for (index, assignment) in self.assignments.iter().enumerate() {
            anyhow::ensure!(
                assignment.furniture < self.furniture.len(),
                "assignment #{index} references furniture #{} but the scenario places {}",
                assignment.furniture,
                self.furniture.len()
            );
            if let Some(member) = assignment
                .crew
                .iter()
                .find(|member| **member >= crew_size as usize)
            {
                anyhow::bail!(
                    "assignment #{index} references crew member #{member} but only {crew_size} are recruited"
                );
            }
        }
        Ok(())
    }
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Scenario> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"(
        name: "test",
        wagons: [
            (layout: "Short", front_wheels: "W", back_wheels: "W", floor: "F"),
        ],
        furniture: [
            (furniture: "HandcarEngine", wagon: 0, origin: (x: 1, y: 1)),
        ],
        crew: Some(2),
        assignments: [(furniture: 0, mode: 2, crew: [0, 1])],
    )"#;

    #[test]
    fn parses_defaults() {
        let scenario = ScenarioLoader::parse(SCENARIO).unwrap();
        assert_eq!(scenario.wagons[0].frame, None);
        assert_eq!(scenario.furniture[0].rotation, Direction::N);
        assert!(!scenario.furniture[0].mirrored);
        assert_eq!(scenario.crew, Some(2));
        scenario.validate(2).unwrap();
    }

    #[test]
    fn dangling_indices_are_rejected() {
        let mut scenario = ScenarioLoader::parse(SCENARIO).unwrap();
        assert!(scenario.validate(1).is_err());

        scenario.furniture[0].wagon = 3;
        let err = scenario.validate(2).unwrap_err();
        assert!(err.to_string().contains("references wagon #3"));
    }
}
