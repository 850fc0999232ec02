//! Command payloads accepted by the engine.
//!
//! Definitions are referenced by name and resolved against the catalog when
//! the command runs.

use crate::geometry::{Direction, Position};
use crate::state::WagonId;

/// Parts and layout of a wagon to assemble.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WagonBlueprint {
    pub layout: String,
    pub front_wheels: String,
    pub back_wheels: String,
    pub floor: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub frame: Option<String>,
}

impl WagonBlueprint {
    /// Blueprint with the same wheel set front and back and no frame.
    pub fn new(layout: impl Into<String>, wheels: impl Into<String>, floor: impl Into<String>) -> Self {
        let wheels = wheels.into();
        Self {
            layout: layout.into(),
            front_wheels: wheels.clone(),
            back_wheels: wheels,
            floor: floor.into(),
            frame: None,
        }
    }

    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.frame = Some(frame.into());
        self
    }
}

/// Where and how to place a furniture definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FurniturePlacement {
    pub furniture: String,
    pub wagon: WagonId,
    pub origin: Position,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotation: Direction,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mirrored: bool,
}

impl FurniturePlacement {
    pub fn new(furniture: impl Into<String>, wagon: WagonId, origin: Position) -> Self {
        Self {
            furniture: furniture.into(),
            wagon,
            origin,
            rotation: Direction::N,
            mirrored: false,
        }
    }

    pub fn rotated(mut self, rotation: Direction) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn mirrored(mut self, mirrored: bool) -> Self {
        self.mirrored = mirrored;
        self
    }
}
