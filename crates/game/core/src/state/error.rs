//! State mutation errors.
//!
//! Raised by furniture and wagon operations when the caller violates a
//! placement or assignment contract. A failing operation leaves the state
//! untouched.

use crate::defs::{CatalogError, WagonPartKind};
use crate::error::{ErrorSeverity, GameError};
use crate::geometry::{Dimensions, Position};
use crate::state::{CharacterId, FurnitureId};

/// Errors raised by operating-mode changes on a furniture instance.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FurnitureError {
    /// The definition has no operating modes to start in.
    #[error("furniture '{0}' has no operating modes")]
    NoOperatingModes(String),

    #[error("furniture '{furniture}' has no operating mode #{index}")]
    UnknownOperatingMode { furniture: String, index: usize },

    /// Assigned crew count does not match the mode requirement.
    #[error("operating mode '{mode}' requires {required} crew, got {assigned}")]
    CrewCountMismatch {
        mode: String,
        required: u32,
        assigned: usize,
    },

    #[error("{0} is listed more than once")]
    DuplicateCrewMember(CharacterId),
}

impl GameError for FurnitureError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoOperatingModes(_) => ErrorSeverity::Internal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoOperatingModes(_) => "FURNITURE_NO_OPERATING_MODES",
            Self::UnknownOperatingMode { .. } => "FURNITURE_UNKNOWN_OPERATING_MODE",
            Self::CrewCountMismatch { .. } => "FURNITURE_CREW_COUNT_MISMATCH",
            Self::DuplicateCrewMember(_) => "FURNITURE_DUPLICATE_CREW_MEMBER",
        }
    }
}

/// Errors raised by wagon construction, placement and occupation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WagonError {
    /// A footprint tile or interaction spot resolves outside the grid.
    #[error("{furniture} resolves tile {position} outside the {dimensions} wagon")]
    TileOutOfBounds {
        furniture: String,
        position: Position,
        dimensions: Dimensions,
    },

    #[error("{0} is not placed in this wagon")]
    UnknownFurniture(FurnitureId),

    #[error("part '{part}' is {actual}, expected {expected}")]
    PartKindMismatch {
        part: String,
        expected: WagonPartKind,
        actual: WagonPartKind,
    },

    #[error(transparent)]
    InvalidDefinition(#[from] CatalogError),

    #[error(transparent)]
    Furniture(#[from] FurnitureError),
}

impl GameError for WagonError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::TileOutOfBounds { .. }
            | Self::PartKindMismatch { .. }
            | Self::UnknownFurniture(_) => ErrorSeverity::Validation,
            Self::InvalidDefinition(err) => err.severity(),
            Self::Furniture(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TileOutOfBounds { .. } => "WAGON_TILE_OUT_OF_BOUNDS",
            Self::UnknownFurniture(_) => "WAGON_UNKNOWN_FURNITURE",
            Self::PartKindMismatch { .. } => "WAGON_PART_KIND_MISMATCH",
            Self::InvalidDefinition(err) => err.error_code(),
            Self::Furniture(err) => err.error_code(),
        }
    }
}
