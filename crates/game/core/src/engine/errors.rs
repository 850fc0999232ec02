//! Error types surfaced by engine commands and projections.

use crate::defs::CatalogError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{CharacterId, FurnitureId, WagonError, WagonId};

/// Arithmetic hazards of turn resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolutionError {
    /// Distance is undefined for a train without weight.
    #[error("train weight is zero, travel distance is undefined")]
    ZeroTrainWeight,
}

impl GameError for ResolutionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroTrainWeight => "RESOLUTION_ZERO_TRAIN_WEIGHT",
        }
    }
}

/// Errors surfaced while executing a command through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Wagon(#[from] WagonError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("{0} is not part of the train")]
    UnknownWagon(WagonId),

    #[error("{0} is not placed on the train")]
    UnknownFurniture(FurnitureId),

    #[error("{0} is not part of the crew")]
    UnknownCharacter(CharacterId),

    /// Every tile of the train is occupied.
    #[error("no empty tile available")]
    NoEmptyTile,

    #[error("id space exhausted")]
    IdSpaceExhausted,
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Catalog(err) => err.severity(),
            Self::Wagon(err) => err.severity(),
            Self::Resolution(err) => err.severity(),
            Self::UnknownWagon(_) | Self::UnknownFurniture(_) | Self::UnknownCharacter(_) => {
                ErrorSeverity::Validation
            }
            Self::NoEmptyTile => ErrorSeverity::Recoverable,
            Self::IdSpaceExhausted => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Catalog(err) => err.error_code(),
            Self::Wagon(err) => err.error_code(),
            Self::Resolution(err) => err.error_code(),
            Self::UnknownWagon(_) => "ENGINE_UNKNOWN_WAGON",
            Self::UnknownFurniture(_) => "ENGINE_UNKNOWN_FURNITURE",
            Self::UnknownCharacter(_) => "ENGINE_UNKNOWN_CHARACTER",
            Self::NoEmptyTile => "ENGINE_NO_EMPTY_TILE",
            Self::IdSpaceExhausted => "ENGINE_ID_SPACE_EXHAUSTED",
        }
    }
}
