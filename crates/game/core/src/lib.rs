//! Deterministic train simulation core.
//!
//! `train-core` defines the spatial model (wagons, tiles, furniture), crew
//! assignment rules and per-turn resolution of resources and travel distance.
//! All state mutation flows through [`engine::GameEngine`]; definitions are
//! read from a validated [`defs::Catalog`] injected through [`env::Env`].
pub mod config;
pub mod defs;
pub mod engine;
pub mod env;
pub mod error;
pub mod geometry;
pub mod state;

pub use config::GameConfig;
pub use defs::{
    Catalog, CatalogBuilder, CatalogError, FurnitureDef, InteractionSpotDef, OperatingModeDef,
    PROPULSION_POWER, ResourceChanges, ResourceDef, ResourceId, WagonLayoutDef, WagonPartDef,
    WagonPartKind,
};
pub use engine::{
    EngineError, FurniturePlacement, GameEngine, ResolutionError, WagonBlueprint,
};
pub use env::{Env, PcgRng, RngOracle};
pub use error::{ErrorSeverity, GameError};
pub use geometry::{
    Dimensions, Direction, GeometryError, Position, rotate_direction, translated_dimensions,
    translated_position,
};
pub use state::{
    AvailableAction, Character, CharacterId, Crew, FurnitureError, FurnitureId, FurnitureInstance,
    GameState, GameTime, Hour, ResolvedSpot, TileGrid, TileOccupation, Train, TurnPhase,
    TurnRecord, TurnState, Wagon, WagonError, WagonId, WagonParts,
};
