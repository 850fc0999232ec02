//! Data-driven content definitions and loaders.
//!
//! This crate ships the game's static content and the loaders that read it:
//! - Resources, furniture and wagon catalogs (RON)
//! - Game configuration (TOML)
//! - Starting scenarios (RON)
//!
//! Content is validated into a `train_core::Catalog` before any game starts
//! and never appears in game state except through shared definitions.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, FurnitureLoader, LoadResult, ResourceLoader, Scenario,
    ScenarioAssignment, ScenarioFurniture, ScenarioLoader, WagonLoader,
};
