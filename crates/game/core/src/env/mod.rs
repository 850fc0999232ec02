//! Read-only collaborators injected into the engine.
//!
//! The [`Env`] bundles the definition catalog, the tunable configuration and
//! the random source so commands never reach for global state.
mod rng;

pub use rng::{PcgRng, RngOracle, RollContext, compute_seed};

use crate::config::GameConfig;
use crate::defs::Catalog;

/// Borrowed view of everything the engine reads but never mutates.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    catalog: &'a Catalog,
    config: &'a GameConfig,
    rng: &'a dyn RngOracle,
}

impl<'a> Env<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a GameConfig, rng: &'a dyn RngOracle) -> Self {
        Self {
            catalog,
            config,
            rng,
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }
}

impl core::fmt::Debug for Env<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Env")
            .field("catalog", self.catalog)
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
