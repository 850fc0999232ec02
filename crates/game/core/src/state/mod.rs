//! Authoritative simulation state.
//!
//! This module owns the train (wagons, tiles, furniture), the crew and the
//! turn bookkeeping. Callers read it freely but mutate it through the engine.
pub mod error;
pub mod types;

pub use error::{FurnitureError, WagonError};
pub use types::{
    AvailableAction, Character, CharacterId, Crew, FurnitureId, FurnitureInstance, GameTime, Hour,
    ResolvedSpot, TileGrid, TileOccupation, Train, TurnPhase, TurnRecord, TurnState, Wagon,
    WagonId, WagonParts,
};

/// Canonical snapshot of the deterministic simulation state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    /// Base seed for every random draw. Set once, never modified.
    pub game_seed: u64,

    /// Shared id allocator for wagons, furniture and characters. Never reused.
    next_id: u32,

    pub turn: TurnState,
    pub train: Train,
    pub crew: Crew,

    /// One record per resolved turn, oldest first.
    pub history: Vec<TurnRecord>,
    /// Kilometres travelled over all resolved turns.
    pub distance_travelled: i64,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(game_seed: u64) -> Self {
        Self {
            game_seed,
            ..Self::default()
        }
    }

    /// Next unused id, `None` once the id space is exhausted. Not consumed
    /// until [`GameState::commit_id`].
    pub(crate) fn peek_id(&self) -> Option<u32> {
        self.next_id.checked_add(1).map(|_| self.next_id)
    }

    /// Marks the id returned by [`GameState::peek_id`] as used.
    pub(crate) fn commit_id(&mut self) {
        self.next_id = self.next_id.saturating_add(1);
    }

    /// Total weight in kilograms: wagon parts plus crew.
    pub fn train_weight(&self) -> u64 {
        self.train.wagons_weight() + self.crew.weight()
    }
}
