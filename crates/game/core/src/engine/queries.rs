//! Read-only queries over the game state.
//!
//! These need no mutable borrow, so callers holding a shared `&GameState`
//! get the same answers and errors as [`GameEngine`](super::GameEngine).

use crate::state::{AvailableAction, CharacterId, FurnitureId, GameState};

use super::EngineError;

/// Modes `candidate` could be assigned to on `furniture`.
///
/// # Errors
///
/// Returns [`EngineError::UnknownCharacter`] or
/// [`EngineError::UnknownFurniture`] for ids not in the state.
pub fn available_actions(
    state: &GameState,
    furniture: FurnitureId,
    candidate: CharacterId,
) -> Result<Vec<AvailableAction>, EngineError> {
    if state.crew.get(candidate).is_none() {
        return Err(EngineError::UnknownCharacter(candidate));
    }
    let instance = state
        .train
        .find_furniture(furniture)
        .ok_or(EngineError::UnknownFurniture(furniture))?;
    Ok(instance.available_actions(candidate))
}
