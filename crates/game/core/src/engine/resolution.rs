//! Pure turn-resolution arithmetic.
//!
//! The same functions back the planning preview and the end-of-turn record,
//! so a resolved turn always matches what was shown before ending it.

use crate::defs::{PROPULSION_POWER, ResourceChanges};
use crate::state::GameState;

use super::ResolutionError;

/// Sum of every furniture's active-mode outputs across the whole train.
pub fn projected_resource_changes(state: &GameState) -> ResourceChanges {
    state.train.resource_changes()
}

/// Wagon parts plus crew, in kilograms.
pub fn train_weight(state: &GameState) -> u64 {
    state.train_weight()
}

/// Kilometres travelled in one turn.
///
/// Computed as `propulsion_power * (weight_factor / train_weight)` with the
/// integer division performed first, so light remainders are truncated.
///
/// # Errors
///
/// Returns [`ResolutionError::ZeroTrainWeight`] when `train_weight` is zero.
pub fn travel_distance(
    propulsion_power: i32,
    train_weight: u64,
    weight_factor: u32,
) -> Result<i64, ResolutionError> {
    if train_weight == 0 {
        return Err(ResolutionError::ZeroTrainWeight);
    }
    let km_per_power = u64::from(weight_factor) / train_weight;
    // km_per_power <= u32::MAX
    Ok(i64::from(propulsion_power) * km_per_power as i64)
}

/// Travel distance of the current projection.
pub fn projected_travel_distance(
    state: &GameState,
    weight_factor: u32,
) -> Result<i64, ResolutionError> {
    let power = projected_resource_changes(state).get(PROPULSION_POWER);
    travel_distance(power, train_weight(state), weight_factor)
}
