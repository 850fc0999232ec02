use tracing::{info, warn};

use crate::defs::PROPULSION_POWER;
use crate::env::Env;
use crate::state::{GameTime, Hour, TurnPhase, TurnRecord};

use super::{GameEngine, ResolutionError, resolution};

/// Turn state machine methods for GameEngine.
impl<'a> GameEngine<'a> {
    /// Hours elapsed since the game started.
    pub fn clock(&self) -> Hour {
        self.state.turn.clock
    }

    pub fn phase(&self) -> TurnPhase {
        self.state.turn.phase
    }

    pub fn time(&self, env: Env<'_>) -> GameTime {
        GameTime::new(self.state.turn.clock, env.config())
    }

    /// Resolves the current turn and returns to planning.
    ///
    /// The record uses the same projection shown during planning. A train
    /// without weight travels zero kilometres.
    pub fn end_turn(&mut self, env: Env<'_>) -> TurnRecord {
        self.state.turn.phase = TurnPhase::Resolution;

        let resource_changes = resolution::projected_resource_changes(self.state);
        let travel_distance = match resolution::travel_distance(
            resource_changes.get(PROPULSION_POWER),
            resolution::train_weight(self.state),
            env.config().propulsion_weight_factor,
        ) {
            Ok(distance) => distance,
            Err(ResolutionError::ZeroTrainWeight) => {
                warn!(hour = %self.state.turn.clock, "train has no weight, travelling 0 km");
                0
            }
        };

        let record = TurnRecord {
            hour: self.state.turn.clock,
            resource_changes,
            travel_distance,
        };

        self.state.turn.clock += 1;
        self.state.distance_travelled += travel_distance;
        self.state.history.push(record.clone());
        self.state.turn.phase = TurnPhase::Planning;

        info!(
            time = %self.time(env),
            distance = travel_distance,
            total_distance = self.state.distance_travelled,
            "turn resolved"
        );
        record
    }
}
