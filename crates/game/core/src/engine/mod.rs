//! Command execution and turn resolution.
//!
//! The [`GameEngine`] is the only writer of [`GameState`]. Every command either
//! completes or fails before touching the state; callers pull projections
//! (resource changes, weight, distance, tile occupation) after each command.

mod commands;
mod errors;
pub mod queries;
pub mod resolution;
mod turns;

pub use commands::{FurniturePlacement, WagonBlueprint};
pub use errors::{EngineError, ResolutionError};

use tracing::{debug, warn};

use crate::defs::ResourceChanges;
use crate::env::{Env, RollContext, compute_seed};
use crate::state::{
    AvailableAction, Character, CharacterId, FurnitureId, GameState, TileOccupation, Wagon,
    WagonId, WagonParts,
};

/// Applies player commands to a borrowed [`GameState`].
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Id the command will take if it succeeds. Commands commit it with
    /// `state.commit_id()` only once nothing else can fail.
    fn peek_id(&self) -> Result<u32, EngineError> {
        self.state.peek_id().ok_or(EngineError::IdSpaceExhausted)
    }

    fn seed(&self, subject: u32, context: RollContext) -> u64 {
        compute_seed(self.state.game_seed, self.state.turn.nonce, subject, context)
    }

    /// Assembles a wagon from catalog parts and couples it at the back.
    pub fn add_wagon(
        &mut self,
        env: Env<'_>,
        blueprint: &WagonBlueprint,
    ) -> Result<WagonId, EngineError> {
        let catalog = env.catalog();
        let layout = catalog.wagon_layout(&blueprint.layout)?;
        let parts = WagonParts {
            front_wheels: catalog.wagon_part(&blueprint.front_wheels)?,
            back_wheels: catalog.wagon_part(&blueprint.back_wheels)?,
            floor: catalog.wagon_part(&blueprint.floor)?,
            frame: blueprint
                .frame
                .as_deref()
                .map(|frame| catalog.wagon_part(frame))
                .transpose()?,
        };

        let id = WagonId(self.peek_id()?);
        let wagon = Wagon::new(id, layout, parts)?;
        self.state.commit_id();
        debug!(
            wagon = %id,
            layout = %wagon.layout().display_label(),
            weight = wagon.weight(),
            "wagon added"
        );
        self.state.train.add_wagon(wagon);
        Ok(id)
    }

    /// Places furniture in its inactive mode, then moves any character left
    /// standing on a blocked tile.
    pub fn place_furniture(
        &mut self,
        env: Env<'_>,
        placement: &FurniturePlacement,
    ) -> Result<FurnitureId, EngineError> {
        let def = env.catalog().furniture(&placement.furniture)?;
        if self.state.train.wagon(placement.wagon).is_none() {
            return Err(EngineError::UnknownWagon(placement.wagon));
        }

        let id = FurnitureId(self.peek_id()?);
        let wagon = self
            .state
            .train
            .wagon_mut(placement.wagon)
            .ok_or(EngineError::UnknownWagon(placement.wagon))?;
        let furniture = wagon.place_furniture(
            id,
            def,
            placement.origin,
            placement.rotation,
            placement.mirrored,
        )?;

        debug!(
            furniture = %id,
            def = %furniture.definition().def_name,
            wagon = %placement.wagon,
            origin = %placement.origin,
            rotation = %placement.rotation,
            mirrored = placement.mirrored,
            "furniture placed"
        );
        self.state.commit_id();

        self.relocate_blocked_characters(env);
        Ok(id)
    }

    /// Removes furniture, releases its crew, and relocates blocked characters.
    pub fn remove_furniture(&mut self, env: Env<'_>, id: FurnitureId) -> Result<(), EngineError> {
        let wagon_id = self
            .state
            .train
            .wagon_of(id)
            .ok_or(EngineError::UnknownFurniture(id))?;
        let wagon = self
            .state
            .train
            .wagon_mut(wagon_id)
            .ok_or(EngineError::UnknownWagon(wagon_id))?;

        let removed = wagon.remove_furniture(id)?;
        self.state.crew.release(removed.assigned_crew());
        debug!(furniture = %id, wagon = %wagon_id, "furniture removed");

        self.relocate_blocked_characters(env);
        Ok(())
    }

    /// Adds a crew member on a random empty tile of the train, facing a
    /// random direction.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoEmptyTile`] if the train has no empty tile.
    pub fn recruit_character(&mut self, env: Env<'_>) -> Result<CharacterId, EngineError> {
        let subject = self.state.crew.len() as u32;
        let (wagon, tile) = self
            .state
            .train
            .random_empty_tile(env.rng(), self.seed(subject, RollContext::Tile))
            .ok_or(EngineError::NoEmptyTile)?;
        let facing = env
            .rng()
            .pick_direction(self.seed(subject, RollContext::Facing));

        let id = CharacterId(self.peek_id()?);
        self.state.commit_id();
        let weight = env.config().crew_member_weight;
        self.state
            .crew
            .add(Character::new(id, wagon, tile, facing, weight));
        self.state.turn.nonce += 1;

        debug!(character = %id, wagon = %wagon, tile = %tile, facing = %facing, "character recruited");
        Ok(id)
    }

    /// Recruits the configured number of starting characters.
    pub fn recruit_starter_crew(&mut self, env: Env<'_>) -> Result<Vec<CharacterId>, EngineError> {
        (0..env.config().starter_crew_size)
            .map(|_| self.recruit_character(env))
            .collect()
    }

    /// Modes `candidate` could be assigned to on `furniture`. No side effects.
    pub fn available_actions(
        &self,
        furniture: FurnitureId,
        candidate: CharacterId,
    ) -> Result<Vec<AvailableAction>, EngineError> {
        queries::available_actions(self.state, furniture, candidate)
    }

    /// Sets the operating mode of `furniture` with `crew` assigned.
    ///
    /// Crew members are moved onto the interaction spots in declared order.
    /// A crew member taken from another furniture resets that furniture to
    /// its inactive mode. Crew dropped from this furniture are released.
    ///
    /// # Errors
    ///
    /// Fails without mutating if a character or the furniture is unknown, or
    /// the crew size does not match the mode.
    pub fn set_operating_mode(
        &mut self,
        furniture: FurnitureId,
        mode_index: usize,
        crew: Vec<CharacterId>,
    ) -> Result<(), EngineError> {
        if let Some(unknown) = crew.iter().find(|id| self.state.crew.get(**id).is_none()) {
            return Err(EngineError::UnknownCharacter(*unknown));
        }
        let wagon_id = self
            .state
            .train
            .wagon_of(furniture)
            .ok_or(EngineError::UnknownFurniture(furniture))?;

        let GameState {
            train,
            crew: roster,
            ..
        } = &mut *self.state;

        let wagon = train
            .wagon_mut(wagon_id)
            .ok_or(EngineError::UnknownWagon(wagon_id))?;
        let previous = wagon
            .find_furniture(furniture)
            .map(|instance| instance.assigned_crew().to_vec())
            .unwrap_or_default();
        let placements = wagon.set_operating_mode(furniture, mode_index, crew.clone())?;
        let mode_label = wagon
            .find_furniture(furniture)
            .map(|instance| instance.operating_mode().label.clone())
            .unwrap_or_default();

        let dropped: Vec<CharacterId> = previous
            .into_iter()
            .filter(|id| !crew.contains(id))
            .collect();
        roster.release(&dropped);

        let mut vacated = Vec::new();
        for id in &crew {
            let Some(other) = roster.get(*id).and_then(|character| character.assignment) else {
                continue;
            };
            if other != furniture && !vacated.contains(&other) {
                vacated.push(other);
            }
        }
        for other in vacated {
            if let Some(other_wagon) = train.wagon_of(other).and_then(|id| train.wagon_mut(id)) {
                let released = other_wagon.reset_furniture(other)?;
                roster.release(&released);
                debug!(furniture = %other, "furniture reset after crew reassignment");
            }
        }

        for (id, spot) in placements {
            if let Some(character) = roster.get_mut(id) {
                character.teleport(wagon_id, spot.position, spot.facing);
                character.assignment = Some(furniture);
            }
        }

        debug!(
            furniture = %furniture,
            mode = %mode_label,
            crew = ?crew,
            "operating mode set"
        );
        Ok(())
    }

    /// Moves every character standing on a Blocked tile to a random empty
    /// tile of the same wagon. Returns how many characters moved.
    pub fn relocate_blocked_characters(&mut self, env: Env<'_>) -> usize {
        let game_seed = self.state.game_seed;
        let nonce = self.state.turn.nonce;
        let GameState { train, crew, .. } = &mut *self.state;

        let mut moved = 0;
        for character in crew.iter_mut() {
            let Some(wagon) = train.wagon(character.wagon) else {
                continue;
            };
            if !wagon
                .occupation(character.tile)
                .is_some_and(TileOccupation::is_blocked)
            {
                continue;
            }

            let tile_seed = compute_seed(game_seed, nonce, character.id.0, RollContext::Tile);
            match wagon.random_empty_tile(env.rng(), tile_seed) {
                Some(tile) => {
                    let facing_seed =
                        compute_seed(game_seed, nonce, character.id.0, RollContext::Facing);
                    let facing = env.rng().pick_direction(facing_seed);
                    debug!(character = %character.id, from = %character.tile, to = %tile, "relocated blocked character");
                    character.teleport(wagon.id(), tile, facing);
                    moved += 1;
                }
                None => {
                    warn!(character = %character.id, wagon = %wagon.id(), "no empty tile to relocate blocked character");
                }
            }
        }

        if moved > 0 {
            self.state.turn.nonce += 1;
        }
        moved
    }

    /// Resource changes the next turn would apply.
    pub fn projected_resource_changes(&self) -> ResourceChanges {
        resolution::projected_resource_changes(self.state)
    }

    pub fn train_weight(&self) -> u64 {
        resolution::train_weight(self.state)
    }

    /// Kilometres the next turn would travel.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::ZeroTrainWeight`] for a weightless train.
    pub fn travel_distance(&self, env: Env<'_>) -> Result<i64, EngineError> {
        Ok(resolution::projected_travel_distance(
            self.state,
            env.config().propulsion_weight_factor,
        )?)
    }
}
