//! Builds a running simulation from loaded content and a scenario.

use anyhow::{Context, Result};
use train_content::Scenario;
use train_core::engine::{queries, resolution};
use train_core::{
    AvailableAction, Catalog, CharacterId, EngineError, Env, FurnitureId, FurniturePlacement,
    GameConfig, GameEngine, GameState, GameTime, PcgRng, TurnRecord, WagonId,
};

/// Owns everything a game needs: the validated catalog, tuning, the RNG and
/// the authoritative state. Commands borrow them into a [`GameEngine`].
#[derive(Debug)]
pub struct Simulation {
    catalog: Catalog,
    config: GameConfig,
    rng: PcgRng,
    state: GameState,
}

impl Simulation {
    /// Empty train with the given seed.
    pub fn new(catalog: Catalog, config: GameConfig, seed: u64) -> Self {
        Self {
            catalog,
            config,
            rng: PcgRng,
            state: GameState::with_seed(seed),
        }
    }

    /// Assembles the scenario's wagons, furniture, crew and assignments in
    /// that order.
    pub fn from_scenario(
        catalog: Catalog,
        config: GameConfig,
        scenario: &Scenario,
        seed: u64,
    ) -> Result<Self> {
        let crew_size = scenario.crew.unwrap_or(config.starter_crew_size);
        scenario
            .validate(crew_size)
            .with_context(|| format!("scenario '{}' is inconsistent", scenario.name))?;

        let mut simulation = Self::new(catalog, config, seed);
        let env = Env::new(&simulation.catalog, &simulation.config, &simulation.rng);
        let mut engine = GameEngine::new(&mut simulation.state);

        let wagons = scenario
            .wagons
            .iter()
            .enumerate()
            .map(|(index, blueprint)| {
                engine
                    .add_wagon(env, blueprint)
                    .with_context(|| format!("wagon #{index} ({})", blueprint.layout))
            })
            .collect::<Result<Vec<WagonId>>>()?;

        let mut furniture = Vec::with_capacity(scenario.furniture.len());
        for (index, entry) in scenario.furniture.iter().enumerate() {
            let placement = FurniturePlacement::new(
                entry.furniture.clone(),
                wagons[entry.wagon],
                entry.origin,
            )
            .rotated(entry.rotation)
            .mirrored(entry.mirrored);
            let id = engine
                .place_furniture(env, &placement)
                .with_context(|| format!("furniture #{index} ({})", entry.furniture))?;
            furniture.push(id);
        }

        let crew = (0..crew_size)
            .map(|_| engine.recruit_character(env))
            .collect::<Result<Vec<CharacterId>, EngineError>>()
            .context("recruiting the starting crew")?;

        for (index, assignment) in scenario.assignments.iter().enumerate() {
            let members = assignment.crew.iter().map(|member| crew[*member]).collect();
            engine
                .set_operating_mode(furniture[assignment.furniture], assignment.mode, members)
                .with_context(|| format!("assignment #{index}"))?;
        }

        tracing::info!(
            scenario = %scenario.name,
            seed,
            wagons = wagons.len(),
            furniture = furniture.len(),
            crew = crew.len(),
            weight = engine.train_weight(),
            "scenario loaded"
        );
        Ok(simulation)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn time(&self) -> GameTime {
        GameTime::new(self.state.turn.clock, &self.config)
    }

    /// Distance the train would travel if the turn ended now.
    pub fn projected_distance(&self) -> Result<i64> {
        resolution::projected_travel_distance(&self.state, self.config.propulsion_weight_factor)
            .context("projecting travel distance")
    }

    pub fn available_actions(
        &self,
        furniture: FurnitureId,
        candidate: CharacterId,
    ) -> Result<Vec<AvailableAction>> {
        Ok(queries::available_actions(&self.state, furniture, candidate)?)
    }

    /// Runs a command against the engine with the simulation's environment.
    pub fn command<T>(
        &mut self,
        command: impl FnOnce(&mut GameEngine<'_>, Env<'_>) -> Result<T, EngineError>,
    ) -> Result<T> {
        let env = Env::new(&self.catalog, &self.config, &self.rng);
        let mut engine = GameEngine::new(&mut self.state);
        Ok(command(&mut engine, env)?)
    }

    pub fn end_turn(&mut self) -> TurnRecord {
        let env = Env::new(&self.catalog, &self.config, &self.rng);
        GameEngine::new(&mut self.state).end_turn(env)
    }

    /// Resolves `turns` hours in a row.
    pub fn run(&mut self, turns: u32) -> Vec<TurnRecord> {
        (0..turns).map(|_| self.end_turn()).collect()
    }
}

#[cfg(test)]
mod tests {
    use train_content::ContentFactory;

    use super::*;

    fn bundled(name: &str) -> Simulation {
        let factory = ContentFactory::bundled();
        let scenario = factory.load_scenario(name).unwrap();
        Simulation::from_scenario(
            factory.load_catalog().unwrap(),
            factory.load_config().unwrap(),
            &scenario,
            7,
        )
        .unwrap()
    }

    #[test]
    fn starter_scenario_builds_an_idle_train() {
        let simulation = bundled("starter");
        assert_eq!(simulation.state().train.wagons().len(), 1);
        assert_eq!(simulation.state().crew.len(), 3);
        assert_eq!(simulation.state().train_weight(), 810);
        assert_eq!(simulation.projected_distance().unwrap(), 0);
    }

    #[test]
    fn command_errors_surface_through_anyhow() {
        let mut simulation = bundled("starter");
        let err = simulation
            .command(|engine, _| engine.set_operating_mode(FurnitureId(999), 1, Vec::new()))
            .unwrap_err();
        assert!(err.downcast_ref::<EngineError>().is_some());
    }

    #[test]
    fn unknown_candidate_keeps_the_engine_error() {
        let simulation = bundled("starter");
        let err = simulation
            .available_actions(FurnitureId(1), CharacterId(99))
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<EngineError>(),
            Some(&EngineError::UnknownCharacter(CharacterId(99)))
        );
    }

    #[test]
    fn dangling_scenario_index_is_rejected_before_building() {
        let factory = ContentFactory::bundled();
        let mut scenario = factory.load_scenario("handcar_crew").unwrap();
        scenario.assignments[0].crew = vec![0, 5];

        let err = Simulation::from_scenario(
            factory.load_catalog().unwrap(),
            factory.load_config().unwrap(),
            &scenario,
            0,
        )
        .unwrap_err();
        assert!(err.to_string().contains("inconsistent"));
    }
}
