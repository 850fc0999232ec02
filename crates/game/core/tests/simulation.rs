mod common;

use common::{HANDCAR, catalog, wagon};
use train_core::engine::resolution;
use train_core::{
    Direction, EngineError, Env, FurniturePlacement, GameConfig, GameEngine, GameError, GameState,
    Hour, PROPULSION_POWER, PcgRng, Position, ResourceChanges, TileOccupation, TurnPhase,
    WagonBlueprint, WagonId,
};

struct Fixture {
    catalog: train_core::Catalog,
    config: GameConfig,
    rng: PcgRng,
}

impl Fixture {
    fn new() -> Self {
        Self {
            catalog: catalog(),
            config: GameConfig::default(),
            rng: PcgRng,
        }
    }

    fn env(&self) -> Env<'_> {
        Env::new(&self.catalog, &self.config, &self.rng)
    }
}

fn handcar_at(wagon: WagonId, x: i32, y: i32) -> FurniturePlacement {
    FurniturePlacement::new(HANDCAR, wagon, Position::new(x, y))
}

#[test]
fn handcar_on_short_wagon_blocks_footprint_and_marks_spots() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let mut state = GameState::with_seed(7);
    let mut engine = GameEngine::new(&mut state);

    let wagon_id = engine.add_wagon(env, &wagon("Short")).unwrap();
    engine
        .place_furniture(env, &handcar_at(wagon_id, 1, 1))
        .unwrap();

    let wagon = engine.state().train.wagon(wagon_id).unwrap();
    for x in 1..=4 {
        for y in 1..=4 {
            assert_eq!(
                wagon.occupation(Position::new(x, y)),
                Some(TileOccupation::Blocked),
                "({x}, {y})"
            );
        }
    }
    assert_eq!(
        wagon.occupation(Position::new(0, 2)),
        Some(TileOccupation::InteractionSpot {
            facing: Direction::E
        })
    );
    assert_eq!(
        wagon.occupation(Position::new(5, 3)),
        Some(TileOccupation::InteractionSpot {
            facing: Direction::W
        })
    );
    assert_eq!(wagon.tiles().empty_tiles().count(), 72 - 16 - 2);
}

#[test]
fn operating_modes_drive_projected_propulsion() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let mut state = GameState::with_seed(1);
    let mut engine = GameEngine::new(&mut state);

    let wagon_id = engine.add_wagon(env, &wagon("Short")).unwrap();
    let handcar = engine
        .place_furniture(env, &handcar_at(wagon_id, 1, 1))
        .unwrap();
    let crew = engine.recruit_starter_crew(env).unwrap();
    assert_eq!(crew.len(), 3);
    assert!(engine.projected_resource_changes().is_empty());

    engine
        .set_operating_mode(handcar, 1, vec![crew[0]])
        .unwrap();
    assert_eq!(
        engine.projected_resource_changes(),
        ResourceChanges::new().with(PROPULSION_POWER, 1)
    );

    engine
        .set_operating_mode(handcar, 2, vec![crew[0], crew[1]])
        .unwrap();
    assert_eq!(
        engine.projected_resource_changes(),
        ResourceChanges::new().with(PROPULSION_POWER, 3)
    );

    let first = engine.state().crew.get(crew[0]).unwrap();
    assert_eq!((first.tile, first.facing), (Position::new(0, 2), Direction::E));
    assert_eq!(first.assignment, Some(handcar));
    let second = engine.state().crew.get(crew[1]).unwrap();
    assert_eq!((second.tile, second.facing), (Position::new(5, 3), Direction::W));
}

#[test]
fn starter_train_travels_by_truncated_weight_ratio() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let mut state = GameState::with_seed(3);
    let mut engine = GameEngine::new(&mut state);

    let wagon_id = engine.add_wagon(env, &wagon("Short")).unwrap();
    let handcar = engine
        .place_furniture(env, &handcar_at(wagon_id, 1, 1))
        .unwrap();
    let crew = engine.recruit_starter_crew(env).unwrap();

    // 60 + 60 + 450 + 3 * 80
    assert_eq!(engine.train_weight(), 810);
    assert_eq!(engine.travel_distance(env), Ok(0));

    engine
        .set_operating_mode(handcar, 1, vec![crew[2]])
        .unwrap();
    assert_eq!(engine.travel_distance(env), Ok(12));

    engine
        .set_operating_mode(handcar, 2, vec![crew[0], crew[2]])
        .unwrap();
    assert_eq!(engine.travel_distance(env), Ok(36));
}

#[test]
fn reference_distances() {
    let factor = GameConfig::DEFAULT_PROPULSION_WEIGHT_FACTOR;
    assert_eq!(resolution::travel_distance(1, 10_000, factor), Ok(1));
    assert_eq!(resolution::travel_distance(3, 5_000, factor), Ok(6));
}

#[test]
fn empty_train_distance_is_guarded() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let mut state = GameState::new();
    let mut engine = GameEngine::new(&mut state);

    let err = engine.travel_distance(env).unwrap_err();
    assert_eq!(err.error_code(), "RESOLUTION_ZERO_TRAIN_WEIGHT");

    let record = engine.end_turn(env);
    assert_eq!(record.travel_distance, 0);
    assert_eq!(engine.clock(), Hour(1));
}

#[test]
fn ending_turns_advances_the_clock_by_one_hour_each() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let mut state = GameState::with_seed(11);
    let mut engine = GameEngine::new(&mut state);

    let wagon_id = engine.add_wagon(env, &wagon("Short")).unwrap();
    let handcar = engine
        .place_furniture(env, &handcar_at(wagon_id, 1, 1))
        .unwrap();
    let crew = engine.recruit_starter_crew(env).unwrap();
    engine
        .set_operating_mode(handcar, 2, vec![crew[0], crew[1]])
        .unwrap();

    let preview = engine.projected_resource_changes();
    let preview_distance = engine.travel_distance(env).unwrap();

    let first = engine.end_turn(env);
    assert_eq!(first.hour, Hour(0));
    assert_eq!(first.resource_changes, preview);
    assert_eq!(first.travel_distance, preview_distance);
    assert_eq!(engine.clock(), Hour(1));
    assert_eq!(engine.phase(), TurnPhase::Planning);

    let second = engine.end_turn(env);
    assert_eq!(second.hour, Hour(1));
    assert_eq!(engine.clock(), Hour(2));
    assert_eq!(engine.time(env).absolute_label(), "Day 1, 10:00");

    assert_eq!(state.history.len(), 2);
    assert_eq!(state.distance_travelled, 2 * preview_distance);
}

#[test]
fn recompute_is_idempotent() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let mut state = GameState::new();
    let mut engine = GameEngine::new(&mut state);

    let wagon_id = engine.add_wagon(env, &wagon("Standard")).unwrap();
    engine
        .place_furniture(env, &handcar_at(wagon_id, 1, 1))
        .unwrap();
    engine
        .place_furniture(
            env,
            &handcar_at(wagon_id, 10, 1).rotated(Direction::E).mirrored(true),
        )
        .unwrap();

    let wagon = state.train.wagon_mut(wagon_id).unwrap();
    let before = wagon.tiles().clone();
    wagon.recompute_occupation().unwrap();
    let once = wagon.tiles().clone();
    wagon.recompute_occupation().unwrap();

    assert_eq!(before, once);
    assert_eq!(once, *wagon.tiles());
}

#[test]
fn interaction_spots_are_never_blocked() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let mut state = GameState::new();
    let mut engine = GameEngine::new(&mut state);

    let wagon_id = engine.add_wagon(env, &wagon("Standard")).unwrap();
    engine
        .place_furniture(env, &handcar_at(wagon_id, 1, 1))
        .unwrap();
    // footprint covers (5..9, 1..5), including the first handcar's W spot at (5, 3)
    engine
        .place_furniture(env, &handcar_at(wagon_id, 5, 1))
        .unwrap();

    let wagon = engine.state().train.wagon(wagon_id).unwrap();
    for furniture in wagon.furniture() {
        for spot in furniture.interaction_spots() {
            assert!(matches!(
                wagon.occupation(spot.position),
                Some(TileOccupation::InteractionSpot { .. })
            ));
        }
    }
}

#[test]
fn projections_add_up_across_furniture() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let mut state = GameState::with_seed(5);
    let mut engine = GameEngine::new(&mut state);

    let wagon_id = engine.add_wagon(env, &wagon("Standard")).unwrap();
    let left = engine
        .place_furniture(env, &handcar_at(wagon_id, 1, 1))
        .unwrap();
    let right = engine
        .place_furniture(env, &handcar_at(wagon_id, 8, 1))
        .unwrap();
    let crew = engine.recruit_starter_crew(env).unwrap();

    engine.set_operating_mode(left, 1, vec![crew[0]]).unwrap();
    engine
        .set_operating_mode(right, 2, vec![crew[1], crew[2]])
        .unwrap();

    assert_eq!(engine.projected_resource_changes().get(PROPULSION_POWER), 4);
}

#[test]
fn mismatched_crew_is_rejected_without_side_effects() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let mut state = GameState::with_seed(9);
    let mut engine = GameEngine::new(&mut state);

    let wagon_id = engine.add_wagon(env, &wagon("Short")).unwrap();
    let handcar = engine
        .place_furniture(env, &handcar_at(wagon_id, 1, 1))
        .unwrap();
    let crew = engine.recruit_starter_crew(env).unwrap();
    let before = engine.state().clone();

    let err = engine
        .set_operating_mode(handcar, 2, vec![crew[0]])
        .unwrap_err();
    assert_eq!(err.error_code(), "FURNITURE_CREW_COUNT_MISMATCH");
    assert_eq!(*engine.state(), before);
}

#[test]
fn available_actions_offer_the_next_mode() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let mut state = GameState::with_seed(2);
    let mut engine = GameEngine::new(&mut state);

    let wagon_id = engine.add_wagon(env, &wagon("Short")).unwrap();
    let handcar = engine
        .place_furniture(env, &handcar_at(wagon_id, 1, 1))
        .unwrap();
    let crew = engine.recruit_starter_crew(env).unwrap();

    let actions = engine.available_actions(handcar, crew[0]).unwrap();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].assign_label, "Operate");
    engine
        .set_operating_mode(handcar, actions[0].mode_index, actions[0].crew.clone())
        .unwrap();

    let actions = engine.available_actions(handcar, crew[1]).unwrap();
    assert_eq!(actions[0].mode_label, "Two-Person Operation");
    assert_eq!(actions[0].crew, vec![crew[0], crew[1]]);

    // a third operator fits no mode
    engine
        .set_operating_mode(handcar, actions[0].mode_index, actions[0].crew.clone())
        .unwrap();
    assert!(engine.available_actions(handcar, crew[2]).unwrap().is_empty());
}

#[test]
fn reassigning_crew_resets_their_previous_furniture() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let mut state = GameState::with_seed(4);
    let mut engine = GameEngine::new(&mut state);

    let wagon_id = engine.add_wagon(env, &wagon("Standard")).unwrap();
    let left = engine
        .place_furniture(env, &handcar_at(wagon_id, 1, 1))
        .unwrap();
    let right = engine
        .place_furniture(env, &handcar_at(wagon_id, 8, 1))
        .unwrap();
    let crew = engine.recruit_starter_crew(env).unwrap();

    engine
        .set_operating_mode(left, 2, vec![crew[0], crew[1]])
        .unwrap();
    engine.set_operating_mode(right, 1, vec![crew[1]]).unwrap();

    let state = engine.state();
    let left_instance = state.train.find_furniture(left).unwrap();
    assert_eq!(left_instance.mode_index(), 0);
    assert!(left_instance.assigned_crew().is_empty());
    assert_eq!(state.crew.get(crew[0]).unwrap().assignment, None);
    assert_eq!(state.crew.get(crew[1]).unwrap().assignment, Some(right));
    assert_eq!(state.crew.get(crew[1]).unwrap().tile, Position::new(7, 2));
    assert_eq!(engine.projected_resource_changes().get(PROPULSION_POWER), 1);
}

#[test]
fn placing_furniture_moves_characters_off_blocked_tiles() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let mut state = GameState::with_seed(6);
    let mut engine = GameEngine::new(&mut state);

    let wagon_id = engine.add_wagon(env, &wagon("Short")).unwrap();
    let crew = engine.recruit_character(env).unwrap();

    drop(engine);
    state.crew.get_mut(crew).unwrap().tile = Position::new(2, 2);
    let mut engine = GameEngine::new(&mut state);

    engine
        .place_furniture(env, &handcar_at(wagon_id, 1, 1))
        .unwrap();

    let character = engine.state().crew.get(crew).unwrap();
    let wagon = engine.state().train.wagon(wagon_id).unwrap();
    assert_eq!(wagon.occupation(character.tile), Some(TileOccupation::Empty));
}

#[test]
fn removing_furniture_releases_its_crew() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let mut state = GameState::with_seed(8);
    let mut engine = GameEngine::new(&mut state);

    let wagon_id = engine.add_wagon(env, &wagon("Short")).unwrap();
    let handcar = engine
        .place_furniture(env, &handcar_at(wagon_id, 1, 1))
        .unwrap();
    let crew = engine.recruit_character(env).unwrap();
    engine.set_operating_mode(handcar, 1, vec![crew]).unwrap();

    engine.remove_furniture(env, handcar).unwrap();

    assert_eq!(engine.state().crew.get(crew).unwrap().assignment, None);
    assert!(engine.projected_resource_changes().is_empty());
    assert_eq!(
        engine.remove_furniture(env, handcar),
        Err(EngineError::UnknownFurniture(handcar))
    );
}

#[test]
fn unknown_definitions_and_out_of_bounds_placements_fail() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let mut state = GameState::new();
    let mut engine = GameEngine::new(&mut state);
    let wagon_id = engine.add_wagon(env, &wagon("Short")).unwrap();

    let err = engine
        .place_furniture(env, &FurniturePlacement::new("Piano", wagon_id, Position::ORIGIN))
        .unwrap_err();
    assert_eq!(err.error_code(), "CATALOG_UNKNOWN_FURNITURE");

    // the E-facing spot at local (-1, 1) lands at x = -1
    let err = engine
        .place_furniture(env, &handcar_at(wagon_id, 0, 1))
        .unwrap_err();
    assert_eq!(err.error_code(), "WAGON_TILE_OUT_OF_BOUNDS");
    assert!(engine.state().train.wagon(wagon_id).unwrap().furniture().is_empty());
}

#[test]
fn failed_commands_leave_the_state_untouched() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let mut state = GameState::with_seed(5);
    let mut engine = GameEngine::new(&mut state);
    let wagon_id = engine.add_wagon(env, &wagon("Short")).unwrap();
    engine.recruit_starter_crew(env).unwrap();
    let before = engine.state().clone();

    let err = engine
        .place_furniture(env, &handcar_at(wagon_id, 0, 1))
        .unwrap_err();
    assert_eq!(err.error_code(), "WAGON_TILE_OUT_OF_BOUNDS");
    assert_eq!(engine.state(), &before);

    let mismatched = WagonBlueprint::new("Short", "WoodenSpokedWheels", "WoodenFloor")
        .with_frame("WoodenSpokedWheels");
    let err = engine.add_wagon(env, &mismatched).unwrap_err();
    assert_eq!(err.error_code(), "WAGON_PART_KIND_MISMATCH");
    assert_eq!(engine.state(), &before);

    // ids are only consumed by commands that succeed
    let mut replay = before.clone();
    let expected = GameEngine::new(&mut replay)
        .place_furniture(env, &handcar_at(wagon_id, 1, 1))
        .unwrap();
    let handcar = engine
        .place_furniture(env, &handcar_at(wagon_id, 1, 1))
        .unwrap();
    assert_eq!(handcar, expected);
}

#[test]
fn framed_wagon_weighs_its_frame() {
    let fixture = Fixture::new();
    let env = fixture.env();
    let mut state = GameState::new();
    let mut engine = GameEngine::new(&mut state);

    let framed = wagon("Short").with_frame("IronFrame");
    let wagon_id = engine.add_wagon(env, &framed).unwrap();

    let frame = engine.state().train.wagon(wagon_id).unwrap().parts().frame.clone();
    assert_eq!(frame.map(|part| part.weight), Some(300));
    assert_eq!(engine.train_weight(), 870);
}

#[test]
fn recruitment_is_deterministic_per_seed() {
    let fixture = Fixture::new();
    let env = fixture.env();

    let run = |seed: u64| {
        let mut state = GameState::with_seed(seed);
        let mut engine = GameEngine::new(&mut state);
        engine.add_wagon(env, &wagon("Short")).unwrap();
        engine.recruit_starter_crew(env).unwrap();
        state.crew.clone()
    };

    assert_eq!(run(42), run(42));
}
