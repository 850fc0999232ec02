use train_client::{ClientConfig, OutputFormat, Simulation, run};
use train_content::ContentFactory;
use train_core::{CharacterId, Direction, FurnitureId, PROPULSION_POWER, Position};

fn config(scenario: &str, turns: u32) -> ClientConfig {
    ClientConfig {
        scenario: scenario.to_string(),
        turns,
        seed: 42,
        output: OutputFormat::Json,
        ..ClientConfig::default()
    }
}

#[test]
fn idle_starter_train_stays_put() {
    let report = run(&config("starter", 3)).unwrap();

    assert_eq!(report.train_weight, 810);
    assert_eq!(report.crew, 3);
    assert_eq!(report.furniture[0].mode, "Inactive");
    assert!(report.turns.iter().all(|turn| turn.travel_distance == 0));
    assert_eq!(report.total_distance, 0);
    assert_eq!(report.now, "Day 1, 11:00");
    assert_eq!(report.elapsed, "03:00");
}

#[test]
fn two_person_handcar_moves_thirty_six_km_per_hour() {
    let report = run(&config("handcar_crew", 2)).unwrap();

    assert_eq!(report.furniture[0].mode, "Two-Person Operation");
    assert_eq!(report.furniture[0].crew.len(), 2);
    assert_eq!(report.turns.len(), 2);
    assert_eq!(report.turns[0].time, "Day 1, 08:00");
    assert_eq!(report.turns[0].resource_changes.get(PROPULSION_POWER), 3);
    assert_eq!(report.turns[0].travel_distance, 36);
    assert_eq!(report.total_distance, 72);
    assert_eq!(report.now, "Day 1, 10:00");
}

#[test]
fn assigned_crew_stand_on_the_handcar_spots() {
    let factory = ContentFactory::bundled();
    let simulation = Simulation::from_scenario(
        factory.load_catalog().unwrap(),
        factory.load_config().unwrap(),
        &factory.load_scenario("handcar_crew").unwrap(),
        42,
    )
    .unwrap();

    let state = simulation.state();
    let handcar = state.train.find_furniture(FurnitureId(1)).unwrap();
    let crew = handcar.assigned_crew();
    assert_eq!(crew, [CharacterId(2), CharacterId(3)]);

    let first = state.crew.get(crew[0]).unwrap();
    assert_eq!((first.tile, first.facing), (Position::new(0, 2), Direction::E));
    let second = state.crew.get(crew[1]).unwrap();
    assert_eq!((second.tile, second.facing), (Position::new(5, 3), Direction::W));

    let idle = state.crew.get(CharacterId(4)).unwrap();
    assert_eq!(idle.assignment, None);
    // a third operator fits no handcar mode
    let actions = simulation
        .available_actions(FurnitureId(1), CharacterId(4))
        .unwrap();
    assert!(actions.is_empty());
    let actions = simulation
        .available_actions(FurnitureId(1), CharacterId(2))
        .unwrap();
    assert_eq!(actions[0].mode_label, "Two-Person Operation");
}

#[test]
fn same_seed_reproduces_the_run() {
    let first = run(&config("starter", 1)).unwrap();
    let second = run(&config("starter", 1)).unwrap();
    assert_eq!(first, second);
}
