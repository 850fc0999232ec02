#![allow(dead_code)]

use train_core::{
    Catalog, Dimensions, Direction, FurnitureDef, InteractionSpotDef, OperatingModeDef,
    PROPULSION_POWER, ResourceChanges, ResourceDef, WagonBlueprint, WagonLayoutDef, WagonPartDef,
    WagonPartKind,
};

pub const HANDCAR: &str = "HandcarEngine";

pub fn handcar_engine() -> FurnitureDef {
    FurnitureDef {
        def_name: HANDCAR.into(),
        label: "handcar engine".into(),
        description: "A simple, manually-powered platform that moves the train using crew effort."
            .into(),
        asset_path: "Prefabs/Furniture/HandcarEngine".into(),
        dimensions: Dimensions::new(4, 4),
        holes: Vec::new(),
        interaction_spots: vec![
            InteractionSpotDef::new(-1, 1, Direction::E),
            InteractionSpotDef::new(4, 2, Direction::W),
        ],
        operating_modes: vec![
            OperatingModeDef::idle("Inactive"),
            OperatingModeDef::operated(
                "One-Person Operation",
                "Operate",
                1,
                ResourceChanges::new().with(PROPULSION_POWER, 1),
            ),
            OperatingModeDef::operated(
                "Two-Person Operation",
                "Operate",
                2,
                ResourceChanges::new().with(PROPULSION_POWER, 3),
            ),
        ],
    }
}

pub fn catalog() -> Catalog {
    Catalog::builder()
        .resource(ResourceDef::new(PROPULSION_POWER, "propulsion power").with_abbreviation("PP"))
        .wagon_layouts([
            WagonLayoutDef::new("Short", "short", 12, 6),
            WagonLayoutDef::new("Standard", "standard", 24, 6),
            WagonLayoutDef::new("Long", "long", 36, 6),
        ])
        .wagon_parts([
            WagonPartDef::new("WoodenSpokedWheels", "wooden spoked wheels", WagonPartKind::Wheels, 60),
            WagonPartDef::new("WoodenFloor", "wooden floor", WagonPartKind::Floor, 450),
            WagonPartDef::new("IronFrame", "iron frame", WagonPartKind::Frame, 300),
        ])
        .furniture(handcar_engine())
        .build()
        .expect("fixture catalog is valid")
}

pub fn wagon(layout: &str) -> WagonBlueprint {
    WagonBlueprint::new(layout, "WoodenSpokedWheels", "WoodenFloor")
}
