//! End-of-run summary printed to stdout.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use serde::Serialize;
use train_core::{GameTime, ResourceChanges, TurnRecord};

use crate::bootstrap::Simulation;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FurnitureSummary {
    pub id: u32,
    pub label: String,
    pub mode: String,
    pub crew: Vec<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TurnSummary {
    /// `Day 1, 08:00`
    pub time: String,
    pub resource_changes: ResourceChanges,
    pub travel_distance: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    pub scenario: String,
    pub seed: u64,
    pub train_weight: u64,
    pub crew: usize,
    pub furniture: Vec<FurnitureSummary>,
    pub turns: Vec<TurnSummary>,
    /// Time elapsed since the start, `hh:00`.
    pub elapsed: String,
    pub now: String,
    pub total_distance: i64,
}

impl SimulationReport {
    pub fn new(scenario: &str, simulation: &Simulation, records: &[TurnRecord]) -> Self {
        let state = simulation.state();
        let furniture = state
            .train
            .furniture()
            .map(|instance| FurnitureSummary {
                id: instance.id().0,
                label: instance.label_cap(),
                mode: instance.operating_mode().label.clone(),
                crew: instance.assigned_crew().iter().map(|id| id.0).collect(),
            })
            .collect();
        let turns = records
            .iter()
            .map(|record| TurnSummary {
                time: GameTime::new(record.hour, simulation.config()).absolute_label(),
                resource_changes: record.resource_changes.clone(),
                travel_distance: record.travel_distance,
            })
            .collect();
        let time = simulation.time();

        Self {
            scenario: scenario.to_string(),
            seed: state.game_seed,
            train_weight: state.train_weight(),
            crew: state.crew.len(),
            furniture,
            turns,
            elapsed: time.duration_label(),
            now: time.absolute_label(),
            total_distance: state.distance_travelled,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialising simulation report")
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Scenario: {} (seed {})", self.scenario, self.seed);
        let _ = writeln!(
            out,
            "Train weight: {} kg, crew: {}",
            self.train_weight, self.crew
        );
        for furniture in &self.furniture {
            let _ = writeln!(
                out,
                "  {} #{}: {} ({} crew)",
                furniture.label,
                furniture.id,
                furniture.mode,
                furniture.crew.len()
            );
        }
        for turn in &self.turns {
            let resources = turn
                .resource_changes
                .iter()
                .map(|(resource, amount)| format!("{resource} {amount:+}"))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(
                out,
                "{}: {} km [{}]",
                turn.time, turn.travel_distance, resources
            );
        }
        let _ = writeln!(
            out,
            "{} ({} elapsed): {} km travelled",
            self.now, self.elapsed, self.total_distance
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use train_core::{PROPULSION_POWER, ResourceChanges};

    use super::*;

    fn report() -> SimulationReport {
        SimulationReport {
            scenario: "starter".into(),
            seed: 1,
            train_weight: 810,
            crew: 3,
            furniture: vec![FurnitureSummary {
                id: 1,
                label: "Handcar engine".into(),
                mode: "Two-Person Operation".into(),
                crew: vec![2, 3],
            }],
            turns: vec![TurnSummary {
                time: "Day 1, 08:00".into(),
                resource_changes: ResourceChanges::new().with(PROPULSION_POWER, 3),
                travel_distance: 36,
            }],
            elapsed: "01:00".into(),
            now: "Day 1, 09:00".into(),
            total_distance: 36,
        }
    }

    #[test]
    fn text_lists_turns_and_total() {
        let text = report().to_text();
        assert!(text.contains("Handcar engine #1: Two-Person Operation (2 crew)"));
        assert!(text.contains("Day 1, 08:00: 36 km [PropulsionPower +3]"));
        assert!(text.ends_with("Day 1, 09:00 (01:00 elapsed): 36 km travelled\n"));
    }

    #[test]
    fn json_keeps_resource_keys() {
        let json: serde_json::Value = serde_json::from_str(&report().to_json().unwrap()).unwrap();
        assert_eq!(json["turns"][0]["resource_changes"]["PropulsionPower"], 3);
        assert_eq!(json["total_distance"], 36);
    }
}
