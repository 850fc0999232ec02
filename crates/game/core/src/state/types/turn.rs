use std::fmt;

use crate::config::GameConfig;
use crate::defs::ResourceChanges;
use crate::state::Hour;

/// Phase of the turn state machine.
///
/// The game rests in [`TurnPhase::Planning`]. Resolution is transient: it is
/// entered and left within a single end-turn command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnPhase {
    #[default]
    Planning,
    Resolution,
}

/// Turn bookkeeping: the hour clock, the phase and the command nonce.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Hours elapsed since the game started. Never decreases.
    pub clock: Hour,
    pub phase: TurnPhase,
    /// Incremented by every command that draws random numbers.
    pub nonce: u64,
}

/// What happened during one resolved hour.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnRecord {
    /// Hour at which the resolved turn started.
    pub hour: Hour,
    pub resource_changes: ResourceChanges,
    /// Kilometres travelled during the hour.
    pub travel_distance: i64,
}

/// Calendar rendering of an hour count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameTime {
    hours: u64,
    start_day: u32,
    start_hour: u32,
}

impl GameTime {
    pub fn new(hour: Hour, config: &GameConfig) -> Self {
        Self {
            hours: hour.0,
            start_day: config.start_day,
            start_hour: config.start_hour,
        }
    }

    /// Day number, counting from the configured start day.
    pub fn day(&self) -> u64 {
        u64::from(self.start_day) + (u64::from(self.start_hour) + self.hours) / 24
    }

    /// Hour of day, 0..24.
    pub fn hour_of_day(&self) -> u64 {
        (u64::from(self.start_hour) + self.hours) % 24
    }

    /// `Day 1, 08:00`
    pub fn absolute_label(&self) -> String {
        format!("Day {}, {:02}:00", self.day(), self.hour_of_day())
    }

    /// Elapsed time as `hh:00`.
    pub fn duration_label(&self) -> String {
        format!("{:02}:00", self.hours)
    }
}

impl fmt::Display for GameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.absolute_label())
    }
}
