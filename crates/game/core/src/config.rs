/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Kilograms one unit of propulsion power moves one kilometre per turn.
    pub propulsion_weight_factor: u32,
    /// Weight of a single crew member in kilograms.
    pub crew_member_weight: u32,
    /// Calendar day shown for hour zero.
    pub start_day: u32,
    /// Hour of day (0..24) shown for hour zero.
    pub start_hour: u32,
    /// Number of characters recruited when a scenario starts.
    pub starter_crew_size: u32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PROPULSION_WEIGHT_FACTOR: u32 = 10_000;
    pub const DEFAULT_CREW_MEMBER_WEIGHT: u32 = 80;
    pub const DEFAULT_START_DAY: u32 = 1;
    pub const DEFAULT_START_HOUR: u32 = 8;
    pub const DEFAULT_STARTER_CREW_SIZE: u32 = 3;

    pub fn new() -> Self {
        Self {
            propulsion_weight_factor: Self::DEFAULT_PROPULSION_WEIGHT_FACTOR,
            crew_member_weight: Self::DEFAULT_CREW_MEMBER_WEIGHT,
            start_day: Self::DEFAULT_START_DAY,
            start_hour: Self::DEFAULT_START_HOUR,
            starter_crew_size: Self::DEFAULT_STARTER_CREW_SIZE,
        }
    }

    pub fn with_crew_member_weight(mut self, crew_member_weight: u32) -> Self {
        self.crew_member_weight = crew_member_weight;
        self
    }

    pub fn with_starter_crew_size(mut self, starter_crew_size: u32) -> Self {
        self.starter_crew_size = starter_crew_size;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
