use crate::geometry::{Dimensions, Direction, Position};

use super::{CatalogError, ResourceChanges};

/// A tile offset (relative to the furniture origin, facing N) where a crew
/// member stands to operate the furniture. May lie outside the footprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionSpotDef {
    pub offset: Position,
    pub facing: Direction,
}

impl InteractionSpotDef {
    pub const fn new(x: i32, y: i32, facing: Direction) -> Self {
        Self {
            offset: Position::new(x, y),
            facing,
        }
    }
}

/// One discrete configuration a furniture can run in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperatingModeDef {
    /// Display name of the mode.
    pub label: String,
    /// Name of the action offered when assigning a crew member to this mode.
    #[cfg_attr(feature = "serde", serde(default))]
    pub assign_label: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Number of crew members that must be assigned for the mode to run.
    #[cfg_attr(feature = "serde", serde(default))]
    pub crew_required: u32,
    /// Resources produced (or consumed, if negative) per turn.
    #[cfg_attr(feature = "serde", serde(default))]
    pub outputs: ResourceChanges,
}

impl OperatingModeDef {
    /// A zero-crew mode without outputs.
    pub fn idle(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn operated(
        label: impl Into<String>,
        assign_label: impl Into<String>,
        crew_required: u32,
        outputs: ResourceChanges,
    ) -> Self {
        Self {
            label: label.into(),
            assign_label: assign_label.into(),
            description: String::new(),
            crew_required,
            outputs,
        }
    }

    /// Whether the mode could run with `assigned_crew` crew members.
    pub fn can_be_active(&self, assigned_crew: usize) -> bool {
        usize::try_from(self.crew_required).is_ok_and(|required| required == assigned_crew)
    }

    pub fn is_idle(&self) -> bool {
        self.crew_required == 0
    }
}

/// Immutable furniture template.
///
/// The first operating mode is the inactive mode every placement starts in.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FurnitureDef {
    pub def_name: String,
    pub label: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Opaque reference handed to the presentation layer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub asset_path: String,
    /// Footprint size when facing N.
    pub dimensions: Dimensions,
    /// Offsets within the footprint that are not blocked.
    #[cfg_attr(feature = "serde", serde(default))]
    pub holes: Vec<Position>,
    /// Interaction spots in assignment order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub interaction_spots: Vec<InteractionSpotDef>,
    pub operating_modes: Vec<OperatingModeDef>,
}

impl FurnitureDef {
    /// Label with the first letter capitalized, for headings.
    pub fn label_cap(&self) -> String {
        let mut chars = self.label.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn is_hole(&self, offset: Position) -> bool {
        self.holes.contains(&offset)
    }

    /// Local offsets that get blocked: the footprint minus its holes.
    pub fn blocked_offsets(&self) -> impl Iterator<Item = Position> + '_ {
        self.dimensions
            .offsets()
            .filter(move |offset| !self.is_hole(*offset))
    }

    /// Local offsets that must be free to place this furniture: every blocked
    /// offset followed by every interaction spot.
    pub fn required_free_tiles(&self) -> Vec<Position> {
        self.blocked_offsets()
            .chain(self.interaction_spots.iter().map(|spot| spot.offset))
            .collect()
    }

    pub fn mode(&self, index: usize) -> Option<&OperatingModeDef> {
        self.operating_modes.get(index)
    }

    /// Highest crew requirement across all modes.
    pub fn max_crew_required(&self) -> u32 {
        self.operating_modes
            .iter()
            .map(|mode| mode.crew_required)
            .max()
            .unwrap_or(0)
    }

    /// Checks the structural invariants of the template.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: positive dimensions, holes inside
    /// the footprint, at least one mode, an idle first mode, and enough
    /// interaction spots for the most demanding mode.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if !self.dimensions.is_positive() {
            return Err(CatalogError::InvalidFootprint {
                furniture: self.def_name.clone(),
                dimensions: self.dimensions,
            });
        }

        if let Some(hole) = self
            .holes
            .iter()
            .find(|hole| !self.dimensions.contains(**hole))
        {
            return Err(CatalogError::HoleOutsideFootprint {
                furniture: self.def_name.clone(),
                offset: *hole,
            });
        }

        let first = self
            .operating_modes
            .first()
            .ok_or_else(|| CatalogError::NoOperatingModes {
                furniture: self.def_name.clone(),
            })?;

        if !first.is_idle() {
            return Err(CatalogError::FirstModeNotIdle {
                furniture: self.def_name.clone(),
                crew_required: first.crew_required,
            });
        }

        let required = self.max_crew_required();
        if self.interaction_spots.len() < required as usize {
            return Err(CatalogError::NotEnoughInteractionSpots {
                furniture: self.def_name.clone(),
                spots: self.interaction_spots.len(),
                required,
            });
        }

        Ok(())
    }
}
