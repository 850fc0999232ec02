use std::sync::Arc;

use crate::defs::{FurnitureDef, OperatingModeDef, ResourceChanges};
use crate::geometry::{Direction, Position, rotate_direction, translated_position};
use crate::state::{CharacterId, FurnitureError, FurnitureId};

/// Interaction spot resolved into wagon coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedSpot {
    pub position: Position,
    pub facing: Direction,
}

/// Mode a candidate crew member could be assigned to, together with the crew
/// list the assignment would produce.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AvailableAction {
    pub furniture: FurnitureId,
    pub mode_index: usize,
    pub mode_label: String,
    pub assign_label: String,
    pub crew: Vec<CharacterId>,
}

/// A furniture definition placed in a wagon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FurnitureInstance {
    id: FurnitureId,
    def: Arc<FurnitureDef>,
    /// Wagon tile of the oriented footprint's local (0, 0).
    origin: Position,
    rotation: Direction,
    mirrored: bool,
    /// Always a valid index into `def.operating_modes`.
    mode_index: usize,
    assigned_crew: Vec<CharacterId>,
}

impl FurnitureInstance {
    /// Creates an instance in the definition's first (inactive) mode.
    ///
    /// # Errors
    ///
    /// Returns [`FurnitureError::NoOperatingModes`] if the definition declares
    /// no modes.
    pub fn new(
        id: FurnitureId,
        def: Arc<FurnitureDef>,
        origin: Position,
        rotation: Direction,
        mirrored: bool,
    ) -> Result<Self, FurnitureError> {
        if def.operating_modes.is_empty() {
            return Err(FurnitureError::NoOperatingModes(def.def_name.clone()));
        }
        Ok(Self {
            id,
            def,
            origin,
            rotation,
            mirrored,
            mode_index: 0,
            assigned_crew: Vec::new(),
        })
    }

    pub fn id(&self) -> FurnitureId {
        self.id
    }

    pub fn definition(&self) -> &Arc<FurnitureDef> {
        &self.def
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn rotation(&self) -> Direction {
        self.rotation
    }

    pub fn is_mirrored(&self) -> bool {
        self.mirrored
    }

    pub fn label_cap(&self) -> String {
        self.def.label_cap()
    }

    pub fn mode_index(&self) -> usize {
        self.mode_index
    }

    pub fn operating_mode(&self) -> &OperatingModeDef {
        &self.def.operating_modes[self.mode_index]
    }

    pub fn is_active(&self) -> bool {
        self.mode_index != 0
    }

    pub fn assigned_crew(&self) -> &[CharacterId] {
        &self.assigned_crew
    }

    fn to_wagon(&self, local: Position) -> Position {
        self.origin + translated_position(local, self.def.dimensions, self.rotation, self.mirrored)
    }

    /// Wagon tiles covered by the footprint, holes excluded.
    pub fn blocked_tiles(&self) -> impl Iterator<Item = Position> + '_ {
        self.def.blocked_offsets().map(|offset| self.to_wagon(offset))
    }

    /// Interaction spots in wagon coordinates, in declared order.
    pub fn interaction_spots(&self) -> Vec<ResolvedSpot> {
        self.def
            .interaction_spots
            .iter()
            .map(|spot| ResolvedSpot {
                position: self.to_wagon(spot.offset),
                facing: rotate_direction(spot.facing, self.rotation),
            })
            .collect()
    }

    /// Modes `candidate` could join, given the crew already assigned.
    ///
    /// A candidate already assigned here is not counted twice. Pure query.
    pub fn available_actions(&self, candidate: CharacterId) -> Vec<AvailableAction> {
        let mut crew = self.assigned_crew.clone();
        if !crew.contains(&candidate) {
            crew.push(candidate);
        }

        self.def
            .operating_modes
            .iter()
            .enumerate()
            .filter(|(_, mode)| mode.can_be_active(crew.len()))
            .map(|(mode_index, mode)| AvailableAction {
                furniture: self.id,
                mode_index,
                mode_label: mode.label.clone(),
                assign_label: mode.assign_label.clone(),
                crew: crew.clone(),
            })
            .collect()
    }

    /// Switches to `mode_index` with `crew` assigned.
    ///
    /// Returns where each crew member must stand: the n-th crew member gets
    /// the n-th declared interaction spot.
    ///
    /// # Errors
    ///
    /// Fails without mutating if the mode does not exist, the crew size does
    /// not match the mode requirement, or a crew member is listed twice.
    pub fn set_operating_mode(
        &mut self,
        mode_index: usize,
        crew: Vec<CharacterId>,
    ) -> Result<Vec<(CharacterId, ResolvedSpot)>, FurnitureError> {
        let mode = self
            .def
            .mode(mode_index)
            .ok_or_else(|| FurnitureError::UnknownOperatingMode {
                furniture: self.def.def_name.clone(),
                index: mode_index,
            })?;

        if !mode.can_be_active(crew.len()) {
            return Err(FurnitureError::CrewCountMismatch {
                mode: mode.label.clone(),
                required: mode.crew_required,
                assigned: crew.len(),
            });
        }

        for (index, member) in crew.iter().enumerate() {
            if crew[..index].contains(member) {
                return Err(FurnitureError::DuplicateCrewMember(*member));
            }
        }

        let placements = crew
            .iter()
            .copied()
            .zip(self.interaction_spots())
            .collect();

        self.mode_index = mode_index;
        self.assigned_crew = crew;
        Ok(placements)
    }

    /// Returns to the inactive mode, releasing and returning the crew.
    pub fn reset(&mut self) -> Vec<CharacterId> {
        self.mode_index = 0;
        std::mem::take(&mut self.assigned_crew)
    }

    /// Outputs of the active mode; empty while inactive.
    pub fn resource_contribution(&self) -> &ResourceChanges {
        &self.operating_mode().outputs
    }
}
