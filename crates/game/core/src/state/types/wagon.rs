//! Wagon: tile grid, placed furniture and physical parts.
//!
//! Tile occupation is derived state. It is rebuilt from scratch from the
//! furniture list whenever that list changes, never patched in place.

use std::sync::Arc;

use crate::defs::{FurnitureDef, ResourceChanges, WagonLayoutDef, WagonPartDef, WagonPartKind};
use crate::env::RngOracle;
use crate::geometry::{Direction, Position, translated_position};
use crate::state::{
    CharacterId, FurnitureId, FurnitureInstance, ResolvedSpot, TileGrid, TileOccupation, WagonError,
    WagonId,
};

/// Physical components of a wagon. The frame is optional.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WagonParts {
    pub front_wheels: Arc<WagonPartDef>,
    pub back_wheels: Arc<WagonPartDef>,
    pub floor: Arc<WagonPartDef>,
    pub frame: Option<Arc<WagonPartDef>>,
}

impl WagonParts {
    fn iter(&self) -> impl Iterator<Item = &Arc<WagonPartDef>> + '_ {
        [&self.front_wheels, &self.back_wheels, &self.floor]
            .into_iter()
            .chain(self.frame.as_ref())
    }

    fn check_kinds(&self) -> Result<(), WagonError> {
        let expected = [
            (&self.front_wheels, WagonPartKind::Wheels),
            (&self.back_wheels, WagonPartKind::Wheels),
            (&self.floor, WagonPartKind::Floor),
        ]
        .into_iter()
        .chain(self.frame.as_ref().map(|frame| (frame, WagonPartKind::Frame)));

        for (part, kind) in expected {
            if part.kind != kind {
                return Err(WagonError::PartKindMismatch {
                    part: part.def_name.clone(),
                    expected: kind,
                    actual: part.kind,
                });
            }
        }
        Ok(())
    }

    /// Summed part weight in kilograms.
    pub fn weight(&self) -> u64 {
        self.iter().map(|part| u64::from(part.weight)).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wagon {
    id: WagonId,
    layout: Arc<WagonLayoutDef>,
    parts: WagonParts,
    tiles: TileGrid,
    furniture: Vec<FurnitureInstance>,
}

impl Wagon {
    /// Builds an empty wagon with a grid sized by `layout`.
    ///
    /// # Errors
    ///
    /// Returns [`WagonError::PartKindMismatch`] if a part sits in the wrong slot.
    pub fn new(
        id: WagonId,
        layout: Arc<WagonLayoutDef>,
        parts: WagonParts,
    ) -> Result<Self, WagonError> {
        parts.check_kinds()?;
        Ok(Self {
            id,
            tiles: TileGrid::new(layout.dimensions()),
            layout,
            parts,
            furniture: Vec::new(),
        })
    }

    pub fn id(&self) -> WagonId {
        self.id
    }

    pub fn layout(&self) -> &Arc<WagonLayoutDef> {
        &self.layout
    }

    pub fn parts(&self) -> &WagonParts {
        &self.parts
    }

    pub fn tiles(&self) -> &TileGrid {
        &self.tiles
    }

    pub fn occupation(&self, position: Position) -> Option<TileOccupation> {
        self.tiles.get(position)
    }

    pub fn furniture(&self) -> &[FurnitureInstance] {
        &self.furniture
    }

    pub fn find_furniture(&self, id: FurnitureId) -> Option<&FurnitureInstance> {
        self.furniture.iter().find(|furniture| furniture.id() == id)
    }

    fn furniture_mut(&mut self, id: FurnitureId) -> Result<&mut FurnitureInstance, WagonError> {
        self.furniture
            .iter_mut()
            .find(|furniture| furniture.id() == id)
            .ok_or(WagonError::UnknownFurniture(id))
    }

    /// Parts weight; crew is accounted for at train level.
    pub fn weight(&self) -> u64 {
        self.parts.weight()
    }

    /// Places a new instance in its inactive mode and recomputes occupation.
    ///
    /// Overlap with existing furniture is not checked here; see
    /// [`Wagon::can_place`].
    ///
    /// # Errors
    ///
    /// Fails without mutating the wagon if the definition is invalid or any
    /// footprint tile or interaction spot falls outside the grid.
    pub fn place_furniture(
        &mut self,
        id: FurnitureId,
        def: Arc<FurnitureDef>,
        origin: Position,
        rotation: Direction,
        mirrored: bool,
    ) -> Result<&FurnitureInstance, WagonError> {
        def.validate()?;
        let instance = FurnitureInstance::new(id, def, origin, rotation, mirrored)?;

        let tiles = compute_occupation(
            &self.tiles,
            self.furniture.iter().chain(std::iter::once(&instance)),
        )?;

        self.tiles = tiles;
        let index = self.furniture.len();
        self.furniture.push(instance);
        Ok(&self.furniture[index])
    }

    /// Removes an instance, recomputes occupation, and returns the instance
    /// so the caller can release its crew.
    pub fn remove_furniture(&mut self, id: FurnitureId) -> Result<FurnitureInstance, WagonError> {
        let index = self
            .furniture
            .iter()
            .position(|furniture| furniture.id() == id)
            .ok_or(WagonError::UnknownFurniture(id))?;

        let removed = self.furniture.remove(index);
        self.recompute_occupation()?;
        Ok(removed)
    }

    /// Resets every tile to Empty, marks all footprints Blocked, then marks all
    /// interaction spots.
    ///
    /// # Errors
    ///
    /// Returns [`WagonError::TileOutOfBounds`] for the first resolved tile
    /// outside the grid; the grid is left as it was.
    pub fn recompute_occupation(&mut self) -> Result<(), WagonError> {
        self.tiles = compute_occupation(&self.tiles, self.furniture.iter())?;
        Ok(())
    }

    /// Whether every tile `def` needs is inside the grid and currently Empty.
    pub fn can_place(
        &self,
        def: &FurnitureDef,
        origin: Position,
        rotation: Direction,
        mirrored: bool,
    ) -> bool {
        def.required_free_tiles().into_iter().all(|offset| {
            let position = origin + translated_position(offset, def.dimensions, rotation, mirrored);
            self.tiles
                .get(position)
                .is_some_and(TileOccupation::is_empty)
        })
    }

    /// Uniformly chosen Empty tile, `None` if the wagon is full.
    pub fn random_empty_tile(&self, rng: &dyn RngOracle, seed: u64) -> Option<Position> {
        let empty: Vec<Position> = self.tiles.empty_tiles().collect();
        rng.pick_index(seed, empty.len()).map(|index| empty[index])
    }

    pub fn set_operating_mode(
        &mut self,
        id: FurnitureId,
        mode_index: usize,
        crew: Vec<CharacterId>,
    ) -> Result<Vec<(CharacterId, ResolvedSpot)>, WagonError> {
        Ok(self.furniture_mut(id)?.set_operating_mode(mode_index, crew)?)
    }

    /// Puts an instance back into its inactive mode and returns the released crew.
    pub fn reset_furniture(&mut self, id: FurnitureId) -> Result<Vec<CharacterId>, WagonError> {
        Ok(self.furniture_mut(id)?.reset())
    }

    /// Sum of every instance's active-mode outputs.
    pub fn resource_changes(&self) -> ResourceChanges {
        let mut total = ResourceChanges::new();
        for furniture in &self.furniture {
            total.merge(furniture.resource_contribution());
        }
        total
    }
}

/// Builds a fresh grid from `furniture`, leaving `current` untouched.
fn compute_occupation<'a>(
    current: &TileGrid,
    furniture: impl Iterator<Item = &'a FurnitureInstance> + Clone,
) -> Result<TileGrid, WagonError> {
    let mut tiles = current.clone();
    tiles.reset();

    let out_of_bounds = |instance: &FurnitureInstance, position: Position| {
        WagonError::TileOutOfBounds {
            furniture: instance.label_cap(),
            position,
            dimensions: current.dimensions(),
        }
    };

    for instance in furniture.clone() {
        for position in instance.blocked_tiles() {
            if !tiles.set(position, TileOccupation::Blocked) {
                return Err(out_of_bounds(instance, position));
            }
        }
    }

    for instance in furniture {
        for spot in instance.interaction_spots() {
            let occupation = TileOccupation::InteractionSpot {
                facing: spot.facing,
            };
            if !tiles.set(spot.position, occupation) {
                return Err(out_of_bounds(instance, spot.position));
            }
        }
    }

    Ok(tiles)
}
