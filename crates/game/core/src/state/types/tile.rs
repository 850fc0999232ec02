use crate::geometry::{Dimensions, Direction, Position};

/// Derived classification of a wagon tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileOccupation {
    #[default]
    Empty,
    /// Covered by a furniture footprint.
    Blocked,
    /// A crew member stands here facing `facing` to operate a furniture.
    InteractionSpot { facing: Direction },
}

impl TileOccupation {
    pub fn is_empty(self) -> bool {
        matches!(self, TileOccupation::Empty)
    }

    pub fn is_blocked(self) -> bool {
        matches!(self, TileOccupation::Blocked)
    }
}

/// Fixed-size occupation grid of one wagon.
///
/// The size is set at construction and never changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    dimensions: Dimensions,
    tiles: Vec<TileOccupation>,
}

impl TileGrid {
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            tiles: vec![TileOccupation::Empty; dimensions.area()],
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        Some(position.x as usize * self.dimensions.y as usize + position.y as usize)
    }

    /// Occupation at `position`, `None` outside the grid.
    pub fn get(&self, position: Position) -> Option<TileOccupation> {
        self.index(position).map(|index| self.tiles[index])
    }

    pub(crate) fn set(&mut self, position: Position, occupation: TileOccupation) -> bool {
        match self.index(position) {
            Some(index) => {
                self.tiles[index] = occupation;
                true
            }
            None => false,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.tiles.fill(TileOccupation::Empty);
    }

    /// Every tile with its occupation, x-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, TileOccupation)> + '_ {
        self.dimensions.offsets().zip(self.tiles.iter().copied())
    }

    pub fn empty_tiles(&self) -> impl Iterator<Item = Position> + '_ {
        self.iter()
            .filter(|(_, occupation)| occupation.is_empty())
            .map(|(position, _)| position)
    }
}
