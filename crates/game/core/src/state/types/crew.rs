use crate::geometry::{Direction, Position};
use crate::state::{CharacterId, FurnitureId, WagonId};

/// A crew member standing on a wagon tile.
///
/// Tiles are not exclusive: several characters may stand on the same tile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub id: CharacterId,
    pub wagon: WagonId,
    pub tile: Position,
    pub facing: Direction,
    /// Kilograms added to the train weight.
    pub weight: u32,
    /// Furniture this character currently operates.
    pub assignment: Option<FurnitureId>,
}

impl Character {
    pub fn new(id: CharacterId, wagon: WagonId, tile: Position, facing: Direction, weight: u32) -> Self {
        Self {
            id,
            wagon,
            tile,
            facing,
            weight,
            assignment: None,
        }
    }

    pub fn teleport(&mut self, wagon: WagonId, tile: Position, facing: Direction) {
        self.wagon = wagon;
        self.tile = tile;
        self.facing = facing;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Crew {
    characters: Vec<Character>,
}

impl Crew {
    pub fn add(&mut self, character: Character) {
        self.characters.push(character);
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|character| character.id == id)
    }

    pub fn get_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.iter_mut().find(|character| character.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> + '_ {
        self.characters.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Character> + '_ {
        self.characters.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn weight(&self) -> u64 {
        self.characters
            .iter()
            .map(|character| u64::from(character.weight))
            .sum()
    }

    /// Clears the assignment of every listed character.
    pub fn release(&mut self, ids: &[CharacterId]) {
        for character in self.characters.iter_mut() {
            if ids.contains(&character.id) {
                character.assignment = None;
            }
        }
    }
}
