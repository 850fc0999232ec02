use crate::defs::ResourceChanges;
use crate::env::RngOracle;
use crate::geometry::Position;
use crate::state::{FurnitureId, FurnitureInstance, Wagon, WagonId};

/// Ordered sequence of wagons, front to back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Train {
    wagons: Vec<Wagon>,
}

impl Train {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_wagon(&mut self, wagon: Wagon) {
        self.wagons.push(wagon);
    }

    pub fn wagons(&self) -> &[Wagon] {
        &self.wagons
    }

    pub fn wagon(&self, id: WagonId) -> Option<&Wagon> {
        self.wagons.iter().find(|wagon| wagon.id() == id)
    }

    pub fn wagon_mut(&mut self, id: WagonId) -> Option<&mut Wagon> {
        self.wagons.iter_mut().find(|wagon| wagon.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.wagons.is_empty()
    }

    /// Every furniture instance, wagon by wagon.
    pub fn furniture(&self) -> impl Iterator<Item = &FurnitureInstance> + '_ {
        self.wagons.iter().flat_map(|wagon| wagon.furniture().iter())
    }

    /// Wagon holding the furniture instance `id`.
    pub fn wagon_of(&self, id: FurnitureId) -> Option<WagonId> {
        self.wagons
            .iter()
            .find(|wagon| wagon.find_furniture(id).is_some())
            .map(Wagon::id)
    }

    pub fn find_furniture(&self, id: FurnitureId) -> Option<&FurnitureInstance> {
        self.wagons.iter().find_map(|wagon| wagon.find_furniture(id))
    }

    /// Summed part weight of every wagon, crew excluded.
    pub fn wagons_weight(&self) -> u64 {
        self.wagons.iter().map(Wagon::weight).sum()
    }

    /// Sum of every furniture's active-mode outputs across the train.
    pub fn resource_changes(&self) -> ResourceChanges {
        let mut total = ResourceChanges::new();
        for wagon in &self.wagons {
            total.merge(&wagon.resource_changes());
        }
        total
    }

    /// Uniformly chosen Empty tile across all wagons.
    pub fn random_empty_tile(&self, rng: &dyn RngOracle, seed: u64) -> Option<(WagonId, Position)> {
        let empty: Vec<(WagonId, Position)> = self
            .wagons
            .iter()
            .flat_map(|wagon| {
                wagon
                    .tiles()
                    .empty_tiles()
                    .map(move |position| (wagon.id(), position))
            })
            .collect();
        rng.pick_index(seed, empty.len()).map(|index| empty[index])
    }
}
