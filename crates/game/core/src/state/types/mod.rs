pub mod common;
pub mod crew;
pub mod furniture;
pub mod tile;
pub mod train;
pub mod turn;
pub mod wagon;

pub use common::{CharacterId, FurnitureId, Hour, WagonId};
pub use crew::{Character, Crew};
pub use furniture::{AvailableAction, FurnitureInstance, ResolvedSpot};
pub use tile::{TileGrid, TileOccupation};
pub use train::Train;
pub use turn::{GameTime, TurnPhase, TurnRecord, TurnState};
pub use wagon::{Wagon, WagonParts};
