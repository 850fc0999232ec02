//! Immutable content templates referenced by placed instances.
mod catalog;
mod furniture;
mod resource;
mod wagon;

pub use catalog::{Catalog, CatalogBuilder, CatalogError};
pub use furniture::{FurnitureDef, InteractionSpotDef, OperatingModeDef};
pub use resource::{PROPULSION_POWER, ResourceChanges, ResourceDef, ResourceId};
pub use wagon::{WagonLayoutDef, WagonPartDef, WagonPartKind};
