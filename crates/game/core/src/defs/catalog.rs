//! Validated, immutable definition catalog.
//!
//! Definitions are assembled through [`CatalogBuilder`], which runs every
//! structural check before handing out a [`Catalog`]. Once built the catalog
//! is shared by reference and never mutated.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{ErrorSeverity, GameError};
use crate::geometry::{Dimensions, Position};

use super::{FurnitureDef, ResourceDef, WagonLayoutDef, WagonPartDef};

/// Errors raised while building or querying the catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate {kind} definition '{id}'")]
    DuplicateDefinition { kind: &'static str, id: String },

    #[error("unknown resource '{0}'")]
    UnknownResource(String),

    #[error("unknown furniture '{0}'")]
    UnknownFurniture(String),

    #[error("unknown wagon layout '{0}'")]
    UnknownWagonLayout(String),

    #[error("unknown wagon part '{0}'")]
    UnknownWagonPart(String),

    #[error("furniture '{furniture}' declares no operating modes")]
    NoOperatingModes { furniture: String },

    #[error("furniture '{furniture}' first mode requires {crew_required} crew, expected 0")]
    FirstModeNotIdle {
        furniture: String,
        crew_required: u32,
    },

    #[error(
        "furniture '{furniture}' has {spots} interaction spots but a mode requires {required} crew"
    )]
    NotEnoughInteractionSpots {
        furniture: String,
        spots: usize,
        required: u32,
    },

    #[error("furniture '{furniture}' has non-positive dimensions {dimensions}")]
    InvalidFootprint {
        furniture: String,
        dimensions: Dimensions,
    },

    #[error("furniture '{furniture}' declares hole {offset} outside its footprint")]
    HoleOutsideFootprint { furniture: String, offset: Position },

    #[error("furniture '{furniture}' mode '{mode}' outputs undeclared resource '{resource}'")]
    UndeclaredResourceOutput {
        furniture: String,
        mode: String,
        resource: String,
    },

    #[error("wagon layout '{layout}' has non-positive size {length}x{width}")]
    InvalidLayout {
        layout: String,
        length: i32,
        width: i32,
    },
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownResource(_)
            | Self::UnknownFurniture(_)
            | Self::UnknownWagonLayout(_)
            | Self::UnknownWagonPart(_) => ErrorSeverity::Validation,
            _ => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateDefinition { .. } => "CATALOG_DUPLICATE_DEFINITION",
            Self::UnknownResource(_) => "CATALOG_UNKNOWN_RESOURCE",
            Self::UnknownFurniture(_) => "CATALOG_UNKNOWN_FURNITURE",
            Self::UnknownWagonLayout(_) => "CATALOG_UNKNOWN_WAGON_LAYOUT",
            Self::UnknownWagonPart(_) => "CATALOG_UNKNOWN_WAGON_PART",
            Self::NoOperatingModes { .. } => "CATALOG_NO_OPERATING_MODES",
            Self::FirstModeNotIdle { .. } => "CATALOG_FIRST_MODE_NOT_IDLE",
            Self::NotEnoughInteractionSpots { .. } => "CATALOG_NOT_ENOUGH_INTERACTION_SPOTS",
            Self::InvalidFootprint { .. } => "CATALOG_INVALID_FOOTPRINT",
            Self::HoleOutsideFootprint { .. } => "CATALOG_HOLE_OUTSIDE_FOOTPRINT",
            Self::UndeclaredResourceOutput { .. } => "CATALOG_UNDECLARED_RESOURCE_OUTPUT",
            Self::InvalidLayout { .. } => "CATALOG_INVALID_LAYOUT",
        }
    }
}

/// Read-only lookup of every definition by identifier.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    resources: BTreeMap<String, Arc<ResourceDef>>,
    furniture: BTreeMap<String, Arc<FurnitureDef>>,
    wagon_layouts: BTreeMap<String, Arc<WagonLayoutDef>>,
    wagon_parts: BTreeMap<String, Arc<WagonPartDef>>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn resource(&self, id: &str) -> Result<Arc<ResourceDef>, CatalogError> {
        self.resources
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownResource(id.to_owned()))
    }

    pub fn furniture(&self, def_name: &str) -> Result<Arc<FurnitureDef>, CatalogError> {
        self.furniture
            .get(def_name)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownFurniture(def_name.to_owned()))
    }

    pub fn wagon_layout(&self, def_name: &str) -> Result<Arc<WagonLayoutDef>, CatalogError> {
        self.wagon_layouts
            .get(def_name)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownWagonLayout(def_name.to_owned()))
    }

    pub fn wagon_part(&self, def_name: &str) -> Result<Arc<WagonPartDef>, CatalogError> {
        self.wagon_parts
            .get(def_name)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownWagonPart(def_name.to_owned()))
    }

    pub fn resources(&self) -> impl Iterator<Item = &Arc<ResourceDef>> + '_ {
        self.resources.values()
    }

    pub fn furniture_defs(&self) -> impl Iterator<Item = &Arc<FurnitureDef>> + '_ {
        self.furniture.values()
    }

    pub fn wagon_layouts(&self) -> impl Iterator<Item = &Arc<WagonLayoutDef>> + '_ {
        self.wagon_layouts.values()
    }

    pub fn wagon_parts(&self) -> impl Iterator<Item = &Arc<WagonPartDef>> + '_ {
        self.wagon_parts.values()
    }
}

/// Collects definitions and validates them as a whole.
#[derive(Clone, Debug, Default)]
pub struct CatalogBuilder {
    resources: Vec<ResourceDef>,
    furniture: Vec<FurnitureDef>,
    wagon_layouts: Vec<WagonLayoutDef>,
    wagon_parts: Vec<WagonPartDef>,
}

impl CatalogBuilder {
    pub fn resource(mut self, def: ResourceDef) -> Self {
        self.resources.push(def);
        self
    }

    pub fn resources(mut self, defs: impl IntoIterator<Item = ResourceDef>) -> Self {
        self.resources.extend(defs);
        self
    }

    pub fn furniture(mut self, def: FurnitureDef) -> Self {
        self.furniture.push(def);
        self
    }

    pub fn furniture_defs(mut self, defs: impl IntoIterator<Item = FurnitureDef>) -> Self {
        self.furniture.extend(defs);
        self
    }

    pub fn wagon_layout(mut self, def: WagonLayoutDef) -> Self {
        self.wagon_layouts.push(def);
        self
    }

    pub fn wagon_layouts(mut self, defs: impl IntoIterator<Item = WagonLayoutDef>) -> Self {
        self.wagon_layouts.extend(defs);
        self
    }

    pub fn wagon_part(mut self, def: WagonPartDef) -> Self {
        self.wagon_parts.push(def);
        self
    }

    pub fn wagon_parts(mut self, defs: impl IntoIterator<Item = WagonPartDef>) -> Self {
        self.wagon_parts.extend(defs);
        self
    }

    /// Validates every definition and freezes the catalog.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found. Any error here means the
    /// content is unusable and the caller must not start a game with it.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let resources = index("resource", self.resources, |def| def.id.as_str())?;

        for layout in &self.wagon_layouts {
            if layout.length <= 0 || layout.width <= 0 {
                return Err(CatalogError::InvalidLayout {
                    layout: layout.def_name.clone(),
                    length: layout.length,
                    width: layout.width,
                });
            }
        }

        for def in &self.furniture {
            def.validate()?;
            for mode in &def.operating_modes {
                if let Some(resource) = mode
                    .outputs
                    .resources()
                    .find(|resource| !resources.contains_key(resource.as_str()))
                {
                    return Err(CatalogError::UndeclaredResourceOutput {
                        furniture: def.def_name.clone(),
                        mode: mode.label.clone(),
                        resource: resource.to_string(),
                    });
                }
            }
        }

        let furniture = index("furniture", self.furniture, |def| def.def_name.as_str())?;
        let wagon_layouts = index("wagon layout", self.wagon_layouts, |def| def.def_name.as_str())?;
        let wagon_parts = index("wagon part", self.wagon_parts, |def| def.def_name.as_str())?;

        tracing::debug!(
            resources = resources.len(),
            furniture = furniture.len(),
            wagon_layouts = wagon_layouts.len(),
            wagon_parts = wagon_parts.len(),
            "catalog validated"
        );

        Ok(Catalog {
            resources,
            furniture,
            wagon_layouts,
            wagon_parts,
        })
    }
}

fn index<T>(
    kind: &'static str,
    defs: Vec<T>,
    key: impl Fn(&T) -> &str,
) -> Result<BTreeMap<String, Arc<T>>, CatalogError> {
    let mut map = BTreeMap::new();
    for def in defs {
        let id = key(&def).to_owned();
        if map.contains_key(&id) {
            return Err(CatalogError::DuplicateDefinition { kind, id });
        }
        map.insert(id, Arc::new(def));
    }
    Ok(map)
}
