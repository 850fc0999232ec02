use crate::geometry::Dimensions;

/// Floor plan of a wagon: its fixed tile grid size.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WagonLayoutDef {
    pub def_name: String,
    pub label: String,
    /// Tiles along the x axis (direction of travel).
    pub length: i32,
    /// Tiles along the y axis (sideways).
    pub width: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl WagonLayoutDef {
    pub fn new(def_name: impl Into<String>, label: impl Into<String>, length: i32, width: i32) -> Self {
        Self {
            def_name: def_name.into(),
            label: label.into(),
            length,
            width,
            description: String::new(),
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.length, self.width)
    }

    /// Label with the grid size appended, e.g. `short (12x6)`.
    pub fn display_label(&self) -> String {
        format!("{} ({}x{})", self.label, self.length, self.width)
    }
}

/// Slot a wagon part fills.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WagonPartKind {
    /// A set of two wheels (left + right).
    Wheels,
    Floor,
    /// Walls and roof.
    Frame,
}

/// Physical wagon component with a weight.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WagonPartDef {
    pub def_name: String,
    pub label: String,
    pub kind: WagonPartKind,
    /// Weight in kilograms.
    pub weight: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub asset_path: String,
}

impl WagonPartDef {
    pub fn new(
        def_name: impl Into<String>,
        label: impl Into<String>,
        kind: WagonPartKind,
        weight: u32,
    ) -> Self {
        Self {
            def_name: def_name.into(),
            label: label.into(),
            kind,
            weight,
            description: String::new(),
            asset_path: String::new(),
        }
    }
}
