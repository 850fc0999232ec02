//! Tile-space geometry shared by furniture placement and interaction spots.
//!
//! All transforms operate on integer tile offsets. A furniture footprint is
//! authored facing [`Direction::N`] with its local `(0, 0)` at the
//! south-western corner; [`translated_position`] maps such a local offset into
//! the oriented footprint, which is then added to the placement origin.

use core::fmt;
use core::ops::{Add, Sub};

/// Errors raised by geometry conversions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeometryError {
    /// The angle is not a multiple of 90 degrees.
    #[error("angle {0} does not resolve to a cardinal direction")]
    InvalidAngle(i64),

    /// The raw index is not one of the four directions.
    #[error("{0} is not a valid rotation index")]
    InvalidRotation(u8),
}

impl crate::error::GameError for GeometryError {
    fn severity(&self) -> crate::error::ErrorSeverity {
        crate::error::ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAngle(_) => "GEOMETRY_INVALID_ANGLE",
            Self::InvalidRotation(_) => "GEOMETRY_INVALID_ROTATION",
        }
    }
}

/// One of the four cardinal directions, doubling as a quarter-turn rotation.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    #[default]
    N,
    E,
    S,
    W,
}

impl Direction {
    /// Clockwise order, starting at north.
    pub const ALL: [Direction; 4] = [Direction::N, Direction::E, Direction::S, Direction::W];

    /// Rotation angle in degrees (N=0, E=90, S=180, W=270).
    pub const fn angle(self) -> u32 {
        match self {
            Direction::N => 0,
            Direction::E => 90,
            Direction::S => 180,
            Direction::W => 270,
        }
    }

    const fn index(self) -> usize {
        match self {
            Direction::N => 0,
            Direction::E => 1,
            Direction::S => 2,
            Direction::W => 3,
        }
    }

    /// Converts an angle in degrees (any multiple of 90, negative allowed).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidAngle`] if the angle is not a multiple
    /// of 90 degrees.
    pub fn from_angle(angle: i64) -> Result<Self, GeometryError> {
        match angle.rem_euclid(360) {
            0 => Ok(Direction::N),
            90 => Ok(Direction::E),
            180 => Ok(Direction::S),
            270 => Ok(Direction::W),
            _ => Err(GeometryError::InvalidAngle(angle)),
        }
    }

    /// Returns true for rotations that swap the footprint axes.
    pub const fn is_quarter_turn(self) -> bool {
        matches!(self, Direction::E | Direction::W)
    }
}

impl TryFrom<u8> for Direction {
    type Error = GeometryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(GeometryError::InvalidRotation(value))
    }
}

/// Discrete tile coordinate (x along the wagon length, y along its width).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Rectangular extent in tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub x: i32,
    pub y: i32,
}

impl Dimensions {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn is_positive(&self) -> bool {
        self.x > 0 && self.y > 0
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0 && position.y >= 0 && position.x < self.x && position.y < self.y
    }

    /// Number of tiles covered (zero for non-positive extents).
    pub fn area(&self) -> usize {
        if self.is_positive() {
            (self.x as usize) * (self.y as usize)
        } else {
            0
        }
    }

    /// Iterates every offset in `[0, x) × [0, y)`, x-major.
    pub fn offsets(self) -> impl Iterator<Item = Position> {
        (0..self.x).flat_map(move |x| (0..self.y).map(move |y| Position::new(x, y)))
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

/// Dimensions of a footprint after rotation: axes swap for E/W.
pub fn translated_dimensions(dimensions: Dimensions, rotation: Direction) -> Dimensions {
    if rotation.is_quarter_turn() {
        Dimensions::new(dimensions.y, dimensions.x)
    } else {
        dimensions
    }
}

/// Maps a local offset of an N-facing footprint into the oriented footprint.
///
/// The rotation is applied against the translated dimensions first; mirroring
/// then reflects x about the *unrotated* `dimensions.x`. Offsets outside the
/// footprint (interaction spots) follow the same formulas.
pub fn translated_position(
    local: Position,
    dimensions: Dimensions,
    rotation: Direction,
    mirrored: bool,
) -> Position {
    let translated = translated_dimensions(dimensions, rotation);
    let Position { x, y } = local;

    let (mut rotated_x, rotated_y) = match rotation {
        Direction::N => (x, y),
        Direction::W => (y, translated.x - 1 - x),
        Direction::S => (translated.x - 1 - x, translated.y - 1 - y),
        Direction::E => (translated.y - 1 - y, x),
    };

    if mirrored {
        rotated_x = dimensions.x - 1 - rotated_x;
    }

    Position::new(rotated_x, rotated_y)
}

/// Composes two directions by adding their angles modulo 360.
pub fn rotate_direction(source: Direction, rotation: Direction) -> Direction {
    Direction::ALL[(source.index() + rotation.index()) % Direction::ALL.len()]
}
