//! Axes and faces of a cube.

use std::fmt;
use std::ops::{Index, IndexMut};

use strum::VariantArray;

use crate::{Position, Sign};

/// A 3-dimensional axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, strum::VariantArray)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the camera).
    Z = 2,
}
impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
            Axis::Z => write!(f, "Z"),
        }
    }
}
impl Axis {
    /// Returns an integer index for this axis; X = 0, Y = 1, Z = 2.
    pub const fn int(self) -> usize {
        self as usize
    }
}

/// Error returned when converting an out-of-range integer to a [`Face`].
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("invalid face index {0} (expected 0..6)")]
pub struct InvalidFace(pub u8);

/// One of the six fixed faces of the cube.
///
/// The discriminants match the order used for face indices everywhere in the
/// crate: FRONT, BACK, LEFT, RIGHT, UP, DOWN.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::VariantArray,
    strum::FromRepr,
)]
#[strum(serialize_all = "UPPERCASE")]
#[repr(u8)]
pub enum Face {
    /// Face towards the camera (+Z).
    Front = 0,
    /// Face away from the camera (-Z).
    Back = 1,
    /// Left face (-X).
    Left = 2,
    /// Right face (+X).
    Right = 3,
    /// Top face (+Y).
    Up = 4,
    /// Bottom face (-Y).
    Down = 5,
}
impl TryFrom<u8> for Face {
    type Error = InvalidFace;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Face::from_repr(value).ok_or(InvalidFace(value))
    }
}
impl Face {
    /// Number of faces on a cube.
    pub const COUNT: usize = 6;

    /// Returns the index of the face in the range `0..6`.
    pub const fn idx(self) -> usize {
        self as usize
    }

    /// Returns the face on the other side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Face {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Up => Face::Down,
            Face::Down => Face::Up,
        }
    }

    /// Returns the axis perpendicular to this face.
    pub const fn axis(self) -> Axis {
        match self {
            Face::Front | Face::Back => Axis::Z,
            Face::Left | Face::Right => Axis::X,
            Face::Up | Face::Down => Axis::Y,
        }
    }

    /// Returns the sign of this face along its perpendicular axis.
    pub const fn sign(self) -> Sign {
        match self {
            Face::Front | Face::Right | Face::Up => Sign::Pos,
            Face::Back | Face::Left | Face::Down => Sign::Neg,
        }
    }

    /// Returns the face on the given axis with the given sign, or `None` if
    /// `sign` is zero.
    pub fn from_axis_sign(axis: Axis, sign: Sign) -> Option<Face> {
        match (axis, sign) {
            (_, Sign::Zero) => None,
            (Axis::X, Sign::Pos) => Some(Face::Right),
            (Axis::X, Sign::Neg) => Some(Face::Left),
            (Axis::Y, Sign::Pos) => Some(Face::Up),
            (Axis::Y, Sign::Neg) => Some(Face::Down),
            (Axis::Z, Sign::Pos) => Some(Face::Front),
            (Axis::Z, Sign::Neg) => Some(Face::Back),
        }
    }

    /// Returns the grid position of the center piece of this face, which is
    /// also the integer normal vector of the face.
    pub fn center(self) -> Position {
        let mut ret = Position::CORE;
        ret[self.axis()] = self.sign();
        ret
    }

    /// Returns the face whose normal is `pos`, if `pos` is a unit vector along
    /// one axis.
    pub fn from_normal(pos: Position) -> Option<Face> {
        let mut nonzero = Axis::VARIANTS.iter().filter(|&&ax| pos[ax].is_nonzero());
        let axis = *nonzero.next()?;
        match nonzero.next() {
            Some(_) => None,
            None => Face::from_axis_sign(axis, pos[axis]),
        }
    }

    /// Returns the normal vector of the face as floats.
    pub fn normal(self) -> [f32; 3] {
        self.center().0.map(|s| s.float())
    }

    /// Returns the single-letter name of the face in standard notation.
    pub const fn symbol(self) -> char {
        match self {
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Up => 'U',
            Face::Down => 'D',
        }
    }

    /// Returns the face with the given letter (case-insensitive).
    pub fn from_symbol(c: char) -> Option<Face> {
        Face::VARIANTS
            .iter()
            .copied()
            .find(|f| f.symbol() == c.to_ascii_uppercase())
    }
}

/// Value stored for each face of the cube, indexed by [`Face`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PerFace<T>(pub [T; Face::COUNT]);
impl<T> Index<Face> for PerFace<T> {
    type Output = T;

    fn index(&self, face: Face) -> &T {
        &self.0[face.idx()]
    }
}
impl<T> IndexMut<Face> for PerFace<T> {
    fn index_mut(&mut self, face: Face) -> &mut T {
        &mut self.0[face.idx()]
    }
}
impl<T> PerFace<T> {
    /// Constructs a value for each face by calling `f`.
    pub fn from_fn(mut f: impl FnMut(Face) -> T) -> Self {
        Self(std::array::from_fn(|i| f(Face::VARIANTS[i])))
    }

    /// Returns an iterator over faces and their values.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &T)> {
        Face::VARIANTS.iter().copied().zip(&self.0)
    }

    /// Applies `f` to each value.
    pub fn map<U>(self, mut f: impl FnMut(Face, T) -> U) -> PerFace<U> {
        let mut i = 0;
        PerFace(self.0.map(|value| {
            let face = Face::VARIANTS[i];
            i += 1;
            f(face, value)
        }))
    }
}
