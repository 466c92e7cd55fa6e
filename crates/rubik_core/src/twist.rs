//! Quarter turns and their notation.

use std::fmt;

use crate::{Face, Sign};

/// Rotation direction of a twist, as seen when looking at the twisted face.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TwistDirection {
    /// Clockwise.
    #[default]
    CW,
    /// Counterclockwise.
    CCW,
}
impl fmt::Display for TwistDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TwistDirection::CW => Ok(()),
            TwistDirection::CCW => write!(f, "'"),
        }
    }
}
impl TwistDirection {
    /// Returns `CW` if `clockwise` is true and `CCW` otherwise.
    pub fn from_clockwise(clockwise: bool) -> Self {
        if clockwise { Self::CW } else { Self::CCW }
    }
    /// Returns whether the direction is clockwise.
    pub fn is_clockwise(self) -> bool {
        self == Self::CW
    }
    /// Returns the reverse direction.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            Self::CW => Self::CCW,
            Self::CCW => Self::CW,
        }
    }
    /// Returns the sign of this rotation, according to the mathematical
    /// convention of counterclockwise being positive and clockwise being
    /// negative.
    pub fn sign(self) -> Sign {
        match self {
            Self::CW => Sign::Neg,
            Self::CCW => Sign::Pos,
        }
    }
}

/// A quarter turn of a single face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Twist {
    /// Face to turn.
    pub face: Face,
    /// Direction to turn the face.
    pub direction: TwistDirection,
}
impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face.symbol(), self.direction)
    }
}
impl Twist {
    /// Constructs a twist.
    pub const fn new(face: Face, direction: TwistDirection) -> Self {
        Self { face, direction }
    }
    /// Constructs a clockwise twist.
    pub const fn cw(face: Face) -> Self {
        Self::new(face, TwistDirection::CW)
    }
    /// Constructs a counterclockwise twist.
    pub const fn ccw(face: Face) -> Self {
        Self::new(face, TwistDirection::CCW)
    }
    /// Returns the inverse twist.
    #[must_use]
    pub fn rev(self) -> Self {
        Self::new(self.face, self.direction.rev())
    }
    /// Returns the sign of the rotation angle about the positive direction of
    /// the face's axis.
    ///
    /// Clockwise on a positive face is a negative rotation about the axis;
    /// negative faces flip that.
    pub fn angle_sign(self) -> Sign {
        self.direction.sign() * self.face.sign()
    }
}

/// Error returned when parsing twist notation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ParseTwistError {
    #[error("unknown face {0:?} in {1:?}")]
    UnknownFace(char, String),
    #[error("invalid suffix in {0:?}; expected nothing, `'`, `2`, or `2'`")]
    InvalidSuffix(String),
}

/// Parses a whitespace-separated sequence of twists such as `F U' R2 b`.
///
/// Face letters are case-insensitive. A `'` suffix reverses the direction and
/// a `2` suffix turns the face twice.
pub fn parse_twists(s: &str) -> Result<Vec<Twist>, ParseTwistError> {
    let mut ret = vec![];
    for token in s.split_whitespace() {
        let mut chars = token.chars();
        let Some(c) = chars.next() else { continue };
        let face = Face::from_symbol(c)
            .ok_or_else(|| ParseTwistError::UnknownFace(c, token.to_owned()))?;
        let (direction, count) = match chars.as_str() {
            "" => (TwistDirection::CW, 1),
            "'" => (TwistDirection::CCW, 1),
            "2" => (TwistDirection::CW, 2),
            "2'" | "'2" => (TwistDirection::CCW, 2),
            _ => return Err(ParseTwistError::InvalidSuffix(token.to_owned())),
        };
        ret.extend(std::iter::repeat_n(Twist::new(face, direction), count));
    }
    Ok(ret)
}
