//! Logical state and rotation engine for a 3x3x3 Rubik's Cube.
//!
//! The cube is stored as 27 pieces at fixed grid positions. Each piece has a
//! color for each of the 6 face directions. Twisting a face moves colors
//! between pieces; it never moves the pieces themselves.

mod cube;
mod face;
mod position;
mod rgb;
mod rotation;
mod sign;
mod twist;

#[cfg(test)]
mod tests;

pub use cube::{
    COLOR_TOLERANCE, Cube, DEFAULT_GAP_SIZE, DEFAULT_PIECE_SIZE, FACE_CENTER_SLOT, Piece,
};
pub use face::{Axis, Face, InvalidFace, PerFace};
pub use position::{PieceId, Position};
pub use rgb::Rgb;
pub use rotation::{cycle_side_stickers, rotate_face_normal, rotate_position};
pub use sign::Sign;
pub use twist::{ParseTwistError, Twist, TwistDirection, parse_twists};
