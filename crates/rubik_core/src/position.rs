use std::fmt;
use std::ops::{Index, IndexMut};

use crate::{Axis, Sign};

/// Grid position of a piece, with each coordinate in `{-1, 0, 1}`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(pub [Sign; 3]);
impl Index<Axis> for Position {
    type Output = Sign;

    fn index(&self, axis: Axis) -> &Sign {
        &self.0[axis.int()]
    }
}
impl IndexMut<Axis> for Position {
    fn index_mut(&mut self, axis: Axis) -> &mut Sign {
        &mut self.0[axis.int()]
    }
}
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0.map(Sign::int);
        write!(f, "({x}, {y}, {z})")
    }
}
impl Position {
    /// Position of the hidden piece at the center of the cube.
    pub const CORE: Self = Self([Sign::Zero; 3]);

    /// Constructs a position from its coordinates.
    pub const fn new(x: Sign, y: Sign, z: Sign) -> Self {
        Self([x, y, z])
    }
    /// Returns the X coordinate.
    pub fn x(self) -> Sign {
        self[Axis::X]
    }
    /// Returns the Y coordinate.
    pub fn y(self) -> Sign {
        self[Axis::Y]
    }
    /// Returns the Z coordinate.
    pub fn z(self) -> Sign {
        self[Axis::Z]
    }

    /// Returns a unique key in the range `0..27` computed as
    /// `(x+1)*9 + (y+1)*3 + (z+1)`.
    ///
    /// This is used to match rotated positions against the pieces of a face;
    /// it is unrelated to [`PieceId`] order.
    pub const fn key(self) -> usize {
        let [x, y, z] = self.0;
        x.idx() * 9 + y.idx() * 3 + z.idx()
    }

    /// Returns the number of stickers visible on the piece at this position.
    pub fn sticker_count(self) -> usize {
        self.0.iter().filter(|s| s.is_nonzero()).count()
    }
}

/// Index of a piece in the cube's piece array.
///
/// Pieces are ordered by layer from `z = 1` to `z = -1`, then by row from
/// `y = -1` to `y = 1`, then by column from `x = -1` to `x = 1`. The position
/// stored at each index never changes; twists move colors between pieces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(pub u8);
impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
impl PieceId {
    /// Number of pieces in the cube, including the hidden core.
    pub const COUNT: usize = 27;

    /// Returns the index as a `usize`.
    pub const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Returns an iterator over all piece IDs in order.
    pub fn iter() -> impl Iterator<Item = PieceId> {
        (0..Self::COUNT as u8).map(PieceId)
    }

    /// Returns the piece ID for a grid position.
    pub const fn from_position(pos: Position) -> PieceId {
        let [x, y, z] = pos.0;
        let layer = 2 - z.idx();
        PieceId((layer * 9 + y.idx() * 3 + x.idx()) as u8)
    }

    /// Returns the grid position of the piece.
    pub fn position(self) -> Position {
        let i = self.idx();
        let layer = i / 9;
        let row = (i / 3) % 3;
        let col = i % 3;
        Position([Sign::ALL[col], Sign::ALL[row], Sign::ALL[2 - layer]])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_piece_id_order() {
        assert_eq!(
            PieceId(0).position(),
            Position::new(Sign::Neg, Sign::Neg, Sign::Pos),
        );
        assert_eq!(
            PieceId(1).position(),
            Position::new(Sign::Zero, Sign::Neg, Sign::Pos),
        );
        assert_eq!(
            PieceId(3).position(),
            Position::new(Sign::Neg, Sign::Zero, Sign::Pos),
        );
        assert_eq!(PieceId(13).position(), Position::CORE);
        assert_eq!(
            PieceId(26).position(),
            Position::new(Sign::Pos, Sign::Pos, Sign::Neg),
        );
        for id in PieceId::iter() {
            assert_eq!(PieceId::from_position(id.position()), id);
        }
    }

    #[test]
    fn test_position_key_is_unique() {
        let mut keys: Vec<usize> = PieceId::iter().map(|id| id.position().key()).collect();
        keys.sort_unstable();
        assert_eq!(keys, (0..27).collect::<Vec<_>>());
        assert_eq!(Position::CORE.key(), 13);
        assert_eq!(Position::new(Sign::Pos, Sign::Neg, Sign::Zero).key(), 19);
    }

    #[test]
    fn test_sticker_count() {
        assert_eq!(Position::CORE.sticker_count(), 0);
        assert_eq!(PieceId(0).position().sticker_count(), 3);
        assert_eq!(PieceId(4).position().sticker_count(), 1);
        assert_eq!(PieceId(1).position().sticker_count(), 2);
    }
}
