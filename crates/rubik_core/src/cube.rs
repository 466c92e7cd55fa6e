//! Logical state of a 3x3x3 cube.

use std::ops::{Index, IndexMut};

use strum::VariantArray;

use crate::{Axis, Face, PerFace, PieceId, Position, Rgb, Sign};

/// Maximum [`Rgb::manhattan_distance()`] between two stickers that are
/// considered the same color.
pub const COLOR_TOLERANCE: f32 = 0.05;

/// Edge length of a rendered piece.
pub const DEFAULT_PIECE_SIZE: f32 = 0.9;
/// Space between adjacent rendered pieces.
pub const DEFAULT_GAP_SIZE: f32 = 0.1;

/// Index of the center piece within the list returned by
/// [`Cube::face_indices()`].
pub const FACE_CENTER_SLOT: usize = 4;

/// One of the 27 sub-cubes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Piece {
    /// Grid position of the piece. This never changes.
    pub position: Position,
    /// Color on each side of the piece. Sides that face the inside of the cube
    /// are [`Rgb::HIDDEN`].
    pub stickers: PerFace<Rgb>,
}
impl Piece {
    /// Returns the piece at `position` on a solved cube.
    pub fn solved(position: Position) -> Self {
        let stickers = PerFace::from_fn(|face| {
            if position[face.axis()] == face.sign() {
                Rgb::solved_color(face)
            } else {
                Rgb::HIDDEN
            }
        });
        Self { position, stickers }
    }

    /// Returns the faces on which the piece shows a sticker, based on its
    /// position.
    pub fn visible_faces(&self) -> impl Iterator<Item = Face> + use<> {
        let position = self.position;
        Face::VARIANTS
            .iter()
            .copied()
            .filter(move |face| position[face.axis()] == face.sign())
    }
}

/// A 3x3x3 cube.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    pieces: [Piece; PieceId::COUNT],
    /// Edge length of a rendered piece.
    pub piece_size: f32,
    /// Space between adjacent rendered pieces.
    pub gap_size: f32,
}
impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}
impl Index<PieceId> for Cube {
    type Output = Piece;

    fn index(&self, id: PieceId) -> &Piece {
        &self.pieces[id.idx()]
    }
}
impl IndexMut<PieceId> for Cube {
    fn index_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.idx()]
    }
}
impl Cube {
    /// Constructs a solved cube.
    pub fn new() -> Self {
        Self {
            pieces: std::array::from_fn(|i| Piece::solved(PieceId(i as u8).position())),
            piece_size: DEFAULT_PIECE_SIZE,
            gap_size: DEFAULT_GAP_SIZE,
        }
    }

    /// Resets every piece to the solved state.
    pub fn initialize(&mut self) {
        for id in PieceId::iter() {
            self[id] = Piece::solved(id.position());
        }
        log::trace!("cube initialized to solved state");
    }

    /// Returns all pieces in [`PieceId`] order.
    pub fn pieces(&self) -> &[Piece; PieceId::COUNT] {
        &self.pieces
    }

    /// Returns the piece at a grid position.
    pub fn piece_at(&self, position: Position) -> &Piece {
        &self[PieceId::from_position(position)]
    }

    /// Returns the color of a sticker.
    pub fn sticker(&self, id: PieceId, face: Face) -> Rgb {
        self[id].stickers[face]
    }

    /// Returns the offset of a piece's center from the center of the cube in
    /// rendering units.
    pub fn piece_offset(&self, id: PieceId) -> [f32; 3] {
        let spacing = self.piece_size + self.gap_size;
        id.position().0.map(|s| s.float() * spacing)
    }

    /// Returns the 9 pieces on `face`.
    ///
    /// Faces on the Z axis are scanned by Y then X; faces on the X axis by Y
    /// then Z (descending); faces on the Y axis by Z (descending) then X. The
    /// center of the face is always at [`FACE_CENTER_SLOT`].
    pub fn face_indices(face: Face) -> [PieceId; 9] {
        const ASC: [Sign; 3] = [Sign::Neg, Sign::Zero, Sign::Pos];
        const DESC: [Sign; 3] = [Sign::Pos, Sign::Zero, Sign::Neg];
        let (outer, inner) = match face.axis() {
            Axis::Z => ((Axis::Y, ASC), (Axis::X, ASC)),
            Axis::X => ((Axis::Y, ASC), (Axis::Z, DESC)),
            Axis::Y => ((Axis::Z, DESC), (Axis::X, ASC)),
        };
        std::array::from_fn(|i| {
            let mut pos = face.center();
            pos[outer.0] = outer.1[i / 3];
            pos[inner.0] = inner.1[i % 3];
            PieceId::from_position(pos)
        })
    }

    /// Returns whether every face shows a single color.
    ///
    /// Each sticker on a face is compared against the face's center sticker
    /// with [`COLOR_TOLERANCE`].
    pub fn is_solved(&self) -> bool {
        Face::VARIANTS.iter().all(|&face| {
            let ids = Self::face_indices(face);
            let center = self.sticker(ids[FACE_CENTER_SLOT], face);
            ids.iter()
                .all(|&id| self.sticker(id, face).approx_eq(center, COLOR_TOLERANCE))
        })
    }
}
