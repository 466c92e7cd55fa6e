//! Quarter-turn rotation of cube faces.
//!
//! A twist never moves a [`Piece`](crate::Piece) between array slots. Instead,
//! each of the 9 pieces on the face receives the stickers of the piece that
//! rotates into its position, and those stickers are reoriented so that each
//! color keeps facing the same direction relative to the piece.

use strum::VariantArray;

use crate::{Axis, Cube, Face, PerFace, PieceId, Position, Rgb, Sign, Twist};

/// Rotates a grid position by 90 degrees about `axis`.
///
/// `angle_sign` is the sign of the rotation angle using the right-hand rule;
/// [`Sign::Zero`] leaves the position unchanged.
pub fn rotate_position(pos: Position, axis: Axis, angle_sign: Sign) -> Position {
    let [x, y, z] = pos.0;
    let [x, y, z] = match (axis, angle_sign) {
        (_, Sign::Zero) => [x, y, z],
        (Axis::X, Sign::Pos) => [x, -z, y],
        (Axis::X, Sign::Neg) => [x, z, -y],
        (Axis::Y, Sign::Pos) => [z, y, -x],
        (Axis::Y, Sign::Neg) => [-z, y, x],
        (Axis::Z, Sign::Pos) => [-y, x, z],
        (Axis::Z, Sign::Neg) => [y, -x, z],
    };
    Position([x, y, z])
}

/// Returns the face that `face` points towards after rotating the whole cube
/// by 90 degrees about `axis`.
pub fn rotate_face_normal(face: Face, axis: Axis, angle_sign: Sign) -> Face {
    let rotated = rotate_position(face.center(), axis, angle_sign);
    // Rotations map unit vectors to unit vectors.
    Face::from_normal(rotated).unwrap_or(face)
}

/// Cycles the four stickers perpendicular to `axis` one step in the direction
/// of rotation. The two stickers on `axis` are unchanged.
///
/// This uses the same rotation as [`rotate_position()`], so sticker
/// orientation always agrees with piece movement.
pub fn cycle_side_stickers(stickers: &mut PerFace<Rgb>, axis: Axis, angle_sign: Sign) {
    let old = *stickers;
    for &face in Face::VARIANTS {
        if face.axis() != axis {
            stickers[rotate_face_normal(face, axis, angle_sign)] = old[face];
        }
    }
}

impl Cube {
    /// Applies a quarter turn to the pieces on `twist.face`.
    ///
    /// The center piece of the face keeps its stickers unchanged. Every other
    /// piece on the face receives the stickers of the piece that rotates into
    /// its position, then has its side stickers cycled.
    pub fn rotate_face(&mut self, twist: Twist) {
        let axis = twist.face.axis();
        let angle_sign = twist.angle_sign();
        let ids = Cube::face_indices(twist.face);
        let snapshot: [PerFace<Rgb>; 9] = ids.map(|id| self[id].stickers);

        let mut slot_by_key = [None; PieceId::COUNT];
        for (slot, &id) in ids.iter().enumerate() {
            slot_by_key[self[id].position.key()] = Some(slot);
        }

        // `source_of[dst] == src` means the stickers of slot `src` move to
        // slot `dst`.
        let mut source_of = [0_usize; 9];
        for (src, &id) in ids.iter().enumerate() {
            let new_pos = rotate_position(self[id].position, axis, angle_sign);
            let Some(dst) = slot_by_key[new_pos.key()] else {
                log::error!("{twist}: {} rotated off the face to {new_pos}", self[id].position);
                return;
            };
            source_of[dst] = src;
        }

        let center = twist.face.center();
        for (dst, &id) in ids.iter().enumerate() {
            let piece = &mut self[id];
            piece.stickers = snapshot[source_of[dst]];
            if piece.position != center {
                cycle_side_stickers(&mut piece.stickers, axis, angle_sign);
            }
        }

        log::trace!("applied {twist} (axis {axis}, angle sign {angle_sign:?}); map {source_of:?}");
    }

    /// Applies a sequence of twists.
    pub fn rotate_faces(&mut self, twists: impl IntoIterator<Item = Twist>) {
        for twist in twists {
            self.rotate_face(twist);
        }
    }

    /// Checks that four clockwise quarter turns of each face restore the cube
    /// exactly, starting from the current state.
    ///
    /// Returns the faces that failed.
    pub fn verify_rotation_identity(&self) -> Vec<Face> {
        Face::VARIANTS
            .iter()
            .copied()
            .filter(|&face| {
                let mut cube = self.clone();
                cube.rotate_faces([Twist::cw(face); 4]);
                let ok = cube == *self;
                if !ok {
                    log::warn!("four {face} turns did not restore the cube");
                }
                !ok
            })
            .collect()
    }
}
