use std::collections::BTreeMap;

use crate::{Cube, parse_twists};


/// Returns a cube in an arbitrary but fixed mixed-up state.
fn mixed_cube() -> Cube {
    let mut cube = Cube::new();
    let twists = parse_twists("R U R' U' F2 D L' B2 U'").expect("bad test notation");
    cube.rotate_faces(twists);
    cube
}

/// Counts how many stickers of each color are on the cube, including hidden
/// ones.
fn color_histogram(cube: &Cube) -> BTreeMap<[u8; 3], usize> {
    let mut ret = BTreeMap::new();
    for piece in cube.pieces() {
        for (_face, color) in piece.stickers.iter() {
            *ret.entry(color.to_rgb8()).or_default() += 1;
        }
    }
    ret
}
