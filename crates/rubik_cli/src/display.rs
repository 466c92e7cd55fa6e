//! Text rendering of the cube as an unfolded net.
//!
//! ```text
//!       U U U
//!       U U U
//!       U U U
//! L L L F F F R R R B B B
//! L L L F F F R R R B B B
//! L L L F F F R R R B B B
//!       D D D
//!       D D D
//!       D D D
//! ```

use owo_colors::OwoColorize;
use rubik_core::{COLOR_TOLERANCE, Cube, Face, Position, Rgb, Sign};
use strum::VariantArray;

/// Faces in each row of the net, with the column (in units of faces) where
/// each one starts.
const NET_ROWS: [&[(usize, Face)]; 3] = [
    &[(1, Face::Up)],
    &[
        (0, Face::Left),
        (1, Face::Front),
        (2, Face::Right),
        (3, Face::Back),
    ],
    &[(1, Face::Down)],
];

/// Returns the piece whose sticker appears at `(row, col)` of `face` when the
/// face is viewed head-on in the net.
fn net_position(face: Face, row: usize, col: usize) -> Position {
    let across = Sign::ALL[col];
    let down = Sign::ALL[2 - row];
    let up = Sign::ALL[row];
    match face {
        Face::Front => Position::new(across, down, Sign::Pos),
        Face::Back => Position::new(-across, down, Sign::Neg),
        Face::Left => Position::new(Sign::Neg, down, across),
        Face::Right => Position::new(Sign::Pos, down, -across),
        Face::Up => Position::new(across, Sign::Pos, up),
        Face::Down => Position::new(across, Sign::Neg, -up),
    }
}

/// Returns the letter of the face whose solved color is `color`, or `?`.
fn sticker_symbol(color: Rgb) -> char {
    Face::VARIANTS
        .iter()
        .find(|&&face| color.approx_eq(Rgb::solved_color(face), COLOR_TOLERANCE))
        .map_or('?', |face| face.symbol())
}

/// Renders the cube as a net. If `color` is true, each sticker is a block of
/// its color; otherwise it is the letter of the face it belongs to when
/// solved.
pub(crate) fn render_net(cube: &Cube, color: bool) -> String {
    let mut out = String::new();
    for faces in NET_ROWS {
        for row in 0..3 {
            let mut line = String::new();
            let mut column = 0;
            for &(start, face) in faces {
                while column < start {
                    line += "      ";
                    column += 1;
                }
                for col in 0..3 {
                    let sticker = cube.piece_at(net_position(face, row, col)).stickers[face];
                    if color {
                        let [r, g, b] = sticker.to_rgb8();
                        line += &format!("{}", "  ".on_truecolor(r, g, b));
                    } else {
                        line.push(sticker_symbol(sticker));
                        line.push(' ');
                    }
                }
                column += 1;
            }
            out += line.trim_end();
            out.push('\n');
        }
    }
    out
}
