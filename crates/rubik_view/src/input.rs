//! Translation of keyboard and mouse input into simulation intents.

use std::collections::HashSet;

use rubik_core::{Face, Twist, TwistDirection};
use rubik_prefs::InteractionPreferences;

use crate::RelativeFace;

/// Discrete request from the user.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Intent {
    /// Turn the face that currently has the role `slot` in the view.
    Turn {
        /// Viewer-relative face.
        slot: RelativeFace,
        /// Direction to turn the face.
        direction: TwistDirection,
    },
    /// Turn a fixed face regardless of the camera.
    TurnAbsolute(Twist),
    /// Queue a random scramble.
    Scramble {
        /// Number of random twists.
        moves: u32,
    },
    /// Cancel all twists and reset to solved.
    Reset,
    /// Rotate the camera.
    RotateCamera {
        /// Change in yaw, in degrees.
        delta_yaw: f32,
        /// Change in pitch, in degrees.
        delta_pitch: f32,
    },
    /// Change which face camera rotation treats as the front.
    SetFrontFace(Face),
}

/// Key on the keyboard.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Key {
    /// Printable character, including case.
    Char(char),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

/// Returns the intent bound to `key`, if any.
///
/// - `f u r l d b` turn the relative face clockwise; uppercase turns it
///   counterclockwise.
/// - `s` scrambles and space resets.
/// - `1`-`6` set the front face for camera rotation (FRONT, BACK, LEFT, RIGHT,
///   UP, DOWN).
/// - Arrow keys or `w x a z` rotate the camera.
pub fn intent_for_key(key: Key, prefs: &InteractionPreferences) -> Option<Intent> {
    let step = prefs.keyboard_rotation_step;
    let camera = |delta_yaw, delta_pitch| {
        Some(Intent::RotateCamera {
            delta_yaw,
            delta_pitch,
        })
    };
    let c = match key {
        Key::ArrowUp => return camera(0.0, -step),
        Key::ArrowDown => return camera(0.0, step),
        Key::ArrowLeft => return camera(-step, 0.0),
        Key::ArrowRight => return camera(step, 0.0),
        Key::Char(c) => c,
    };
    match c {
        ' ' => Some(Intent::Reset),
        's' | 'S' => Some(Intent::Scramble {
            moves: prefs.scramble_length,
        }),
        'w' => camera(0.0, -step),
        'x' => camera(0.0, step),
        'a' => camera(-step, 0.0),
        'z' => camera(step, 0.0),
        '1'..='6' => {
            let index = c as u8 - b'1';
            Face::try_from(index).ok().map(Intent::SetFrontFace)
        }
        _ => {
            let face = Face::from_symbol(c)?;
            Some(Intent::Turn {
                slot: RelativeFace::from(face),
                direction: TwistDirection::from_clockwise(c.is_ascii_lowercase()),
            })
        }
    }
}

/// Returns the camera rotation for a mouse drag of `(dx, dy)` pixels.
pub fn intent_for_drag(dx: f32, dy: f32, prefs: &InteractionPreferences) -> Intent {
    let (delta_yaw, delta_pitch) = prefs.drag_rotation(dx, dy);
    Intent::RotateCamera {
        delta_yaw,
        delta_pitch,
    }
}

/// Keyboard state that suppresses auto-repeat for keys that twist, scramble,
/// or reset.
#[derive(Debug, Default, Clone)]
pub struct KeyboardState {
    held: HashSet<char>,
}
impl KeyboardState {
    /// Handles a key press, returning its intent unless it is a repeat of a
    /// held key.
    pub fn press(&mut self, key: Key, prefs: &InteractionPreferences) -> Option<Intent> {
        let intent = intent_for_key(key, prefs)?;
        let repeatable = matches!(
            intent,
            Intent::RotateCamera { .. } | Intent::SetFrontFace(_)
        );
        if let (Key::Char(c), false) = (key, repeatable) {
            if !self.held.insert(c.to_ascii_lowercase()) {
                log::trace!("ignoring repeat of {c:?}");
                return None;
            }
        }
        Some(intent)
    }

    /// Handles a key release.
    pub fn release(&mut self, key: Key) {
        if let Key::Char(c) = key {
            self.held.remove(&c.to_ascii_lowercase());
        }
    }
}
