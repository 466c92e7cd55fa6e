use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct InteractionPreferences {
    /// Camera rotation in degrees per pixel of mouse drag.
    pub drag_sensitivity: f32,
    /// Camera rotation in degrees per key press.
    pub keyboard_rotation_step: f32,
    /// Number of random twists in a scramble.
    pub scramble_length: u32,
}
impl Default for InteractionPreferences {
    fn default() -> Self {
        Self {
            drag_sensitivity: 0.3,
            keyboard_rotation_step: 5.0,
            scramble_length: 20,
        }
    }
}
impl InteractionPreferences {
    /// Returns the camera rotation `(yaw, pitch)` in degrees for a mouse drag
    /// of `(dx, dy)` pixels.
    pub fn drag_rotation(&self, dx: f32, dy: f32) -> (f32, f32) {
        (dx * self.drag_sensitivity, dy * self.drag_sensitivity)
    }
}
