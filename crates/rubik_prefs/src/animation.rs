use serde::{Deserialize, Serialize};

pub use interpolation::InterpolateFn;

/// Largest accepted twist queue capacity.
pub const MAX_QUEUE_CAPACITY: usize = 1000;
/// Smallest accepted maximum frame step, in seconds.
pub const MIN_FRAME_STEP: f32 = 0.001;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Twist speed in degrees per second.
    pub twist_speed: f32,
    /// Maximum time step in seconds that a single frame may advance an
    /// animation.
    pub max_frame_step: f32,
    /// Maximum number of twists waiting behind the current animation.
    pub queue_capacity: usize,
    pub twist_interpolation: InterpolateFn,
}
impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            twist_speed: 360.0,
            max_frame_step: 0.1,
            queue_capacity: 20,
            twist_interpolation: InterpolateFn::default(),
        }
    }
}
impl AnimationPreferences {
    /// Replaces values that would stall or reverse animations with their
    /// defaults.
    pub(crate) fn sanitize(&mut self) {
        let defaults = Self::default();
        if !(self.twist_speed.is_finite() && self.twist_speed > 0.0) {
            log::warn!(
                "Invalid twist speed {}; using {}",
                self.twist_speed,
                defaults.twist_speed,
            );
            self.twist_speed = defaults.twist_speed;
        }
        if !(self.max_frame_step.is_finite() && self.max_frame_step >= MIN_FRAME_STEP) {
            log::warn!(
                "Invalid max frame step {}; using {}",
                self.max_frame_step,
                defaults.max_frame_step,
            );
            self.max_frame_step = defaults.max_frame_step;
        }
        if self.queue_capacity > MAX_QUEUE_CAPACITY {
            log::warn!(
                "Twist queue capacity {} is too large; using {MAX_QUEUE_CAPACITY}",
                self.queue_capacity,
            );
            self.queue_capacity = MAX_QUEUE_CAPACITY;
        }
    }
}

pub mod interpolation {
    //! Interpolation functions.

    use std::f32::consts::PI;

    use serde::{Deserialize, Serialize};

    /// Function that maps a float from the range 0.0 to 1.0 to another float
    /// from 0.0 to 1.0.
    #[derive(
        Serialize,
        Deserialize,
        Debug,
        Default,
        Copy,
        Clone,
        PartialEq,
        Eq,
        Hash,
        strum::VariantArray,
        strum::Display,
    )]
    #[serde(rename_all = "snake_case")]
    #[strum(serialize_all = "snake_case")]
    pub enum InterpolateFn {
        Lerp,
        Cosine,
        /// Cubic ease-in for the first half and cubic ease-out for the second.
        #[default]
        EaseInOutCubic,
    }

    impl InterpolateFn {
        /// Returns the interpolation value in the range [0, 1] for `t` in the
        /// range [0, 1]. Values of `t` outside that range are clamped.
        pub fn interpolate(self, t: f32) -> f32 {
            let t = t.clamp(0.0, 1.0);
            match self {
                Self::Lerp => t,

                Self::Cosine => (1.0 - (t * PI).cos()) / 2.0,

                Self::EaseInOutCubic => {
                    if t < 0.5 {
                        4.0 * t * t * t
                    } else {
                        let f = 2.0 * t - 2.0;
                        0.5 * f * f * f + 1.0
                    }
                }
            }
        }
    }
}
