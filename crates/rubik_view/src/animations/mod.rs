//! Twist animation and the queue of twists waiting behind it.

mod twist;

pub use twist::{
    QUARTER_TURN_DEGREES, QueuedTwist, TwistAnimation, TwistAnimationState, TwistRequestOutcome,
};
