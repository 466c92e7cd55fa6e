use std::collections::VecDeque;

use itertools::Itertools;
use rubik_core::{Cube, PieceId, Twist};
use rubik_prefs::InterpolateFn;
use web_time::Duration;

/// Angle of a quarter turn, in degrees.
pub const QUARTER_TURN_DEGREES: f32 = 90.0;

/// A twist is complete once it is within this many degrees of its target.
const COMPLETION_EPSILON: f32 = 0.0001;

/// Twist waiting for the current animation to finish.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct QueuedTwist {
    /// Twist to apply.
    pub twist: Twist,
    /// Whether the twist is part of a scramble.
    pub is_scramble: bool,
}

/// Twist that is currently being animated.
#[derive(Debug, Clone, PartialEq)]
pub struct TwistAnimation {
    /// Twist being animated.
    pub twist: Twist,
    /// Whether the twist is part of a scramble.
    pub is_scramble: bool,
    /// Linear progress of the animation, in degrees.
    pub current_angle: f32,
    /// Angle at which the animation completes, in degrees.
    pub target_angle: f32,
    /// Speed of the animation, in degrees per second.
    pub speed: f32,
    /// Eased angle to draw the twisted pieces at, in degrees.
    pub display_angle: f32,
    /// Pieces on the twisted face.
    pub pieces: [PieceId; 9],
}
impl TwistAnimation {
    fn new(queued: QueuedTwist, speed: f32) -> Self {
        Self {
            twist: queued.twist,
            is_scramble: queued.is_scramble,
            current_angle: 0.0,
            target_angle: QUARTER_TURN_DEGREES,
            speed,
            display_angle: 0.0,
            pieces: Cube::face_indices(queued.twist.face),
        }
    }

    /// Returns the linear progress of the animation from 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        if self.target_angle > 0.0 {
            self.current_angle / self.target_angle
        } else {
            1.0
        }
    }

    /// Returns the display angle as a right-handed rotation about the positive
    /// direction of the twist axis.
    pub fn signed_display_angle(&self) -> f32 {
        self.display_angle * self.twist.angle_sign().float()
    }

    /// Returns whether the animation has reached its target angle.
    pub fn is_complete(&self) -> bool {
        self.current_angle >= self.target_angle - COMPLETION_EPSILON
    }

    /// Returns whether `piece` is being moved by the animation.
    pub fn contains_piece(&self, piece: PieceId) -> bool {
        self.pieces.contains(&piece)
    }
}

/// Result of requesting a twist.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TwistRequestOutcome {
    /// The twist started animating immediately.
    Started,
    /// The twist was added to the queue behind the current animation.
    Queued,
    /// The queue was full, so the twist was discarded.
    Dropped,
}
impl TwistRequestOutcome {
    /// Returns whether the twist will eventually be applied.
    pub fn is_accepted(self) -> bool {
        self != Self::Dropped
    }
}

/// At most one animating twist plus a bounded queue of twists waiting behind
/// it.
#[derive(Debug, Clone)]
pub struct TwistAnimationState {
    current: Option<TwistAnimation>,
    /// Queue of twists waiting for the current animation to finish.
    queue: VecDeque<QueuedTwist>,
    /// Maximum number of twists in the queue.
    queue_capacity: usize,
}
impl TwistAnimationState {
    /// Constructs an idle state with an empty queue.
    pub fn new(queue_capacity: usize) -> Self {
        Self {
            current: None,
            queue: VecDeque::new(),
            queue_capacity,
        }
    }

    /// Returns the current animation, if any.
    pub fn current(&self) -> Option<&TwistAnimation> {
        self.current.as_ref()
    }
    /// Returns whether a twist is animating.
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
    /// Returns whether `piece` is moved by the current animation.
    pub fn is_piece_animating(&self, piece: PieceId) -> bool {
        self.current.as_ref().is_some_and(|anim| anim.contains_piece(piece))
    }

    /// Returns the twists waiting in the queue, oldest first.
    pub fn queued(&self) -> impl Iterator<Item = &QueuedTwist> {
        self.queue.iter()
    }
    /// Returns the number of twists waiting in the queue.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }
    /// Returns the maximum number of twists in the queue.
    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }
    /// Returns whether another twist can be queued.
    pub fn is_queue_full(&self) -> bool {
        self.queue.len() >= self.queue_capacity
    }

    /// Starts animating a twist, replacing any current animation.
    pub(crate) fn start(&mut self, queued: QueuedTwist, speed: f32) {
        let anim = TwistAnimation::new(queued, speed);
        log::debug!(
            "animation start: {} (scramble={}) pieces [{}]",
            anim.twist,
            anim.is_scramble,
            anim.pieces.iter().map(|id| id.0).join(", "),
        );
        self.current = Some(anim);
    }

    /// Adds a twist to the back of the queue. Returns `false` if the queue is
    /// full.
    pub(crate) fn push(&mut self, queued: QueuedTwist) -> bool {
        if self.is_queue_full() {
            return false;
        }
        self.queue.push_back(queued);
        log::debug!("queued {} ({} waiting)", queued.twist, self.queue.len());
        true
    }

    /// Removes the twist at the front of the queue.
    pub(crate) fn pop_queued(&mut self) -> Option<QueuedTwist> {
        self.queue.pop_front()
    }

    /// Steps the current animation forward. Returns the animation if it
    /// completed during this step, in which case the state is now idle.
    pub(crate) fn proceed(
        &mut self,
        delta: Duration,
        interpolate: InterpolateFn,
    ) -> Option<TwistAnimation> {
        let anim = self.current.as_mut()?;

        anim.current_angle =
            (anim.current_angle + anim.speed * delta.as_secs_f32()).min(anim.target_angle);
        anim.display_angle = interpolate.interpolate(anim.progress()) * anim.target_angle;

        if anim.is_complete() {
            let finished = self.current.take();
            if let Some(anim) = &finished {
                log::debug!("animation end: {}", anim.twist);
            }
            finished
        } else {
            None
        }
    }

    /// Stops the current animation without applying it and empties the queue.
    pub(crate) fn cancel(&mut self) {
        if self.current.is_some() || !self.queue.is_empty() {
            log::debug!("cancelled animation and {} queued twists", self.queue.len());
        }
        self.current = None;
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rubik_core::Face;

    use super::*;

    fn queued(face: Face) -> QueuedTwist {
        QueuedTwist {
            twist: Twist::cw(face),
            is_scramble: false,
        }
    }

    #[test]
    fn test_proceed_eases_and_completes() {
        let mut state = TwistAnimationState::new(4);
        assert_eq!(state.proceed(Duration::from_millis(100), InterpolateFn::Lerp), None);

        state.start(queued(Face::Up), 360.0);
        assert!(state.is_piece_animating(PieceId(6)));
        assert!(!state.is_piece_animating(PieceId(0)));

        let done = state.proceed(Duration::from_millis(125), InterpolateFn::EaseInOutCubic);
        assert_eq!(done, None);
        let anim = state.current().unwrap();
        assert!((anim.current_angle - 45.0).abs() < 1e-3);
        assert!((anim.display_angle - 45.0).abs() < 1e-3);
        // U is clockwise on a positive face, so it is a negative rotation.
        assert!((anim.signed_display_angle() + 45.0).abs() < 1e-3);

        let done = state.proceed(Duration::from_millis(200), InterpolateFn::EaseInOutCubic);
        let done = done.unwrap();
        assert_eq!(done.current_angle, QUARTER_TURN_DEGREES);
        assert_eq!(done.display_angle, QUARTER_TURN_DEGREES);
        assert!(!state.is_active());
    }

    #[test]
    fn test_queue_capacity() {
        let mut state = TwistAnimationState::new(2);
        assert!(state.push(queued(Face::Front)));
        assert!(state.push(queued(Face::Back)));
        assert!(state.is_queue_full());
        assert!(!state.push(queued(Face::Left)));
        assert_eq!(state.queue_len(), 2);
        assert_eq!(state.pop_queued(), Some(queued(Face::Front)));
        assert_eq!(state.pop_queued(), Some(queued(Face::Back)));
        assert_eq!(state.pop_queued(), None);
    }

    #[test]
    fn test_cancel() {
        let mut state = TwistAnimationState::new(2);
        state.start(queued(Face::Down), 360.0);
        state.push(queued(Face::Front));
        state.cancel();
        assert!(!state.is_active());
        assert_eq!(state.queue_len(), 0);
    }
}
