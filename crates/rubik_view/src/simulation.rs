use rand::Rng;
use rubik_core::{Cube, Face, PieceId, Twist, TwistDirection};
use rubik_prefs::{AnimationPreferences, Preferences};
use strum::VariantArray;
use web_time::Duration;

use crate::animations::{QueuedTwist, TwistAnimation, TwistAnimationState, TwistRequestOutcome};
use crate::{Camera, Intent, MoveObserver, RelativeFace, ViewMapping};

/// Frame step used when the configured maximum is unusable.
const FALLBACK_MAX_FRAME_STEP: Duration = Duration::from_millis(100);

/// Cube, camera, and twist animation state, driven one frame at a time by the
/// host.
///
/// Twists are applied to the cube only when their animation completes, so the
/// cube state always lags behind the queue.
#[derive(Debug, Clone)]
pub struct RubikSimulation<O = ()> {
    cube: Cube,
    camera: Camera,
    twist_anim: TwistAnimationState,
    /// Number of accepted scramble twists that have not been applied yet.
    scramble_moves_pending: u32,
    prefs: AnimationPreferences,
    observer: O,
}
impl Default for RubikSimulation<()> {
    fn default() -> Self {
        Self::new(&Preferences::default())
    }
}
impl RubikSimulation<()> {
    /// Constructs a simulation of a solved cube with no observer.
    pub fn new(prefs: &Preferences) -> Self {
        Self::with_observer(prefs, ())
    }
}
impl<O: MoveObserver> RubikSimulation<O> {
    /// Constructs a simulation of a solved cube that notifies `observer` about
    /// twists.
    pub fn with_observer(prefs: &Preferences, observer: O) -> Self {
        Self {
            cube: Cube::new(),
            camera: Camera::new(),
            twist_anim: TwistAnimationState::new(prefs.animation.queue_capacity),
            scramble_moves_pending: 0,
            prefs: prefs.animation.clone(),
            observer,
        }
    }

    /// Returns the cube. Twists that are animating or queued have not been
    /// applied yet.
    pub fn cube(&self) -> &Cube {
        &self.cube
    }
    /// Returns the camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }
    /// Returns the camera mutably.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }
    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }
    /// Returns the observer mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
    /// Returns the animation preferences.
    pub fn animation_prefs(&self) -> &AnimationPreferences {
        &self.prefs
    }
    /// Returns the animation state and queue.
    pub fn twist_anim(&self) -> &TwistAnimationState {
        &self.twist_anim
    }

    /// Returns the twist currently animating, if any.
    pub fn current_animation(&self) -> Option<&TwistAnimation> {
        self.twist_anim.current()
    }
    /// Returns whether a twist is animating.
    pub fn is_animating(&self) -> bool {
        self.twist_anim.is_active()
    }
    /// Returns whether nothing is animating or queued.
    pub fn is_idle(&self) -> bool {
        !self.twist_anim.is_active() && self.twist_anim.queue_len() == 0
    }
    /// Returns whether `piece` should be drawn rotated by the current
    /// animation.
    pub fn is_piece_animating(&self, piece: PieceId) -> bool {
        self.twist_anim.is_piece_animating(piece)
    }
    /// Returns the number of scramble twists that have not been applied yet.
    pub fn scramble_moves_pending(&self) -> u32 {
        self.scramble_moves_pending
    }

    /// Returns the current view mapping.
    pub fn view_mapping(&self) -> ViewMapping {
        self.camera.view_mapping()
    }
    /// Returns the absolute face that currently has the role `slot`.
    pub fn resolve_relative_face(&self, slot: RelativeFace) -> Face {
        let mapping = self.view_mapping();
        let face = mapping.resolve(slot);
        log::debug!(
            "relative {slot} -> {face} ({mapping}) at pitch={:.1} yaw={:.1}",
            self.camera.pitch,
            self.camera.yaw,
        );
        face
    }

    /// Handles an intent from the input layer.
    pub fn handle_intent(&mut self, intent: Intent) {
        match intent {
            Intent::Turn { slot, direction } => {
                self.turn_relative(slot, direction);
            }
            Intent::TurnAbsolute(twist) => {
                self.request_twist(twist, false);
            }
            Intent::Scramble { moves } => self.scramble(moves),
            Intent::Reset => self.reset(),
            Intent::RotateCamera {
                delta_yaw,
                delta_pitch,
            } => self.camera.rotate(delta_yaw, delta_pitch),
            Intent::SetFrontFace(face) => self.camera.set_front_face(face),
        }
    }

    /// Turns the face that currently has the role `slot` in the view.
    pub fn turn_relative(
        &mut self,
        slot: RelativeFace,
        direction: TwistDirection,
    ) -> TwistRequestOutcome {
        let face = self.resolve_relative_face(slot);
        self.request_twist(Twist::new(face, direction), false)
    }

    /// Starts animating `twist` if nothing is animating, or else adds it to the
    /// queue. If the queue is full, the twist is dropped.
    pub fn request_twist(&mut self, twist: Twist, is_scramble: bool) -> TwistRequestOutcome {
        let queued = QueuedTwist { twist, is_scramble };
        if !self.twist_anim.is_active() {
            self.start_twist(queued);
            TwistRequestOutcome::Started
        } else if self.twist_anim.push(queued) {
            TwistRequestOutcome::Queued
        } else {
            log::warn!(
                "twist queue full ({}); dropping {twist}",
                self.twist_anim.queue_capacity(),
            );
            TwistRequestOutcome::Dropped
        }
    }

    fn start_twist(&mut self, queued: QueuedTwist) {
        self.observer.on_move_started();
        self.twist_anim.start(queued, self.prefs.twist_speed);
    }

    /// Queues `moves` random twists using the thread-local RNG.
    pub fn scramble(&mut self, moves: u32) {
        self.scramble_with_rng(moves, &mut rand::rng());
    }

    /// Queues `moves` random twists using `rng`. Does nothing if `moves` is
    /// zero.
    ///
    /// Twists that do not fit in the queue are dropped and not counted as
    /// pending.
    pub fn scramble_with_rng(&mut self, moves: u32, rng: &mut impl Rng) {
        if moves == 0 {
            return;
        }
        log::info!("scrambling with {moves} moves");
        self.observer.on_scramble_started();
        for _ in 0..moves {
            let face = Face::VARIANTS[rng.random_range(0..Face::COUNT)];
            let direction = TwistDirection::from_clockwise(rng.random_bool(0.5));
            if self
                .request_twist(Twist::new(face, direction), true)
                .is_accepted()
            {
                self.scramble_moves_pending += 1;
            }
        }
    }

    /// Cancels all animation and queued twists and resets the cube to solved.
    pub fn reset(&mut self) {
        self.twist_anim.cancel();
        self.cube.initialize();
        self.scramble_moves_pending = 0;
        self.observer.on_reset();
        log::info!("cube reset");
    }

    /// Advances the simulation by `delta`, clamped to the maximum frame step
    /// for animation purposes.
    ///
    /// If the current twist completes, it is applied to the cube and the next
    /// queued twist starts immediately.
    pub fn advance(&mut self, delta: Duration) {
        let max_step = Duration::try_from_secs_f32(self.prefs.max_frame_step)
            .unwrap_or(FALLBACK_MAX_FRAME_STEP);
        let step = delta.min(max_step);

        if let Some(finished) = self
            .twist_anim
            .proceed(step, self.prefs.twist_interpolation)
        {
            self.cube.rotate_face(finished.twist);
            self.on_twist_applied(finished.is_scramble);
            if let Some(next) = self.twist_anim.pop_queued() {
                self.start_twist(next);
            }
        }

        self.observer
            .on_tick(delta, &self.cube, self.twist_anim.is_active());
    }

    /// Advances the simulation by `delta_secs` seconds. Negative or non-finite
    /// values are treated as zero.
    pub fn advance_secs(&mut self, delta_secs: f32) {
        let delta = Duration::try_from_secs_f32(delta_secs.max(0.0)).unwrap_or_default();
        self.advance(delta);
    }

    fn on_twist_applied(&mut self, was_scramble: bool) {
        self.observer.on_move_completed(was_scramble);
        if was_scramble && self.scramble_moves_pending > 0 {
            self.scramble_moves_pending -= 1;
            if self.scramble_moves_pending == 0 {
                log::info!("scramble complete");
                self.observer.on_scramble_finished();
            }
        }
    }

    /// Advances the simulation by `frame` until nothing is animating or queued,
    /// or until `max_frames` frames have passed. Returns the number of frames
    /// advanced.
    pub fn run_until_idle(&mut self, frame: Duration, max_frames: usize) -> usize {
        let mut frames = 0;
        while !self.is_idle() && frames < max_frames {
            self.advance(frame);
            frames += 1;
        }
        frames
    }
}
