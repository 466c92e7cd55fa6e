use rubik_core::Cube;
use web_time::Duration;

/// Receives notifications about twists from a
/// [`RubikSimulation`](crate::RubikSimulation).
///
/// The observer never modifies the cube. A speed timer is the typical
/// implementation; see [`SpeedTimer`](crate::SpeedTimer).
pub trait MoveObserver {
    /// Called when a twist starts animating, once per twist.
    fn on_move_started(&mut self);
    /// Called after a twist has been applied to the cube.
    fn on_move_completed(&mut self, was_scramble_move: bool);

    /// Called when a new scramble is requested.
    fn on_scramble_started(&mut self) {}
    /// Called after the last move of a scramble has been applied.
    fn on_scramble_finished(&mut self) {}
    /// Called after the cube has been reset to solved.
    fn on_reset(&mut self) {}
    /// Called once per frame with the unclamped frame time.
    fn on_tick(&mut self, delta: Duration, cube: &Cube, is_animating: bool) {
        let _ = (delta, cube, is_animating);
    }
}

impl MoveObserver for () {
    fn on_move_started(&mut self) {}
    fn on_move_completed(&mut self, _was_scramble_move: bool) {}
}
