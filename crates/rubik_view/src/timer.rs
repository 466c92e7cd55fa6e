//! Speed timer that measures solves.

use rubik_core::Cube;
use web_time::Duration;

use crate::MoveObserver;

/// State of a [`SpeedTimer`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TimerState {
    /// No scramble has finished since the last reset.
    #[default]
    Idle,
    /// A scramble has finished; the timer starts on the next move.
    Ready,
    /// A solve is in progress.
    Running,
    /// The cube was solved.
    Stopped,
}

/// Solve timer driven by [`MoveObserver`] notifications.
///
/// Scramble moves are never counted. The timer arms when a scramble finishes,
/// starts on the first move after that, and stops on the first frame where
/// the cube is solved and nothing is animating.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SpeedTimer {
    state: TimerState,
    elapsed: Duration,
    move_count: u32,
}
impl SpeedTimer {
    /// Constructs an idle timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state of the timer.
    pub fn state(&self) -> TimerState {
        self.state
    }
    /// Returns the time since the first move of the solve.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
    /// Returns the number of moves in the solve.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }
    /// Returns the average turns per second of the solve.
    pub fn tps(&self) -> f32 {
        let secs = self.elapsed.as_secs_f32();
        if secs > 0.0 {
            self.move_count as f32 / secs
        } else {
            0.0
        }
    }

    fn clear(&mut self, state: TimerState) {
        *self = Self {
            state,
            ..Self::default()
        };
    }

    /// Returns the lines of text to show in the timer overlay.
    pub fn status_lines(&self, scramble_moves_pending: u32) -> Vec<String> {
        if scramble_moves_pending > 0 {
            return vec![
                format!("Scrambling... ({scramble_moves_pending} moves left)"),
                "Please wait for scramble to finish".to_owned(),
            ];
        }
        match self.state {
            TimerState::Idle => vec!["Press 'S' to scramble".to_owned()],
            TimerState::Ready => vec!["READY - Make a move to start".to_owned()],
            TimerState::Running => vec![
                format_time(self.elapsed),
                format!("Moves: {}", self.move_count),
                format!("TPS: {:.2}", self.tps()),
            ],
            TimerState::Stopped => vec![format!(
                "Solved! Time {:.2}s | Moves {} | TPS {:.2}",
                self.elapsed.as_secs_f32(),
                self.move_count,
                self.tps(),
            )],
        }
    }
}

impl MoveObserver for SpeedTimer {
    fn on_move_started(&mut self) {
        if self.state == TimerState::Ready {
            self.clear(TimerState::Running);
            log::info!("timer started");
        }
        if self.state == TimerState::Running {
            self.move_count += 1;
        }
    }

    fn on_move_completed(&mut self, _was_scramble_move: bool) {}

    fn on_scramble_started(&mut self) {
        self.clear(TimerState::Idle);
    }

    fn on_scramble_finished(&mut self) {
        self.clear(TimerState::Ready);
        log::info!("scramble finished; timer ready");
    }

    fn on_reset(&mut self) {
        self.clear(TimerState::Idle);
    }

    fn on_tick(&mut self, delta: Duration, cube: &Cube, is_animating: bool) {
        if self.state != TimerState::Running {
            return;
        }
        self.elapsed += delta;
        if !is_animating && cube.is_solved() {
            self.state = TimerState::Stopped;
            log::info!(
                "solved in {} with {} moves ({:.2} TPS)",
                format_time(self.elapsed),
                self.move_count,
                self.tps(),
            );
        }
    }
}

/// Formats a duration as `MM:SS.mmm`.
pub fn format_time(duration: Duration) -> String {
    let millis = duration.as_millis();
    let minutes = millis / 60_000;
    let seconds = (millis % 60_000) / 1000;
    let millis = millis % 1000;
    format!("{minutes:02}:{seconds:02}.{millis:03}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rubik_core::{Face, Twist};

    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(Duration::ZERO), "00:00.000");
        assert_eq!(format_time(Duration::from_millis(83_456)), "01:23.456");
        assert_eq!(format_time(Duration::from_secs(600)), "10:00.000");
    }

    #[test]
    fn test_timer_lifecycle() {
        let mut timer = SpeedTimer::new();
        let mut cube = Cube::new();
        assert_eq!(timer.status_lines(0), vec!["Press 'S' to scramble"]);

        // Moves before a scramble are not timed.
        timer.on_move_started();
        timer.on_tick(Duration::from_secs(1), &cube, true);
        assert_eq!(timer.state(), TimerState::Idle);

        timer.on_scramble_started();
        assert_eq!(
            timer.status_lines(3)[0],
            "Scrambling... (3 moves left)",
        );
        timer.on_scramble_finished();
        assert_eq!(timer.state(), TimerState::Ready);
        assert_eq!(timer.status_lines(0), vec!["READY - Make a move to start"]);

        cube.rotate_face(Twist::cw(Face::Front));
        timer.on_move_started();
        assert_eq!(timer.state(), TimerState::Running);
        assert_eq!(timer.move_count(), 1);
        timer.on_tick(Duration::from_millis(500), &cube, true);
        timer.on_move_started();
        timer.on_tick(Duration::from_millis(500), &cube, false);
        assert_eq!(timer.state(), TimerState::Running);
        assert_eq!(
            timer.status_lines(0),
            vec!["00:01.000", "Moves: 2", "TPS: 2.00"],
        );

        cube.rotate_face(Twist::ccw(Face::Front));
        // Solved, but the last animation is still in progress.
        timer.on_tick(Duration::from_millis(500), &cube, true);
        assert_eq!(timer.state(), TimerState::Running);
        timer.on_tick(Duration::from_millis(500), &cube, false);
        assert_eq!(timer.state(), TimerState::Stopped);
        assert_eq!(timer.elapsed(), Duration::from_secs(2));
        assert_eq!(
            timer.status_lines(0),
            vec!["Solved! Time 2.00s | Moves 2 | TPS 1.00"],
        );

        // Stopped timers ignore further ticks and moves.
        timer.on_move_started();
        timer.on_tick(Duration::from_secs(1), &cube, false);
        assert_eq!(timer.elapsed(), Duration::from_secs(2));

        timer.on_reset();
        assert_eq!(timer, SpeedTimer::new());
    }
}
