use rubik_core::Cube;
use rubik_prefs::Preferences;
use web_time::Duration;

use crate::{MoveObserver, RubikSimulation};

mod simulation;

/// One frame at 60 FPS.
const FRAME: Duration = Duration::from_micros(16_667);
/// Upper bound on frames when waiting for the queue to drain.
const MAX_FRAMES: usize = 100_000;

/// Notification received by [`Recorder`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Event {
    Started,
    Completed { scramble: bool },
    ScrambleStarted,
    ScrambleFinished,
    Reset,
}

/// Observer that records every notification except ticks.
#[derive(Debug, Default, Clone)]
struct Recorder {
    events: Vec<Event>,
}
impl Recorder {
    fn count(&self, event: Event) -> usize {
        self.events.iter().filter(|&&e| e == event).count()
    }
}
impl MoveObserver for Recorder {
    fn on_move_started(&mut self) {
        self.events.push(Event::Started);
    }
    fn on_move_completed(&mut self, was_scramble_move: bool) {
        self.events.push(Event::Completed {
            scramble: was_scramble_move,
        });
    }
    fn on_scramble_started(&mut self) {
        self.events.push(Event::ScrambleStarted);
    }
    fn on_scramble_finished(&mut self) {
        self.events.push(Event::ScrambleFinished);
    }
    fn on_reset(&mut self) {
        self.events.push(Event::Reset);
    }
}

fn recording_sim(prefs: &Preferences) -> RubikSimulation<Recorder> {
    RubikSimulation::with_observer(prefs, Recorder::default())
}

fn drain<O: MoveObserver>(sim: &mut RubikSimulation<O>) {
    sim.run_until_idle(FRAME, MAX_FRAMES);
    assert!(sim.is_idle(), "queue did not drain");
}

fn cube_after(twists: impl IntoIterator<Item = rubik_core::Twist>) -> Cube {
    let mut cube = Cube::new();
    cube.rotate_faces(twists);
    cube
}
