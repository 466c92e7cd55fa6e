use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rubik_core::{Face, PieceId, Twist, TwistDirection};
use strum::VariantArray;

use super::*;
use crate::animations::{QUARTER_TURN_DEGREES, TwistRequestOutcome};
use crate::{Intent, RelativeFace, SpeedTimer, TimerState};

#[test]
fn test_twist_applies_only_on_completion() {
    let mut sim = RubikSimulation::default();
    assert_eq!(
        sim.request_twist(Twist::cw(Face::Right), false),
        TwistRequestOutcome::Started,
    );
    assert!(sim.is_animating());
    assert!(sim.is_piece_animating(PieceId(2)));
    assert!(!sim.is_piece_animating(PieceId(0)));

    sim.advance(FRAME);
    assert!(sim.cube().is_solved());
    let anim = sim.current_animation().unwrap();
    assert!(anim.current_angle > 0.0 && anim.current_angle < QUARTER_TURN_DEGREES);

    drain(&mut sim);
    assert_eq!(*sim.cube(), cube_after([Twist::cw(Face::Right)]));
    assert!(sim.current_animation().is_none());
}

#[test]
fn test_queue_is_fifo() {
    let mut sim = recording_sim(&Preferences::default());
    let twists = [
        Twist::cw(Face::Down),
        Twist::cw(Face::Front),
        Twist::ccw(Face::Up),
        Twist::cw(Face::Right),
    ];
    for (i, &twist) in twists.iter().enumerate() {
        let expected = if i == 0 {
            TwistRequestOutcome::Started
        } else {
            TwistRequestOutcome::Queued
        };
        assert_eq!(sim.request_twist(twist, false), expected);
    }
    assert_eq!(sim.twist_anim().queue_len(), 3);
    let queued: Vec<Twist> = sim.twist_anim().queued().map(|q| q.twist).collect();
    assert_eq!(queued, twists[1..].to_vec());

    let mut seen = vec![];
    for _ in 0..MAX_FRAMES {
        if let Some(anim) = sim.current_animation() {
            if seen.last() != Some(&anim.twist) {
                seen.push(anim.twist);
            }
        } else {
            break;
        }
        sim.advance(FRAME);
    }
    assert_eq!(seen, twists);
    assert_eq!(*sim.cube(), cube_after(twists));
    assert_eq!(sim.observer().count(Event::Started), 4);
    assert_eq!(sim.observer().count(Event::Completed { scramble: false }), 4);
}

#[test]
fn test_queue_overflow_drops_newest() {
    let prefs = Preferences::default();
    let capacity = prefs.animation.queue_capacity;
    let mut sim = RubikSimulation::new(&prefs);

    let twists: Vec<Twist> = (0..capacity + 1)
        .map(|i| Twist::cw(Face::try_from((i % 6) as u8).unwrap()))
        .collect();
    for &twist in &twists {
        assert!(sim.request_twist(twist, false).is_accepted());
    }
    assert_eq!(sim.twist_anim().queue_len(), capacity);

    let extra = Twist::ccw(Face::Back);
    assert_eq!(sim.request_twist(extra, false), TwistRequestOutcome::Dropped);
    assert_eq!(sim.twist_anim().queue_len(), capacity);

    drain(&mut sim);
    assert_eq!(*sim.cube(), cube_after(twists));
}

#[test]
fn test_huge_queue_capacity_is_not_preallocated() {
    let mut prefs = Preferences::default();
    prefs.animation.queue_capacity = usize::MAX;
    let mut sim = RubikSimulation::new(&prefs);
    assert_eq!(sim.twist_anim().queue_capacity(), usize::MAX);
    for &face in Face::VARIANTS {
        assert!(sim.request_twist(Twist::cw(face), false).is_accepted());
    }
    assert_eq!(sim.twist_anim().queue_len(), 5);
}

#[test]
fn test_frame_step_is_clamped() {
    let mut sim = RubikSimulation::default();
    sim.request_twist(Twist::cw(Face::Front), false);

    sim.advance(Duration::from_secs(10));
    let anim = sim.current_animation().unwrap();
    // 360 degrees per second for at most 0.1 seconds.
    assert!((anim.current_angle - 36.0).abs() < 1e-3);
    assert!(sim.cube().is_solved());

    sim.advance_secs(-1.0);
    sim.advance_secs(f32::NAN);
    let anim = sim.current_animation().unwrap();
    assert!((anim.current_angle - 36.0).abs() < 1e-3);
}

#[test]
fn test_next_twist_starts_in_same_frame() {
    let mut sim = recording_sim(&Preferences::default());
    sim.request_twist(Twist::cw(Face::Front), false);
    sim.request_twist(Twist::ccw(Face::Up), false);

    // 36 + 36 + 18 degrees.
    sim.advance(Duration::from_millis(100));
    sim.advance(Duration::from_millis(100));
    sim.advance(Duration::from_millis(50));

    assert_eq!(*sim.cube(), cube_after([Twist::cw(Face::Front)]));
    let anim = sim.current_animation().unwrap();
    assert_eq!(anim.twist, Twist::ccw(Face::Up));
    assert_eq!(anim.current_angle, 0.0);
    assert_eq!(sim.twist_anim().queue_len(), 0);
    assert_eq!(
        sim.observer().events,
        vec![
            Event::Started,
            Event::Completed { scramble: false },
            Event::Started,
        ],
    );
}

#[test]
fn test_display_angle_is_eased() {
    let mut sim = RubikSimulation::default();
    sim.request_twist(Twist::cw(Face::Left), false);
    sim.advance(Duration::from_millis(50));
    let anim = sim.current_animation().unwrap();
    // Progress 0.2 is eased to 4 * 0.2^3 = 0.032.
    assert!((anim.current_angle - 18.0).abs() < 1e-3);
    assert!((anim.display_angle - 0.032 * 90.0).abs() < 1e-3);
    // L is clockwise on a negative face, so it is a positive rotation.
    assert!(anim.signed_display_angle() > 0.0);
}

#[test]
fn test_scramble_zero_does_nothing() {
    let mut sim = recording_sim(&Preferences::default());
    sim.scramble(0);
    assert!(sim.cube().is_solved());
    assert!(sim.is_idle());
    assert_eq!(sim.scramble_moves_pending(), 0);
    assert_eq!(sim.observer().events, vec![]);
}

#[test]
fn test_scramble_drains_to_completion() {
    let mut sim = recording_sim(&Preferences::default());
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    sim.scramble_with_rng(20, &mut rng);
    assert_eq!(sim.scramble_moves_pending(), 20);
    assert!(sim.is_animating());
    assert_eq!(sim.twist_anim().queue_len(), 19);

    drain(&mut sim);
    assert!(!sim.is_animating());
    assert_eq!(sim.twist_anim().queue_len(), 0);
    assert_eq!(sim.scramble_moves_pending(), 0);
    let recorder = sim.observer();
    assert_eq!(recorder.count(Event::ScrambleStarted), 1);
    assert_eq!(recorder.count(Event::Completed { scramble: true }), 20);
    assert_eq!(recorder.count(Event::ScrambleFinished), 1);
    assert_eq!(recorder.events.last(), Some(&Event::ScrambleFinished));
}

#[test]
fn test_scramble_is_reproducible() {
    let scramble = |seed| {
        let mut sim = RubikSimulation::default();
        sim.scramble_with_rng(20, &mut ChaCha8Rng::seed_from_u64(seed));
        drain(&mut sim);
        sim.cube().clone()
    };
    assert_eq!(scramble(7), scramble(7));
}

#[test]
fn test_scramble_counts_only_accepted_moves() {
    let mut prefs = Preferences::default();
    prefs.animation.queue_capacity = 2;
    let mut sim = recording_sim(&prefs);
    sim.scramble_with_rng(10, &mut ChaCha8Rng::seed_from_u64(3));
    assert_eq!(sim.scramble_moves_pending(), 3);

    drain(&mut sim);
    assert_eq!(sim.scramble_moves_pending(), 0);
    assert_eq!(sim.observer().count(Event::ScrambleFinished), 1);
}

#[test]
fn test_reset_cancels_everything() {
    let mut sim = recording_sim(&Preferences::default());
    sim.scramble_with_rng(10, &mut ChaCha8Rng::seed_from_u64(5));
    for _ in 0..30 {
        sim.advance(FRAME);
    }
    assert!(!sim.is_idle());

    sim.handle_intent(Intent::Reset);
    assert!(sim.cube().is_solved());
    assert!(sim.is_idle());
    assert_eq!(sim.scramble_moves_pending(), 0);
    assert_eq!(sim.observer().events.last(), Some(&Event::Reset));

    // Nothing cancelled is applied later.
    for _ in 0..30 {
        sim.advance(FRAME);
    }
    assert!(sim.cube().is_solved());
    assert_eq!(sim.observer().count(Event::ScrambleFinished), 0);
}

#[test]
fn test_relative_turn_uses_camera() {
    let mut sim = RubikSimulation::default();
    sim.handle_intent(Intent::RotateCamera {
        delta_yaw: 90.0,
        delta_pitch: 0.0,
    });
    assert_eq!(sim.resolve_relative_face(RelativeFace::Front), Face::Left);
    assert_eq!(sim.resolve_relative_face(RelativeFace::Right), Face::Front);

    sim.handle_intent(Intent::Turn {
        slot: RelativeFace::Front,
        direction: TwistDirection::CW,
    });
    drain(&mut sim);
    assert_eq!(*sim.cube(), cube_after([Twist::cw(Face::Left)]));

    sim.handle_intent(Intent::TurnAbsolute(Twist::ccw(Face::Left)));
    drain(&mut sim);
    assert!(sim.cube().is_solved());

    sim.handle_intent(Intent::SetFrontFace(Face::Up));
    assert_eq!(sim.camera().front_face(), Face::Up);
}

#[test]
fn test_timer_through_simulation() {
    let mut sim = RubikSimulation::with_observer(&Preferences::default(), SpeedTimer::new());
    sim.scramble_with_rng(1, &mut ChaCha8Rng::seed_from_u64(11));
    let scramble_twist = sim.current_animation().unwrap().twist;
    assert_eq!(sim.observer().state(), TimerState::Idle);
    assert_eq!(
        sim.observer().status_lines(sim.scramble_moves_pending())[0],
        "Scrambling... (1 moves left)",
    );

    drain(&mut sim);
    assert_eq!(sim.observer().state(), TimerState::Ready);
    assert!(!sim.cube().is_solved());

    sim.request_twist(scramble_twist.rev(), false);
    assert_eq!(sim.observer().state(), TimerState::Running);
    drain(&mut sim);
    // The frame that applies the twist also stops the timer.
    let timer = sim.observer();
    assert_eq!(timer.state(), TimerState::Stopped);
    assert_eq!(timer.move_count(), 1);
    assert!(timer.elapsed() >= Duration::from_millis(240));
}
