use std::path::PathBuf;

use eyre::{Context, Result, bail, ensure};
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rubik_core::{Cube, Face, Twist, TwistDirection, parse_twists};
use rubik_prefs::Preferences;
use rubik_view::input::{Key, KeyboardState};
use rubik_view::{Camera, Intent, MoveObserver, RelativeFace, RubikSimulation, SpeedTimer};
use strum::VariantArray;
use web_time::Duration;

use crate::display;

/// Upper bound on simulated frames while waiting for twists to finish.
const MAX_FRAMES: usize = 1_000_000;
/// Number of random twists applied before the rotation self-test.
const SELFTEST_SCRAMBLE_LENGTH: usize = 100;

/// Headless 3x3x3 Rubik's Cube simulator
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Log informational messages (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Simulate twists and key presses, then print the resulting cube.
    Play {
        /// Twists in standard notation, such as `R U R' U'`. Letters name faces
        /// in the current view unless `--absolute` is given.
        moves: Vec<String>,
        /// Keys to press in order, using the interactive key bindings.
        #[arg(short, long)]
        keys: Option<String>,
        /// Treat twist letters as fixed faces regardless of the camera.
        #[arg(short, long)]
        absolute: bool,
        #[command(flatten)]
        camera: CameraArgs,
        /// Number of random twists to make before anything else.
        #[arg(short, long, default_value_t = 0)]
        scramble: u32,
        /// Seed for random scrambles.
        #[arg(long)]
        seed: Option<u64>,
        /// Simulated frames per second.
        #[arg(long, default_value_t = 60.0)]
        fps: f32,
        #[command(flatten)]
        prefs: PrefsArgs,
        /// Print face letters instead of colors.
        #[arg(long)]
        plain: bool,
    },
    /// Print which face has each role in the view.
    View {
        #[command(flatten)]
        camera: CameraArgs,
    },
    /// Check that four quarter turns of each face restore the cube.
    Selftest,
    /// Print the effective preferences as YAML.
    Prefs {
        #[command(flatten)]
        prefs: PrefsArgs,
    },
}

#[derive(clap::Args, Debug)]
pub(crate) struct CameraArgs {
    /// Camera yaw, in degrees.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    yaw: f32,
    /// Camera pitch, in degrees.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pitch: f32,
    /// Face that camera rotation treats as the front, such as `R` or `right`.
    #[arg(long, default_value = "F", value_parser = parse_face)]
    front: Face,
}
impl CameraArgs {
    fn build(&self) -> Camera {
        let mut camera = Camera::new();
        camera.set_front_face(self.front);
        camera.rotate(self.yaw, self.pitch);
        camera
    }
}

#[derive(clap::Args, Debug)]
pub(crate) struct PrefsArgs {
    /// YAML file to layer over the default preferences.
    #[arg(long = "prefs", value_name = "FILE")]
    file: Option<PathBuf>,
}
impl PrefsArgs {
    fn load(&self) -> Preferences {
        Preferences::load(self.file.as_deref())
    }
}

fn parse_face(s: &str) -> Result<Face, String> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next())
        && let Some(face) = Face::from_symbol(c)
    {
        return Ok(face);
    }
    Face::VARIANTS
        .iter()
        .copied()
        .find(|face| face.to_string().eq_ignore_ascii_case(s))
        .ok_or_else(|| format!("unknown face {s:?}; expected one of F, B, L, R, U, D"))
}

pub(crate) fn exec(subcommand: Subcommand) -> Result<()> {
    match subcommand {
        Subcommand::Play {
            moves,
            keys,
            absolute,
            camera,
            scramble,
            seed,
            fps,
            prefs,
            plain,
        } => {
            ensure!(fps.is_finite() && fps > 0.0, "--fps must be positive");
            let frame = Duration::try_from_secs_f32(1.0 / fps).wrap_err("invalid --fps")?;
            let twists = parse_twists(&moves.join(" ")).wrap_err("invalid twist notation")?;
            let mut rng = match seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_rng(&mut rand::rng()),
            };

            let prefs = prefs.load();
            let mut sim = RubikSimulation::with_observer(&prefs, SpeedTimer::new());
            *sim.camera_mut() = camera.build();

            if scramble > 0 {
                sim.scramble_with_rng(scramble, &mut rng);
                wait_until_idle(&mut sim, frame)?;
            }

            for twist in twists {
                if sim.twist_anim().is_queue_full() {
                    wait_until_idle(&mut sim, frame)?;
                }
                if absolute {
                    sim.request_twist(twist, false);
                } else {
                    sim.turn_relative(RelativeFace::from(twist.face), twist.direction);
                }
            }

            let mut keyboard = KeyboardState::default();
            for c in keys.unwrap_or_default().chars() {
                let key = Key::Char(c);
                match keyboard.press(key, &prefs.interaction) {
                    Some(Intent::Scramble { moves }) => sim.scramble_with_rng(moves, &mut rng),
                    Some(intent) => sim.handle_intent(intent),
                    None => log::warn!("no binding for key {c:?}"),
                }
                keyboard.release(key);
                sim.advance(frame);
            }

            wait_until_idle(&mut sim, frame)?;

            print!("{}", display::render_net(sim.cube(), !plain));
            println!();
            for line in sim.observer().status_lines(sim.scramble_moves_pending()) {
                println!("{line}");
            }
            println!("View: {}", sim.view_mapping());
            println!("Solved: {}", if sim.cube().is_solved() { "yes" } else { "no" });
            Ok(())
        }

        Subcommand::View { camera } => {
            let camera = camera.build();
            let mapping = camera.view_mapping();
            println!(
                "front face {}, pitch {:.1}, yaw {:.1}",
                camera.front_face(),
                camera.pitch,
                camera.yaw,
            );
            for &slot in RelativeFace::VARIANTS {
                println!("{:>5} -> {}", slot.to_string(), mapping.resolve(slot));
            }
            Ok(())
        }

        Subcommand::Selftest => {
            let mut cube = Cube::new();
            let mut failures = cube.verify_rotation_identity();

            let mut rng = rand::rng();
            let scramble = (0..SELFTEST_SCRAMBLE_LENGTH).map(|_| {
                let face = Face::VARIANTS[rng.random_range(0..Face::COUNT)];
                Twist::new(face, TwistDirection::from_clockwise(rng.random_bool(0.5)))
            });
            cube.rotate_faces(scramble);
            failures.extend(cube.verify_rotation_identity());

            if !failures.is_empty() {
                bail!(
                    "four quarter turns did not restore the cube for {}",
                    failures.iter().unique().join(", "),
                );
            }
            println!("all {} faces return to their original state", Face::COUNT);
            Ok(())
        }

        Subcommand::Prefs { prefs } => {
            print!("{}", prefs.load().to_yaml()?);
            Ok(())
        }
    }
}

fn wait_until_idle<O: MoveObserver>(sim: &mut RubikSimulation<O>, frame: Duration) -> Result<()> {
    let frames = sim.run_until_idle(frame, MAX_FRAMES);
    ensure!(
        sim.is_idle(),
        "twists did not finish after {MAX_FRAMES} frames",
    );
    log::info!("simulated {frames} frames");
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_face() {
        assert_eq!(parse_face("r"), Ok(Face::Right));
        assert_eq!(parse_face("U"), Ok(Face::Up));
        assert_eq!(parse_face("back"), Ok(Face::Back));
        assert_eq!(parse_face("DOWN"), Ok(Face::Down));
        assert!(parse_face("x").is_err());
        assert!(parse_face("").is_err());
    }

    #[test]
    fn test_play_args() {
        let args = Args::try_parse_from([
            "rubik", "play", "R", "U'", "--yaw", "-30", "--front", "up", "--seed", "4",
        ])
        .unwrap();
        let Subcommand::Play {
            moves,
            camera,
            seed,
            fps,
            ..
        } = args.subcommand
        else {
            panic!("expected play subcommand");
        };
        assert_eq!(moves, ["R", "U'"]);
        assert_eq!(camera.yaw, -30.0);
        assert_eq!(camera.front, Face::Up);
        assert_eq!(seed, Some(4));
        assert_eq!(fps, 60.0);
    }

    #[test]
    fn test_camera_args() {
        let args = Args::try_parse_from(["rubik", "view", "--yaw", "90"]).unwrap();
        let Subcommand::View { camera } = args.subcommand else {
            panic!("expected view subcommand");
        };
        let mapping = camera.build().view_mapping();
        assert_eq!(mapping.front, Face::Left);
        assert_eq!(mapping.right, Face::Front);
    }

    #[test]
    fn test_args_are_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
