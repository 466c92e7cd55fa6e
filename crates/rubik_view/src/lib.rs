//! Interactive state for a 3x3x3 Rubik's Cube: camera, view-relative face
//! resolution, twist animation queue, and solve timing.
//!
//! Frontends own a [`RubikSimulation`], feed it [`Intent`]s from user input,
//! call [`RubikSimulation::advance()`] once per frame, and draw the cube using
//! [`RubikSimulation::cube()`] and [`RubikSimulation::current_animation()`].

pub mod animations;
mod camera;
pub mod input;
mod observer;
mod simulation;
mod timer;
mod view_mapping;

pub use camera::{Camera, axis_angle_matrix};
pub use input::Intent;
pub use observer::MoveObserver;
pub use simulation::RubikSimulation;
pub use timer::{SpeedTimer, TimerState, format_time};
pub use view_mapping::{InvalidRelativeFace, RelativeFace, ViewMapping};

#[cfg(test)]
mod tests;
