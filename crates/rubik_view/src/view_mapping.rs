//! Mapping from viewer-relative face roles to fixed cube faces.

use std::fmt;

use cgmath::{InnerSpace, Vector3};
use rubik_core::{Face, PerFace};
use strum::VariantArray;

/// Length below which a vector is considered degenerate.
const DEGENERATE_EPSILON: f32 = 0.0001;
/// If the best "up" candidate is at least this aligned with the front face,
/// search again for a perpendicular one.
const PARALLEL_THRESHOLD: f32 = 0.9;
/// Maximum alignment with the front face for the fallback "up" search.
const PERPENDICULAR_THRESHOLD: f32 = 0.1;

/// Error returned when converting an out-of-range integer to a
/// [`RelativeFace`].
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("invalid relative face slot {0} (expected 0..6)")]
pub struct InvalidRelativeFace(pub u8);

/// Role of a face relative to the viewer.
///
/// The discriminants are the slot numbers used by input bindings.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::VariantArray,
    strum::FromRepr,
)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum RelativeFace {
    /// Face closest to the viewer.
    Front = 0,
    /// Face pointing up on screen.
    Up = 1,
    /// Face pointing right on screen.
    Right = 2,
    /// Face pointing left on screen.
    Left = 3,
    /// Face pointing down on screen.
    Down = 4,
    /// Face farthest from the viewer.
    Back = 5,
}
impl TryFrom<u8> for RelativeFace {
    type Error = InvalidRelativeFace;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        RelativeFace::from_repr(value).ok_or(InvalidRelativeFace(value))
    }
}
impl From<Face> for RelativeFace {
    /// Returns the role with the same name as `face`, which is also the role
    /// that `face` has when the camera is not rotated.
    fn from(face: Face) -> Self {
        match face {
            Face::Front => RelativeFace::Front,
            Face::Back => RelativeFace::Back,
            Face::Left => RelativeFace::Left,
            Face::Right => RelativeFace::Right,
            Face::Up => RelativeFace::Up,
            Face::Down => RelativeFace::Down,
        }
    }
}

/// Absolute face for each viewer-relative role.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub struct ViewMapping {
    pub front: Face,
    pub back: Face,
    pub left: Face,
    pub right: Face,
    pub up: Face,
    pub down: Face,
}
impl Default for ViewMapping {
    fn default() -> Self {
        Self::IDENTITY
    }
}
impl fmt::Display for ViewMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "front={} up={} right={} left={} down={} back={}",
            self.front, self.up, self.right, self.left, self.down, self.back,
        )
    }
}
impl ViewMapping {
    /// Mapping for an unrotated camera.
    pub const IDENTITY: Self = Self {
        front: Face::Front,
        back: Face::Back,
        left: Face::Left,
        right: Face::Right,
        up: Face::Up,
        down: Face::Down,
    };

    /// Returns the absolute face that currently has the role `slot`.
    pub fn resolve(&self, slot: RelativeFace) -> Face {
        match slot {
            RelativeFace::Front => self.front,
            RelativeFace::Up => self.up,
            RelativeFace::Right => self.right,
            RelativeFace::Left => self.left,
            RelativeFace::Down => self.down,
            RelativeFace::Back => self.back,
        }
    }

    /// Computes the mapping from the face normals as seen by the viewer, who
    /// looks along -Z with +Y up.
    ///
    /// Ties are broken in favor of the earlier face in [`Face`] order. The
    /// result is always a complete mapping, even for degenerate input.
    pub fn from_rotated_normals(normals: &PerFace<Vector3<f32>>) -> Self {
        let view_front = Vector3::unit_z();
        let view_up = Vector3::unit_y();

        let front = best_aligned(normals, view_front, |_| true).unwrap_or(Face::Front);
        let not_front_axis = |f: Face| f != front && f != front.opposite();

        let mut up = best_aligned(normals, view_up, not_front_axis).unwrap_or(Face::Up);
        if normals[front].dot(normals[up]).abs() > PARALLEL_THRESHOLD {
            let perpendicular = best_aligned(normals, view_up, |f| {
                not_front_axis(f)
                    && normals[f].dot(normals[front]).abs() < PERPENDICULAR_THRESHOLD
            });
            if let Some(f) = perpendicular {
                up = f;
            }
        }

        let right_vector = normals[up].cross(normals[front]);
        let right_vector = if right_vector.magnitude() > DEGENERATE_EPSILON {
            right_vector.normalize()
        } else {
            Vector3::unit_x()
        };
        let right = best_aligned(normals, right_vector, |_| true).unwrap_or(Face::Right);

        Self {
            front,
            back: front.opposite(),
            up,
            down: up.opposite(),
            right,
            left: right.opposite(),
        }
    }
}

/// Returns the face among those accepted by `filter` whose normal has the
/// largest dot product with `target`. The first face wins ties.
fn best_aligned(
    normals: &PerFace<Vector3<f32>>,
    target: Vector3<f32>,
    filter: impl Fn(Face) -> bool,
) -> Option<Face> {
    let mut best: Option<(Face, f32)> = None;
    for &face in Face::VARIANTS.iter().filter(|&&f| filter(f)) {
        let dot = normals[face].dot(target);
        if best.is_none_or(|(_, best_dot)| dot > best_dot) {
            best = Some((face, dot));
        }
    }
    best.map(|(face, _)| face)
}
