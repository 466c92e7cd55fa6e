use cgmath::{InnerSpace, Matrix3, Vector3};
use rubik_core::{Face, PerFace};

use crate::ViewMapping;

/// Rotations by less than this many degrees are skipped.
const ANGLE_EPSILON: f32 = 0.0001;
/// Axes shorter than this are used without normalizing.
const AXIS_EPSILON: f32 = 0.0001;

/// Orbiting camera around the cube.
///
/// The view is rotated first by `pitch` about the pitch axis and then by `yaw`
/// about the yaw axis. Both axes are chosen based on which face the user has
/// declared as the current front, so that dragging feels natural from any
/// side. Angles accumulate without wrapping.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Camera {
    /// Rotation about the pitch axis, in degrees.
    pub pitch: f32,
    /// Rotation about the yaw axis, in degrees.
    pub yaw: f32,
    front_face: CurrentFront,
}

/// Newtype so that the default front face is [`Face::Front`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct CurrentFront(Face);
impl Default for CurrentFront {
    fn default() -> Self {
        Self(Face::Front)
    }
}

impl Camera {
    /// Constructs an unrotated camera looking at the front face.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the face currently declared as the front.
    pub fn front_face(&self) -> Face {
        self.front_face.0
    }
    /// Declares `face` as the current front, which changes the axes used by
    /// subsequent camera rotation. The accumulated angles are kept.
    pub fn set_front_face(&mut self, face: Face) {
        self.front_face = CurrentFront(face);
        let (pitch_axis, yaw_axis) = self.rotation_axes();
        log::debug!("front face set to {face}; pitch axis {pitch_axis:?}, yaw axis {yaw_axis:?}");
    }

    /// Returns the pitch and yaw axes for the current front face.
    pub fn rotation_axes(&self) -> (Vector3<f32>, Vector3<f32>) {
        let x = Vector3::unit_x();
        let y = Vector3::unit_y();
        let z = Vector3::unit_z();
        match self.front_face() {
            Face::Front => (x, y),
            Face::Right => (z, x),
            Face::Back => (-x, -y),
            Face::Left => (-z, -x),
            Face::Up => (y, z),
            Face::Down => (-y, -z),
        }
    }

    /// Adds to the camera angles.
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch += delta_pitch;
        log::trace!("camera angles: pitch={:.1} yaw={:.1}", self.pitch, self.yaw);
    }
    /// Resets both camera angles to zero.
    pub fn reset_angles(&mut self) {
        self.pitch = 0.0;
        self.yaw = 0.0;
    }

    /// Returns the matrix that takes world-space vectors to view space.
    pub fn view_matrix(&self) -> Matrix3<f32> {
        let (pitch_axis, yaw_axis) = self.rotation_axes();
        let mut ret = Matrix3::from_scale(1.0);
        if self.pitch.abs() >= ANGLE_EPSILON {
            ret = axis_angle_matrix(pitch_axis, self.pitch) * ret;
        }
        if self.yaw.abs() >= ANGLE_EPSILON {
            ret = axis_angle_matrix(yaw_axis, self.yaw) * ret;
        }
        ret
    }

    /// Rotates a world-space vector into view space.
    pub fn apply_view_rotation(&self, v: Vector3<f32>) -> Vector3<f32> {
        self.view_matrix() * v
    }

    /// Computes which absolute face has each viewer-relative role.
    pub fn view_mapping(&self) -> ViewMapping {
        let m = self.view_matrix();
        let normals = PerFace::from_fn(|face| m * Vector3::from(face.normal()));
        ViewMapping::from_rotated_normals(&normals)
    }
}

/// Returns the matrix for a right-handed rotation of `degrees` about `axis`
/// (Rodrigues' formula).
pub fn axis_angle_matrix(axis: Vector3<f32>, degrees: f32) -> Matrix3<f32> {
    let axis = if axis.magnitude() > AXIS_EPSILON {
        axis.normalize()
    } else {
        axis
    };
    let Vector3 { x, y, z } = axis;
    let (s, c) = degrees.to_radians().sin_cos();
    let t = 1.0 - c;

    // `Matrix3::new()` takes columns.
    #[rustfmt::skip]
    let ret = Matrix3::new(
        t * x * x + c,     t * x * y + s * z, t * x * z - s * y,
        t * x * y - s * z, t * y * y + c,     t * y * z + s * x,
        t * x * z + s * y, t * y * z - s * x, t * z * z + c,
    );
    ret
}
