//! The trackball camera controller.
//!
//! [`TrackballCamera`] maps a stream of 2D pointer positions onto a 3D camera
//! pose. A drag is interpreted according to the active [`TrackballMode`]:
//! orbiting rotates the camera around its target on a fixed-length arm,
//! zooming extends or contracts the arm, and panning slides the target
//! through the view plane.
//!
//! The orbit rotation is rebuilt from the accumulated spherical coordinates
//! on every update rather than composed incrementally, so repeated drags
//! never accumulate floating-point drift and a given (yaw, pitch) pair
//! always produces the same quaternion.
//!
//! # Example
//! ```
//! use trackball_camera::{TrackballCamera, TrackballMode};
//!
//! let mut camera = TrackballCamera::new()
//!     .with_arm_length(10.0)
//!     .with_sensitivity(0.01);
//!
//! // Pointer pressed: select a behavior and re-baseline the pointer.
//! camera.set_mode(TrackballMode::Orbit);
//! camera.set_pointer_position((320.0, 240.0));
//!
//! // Pointer moved: drive the active behavior.
//! camera.act((330.0, 240.0));
//!
//! // Each frame, hand the pose to the renderer.
//! let (eye, target, up) = (camera.eye(), camera.target(), camera.up());
//! ```

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{Quat, Vec2, Vec3};
use log::warn;

use crate::camera::Camera;

/// Pitch is clamped this far short of straight up/down. A wide guard band is
/// intentional: it keeps the orbit well away from the pole singularity.
const PITCH_EPSILON: f32 = 0.1;
const PITCH_LIMIT: f32 = FRAC_PI_2 - PITCH_EPSILON;

/// Which update a pointer drag drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackballMode {
    /// Rotate the camera around the target.
    Orbit,
    /// Change the distance between camera and target.
    Zoom,
    /// Slide the target through the view plane.
    Pan,
}

impl Default for TrackballMode {
    fn default() -> Self {
        Self::Orbit
    }
}

/// A camera controller that orbits, zooms, and pans around a target point
/// from raw pointer positions.
///
/// The controller is a plain value: cloning it clones the whole interaction
/// state. It holds no handles to any window or renderer. Feed it pointer
/// events with [`set_mode`](Self::set_mode),
/// [`set_pointer_position`](Self::set_pointer_position), and
/// [`act`](Self::act); read the resulting pose back with
/// [`eye`](Self::eye), [`target`](Self::target), and [`up`](Self::up).
///
/// Every operation is infallible and O(1). Non-finite pointer positions are
/// discarded rather than folded into the state.
#[derive(Clone, Debug)]
pub struct TrackballCamera {
    /// Accumulated orbit rotation, rebuilt from `spherical_position` on
    /// every orbit update. Always unit length.
    rotation: Quat,
    /// Un-rotated offset direction from target to camera. Fixed after
    /// construction.
    arm_direction: Vec3,
    /// Distance from target to camera along the rotated arm.
    arm_length: f32,
    /// The look-at point.
    target: Vec3,
    /// Accumulated (yaw, pitch) orbit angles in radians. Yaw lives in the
    /// sign-preserving remainder range (-2π, 2π); pitch stays inside
    /// ±(π/2 - 0.1).
    spherical_position: Vec2,
    /// Last observed pointer position in window pixels. Only ever used to
    /// compute deltas between consecutive events.
    mouse_position: Vec2,
    /// Gain applied to pointer deltas before they reach angles or lengths.
    sensitivity: f32,
    /// Smallest arm length zooming can reach.
    min_arm_length: f32,
    /// Largest arm length zooming can reach.
    max_arm_length: f32,
    mode: TrackballMode,
}

impl Default for TrackballCamera {
    fn default() -> Self {
        Self {
            rotation: Quat::IDENTITY,
            arm_direction: Vec3::Z,
            arm_length: 4.0,
            target: Vec3::ZERO,
            spherical_position: Vec2::ZERO,
            mouse_position: Vec2::ZERO,
            sensitivity: 0.005,
            min_arm_length: 0.01,
            max_arm_length: f32::INFINITY,
            mode: TrackballMode::Orbit,
        }
    }
}

impl TrackballCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the point the camera orbits around.
    pub fn with_target(mut self, target: impl Into<Vec3>) -> Self {
        self.target = target.into();
        self
    }

    /// Set the distance from target to camera, clamped to the arm limits.
    pub fn with_arm_length(mut self, length: f32) -> Self {
        self.arm_length = length.clamp(self.min_arm_length, self.max_arm_length);
        self
    }

    /// Set the un-rotated offset direction from target to camera.
    ///
    /// The direction is normalized; a zero or non-finite vector falls back
    /// to +Z.
    pub fn with_arm_direction(mut self, direction: impl Into<Vec3>) -> Self {
        self.arm_direction = direction.into().normalize_or(Vec3::Z);
        self
    }

    /// Set the pointer sensitivity applied to drags.
    pub fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Set the arm length limits zooming saturates against.
    pub fn with_arm_length_limits(mut self, min: f32, max: f32) -> Self {
        self.min_arm_length = min;
        self.max_arm_length = max;
        self.arm_length = self.arm_length.clamp(min, max);
        self
    }

    /// Set the initial interaction mode.
    pub fn with_mode(mut self, mode: TrackballMode) -> Self {
        self.mode = mode;
        self
    }

    /// Select which behavior subsequent [`act`](Self::act) calls drive.
    ///
    /// Call this when a pointer button is pressed, together with
    /// [`set_pointer_position`](Self::set_pointer_position).
    pub fn set_mode(&mut self, mode: TrackballMode) {
        self.mode = mode;
    }

    /// Overwrite the stored pointer position without any derived update.
    ///
    /// Call this on pointer press so the first following [`act`](Self::act)
    /// computes its delta from the press location rather than from wherever
    /// the pointer was last released.
    pub fn set_pointer_position(&mut self, position: impl Into<Vec2>) {
        let position = position.into();
        if !position.is_finite() {
            warn!("discarding non-finite pointer position {position}");
            return;
        }
        self.mouse_position = position;
    }

    /// Feed a pointer-move event to the active behavior.
    ///
    /// Dispatches to orbit, zoom, or pan depending on the current mode; on
    /// return the stored pointer position equals `position`. Non-finite
    /// positions are discarded and leave the state untouched.
    pub fn act(&mut self, position: impl Into<Vec2>) {
        let position = position.into();
        if !position.is_finite() {
            warn!("discarding non-finite pointer position {position}");
            return;
        }
        match self.mode {
            TrackballMode::Orbit => self.orbit(position),
            TrackballMode::Zoom => self.zoom(position),
            TrackballMode::Pan => self.pan(position),
        }
        self.mouse_position = position;
    }

    /// Dolly the camera by adding `amount` to the arm length directly,
    /// saturating against the arm limits. Lets scroll wheels zoom without a
    /// drag gesture.
    pub fn zoom_by(&mut self, amount: f32) {
        if !amount.is_finite() {
            warn!("discarding non-finite zoom amount {amount}");
            return;
        }
        self.arm_length = (self.arm_length + amount).clamp(self.min_arm_length, self.max_arm_length);
    }

    fn orbit(&mut self, position: Vec2) {
        // The delta is old minus new, so dragging right yields a negative
        // yaw velocity. This sign convention sets the drag direction feel
        // and is relied on by the other behaviors too.
        let velocity = self.mouse_position - position;
        self.spherical_position =
            advance_spherical(self.spherical_position, velocity, self.sensitivity);
        self.rotation = spherical_rotation(self.spherical_position);
    }

    fn zoom(&mut self, position: Vec2) {
        let delta = (self.mouse_position.y - position.y) * self.sensitivity;
        self.arm_length = (self.arm_length + delta).clamp(self.min_arm_length, self.max_arm_length);
    }

    fn pan(&mut self, position: Vec2) {
        let velocity = self.mouse_position - position;
        // Project the drag onto the camera's right/up basis. The camera
        // never rolls, so the look-at basis is exact.
        let forward = (self.target - self.eye()).normalize_or(Vec3::NEG_Z);
        let right = forward.cross(Vec3::Y).normalize_or(Vec3::X);
        let up = right.cross(forward);
        let scale = self.arm_length * self.sensitivity;
        self.target += (right * velocity.x - up * velocity.y) * scale;
    }

    /// The camera position: the arm rotated around the target by the
    /// accumulated orbit rotation.
    pub fn eye(&self) -> Vec3 {
        let arm = self.arm_direction * self.arm_length;
        self.target + self.rotation * arm
    }

    /// The look-at point.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// The up direction. Constant +Y; the trackball never rolls.
    pub fn up(&self) -> Vec3 {
        Vec3::Y
    }

    /// Snapshot the current pose as a [`Camera`] for the renderer.
    pub fn camera(&self) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: self.up(),
            ..Camera::default()
        }
    }

    /// The accumulated orbit rotation. Always unit length.
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// The accumulated (yaw, pitch) orbit angles in radians.
    pub fn spherical_position(&self) -> Vec2 {
        self.spherical_position
    }

    /// The current target-to-camera distance.
    pub fn arm_length(&self) -> f32 {
        self.arm_length
    }

    /// The last stored pointer position.
    pub fn pointer_position(&self) -> Vec2 {
        self.mouse_position
    }

    /// The active interaction mode.
    pub fn mode(&self) -> TrackballMode {
        self.mode
    }
}

/// Advance a (yaw, pitch) spherical position by a scaled pointer velocity.
///
/// Yaw wraps with the sign-preserving floating remainder (the result keeps
/// the sign of the accumulated angle, like C's `fmod`), pitch saturates
/// inside the guard band.
fn advance_spherical(mut spherical: Vec2, velocity: Vec2, sensitivity: f32) -> Vec2 {
    spherical += velocity * sensitivity;
    spherical.x %= TAU;
    spherical.y = spherical.y.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    spherical
}

/// Build the orbit rotation for a (yaw, pitch) pair.
///
/// Yaw rotates about +Y and pitch about +X. Because those axes are fixed and
/// orthogonal, most terms of the Hamilton product of the two axis-angle
/// quaternions are zero. Writing `a` for the (sin, cos) of the yaw
/// half-angle and `b` for the pitch half-angle, the product collapses to
///
/// ```text
/// (x, y, z, w) = (a.cos * b.sin,  a.sin * b.cos,  -a.sin * b.sin,  a.cos * b.cos)
/// ```
///
/// which is four multiplies on four trig values instead of a full 16-multiply
/// product. The component order and signs encode which axis is yaw and which
/// is pitch; changing them flips the orbit handedness.
fn spherical_rotation(spherical: Vec2) -> Quat {
    let half = spherical * 0.5;
    let (a_sin, a_cos) = half.x.sin_cos();
    let (b_sin, b_cos) = half.y.sin_cos();
    Quat::from_xyzw(a_cos * b_sin, a_sin * b_cos, -(a_sin * b_sin), a_cos * b_cos)
}
