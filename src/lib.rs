//! # trackball-camera
//!
//! **A trackball camera controller that turns pointer input into a 3D view
//! basis.**
//!
//! Drag to orbit, zoom, or pan around a target point; read back an
//! eye/target/up pose each frame and hand it to whatever renderer you use.
//! The controller owns nothing but its own interaction state — no window,
//! no event loop, no GPU.
//!
//! ## Quick Start
//!
//! ```
//! use trackball_camera::{TrackballCamera, TrackballMode};
//!
//! let mut camera = TrackballCamera::new();
//!
//! // On pointer press: pick the behavior for this drag and re-baseline.
//! camera.set_mode(TrackballMode::Orbit);
//! camera.set_pointer_position((120.0, 80.0));
//!
//! // On each pointer move:
//! camera.act((140.0, 80.0));
//!
//! // Once per frame, build a view matrix from the pose:
//! let view = camera.camera().view_matrix();
//! ```
//!
//! Driving the controller straight from `winit` events is a three-liner with
//! [`TrackballInput`]:
//!
//! ```ignore
//! if self.input.handle_event(&mut self.camera, &event) {
//!     self.window.request_redraw();
//! }
//! ```
//!
//! ## How the orbit works
//!
//! The camera sits at the end of an arm attached to the target. Orbit drags
//! accumulate (yaw, pitch) spherical coordinates — yaw wrapped modulo 2π,
//! pitch clamped short of the poles — and the arm's rotation is rebuilt from
//! those angles on every update with a reduced-form quaternion product, so
//! no floating-point drift can accumulate across drags.

mod camera;
mod input;
mod trackball;

pub use camera::Camera;
pub use input::TrackballInput;
pub use trackball::{TrackballCamera, TrackballMode};

// Re-export glam math types for convenience
pub use glam::{Mat4, Quat, Vec2, Vec3};

// Re-export the winit button type used by the input adapter
pub use winit::event::MouseButton;
