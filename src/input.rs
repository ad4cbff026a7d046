//! Window-event wiring for the trackball controller.
//!
//! [`TrackballInput`] translates already-dispatched [`WindowEvent`]s into
//! [`TrackballCamera`] calls: a button press selects the interaction mode
//! and re-baselines the pointer, cursor motion while that button is held
//! drives the active behavior, and the scroll wheel dollies the arm. The
//! crate never owns a window or event loop; callers hand events in from
//! whatever loop they run.
//!
//! # Example
//! ```ignore
//! // Inside a winit ApplicationHandler:
//! fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
//!     if self.trackball_input.handle_event(&mut self.camera, &event) {
//!         self.window.request_redraw();
//!     }
//! }
//! ```

use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use crate::trackball::{TrackballCamera, TrackballMode};

/// Maps pointer events onto a [`TrackballCamera`].
///
/// The default button layout matches common 3D viewers: left drag orbits,
/// right drag zooms, middle drag pans. Reassign the `*_button` fields to
/// change it.
#[derive(Clone, Debug)]
pub struct TrackballInput {
    /// Button that starts an orbit drag.
    pub orbit_button: MouseButton,
    /// Button that starts a zoom drag.
    pub zoom_button: MouseButton,
    /// Button that starts a pan drag.
    pub pan_button: MouseButton,
    /// Arm length change per scroll line, applied with inverted sign so
    /// scrolling up zooms in.
    pub wheel_sensitivity: f32,
    cursor: Vec2,
    dragging: Option<MouseButton>,
}

impl Default for TrackballInput {
    fn default() -> Self {
        Self {
            orbit_button: MouseButton::Left,
            zoom_button: MouseButton::Right,
            pan_button: MouseButton::Middle,
            wheel_sensitivity: 0.5,
            cursor: Vec2::ZERO,
            dragging: None,
        }
    }
}

impl TrackballInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a window event, driving `camera` as needed.
    ///
    /// Returns `true` if the event moved the camera, which callers typically
    /// use to request a redraw.
    pub fn handle_event(&mut self, camera: &mut TrackballCamera, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => self.press(camera, *button),
                ElementState::Released => self.release(*button),
            },
            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(
                camera,
                Vec2::new(position.x as f32, position.y as f32),
            ),
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll(camera, scroll_lines(delta));
                true
            }
            _ => false,
        }
    }

    /// Begin a drag: select the mode mapped to `button` and re-baseline the
    /// pointer so the first move event computes a correct delta.
    pub fn press(&mut self, camera: &mut TrackballCamera, button: MouseButton) -> bool {
        let Some(mode) = self.mode_for(button) else {
            return false;
        };
        camera.set_mode(mode);
        camera.set_pointer_position(self.cursor);
        self.dragging = Some(button);
        false
    }

    /// End the drag started by `button`, if any.
    pub fn release(&mut self, button: MouseButton) -> bool {
        if self.dragging == Some(button) {
            self.dragging = None;
        }
        false
    }

    /// Track the cursor and, while a drag is active, feed the position to
    /// the camera. Returns `true` if the camera moved.
    pub fn cursor_moved(&mut self, camera: &mut TrackballCamera, position: Vec2) -> bool {
        self.cursor = position;
        if self.dragging.is_some() {
            camera.act(position);
            true
        } else {
            false
        }
    }

    /// Dolly the camera by a scroll amount measured in lines.
    pub fn scroll(&mut self, camera: &mut TrackballCamera, lines: f32) {
        camera.zoom_by(-lines * self.wheel_sensitivity);
    }

    /// The interaction mode mapped to `button`, if any.
    pub fn mode_for(&self, button: MouseButton) -> Option<TrackballMode> {
        if button == self.orbit_button {
            Some(TrackballMode::Orbit)
        } else if button == self.zoom_button {
            Some(TrackballMode::Zoom)
        } else if button == self.pan_button {
            Some(TrackballMode::Pan)
        } else {
            None
        }
    }
}

/// Normalize a scroll delta to lines, the way line-based wheels report it.
fn scroll_lines(delta: &MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => *y,
        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 120.0,
    }
}

#[cfg(test)]
mod tests {
    use glam::Quat;

    use super::*;

    #[test]
    fn buttons_map_to_modes() {
        let input = TrackballInput::new();
        assert_eq!(input.mode_for(MouseButton::Left), Some(TrackballMode::Orbit));
        assert_eq!(input.mode_for(MouseButton::Right), Some(TrackballMode::Zoom));
        assert_eq!(input.mode_for(MouseButton::Middle), Some(TrackballMode::Pan));
        assert_eq!(input.mode_for(MouseButton::Back), None);
    }

    #[test]
    fn press_rebaselines_before_the_first_move() {
        let mut input = TrackballInput::new();
        let mut camera = TrackballCamera::new();

        // Move the cursor around without any button held: nothing happens.
        assert!(!input.cursor_moved(&mut camera, Vec2::new(500.0, 500.0)));
        assert_eq!(camera.rotation(), Quat::IDENTITY);

        // Press at (500, 500), then drag to (600, 500). The orbit delta must
        // come from the press location, not from a stale position.
        input.press(&mut camera, MouseButton::Left);
        assert!(input.cursor_moved(&mut camera, Vec2::new(600.0, 500.0)));
        assert_eq!(camera.spherical_position(), Vec2::new(-0.5, 0.0));
    }

    #[test]
    fn release_stops_the_drag() {
        let mut input = TrackballInput::new();
        let mut camera = TrackballCamera::new();

        input.cursor_moved(&mut camera, Vec2::new(10.0, 10.0));
        input.press(&mut camera, MouseButton::Right);
        assert!(input.cursor_moved(&mut camera, Vec2::new(10.0, 0.0)));
        assert_eq!(camera.arm_length(), 4.0 + 10.0 * 0.005);

        input.release(MouseButton::Right);
        assert!(!input.cursor_moved(&mut camera, Vec2::new(10.0, 100.0)));
        assert_eq!(camera.arm_length(), 4.0 + 10.0 * 0.005);
    }

    #[test]
    fn releasing_another_button_keeps_the_drag() {
        let mut input = TrackballInput::new();
        let mut camera = TrackballCamera::new();

        input.press(&mut camera, MouseButton::Left);
        input.release(MouseButton::Right);
        assert!(input.cursor_moved(&mut camera, Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn scroll_zooms_in_for_positive_lines() {
        let mut input = TrackballInput::new();
        let mut camera = TrackballCamera::new();

        input.scroll(&mut camera, 2.0);
        assert_eq!(camera.arm_length(), 3.0);
        input.scroll(&mut camera, -2.0);
        assert_eq!(camera.arm_length(), 4.0);
    }

    #[test]
    fn line_and_pixel_deltas_normalize() {
        assert_eq!(scroll_lines(&MouseScrollDelta::LineDelta(0.0, 3.0)), 3.0);
        let pixels = winit::dpi::PhysicalPosition::new(0.0, 240.0);
        assert_eq!(scroll_lines(&MouseScrollDelta::PixelDelta(pixels)), 2.0);
    }
}
