//! The view-basis hand-off between the controller and a renderer.

use glam::{Mat4, Vec3};

/// A camera pose plus projection parameters.
///
/// This is the boundary type the controller produces and a renderer
/// consumes: eye, target, and up define the view, the remaining fields feed
/// a perspective projection. The controller itself only ever writes the
/// pose; projection parameters are the renderer's business and keep their
/// defaults unless overridden.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov: f32,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 4.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: std::f32::consts::FRAC_PI_2,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the eye position.
    pub fn at(mut self, eye: impl Into<Vec3>) -> Self {
        self.eye = eye.into();
        self
    }

    /// Set the look-at target.
    pub fn looking_at(mut self, target: impl Into<Vec3>) -> Self {
        self.target = target.into();
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_fov(mut self, fov_degrees: f32) -> Self {
        self.fov = fov_degrees.to_radians();
        self
    }

    /// The right-handed view matrix (world to camera space).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// The perspective projection matrix for the given aspect ratio
    /// (width / height).
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov, aspect, self.near, self.far)
    }

    /// The combined view-projection matrix.
    pub fn view_projection_matrix(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// The normalized viewing direction, from eye toward target.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or(Vec3::NEG_Z)
    }

    /// The right vector of the view basis.
    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize_or(Vec3::X)
    }

    /// The up vector re-orthogonalized against forward and right.
    pub fn orthogonal_up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn view_matrix_is_finite_and_not_identity() {
        let matrix = Camera::new().view_matrix();
        assert_ne!(matrix, Mat4::IDENTITY);
        assert!(matrix.is_finite());
    }

    #[test]
    fn default_view_basis_is_orthonormal() {
        let camera = Camera::new();
        assert_eq!(camera.forward(), Vec3::NEG_Z);
        assert_eq!(camera.right(), Vec3::X);
        assert_eq!(camera.orthogonal_up(), Vec3::Y);

        let skewed = Camera::new().at((3.0, 2.0, 5.0)).looking_at((1.0, 0.0, 0.0));
        assert_abs_diff_eq!(skewed.right().dot(skewed.forward()), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(
            skewed.orthogonal_up().dot(skewed.forward()),
            0.0,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(skewed.right().length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn view_matrix_maps_the_eye_to_the_origin() {
        let camera = Camera::new().at((1.0, 2.0, 3.0)).looking_at((0.0, 0.0, 0.0));
        let mapped = camera.view_matrix().transform_point3(camera.eye);
        assert_abs_diff_eq!(mapped.x, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(mapped.y, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(mapped.z, 0.0, epsilon = 1e-5);
    }
}
