use glam::{Mat4, Vec3};

/// First-person camera pose: position, yaw, pitch, and projection
/// parameters.
///
/// The walk core translates the pose every tick; pointer look rotates it
/// between ticks. Nothing else writes to it while the loop runs.
pub struct WalkCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub sensitivity: f32,
}

impl Default for WalkCamera {
    fn default() -> Self {
        Self {
            // Reference start pose: above the ground, looking down -Z.
            position: Vec3::new(4.0, 5.0, 5.0),
            yaw: -90.0_f32.to_radians(),
            pitch: 0.0,
            fov: 75.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 100.0,
            sensitivity: 0.003,
        }
    }
}

impl WalkCamera {
    /// Look direction derived from yaw and pitch.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Look direction with the vertical component removed.
    ///
    /// Zero-safe: returns zero when the camera points straight up or
    /// down, though the pitch clamp keeps that out of reach in practice.
    pub fn flat_forward(&self) -> Vec3 {
        let f = self.forward();
        Vec3::new(f.x, 0.0, f.z).normalize_or_zero()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    /// Apply a pointer-look delta in screen pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch -= dy * self.sensitivity;
        self.pitch = self
            .pitch
            .clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_is_valid() {
        let cam = WalkCamera::default();
        assert!(cam.position.y > 0.0);
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn default_camera_looks_down_negative_z() {
        let cam = WalkCamera::default();
        let f = cam.forward();
        assert!(f.z < -0.99);
        assert!(f.x.abs() < 1e-5);
    }

    #[test]
    fn rotate_clamps_pitch() {
        let mut cam = WalkCamera::default();
        cam.rotate(0.0, -100_000.0);
        assert!(cam.pitch <= 89.0_f32.to_radians() + 1e-6);
        cam.rotate(0.0, 100_000.0);
        assert!(cam.pitch >= -89.0_f32.to_radians() - 1e-6);
    }

    #[test]
    fn flat_forward_is_horizontal_unit() {
        let mut cam = WalkCamera::default();
        cam.rotate(123.0, -456.0);
        let flat = cam.flat_forward();
        assert_eq!(flat.y, 0.0);
        assert!((flat.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn right_is_perpendicular_to_forward() {
        let mut cam = WalkCamera::default();
        cam.rotate(777.0, 42.0);
        assert!(cam.forward().dot(cam.right()).abs() < 1e-5);
    }
}
