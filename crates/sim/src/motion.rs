use crate::camera::WalkCamera;
use crate::config::MovementConfig;
use glam::{Vec2, Vec3};

/// Kinematic state for the walking body.
///
/// Only the vertical velocity component is force-integrated; horizontal
/// motion is applied as direct displacement each tick. `can_jump` is set
/// false when a jump fires and true again only by the ground clamp.
#[derive(Debug, Clone, Copy)]
pub struct KinematicBody {
    pub velocity: Vec3,
    pub can_jump: bool,
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            can_jump: false,
        }
    }
}

impl KinematicBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a jump impulse if the body is resting on the ground.
    /// Returns whether the jump fired.
    pub fn try_jump(&mut self, cfg: &MovementConfig) -> bool {
        if !self.can_jump {
            return false;
        }
        self.velocity.y = cfg.jump_impulse;
        self.can_jump = false;
        true
    }

    /// Integrate one tick.
    ///
    /// Horizontal: the intent vector (already unit length or zero) is
    /// mapped into the camera's flattened forward/right basis and the
    /// composite is normalized again, so final speed stays constant for
    /// diagonal input instead of summing the basis contributions. The
    /// result scales by the selected speed and dt and moves the camera
    /// directly.
    ///
    /// Vertical: gravity accumulates into `velocity.y` and the velocity
    /// vector displaces the camera. The two writes touch disjoint axes
    /// apart from y, which only the velocity term moves.
    pub fn update(
        &mut self,
        camera: &mut WalkCamera,
        intent: Vec2,
        sprinting: bool,
        cfg: &MovementConfig,
        dt: f32,
    ) {
        let forward = camera.flat_forward();
        let right = forward.cross(Vec3::Y).normalize_or_zero();

        let dir = (forward * intent.y + right * intent.x).normalize_or_zero();
        let speed = if sprinting {
            cfg.sprint_speed
        } else {
            cfg.base_speed
        };
        camera.position += dir * speed * dt;

        self.velocity.y -= cfg.gravity * dt;
        camera.position += self.velocity * dt;
    }

    /// Clamp the camera against the infinite ground plane.
    ///
    /// A hard clamp, not a bounce: vertical velocity zeroes, the pose
    /// snaps to ground height, and jumping becomes available again.
    /// Above the plane, `can_jump` keeps whatever value it last had.
    pub fn resolve_ground(&mut self, camera: &mut WalkCamera, cfg: &MovementConfig) {
        if camera.position.y <= cfg.ground_height {
            self.velocity.y = 0.0;
            self.can_jump = true;
            camera.position.y = cfg.ground_height;
        }
    }
}
