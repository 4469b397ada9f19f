use crate::camera::WalkCamera;
use crate::config::SimConfig;
use crate::motion::KinematicBody;
use crate::snow::SnowField;
use snowwalk_input::{Binding, KeyStates};

/// One walkabout session: camera pose, key states, kinematic body, and
/// the snow field, stepped together once per rendered frame.
///
/// The frame driver owns the `WalkSim` and is the only writer. Key and
/// pointer events are fed in between ticks on the same thread; renderers
/// read the camera and snow positions and never mutate them.
pub struct WalkSim {
    config: SimConfig,
    pub camera: WalkCamera,
    keys: KeyStates,
    body: KinematicBody,
    snow: SnowField,
    tick: u64,
}

impl WalkSim {
    pub fn new(config: SimConfig, seed: u64) -> Self {
        Self {
            camera: WalkCamera::default(),
            keys: KeyStates::new(),
            body: KinematicBody::new(),
            snow: SnowField::new(config.snow, seed),
            config,
            tick: 0,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn keys(&self) -> &KeyStates {
        &self.keys
    }

    pub fn body(&self) -> &KinematicBody {
        &self.body
    }

    pub fn snow(&self) -> &SnowField {
        &self.snow
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Feed one key transition from the host event loop.
    ///
    /// A jump press is applied immediately at the event, not deferred to
    /// the next tick; `can_jump` gates repeats, so OS key autorepeat is
    /// harmless.
    pub fn key_event(&mut self, binding: Binding, pressed: bool) {
        self.keys.set(binding, pressed);
        if binding == Binding::Jump && pressed && self.body.try_jump(&self.config.movement) {
            tracing::debug!(tick = self.tick, "jump");
        }
    }

    /// Release all keys (window focus loss).
    pub fn release_keys(&mut self) {
        self.keys.clear();
    }

    /// Apply a pointer-look delta. Rotation only; translation is the
    /// tick's job.
    pub fn look_delta(&mut self, dx: f32, dy: f32) {
        self.camera.rotate(dx, dy);
    }

    /// Advance one tick: movement integration, ground resolution, then
    /// snowfall. The render call happens outside, after this returns.
    pub fn step(&mut self, dt: f32) {
        let intent = self.keys.intent();
        let sprinting = self.keys.is_down(Binding::Sprint);
        self.body
            .update(&mut self.camera, intent, sprinting, &self.config.movement, dt);
        self.body.resolve_ground(&mut self.camera, &self.config.movement);
        self.snow.advance(dt);
        self.tick += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn sim() -> WalkSim {
        let config = SimConfig {
            snow: crate::SnowConfig {
                count: 64,
                ..Default::default()
            },
            ..Default::default()
        };
        WalkSim::new(config, 42)
    }

    #[test]
    fn ground_invariant_holds_across_ticks() {
        let mut sim = sim();
        let ground = sim.config().movement.ground_height;
        sim.key_event(Binding::Forward, true);
        for i in 0..1_000 {
            if i % 97 == 0 {
                sim.key_event(Binding::Jump, true);
                sim.key_event(Binding::Jump, false);
            }
            sim.step(1.0 / 60.0);
            assert!(sim.camera.position.y >= ground - 1e-6);
        }
        assert_eq!(sim.tick_count(), 1_000);
    }

    #[test]
    fn no_keys_means_no_horizontal_drift() {
        let mut sim = sim();
        let start = sim.camera.position;
        for _ in 0..300 {
            sim.step(1.0 / 60.0);
        }
        assert_eq!(sim.camera.position.x, start.x);
        assert_eq!(sim.camera.position.z, start.z);
        // Falls from the spawn height onto the ground plane.
        assert_eq!(sim.camera.position.y, sim.config().movement.ground_height);
    }

    #[test]
    fn jump_press_applies_at_event_time() {
        let mut sim = sim();
        // Land first.
        for _ in 0..300 {
            sim.step(1.0 / 60.0);
        }
        assert!(sim.body().can_jump);

        sim.key_event(Binding::Jump, true);
        // Impulse visible before any step runs.
        assert_eq!(
            sim.body().velocity.y,
            sim.config().movement.jump_impulse
        );
        assert!(!sim.body().can_jump);
    }

    #[test]
    fn airborne_jump_press_is_ignored() {
        let mut sim = sim();
        assert!(!sim.body().can_jump);
        sim.key_event(Binding::Jump, true);
        assert_eq!(sim.body().velocity.y, 0.0);
    }

    #[test]
    fn sprint_binding_doubles_displacement() {
        let mut walk = sim();
        let mut sprint = sim();
        for s in [&mut walk, &mut sprint] {
            for _ in 0..300 {
                s.step(1.0 / 60.0);
            }
            s.key_event(Binding::Forward, true);
        }
        sprint.key_event(Binding::Sprint, true);

        let walk_start = walk.camera.position;
        let sprint_start = sprint.camera.position;
        for _ in 0..60 {
            walk.step(1.0 / 60.0);
            sprint.step(1.0 / 60.0);
        }
        let walk_dist = Vec2::new(
            walk.camera.position.x - walk_start.x,
            walk.camera.position.z - walk_start.z,
        )
        .length();
        let sprint_dist = Vec2::new(
            sprint.camera.position.x - sprint_start.x,
            sprint.camera.position.z - sprint_start.z,
        )
        .length();
        assert!((sprint_dist - 2.0 * walk_dist).abs() < 1e-3);
    }

    #[test]
    fn look_rotates_without_translating() {
        let mut sim = sim();
        let start = sim.camera.position;
        sim.look_delta(150.0, -80.0);
        assert_eq!(sim.camera.position, start);
        assert!(sim.camera.yaw != WalkCamera::default().yaw);
    }

    #[test]
    fn snow_advances_with_the_tick() {
        let mut sim = sim();
        let before = sim.snow().positions().to_vec();
        sim.step(1.0 / 60.0);
        assert_ne!(before, sim.snow().positions());
        assert_eq!(sim.snow().len(), before.len());
    }

    #[test]
    fn release_keys_stops_movement() {
        let mut sim = sim();
        sim.key_event(Binding::Forward, true);
        sim.key_event(Binding::Left, true);
        sim.release_keys();
        assert_eq!(sim.keys().intent(), Vec2::ZERO);
    }
}
