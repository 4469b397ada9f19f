use crate::config::SnowConfig;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Reference tick rate for the optional dt-scaled fall mode.
const REFERENCE_TICK_RATE: f32 = 60.0;

/// A fixed pool of snowflake positions.
///
/// Flakes carry no velocity, mass, or lifetime; the fall rate is a
/// global constant from [`SnowConfig`]. A flake that crosses below
/// ground level is recycled in place into a fresh randomized spawn
/// point, so the pool never grows, shrinks, or reallocates.
pub struct SnowField {
    flakes: Vec<Vec3>,
    rng: StdRng,
    config: SnowConfig,
}

impl SnowField {
    /// Allocate the pool with every flake randomized inside the spawn
    /// volume. The seed makes soak runs reproducible.
    pub fn new(config: SnowConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let half = config.spawn_half_extent;
        let flakes = (0..config.count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(config.spawn_height_min..config.spawn_height_max),
                    rng.gen_range(-half..half),
                )
            })
            .collect();
        Self {
            flakes,
            rng,
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.flakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flakes.is_empty()
    }

    pub fn config(&self) -> &SnowConfig {
        &self.config
    }

    /// Current flake positions, in pool order.
    pub fn positions(&self) -> &[Vec3] {
        &self.flakes
    }

    /// Advance every flake one tick and recycle the ones that fell
    /// through the ground.
    ///
    /// By default the decrement is applied once per call regardless of
    /// `dt`, matching the reference behavior (frame-rate dependent).
    /// With `scale_with_dt` the decrement scales against the 60 Hz
    /// reference tick instead.
    pub fn advance(&mut self, dt: f32) {
        let steps = if self.config.scale_with_dt {
            dt * REFERENCE_TICK_RATE
        } else {
            1.0
        };
        let drift = self.config.drift_per_tick * steps;
        let fall = self.config.fall_per_tick * steps;
        let half = self.config.spawn_half_extent;
        let height_min = self.config.spawn_height_min;
        let height_max = self.config.spawn_height_max;

        for flake in &mut self.flakes {
            flake.x -= drift;
            flake.y -= fall;
            if flake.y < 0.0 {
                flake.y = self.rng.gen_range(height_min..height_max);
                flake.x = self.rng.gen_range(-half..half);
                flake.z = self.rng.gen_range(-half..half);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(count: usize) -> SnowConfig {
        SnowConfig {
            count,
            ..SnowConfig::default()
        }
    }

    #[test]
    fn pool_spawns_inside_volume() {
        let field = SnowField::new(small_config(1_000), 7);
        assert_eq!(field.len(), 1_000);
        for p in field.positions() {
            assert!(p.x >= -25.0 && p.x < 25.0);
            assert!(p.z >= -25.0 && p.z < 25.0);
            assert!(p.y >= 10.0 && p.y < 30.0);
        }
    }

    #[test]
    fn pool_size_is_constant() {
        let mut field = SnowField::new(small_config(256), 1);
        for _ in 0..2_000 {
            field.advance(1.0 / 60.0);
        }
        assert_eq!(field.len(), 256);
    }

    #[test]
    fn fixed_decrement_ignores_dt_by_default() {
        let mut a = SnowField::new(small_config(8), 3);
        let mut b = SnowField::new(small_config(8), 3);
        a.advance(0.001);
        b.advance(0.5);
        assert_eq!(a.positions(), b.positions());
        // One tick moves exactly by the configured decrements.
        let fresh = SnowField::new(small_config(8), 3);
        for (before, after) in fresh.positions().iter().zip(a.positions()) {
            assert!((before.x - after.x - 0.01).abs() < 1e-6);
            assert!((before.y - after.y - 0.06).abs() < 1e-6);
            assert_eq!(before.z, after.z);
        }
    }

    #[test]
    fn dt_scaled_mode_matches_reference_tick() {
        let cfg = SnowConfig {
            count: 8,
            scale_with_dt: true,
            ..SnowConfig::default()
        };
        let mut field = SnowField::new(cfg, 3);
        let before = field.positions().to_vec();
        // One reference tick's worth of time: identical to the fixed step.
        field.advance(1.0 / 60.0);
        for (b, a) in before.iter().zip(field.positions()) {
            assert!((b.y - a.y - 0.06).abs() < 1e-5);
        }
    }

    #[test]
    fn seeded_fields_are_reproducible() {
        let mut a = SnowField::new(small_config(64), 42);
        let mut b = SnowField::new(small_config(64), 42);
        for _ in 0..1_000 {
            a.advance(1.0 / 60.0);
            b.advance(1.0 / 60.0);
        }
        assert_eq!(a.positions(), b.positions());
    }

    #[test]
    fn soak_never_leaves_a_flake_below_ground() {
        // 10k ticks: recycle must hold the pool inside [0, height_max)
        // at every tick boundary, indefinitely.
        let mut field = SnowField::new(small_config(2_000), 9);
        for _ in 0..10_000 {
            field.advance(1.0 / 60.0);
            for p in field.positions() {
                assert!(p.y >= 0.0, "flake below ground at tick boundary");
                assert!(p.y < 30.0);
            }
        }
    }

    #[test]
    fn recycled_flakes_cover_the_spawn_range() {
        // After a long soak every flake has been recycled many times;
        // z is untouched by drift so it reflects spawn coverage directly.
        let mut field = SnowField::new(small_config(2_000), 11);
        for _ in 0..10_000 {
            field.advance(1.0 / 60.0);
        }

        let mut buckets = [0usize; 10];
        let mut z_sum = 0.0f64;
        for p in field.positions() {
            assert!(p.z >= -25.0 && p.z < 25.0);
            let idx = (((p.z + 25.0) / 50.0) * 10.0) as usize;
            buckets[idx.min(9)] += 1;
            z_sum += p.z as f64;
        }
        for (i, count) in buckets.iter().enumerate() {
            assert!(*count > 50, "spawn bucket {i} underpopulated: {count}");
        }
        let z_mean = z_sum / field.len() as f64;
        assert!(z_mean.abs() < 2.0, "z mean drifted: {z_mean}");

        // x drifts between recycles but stays near the spawn band:
        // the worst case is a full fall from the top of the volume.
        let max_drift = 30.0 / 0.06 * 0.01;
        for p in field.positions() {
            assert!(p.x >= -25.0 - max_drift - 1e-3 && p.x < 25.0);
        }
    }
}
