use glam::Vec3;

/// One static building block: center position, per-axis scale, and
/// facade tint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockInstance {
    pub position: Vec3,
    pub scale: Vec3,
    pub color: [f32; 4],
}

/// Street-grid spacing between building centers.
const BLOCK_SPACING: f32 = 8.0;
/// Buildings extend this many grid cells out from the origin.
const CITY_RADIUS: i32 = 5;

/// Generate the static block city.
///
/// Buildings sit on a street grid with heights, footprints, and tints
/// varied by a deterministic hash of the cell coordinate, so the layout
/// is identical across runs without any asset loading. The origin cell
/// is left open as the spawn plaza.
pub fn city_blocks() -> Vec<BlockInstance> {
    let mut blocks = Vec::new();
    for gx in -CITY_RADIUS..=CITY_RADIUS {
        for gz in -CITY_RADIUS..=CITY_RADIUS {
            if gx == 0 && gz == 0 {
                continue;
            }
            let h = cell_hash(gx, gz);
            let height = 2.0 + (h % 1024) as f32 / 1024.0 * 10.0;
            let width = 3.0 + ((h >> 10) % 1024) as f32 / 1024.0 * 2.5;
            let depth = 3.0 + ((h >> 20) % 1024) as f32 / 1024.0 * 2.5;
            let shade = 0.35 + ((h >> 30) % 1024) as f32 / 1024.0 * 0.3;
            blocks.push(BlockInstance {
                position: Vec3::new(
                    gx as f32 * BLOCK_SPACING,
                    height * 0.5,
                    gz as f32 * BLOCK_SPACING,
                ),
                scale: Vec3::new(width, height, depth),
                color: [shade, shade, shade * 1.08, 1.0],
            });
        }
    }
    blocks
}

/// Splitmix64 over the packed cell coordinate. Fast and reproducible
/// across platforms.
fn cell_hash(gx: i32, gz: i32) -> u64 {
    let mut state = ((gx as u64) << 32) ^ (gz as u64 & 0xffff_ffff);
    state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_deterministic() {
        assert_eq!(city_blocks(), city_blocks());
    }

    #[test]
    fn spawn_plaza_stays_open() {
        for block in city_blocks() {
            assert!(
                block.position.x.abs() > 1.0 || block.position.z.abs() > 1.0,
                "building occupies the spawn plaza"
            );
        }
    }

    #[test]
    fn buildings_rest_on_the_ground() {
        for block in city_blocks() {
            let base = block.position.y - block.scale.y * 0.5;
            assert!(base.abs() < 1e-5);
            assert!(block.scale.y >= 2.0);
        }
    }

    #[test]
    fn grid_is_fully_populated() {
        let n = (2 * CITY_RADIUS + 1) * (2 * CITY_RADIUS + 1) - 1;
        assert_eq!(city_blocks().len(), n as usize);
    }

    #[test]
    fn neighboring_cells_differ() {
        assert_ne!(cell_hash(0, 1), cell_hash(1, 0));
        assert_ne!(cell_hash(2, 3), cell_hash(3, 2));
    }
}
