use bevy::prelude::*;

use crate::voxel::types::{BlockType, Coordinate};
use crate::voxel::world::VoxelWorld;

/// The voxel under the crosshair this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerIntersection {
    pub coord: Coordinate,
    /// Outward normal of the face that was hit, each axis in {-1, 0, 1}
    pub normal: IVec3,
    pub block: BlockType,
}

impl PointerIntersection {
    /// Cell in front of the hit face, where a placed block goes.
    pub fn adjacent(&self) -> Coordinate {
        self.coord + self.normal
    }
}

/// Walk the voxel grid from `origin` along `direction` and return the first
/// occupied cell within `max_distance`.
///
/// Voxel `c` fills the unit cube `[c, c + 1)`. A ray starting inside a
/// solid voxel hits it with a zero normal. A reach that is not a finite
/// positive distance never hits.
pub fn raycast_blocks(
    world: &VoxelWorld,
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
) -> Option<PointerIntersection> {
    let dir = direction.normalize_or_zero();
    if dir == Vec3::ZERO || !(max_distance.is_finite() && max_distance > 0.0) {
        return None;
    }

    let mut cell = origin.floor().as_ivec3();
    let step = IVec3::new(axis_step(dir.x), axis_step(dir.y), axis_step(dir.z));
    let t_delta = Vec3::new(axis_delta(dir.x), axis_delta(dir.y), axis_delta(dir.z));
    let mut t_max = Vec3::new(
        first_crossing(origin.x, cell.x, dir.x, t_delta.x),
        first_crossing(origin.y, cell.y, dir.y, t_delta.y),
        first_crossing(origin.z, cell.z, dir.z, t_delta.z),
    );
    let mut normal = IVec3::ZERO;

    // Each axis crosses at most ceil(reach) + 1 cell boundaries
    let steps = (max_distance.ceil() as usize + 1) * 3;

    for _ in 0..=steps {
        if let Some(block) = world.get_block(cell) {
            return Some(PointerIntersection { coord: cell, normal, block });
        }

        let travelled;
        if t_max.x < t_max.y && t_max.x < t_max.z {
            travelled = t_max.x;
            cell.x += step.x;
            t_max.x += t_delta.x;
            normal = IVec3::new(-step.x, 0, 0);
        } else if t_max.y < t_max.z {
            travelled = t_max.y;
            cell.y += step.y;
            t_max.y += t_delta.y;
            normal = IVec3::new(0, -step.y, 0);
        } else {
            travelled = t_max.z;
            cell.z += step.z;
            t_max.z += t_delta.z;
            normal = IVec3::new(0, 0, -step.z);
        }

        if travelled > max_distance {
            return None;
        }
    }
    None
}

fn axis_step(d: f32) -> i32 {
    if d > 0.0 {
        1
    } else if d < 0.0 {
        -1
    } else {
        0
    }
}

fn axis_delta(d: f32) -> f32 {
    if d != 0.0 { 1.0 / d.abs() } else { f32::INFINITY }
}

fn first_crossing(origin: f32, cell: i32, d: f32, delta: f32) -> f32 {
    if d > 0.0 {
        (cell as f32 + 1.0 - origin) * delta
    } else if d < 0.0 {
        (origin - cell as f32) * delta
    } else {
        f32::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with(coords: &[IVec3]) -> VoxelWorld {
        let mut world = VoxelWorld::new();
        for &c in coords {
            world.set_block(c, BlockType::Tissue);
        }
        world
    }

    #[test]
    fn looking_down_hits_top_face() {
        let world = world_with(&[IVec3::new(0, 5, 0), IVec3::new(0, 4, 0)]);
        let hit = raycast_blocks(&world, Vec3::new(0.5, 8.5, 0.5), Vec3::NEG_Y, 10.0).unwrap();
        assert_eq!(hit.coord, IVec3::new(0, 5, 0));
        assert_eq!(hit.normal, IVec3::Y);
        assert_eq!(hit.adjacent(), IVec3::new(0, 6, 0));
    }

    #[test]
    fn horizontal_ray_hits_side_face() {
        let world = world_with(&[IVec3::new(-3, 2, 0)]);
        let hit = raycast_blocks(&world, Vec3::new(1.5, 2.5, 0.5), Vec3::NEG_X, 10.0).unwrap();
        assert_eq!(hit.coord, IVec3::new(-3, 2, 0));
        assert_eq!(hit.normal, IVec3::X);
    }

    #[test]
    fn nearest_block_wins() {
        let world = world_with(&[IVec3::new(0, 0, -2), IVec3::new(0, 0, -6)]);
        let hit = raycast_blocks(&world, Vec3::new(0.5, 0.5, 0.5), Vec3::NEG_Z, 20.0).unwrap();
        assert_eq!(hit.coord, IVec3::new(0, 0, -2));
        assert_eq!(hit.normal, IVec3::Z);
    }

    #[test]
    fn diagonal_ray_reports_single_axis_normal() {
        let world = world_with(&[IVec3::new(3, 0, 3)]);
        let hit = raycast_blocks(&world, Vec3::new(0.2, 0.5, 0.7), Vec3::new(1.0, 0.0, 1.0), 20.0)
            .unwrap();
        assert_eq!(hit.coord, IVec3::new(3, 0, 3));
        assert_eq!(hit.normal.abs().element_sum(), 1);
    }

    #[test]
    fn out_of_reach_or_empty_is_a_miss() {
        let world = world_with(&[IVec3::new(0, -20, 0)]);
        assert!(raycast_blocks(&world, Vec3::new(0.5, 0.5, 0.5), Vec3::NEG_Y, 5.0).is_none());
        assert!(raycast_blocks(&world, Vec3::new(0.5, 0.5, 0.5), Vec3::Y, 50.0).is_none());
        assert!(raycast_blocks(&world, Vec3::ZERO, Vec3::ZERO, 50.0).is_none());
    }

    #[test]
    fn starting_inside_a_block_hits_it() {
        let world = world_with(&[IVec3::new(0, 0, 0)]);
        let hit = raycast_blocks(&world, Vec3::new(0.5, 0.5, 0.5), Vec3::X, 5.0).unwrap();
        assert_eq!(hit.coord, IVec3::ZERO);
        assert_eq!(hit.normal, IVec3::ZERO);
    }

    #[test]
    fn unbounded_reach_returns_instead_of_spinning() {
        let world = world_with(&[IVec3::new(0, 3, 0)]);
        let origin = Vec3::new(0.5, 10.0, 0.5);
        assert!(raycast_blocks(&world, origin, Vec3::Y, f32::NAN).is_none());
        assert!(raycast_blocks(&world, origin, Vec3::Y, f32::INFINITY).is_none());
        assert!(raycast_blocks(&world, origin, Vec3::NEG_Y, f32::INFINITY).is_none());
        assert!(raycast_blocks(&world, origin, Vec3::NEG_Y, -1.0).is_none());
    }

    #[test]
    fn block_at_the_edge_of_reach_is_found() {
        let world = world_with(&[IVec3::new(0, 0, 0)]);
        let hit = raycast_blocks(&world, Vec3::new(0.5, 5.9, 0.5), Vec3::NEG_Y, 4.95).unwrap();
        assert_eq!(hit.coord, IVec3::ZERO);
        assert_eq!(hit.normal, IVec3::Y);
        assert!(raycast_blocks(&world, Vec3::new(0.5, 5.9, 0.5), Vec3::NEG_Y, 4.85).is_none());
    }
}
