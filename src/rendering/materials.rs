use bevy::prelude::*;

use crate::constants::VOXEL_SIZE;
use crate::voxel::types::{BlockType, Coordinate};

/// Shared render assets: one cube mesh and one material per block type.
#[derive(Resource)]
pub struct BlockAssets {
    pub cube: Handle<Mesh>,
    pub materials: [Handle<StandardMaterial>; BlockType::COUNT],
}

impl BlockAssets {
    pub fn material(&self, block: BlockType) -> Handle<StandardMaterial> {
        self.materials[block as usize].clone()
    }

    /// World-space centre of the cube drawn for `coord`.
    pub fn voxel_center(coord: Coordinate) -> Vec3 {
        coord.as_vec3() * VOXEL_SIZE + Vec3::splat(VOXEL_SIZE * 0.5)
    }
}

pub fn block_material(block: BlockType) -> StandardMaterial {
    StandardMaterial {
        base_color: block.base_color(),
        emissive: block.emissive(),
        perceptual_roughness: 0.9,
        metallic: 0.0,
        reflectance: 0.1,
        ..default()
    }
}

pub fn setup_block_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let cube = meshes.add(Cuboid::new(VOXEL_SIZE, VOXEL_SIZE, VOXEL_SIZE));
    let materials = BlockType::ALL.map(|block| materials.add(block_material(block)));

    commands.insert_resource(BlockAssets { cube, materials });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubes_sit_on_integer_cells() {
        assert_eq!(
            BlockAssets::voxel_center(IVec3::new(0, 5, -1)),
            Vec3::new(0.5, 5.5, -0.5)
        );
    }

    #[test]
    fn materials_carry_block_glow() {
        let material = block_material(BlockType::Synapse);
        assert_eq!(material.base_color, BlockType::Synapse.base_color());
        assert_eq!(material.emissive, BlockType::Synapse.emissive());
    }
}
