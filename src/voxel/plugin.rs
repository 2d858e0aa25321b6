use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

use crate::config::GameConfig;
use crate::rendering::materials::BlockAssets;
use crate::voxel::generation::TerrainGenerator;
use crate::voxel::noise::NoiseField;
use crate::voxel::types::Coordinate;
use crate::voxel::world::{VoxelChange, VoxelWorld};

pub struct VoxelPlugin;

/// The single random source every generation step draws from.
#[derive(Resource)]
pub struct WorldRng {
    pub seed: u64,
    pub rng: StdRng,
}

impl WorldRng {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

/// Marks the render entity standing in for one voxel.
#[derive(Component, Debug)]
pub struct VoxelMesh {
    pub coord: Coordinate,
}

/// Coordinate to render entity, kept in step with [`VoxelWorld`] so removal
/// never has to search the scene.
#[derive(Resource, Default, Debug)]
pub struct VoxelMeshIndex {
    entities: HashMap<Coordinate, Entity>,
}

impl VoxelMeshIndex {
    /// Record `entity` for `coord`, handing back the entity it replaces.
    pub fn replace(&mut self, coord: Coordinate, entity: Entity) -> Option<Entity> {
        self.entities.insert(coord, entity)
    }

    pub fn take(&mut self, coord: Coordinate) -> Option<Entity> {
        self.entities.remove(&coord)
    }

    pub fn get(&self, coord: Coordinate) -> Option<Entity> {
        self.entities.get(&coord).copied()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Plugin for VoxelPlugin {
    fn build(&self, app: &mut App) {
        let seed = app
            .world()
            .get_resource::<GameConfig>()
            .and_then(|config| config.world.seed);

        app
            .insert_resource(WorldRng::new(seed))
            .init_resource::<VoxelWorld>()
            .init_resource::<VoxelMeshIndex>()
            .add_systems(Startup, generate_world)
            .add_systems(PostUpdate, sync_voxel_meshes);
    }
}

pub fn generate_world(
    config: Res<GameConfig>,
    mut world: ResMut<VoxelWorld>,
    mut world_rng: ResMut<WorldRng>,
) {
    info!("Generating brain world with seed {}", world_rng.seed);
    let WorldRng { rng, .. } = &mut *world_rng;
    let noise = NoiseField::new(rng);
    let generator = TerrainGenerator::new(noise, config.world.clone());
    generator.generate(&mut world, rng);
}

/// Reflect queued world mutations into the scene: one cube per voxel.
pub fn sync_voxel_meshes(
    mut commands: Commands,
    mut world: ResMut<VoxelWorld>,
    mut index: ResMut<VoxelMeshIndex>,
    assets: Res<BlockAssets>,
) {
    if !world.has_pending_changes() {
        return;
    }

    for change in world.drain_changes() {
        match change {
            VoxelChange::Placed { coord, block } => {
                let entity = commands
                    .spawn((
                        Mesh3d(assets.cube.clone()),
                        MeshMaterial3d(assets.material(block)),
                        Transform::from_translation(BlockAssets::voxel_center(coord)),
                        VoxelMesh { coord },
                    ))
                    .id();
                if let Some(old) = index.replace(coord, entity) {
                    commands.entity(old).despawn();
                }
            }
            VoxelChange::Removed { coord } => {
                if let Some(entity) = index.take(coord) {
                    commands.entity(entity).despawn();
                }
            }
        }
    }
}
