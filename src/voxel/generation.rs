use bevy::prelude::*;
use log::info;
use rand::Rng;

use crate::config::WorldSettings;
use crate::constants::*;
use crate::voxel::noise::HeightNoise;
use crate::voxel::types::BlockType;
use crate::voxel::world::VoxelWorld;

/// Summary of one generation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub columns: usize,
    pub terrain_voxels: usize,
    pub clusters: usize,
    pub cluster_voxels: usize,
}

/// A spherical floating blob of neurons and synapses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeuralCluster {
    pub center: Vec3,
    pub radius: f32,
}

impl NeuralCluster {
    /// Draw a cluster inside the horizontal box and vertical band of `settings`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, settings: &WorldSettings) -> Self {
        let x = (rng.r#gen::<f32>() - 0.5) * settings.cluster_spread;
        let y = rng.r#gen::<f32>() * settings.cluster_height_span + settings.cluster_min_height;
        let z = (rng.r#gen::<f32>() - 0.5) * settings.cluster_spread;
        let radius = rng.r#gen::<f32>() * settings.cluster_radius_span + settings.cluster_min_radius;
        Self {
            center: Vec3::new(x, y, z),
            radius,
        }
    }

    /// Write the cluster into `world`, overwriting anything in the way.
    /// Returns the number of voxels written.
    pub fn fill<R: Rng + ?Sized>(&self, world: &mut VoxelWorld, rng: &mut R) -> usize {
        let r = self.radius;
        let r2 = r * r;
        let mut written = 0;

        let mut dx = -r;
        while dx <= r {
            let mut dy = -r;
            while dy <= r {
                let mut dz = -r;
                while dz <= r {
                    if dx * dx + dy * dy + dz * dz <= r2 {
                        let pos = (self.center + Vec3::new(dx, dy, dz)).floor().as_ivec3();
                        let block = if rng.r#gen::<f32>() < CLUSTER_NEURON_CHANCE {
                            BlockType::Neuron
                        } else {
                            BlockType::Synapse
                        };
                        world.set_block(pos, block);
                        written += 1;
                    }
                    dz += 1.0;
                }
                dy += 1.0;
            }
            dx += 1.0;
        }
        written
    }
}

/// Choose the block for height `y` in a column whose surface is at
/// `base_height`.
///
/// Each tier is an if/else-if cascade: a second draw only happens when the
/// first one misses, so at most one override applies per voxel.
pub fn pick_column_block<R: Rng + ?Sized>(y: i32, base_height: i32, rng: &mut R) -> BlockType {
    if y < base_height {
        if rng.r#gen::<f32>() < UNDERGROUND_BLOOD_CHANCE {
            BlockType::Blood
        } else if rng.r#gen::<f32>() < UNDERGROUND_GLIAL_CHANCE {
            BlockType::Glial
        } else {
            BlockType::Tissue
        }
    } else if y == base_height {
        if rng.r#gen::<f32>() < SURFACE_NEURON_CHANCE {
            BlockType::Neuron
        } else if rng.r#gen::<f32>() < SURFACE_SYNAPSE_CHANCE {
            BlockType::Synapse
        } else {
            BlockType::Tissue
        }
    } else if y < base_height + SPARSE_LAYER_DEPTH {
        if rng.r#gen::<f32>() < SPARSE_NEURON_CHANCE {
            BlockType::Neuron
        } else if rng.r#gen::<f32>() < SPARSE_SYNAPSE_CHANCE {
            BlockType::Synapse
        } else {
            BlockType::Tissue
        }
    } else {
        BlockType::Tissue
    }
}

/// Populates a [`VoxelWorld`] with noise-driven columns and floating clusters.
pub struct TerrainGenerator<N: HeightNoise> {
    noise: N,
    settings: WorldSettings,
}

impl<N: HeightNoise> TerrainGenerator<N> {
    pub fn new(noise: N, settings: WorldSettings) -> Self {
        Self { noise, settings }
    }

    pub fn settings(&self) -> &WorldSettings {
        &self.settings
    }

    /// Surface height of the column at (x, z).
    pub fn column_height(&self, x: i32, z: i32) -> i32 {
        let n = self
            .noise
            .sample(x as f32 * TERRAIN_FREQUENCY, z as f32 * TERRAIN_FREQUENCY);
        (n * TERRAIN_AMPLITUDE + TERRAIN_BASE).floor() as i32
    }

    /// Fill every column in `-half_extent..half_extent` on both axes from
    /// y = 0 up to (not including) surface + overhang.
    pub fn generate_base_terrain<R: Rng + ?Sized>(
        &self,
        world: &mut VoxelWorld,
        rng: &mut R,
    ) -> GenerationStats {
        let extent = self.settings.half_extent;
        let mut stats = GenerationStats::default();

        for x in -extent..extent {
            for z in -extent..extent {
                let base_height = self.column_height(x, z);
                for y in 0..base_height + COLUMN_OVERHANG {
                    let block = pick_column_block(y, base_height, rng);
                    world.set_block(IVec3::new(x, y, z), block);
                    stats.terrain_voxels += 1;
                }
                stats.columns += 1;
            }
        }
        stats
    }

    /// Scatter the configured number of clusters. Later clusters overwrite
    /// earlier ones and the base terrain.
    pub fn generate_clusters<R: Rng + ?Sized>(
        &self,
        world: &mut VoxelWorld,
        rng: &mut R,
    ) -> Vec<(NeuralCluster, usize)> {
        (0..self.settings.cluster_count)
            .map(|_| {
                let cluster = NeuralCluster::random(rng, &self.settings);
                let written = cluster.fill(world, rng);
                (cluster, written)
            })
            .collect()
    }

    /// Run both passes.
    pub fn generate<R: Rng + ?Sized>(&self, world: &mut VoxelWorld, rng: &mut R) -> GenerationStats {
        let mut stats = self.generate_base_terrain(world, rng);
        let clusters = self.generate_clusters(world, rng);
        stats.clusters = clusters.len();
        stats.cluster_voxels = clusters.iter().map(|(_, written)| written).sum();

        info!(
            "Generated {} columns ({} terrain voxels) and {} clusters ({} voxels); world holds {} blocks",
            stats.columns,
            stats.terrain_voxels,
            stats.clusters,
            stats.cluster_voxels,
            world.len()
        );
        stats
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::HeightNoise;
    use rand::RngCore;

    /// Noise that is zero everywhere.
    pub struct FlatNoise;

    impl HeightNoise for FlatNoise {
        fn sample(&self, _x: f32, _y: f32) -> f32 {
            0.0
        }
    }

    /// Random source whose every draw is 0.
    pub struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            dest.fill(0);
            Ok(())
        }
    }

    /// Random source replaying a fixed sequence of unit floats.
    pub struct ScriptedRng {
        draws: Vec<f32>,
        next: usize,
    }

    impl ScriptedRng {
        pub fn new(draws: &[f32]) -> Self {
            Self {
                draws: draws.to_vec(),
                next: 0,
            }
        }

        pub fn consumed(&self) -> usize {
            self.next
        }
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            let value = self.draws[self.next % self.draws.len()];
            self.next += 1;
            // Standard f32 sampling keeps the top 24 bits
            ((value * (1u32 << 24) as f32) as u32) << 8
        }

        fn next_u64(&mut self) -> u64 {
            self.next_u32() as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            dest.fill(0);
            Ok(())
        }
    }
}
