pub mod generation;
pub mod noise;
pub mod plugin;
pub mod types;
pub mod world;

pub use generation::{GenerationStats, NeuralCluster, TerrainGenerator};
pub use noise::{HeightNoise, NoiseField};
pub use types::{BlockType, BlockTypeInfo, Coordinate};
pub use world::{VoxelChange, VoxelWorld};
