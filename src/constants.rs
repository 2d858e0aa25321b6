// Terrain defaults (overridden by config)
pub const DEFAULT_WORLD_HALF_EXTENT: i32 = 32;
pub const DEFAULT_CLUSTER_COUNT: u32 = 20;
pub const DEFAULT_CLUSTER_SPREAD: f32 = 60.0;
pub const DEFAULT_CLUSTER_MIN_HEIGHT: f32 = 20.0;
pub const DEFAULT_CLUSTER_HEIGHT_SPAN: f32 = 30.0;
pub const DEFAULT_CLUSTER_MIN_RADIUS: f32 = 2.0;
pub const DEFAULT_CLUSTER_RADIUS_SPAN: f32 = 5.0;

// Column shape
pub const TERRAIN_FREQUENCY: f32 = 0.1;
pub const TERRAIN_AMPLITUDE: f32 = 8.0;
pub const TERRAIN_BASE: f32 = 5.0;
/// Columns extend this many voxels past the surface height (exclusive).
pub const COLUMN_OVERHANG: i32 = 5;
/// Height of the sparse layer above the surface (exclusive).
pub const SPARSE_LAYER_DEPTH: i32 = 3;

// Tier probabilities
pub const UNDERGROUND_BLOOD_CHANCE: f32 = 0.1;
pub const UNDERGROUND_GLIAL_CHANCE: f32 = 0.2;
pub const SURFACE_NEURON_CHANCE: f32 = 0.3;
pub const SURFACE_SYNAPSE_CHANCE: f32 = 0.4;
pub const SPARSE_NEURON_CHANCE: f32 = 0.05;
pub const SPARSE_SYNAPSE_CHANCE: f32 = 0.08;
pub const CLUSTER_NEURON_CHANCE: f32 = 0.6;

// Noise
pub const NOISE_PERMUTATION_SIZE: usize = 256;
pub const NOISE_OUTPUT_SCALE: f32 = 70.0;

// Player kinematics
pub const DEFAULT_MOVE_SPEED: f32 = 10.0;
pub const DEFAULT_JUMP_SPEED: f32 = 15.0;
pub const DEFAULT_GRAVITY: f32 = -30.0;
pub const DEFAULT_HORIZONTAL_DAMPING: f32 = 0.8;
pub const DEFAULT_REST_OFFSET: f32 = 1.8;
pub const DEFAULT_EYE_HEIGHT: f32 = 1.6;
pub const DEFAULT_GROUND_SCAN_CEILING: i32 = 50;
pub const DEFAULT_LOOK_SENSITIVITY: f32 = 0.002;
pub const DEFAULT_SPAWN: [f32; 3] = [0.0, 10.0, 0.0];

// Interaction
pub const DEFAULT_REACH: f32 = 100.0;

// Meshing
pub const VOXEL_SIZE: f32 = 1.0;
