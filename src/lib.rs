pub mod constants;
pub mod config;
pub mod voxel;
pub mod rendering;
pub mod player;
pub mod camera;
pub mod interaction;
pub mod ui;
pub mod environment;
