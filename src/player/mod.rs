pub mod controller;
pub mod input;
pub mod inventory;
pub mod plugin;

pub use controller::{MovementIntent, PlayerController, PlayerState};
pub use input::{EditButtons, InputSnapshot, PointerLock};
