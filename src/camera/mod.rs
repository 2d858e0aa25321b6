pub mod controller;
pub mod plugin;
