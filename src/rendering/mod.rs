pub mod materials;
pub mod plugin;
