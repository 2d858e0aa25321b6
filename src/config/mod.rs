pub mod loader;
pub mod settings;

use bevy::prelude::*;
use std::path::PathBuf;

pub use loader::{load_config, parse_config, ConfigError};
pub use settings::{GameConfig, InteractionSettings, PlayerSettings, WorldSettings, CONFIG_PATH};

/// Loads [`GameConfig`] when added. Must come before the plugins that read it.
pub struct ConfigPlugin {
    pub path: PathBuf,
}

impl Default for ConfigPlugin {
    fn default() -> Self {
        Self {
            path: PathBuf::from(CONFIG_PATH),
        }
    }
}

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(GameConfig::load_or_default(&self.path));
    }
}
