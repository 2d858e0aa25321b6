use bevy::prelude::*;
use log::{info, warn};
use serde::Deserialize;
use std::path::Path;

use crate::config::loader::{load_config, ConfigError};
use crate::constants::*;

pub const CONFIG_PATH: &str = "config/brain_craft.yaml";

/// Top-level game configuration, read once at startup.
#[derive(Resource, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub world: WorldSettings,
    pub player: PlayerSettings,
    pub interaction: InteractionSettings,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WorldSettings {
    /// Columns are generated for x, z in `-half_extent..half_extent`
    pub half_extent: i32,
    pub cluster_count: u32,
    /// Width of the horizontal box cluster centers are drawn from
    pub cluster_spread: f32,
    pub cluster_min_height: f32,
    pub cluster_height_span: f32,
    pub cluster_min_radius: f32,
    pub cluster_radius_span: f32,
    /// Fixed seed for reproducible worlds; entropy when absent
    pub seed: Option<u64>,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            half_extent: DEFAULT_WORLD_HALF_EXTENT,
            cluster_count: DEFAULT_CLUSTER_COUNT,
            cluster_spread: DEFAULT_CLUSTER_SPREAD,
            cluster_min_height: DEFAULT_CLUSTER_MIN_HEIGHT,
            cluster_height_span: DEFAULT_CLUSTER_HEIGHT_SPAN,
            cluster_min_radius: DEFAULT_CLUSTER_MIN_RADIUS,
            cluster_radius_span: DEFAULT_CLUSTER_RADIUS_SPAN,
            seed: None,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PlayerSettings {
    pub spawn: [f32; 3],
    pub move_speed: f32,
    pub jump_speed: f32,
    /// Vertical acceleration, negative is down
    pub gravity: f32,
    /// Horizontal velocity multiplier per tick without directional input
    pub horizontal_damping: f32,
    /// Height above the ground voxel index where the player comes to rest
    pub rest_offset: f32,
    /// Camera offset above the player position
    pub eye_height: f32,
    pub ground_scan_ceiling: i32,
    pub look_sensitivity: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            spawn: DEFAULT_SPAWN,
            move_speed: DEFAULT_MOVE_SPEED,
            jump_speed: DEFAULT_JUMP_SPEED,
            gravity: DEFAULT_GRAVITY,
            horizontal_damping: DEFAULT_HORIZONTAL_DAMPING,
            rest_offset: DEFAULT_REST_OFFSET,
            eye_height: DEFAULT_EYE_HEIGHT,
            ground_scan_ceiling: DEFAULT_GROUND_SCAN_CEILING,
            look_sensitivity: DEFAULT_LOOK_SENSITIVITY,
        }
    }
}

impl PlayerSettings {
    pub fn spawn_position(&self) -> Vec3 {
        Vec3::from_array(self.spawn)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct InteractionSettings {
    /// Maximum distance a block can be targeted from the camera
    pub reach: f32,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            reach: DEFAULT_REACH,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let world = &self.world;
        if world.half_extent <= 0 {
            return Err(ConfigError::Invalid(format!(
                "world.half_extent must be positive, got {}",
                world.half_extent
            )));
        }
        let cluster = [
            world.cluster_spread,
            world.cluster_height_span,
            world.cluster_radius_span,
            world.cluster_min_radius,
        ];
        if cluster.iter().any(|v| !(v.is_finite() && *v >= 0.0)) {
            return Err(ConfigError::Invalid(
                "cluster spans and radius must be finite and not negative".to_string(),
            ));
        }
        require_finite("world.cluster_min_height", world.cluster_min_height)?;
        if !(0.0..=1.0).contains(&self.player.horizontal_damping) {
            return Err(ConfigError::Invalid(format!(
                "player.horizontal_damping must lie in [0, 1], got {}",
                self.player.horizontal_damping
            )));
        }
        let player = &self.player;
        let physics = [
            ("player.move_speed", player.move_speed),
            ("player.jump_speed", player.jump_speed),
            ("player.gravity", player.gravity),
            ("player.rest_offset", player.rest_offset),
            ("player.eye_height", player.eye_height),
            ("player.look_sensitivity", player.look_sensitivity),
        ];
        for (name, value) in physics {
            require_finite(name, value)?;
        }
        for value in player.spawn {
            require_finite("player.spawn", value)?;
        }
        let reach = self.interaction.reach;
        if !(reach.is_finite() && reach > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "interaction.reach must be a finite positive distance, got {}",
                reach
            )));
        }
        Ok(())
    }

    /// Load and validate the config at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config: GameConfig = load_config(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`GameConfig::load`], but any failure falls back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                warn!("Using default config ({}): {}", path.display(), err);
                Self::default()
            }
        }
    }
}

fn require_finite(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{} must be finite, got {}", name, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::parse_config;

    #[test]
    fn partial_document_keeps_defaults() {
        let config: GameConfig = parse_config("world:\n  half_extent: 4\n").unwrap();
        assert_eq!(config.world.half_extent, 4);
        assert_eq!(config.world.cluster_count, DEFAULT_CLUSTER_COUNT);
        assert_eq!(config.player, PlayerSettings::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn seed_is_optional() {
        let config: GameConfig = parse_config("world:\n  seed: 42\n").unwrap();
        assert_eq!(config.world.seed, Some(42));
        assert_eq!(GameConfig::default().world.seed, None);
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = GameConfig::default();
        config.world.half_extent = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = GameConfig::default();
        config.player.horizontal_damping = 1.5;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn reach_must_be_finite() {
        for source in ["interaction:\n  reach: .nan\n", "interaction:\n  reach: .inf\n"] {
            let config: GameConfig = parse_config(source).unwrap();
            assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))), "{source}");
        }

        let mut config = GameConfig::default();
        config.interaction.reach = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn player_physics_must_be_finite() {
        let config: GameConfig = parse_config("player:\n  gravity: -.inf\n").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config: GameConfig = parse_config("player:\n  spawn: [0.0, .nan, 0.0]\n").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = GameConfig::default();
        config.player.move_speed = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn missing_file_falls_back() {
        assert!(matches!(
            GameConfig::load("does/not/exist.yaml"),
            Err(ConfigError::Read { .. })
        ));
        assert_eq!(
            GameConfig::load_or_default("does/not/exist.yaml"),
            GameConfig::default()
        );
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let result: Result<GameConfig, _> = parse_config("world: [unclosed");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }
}
