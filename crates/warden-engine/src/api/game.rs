use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::state::GameState;
use crate::core::scene::Scene;
use crate::core::world::WorldState;
use crate::error::ConfigError;
use crate::renderer::traits::Renderer;

/// Configuration for the engine, provided by the game.
/// Every field has a default, so a partial JSON object is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Play-field width in field units.
    pub width: f32,
    /// Play-field height in field units.
    pub height: f32,
    /// Pixels per field unit, for tile → global conversion.
    pub tile_size: f32,
    /// Player movement budget per tick, per axis.
    pub player_speed: f32,
    /// Player width and height in field units.
    pub player_size: [f32; 2],
    /// Key that restarts the session after death.
    pub restart_key: String,
    /// Key that activates interactions.
    pub action_key: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 20.0,
            height: 15.0,
            tile_size: 16.0,
            player_speed: 0.125,
            player_size: [1.0, 1.0],
            restart_key: "r".to_string(),
            action_key: "e".to_string(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::InvalidBounds {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.tile_size > 0.0) {
            return Err(ConfigError::InvalidTileSize(self.tile_size));
        }
        if !(self.player_speed > 0.0) {
            return Err(ConfigError::InvalidSpeed(self.player_speed));
        }
        if !(self.player_size[0] > 0.0 && self.player_size[1] > 0.0) {
            return Err(ConfigError::InvalidPlayerSize(self.player_size));
        }
        if self.player_size[0] > self.width || self.player_size[1] > self.height {
            return Err(ConfigError::PlayerExceedsField {
                size: self.player_size,
                width: self.width,
                height: self.height,
            });
        }
        if self.restart_key.is_empty() {
            return Err(ConfigError::EmptyKey("restart"));
        }
        if self.action_key.is_empty() {
            return Err(ConfigError::EmptyKey("action"));
        }
        Ok(())
    }

    pub fn player_dim(&self) -> Vec2 {
        Vec2::from(self.player_size)
    }
}

/// The content contract every game must fulfill.
///
/// The runner calls the builders once at start and again on every restart, so
/// they must return fresh values each time.
pub trait Game {
    /// Return engine configuration. Called once, before the first session.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Build the scenes for a new session. The first one is the initial scene
    /// and its spawn point is the player's start position.
    fn scenes(&self, config: &GameConfig) -> Vec<Scene>;

    /// Build the world state for a new session.
    fn world(&self) -> WorldState {
        WorldState::new()
    }

    /// Hook run after each session's state is built, e.g. to subscribe to the
    /// new event bus.
    fn on_session_start(&self, _state: &mut GameState) {}

    /// Optional read-only HUD pass, drawn over the active scene while alive.
    fn render_hud(&self, _state: &GameState, _renderer: &mut dyn Renderer) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "width": 10.0, "restart_key": "x" }"#).unwrap();
        assert_eq!(config.width, 10.0);
        assert_eq!(config.height, 15.0);
        assert_eq!(config.restart_key, "x");
        assert_eq!(config.action_key, "e");
        assert_eq!(config.player_dim(), Vec2::ONE);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "width": -1.0 }"#),
            Err(ConfigError::InvalidBounds { .. })
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "tile_size": 0.0 }"#),
            Err(ConfigError::InvalidTileSize(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "player_speed": 0.0 }"#),
            Err(ConfigError::InvalidSpeed(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "action_key": "" }"#),
            Err(ConfigError::EmptyKey("action"))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "width": 10.0, "player_size": [12.0, 1.0] }"#),
            Err(ConfigError::PlayerExceedsField { .. })
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "height": 2.0, "player_size": [1.0, 2.5] }"#),
            Err(ConfigError::PlayerExceedsField { .. })
        ));
        // A player exactly as wide as the field still fits.
        assert!(GameConfig::from_json(r#"{ "width": 2.0, "player_size": [2.0, 1.0] }"#).is_ok());
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
