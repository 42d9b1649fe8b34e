use glam::Vec2;
use warden_engine::{
    tile_to_global, Anchor, Event, Game, GameConfig, GameState, Renderer, Scene, TextOptions,
    TextSize,
};

use crate::scenes::jail::create_jail_scene;
use crate::scenes::jail_tunnel::create_jail_tunnel;

/// Jail Escape content: scenes, HUD and session hooks.
pub struct JailEscape {
    config: GameConfig,
}

impl JailEscape {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
        }
    }

    /// Use a custom config, e.g. loaded with [`GameConfig::from_json`].
    pub fn with_config(config: GameConfig) -> Self {
        Self { config }
    }
}

impl Default for JailEscape {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for JailEscape {
    fn config(&self) -> GameConfig {
        self.config.clone()
    }

    fn scenes(&self, config: &GameConfig) -> Vec<Scene> {
        vec![create_jail_scene(config), create_jail_tunnel(config)]
    }

    fn on_session_start(&self, state: &mut GameState) {
        state.events.subscribe(|event| {
            if let Event::OpaqueCollision { entity } = event {
                log::debug!("player hidden by `{}`", entity);
            }
        });
    }

    fn render_hud(&self, state: &GameState, renderer: &mut dyn Renderer) {
        let names: Vec<&str> = state.world.items().map(|item| item.name).collect();
        let at = tile_to_global(
            Vec2::new(1.0, state.config.height - 0.5),
            renderer.tile_size(),
        );
        renderer.draw_text(
            &format!("Items: {}", names.join(" | ")),
            TextSize::Medium,
            at.x,
            at.y,
            &TextOptions {
                anchor: Anchor::Left,
                ..Default::default()
            },
        );
    }
}
