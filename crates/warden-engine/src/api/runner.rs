use glam::Vec2;

use crate::api::game::{Game, GameConfig};
use crate::api::state::GameState;
use crate::components::entity::Renderable;
use crate::core::events::{Event, EventSink};
use crate::core::player::Player;
use crate::core::scene::SceneManager;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::traits::{Color, RectOptions, Renderer, TextOptions, TextSize};

const DEAD_OVERLAY: Color = Color::rgba(0x00, 0x00, 0x00, 0xaa);

/// Top-level owner of a game session.
///
/// Holds the live [`GameState`] and the player as fields and reassigns both on
/// restart, so callers must go through the runner instead of keeping the
/// state around.
pub struct GameRunner<G: Game> {
    game: G,
    config: GameConfig,
    state: GameState,
    player: Player,
    input: InputQueue,
}

impl<G: Game> GameRunner<G> {
    /// Panics if the game's config is invalid; use [`GameConfig::validate`]
    /// beforehand to report it instead.
    pub fn new(game: G) -> Self {
        let config = game.config();
        if let Err(e) = config.validate() {
            panic!("invalid game config: {e}");
        }
        let state = Self::create_state(&game, &config);
        let player = Self::create_player(&state, &config);
        log::info!(
            "runner: initialized, {}x{} field, initial scene `{}`",
            config.width,
            config.height,
            state.scenes.active_id()
        );
        Self {
            game,
            config,
            state,
            player,
            input: InputQueue::new(),
        }
    }

    fn create_state(game: &G, config: &GameConfig) -> GameState {
        let scenes = SceneManager::new(game.scenes(config));
        let mut state = GameState::new(config.clone(), scenes, game.world());
        game.on_session_start(&mut state);
        state
    }

    fn create_player(state: &GameState, config: &GameConfig) -> Player {
        Player::new(
            state.scenes.active().spawn(),
            config.player_dim(),
            config.player_speed,
        )
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The live state. Re-fetch after every tick: restart replaces it.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Push an input event; it is applied at the start of the next update.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// One update then one render.
    pub fn tick(&mut self, renderer: &mut dyn Renderer) {
        self.update();
        self.render(renderer);
    }

    pub fn update(&mut self) {
        self.state.events.clear_frame_data();
        self.state.input.apply_all(self.input.drain());

        if self.state.world.is_dead {
            if !self.player.is_killed() {
                self.player.kill();
                self.state.events.emit(Event::PlayerDied);
            }
            if self.state.input.is_pressed(&self.config.restart_key) {
                self.restart();
            }
            return;
        }

        if self.state.update_scenes(self.player.aabb()).is_some() {
            self.player.pos = self.state.scenes.active().spawn();
        }
        self.player.update(&self.state.input);

        let state = &mut self.state;
        state
            .collisions
            .handle(&mut self.player, state.scenes.active(), &mut state.events);
    }

    /// Start a fresh session. No-op (returns false) unless the death flag is set.
    pub fn restart(&mut self) -> bool {
        if !self.state.world.is_dead {
            return false;
        }
        self.state = Self::create_state(&self.game, &self.config);
        self.player = Self::create_player(&self.state, &self.config);
        self.state.events.emit(Event::Restarted);
        log::info!("runner: restarted in scene `{}`", self.state.scenes.active_id());
        true
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        if self.state.world.is_dead {
            self.render_dead(renderer);
        } else {
            self.state.scenes.render(renderer);
            self.game.render_hud(&self.state, renderer);
        }
        self.player.render(renderer);
    }

    fn render_dead(&self, renderer: &mut dyn Renderer) {
        renderer.render_rect(&RectOptions::full_screen(DEAD_OVERLAY));

        let center = Vec2::new(renderer.width(), renderer.height()) * 0.5;
        renderer.draw_text(
            "You are dead",
            TextSize::Large,
            center.x,
            center.y,
            &TextOptions {
                color: Color::RED,
                ..Default::default()
            },
        );
        renderer.draw_text(
            &format!("Press {} to restart", self.config.restart_key.to_uppercase()),
            TextSize::Medium,
            center.x,
            center.y + 10.0,
            &TextOptions::default(),
        );
    }
}
