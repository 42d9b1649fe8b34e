use crate::api::game::GameConfig;
use crate::api::types::SceneId;
use crate::core::collision::CollisionManager;
use crate::core::events::{EventBus, EventSink};
use crate::core::geometry::Aabb;
use crate::core::scene::SceneManager;
use crate::core::world::WorldState;
use crate::input::state::InputState;

/// Everything that is mutable during one session.
///
/// Exactly one instance is live at a time, owned by the
/// [`GameRunner`](crate::GameRunner). Restart builds a new one; nothing may keep
/// a reference to the old instance.
pub struct GameState {
    pub config: GameConfig,
    pub input: InputState,
    pub scenes: SceneManager,
    pub collisions: CollisionManager,
    pub world: WorldState,
    pub events: EventBus,
}

impl GameState {
    pub fn new(config: GameConfig, scenes: SceneManager, world: WorldState) -> Self {
        let collisions = CollisionManager::from_config(&config);
        Self {
            config,
            input: InputState::new(),
            scenes,
            collisions,
            world,
            events: EventBus::new(),
        }
    }

    /// Run the active scene's update pass. `player` is the player's box as of
    /// the end of the previous tick. Returns the new scene id on a transition.
    pub fn update_scenes(&mut self, player: Aabb) -> Option<SceneId> {
        let mut frame = Frame::new(
            &self.input,
            &self.config,
            player,
            &mut self.world,
            &mut self.events,
        );
        self.scenes.update(&mut frame)
    }
}

/// Per-update view handed to entities: what they may read and what they may
/// change, borrowed from the [`GameState`] for the length of one pass.
pub struct Frame<'a> {
    pub input: &'a InputState,
    pub config: &'a GameConfig,
    /// Player bounds.
    pub player: Aabb,
    pub world: &'a mut WorldState,
    pub events: &'a mut dyn EventSink,
    transition: Option<SceneId>,
}

impl<'a> Frame<'a> {
    pub fn new(
        input: &'a InputState,
        config: &'a GameConfig,
        player: Aabb,
        world: &'a mut WorldState,
        events: &'a mut dyn EventSink,
    ) -> Self {
        Self {
            input,
            config,
            player,
            world,
            events,
            transition: None,
        }
    }

    /// Whether the configured action key is held.
    pub fn action_pressed(&self) -> bool {
        self.input.is_pressed(&self.config.action_key)
    }

    /// Ask for a scene change once the current update pass ends.
    /// The last request in a pass wins.
    pub fn request_transition(&mut self, to: SceneId) {
        self.transition = Some(to);
    }

    pub fn take_transition(&mut self) -> Option<SceneId> {
        self.transition.take()
    }
}
