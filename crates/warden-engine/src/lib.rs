pub mod api;
pub mod core;
pub mod components;
pub mod renderer;
pub mod input;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig};
pub use api::runner::GameRunner;
pub use api::state::{Frame, GameState};
pub use api::types::{EntityKey, SceneId};
pub use components::behavior::Behavior;
pub use components::collision::{CollisionComponent, CollisionType};
pub use components::door::{Door, OnOpen};
pub use components::entity::{Collidable, Entity, Interactable, Positioned, Renderable};
pub use components::interaction::{Interaction, InteractionState};
pub use components::position::PositionComponent;
pub use components::render::{ImageKey, RenderComponent};
pub use core::collision::CollisionManager;
pub use core::events::{Event, EventBus, EventSink, SubscriptionId};
pub use core::geometry::{tile_to_global, Aabb, Direction};
pub use core::player::Player;
pub use core::scene::{Scene, SceneManager};
pub use core::world::{Item, ItemKey, WorldState};
pub use error::ConfigError;
pub use input::queue::{InputEvent, InputQueue};
pub use input::state::InputState;
pub use renderer::commands::{CommandBuffer, DrawCommand, RectInstance};
pub use renderer::traits::{Anchor, Color, RectOptions, Renderer, TextOptions, TextSize};
