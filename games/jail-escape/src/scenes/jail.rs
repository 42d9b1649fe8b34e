use glam::Vec2;
use warden_engine::{
    Color, CollisionType, Door, Entity, GameConfig, ImageKey, Interaction, RenderComponent, Scene,
    SceneId, WorldState,
};

use super::jail_tunnel::JAIL_TUNNEL;
use super::wall;
use crate::behaviors::{Passage, Pickup};
use crate::flags::CELL_DOOR_OPEN;
use crate::items::CELL_KEY;

pub const JAIL: SceneId = SceneId("jail");

/// Player start, inside the cell.
pub const PLAYER_INITIAL_POS: Vec2 = Vec2::new(3.0, 7.0);

const SHADOW: Color = Color::rgba(0x00, 0x00, 0x00, 0x80);
const EXIT: Color = Color::rgb(0x20, 0x20, 0x28);

/// The starting room: a cell on the west side closed by a locked door, the
/// cell key on the floor, and the exit to the tunnel on the east edge.
pub fn create_jail_scene(config: &GameConfig) -> Scene {
    let east_edge = config.width - 0.5;

    Scene::new(JAIL, PLAYER_INITIAL_POS)
        .with(wall("cell-wall-top", Vec2::new(4.0, 3.5), Vec2::new(8.0, 1.0)))
        .with(wall("cell-wall-bottom", Vec2::new(4.0, 10.5), Vec2::new(8.0, 1.0)))
        .with(wall("cell-wall-east-upper", Vec2::new(7.5, 5.0), Vec2::new(1.0, 2.0)))
        .with(wall("cell-wall-east-lower", Vec2::new(7.5, 9.0), Vec2::new(1.0, 2.0)))
        .with(
            Entity::new("cell-key")
                .with_position(Vec2::new(2.0, 5.0), Vec2::splat(0.5))
                .with_render(RenderComponent::Image { image: ImageKey("cell-key") })
                .with_interaction(Interaction::new("Take key"))
                .with_behavior(Pickup { item: CELL_KEY }),
        )
        .with(
            Entity::new("jail-door")
                .with_position(Vec2::new(7.5, 7.0), Vec2::new(1.0, 2.0))
                .with_collision(CollisionType::Solid)
                .with_render(RenderComponent::Image { image: ImageKey("jail-door") })
                .with_interaction(Interaction::new("Open door").requiring(CELL_KEY.key))
                .with_behavior(Door::new().with_on_open(|world: &mut WorldState| {
                    world.set_flag(CELL_DOOR_OPEN);
                })),
        )
        .with(
            Entity::new("cell-shadow")
                .with_position(Vec2::new(4.0, 9.0), Vec2::new(2.0, 1.0))
                .with_collision(CollisionType::Opaque)
                .with_render(RenderComponent::Rect { color: SHADOW }),
        )
        .with(
            Entity::new("jail-exit")
                .with_position(Vec2::new(east_edge, 7.0), Vec2::new(1.0, 3.0))
                .with_render(RenderComponent::Rect { color: EXIT })
                .with_behavior(Passage {
                    to: JAIL_TUNNEL,
                    requires_flag: Some(CELL_DOOR_OPEN),
                }),
        )
}
