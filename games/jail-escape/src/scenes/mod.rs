pub mod jail;
pub mod jail_tunnel;

use glam::Vec2;
use warden_engine::{Color, CollisionType, Entity, RenderComponent};

const STONE: Color = Color::rgb(0x5a, 0x55, 0x60);

/// Solid stone wall block.
pub(crate) fn wall(key: &str, pos: Vec2, dim: Vec2) -> Entity {
    Entity::new(key)
        .with_position(pos, dim)
        .with_collision(CollisionType::Solid)
        .with_render(RenderComponent::Rect { color: STONE })
}
