use glam::Vec2;
use warden_engine::{Color, Entity, GameConfig, ImageKey, Interaction, RenderComponent, Scene, SceneId};

use super::jail::JAIL;
use super::wall;
use crate::behaviors::{Hazard, Passage, Pickup};
use crate::items::TORCH;

pub const JAIL_TUNNEL: SceneId = SceneId("jail-tunnel");

pub const TUNNEL_ENTRY_POS: Vec2 = Vec2::new(1.5, 7.0);

const SPIKES: Color = Color::rgb(0xb0, 0x20, 0x20);

/// East-west corridor with spikes along the north wall and a way back west.
pub fn create_jail_tunnel(config: &GameConfig) -> Scene {
    let mid = config.width * 0.5;

    Scene::new(JAIL_TUNNEL, TUNNEL_ENTRY_POS)
        .with(wall("tunnel-wall-top", Vec2::new(mid, 4.5), Vec2::new(config.width, 1.0)))
        .with(wall("tunnel-wall-bottom", Vec2::new(mid, 9.5), Vec2::new(config.width, 1.0)))
        .with(
            Entity::new("spikes")
                .with_position(Vec2::new(12.0, 6.0), Vec2::new(1.0, 2.0))
                .with_render(RenderComponent::Rect { color: SPIKES })
                .with_behavior(Hazard),
        )
        .with(
            Entity::new("torch")
                .with_position(Vec2::new(16.0, 8.0), Vec2::splat(0.5))
                .with_render(RenderComponent::Image { image: ImageKey("torch") })
                .with_interaction(Interaction::new("Take torch"))
                .with_behavior(Pickup { item: TORCH }),
        )
        .with(
            Entity::new("tunnel-back")
                .with_position(Vec2::new(0.25, 7.0), Vec2::new(0.5, 4.0))
                .with_behavior(Passage {
                    to: JAIL,
                    requires_flag: None,
                }),
        )
}
