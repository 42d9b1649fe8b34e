use glam::Vec2;

use crate::components::entity::{Positioned, Renderable};
use crate::components::render::RenderComponent;
use crate::core::geometry::Aabb;
use crate::input::state::InputState;
use crate::renderer::traits::{Color, Renderer};

pub const LEFT_KEYS: &[&str] = &["ArrowLeft", "a"];
pub const RIGHT_KEYS: &[&str] = &["ArrowRight", "d"];
pub const UP_KEYS: &[&str] = &["ArrowUp", "w"];
pub const DOWN_KEYS: &[&str] = &["ArrowDown", "s"];

const ALIVE_COLOR: Color = Color::rgb(0xf2, 0xd3, 0x8a);
const KILLED_COLOR: Color = Color::rgb(0x8a, 0x10, 0x10);

/// The keyboard-driven body that collision resolution acts on.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Center in field units.
    pub pos: Vec2,
    /// Full width and height.
    pub dim: Vec2,
    /// Movement budget per tick, per axis. Also bounds collision correction.
    pub velocity: f32,
    is_killed: bool,
}

impl Player {
    pub fn new(pos: Vec2, dim: Vec2, velocity: f32) -> Self {
        assert!(
            dim.x >= 0.0 && dim.y >= 0.0,
            "player dimensions must be non-negative, got {dim}"
        );
        assert!(velocity > 0.0, "player velocity must be positive, got {velocity}");
        Self {
            pos,
            dim,
            velocity,
            is_killed: false,
        }
    }

    pub fn half_extents(&self) -> Vec2 {
        self.dim * 0.5
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.dim)
    }

    pub fn is_killed(&self) -> bool {
        self.is_killed
    }

    /// Freeze the player. Idempotent.
    pub fn kill(&mut self) {
        if !self.is_killed {
            log::info!("player killed at {:?}", self.pos);
        }
        self.is_killed = true;
    }

    /// Move by up to `velocity` on each axis according to held keys.
    pub fn update(&mut self, input: &InputState) {
        if self.is_killed {
            return;
        }

        let mut step = Vec2::ZERO;
        if input.any_pressed(LEFT_KEYS) {
            step.x -= 1.0;
        }
        if input.any_pressed(RIGHT_KEYS) {
            step.x += 1.0;
        }
        if input.any_pressed(UP_KEYS) {
            step.y -= 1.0;
        }
        if input.any_pressed(DOWN_KEYS) {
            step.y += 1.0;
        }
        self.pos += step * self.velocity;
    }
}

impl Positioned for Player {
    fn bounds(&self) -> Option<Aabb> {
        Some(self.aabb())
    }
}

impl Renderable for Player {
    fn render(&self, renderer: &mut dyn Renderer) {
        let color = if self.is_killed { KILLED_COLOR } else { ALIVE_COLOR };
        renderer.draw_entity(self.pos, self.dim, &RenderComponent::Rect { color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_by_velocity_per_axis() {
        let mut player = Player::new(Vec2::new(5.0, 5.0), Vec2::ONE, 0.25);
        let mut input = InputState::new();
        input.press("ArrowRight");
        input.press("w");
        player.update(&input);
        assert_eq!(player.pos, Vec2::new(5.25, 4.75));

        input.press("ArrowLeft");
        player.update(&input);
        assert_eq!(player.pos, Vec2::new(5.25, 4.5));
    }

    #[test]
    fn killed_player_does_not_move() {
        let mut player = Player::new(Vec2::new(5.0, 5.0), Vec2::ONE, 0.25);
        player.kill();
        player.kill();
        let mut input = InputState::new();
        input.press("d");
        player.update(&input);
        assert_eq!(player.pos, Vec2::new(5.0, 5.0));
        assert!(player.is_killed());
    }
}
