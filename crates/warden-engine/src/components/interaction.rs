use glam::Vec2;

use crate::api::state::Frame;
use crate::core::geometry::{tile_to_global, Aabb};
use crate::core::world::ItemKey;
use crate::renderer::traits::{Renderer, TextOptions, TextSize};

/// How far (field units) around an entity the player can interact from.
/// Solid corrections leave a 1-unit gap, so this must exceed 1.
pub const DEFAULT_REACH: f32 = 1.5;

/// Interaction lifecycle, recomputed every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// Player out of reach.
    #[default]
    Idle,
    /// Player in reach, action key not held.
    Ready,
    /// Player in reach and holding the action key.
    Active,
}

/// Proximity + action-key prompt attached to an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub prompt: String,
    pub reach: f32,
    /// Item the player must hold before the prompt shows.
    pub requires: Option<ItemKey>,
    state: InteractionState,
    requirement_met: bool,
}

impl Interaction {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            reach: DEFAULT_REACH,
            requires: None,
            state: InteractionState::Idle,
            requirement_met: true,
        }
    }

    pub fn requiring(mut self, item: ItemKey) -> Self {
        self.requires = Some(item);
        self.requirement_met = false;
        self
    }

    pub fn with_reach(mut self, reach: f32) -> Self {
        self.reach = reach;
        self
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == InteractionState::Active
    }

    /// Whether the required item (if any) was held at the last update.
    pub fn requirement_met(&self) -> bool {
        self.requirement_met
    }

    /// Must be called with the owning entity's bounds once per tick, before
    /// the entity's behavior runs.
    pub fn update(&mut self, bounds: Option<Aabb>, frame: &Frame<'_>) {
        self.requirement_met = self.requires.map_or(true, |item| frame.world.has_item(item));

        let in_reach = bounds.is_some_and(|b| b.grow(self.reach).overlaps(&frame.player));
        self.state = if !in_reach {
            InteractionState::Idle
        } else if frame.action_pressed() {
            InteractionState::Active
        } else {
            InteractionState::Ready
        };
    }

    /// Draws the prompt above the entity, gated on the requirement.
    pub fn render(&self, bounds: Option<Aabb>, renderer: &mut dyn Renderer) {
        if !self.requirement_met || self.state == InteractionState::Idle {
            return;
        }
        let Some(bounds) = bounds else {
            return;
        };
        let anchor = Vec2::new(bounds.center.x, bounds.min().y - 0.5);
        let at = tile_to_global(anchor, renderer.tile_size());
        renderer.draw_text(&self.prompt, TextSize::Small, at.x, at.y, &TextOptions::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::game::GameConfig;
    use crate::core::events::Event;
    use crate::core::world::{Item, WorldState};
    use crate::input::state::InputState;
    use crate::renderer::commands::CommandBuffer;

    const KEY: Item = Item { key: ItemKey("key"), name: "Key" };

    fn entity_box() -> Option<Aabb> {
        Some(Aabb::new(Vec2::new(5.0, 5.0), Vec2::ONE))
    }

    fn run(interaction: &mut Interaction, player: Vec2, input: &InputState, world: &mut WorldState) {
        let config = GameConfig::default();
        let mut events: Vec<Event> = Vec::new();
        let frame = Frame::new(input, &config, Aabb::new(player, Vec2::ONE), world, &mut events);
        interaction.update(entity_box(), &frame);
    }

    #[test]
    fn state_follows_reach_and_action_key() {
        let mut i = Interaction::new("Open");
        let mut world = WorldState::new();
        let mut input = InputState::new();

        run(&mut i, Vec2::new(15.0, 5.0), &input, &mut world);
        assert_eq!(i.state(), InteractionState::Idle);

        run(&mut i, Vec2::new(7.0, 5.0), &input, &mut world);
        assert_eq!(i.state(), InteractionState::Ready);

        input.press("e");
        run(&mut i, Vec2::new(7.0, 5.0), &input, &mut world);
        assert!(i.is_active());
    }

    #[test]
    fn prompt_is_gated_on_required_item() {
        let mut i = Interaction::new("Open").requiring(KEY.key);
        let mut world = WorldState::new();
        let input = InputState::new();
        let mut buf = CommandBuffer::new(320.0, 240.0, 16.0);

        run(&mut i, Vec2::new(6.0, 5.0), &input, &mut world);
        assert_eq!(i.state(), InteractionState::Ready);
        i.render(entity_box(), &mut buf);
        assert_eq!(buf.texts().count(), 0);

        world.add_item(KEY);
        run(&mut i, Vec2::new(6.0, 5.0), &input, &mut world);
        i.render(entity_box(), &mut buf);
        assert_eq!(buf.texts().collect::<Vec<_>>(), vec!["Open"]);
    }
}
