use std::fmt;

use glam::Vec2;

use crate::api::state::Frame;
use crate::api::types::EntityKey;
use crate::components::behavior::Behavior;
use crate::components::collision::{CollisionComponent, CollisionType};
use crate::components::interaction::Interaction;
use crate::components::position::PositionComponent;
use crate::components::render::RenderComponent;
use crate::core::geometry::Aabb;
use crate::renderer::traits::Renderer;

/// Something with a box in the field.
pub trait Positioned {
    fn bounds(&self) -> Option<Aabb>;
}

/// Something collision resolution can classify.
pub trait Collidable: Positioned {
    fn key(&self) -> &EntityKey;
    fn collision_type(&self) -> CollisionType;
}

/// Something with a read-only draw pass.
pub trait Renderable {
    fn render(&self, renderer: &mut dyn Renderer);
}

/// Something the player can activate.
pub trait Interactable {
    fn interaction(&self) -> Option<&Interaction>;
}

/// Fat entity: one struct with optional components.
/// Capabilities come from which components are present, not from subtyping.
pub struct Entity {
    /// Unique within the owning scene.
    pub key: EntityKey,
    /// Placement (entities without one never collide or draw).
    pub position: Option<PositionComponent>,
    pub collision: Option<CollisionComponent>,
    /// Render descriptor (entities without one are invisible).
    pub render: Option<RenderComponent>,
    pub interaction: Option<Interaction>,
    pub behavior: Option<Box<dyn Behavior>>,
    removed: bool,
}

impl Entity {
    pub fn new(key: impl Into<EntityKey>) -> Self {
        Self {
            key: key.into(),
            position: None,
            collision: None,
            render: None,
            interaction: None,
            behavior: None,
            removed: false,
        }
    }

    // -- Builder pattern --

    pub fn with_position(mut self, pos: Vec2, dim: Vec2) -> Self {
        self.position = Some(PositionComponent::new(pos, dim));
        self
    }

    /// Panics if the entity has no position yet.
    pub fn with_collision(mut self, kind: CollisionType) -> Self {
        assert!(
            self.position.is_some(),
            "entity `{}` needs a position before a collision component",
            self.key
        );
        self.collision = Some(CollisionComponent::new(kind));
        self
    }

    pub fn with_render(mut self, render: RenderComponent) -> Self {
        self.render = Some(render);
        self
    }

    pub fn with_interaction(mut self, interaction: Interaction) -> Self {
        self.interaction = Some(interaction);
        self
    }

    pub fn with_behavior(mut self, behavior: impl Behavior + 'static) -> Self {
        self.behavior = Some(Box::new(behavior));
        self
    }

    /// Downcast the behavior to a concrete type.
    pub fn behavior_as<T: 'static>(&self) -> Option<&T> {
        self.behavior.as_ref()?.as_any().downcast_ref::<T>()
    }

    /// Mark the entity for removal; the scene drops it after the update pass.
    pub fn remove(&mut self) {
        self.removed = true;
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Update pass: interaction first, then behavior.
    pub fn update(&mut self, frame: &mut Frame<'_>) {
        let bounds = self.bounds();
        if let Some(interaction) = self.interaction.as_mut() {
            interaction.update(bounds, frame);
        }

        if let Some(mut behavior) = self.behavior.take() {
            behavior.update(self, frame);
            if self.behavior.is_none() {
                self.behavior = Some(behavior);
            }
        }
    }
}

impl Positioned for Entity {
    fn bounds(&self) -> Option<Aabb> {
        self.position.as_ref().map(PositionComponent::bounds)
    }
}

impl Collidable for Entity {
    fn key(&self) -> &EntityKey {
        &self.key
    }

    fn collision_type(&self) -> CollisionType {
        self.collision.map_or(CollisionType::None, |c| c.kind)
    }
}

impl Renderable for Entity {
    fn render(&self, renderer: &mut dyn Renderer) {
        if let (Some(position), Some(render)) = (&self.position, &self.render) {
            renderer.draw_entity(position.pos, position.dim, render);
        }
        if let Some(interaction) = &self.interaction {
            interaction.render(self.bounds(), renderer);
        }
        if let Some(behavior) = &self.behavior {
            behavior.render(self, renderer);
        }
    }
}

impl Interactable for Entity {
    fn interaction(&self) -> Option<&Interaction> {
        self.interaction.as_ref()
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("key", &self.key)
            .field("position", &self.position)
            .field("collision", &self.collision)
            .field("render", &self.render)
            .field("interaction", &self.interaction)
            .field("has_behavior", &self.behavior.is_some())
            .field("removed", &self.removed)
            .finish()
    }
}
