use std::any::Any;

use crate::api::state::Frame;
use crate::components::entity::Entity;
use crate::renderer::traits::Renderer;

/// Per-tick hook for entities that need custom logic.
///
/// The behavior is detached from its entity while it runs, so `entity` is
/// fully borrowable. Replacing `entity.behavior` during `update` wins over the
/// running behavior.
pub trait Behavior {
    fn update(&mut self, entity: &mut Entity, frame: &mut Frame<'_>);

    /// Read-only draw pass, after the entity's own render component.
    fn render(&self, _entity: &Entity, _renderer: &mut dyn Renderer) {}

    /// Downcast support so callers can inspect concrete behavior state.
    fn as_any(&self) -> &dyn Any;
}
