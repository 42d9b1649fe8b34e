use std::any::Any;
use std::fmt;

use crate::api::state::Frame;
use crate::components::behavior::Behavior;
use crate::components::collision::CollisionType;
use crate::components::entity::{Entity, Interactable};
use crate::core::events::Event;
use crate::core::world::WorldState;

/// Callback run once when a door opens.
pub type OnOpen = Box<dyn FnMut(&mut WorldState)>;

/// Door behavior. Pair it with an [`Interaction`](crate::Interaction) on the
/// same entity; the door opens when that interaction is active and its
/// requirement is met.
///
/// Opening is a latch: collision goes to `None`, the render component and the
/// interaction are dropped, and `on_open` fires exactly once. The entity stays
/// in the scene as an inert object.
pub struct Door {
    is_open: bool,
    on_open: Option<OnOpen>,
}

impl Door {
    pub fn new() -> Self {
        Self {
            is_open: false,
            on_open: None,
        }
    }

    pub fn with_on_open(mut self, on_open: impl FnMut(&mut WorldState) + 'static) -> Self {
        self.on_open = Some(Box::new(on_open));
        self
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }
}

impl Default for Door {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for Door {
    fn update(&mut self, entity: &mut Entity, frame: &mut Frame<'_>) {
        if self.is_open {
            return;
        }

        let unlocked = entity
            .interaction()
            .is_some_and(|i| i.is_active() && i.requirement_met());
        if !unlocked {
            return;
        }

        self.is_open = true;
        if let Some(collision) = entity.collision.as_mut() {
            collision.kind = CollisionType::None;
        }
        entity.render = None;
        entity.interaction = None;

        log::info!("door `{}` opened", entity.key);
        if let Some(mut on_open) = self.on_open.take() {
            on_open(&mut *frame.world);
        }
        frame.events.emit(Event::DoorOpened {
            entity: entity.key.clone(),
        });
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Debug for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Door")
            .field("is_open", &self.is_open)
            .field("has_on_open", &self.on_open.is_some())
            .finish()
    }
}
