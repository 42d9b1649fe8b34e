use std::any::Any;

use warden_engine::{Behavior, Entity, Event, Frame, Interactable, Item, Positioned, SceneId};

/// Adds `item` to the world when its interaction goes active, then removes
/// the entity.
pub struct Pickup {
    pub item: Item,
}

impl Behavior for Pickup {
    fn update(&mut self, entity: &mut Entity, frame: &mut Frame<'_>) {
        let taken = entity.interaction().is_some_and(|i| i.is_active());
        if !taken {
            return;
        }
        if frame.world.add_item(self.item) {
            log::debug!("picked up {}", self.item.name);
            frame.events.emit(Event::ItemCollected { item: self.item.key });
        }
        entity.remove();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Requests a scene change while the player stands in it, optionally only
/// once a world flag is set.
pub struct Passage {
    pub to: SceneId,
    pub requires_flag: Option<&'static str>,
}

impl Behavior for Passage {
    fn update(&mut self, entity: &mut Entity, frame: &mut Frame<'_>) {
        let unlocked = self.requires_flag.map_or(true, |f| frame.world.has_flag(f));
        let entered = entity.bounds().is_some_and(|b| b.overlaps(&frame.player));
        if unlocked && entered {
            frame.request_transition(self.to);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Sets the death flag when the player touches it.
pub struct Hazard;

impl Behavior for Hazard {
    fn update(&mut self, entity: &mut Entity, frame: &mut Frame<'_>) {
        if entity.bounds().is_some_and(|b| b.overlaps(&frame.player)) && !frame.world.is_dead {
            log::info!("player hit hazard `{}`", entity.key);
            frame.world.kill();
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
