//! Session-scoped observer channel.
//!
//! The bus is built together with the [`GameState`](crate::GameState) and
//! dropped on restart, so subscriptions never outlive the session they were
//! registered in. Dispatch is synchronous: every subscriber sees the event
//! before `emit` returns.

use crate::api::types::{EntityKey, SceneId};
use crate::core::geometry::Direction;
use crate::core::world::ItemKey;

/// Events broadcast by managers and entities during a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The player was clamped back into the play field.
    WallCollision { direction: Direction },
    /// The player hit a solid entity and was pushed out along `directions`.
    SolidCollision {
        entity: EntityKey,
        directions: Vec<Direction>,
    },
    /// The player overlaps an opaque entity. No correction is applied.
    OpaqueCollision { entity: EntityKey },
    /// The active scene changed.
    SceneChanged { from: SceneId, to: SceneId },
    /// An item was added to the world state.
    ItemCollected { item: ItemKey },
    /// A door latched open.
    DoorOpened { entity: EntityKey },
    /// The death flag was observed for the first time this session.
    PlayerDied,
    /// A fresh session was started after a death.
    Restarted,
}

impl Event {
    /// Stable tag name, e.g. for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::WallCollision { .. } => "wall-collision",
            Self::SolidCollision { .. } => "solid-collision",
            Self::OpaqueCollision { .. } => "opaque-collision",
            Self::SceneChanged { .. } => "scene-changed",
            Self::ItemCollected { .. } => "item-collected",
            Self::DoorOpened { .. } => "door-opened",
            Self::PlayerDied => "player-died",
            Self::Restarted => "restarted",
        }
    }
}

/// Anything that accepts emitted events.
///
/// Managers take `&mut impl EventSink` (or `&mut dyn EventSink`) so tests can
/// hand them a plain `Vec<Event>` instead of a full bus.
pub trait EventSink {
    fn emit(&mut self, event: Event);
}

impl EventSink for Vec<Event> {
    fn emit(&mut self, event: Event) {
        self.push(event);
    }
}

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

type Handler = Box<dyn FnMut(&Event)>;

/// Publish/subscribe dispatcher with a per-frame event log.
pub struct EventBus {
    subscribers: Vec<(SubscriptionId, Handler)>,
    frame_events: Vec<Event>,
    next_id: u32,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            frame_events: Vec::with_capacity(32),
            next_id: 1,
        }
    }

    /// Register a handler. Handlers run in subscription order.
    pub fn subscribe(&mut self, handler: impl FnMut(&Event) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(handler)));
        id
    }

    /// Remove a handler. Returns false if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Events emitted since the last `clear_frame_data`.
    pub fn frame_events(&self) -> &[Event] {
        &self.frame_events
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.frame_events.clear();
    }
}

impl EventSink for EventBus {
    fn emit(&mut self, event: Event) {
        log::trace!("event: {:?}", event);
        for (_, handler) in self.subscribers.iter_mut() {
            handler(&event);
        }
        self.frame_events.push(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn subscribers_receive_events_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();

        let a = Rc::clone(&seen);
        bus.subscribe(move |e| a.borrow_mut().push(("a", e.name())));
        let b = Rc::clone(&seen);
        bus.subscribe(move |e| b.borrow_mut().push(("b", e.name())));

        bus.emit(Event::WallCollision { direction: Direction::Left });

        assert_eq!(
            *seen.borrow(),
            vec![("a", "wall-collision"), ("b", "wall-collision")]
        );
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut bus = EventBus::new();
        let c = Rc::clone(&count);
        let id = bus.subscribe(move |_| *c.borrow_mut() += 1);

        bus.emit(Event::PlayerDied);
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.emit(Event::PlayerDied);

        assert_eq!(*count.borrow(), 1);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn frame_log_is_cleared() {
        let mut bus = EventBus::new();
        bus.emit(Event::OpaqueCollision { entity: EntityKey::from("shadow") });
        assert_eq!(bus.frame_events().len(), 1);
        bus.clear_frame_data();
        assert!(bus.frame_events().is_empty());
    }

    #[test]
    fn vec_is_a_sink() {
        let mut sink: Vec<Event> = Vec::new();
        sink.emit(Event::Restarted);
        assert_eq!(sink, vec![Event::Restarted]);
    }
}
