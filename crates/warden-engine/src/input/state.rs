use std::collections::HashSet;

use super::queue::InputEvent;

/// Snapshot of the keys currently held down.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pressed: HashSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one key transition.
    pub fn apply(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { key } => {
                self.pressed.insert(key.clone());
            }
            InputEvent::KeyUp { key } => {
                self.pressed.remove(key);
            }
        }
    }

    pub fn apply_all(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            self.apply(&event);
        }
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.pressed.contains(key)
    }

    /// True if any of `keys` is held.
    pub fn any_pressed(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.is_pressed(k))
    }

    pub fn press(&mut self, key: impl Into<String>) {
        self.pressed.insert(key.into());
    }

    pub fn release(&mut self, key: &str) {
        self.pressed.remove(key);
    }

    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}
