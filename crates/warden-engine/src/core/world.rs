use std::collections::BTreeSet;
use std::fmt;

/// Identifies an item kind. Content defines these as constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(pub &'static str);

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// An item definition: key plus display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub key: ItemKey,
    pub name: &'static str,
}

/// Cross-scene facts for one session: inventory, death flag, progression flags.
///
/// Owned by the [`GameState`](crate::GameState) and handed to entities per call;
/// nothing keeps its own reference to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldState {
    /// Collected items in pickup order. Keys are unique.
    items: Vec<Item>,
    pub is_dead: bool,
    flags: BTreeSet<String>,
}

impl WorldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item. Returns false if an item with the same key is already held.
    pub fn add_item(&mut self, item: Item) -> bool {
        if self.has_item(item.key) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn remove_item(&mut self, key: ItemKey) -> Option<Item> {
        let idx = self.items.iter().position(|i| i.key == key)?;
        Some(self.items.remove(idx))
    }

    pub fn has_item(&self, key: ItemKey) -> bool {
        self.items.iter().any(|i| i.key == key)
    }

    /// Held items in pickup order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn set_flag(&mut self, flag: impl Into<String>) {
        self.flags.insert(flag.into());
    }

    pub fn clear_flag(&mut self, flag: &str) -> bool {
        self.flags.remove(flag)
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    /// Set the death flag.
    pub fn kill(&mut self) {
        if !self.is_dead {
            log::info!("world: death flag set");
        }
        self.is_dead = true;
    }
}
