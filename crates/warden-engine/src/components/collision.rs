/// How an entity reacts to the player overlapping it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CollisionType {
    /// Ignored by collision resolution.
    #[default]
    None,
    /// Blocks: the player is pushed out and a solid-collision event fires.
    Solid,
    /// Event only, no correction (line-of-sight blockers and the like).
    Opaque,
    /// No correction, no event; driven by the interaction component instead.
    Interactable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionComponent {
    pub kind: CollisionType,
}

impl CollisionComponent {
    pub fn new(kind: CollisionType) -> Self {
        Self { kind }
    }
}
