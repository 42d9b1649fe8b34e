use crate::renderer::traits::Color;

/// Names an image in the host's asset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageKey(pub &'static str);

/// How an entity appears on screen.
/// Entities without one are invisible but may still collide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderComponent {
    /// Flat colored box covering the entity bounds.
    Rect { color: Color },
    /// Host image stretched over the entity bounds.
    Image { image: ImageKey },
}
