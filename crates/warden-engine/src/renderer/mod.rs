pub mod traits;
pub mod commands;

// Re-export key types for convenient access
pub use traits::{Anchor, Color, RectOptions, Renderer, TextOptions, TextSize};
pub use commands::{CommandBuffer, DrawCommand, RectInstance};
