//! Renderer contract consumed by entities, scenes and the runner.
//!
//! The engine never rasterizes anything itself. Hosts implement [`Renderer`]
//! on top of their canvas/GPU layer, or read back a [`CommandBuffer`]
//! (see `commands.rs`) after each tick.

use glam::Vec2;

use crate::components::render::RenderComponent;

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Normalized RGBA floats (0.0-1.0 each).
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Text size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Which point of a text run or rect the given coordinates refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    Center,
    Left,
    TopLeft,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextOptions {
    pub color: Color,
    pub anchor: Anchor,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            anchor: Anchor::Center,
        }
    }
}

/// Rect draw request in global (pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectOptions {
    pub pos: Vec2,
    /// `None` covers the whole surface.
    pub size: Option<Vec2>,
    pub color: Color,
    pub anchor: Anchor,
}

impl RectOptions {
    /// A rect covering the whole surface, e.g. for overlays.
    pub fn full_screen(color: Color) -> Self {
        Self {
            pos: Vec2::ZERO,
            size: None,
            color,
            anchor: Anchor::TopLeft,
        }
    }
}

/// Drawing surface. Entity positions are in field units; text and rects are in
/// global (pixel) coordinates, see [`crate::tile_to_global`].
pub trait Renderer {
    /// Surface width in pixels.
    fn width(&self) -> f32;

    /// Surface height in pixels.
    fn height(&self) -> f32;

    /// Pixels per field unit.
    fn tile_size(&self) -> f32;

    fn draw_text(&mut self, text: &str, size: TextSize, x: f32, y: f32, options: &TextOptions);

    fn render_rect(&mut self, options: &RectOptions);

    /// Draw an entity-like box centered at `pos` (field units).
    fn draw_entity(&mut self, pos: Vec2, dim: Vec2, descriptor: &RenderComponent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_to_f32() {
        assert_eq!(Color::WHITE.to_f32(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(Color::rgba(0, 0, 0, 0).to_f32(), [0.0; 4]);
    }

    #[test]
    fn full_screen_rect_has_no_size() {
        let rect = RectOptions::full_screen(Color::BLACK);
        assert!(rect.size.is_none());
        assert_eq!(rect.anchor, Anchor::TopLeft);
    }
}
