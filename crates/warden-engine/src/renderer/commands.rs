use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::traits::{Anchor, Color, RectOptions, Renderer, TextOptions, TextSize};
use crate::components::render::{ImageKey, RenderComponent};
use crate::core::geometry::tile_to_global;

/// Per-rect render data in global coordinates, top-left anchored.
/// 8 floats = 32 bytes stride, readable by the host as a flat float buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RectInstance {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl RectInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    fn new(top_left: Vec2, size: Vec2, color: Color) -> Self {
        let [r, g, b, a] = color.to_f32();
        Self {
            x: top_left.x,
            y: top_left.y,
            w: size.x,
            h: size.y,
            r,
            g,
            b,
            a,
        }
    }
}

/// One recorded draw call, in submission order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Text {
        text: String,
        size: TextSize,
        pos: Vec2,
        options: TextOptions,
    },
    /// Index into [`CommandBuffer::instances`].
    Rect { instance: usize },
    /// Index into [`CommandBuffer::instances`]; `image` is set for image entities.
    Entity {
        instance: usize,
        image: Option<ImageKey>,
    },
}

/// Recording renderer. Collects a frame's draw calls for the host to replay.
pub struct CommandBuffer {
    width: f32,
    height: f32,
    tile_size: f32,
    commands: Vec<DrawCommand>,
    instances: Vec<RectInstance>,
}

impl CommandBuffer {
    pub fn new(width: f32, height: f32, tile_size: f32) -> Self {
        Self {
            width,
            height,
            tile_size,
            commands: Vec::with_capacity(256),
            instances: Vec::with_capacity(256),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.instances.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn instances(&self) -> &[RectInstance] {
        &self.instances
    }

    /// All rect instances as one flat float slice.
    pub fn instance_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Texts drawn this frame, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Number of entity draws recorded.
    pub fn entity_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Entity { .. }))
            .count()
    }

    fn push_instance(&mut self, instance: RectInstance) -> usize {
        self.instances.push(instance);
        self.instances.len() - 1
    }
}

impl Renderer for CommandBuffer {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn tile_size(&self) -> f32 {
        self.tile_size
    }

    fn draw_text(&mut self, text: &str, size: TextSize, x: f32, y: f32, options: &TextOptions) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            size,
            pos: Vec2::new(x, y),
            options: *options,
        });
    }

    fn render_rect(&mut self, options: &RectOptions) {
        let size = options
            .size
            .unwrap_or_else(|| Vec2::new(self.width, self.height));
        let top_left = match options.anchor {
            Anchor::TopLeft => options.pos,
            Anchor::Center => options.pos - size * 0.5,
            Anchor::Left => options.pos - Vec2::new(0.0, size.y * 0.5),
        };
        let instance = self.push_instance(RectInstance::new(top_left, size, options.color));
        self.commands.push(DrawCommand::Rect { instance });
    }

    fn draw_entity(&mut self, pos: Vec2, dim: Vec2, descriptor: &RenderComponent) {
        let size = tile_to_global(dim, self.tile_size);
        let top_left = tile_to_global(pos, self.tile_size) - size * 0.5;
        let (color, image) = match descriptor {
            RenderComponent::Rect { color } => (*color, None),
            RenderComponent::Image { image } => (Color::WHITE, Some(*image)),
        };
        let instance = self.push_instance(RectInstance::new(top_left, size, color));
        self.commands.push(DrawCommand::Entity { instance, image });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<RectInstance>(), RectInstance::STRIDE_BYTES);
    }

    #[test]
    fn draw_entity_converts_to_pixels() {
        let mut buf = CommandBuffer::new(160.0, 120.0, 16.0);
        buf.draw_entity(
            Vec2::new(2.0, 3.0),
            Vec2::new(1.0, 2.0),
            &RenderComponent::Rect { color: Color::RED },
        );
        let inst = buf.instances()[0];
        assert_eq!((inst.x, inst.y, inst.w, inst.h), (24.0, 32.0, 16.0, 32.0));
        assert_eq!(inst.r, 1.0);
        assert_eq!(buf.entity_count(), 1);
        assert_eq!(buf.instance_floats().len(), RectInstance::FLOATS);
    }

    #[test]
    fn full_screen_rect_covers_surface() {
        let mut buf = CommandBuffer::new(160.0, 120.0, 16.0);
        buf.render_rect(&RectOptions::full_screen(Color::rgba(0, 0, 0, 0xaa)));
        let inst = buf.instances()[0];
        assert_eq!((inst.x, inst.y, inst.w, inst.h), (0.0, 0.0, 160.0, 120.0));
    }

    #[test]
    fn texts_are_recorded_in_order() {
        let mut buf = CommandBuffer::new(160.0, 120.0, 16.0);
        buf.draw_text("one", TextSize::Small, 0.0, 0.0, &TextOptions::default());
        buf.draw_text("two", TextSize::Large, 0.0, 0.0, &TextOptions::default());
        assert_eq!(buf.texts().collect::<Vec<_>>(), vec!["one", "two"]);
        buf.clear();
        assert_eq!(buf.texts().count(), 0);
    }
}
