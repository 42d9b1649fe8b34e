use glam::Vec2;

/// Side of a box, used for wall clamps and entity collision axes.
///
/// `Top` is the low-y edge: the field origin sits in the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Top,
    Down,
}

/// Center-based axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    /// Half-extents (half width, half height).
    pub half: Vec2,
}

impl Aabb {
    /// Build a box from its center and full dimensions.
    pub fn new(center: Vec2, dim: Vec2) -> Self {
        Self {
            center,
            half: dim * 0.5,
        }
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }

    pub fn dim(&self) -> Vec2 {
        self.half * 2.0
    }

    /// Overlap test on half-extents. Touching edges count as overlapping.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let d = (self.center - other.center).abs();
        let reach = self.half + other.half;
        d.x <= reach.x && d.y <= reach.y
    }

    /// Grow the box by `margin` on every side.
    pub fn grow(&self, margin: f32) -> Self {
        Self {
            center: self.center,
            half: self.half + Vec2::splat(margin),
        }
    }

    /// Whether the box lies fully within `[0, bounds.x] x [0, bounds.y]`.
    pub fn is_within(&self, bounds: Vec2) -> bool {
        let min = self.min();
        let max = self.max();
        min.x >= 0.0 && min.y >= 0.0 && max.x <= bounds.x && max.y <= bounds.y
    }
}

/// Convert a tile-space vector into global (pixel) coordinates.
pub fn tile_to_global(tile: Vec2, tile_size: f32) -> Vec2 {
    tile * tile_size
}
