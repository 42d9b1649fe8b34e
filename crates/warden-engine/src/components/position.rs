use glam::Vec2;

use crate::core::geometry::Aabb;

/// Center-based placement of an entity in field units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionComponent {
    /// Center of the entity.
    pub pos: Vec2,
    /// Full width and height.
    pub dim: Vec2,
}

impl PositionComponent {
    /// Panics on negative dimensions: that is a scene authoring bug.
    pub fn new(pos: Vec2, dim: Vec2) -> Self {
        assert!(
            dim.x >= 0.0 && dim.y >= 0.0,
            "entity dimensions must be non-negative, got {dim}"
        );
        Self { pos, dim }
    }

    pub fn half_extents(&self) -> Vec2 {
        self.dim * 0.5
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.dim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_center_based() {
        let p = PositionComponent::new(Vec2::new(4.0, 4.0), Vec2::new(2.0, 1.0));
        assert_eq!(p.half_extents(), Vec2::new(1.0, 0.5));
        assert_eq!(p.bounds().min(), Vec2::new(3.0, 3.5));
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn negative_dimensions_panic() {
        PositionComponent::new(Vec2::ZERO, Vec2::new(-1.0, 1.0));
    }
}
