//! Axis-aligned collision resolution between the player, the field walls and
//! scene entities.
//!
//! Both passes are deterministic: walls are checked in a fixed
//! left/right/top/bottom order with at most one clamp per call, and entities are
//! resolved one at a time in candidate-list order with no reconciliation pass.

use glam::Vec2;

use crate::api::game::GameConfig;
use crate::components::collision::CollisionType;
use crate::components::entity::Collidable;
use crate::core::events::{Event, EventSink};
use crate::core::geometry::{Aabb, Direction};
use crate::core::player::Player;
use crate::core::scene::Scene;

/// Gap left between the player and a solid after correction.
pub const SEPARATION: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionManager {
    /// Field width and height in field units.
    bounds: Vec2,
}

impl CollisionManager {
    pub fn new(width: f32, height: f32) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "field bounds must be positive, got {width}x{height}"
        );
        Self {
            bounds: Vec2::new(width, height),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.width, config.height)
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Full per-tick pass: entities of the active scene, then walls.
    pub fn handle<S: EventSink + ?Sized>(&self, player: &mut Player, scene: &Scene, events: &mut S) {
        self.resolve_entity_collisions(player, scene.iter(), events);
        self.resolve_wall_collisions(player, events);
    }

    /// Clamp the player into the field on at most one axis.
    ///
    /// Checks left, right, top, bottom and stops at the first violation, so a
    /// corner violation takes two calls to fully resolve.
    pub fn resolve_wall_collisions<S: EventSink + ?Sized>(
        &self,
        player: &mut Player,
        events: &mut S,
    ) -> Option<Direction> {
        let half = player.half_extents();

        let direction = if player.pos.x - half.x < 0.0 {
            player.pos.x = half.x;
            Direction::Left
        } else if player.pos.x + half.x > self.bounds.x {
            player.pos.x = self.bounds.x - half.x;
            Direction::Right
        } else if player.pos.y - half.y < 0.0 {
            player.pos.y = half.y;
            Direction::Top
        } else if player.pos.y + half.y > self.bounds.y {
            player.pos.y = self.bounds.y - half.y;
            Direction::Down
        } else {
            return None;
        };

        log::debug!("wall collision {:?}, player clamped to {:?}", direction, player.pos);
        events.emit(Event::WallCollision { direction });
        Some(direction)
    }

    /// Resolve the player against each candidate in order.
    ///
    /// An axis is flagged only when the penetration on it is within one tick
    /// of movement (`||d| - reach| < velocity`). Solids snap the player
    /// `SEPARATION` units outside the entity on every flagged axis; opaques
    /// only report; interactables and `None` are left alone.
    pub fn resolve_entity_collisions<'a, I, E, S>(&self, player: &mut Player, entities: I, events: &mut S)
    where
        I: IntoIterator<Item = &'a E>,
        E: Collidable + 'a,
        S: EventSink + ?Sized,
    {
        for entity in entities {
            let kind = entity.collision_type();
            if kind == CollisionType::None {
                continue;
            }
            let Some(bounds) = entity.bounds() else {
                panic!("entity `{}` has a collision component but no position", entity.key());
            };
            if !player.aabb().overlaps(&bounds) {
                continue;
            }

            match kind {
                CollisionType::Solid => {
                    let directions = Self::push_out(player, &bounds);
                    log::debug!(
                        "solid collision with `{}` on {:?}, player at {:?}",
                        entity.key(),
                        directions,
                        player.pos
                    );
                    events.emit(Event::SolidCollision {
                        entity: entity.key().clone(),
                        directions,
                    });
                }
                CollisionType::Opaque => {
                    log::debug!("opaque collision with `{}`", entity.key());
                    events.emit(Event::OpaqueCollision {
                        entity: entity.key().clone(),
                    });
                }
                CollisionType::Interactable => {}
                CollisionType::None => unreachable!("`None` entities are skipped above"),
            }
        }
    }

    /// Snap the player out of `bounds` along every flagged axis.
    fn push_out(player: &mut Player, bounds: &Aabb) -> Vec<Direction> {
        let mut directions = Vec::with_capacity(2);
        let half = player.half_extents();

        let dx = player.pos.x - bounds.center.x;
        let dw = half.x + bounds.half.x;
        if (dx.abs() - dw).abs() < player.velocity {
            let direction = if dx > 0.0 { Direction::Left } else { Direction::Right };
            directions.push(direction);
            let sign = if direction == Direction::Left { 1.0 } else { -1.0 };
            player.pos.x = bounds.center.x + sign * (dw + SEPARATION);
        }

        let dy = player.pos.y - bounds.center.y;
        let dh = half.y + bounds.half.y;
        if (dy.abs() - dh).abs() < player.velocity {
            let direction = if dy > 0.0 { Direction::Top } else { Direction::Down };
            directions.push(direction);
            let sign = if direction == Direction::Top { 1.0 } else { -1.0 };
            player.pos.y = bounds.center.y + sign * (dh + SEPARATION);
        }

        directions
    }
}
