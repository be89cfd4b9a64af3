//! The disc entity shared by the player, AI and food

use std::fmt;

use glam::IVec2;

use crate::renderer::color::{BLACK, Color};

/// Which collection an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Ai,
    Food,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Player => "player",
            EntityKind::Ai => "ai",
            EntityKind::Food => "food",
        })
    }
}

/// A disc. `radius` is both its collision footprint and its size/mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    /// False once eaten; AI and food respawn on the next tick
    pub alive: bool,
    pub color: Color,
    pub radius: i32,
    /// Center in surface coordinates
    pub pos: IVec2,
    /// Player only
    pub score: i32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            alive: true,
            color: BLACK,
            radius: 1,
            pos: IVec2::ZERO,
            score: 0,
        }
    }
}

impl Ball {
    pub fn new(pos: IVec2, radius: i32, color: Color) -> Self {
        Self {
            pos,
            radius,
            color,
            ..Self::default()
        }
    }

    /// Distance between centers
    #[inline]
    pub fn distance_to(&self, other: &Ball) -> f32 {
        crate::distance(self.pos, other.pos)
    }

    /// Axis-aligned bounding boxes `[pos - radius, pos + radius]` intersect
    /// (strictly) on both axes.
    pub fn bounds_overlap(&self, other: &Ball) -> bool {
        let reach = self.radius + other.radius;
        (self.pos.x - other.pos.x).abs() < reach && (self.pos.y - other.pos.y).abs() < reach
    }

    /// Absorb `amount` of radius
    #[inline]
    pub fn grow(&mut self, amount: i32) {
        self.radius += amount.max(0);
    }
}
