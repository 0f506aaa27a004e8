use crate::math::{Aabb, Vec2};
use crate::patrol::Mover;

/// Index of an enemy within its scene. Stable for the lifetime of a
/// session; enemies are never removed, only marked dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnemyId(pub usize);

/// A patrolling enemy. While alive it walks its path (or stands still
/// without one) and hurts the player on contact unless stomped. Once dead
/// its collider is gone and gravity takes it out of the world.
#[derive(Debug, Clone)]
pub struct EnemyController {
    pub position: Vec2,
    pub half_extents: Vec2,
    pub mover: Option<Mover>,
    pub velocity: Vec2,
    pub alive: bool,
}

impl EnemyController {
    pub fn new(position: Vec2, mover: Option<Mover>) -> Self {
        Self {
            position,
            half_extents: Vec2::new(0.35, 0.5),
            mover,
            velocity: Vec2::ZERO,
            alive: true,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.position, self.half_extents)
    }
}
