use crate::math::{Aabb, Vec2};

/// Index of a token within its scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId(pub usize);

/// A collectible token. Collection disables it; it no longer triggers.
#[derive(Debug, Clone)]
pub struct TokenInstance {
    pub position: Vec2,
    pub half_extents: Vec2,
    pub collected: bool,
}

impl TokenInstance {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            half_extents: Vec2::new(0.25, 0.25),
            collected: false,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.position, self.half_extents)
    }
}
