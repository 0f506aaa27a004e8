use crate::math::Aabb;

/// Index of a death zone within its scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeathZoneId(pub usize);

/// Index of a victory zone within its scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VictoryZoneId(pub usize);

/// A region that kills the player on entry, typically spanning the void
/// below the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeathZone {
    pub bounds: Aabb,
}

/// A region that ends the level in victory when the player enters it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VictoryZone {
    pub bounds: Aabb,
}
