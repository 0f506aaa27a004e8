use crate::math::Vec2;

/// Two points an enemy walks between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolPath {
    pub start: Vec2,
    pub end: Vec2,
}

impl PatrolPath {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Create a mover that walks this path at `speed` units per second.
    pub fn mover(&self, speed: f32) -> Mover {
        Mover {
            path: *self,
            speed,
            distance: 0.0,
        }
    }
}

/// Ping-pong interpolation along a patrol path. Distance walked wraps over
/// twice the path length, so the enemy turns around at each endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Mover {
    path: PatrolPath,
    speed: f32,
    distance: f32,
}

impl Mover {
    /// Advance by `dt` seconds and return the new position on the path.
    pub fn advance(&mut self, dt: f32) -> Vec2 {
        let span = self.path.end - self.path.start;
        let length = (span.x * span.x + span.y * span.y).sqrt();
        if length <= f32::EPSILON {
            return self.path.start;
        }
        self.distance = (self.distance + self.speed * dt) % (2.0 * length);
        let along = if self.distance <= length {
            self.distance
        } else {
            2.0 * length - self.distance
        };
        self.path.start + span * (along / length)
    }
}
