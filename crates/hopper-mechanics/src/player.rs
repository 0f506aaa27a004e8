use crate::health::Health;
use crate::math::{Aabb, Vec2};

/// Top horizontal speed in units per second.
pub const MAX_SPEED: f32 = 3.0;
/// Vertical take-off speed applied when a jump starts.
pub const JUMP_TAKE_OFF_SPEED: f32 = 7.0;
/// Downward acceleration in units per second squared.
pub const GRAVITY: f32 = 9.81;
/// Factor applied to upward velocity when the jump key is released early.
pub const JUMP_DECELERATION: f32 = 0.5;
/// Upward speed granted when the player flattens an enemy from above.
pub const STOMP_BOUNCE_SPEED: f32 = 2.0;

/// The jump state machine. Jumps only start from `Grounded`, which is
/// what rules out double jumps; `Jumping` and `Landed` exist as
/// single-step transition states so take-off and touchdown are observable
/// exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpState {
    Grounded,
    PrepareToJump,
    Jumping,
    InFlight,
    Landed,
}

/// Kinematic state for the player character.
#[derive(Debug, Clone)]
pub struct PlayerController {
    pub position: Vec2,
    pub velocity: Vec2,
    pub half_extents: Vec2,
    pub jump_state: JumpState,
    /// Cleared on death and victory; while false the player ignores
    /// movement and jump input.
    pub control_enabled: bool,
    pub health: Health,
    pub(crate) grounded: bool,
}

impl PlayerController {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            half_extents: Vec2::new(0.35, 0.5),
            jump_state: JumpState::Grounded,
            control_enabled: true,
            health: Health::new(1),
            grounded: true,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.position, self.half_extents)
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Begin a jump if the player is standing on ground. Called on the
    /// jump key's press edge; a press while airborne does nothing.
    pub fn request_jump(&mut self) {
        if self.control_enabled && self.jump_state == JumpState::Grounded {
            self.jump_state = JumpState::PrepareToJump;
        }
    }

    /// The effect of the stop-jump event: bleed off most of the remaining
    /// upward velocity so releasing the key early shortens the jump.
    pub fn stop_jump(&mut self) {
        if self.velocity.y > 0.0 {
            self.velocity.y *= JUMP_DECELERATION;
        }
    }

    /// Kick the player upward, used after stomping an enemy.
    pub fn bounce(&mut self, speed: f32) {
        self.velocity.y = speed;
        self.grounded = false;
    }

    /// Move instantly to `position` and reset motion state, used on spawn.
    pub fn teleport(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::ZERO;
        self.jump_state = JumpState::Grounded;
        self.grounded = true;
    }
}
