//! World model for the hopper simulation
//!
//! Everything the event system acts on lives here: the player controller
//! and its jump state machine, patrolling enemies, collectible tokens,
//! death and victory zones, and the scene container that integrates one
//! fixed timestep and reports trigger observations. This crate knows
//! nothing about event scheduling; the runner turns observations into
//! scheduled events.

mod enemy;
mod health;
mod input;
mod math;
mod patrol;
mod player;
mod scene;
mod token;
mod world;
mod zones;

pub use enemy::{EnemyController, EnemyId};
pub use health::Health;
pub use input::{InputState, InputTransition, KeyCode, KeyEventKind, KeyboardEvent};
pub use math::{Aabb, Vec2};
pub use patrol::{Mover, PatrolPath};
pub use player::{
    JumpState, PlayerController, GRAVITY, JUMP_DECELERATION, JUMP_TAKE_OFF_SPEED, MAX_SPEED,
    STOMP_BOUNCE_SPEED,
};
pub use scene::{Observation, Scene};
pub use token::{TokenId, TokenInstance};
pub use world::{GamePhase, World, DEFAULT_RESPAWN_DELAY_TICKS};
pub use zones::{DeathZone, DeathZoneId, VictoryZone, VictoryZoneId};
