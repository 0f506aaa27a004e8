//! Gameplay event kinds for the hopper simulation
//!
//! The closed set of deferred gameplay events: what can be scheduled,
//! which payload each kind carries, and what happens when the pump
//! executes it. Triggers live elsewhere (the runner observes collisions
//! and input transitions); this crate owns only the effects and the
//! cascade chains between them, e.g. touching an enemy head-on drains
//! health, which raises the health-is-zero event, which raises the
//! player-death event, all within the same tick.

mod event;
mod kind;

pub use event::{register_all, GameEvent};
pub use kind::EventKind;
