//! Headless session runner for the hopper simulation
//!
//! Owns the collaborators the event core expects around it: the
//! fixed-timestep game loop that pumps the queue once per step, the scene
//! lifecycle that clears stale events on load and restart, the mapping
//! from trigger observations and input transitions to scheduled events,
//! and the logging/config plumbing.

mod config;
mod logging;
mod script;
mod session;

pub use config::{ConfigError, EnemyConfig, LevelConfig, PatrolConfig, ZoneConfig};
pub use logging::init_logging;
pub use script::{InputScript, KeyAction, ScriptKey, ScriptedAction};
pub use session::{Session, SessionOutcome, TICKS_PER_SECOND, TICK_DT};
