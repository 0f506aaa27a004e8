//! Event scheduling core for the hopper simulation
//!
//! This crate provides the deferred-execution event queue that gameplay
//! code schedules work onto. Triggers (collision observations, input
//! transitions) schedule a typed event now; the host game loop pumps the
//! queue once per simulation step and the event's effect runs then. At
//! most one instance of a given event kind is pending at a time, so
//! repeated triggers within a step coalesce instead of piling up.

mod error;
mod simulation;

pub use error::{EventError, SimulationError};
pub use simulation::{Simulation, SimulationEvent};
