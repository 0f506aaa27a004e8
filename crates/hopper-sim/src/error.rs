use thiserror::Error;

/// Errors surfaced at scheduling time. These indicate wiring bugs and are
/// returned to the caller rather than being absorbed.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// A kind was scheduled that was never registered with the simulation.
    #[error("unknown event kind {0}; kinds must be registered before scheduling")]
    UnknownEventKind(String),
}

/// Error produced by an event's execute behavior. The pump logs these and
/// keeps going; one broken event must not stall the rest of the tick.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct EventError {
    message: String,
}

impl EventError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<SimulationError> for EventError {
    fn from(err: SimulationError) -> Self {
        Self::new(err.to_string())
    }
}
