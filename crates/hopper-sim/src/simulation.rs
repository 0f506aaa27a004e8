use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;

use tracing::{debug, error};

use crate::error::{EventError, SimulationError};

/// Behavior required of the event type a [`Simulation`] drives.
///
/// Implementors are expected to be a closed set of tagged variants: one
/// variant per kind, each carrying its own payload, with execution
/// dispatched by matching on the variant.
pub trait SimulationEvent: Sized {
    /// Discriminant identifying each event kind. Used for the
    /// at-most-one-pending-per-kind invariant and for registration.
    type Kind: Copy + Eq + Hash + fmt::Debug;

    /// Mutable world state handed to events as they execute.
    type Ctx;

    /// The kind this instance belongs to.
    fn kind(&self) -> Self::Kind;

    /// Run the event's effect. Follow-up events scheduled through `sim`
    /// run within the same tick. The instance is consumed; an executed
    /// event is never re-queued.
    fn execute(self, ctx: &mut Self::Ctx, sim: &mut Simulation<Self>) -> Result<(), EventError>;
}

/// Deferred, deduplicated, ordered execution of typed events.
///
/// The simulation owns a FIFO queue of pending kinds and a lookup from
/// kind to its single pending instance. Collaborators only interact
/// through [`schedule`](Simulation::schedule); the host game loop calls
/// [`tick`](Simulation::tick) once per step and
/// [`clear`](Simulation::clear) when a new session begins.
pub struct Simulation<E: SimulationEvent> {
    queue: VecDeque<E::Kind>,
    pending: HashMap<E::Kind, E>,
    factories: HashMap<E::Kind, Box<dyn Fn() -> E>>,
}

impl<E: SimulationEvent> Default for Simulation<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: SimulationEvent> Simulation<E> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            pending: HashMap::new(),
            factories: HashMap::new(),
        }
    }

    /// Register a kind and the factory that produces a fresh instance of
    /// it. Scheduling an unregistered kind is an error, so every kind must
    /// be registered up front when the session is wired together.
    pub fn register<F>(&mut self, kind: E::Kind, factory: F)
    where
        F: Fn() -> E + 'static,
    {
        self.factories.insert(kind, Box::new(factory));
    }

    pub fn is_registered(&self, kind: E::Kind) -> bool {
        self.factories.contains_key(&kind)
    }

    /// Schedule an event of `kind` for the next pump.
    ///
    /// If no instance of `kind` is pending, a fresh instance is appended
    /// to the back of the queue. If one is already pending, that instance
    /// is returned instead; callers overwrite its payload fields, so the
    /// last writer before the pump runs wins.
    pub fn schedule(&mut self, kind: E::Kind) -> Result<&mut E, SimulationError> {
        let factory = self
            .factories
            .get(&kind)
            .ok_or_else(|| SimulationError::UnknownEventKind(format!("{kind:?}")))?;
        match self.pending.entry(kind) {
            Entry::Occupied(entry) => {
                debug!(?kind, "coalescing into pending event");
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                self.queue.push_back(kind);
                Ok(entry.insert(factory()))
            }
        }
    }

    /// Pump the queue: remove and execute events from the front until the
    /// queue is empty, re-checking after each execution so events
    /// scheduled during execution run within the same tick.
    ///
    /// Each event is removed from the pending lookup before it executes,
    /// so a same-kind schedule during this tick starts a fresh instance.
    /// Execution errors are logged and do not stop the pump. Returns the
    /// number of events executed.
    pub fn tick(&mut self, ctx: &mut E::Ctx) -> usize {
        let mut executed = 0;
        while let Some(kind) = self.queue.pop_front() {
            let Some(event) = self.pending.remove(&kind) else {
                // queue and lookup move in lockstep; a queued kind with no
                // pending instance is a bug in this module
                error!(?kind, "queued event kind has no pending instance");
                continue;
            };
            debug!(?kind, "executing event");
            if let Err(err) = event.execute(ctx, self) {
                error!(?kind, %err, "event execution failed");
            }
            executed += 1;
        }
        executed
    }

    /// Drop every pending event and its queue entry. Called when a new
    /// level or scene session begins so stale events cannot leak in.
    /// Registrations are kept; they describe wiring, not session state.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.pending.clear();
    }

    pub fn is_pending(&self, kind: E::Kind) -> bool {
        self.pending.contains_key(&kind)
    }

    pub fn pending_len(&self) -> usize {
        self.queue.len()
    }
}
