use crate::scene::Scene;

/// Ticks between the player's death and the respawn event, two seconds at
/// the 60 Hz step rate.
pub const DEFAULT_RESPAWN_DELAY_TICKS: u32 = 120;

/// Where the session currently is in its life cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    /// The player died; counting down to the respawn event.
    Respawning { ticks_remaining: u32 },
    /// The level was completed. Terminal for the session.
    Victory,
}

/// The mutable state gameplay events execute against: the loaded scene
/// plus the session phase.
#[derive(Debug, Clone)]
pub struct World {
    pub scene: Scene,
    pub phase: GamePhase,
    pub respawn_delay_ticks: u32,
}

impl World {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            phase: GamePhase::Playing,
            respawn_delay_ticks: DEFAULT_RESPAWN_DELAY_TICKS,
        }
    }

    pub fn with_respawn_delay(mut self, ticks: u32) -> Self {
        self.respawn_delay_ticks = ticks;
        self
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}
