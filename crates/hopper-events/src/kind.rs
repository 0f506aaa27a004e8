use strum_macros::{Display, EnumIter};

/// Discriminant for every gameplay event the simulation knows. The set is
/// closed: registration iterates this enum, and execution matches on it
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum EventKind {
    /// Jump input released while rising; cancels most of the jump.
    PlayerStopJump,
    /// The player left the ground under jump power.
    PlayerJumped,
    /// The player touched down after being airborne.
    PlayerLanded,
    /// The player entered a death zone trigger.
    PlayerEnteredDeathZone,
    /// The player entered a victory zone trigger.
    PlayerEnteredVictoryZone,
    /// The player and a live enemy overlapped.
    PlayerEnemyCollision,
    /// The player touched an uncollected token.
    PlayerTokenCollision,
    /// The player's health reached zero.
    HealthIsZero,
    /// The player dies; starts the respawn countdown.
    PlayerDeath,
    /// The player respawns at the spawn point.
    PlayerSpawn,
    /// Player control is handed back after a respawn.
    PlayerEnableInput,
    /// An enemy was stomped and drops out of the world.
    EnemyDeath,
}
