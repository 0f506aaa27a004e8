use hopper_mechanics::{
    DeathZoneId, EnemyId, GamePhase, TokenId, VictoryZoneId, World, STOMP_BOUNCE_SPEED,
};
use hopper_sim::{EventError, Simulation, SimulationEvent};
use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::kind::EventKind;

/// One variant per [`EventKind`], carrying that kind's payload. Payloads
/// start empty when an instance is created by `schedule`; the scheduling
/// site fills them in before the pump runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    PlayerStopJump,
    PlayerJumped,
    PlayerLanded,
    PlayerEnteredDeathZone { zone: Option<DeathZoneId> },
    PlayerEnteredVictoryZone { zone: Option<VictoryZoneId> },
    PlayerEnemyCollision { enemy: Option<EnemyId> },
    PlayerTokenCollision { token: Option<TokenId> },
    HealthIsZero,
    PlayerDeath,
    PlayerSpawn,
    PlayerEnableInput,
    EnemyDeath { enemy: Option<EnemyId> },
}

impl GameEvent {
    /// A fresh instance of `kind` with an unset payload.
    fn fresh(kind: EventKind) -> Self {
        match kind {
            EventKind::PlayerStopJump => GameEvent::PlayerStopJump,
            EventKind::PlayerJumped => GameEvent::PlayerJumped,
            EventKind::PlayerLanded => GameEvent::PlayerLanded,
            EventKind::PlayerEnteredDeathZone => GameEvent::PlayerEnteredDeathZone { zone: None },
            EventKind::PlayerEnteredVictoryZone => {
                GameEvent::PlayerEnteredVictoryZone { zone: None }
            }
            EventKind::PlayerEnemyCollision => GameEvent::PlayerEnemyCollision { enemy: None },
            EventKind::PlayerTokenCollision => GameEvent::PlayerTokenCollision { token: None },
            EventKind::HealthIsZero => GameEvent::HealthIsZero,
            EventKind::PlayerDeath => GameEvent::PlayerDeath,
            EventKind::PlayerSpawn => GameEvent::PlayerSpawn,
            EventKind::PlayerEnableInput => GameEvent::PlayerEnableInput,
            EventKind::EnemyDeath => GameEvent::EnemyDeath { enemy: None },
        }
    }
}

/// Register every gameplay kind with the simulation. Sessions call this
/// once when they are wired together; scheduling before registration is
/// an `UnknownEventKind` error.
pub fn register_all(sim: &mut Simulation<GameEvent>) {
    for kind in EventKind::iter() {
        sim.register(kind, move || GameEvent::fresh(kind));
    }
}

impl SimulationEvent for GameEvent {
    type Kind = EventKind;
    type Ctx = World;

    fn kind(&self) -> EventKind {
        match self {
            GameEvent::PlayerStopJump => EventKind::PlayerStopJump,
            GameEvent::PlayerJumped => EventKind::PlayerJumped,
            GameEvent::PlayerLanded => EventKind::PlayerLanded,
            GameEvent::PlayerEnteredDeathZone { .. } => EventKind::PlayerEnteredDeathZone,
            GameEvent::PlayerEnteredVictoryZone { .. } => EventKind::PlayerEnteredVictoryZone,
            GameEvent::PlayerEnemyCollision { .. } => EventKind::PlayerEnemyCollision,
            GameEvent::PlayerTokenCollision { .. } => EventKind::PlayerTokenCollision,
            GameEvent::HealthIsZero => EventKind::HealthIsZero,
            GameEvent::PlayerDeath => EventKind::PlayerDeath,
            GameEvent::PlayerSpawn => EventKind::PlayerSpawn,
            GameEvent::PlayerEnableInput => EventKind::PlayerEnableInput,
            GameEvent::EnemyDeath { .. } => EventKind::EnemyDeath,
        }
    }

    fn execute(self, world: &mut World, sim: &mut Simulation<Self>) -> Result<(), EventError> {
        match self {
            GameEvent::PlayerStopJump => {
                world.scene.player.stop_jump();
            }
            GameEvent::PlayerJumped => {
                // audio hook in the original; nothing to mutate headless
                debug!("player took off");
            }
            GameEvent::PlayerLanded => {
                debug!("player landed");
            }
            GameEvent::PlayerEnteredDeathZone { zone } => {
                let zone = zone
                    .ok_or_else(|| EventError::new("death zone event scheduled without a zone"))?;
                if world.is_playing() {
                    debug!(zone = zone.0, "player entered death zone");
                    sim.schedule(EventKind::PlayerDeath)?;
                }
            }
            GameEvent::PlayerEnteredVictoryZone { zone } => {
                let zone = zone.ok_or_else(|| {
                    EventError::new("victory zone event scheduled without a zone")
                })?;
                if world.is_playing() {
                    info!(zone = zone.0, "player reached the victory zone");
                    world.phase = GamePhase::Victory;
                    world.scene.player.control_enabled = false;
                }
            }
            GameEvent::PlayerEnemyCollision { enemy } => {
                let enemy_id = enemy.ok_or_else(|| {
                    EventError::new("enemy collision event scheduled without an enemy")
                })?;
                let enemy_bounds = world
                    .scene
                    .enemy(enemy_id)
                    .filter(|enemy| enemy.alive)
                    .map(|enemy| enemy.bounds());
                // the enemy may have died earlier in this tick
                let Some(enemy_bounds) = enemy_bounds else {
                    return Ok(());
                };
                let stomped = world.scene.player.bounds().center.y >= enemy_bounds.max().y;
                if stomped {
                    if let GameEvent::EnemyDeath { enemy } =
                        sim.schedule(EventKind::EnemyDeath)?
                    {
                        *enemy = Some(enemy_id);
                    }
                    world.scene.player.bounce(STOMP_BOUNCE_SPEED);
                } else if world.scene.player.health.decrement() {
                    sim.schedule(EventKind::HealthIsZero)?;
                }
            }
            GameEvent::PlayerTokenCollision { token } => {
                let token_id = token.ok_or_else(|| {
                    EventError::new("token collision event scheduled without a token")
                })?;
                let token = world
                    .scene
                    .token_mut(token_id)
                    .ok_or_else(|| EventError::new(format!("no token with id {}", token_id.0)))?;
                if !token.collected {
                    token.collected = true;
                    world.scene.tokens_collected += 1;
                    debug!(token = token_id.0, "token collected");
                }
            }
            GameEvent::HealthIsZero => {
                sim.schedule(EventKind::PlayerDeath)?;
            }
            GameEvent::PlayerDeath => {
                if world.is_playing() {
                    info!("player died");
                    let player = &mut world.scene.player;
                    player.health.die();
                    player.control_enabled = false;
                    world.phase = GamePhase::Respawning {
                        ticks_remaining: world.respawn_delay_ticks,
                    };
                }
            }
            GameEvent::PlayerSpawn => {
                let spawn_point = world.scene.spawn_point;
                let player = &mut world.scene.player;
                player.teleport(spawn_point);
                player.health.reset();
                world.phase = GamePhase::Playing;
                debug!("player respawned");
                sim.schedule(EventKind::PlayerEnableInput)?;
            }
            GameEvent::PlayerEnableInput => {
                world.scene.player.control_enabled = true;
            }
            GameEvent::EnemyDeath { enemy } => {
                let enemy_id = enemy
                    .ok_or_else(|| EventError::new("enemy death event scheduled without an enemy"))?;
                let enemy = world
                    .scene
                    .enemy_mut(enemy_id)
                    .ok_or_else(|| EventError::new(format!("no enemy with id {}", enemy_id.0)))?;
                enemy.alive = false;
                debug!(enemy = enemy_id.0, "enemy stomped");
            }
        }
        Ok(())
    }
}
