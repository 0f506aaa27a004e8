use crate::enemy::{EnemyController, EnemyId};
use crate::math::{Aabb, Vec2};
use crate::player::{JumpState, PlayerController, GRAVITY, JUMP_TAKE_OFF_SPEED, MAX_SPEED};
use crate::token::{TokenId, TokenInstance};
use crate::zones::{DeathZone, DeathZoneId, VictoryZone, VictoryZoneId};

/// A trigger condition observed during one physics step. The runner turns
/// these into scheduled events; the scene itself never touches the event
/// queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    PlayerJumped,
    PlayerLanded,
    EnteredDeathZone(DeathZoneId),
    EnteredVictoryZone(VictoryZoneId),
    TouchedEnemy(EnemyId),
    TouchedToken(TokenId),
}

/// One loaded level: the player, the level geometry, and every entity
/// that can trigger an event.
#[derive(Debug, Clone)]
pub struct Scene {
    pub player: PlayerController,
    pub spawn_point: Vec2,
    pub platforms: Vec<Aabb>,
    pub enemies: Vec<EnemyController>,
    pub tokens: Vec<TokenInstance>,
    pub death_zones: Vec<DeathZone>,
    pub victory_zones: Vec<VictoryZone>,
    pub tokens_collected: u32,
}

impl Scene {
    pub fn new(spawn_point: Vec2) -> Self {
        Self {
            player: PlayerController::new(spawn_point),
            spawn_point,
            platforms: Vec::new(),
            enemies: Vec::new(),
            tokens: Vec::new(),
            death_zones: Vec::new(),
            victory_zones: Vec::new(),
            tokens_collected: 0,
        }
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&EnemyController> {
        self.enemies.get(id.0)
    }

    pub fn enemy_mut(&mut self, id: EnemyId) -> Option<&mut EnemyController> {
        self.enemies.get_mut(id.0)
    }

    pub fn token_mut(&mut self, id: TokenId) -> Option<&mut TokenInstance> {
        self.tokens.get_mut(id.0)
    }

    /// Integrate one fixed timestep and report every trigger condition
    /// observed. `move_x` is the sampled horizontal input in -1..=1;
    /// callers pass 0 when player control is disabled.
    pub fn step(&mut self, dt: f32, move_x: f32) -> Vec<Observation> {
        let mut observations = Vec::new();
        self.step_player(dt, move_x, &mut observations);
        self.step_enemies(dt);
        self.detect_triggers(&mut observations);
        observations
    }

    fn step_player(&mut self, dt: f32, move_x: f32, observations: &mut Vec<Observation>) {
        let player = &mut self.player;
        player.velocity.x = if player.control_enabled {
            move_x * MAX_SPEED
        } else {
            0.0
        };

        match player.jump_state {
            JumpState::PrepareToJump => {
                player.jump_state = JumpState::Jumping;
                player.velocity.y = JUMP_TAKE_OFF_SPEED;
                player.grounded = false;
            }
            JumpState::Jumping => {
                if !player.grounded {
                    player.jump_state = JumpState::InFlight;
                    observations.push(Observation::PlayerJumped);
                }
            }
            JumpState::InFlight => {
                if player.grounded {
                    player.jump_state = JumpState::Landed;
                    observations.push(Observation::PlayerLanded);
                }
            }
            JumpState::Landed => {
                player.jump_state = JumpState::Grounded;
            }
            JumpState::Grounded => {}
        }

        player.velocity.y -= GRAVITY * dt;
        let previous_bottom = player.position.y - player.half_extents.y;
        player.position += player.velocity * dt;

        // one-way ground resolution: land only when the player's bottom
        // crosses a platform top from above while falling
        player.grounded = false;
        if player.velocity.y <= 0.0 {
            for platform in &self.platforms {
                let top = platform.max().y;
                let x_overlap = (player.position.x - platform.center.x).abs()
                    <= player.half_extents.x + platform.half.x;
                let new_bottom = player.position.y - player.half_extents.y;
                if x_overlap && previous_bottom >= top - 1e-4 && new_bottom <= top {
                    player.position.y = top + player.half_extents.y;
                    player.velocity.y = 0.0;
                    player.grounded = true;
                }
            }
        }
    }

    fn step_enemies(&mut self, dt: f32) {
        for enemy in &mut self.enemies {
            if enemy.alive {
                if let Some(mover) = &mut enemy.mover {
                    enemy.position = mover.advance(dt);
                }
            } else {
                // no collider anymore, gravity carries it out of the world
                enemy.velocity.y -= GRAVITY * dt;
                enemy.position.y += enemy.velocity.y * dt;
            }
        }
    }

    fn detect_triggers(&self, observations: &mut Vec<Observation>) {
        let player_bounds = self.player.bounds();
        for (index, zone) in self.death_zones.iter().enumerate() {
            if player_bounds.overlaps(&zone.bounds) {
                observations.push(Observation::EnteredDeathZone(DeathZoneId(index)));
            }
        }
        for (index, zone) in self.victory_zones.iter().enumerate() {
            if player_bounds.overlaps(&zone.bounds) {
                observations.push(Observation::EnteredVictoryZone(VictoryZoneId(index)));
            }
        }
        for (index, enemy) in self.enemies.iter().enumerate() {
            if enemy.alive && player_bounds.overlaps(&enemy.bounds()) {
                observations.push(Observation::TouchedEnemy(EnemyId(index)));
            }
        }
        for (index, token) in self.tokens.iter().enumerate() {
            if !token.collected && player_bounds.overlaps(&token.bounds()) {
                observations.push(Observation::TouchedToken(TokenId(index)));
            }
        }
    }
}
