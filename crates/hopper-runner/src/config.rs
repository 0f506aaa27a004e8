use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use hopper_mechanics::{
    Aabb, DeathZone, EnemyController, PatrolPath, Scene, TokenInstance, Vec2, VictoryZone, World,
    DEFAULT_RESPAWN_DELAY_TICKS,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A rectangle in level coordinates, center plus full size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ZoneConfig {
    pub center: [f32; 2],
    pub size: [f32; 2],
}

impl ZoneConfig {
    fn aabb(&self) -> Aabb {
        Aabb::from_size(
            Vec2::new(self.center[0], self.center[1]),
            Vec2::new(self.size[0], self.size[1]),
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PatrolConfig {
    pub start: [f32; 2],
    pub end: [f32; 2],
    pub speed: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyConfig {
    pub position: [f32; 2],
    pub patrol: Option<PatrolConfig>,
}

/// A level described in TOML: geometry, spawn point, and every entity
/// that can trigger an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelConfig {
    pub spawn_point: [f32; 2],
    #[serde(default = "default_respawn_delay")]
    pub respawn_delay_ticks: u32,
    #[serde(default)]
    pub platforms: Vec<ZoneConfig>,
    #[serde(default)]
    pub enemies: Vec<EnemyConfig>,
    #[serde(default)]
    pub tokens: Vec<[f32; 2]>,
    #[serde(default)]
    pub death_zones: Vec<ZoneConfig>,
    #[serde(default)]
    pub victory_zones: Vec<ZoneConfig>,
}

fn default_respawn_delay() -> u32 {
    DEFAULT_RESPAWN_DELAY_TICKS
}

impl LevelConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        info!("loaded level from {}", path.display());
        Ok(config)
    }

    /// The built-in level: two ground platforms with a pit between them,
    /// a patrolling enemy, one token, a death zone under the map, and a
    /// victory zone past the pit.
    pub fn sample() -> Self {
        Self {
            spawn_point: [0.0, 0.5],
            respawn_delay_ticks: DEFAULT_RESPAWN_DELAY_TICKS,
            platforms: vec![
                ZoneConfig {
                    center: [3.5, -0.5],
                    size: [13.0, 1.0],
                },
                ZoneConfig {
                    center: [17.0, -0.5],
                    size: [10.0, 1.0],
                },
            ],
            enemies: vec![EnemyConfig {
                position: [5.0, 0.5],
                patrol: Some(PatrolConfig {
                    start: [5.0, 0.5],
                    end: [7.0, 0.5],
                    speed: 2.0,
                }),
            }],
            tokens: vec![[5.0, 2.0]],
            death_zones: vec![ZoneConfig {
                center: [8.0, -8.0],
                size: [60.0, 4.0],
            }],
            victory_zones: vec![ZoneConfig {
                center: [14.0, 1.0],
                size: [1.0, 2.0],
            }],
        }
    }

    /// Build the runtime world this config describes.
    pub fn build(&self) -> World {
        let mut scene = Scene::new(Vec2::new(self.spawn_point[0], self.spawn_point[1]));
        for platform in &self.platforms {
            scene.platforms.push(platform.aabb());
        }
        for enemy in &self.enemies {
            let mover = enemy.patrol.map(|patrol| {
                PatrolPath::new(
                    Vec2::new(patrol.start[0], patrol.start[1]),
                    Vec2::new(patrol.end[0], patrol.end[1]),
                )
                .mover(patrol.speed)
            });
            scene.enemies.push(EnemyController::new(
                Vec2::new(enemy.position[0], enemy.position[1]),
                mover,
            ));
        }
        for token in &self.tokens {
            scene
                .tokens
                .push(TokenInstance::new(Vec2::new(token[0], token[1])));
        }
        for zone in &self.death_zones {
            scene.death_zones.push(DeathZone {
                bounds: zone.aabb(),
            });
        }
        for zone in &self.victory_zones {
            scene.victory_zones.push(VictoryZone {
                bounds: zone.aabb(),
            });
        }
        World::new(scene).with_respawn_delay(self.respawn_delay_ticks)
    }
}
