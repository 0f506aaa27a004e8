use hopper_events::{register_all, EventKind, GameEvent};
use hopper_mechanics::{
    GamePhase, InputState, InputTransition, KeyboardEvent, Observation, Scene, Vec2, World,
};
use hopper_sim::{Simulation, SimulationError};
use tracing::{debug, info};

/// Fixed step rate of the simulation loop.
pub const TICKS_PER_SECOND: u32 = 60;
/// Seconds advanced per step.
pub const TICK_DT: f32 = 1.0 / TICKS_PER_SECOND as f32;

/// Snapshot of where a session ended up, for reporting.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub ticks: u64,
    pub events_executed: u64,
    pub phase: GamePhase,
    pub tokens_collected: u32,
    pub player_position: Vec2,
}

/// One play session: a loaded world, the event simulation wired up for
/// it, and the fixed-timestep loop that drives both.
///
/// The session is the scheduler's host: it pumps the queue once per step,
/// clears it on level load and restart, and is the only place trigger
/// observations and input transitions become scheduled events.
pub struct Session {
    world: World,
    initial_scene: Scene,
    sim: Simulation<GameEvent>,
    input: InputState,
    paused: bool,
    ticks: u64,
    events_executed: u64,
}

impl Session {
    pub fn new(world: World) -> Self {
        let mut sim = Simulation::new();
        register_all(&mut sim);
        let initial_scene = world.scene.clone();
        Self {
            world,
            initial_scene,
            sim,
            input: InputState::new(),
            paused: false,
            ticks: 0,
            events_executed: 0,
        }
    }

    /// Swap in a new world. Pending events from the previous session are
    /// cleared so they cannot leak into the new one.
    pub fn load_level(&mut self, world: World) {
        self.sim.clear();
        self.initial_scene = world.scene.clone();
        self.world = world;
        self.input = InputState::new();
        self.paused = false;
        info!("level loaded");
    }

    /// Reload the current level from its initial state.
    pub fn restart(&mut self) {
        let respawn_delay = self.world.respawn_delay_ticks;
        let world = World::new(self.initial_scene.clone()).with_respawn_delay(respawn_delay);
        self.load_level(world);
    }

    /// Deliver one keyboard event. Held-key state feeds movement each
    /// step; edge transitions act immediately, which is where the
    /// stop-jump event gets scheduled.
    pub fn handle_key(&mut self, event: KeyboardEvent) -> Result<(), SimulationError> {
        match self.input.apply(&event) {
            Some(InputTransition::JumpPressed) => {
                if !self.paused && self.world.is_playing() {
                    self.world.scene.player.request_jump();
                }
            }
            Some(InputTransition::JumpReleased) => {
                if !self.paused {
                    self.sim.schedule(EventKind::PlayerStopJump)?;
                }
            }
            Some(InputTransition::PauseToggled) => {
                self.paused = !self.paused;
                debug!(paused = self.paused, "pause toggled");
            }
            None => {}
        }
        Ok(())
    }

    /// Advance the session by one fixed step: countdown bookkeeping,
    /// physics, trigger observation, then one pump of the event queue.
    pub fn step(&mut self) -> Result<(), SimulationError> {
        self.ticks += 1;
        if self.paused {
            return Ok(());
        }

        if let GamePhase::Respawning { ticks_remaining } = &mut self.world.phase {
            if *ticks_remaining == 0 {
                self.sim.schedule(EventKind::PlayerSpawn)?;
            } else {
                *ticks_remaining -= 1;
            }
        }

        let move_x = if self.world.is_playing() {
            self.input.move_direction()
        } else {
            0.0
        };
        let observations = self.world.scene.step(TICK_DT, move_x);
        if self.world.is_playing() {
            for observation in observations {
                self.schedule_for(observation)?;
            }
        }
        self.events_executed += self.sim.tick(&mut self.world) as u64;
        Ok(())
    }

    /// Turn one trigger observation into a scheduled event with its
    /// payload filled in. Repeated observations of the same kind within a
    /// step coalesce in the scheduler.
    fn schedule_for(&mut self, observation: Observation) -> Result<(), SimulationError> {
        match observation {
            Observation::PlayerJumped => {
                self.sim.schedule(EventKind::PlayerJumped)?;
            }
            Observation::PlayerLanded => {
                self.sim.schedule(EventKind::PlayerLanded)?;
            }
            Observation::EnteredDeathZone(id) => {
                if let GameEvent::PlayerEnteredDeathZone { zone } =
                    self.sim.schedule(EventKind::PlayerEnteredDeathZone)?
                {
                    *zone = Some(id);
                }
            }
            Observation::EnteredVictoryZone(id) => {
                if let GameEvent::PlayerEnteredVictoryZone { zone } =
                    self.sim.schedule(EventKind::PlayerEnteredVictoryZone)?
                {
                    *zone = Some(id);
                }
            }
            Observation::TouchedEnemy(id) => {
                if let GameEvent::PlayerEnemyCollision { enemy } =
                    self.sim.schedule(EventKind::PlayerEnemyCollision)?
                {
                    *enemy = Some(id);
                }
            }
            Observation::TouchedToken(id) => {
                if let GameEvent::PlayerTokenCollision { token } =
                    self.sim.schedule(EventKind::PlayerTokenCollision)?
                {
                    *token = Some(id);
                }
            }
        }
        Ok(())
    }

    pub fn run(&mut self, ticks: u64) -> Result<(), SimulationError> {
        for _ in 0..ticks {
            self.step()?;
        }
        Ok(())
    }

    /// Run for `ticks` steps, delivering scripted keyboard events as
    /// their ticks come due.
    pub fn run_script(
        &mut self,
        script: &crate::script::InputScript,
        ticks: u64,
    ) -> Result<(), SimulationError> {
        for _ in 0..ticks {
            for event in script.events_at(self.ticks) {
                self.handle_key(event)?;
            }
            self.step()?;
        }
        Ok(())
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn events_executed(&self) -> u64 {
        self.events_executed
    }

    pub fn pending_events(&self) -> usize {
        self.sim.pending_len()
    }

    pub fn outcome(&self) -> SessionOutcome {
        SessionOutcome {
            ticks: self.ticks,
            events_executed: self.events_executed,
            phase: self.world.phase,
            tokens_collected: self.world.scene.tokens_collected,
            player_position: self.world.scene.player.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use hopper_mechanics::{Aabb, DeathZone, KeyCode};

    use super::*;

    fn falling_world(respawn_delay: u32) -> World {
        // no platforms: the player drops straight into the death zone
        let mut scene = Scene::new(Vec2::new(0.0, 0.5));
        scene.death_zones.push(DeathZone {
            bounds: Aabb::from_size(Vec2::new(0.0, -8.0), Vec2::new(40.0, 4.0)),
        });
        World::new(scene).with_respawn_delay(respawn_delay)
    }

    #[test]
    fn test_death_then_respawn_after_countdown() {
        let mut session = Session::new(falling_world(10));
        for _ in 0..120 {
            session.step().unwrap();
            if !session.world().is_playing() {
                break;
            }
        }
        assert!(matches!(
            session.world().phase,
            GamePhase::Respawning { .. }
        ));

        // countdown plus the spawn tick itself
        session.run(11).unwrap();
        assert!(session.world().is_playing());
        assert!(session.world().scene.player.control_enabled);
        assert_eq!(
            session.world().scene.player.position,
            session.world().scene.spawn_point
        );
    }

    #[test]
    fn test_pause_freezes_the_world() {
        let mut session = Session::new(falling_world(10));
        session
            .handle_key(KeyboardEvent::press(KeyCode::Escape))
            .unwrap();
        session
            .handle_key(KeyboardEvent::release(KeyCode::Escape))
            .unwrap();
        assert!(session.is_paused());

        let before = session.world().scene.player.position;
        session.run(60).unwrap();
        assert_eq!(session.world().scene.player.position, before);
        assert_eq!(session.events_executed(), 0);
    }

    #[test]
    fn test_load_level_clears_pending_events() {
        let mut session = Session::new(falling_world(1000));
        // let the player fall into the zone so events queue up mid-flight
        for _ in 0..120 {
            session.step().unwrap();
        }
        session
            .handle_key(KeyboardEvent::press(KeyCode::Space))
            .unwrap();
        session
            .handle_key(KeyboardEvent::release(KeyCode::Space))
            .unwrap();
        assert!(session.pending_events() > 0);

        session.restart();
        assert_eq!(session.pending_events(), 0);
        assert!(session.world().is_playing());
        assert_eq!(
            session.world().scene.player.position,
            session.world().scene.spawn_point
        );
    }
}
