//! Simulation engine: the core of the game.
//!
//! `GameEngine` owns the hecs ECS world, the lane spawners, the hunter, the
//! bullet controller and the score. It processes player commands, runs all
//! systems, and produces `GameStateSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use safari_core::commands::PlayerCommand;
use safari_core::constants::{GAME_DURATION_SECS, TIME_EPSILON};
use safari_core::enums::{GamePhase, LaneKind};
use safari_core::error::SimError;
use safari_core::events::AudioEvent;
use safari_core::state::{GameReport, GameStateSnapshot};
use safari_core::types::{Position, SimTime};

use crate::assets::AssetCatalog;
use crate::score::{ScoreState, VictoryQuota};
use crate::systems;
use crate::systems::bullets::BulletController;
use crate::systems::collision::CollisionResolver;
use crate::systems::hunter::Hunter;
use crate::systems::spawner::Spawner;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Length of one game (seconds).
    pub game_duration_secs: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game_duration_secs: GAME_DURATION_SECS,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct GameEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    game_duration_secs: f64,
    rng: ChaCha8Rng,
    assets: Box<dyn AssetCatalog + Send>,
    command_queue: VecDeque<PlayerCommand>,
    audio_events: Vec<AudioEvent>,

    /// One per lane, in lane order.
    spawners: Vec<Spawner>,
    hunter: Hunter,
    bullets: BulletController,
    resolver: CollisionResolver,
    score: ScoreState,
    quota: VictoryQuota,
    report: Option<GameReport>,
}

impl GameEngine {
    /// Create a new simulation engine with the given config.
    ///
    /// Fails if the hunter sprite is not loaded.
    pub fn new(config: SimConfig, assets: Box<dyn AssetCatalog + Send>) -> Result<Self, SimError> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let spawners = LaneKind::ALL
            .into_iter()
            .map(|kind| Spawner::for_lane(kind, &mut rng))
            .collect();
        let hunter = Hunter::new(assets.as_ref())?;

        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            game_duration_secs: config.game_duration_secs,
            rng,
            assets,
            command_queue: VecDeque::new(),
            audio_events: Vec::new(),
            spawners,
            hunter,
            bullets: BulletController::default(),
            resolver: CollisionResolver::default(),
            score: ScoreState::default(),
            quota: VictoryQuota::default(),
            report: None,
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds and return the resulting snapshot.
    ///
    /// Only integrity failures (a sprite that is not loaded) are errors.
    pub fn tick(&mut self, dt: f64) -> Result<GameStateSnapshot, SimError> {
        self.process_commands()?;

        if self.phase == GamePhase::Active {
            self.run_systems(dt)?;
            self.time.advance(dt);
            self.check_game_over();
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        Ok(systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.hunter.pose(),
            &self.spawners,
            &self.bullets,
            &self.score,
            audio_events,
            self.report,
            self.game_duration_secs,
        ))
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn bullets(&self) -> &BulletController {
        &self.bullets
    }

    pub fn hunter(&self) -> &Hunter {
        &self.hunter
    }

    /// The spawner driving one lane.
    pub fn spawner(&self, kind: LaneKind) -> Option<&Spawner> {
        self.spawners.iter().find(|s| s.kind() == kind)
    }

    /// Overwrite the kill counters (for tests that need a near-won game).
    #[cfg(test)]
    pub fn score_mut(&mut self) -> &mut ScoreState {
        &mut self.score
    }

    /// End-of-game summary, once the phase is `GameOver`.
    pub fn report(&self) -> Option<GameReport> {
        self.report
    }

    /// Process all queued commands.
    fn process_commands(&mut self) -> Result<(), SimError> {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command)?;
        }
        Ok(())
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) -> Result<(), SimError> {
        match command {
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::Rules | GamePhase::GameOver) {
                    self.reset_game();
                    if let Err(err) = self.start_spawners() {
                        self.reset_game();
                        return Err(err);
                    }
                    self.bullets.enable_shooting();
                    self.phase = GamePhase::Active;
                    info!("game started");
                } else {
                    warn!("StartGame ignored in phase {:?}", self.phase);
                }
            }
            PlayerCommand::Fire => {
                if self.phase == GamePhase::Active {
                    self.bullets.fire(
                        &mut self.world,
                        self.assets.as_ref(),
                        self.hunter.pose(),
                        &mut self.audio_events,
                    )?;
                } else {
                    warn!("Fire ignored in phase {:?}", self.phase);
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                    info!("game paused");
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                    info!("game resumed");
                }
            }
            PlayerCommand::Reset => {
                self.reset_game();
                self.phase = GamePhase::Rules;
                info!("game reset");
            }
        }
        Ok(())
    }

    /// Put the first runner on every lane.
    fn start_spawners(&mut self) -> Result<(), SimError> {
        for spawner in &mut self.spawners {
            spawner.start(&mut self.world, &mut self.rng, self.assets.as_ref())?;
        }
        Ok(())
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) -> Result<(), SimError> {
        // 1. Lane spawning, movement and pruning
        for spawner in &mut self.spawners {
            spawner.update(&mut self.world, &mut self.rng, self.assets.as_ref(), dt)?;
        }
        // 2. Hunter run + barrier jumps
        let barrier_xs = self.lane_xs(LaneKind::Barrier);
        self.hunter.update(dt, barrier_xs);
        // 3. Bullet flight and pruning
        self.bullets.update(&mut self.world, dt);
        // 4. Collision + scoring
        self.resolver.run(
            &mut self.world,
            Some(&self.bullets),
            &mut self.spawners,
            &mut self.score,
            &mut self.audio_events,
        );
        Ok(())
    }

    /// End the game on victory or once the clock runs out.
    fn check_game_over(&mut self) {
        let victory = systems::victory::is_victory(&self.score, &self.quota);
        if !victory && self.time.elapsed_secs + TIME_EPSILON < self.game_duration_secs {
            return;
        }

        let report = GameReport {
            victory,
            rhino_kills: self.score.rhino_kills,
            bizon_kills: self.score.bizon_kills,
            gazelle_kills: self.score.gazelle_kills,
            shots_fired: self.bullets.shots_fired(),
            elapsed_secs: self.time.elapsed_secs,
        };
        info!(
            "game over: victory={} rhino={} bizon={} gazelle={} shots={} after {:.1}s",
            report.victory,
            report.rhino_kills,
            report.bizon_kills,
            report.gazelle_kills,
            report.shots_fired,
            report.elapsed_secs
        );
        self.report = Some(report);
        self.phase = GamePhase::GameOver;
    }

    /// Clear every collection, counter and timer. Leaves the phase alone.
    fn reset_game(&mut self) {
        for spawner in &mut self.spawners {
            spawner.reset(&mut self.world, &mut self.rng);
        }
        self.bullets.reset(&mut self.world);
        self.hunter.reset();
        self.score.reset();
        self.time = SimTime::default();
        self.report = None;
        self.audio_events.clear();
    }

    /// X positions of the live runners on one lane.
    fn lane_xs(&self, kind: LaneKind) -> Vec<f64> {
        self.spawner(kind)
            .map(|spawner| {
                spawner
                    .live()
                    .iter()
                    .filter_map(|&entity| self.world.get::<&Position>(entity).ok().map(|p| p.x))
                    .collect()
            })
            .unwrap_or_default()
    }
}
