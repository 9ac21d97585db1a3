//! Headless driver
//!
//! Runs the simulation without a screen: a fixed 60 Hz frame clock, a
//! wall-clock spawn timer and the autopilot standing in for a player. Used by
//! the native binary and for soak-testing the sim.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::FRAME_MS;
use crate::sim::autopilot::wants_jump;
use crate::sim::{CrashCause, GameEvent, SpawnTimer, World, jump, seeded_rng, spawn_pair, tick};

/// How to drive a headless run
#[derive(Debug, Clone)]
pub struct HeadlessOptions {
    /// Frames to simulate
    pub frames: u64,
    /// RNG seed for pipe placement
    pub seed: u64,
    /// Let the autopilot flap
    pub autopilot: bool,
    /// Flap to restart after a crash
    pub restart: bool,
}

impl Default for HeadlessOptions {
    fn default() -> Self {
        Self {
            frames: 3600,
            seed: 0,
            autopilot: true,
            restart: true,
        }
    }
}

/// What happened during a headless run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub seed: u64,
    pub frames: u64,
    /// Frames spent in the running phase (time in the air)
    pub played_frames: u64,
    pub pairs_spawned: u32,
    pub floor_crashes: u32,
    pub obstacle_crashes: u32,
    pub resets: u32,
    pub best_score: f32,
    pub final_score: f32,
}

impl RunSummary {
    pub fn crashes(&self) -> u32 {
        self.floor_crashes + self.obstacle_crashes
    }

    fn record(&mut self, event: GameEvent, frame: u64) {
        match event {
            GameEvent::Spawned { .. } => self.pairs_spawned += 1,
            GameEvent::Passed { score } => {
                self.best_score = self.best_score.max(score);
            }
            GameEvent::Crashed(cause) => {
                log::info!("Crashed into {:?} at frame {}", cause, frame);
                match cause {
                    CrashCause::Floor => self.floor_crashes += 1,
                    CrashCause::Obstacle => self.obstacle_crashes += 1,
                }
            }
            GameEvent::Reset => {
                log::debug!("Restarted at frame {}", frame);
                self.resets += 1;
            }
        }
    }
}

/// Run the game for `options.frames` frames and summarize it.
///
/// Each frame follows the browser's interleaving: due spawns first, then
/// input, then the frame step. Deterministic for a given config and seed.
pub fn run(config: GameConfig, options: &HeadlessOptions) -> RunSummary {
    let mut timer = SpawnTimer::new(config.spawn_interval_ms);
    let mut world = World::new(config);
    let mut rng = seeded_rng(options.seed);
    let mut summary = RunSummary {
        seed: options.seed,
        ..Default::default()
    };

    for frame in 0..options.frames {
        for _ in 0..timer.advance(FRAME_MS) {
            spawn_pair(&mut world, &mut rng);
        }

        if world.is_over() {
            if options.restart {
                jump(&mut world);
            }
        } else if options.autopilot && wants_jump(&world) {
            jump(&mut world);
        }

        tick(&mut world);

        for event in world.drain_events() {
            summary.record(event, frame);
        }
        summary.frames += 1;
    }

    summary.played_frames = world.frame;
    summary.final_score = world.score();
    summary
}
