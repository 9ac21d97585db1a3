//! Flappy Bird - A single-screen gap-flying arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `renderer`: Draw-command layer over a pluggable render surface
//! - `input`: Mapping of raw input events to jump intents
//! - `config`: Tunable game constants
//! - `headless`: Native driver that runs the simulation without a screen

pub mod config;
pub mod error;
pub mod headless;
pub mod input;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::ConfigError;

/// Game configuration defaults
pub mod consts {
    /// Board dimensions
    pub const BOARD_WIDTH: f32 = 360.0;
    pub const BOARD_HEIGHT: f32 = 640.0;

    /// Avatar (bird) size
    pub const AVATAR_WIDTH: f32 = 34.0;
    pub const AVATAR_HEIGHT: f32 = 24.0;

    /// Obstacle (pipe) size
    pub const PIPE_WIDTH: f32 = 64.0;
    pub const PIPE_HEIGHT: f32 = 512.0;
    /// Reference y of the top pipe before randomization
    pub const PIPE_BASE_Y: f32 = 0.0;

    /// Downward acceleration (units/frame²)
    pub const GRAVITY: f32 = 0.4;
    /// Horizontal pipe speed (units/frame, negative = leftwards)
    pub const PIPE_VELOCITY_X: f32 = -2.0;
    /// Upward speed set by a jump (applied as -JUMP_IMPULSE)
    pub const JUMP_IMPULSE: f32 = 6.0;

    /// Vertical gap between a top and bottom pipe
    pub const OPENING_SPACE: f32 = 85.0;
    /// Wall-clock period between pipe pairs
    pub const SPAWN_INTERVAL_MS: u32 = 1500;

    /// Nominal frame duration for the headless driver (60 Hz)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
}
