//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` per frame, no wall-clock time
//! - Randomness only through an injected `RandomSource`
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod geometry;
pub mod spawn;
pub mod state;
pub mod tick;

pub use geometry::{Rect, overlaps};
pub use spawn::{RandomSource, SpawnTimer, seeded_rng, spawn_pair};
pub use state::{Avatar, CrashCause, GameEvent, GamePhase, Obstacle, ObstacleKind, World};
pub use tick::{jump, tick};
