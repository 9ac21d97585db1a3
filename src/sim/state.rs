//! Game state and core simulation types
//!
//! The whole game lives in one owned [`World`]; the frame step, the spawner and
//! jump input all take it by `&mut`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Crashed; waiting for a jump to restart
    Over,
}

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    /// Avatar fell past the bottom of the board
    Floor,
    /// Avatar hit a pipe
    Obstacle,
}

/// Things that happened during a step, drained by the driver for logging
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new pipe pair entered on the right
    Spawned { gap_top_y: f32 },
    /// One pipe was cleared; carries the new score
    Passed { score: f32 },
    Crashed(CrashCause),
    /// Game restarted from Over
    Reset,
}

/// The player-controlled bird
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive = falling)
    pub velocity_y: f32,
}

impl Avatar {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            velocity_y: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// Which half of a pipe pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Hangs from above; the gap starts at its bottom edge
    Top,
    /// Rises from below; the gap ends at its top edge
    Bottom,
}

/// A single pipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub pos: Vec2,
    pub size: Vec2,
    /// Already credited toward the score
    pub passed: bool,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, pos: Vec2, size: Vec2) -> Self {
        Self {
            kind,
            pos,
            size,
            passed: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Trailing (right) edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Fully past the left edge of the board
    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.right() < 0.0
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub config: GameConfig,
    pub avatar: Avatar,
    /// Pipes in spawn order (also left-to-right on screen)
    pub obstacles: Vec<Obstacle>,
    pub phase: GamePhase,
    /// Frames simulated while running, across restarts
    pub frame: u64,
    /// Score in half points; each pipe is worth one half
    score_halves: u32,
    /// Pending events, newest last
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl World {
    pub fn new(config: GameConfig) -> Self {
        let avatar = Avatar::new(config.avatar_start(), config.avatar_size());
        Self {
            config,
            avatar,
            obstacles: Vec::new(),
            phase: GamePhase::Running,
            frame: 0,
            score_halves: 0,
            events: Vec::new(),
        }
    }

    /// Current score (multiples of 0.5)
    pub fn score(&self) -> f32 {
        self.score_halves as f32 / 2.0
    }

    /// Current score in half points
    pub fn score_halves(&self) -> u32 {
        self.score_halves
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    /// Credit one cleared pipe
    pub(crate) fn add_half_point(&mut self) {
        self.score_halves += 1;
        let score = self.score();
        self.push_event(GameEvent::Passed { score });
    }

    /// Move to Over, recording why (only the first cause per frame is kept)
    pub(crate) fn end_game(&mut self, cause: CrashCause) {
        if self.phase == GamePhase::Over {
            return;
        }
        self.phase = GamePhase::Over;
        self.push_event(GameEvent::Crashed(cause));
    }

    /// Back to a fresh run: start position, no pipes, zero score
    pub(crate) fn reset(&mut self) {
        self.avatar.pos.y = self.config.avatar_start().y;
        self.obstacles.clear();
        self.score_halves = 0;
        self.phase = GamePhase::Running;
        self.push_event(GameEvent::Reset);
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world() {
        let world = World::default();
        assert_eq!(world.phase, GamePhase::Running);
        assert!(world.obstacles.is_empty());
        assert_eq!(world.score(), 0.0);
        assert_eq!(world.avatar.velocity_y, 0.0);
        assert!((world.avatar.pos.y - 308.0).abs() < 1e-4);
    }

    #[test]
    fn test_score_counts_halves() {
        let mut world = World::default();
        world.add_half_point();
        assert_eq!(world.score(), 0.5);
        world.add_half_point();
        assert_eq!(world.score(), 1.0);
        assert_eq!(world.score_halves(), 2);
        assert_eq!(
            world.drain_events(),
            vec![
                GameEvent::Passed { score: 0.5 },
                GameEvent::Passed { score: 1.0 }
            ]
        );
        assert!(world.drain_events().is_empty());
    }

    #[test]
    fn test_end_game_keeps_first_cause() {
        let mut world = World::default();
        world.end_game(CrashCause::Floor);
        world.end_game(CrashCause::Obstacle);
        assert!(world.is_over());
        assert_eq!(
            world.drain_events(),
            vec![GameEvent::Crashed(CrashCause::Floor)]
        );
    }

    #[test]
    fn test_obstacle_offscreen() {
        let size = Vec2::new(64.0, 512.0);
        let mut pipe = Obstacle::new(ObstacleKind::Top, Vec2::new(-64.0, 0.0), size);
        // Right edge exactly at 0 is still on the board
        assert!(!pipe.is_offscreen());
        pipe.pos.x = -64.5;
        assert!(pipe.is_offscreen());
    }

    #[test]
    fn test_world_serializes() {
        let world = World::default();
        let json = serde_json::to_string(&world).expect("serialize");
        let back: World = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.phase, world.phase);
        assert_eq!(back.avatar.pos, world.avatar.pos);
    }
}
