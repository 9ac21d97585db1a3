//! Pipe pair spawning
//!
//! Pairs enter at the right edge on a fixed wall-clock period, with the gap
//! placed at a random height inside a bounded band.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::state::{GameEvent, Obstacle, ObstacleKind, World};

/// Source of uniform draws in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;
}

impl RandomSource for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Seeded generator for a run
pub fn seeded_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Y of the top pipe for a given uniform draw.
///
/// The top pipe hangs between a quarter and three quarters of its height above
/// `pipe_base_y`, so the gap never hugs the top or bottom of the board.
pub fn gap_top_y(world: &World, r: f32) -> f32 {
    let cfg = &world.config;
    cfg.pipe_base_y - cfg.pipe_height / 4.0 - r * (cfg.pipe_height / 2.0)
}

/// Append a top/bottom pipe pair at the right edge. No-op once the game is over.
pub fn spawn_pair(world: &mut World, rng: &mut impl RandomSource) {
    if world.is_over() {
        return;
    }

    let top_y = gap_top_y(world, rng.next_unit());
    let cfg = &world.config;
    let size = cfg.pipe_size();
    let x = cfg.board_width;
    let bottom_y = top_y + cfg.pipe_height + cfg.opening_space;

    world
        .obstacles
        .push(Obstacle::new(ObstacleKind::Top, Vec2::new(x, top_y), size));
    world
        .obstacles
        .push(Obstacle::new(ObstacleKind::Bottom, Vec2::new(x, bottom_y), size));

    log::debug!("Spawned pipe pair, gap top at {:.1}", top_y + size.y);
    world.push_event(GameEvent::Spawned { gap_top_y: top_y });
}

/// Fixed-period wall-clock timer for spawning, independent of frame rate
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    period_ms: f64,
    elapsed_ms: f64,
}

impl SpawnTimer {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: f64::from(period_ms.max(1)),
            elapsed_ms: 0.0,
        }
    }

    /// Advance by `dt_ms` of wall-clock time; returns how many spawns came due
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        self.elapsed_ms += dt_ms.max(0.0);
        let mut due = 0;
        while self.elapsed_ms >= self.period_ms {
            self.elapsed_ms -= self.period_ms;
            due += 1;
        }
        due
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::sim::GamePhase;
    use proptest::prelude::*;

    /// Replays a fixed list of draws, cycling when exhausted
    pub(crate) struct FixedDraws {
        draws: Vec<f32>,
        index: usize,
    }

    impl FixedDraws {
        pub(crate) fn new(draws: &[f32]) -> Self {
            Self {
                draws: draws.to_vec(),
                index: 0,
            }
        }
    }

    impl RandomSource for FixedDraws {
        fn next_unit(&mut self) -> f32 {
            let r = self.draws[self.index % self.draws.len()];
            self.index += 1;
            r
        }
    }

    #[test]
    fn test_spawn_pair_positions() {
        let mut world = World::default();
        spawn_pair(&mut world, &mut FixedDraws::new(&[0.5]));

        assert_eq!(world.obstacles.len(), 2);
        let top = &world.obstacles[0];
        let bottom = &world.obstacles[1];

        assert_eq!(top.kind, ObstacleKind::Top);
        assert_eq!(bottom.kind, ObstacleKind::Bottom);
        // r = 0.5: 0 - 512/4 - 0.5 * 512/2
        assert_eq!(top.pos.y, -256.0);
        assert_eq!(bottom.pos.y, 341.0);
        assert_eq!(top.pos.x, 360.0);
        assert_eq!(bottom.pos.x, 360.0);
        assert!(!top.passed && !bottom.passed);
        assert_eq!(top.size, Vec2::new(64.0, 512.0));
    }

    #[test]
    fn test_spawn_pair_gap_band() {
        let world = World::default();
        // r = 0 gives the highest pipe, r -> 1 the lowest
        assert_eq!(gap_top_y(&world, 0.0), -128.0);
        assert!((gap_top_y(&world, 0.999_999) - -384.0).abs() < 0.01);
    }

    #[test]
    fn test_spawn_pair_noop_when_over() {
        let mut world = World::default();
        world.phase = GamePhase::Over;
        spawn_pair(&mut world, &mut FixedDraws::new(&[0.25]));
        assert!(world.obstacles.is_empty());
        assert!(world.drain_events().is_empty());
    }

    #[test]
    fn test_spawn_appends_in_order() {
        let mut world = World::default();
        let mut rng = FixedDraws::new(&[0.1, 0.9]);
        spawn_pair(&mut world, &mut rng);
        world.obstacles.iter_mut().for_each(|o| o.pos.x -= 100.0);
        spawn_pair(&mut world, &mut rng);

        assert_eq!(world.obstacles.len(), 4);
        // Older pair stays in front and further left
        assert!(world.obstacles[0].pos.x < world.obstacles[2].pos.x);
        assert_eq!(world.obstacles[2].kind, ObstacleKind::Top);
    }

    #[test]
    fn test_seeded_rng_in_unit_range() {
        let mut rng = seeded_rng(42);
        for _ in 0..1000 {
            let r = rng.next_unit();
            assert!((0.0..1.0).contains(&r));
        }
    }

    #[test]
    fn test_spawn_timer_fixed_period() {
        let mut timer = SpawnTimer::new(1500);
        assert_eq!(timer.advance(1000.0), 0);
        assert_eq!(timer.advance(499.0), 0);
        assert_eq!(timer.advance(1.0), 1);
        // A long stall releases every missed spawn
        assert_eq!(timer.advance(4500.0), 3);
    }

    proptest! {
        #[test]
        fn prop_pair_spacing(r in 0.0f32..1.0) {
            let mut world = World::default();
            spawn_pair(&mut world, &mut FixedDraws::new(&[r]));
            let dy = world.obstacles[1].pos.y - world.obstacles[0].pos.y;
            let expected = world.config.pipe_height + world.config.opening_space;
            prop_assert!((dy - expected).abs() < 1e-3);
            prop_assert_eq!(world.obstacles.len(), 2);
        }
    }
}
