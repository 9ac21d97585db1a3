//! Simple autopilot for demo and headless runs
//!
//! Flaps whenever the bird is falling and its bottom edge sinks near the lower
//! lip of the next gap. Good enough to clear pipes, not to play perfectly.

use super::state::{ObstacleKind, World};

/// How far above the gap's lower lip the bird's bottom may sink before flapping
pub const JUMP_MARGIN: f32 = 8.0;

/// Vertical extent `(top, bottom)` of the next gap the bird has not yet cleared
pub fn next_gap(world: &World) -> Option<(f32, f32)> {
    let bird_x = world.avatar.pos.x;
    world
        .obstacles
        .iter()
        .find(|o| o.kind == ObstacleKind::Bottom && o.right() >= bird_x)
        .map(|o| (o.pos.y - world.config.opening_space, o.pos.y))
}

/// Should the bird flap this frame?
pub fn wants_jump(world: &World) -> bool {
    if world.is_over() || world.avatar.velocity_y < 0.0 {
        return false;
    }

    // With no pipe in sight, hover a little below the middle of the board
    let floor = match next_gap(world) {
        Some((_, bottom)) => bottom,
        None => world.config.board_height * 0.6,
    };

    let bird = world.avatar.rect();
    bird.bottom() + world.avatar.velocity_y > floor - JUMP_MARGIN
}
