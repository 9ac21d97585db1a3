//! Per-frame simulation step and jump input
//!
//! One call to [`tick`] is one animation frame. Positions and velocities are in
//! board units per frame; there is no `dt`.

use super::geometry::overlaps;
use super::state::{CrashCause, World};

/// Advance the world by one frame.
///
/// Returns `false` without touching anything when the game is over, so the
/// caller can skip redrawing and leave the final frame on screen.
pub fn tick(world: &mut World) -> bool {
    if world.is_over() {
        return false;
    }

    world.frame += 1;
    let gravity = world.config.gravity;
    let pipe_velocity_x = world.config.pipe_velocity_x;
    let board_height = world.config.board_height;

    // Gravity; clamping at the ceiling leaves velocity alone
    let avatar = &mut world.avatar;
    avatar.velocity_y += gravity;
    avatar.pos.y = (avatar.pos.y + avatar.velocity_y).max(0.0);

    if avatar.rect().bottom() > board_height {
        world.end_game(CrashCause::Floor);
    }

    // Move pipes, score the ones the bird has cleared, look for hits
    let bird = world.avatar.rect();
    let mut cleared = 0;
    let mut hit = false;
    for obstacle in &mut world.obstacles {
        obstacle.pos.x += pipe_velocity_x;

        if !obstacle.passed && bird.x > obstacle.right() {
            obstacle.passed = true;
            cleared += 1;
        }

        if overlaps(bird, obstacle.rect()) {
            hit = true;
        }
    }
    world.obstacles.retain(|o| !o.is_offscreen());

    for _ in 0..cleared {
        world.add_half_point();
    }
    if hit {
        world.end_game(CrashCause::Obstacle);
    }

    true
}

/// Flap: set the upward velocity, restarting first if the game is over.
///
/// There is no ground or cooldown check; the bird can flap at any height.
pub fn jump(world: &mut World) {
    world.avatar.velocity_y = -world.config.jump_impulse;

    if world.is_over() {
        world.reset();
    }
}
