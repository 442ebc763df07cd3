use crate::{Ball, CollisionGuard, Config, Events, GameMap, Paddle};
use hecs::World;

/// Reflect one axis off the `[0, extent]` walls.
///
/// Fires only when the ball penetrates a wall, so a ball already snapped onto
/// one is left alone. The position snaps to the nearer wall.
fn bounce_axis(pos: &mut f32, vel: &mut f32, radius: f32, extent: f32) -> bool {
    let hit = *pos - radius < 0.0 || *pos + radius > extent;

    if hit {
        *vel = -*vel;
        *pos = if *pos > extent / 2.0 {
            extent - radius
        } else {
            radius
        };
    }
    hit
}

/// Left/right walls. Never reported as a collision.
pub fn check_side_walls(world: &mut World, map: &GameMap, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if bounce_axis(&mut ball.pos.x, &mut ball.vel.x, config.ball_radius, map.width) {
            events.ball_hit_side = true;
        }
    }
}

/// Top/bottom walls
pub fn check_walls(world: &mut World, map: &GameMap, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if bounce_axis(&mut ball.pos.y, &mut ball.vel.y, config.ball_radius, map.height) {
            events.ball_hit_wall = true;
        }
    }
}

/// Ball against both paddles, left side first.
///
/// The ball centre has to be inside the paddle rectangle. A hit inverts `vx`
/// and adds English proportional to where the ball met the paddle. The guard
/// suppresses a second hit until a clean step clears it, so at most one paddle
/// registers per step.
pub fn check_paddles(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    guard: &mut CollisionGuard,
    events: &mut Events,
) {
    let mut paddles: Vec<(f32, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (config.paddle_x(p.role), p.y))
        .collect();
    paddles.sort_by(|a, b| a.0.total_cmp(&b.0));

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for &(paddle_x, paddle_y) in &paddles {
            let rect = map.paddle_rect(paddle_x, paddle_y, config);
            if !guard.is_armed() || !rect.contains(ball.pos) {
                continue;
            }

            ball.vel.x = -ball.vel.x;
            let hit_pos = (ball.pos.y - paddle_y) / config.paddle_height - 0.5;
            ball.vel.y += hit_pos * ball.vel.x.abs();

            guard.colliding = true;
            events.ball_hit_paddle = true;
        }
    }
}

/// Run all collision checks in order and settle the guard.
pub fn check_collisions(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    guard: &mut CollisionGuard,
    events: &mut Events,
) {
    check_side_walls(world, map, config, events);
    check_paddles(world, map, config, guard, events);
    check_walls(world, map, config, events);

    if !events.collided() {
        guard.colliding = false;
    }
}
