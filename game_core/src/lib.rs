pub mod components;
pub mod config;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use resources::*;

pub use systems::*;

use hecs::World;

/// Advance the ball by `time.dt` and resolve collisions.
///
/// Order: move, left/right walls, paddles (left then right), top/bottom
/// walls. Returns whether a paddle hit or top/bottom bounce happened; a
/// side-wall bounce alone returns false. Does nothing before a ball exists.
pub fn step(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    guard: &mut CollisionGuard,
    events: &mut Events,
) -> bool {
    events.clear();

    if ball(world).is_none() {
        return false;
    }

    move_ball(world, time);
    check_collisions(world, map, config, guard, events);

    time.now += time.dt;
    events.collided()
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, role: Role, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(role, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Current ball state, if a ball exists
pub fn ball(world: &World) -> Option<Ball> {
    world.query::<&Ball>().iter().next().map(|(_e, b)| *b)
}

/// Overwrite every field of the existing ball, or spawn one
pub fn set_ball(world: &mut World, state: Ball) {
    let mut replaced = false;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        *ball = state;
        replaced = true;
    }
    if !replaced {
        world.spawn((state,));
    }
}

/// Centre offset of the paddle owned by `role`
pub fn paddle_y(world: &World, role: Role) -> Option<f32> {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.role == role)
        .map(|(_e, p)| p.y)
}
