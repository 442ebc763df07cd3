use crate::{Ball, Paddle, Role, Time};
use hecs::World;

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * time.dt;
    }
}

/// Overwrite the centre offset of the paddle owned by `role`
pub fn set_paddle_y(world: &mut World, role: Role, y: f32) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.role == role {
            paddle.y = y;
        }
    }
}
