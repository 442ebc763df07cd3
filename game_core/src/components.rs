use crate::{Config, Role};
use glam::Vec2;

/// Paddle component - one per side; `y` is the paddle centre
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub role: Role,
    pub y: f32, // Unclamped; bounds are an input/render concern
}

impl Paddle {
    pub fn new(role: Role, y: f32) -> Self {
        Self { role, y }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite()
    }

    /// Place the ball at arena centre heading toward a random side
    pub fn serve(config: &Config, rng: &mut crate::GameRng) -> Self {
        use rand::Rng;
        let pos = crate::GameMap::new(config).centre();

        let max = config.serve_max_angle;
        let angle: f32 = if max > 0.0 {
            rng.0.gen_range(-max..max)
        } else {
            0.0
        };
        let dir = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };

        let vel = Vec2::new(angle.cos() * dir, angle.sin()) * config.ball_speed_initial;
        Self { pos, vel }
    }
}
