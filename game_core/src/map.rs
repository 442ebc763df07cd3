use crate::Config;
use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_top_left(top_left: Vec2, size: Vec2) -> Self {
        Self {
            min: top_left,
            max: top_left + size,
        }
    }

    /// Inclusive on every edge
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// The play field: a rectangle with the origin at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl GameMap {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.arena_width,
            height: config.arena_height,
        }
    }

    pub fn centre(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Rectangle covered by a paddle whose left edge is `left_x` and centre is `centre_y`
    pub fn paddle_rect(&self, left_x: f32, centre_y: f32, config: &Config) -> Aabb {
        Aabb::from_top_left(
            Vec2::new(left_x, centre_y - config.paddle_height / 2.0),
            Vec2::new(config.paddle_width, config.paddle_height),
        )
    }
}
