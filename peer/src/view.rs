//! What to draw this frame, in canvas coordinates

use game_core::{Ball, Config, GameMap, Role};
use serde::Serialize;

/// Axis-aligned paddle rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaddleRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallCircle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    pub local: PaddleRect,
    pub enemy: PaddleRect,
    pub ball: Option<BallCircle>,
}

pub fn project(
    config: &Config,
    role: Role,
    local_y: f32,
    remote_y: f32,
    ball: Option<Ball>,
) -> Frame {
    let map = GameMap::new(config);
    let side = config.side_for(role);

    let rect = |x: f32, y: f32| {
        let aabb = map.paddle_rect(x, y, config);
        let size = aabb.size();
        PaddleRect {
            x: aabb.min.x,
            y: aabb.min.y,
            width: size.x,
            height: size.y,
        }
    };

    Frame {
        local: rect(side.local_x, local_y),
        enemy: rect(side.enemy_x, remote_y),
        ball: ball.map(|b| BallCircle {
            x: b.pos.x,
            y: b.pos.y,
            radius: config.ball_radius,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_host_draws_local_on_left() {
        let frame = project(&Config::new(), Role::Host, 300.0, 120.0, None);

        assert_eq!(
            frame.local,
            PaddleRect {
                x: 10.0,
                y: 250.0,
                width: 10.0,
                height: 100.0
            }
        );
        assert_eq!(frame.enemy.x, 780.0);
        assert_eq!(frame.enemy.y, 70.0);
        assert!(frame.ball.is_none());
    }

    #[test]
    fn test_guest_draws_local_on_right() {
        let ball = Ball::new(Vec2::new(400.0, 300.0), Vec2::ZERO);
        let frame = project(&Config::new(), Role::Guest, 300.0, 300.0, Some(ball));

        assert_eq!(frame.local.x, 780.0);
        assert_eq!(frame.enemy.x, 10.0);
        assert_eq!(
            frame.ball,
            Some(BallCircle {
                x: 400.0,
                y: 300.0,
                radius: 10.0
            })
        );
    }

    #[test]
    fn test_frame_serializes_for_the_page() {
        let frame = project(&Config::new(), Role::Host, 300.0, 300.0, None);
        let value = serde_json::to_value(frame).expect("serialize");
        assert_eq!(value["local"]["height"], 100.0);
        assert!(value["ball"].is_null());
    }
}
