use crate::Params;
use serde::Deserialize;

/// Which side of the match this peer plays. Fixed for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Host,  // Left paddle
    Guest, // Right paddle
}

impl Role {
    pub fn opponent(self) -> Role {
        match self {
            Role::Host => Role::Guest,
            Role::Guest => Role::Host,
        }
    }
}

/// Horizontal placement of both paddles as seen by one peer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Side {
    pub local_x: f32,
    pub enemy_x: f32,
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub host_paddle_x: f32,
    pub guest_paddle_inset: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub serve_max_angle: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            host_paddle_x: Params::HOST_PADDLE_X,
            guest_paddle_inset: Params::GUEST_PADDLE_INSET,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            serve_max_angle: Params::SERVE_MAX_ANGLE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left edge of the paddle owned by `role`
    pub fn paddle_x(&self, role: Role) -> f32 {
        match role {
            Role::Host => self.host_paddle_x,
            Role::Guest => self.arena_width - self.guest_paddle_inset,
        }
    }

    /// Local and enemy paddle placement for a peer playing `role`
    pub fn side_for(&self, role: Role) -> Side {
        Side {
            local_x: self.paddle_x(role),
            enemy_x: self.paddle_x(role.opponent()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Role::Host), 10.0, "Host paddle on the left");
        assert_eq!(config.paddle_x(Role::Guest), 780.0, "Guest paddle on the right");
    }

    #[test]
    fn test_side_for_mirrors_roles() {
        let config = Config::new();
        let host = config.side_for(Role::Host);
        let guest = config.side_for(Role::Guest);

        assert_eq!(host.local_x, guest.enemy_x);
        assert_eq!(host.enemy_x, guest.local_x);
        assert!(host.local_x < host.enemy_x, "Host plays the left side");
    }

    #[test]
    fn test_config_partial_override() {
        let config: Config = serde_json::from_str(r#"{ "ball_radius": 6.0 }"#)
            .expect("Partial config should deserialize");
        assert_eq!(config.ball_radius, 6.0);
        assert_eq!(config.arena_width, Params::ARENA_WIDTH);
    }

    #[test]
    fn test_role_deserializes_lowercase() {
        let role: Role = serde_json::from_str("\"guest\"").expect("Role should parse");
        assert_eq!(role, Role::Guest);
        assert_eq!(role.opponent(), Role::Host);
    }
}
