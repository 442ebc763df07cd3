//! Local simulation state owned by one peer

use crate::input::Paddles;
use game_core::{
    create_paddle, set_ball, set_paddle_y, Ball, CollisionGuard, Config, Events, GameMap, Role,
    Time,
};
use glam::Vec2;
use hecs::World;
use proto::BallState;

/// The ball, both paddles and the collision guard for one match
pub struct BallSimulator {
    world: World,
    time: Time,
    map: GameMap,
    config: Config,
    guard: CollisionGuard,
    events: Events,
    role: Role,
}

impl BallSimulator {
    pub fn new(config: Config, role: Role) -> Self {
        let map = GameMap::new(&config);
        let mut world = World::new();

        create_paddle(&mut world, role, 0.0);
        create_paddle(&mut world, role.opponent(), 0.0);

        Self {
            world,
            time: Time::default(),
            map,
            config,
            guard: CollisionGuard::new(),
            events: Events::new(),
            role,
        }
    }

    /// Advance by `elapsed_ms` against the given paddle positions.
    /// Returns whether the peer must be sent a snapshot.
    pub fn step(&mut self, elapsed_ms: f32, paddles: Paddles) -> bool {
        set_paddle_y(&mut self.world, self.role, paddles.local_y);
        set_paddle_y(&mut self.world, self.role.opponent(), paddles.remote_y);

        self.time = Time::from_millis(elapsed_ms, self.time.now);
        game_core::step(
            &mut self.world,
            &mut self.time,
            &self.map,
            &self.config,
            &mut self.guard,
            &mut self.events,
        )
    }

    pub fn ball(&self) -> Option<Ball> {
        game_core::ball(&self.world)
    }

    pub fn has_ball(&self) -> bool {
        self.ball().is_some()
    }

    /// Replace every field of the ball; spawns it if there is none yet
    pub fn overwrite_ball(&mut self, ball: Ball) {
        set_ball(&mut self.world, ball);
    }

    pub fn snapshot(&self) -> Option<BallState> {
        self.ball().map(|b| to_wire(&b))
    }

    pub fn events(&self) -> Events {
        self.events
    }
}

pub fn to_wire(ball: &Ball) -> BallState {
    BallState {
        x: ball.pos.x,
        y: ball.pos.y,
        vx: ball.vel.x,
        vy: ball.vel.y,
    }
}

pub fn from_wire(state: &BallState) -> Ball {
    Ball::new(Vec2::new(state.x, state.y), Vec2::new(state.vx, state.vy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_is_noop_without_ball() {
        let mut sim = BallSimulator::new(Config::new(), Role::Host);
        assert!(!sim.step(16.0, Paddles::default()));
        assert!(!sim.has_ball());
        assert_eq!(sim.snapshot(), None);
    }

    #[test]
    fn test_local_paddle_follows_role() {
        // Guest's local paddle is on the right
        let mut sim = BallSimulator::new(Config::new(), Role::Guest);
        sim.overwrite_ball(Ball::new(Vec2::new(785.0, 300.0), Vec2::new(100.0, 0.0)));

        let collided = sim.step(
            0.0,
            Paddles {
                local_y: 300.0,
                remote_y: 0.0,
            },
        );

        assert!(collided);
        let ball = sim.ball().expect("ball");
        assert_eq!(ball.vel.x, -100.0);
        assert!(sim.events().ball_hit_paddle);
    }

    #[test]
    fn test_overwrite_replaces_all_fields() {
        let mut sim = BallSimulator::new(Config::new(), Role::Host);
        sim.overwrite_ball(Ball::new(Vec2::new(100.0, 100.0), Vec2::new(50.0, 50.0)));
        sim.step(500.0, Paddles::default());

        let incoming = BallState {
            x: 600.0,
            y: 200.0,
            vx: -80.0,
            vy: 15.0,
        };
        sim.overwrite_ball(from_wire(&incoming));

        assert_eq!(sim.snapshot(), Some(incoming));
    }
}
