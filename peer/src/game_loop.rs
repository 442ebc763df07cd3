//! Tick scheduling and ball acquisition

use crate::broadcast::AuthorityBroadcaster;
use crate::fsm::{LoopAction, LoopFsm, LoopState, TransitionResult};
use crate::input::PaddleTracker;
use crate::network::{create_get_ball_message, send_message, Channel};
use crate::state::BallSimulator;
use tracing::{debug, info};

/// What one tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No ball yet, or the loop is stopped
    Idle,
    Stepped { collided: bool, published: bool },
}

pub struct GameLoop {
    fsm: LoopFsm,
    match_id: String,
    last_tick_ms: Option<f64>,
    requests_sent: u64,
    ticks: u64,
}

impl GameLoop {
    pub fn new(match_id: &str) -> Self {
        Self {
            fsm: LoopFsm::new(),
            match_id: match_id.to_string(),
            last_tick_ms: None,
            requests_sent: 0,
            ticks: 0,
        }
    }

    /// Ask the peer for its ball while we have none. Sent on every pass
    /// with no backoff. Returns whether a request left.
    pub fn reconcile(&mut self, channel: &dyn Channel) -> bool {
        if !self.fsm.is_unseeded() || !channel.is_open() {
            return false;
        }
        let sent = send_message(channel, &create_get_ball_message(&self.match_id));
        if sent {
            self.requests_sent += 1;
        }
        sent
    }

    /// A ball now exists. `now_ms` becomes the elapsed-time baseline when
    /// leaving Unseeded; later calls leave the baseline alone.
    pub fn activate(&mut self, action: LoopAction, now_ms: f64) -> TransitionResult {
        let result = self.fsm.transition(action);
        if result.entered() {
            self.last_tick_ms = Some(now_ms);
            info!(
                from = ?result.from_state(),
                to = ?result.to_state(),
                action = ?action,
                "loop activated"
            );
        }
        result
    }

    /// Advance the simulation by wall-clock time since the previous tick and
    /// publish if it collided.
    pub fn tick(
        &mut self,
        now_ms: f64,
        sim: &mut BallSimulator,
        tracker: &PaddleTracker,
        broadcaster: &mut AuthorityBroadcaster,
        channel: &dyn Channel,
    ) -> TickOutcome {
        if !self.fsm.is_active() {
            return TickOutcome::Idle;
        }

        let last = self.last_tick_ms.unwrap_or(now_ms);
        // Clocks can step backwards; never run the ball in reverse
        let elapsed_ms = (now_ms - last).max(0.0);
        self.last_tick_ms = Some(now_ms);
        self.ticks += 1;

        let collided = sim.step(elapsed_ms as f32, tracker.paddles());
        let published = broadcaster.on_tick_result(collided, sim, channel);
        if collided {
            let events = sim.events();
            debug!(
                tick = self.ticks,
                paddle = events.ball_hit_paddle,
                wall = events.ball_hit_wall,
                published,
                "collision"
            );
        }

        TickOutcome::Stepped {
            collided,
            published,
        }
    }

    /// Stop ticking and requesting. Further calls are no-ops.
    pub fn teardown(&mut self) -> bool {
        let result = self.fsm.transition(LoopAction::Teardown);
        if result.entered() {
            info!(ticks = self.ticks, "loop stopped");
        }
        result.success()
    }

    pub fn state(&self) -> LoopState {
        self.fsm.state()
    }

    pub fn state_string(&self) -> String {
        self.fsm.state_string()
    }

    pub fn is_active(&self) -> bool {
        self.fsm.is_active()
    }

    pub fn is_stopped(&self) -> bool {
        self.fsm.is_stopped()
    }

    /// get-ball requests handed to the channel
    pub fn requests_sent(&self) -> u64 {
        self.requests_sent
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loopback;
    use game_core::{Ball, Config, Role};
    use glam::Vec2;
    use proto::Inbound;

    struct Rig {
        game_loop: GameLoop,
        sim: BallSimulator,
        tracker: PaddleTracker,
        broadcaster: AuthorityBroadcaster,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                game_loop: GameLoop::new("m-1"),
                sim: BallSimulator::new(Config::new(), Role::Host),
                tracker: PaddleTracker::new("alice", "m-1"),
                broadcaster: AuthorityBroadcaster::new("m-1"),
            }
        }

        fn tick(&mut self, now_ms: f64, channel: &dyn Channel) -> TickOutcome {
            self.game_loop.tick(
                now_ms,
                &mut self.sim,
                &self.tracker,
                &mut self.broadcaster,
                channel,
            )
        }
    }

    #[test]
    fn test_unseeded_requests_ball_every_pass() {
        let (ours, theirs) = loopback::pair();
        let mut game_loop = GameLoop::new("m-1");

        assert!(game_loop.reconcile(&ours));
        assert!(game_loop.reconcile(&ours));
        assert!(game_loop.reconcile(&ours));

        let frames = theirs.drain();
        assert_eq!(frames.len(), 3);
        assert!(frames
            .iter()
            .all(|f| Inbound::parse(f).expect("valid") == Inbound::GetBall {
                match_id: Some("m-1".to_string())
            }));
        assert_eq!(game_loop.requests_sent(), 3);
    }

    #[test]
    fn test_no_request_without_channel() {
        let (ours, theirs) = loopback::pair();
        ours.close();
        let mut game_loop = GameLoop::new("m-1");

        assert!(!game_loop.reconcile(&ours));
        assert_eq!(theirs.pending(), 0);
        assert_eq!(game_loop.requests_sent(), 0);
    }

    #[test]
    fn test_requests_stop_once_active() {
        let (ours, theirs) = loopback::pair();
        let mut game_loop = GameLoop::new("m-1");
        game_loop.reconcile(&ours);

        game_loop.activate(LoopAction::BallReceived, 0.0);
        theirs.drain();

        assert!(!game_loop.reconcile(&ours));
        assert_eq!(theirs.pending(), 0);
    }

    #[test]
    fn test_tick_idle_while_unseeded() {
        let (ours, _theirs) = loopback::pair();
        let mut rig = Rig::new();
        assert_eq!(rig.tick(16.0, &ours), TickOutcome::Idle);
        assert_eq!(rig.game_loop.ticks(), 0);
    }

    #[test]
    fn test_tick_uses_elapsed_since_previous() {
        let (ours, _theirs) = loopback::pair();
        let mut rig = Rig::new();
        rig.sim
            .overwrite_ball(Ball::new(Vec2::new(400.0, 300.0), Vec2::new(100.0, 0.0)));
        rig.game_loop.activate(LoopAction::BallServed, 1000.0);

        rig.tick(1100.0, &ours);
        let ball = rig.sim.ball().expect("ball");
        assert!((ball.pos.x - 410.0).abs() < 1e-3);

        rig.tick(1300.0, &ours);
        let ball = rig.sim.ball().expect("ball");
        assert!((ball.pos.x - 430.0).abs() < 1e-3);
    }

    #[test]
    fn test_backwards_clock_does_not_rewind() {
        let (ours, _theirs) = loopback::pair();
        let mut rig = Rig::new();
        rig.sim
            .overwrite_ball(Ball::new(Vec2::new(400.0, 300.0), Vec2::new(100.0, 0.0)));
        rig.game_loop.activate(LoopAction::BallServed, 500.0);

        rig.tick(400.0, &ours);
        assert_eq!(rig.sim.ball().expect("ball").pos.x, 400.0);
    }

    #[test]
    fn test_collision_tick_publishes() {
        let (ours, theirs) = loopback::pair();
        let mut rig = Rig::new();
        rig.sim
            .overwrite_ball(Ball::new(Vec2::new(400.0, 5.0), Vec2::new(0.0, -100.0)));
        rig.game_loop.activate(LoopAction::BallServed, 0.0);

        let outcome = rig.tick(16.0, &ours);

        assert_eq!(
            outcome,
            TickOutcome::Stepped {
                collided: true,
                published: true
            }
        );
        assert_eq!(theirs.pending(), 1);
    }

    #[test]
    fn test_reactivation_keeps_baseline() {
        let mut game_loop = GameLoop::new("m-1");
        assert!(game_loop.activate(LoopAction::BallReceived, 100.0).entered());
        assert!(!game_loop.activate(LoopAction::BallReceived, 900.0).entered());
        assert_eq!(game_loop.last_tick_ms, Some(100.0));
    }

    #[test]
    fn test_teardown_stops_everything() {
        let (ours, theirs) = loopback::pair();
        let mut rig = Rig::new();
        rig.sim
            .overwrite_ball(Ball::new(Vec2::new(400.0, 300.0), Vec2::new(100.0, 0.0)));
        rig.game_loop.activate(LoopAction::BallServed, 0.0);

        assert!(rig.game_loop.teardown());
        assert!(!rig.game_loop.teardown());
        assert_eq!(rig.tick(100.0, &ours), TickOutcome::Idle);
        assert!(!rig.game_loop.reconcile(&ours));
        assert!(!rig
            .game_loop
            .activate(LoopAction::BallReceived, 200.0)
            .success());
        assert_eq!(theirs.pending(), 0);
        assert!(rig.game_loop.is_stopped());
    }
}
