//! Two-peer pong runtime
//!
//! Each peer simulates the ball locally against both paddles. Whenever its
//! simulation registers a paddle hit or a top/bottom bounce it sends the whole
//! ball to the other peer, which overwrites its own. Paddles travel as
//! position updates on every pointer move.
//!
//! Transport and clock are traits so the same runtime runs in the browser
//! (see `wasm`) and natively against an in-memory channel.

pub mod broadcast;
pub mod env;
pub mod error;
pub mod fsm;
pub mod game_loop;
pub mod input;
pub mod logging;
pub mod loopback;
pub mod network;
pub mod receiver;
pub mod state;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use broadcast::AuthorityBroadcaster;
pub use env::Environment;
#[cfg(not(target_arch = "wasm32"))]
pub use env::SystemClock;
pub use error::{ChannelError, Result, SyncError};
pub use fsm::{LoopAction, LoopState};
pub use game_loop::{GameLoop, TickOutcome};
pub use input::{PaddleTracker, Paddles};
pub use network::Channel;
pub use receiver::{ReceiverStats, Received, SyncReceiver};
pub use state::BallSimulator;
pub use view::Frame;

use game_core::{Ball, Config, GameRng, Role};
use serde::Deserialize;
use tracing::{debug, info};

/// Session constants handed over by whoever set up the match
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PeerConfig {
    pub role: Role,
    pub match_id: String,
    pub username: String,
    #[serde(default)]
    pub game: Config,
}

impl PeerConfig {
    pub fn new(role: Role, match_id: &str, username: &str) -> Self {
        Self {
            role,
            match_id: match_id.to_string(),
            username: username.to_string(),
            game: Config::default(),
        }
    }
}

/// One side of a match
pub struct Peer {
    config: PeerConfig,
    channel: Box<dyn Channel>,
    env: Box<dyn Environment>,
    sim: BallSimulator,
    tracker: PaddleTracker,
    broadcaster: AuthorityBroadcaster,
    receiver: SyncReceiver,
    game_loop: GameLoop,
}

impl Peer {
    pub fn new(config: PeerConfig, channel: Box<dyn Channel>, env: Box<dyn Environment>) -> Self {
        info!(
            role = ?config.role,
            match_id = %config.match_id,
            username = %config.username,
            "peer created"
        );
        Self {
            sim: BallSimulator::new(config.game.clone(), config.role),
            tracker: PaddleTracker::new(&config.username, &config.match_id),
            broadcaster: AuthorityBroadcaster::new(&config.match_id),
            receiver: SyncReceiver::new(),
            game_loop: GameLoop::new(&config.match_id),
            config,
            channel,
            env,
        }
    }

    /// Pointer moved; `y` is the offset from the canvas top
    pub fn on_pointer(&mut self, y: f32) -> bool {
        if self.is_torn_down() {
            return false;
        }
        self.tracker.on_local_input(y, self.channel.as_ref())
    }

    /// Apply one inbound frame. Malformed frames are logged and dropped;
    /// `None` means nothing was applied.
    pub fn on_message(&mut self, raw: &str) -> Option<Received> {
        if self.is_torn_down() {
            return None;
        }

        let received = self
            .receiver
            .on_message(raw, &mut self.tracker, &mut self.sim)
            .ok()?;

        match &received {
            Received::Ball(_) => {
                let now = self.env.now_ms();
                self.game_loop.activate(LoopAction::BallReceived, now);
            }
            Received::BallRequested => {
                if self.sim.has_ball() {
                    self.broadcaster.publish(&self.sim, self.channel.as_ref());
                } else {
                    debug!("ball requested but none to give");
                }
            }
            Received::RemotePaddle(_) | Received::Ignored(_) => {}
        }
        Some(received)
    }

    /// Run one simulation tick at the environment's current time
    pub fn tick(&mut self) -> TickOutcome {
        let now = self.env.now_ms();
        self.game_loop.tick(
            now,
            &mut self.sim,
            &self.tracker,
            &mut self.broadcaster,
            self.channel.as_ref(),
        )
    }

    /// Periodic housekeeping: keeps asking for a ball until one exists
    pub fn reconcile(&mut self) -> bool {
        self.game_loop.reconcile(self.channel.as_ref())
    }

    /// Put a fresh ball in play and send it to the peer
    pub fn serve(&mut self, rng: &mut GameRng) -> Option<Ball> {
        if self.is_torn_down() {
            return None;
        }
        let ball = Ball::serve(&self.config.game, rng);
        self.sim.overwrite_ball(ball);
        let now = self.env.now_ms();
        self.game_loop.activate(LoopAction::BallServed, now);
        self.broadcaster.publish(&self.sim, self.channel.as_ref());
        Some(ball)
    }

    /// Stop ticking and ignore further input and messages
    pub fn teardown(&mut self) {
        self.game_loop.teardown();
    }

    pub fn is_torn_down(&self) -> bool {
        self.game_loop.is_stopped()
    }

    pub fn frame(&self) -> Frame {
        view::project(
            &self.config.game,
            self.config.role,
            self.tracker.local_y(),
            self.tracker.remote_y(),
            self.sim.ball(),
        )
    }

    pub fn state(&self) -> LoopState {
        self.game_loop.state()
    }

    pub fn state_string(&self) -> String {
        self.game_loop.state_string()
    }

    pub fn config(&self) -> &PeerConfig {
        &self.config
    }

    pub fn role(&self) -> Role {
        self.config.role
    }

    pub fn ball(&self) -> Option<Ball> {
        self.sim.ball()
    }

    pub fn local_y(&self) -> f32 {
        self.tracker.local_y()
    }

    pub fn remote_y(&self) -> f32 {
        self.tracker.remote_y()
    }

    pub fn receiver_stats(&self) -> ReceiverStats {
        self.receiver.stats()
    }

    pub fn published(&self) -> u64 {
        self.broadcaster.published()
    }

    pub fn requests_sent(&self) -> u64 {
        self.game_loop.requests_sent()
    }

    pub fn ticks(&self) -> u64 {
        self.game_loop.ticks()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peer_config_from_json() {
        let config: PeerConfig = serde_json::from_str(
            r#"{"role":"guest","match_id":"m-7","username":"bob","game":{"arena_width":1000}}"#,
        )
        .expect("valid config");

        assert_eq!(config.role, Role::Guest);
        assert_eq!(config.game.arena_width, 1000.0);
        assert_eq!(config.game.arena_height, 600.0, "Unset fields keep defaults");
    }

    #[test]
    fn test_peer_config_game_optional() {
        let config: PeerConfig =
            serde_json::from_str(r#"{"role":"host","match_id":"m","username":"a"}"#)
                .expect("valid config");
        assert_eq!(config, PeerConfig::new(Role::Host, "m", "a"));
    }
}
