//! Publishing authoritative ball snapshots

use crate::network::{create_ball_message, send_message, Channel};
use crate::state::BallSimulator;
use tracing::debug;

/// Decides after each step whether the peer needs our ball, and sends it.
///
/// Snapshots carry the whole ball and the receiver overwrites its own, so
/// the last snapshot to arrive wins. There is no ack and no retry.
#[derive(Debug, Clone)]
pub struct AuthorityBroadcaster {
    match_id: String,
    published: u64,
}

impl AuthorityBroadcaster {
    pub fn new(match_id: &str) -> Self {
        Self {
            match_id: match_id.to_string(),
            published: 0,
        }
    }

    /// Publish when the step collided. Returns whether a snapshot left.
    pub fn on_tick_result(
        &mut self,
        collided: bool,
        sim: &BallSimulator,
        channel: &dyn Channel,
    ) -> bool {
        if !collided {
            return false;
        }
        self.publish(sim, channel)
    }

    /// Publish the current ball unconditionally (no-op without a ball)
    pub fn publish(&mut self, sim: &BallSimulator, channel: &dyn Channel) -> bool {
        let Some(state) = sim.snapshot() else {
            return false;
        };

        let sent = send_message(channel, &create_ball_message(&self.match_id, state));
        if sent {
            self.published += 1;
            debug!(
                x = state.x,
                y = state.y,
                vx = state.vx,
                vy = state.vy,
                "published ball snapshot"
            );
        }
        sent
    }

    /// Snapshots successfully handed to the channel
    pub fn published(&self) -> u64 {
        self.published
    }
}
