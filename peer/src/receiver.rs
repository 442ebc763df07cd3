//! Applying inbound frames

use crate::error::Result;
use crate::input::PaddleTracker;
use crate::state::{from_wire, BallSimulator};
use game_core::Ball;
use proto::Inbound;
use tracing::{debug, warn};

/// What an inbound frame did
#[derive(Debug, Clone, PartialEq)]
pub enum Received {
    /// Remote paddle offset overwritten
    RemotePaddle(f32),
    /// Local ball overwritten by a snapshot
    Ball(Ball),
    /// Peer asked for our ball; answering is up to the caller
    BallRequested,
    /// Unrecognised tag, ignored
    Ignored(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReceiverStats {
    pub applied: u64,
    pub ignored: u64,
    pub rejected: u64,
}

#[derive(Debug, Clone, Default)]
pub struct SyncReceiver {
    stats: ReceiverStats,
}

impl SyncReceiver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one frame and apply it. A malformed frame changes nothing and
    /// comes back as an error for the caller to log and drop.
    pub fn on_message(
        &mut self,
        raw: &str,
        tracker: &mut PaddleTracker,
        sim: &mut BallSimulator,
    ) -> Result<Received> {
        let msg = match Inbound::parse(raw) {
            Ok(msg) => msg,
            Err(err) => {
                self.stats.rejected += 1;
                warn!("dropping malformed message: {err}");
                return Err(err.into());
            }
        };

        let received = match msg {
            Inbound::Update { position } => {
                tracker.on_remote_update(position);
                Received::RemotePaddle(position)
            }
            Inbound::Ball(state) => {
                let ball = from_wire(&state);
                sim.overwrite_ball(ball);
                debug!(x = state.x, y = state.y, "ball snapshot applied");
                Received::Ball(ball)
            }
            Inbound::GetBall { .. } => Received::BallRequested,
            Inbound::Unknown(kind) => {
                self.stats.ignored += 1;
                debug!(kind = %kind, "ignoring unknown message type");
                return Ok(Received::Ignored(kind));
            }
        };

        self.stats.applied += 1;
        Ok(received)
    }

    pub fn stats(&self) -> ReceiverStats {
        self.stats
    }
}
