//! Network message handling
//!
//! The transport itself lives outside this crate; all we need from it is a
//! way to push a text frame and to know whether it is up.

use crate::error::{ChannelError, Result, SyncError};
use proto::{BallState, Outbound};
use tracing::{debug, warn};

/// Bidirectional text channel to the other peer
pub trait Channel {
    fn is_open(&self) -> bool;
    fn send_text(&self, text: &str) -> std::result::Result<(), ChannelError>;
}

/// Encode and send, reporting every failure
pub fn try_send(channel: &dyn Channel, msg: &Outbound) -> Result<()> {
    if !channel.is_open() {
        return Err(ChannelError::Unavailable.into());
    }
    let text = msg.to_json()?;
    channel.send_text(&text)?;
    Ok(())
}

/// Fire-and-forget send. A closed channel is skipped quietly; other
/// failures are logged. Returns whether the frame left.
pub fn send_message(channel: &dyn Channel, msg: &Outbound) -> bool {
    match try_send(channel, msg) {
        Ok(()) => {
            debug!(kind = msg.kind(), "sent");
            true
        }
        Err(err) if err.is_unavailable() => {
            debug!(kind = msg.kind(), "channel unavailable, send skipped");
            false
        }
        Err(SyncError::Proto(err)) => {
            warn!(kind = msg.kind(), "failed to encode message: {err}");
            false
        }
        Err(err) => {
            warn!(kind = msg.kind(), "send failed: {err}");
            false
        }
    }
}

/// Create paddle update message
pub fn create_update_message(name: &str, match_id: &str, position: f32) -> Outbound {
    Outbound::Update {
        name: name.to_string(),
        match_id: match_id.to_string(),
        position,
    }
}

/// Create authoritative ball message
pub fn create_ball_message(match_id: &str, ball: BallState) -> Outbound {
    Outbound::Ball {
        match_id: match_id.to_string(),
        ball,
    }
}

/// Create ball request message
pub fn create_get_ball_message(match_id: &str) -> Outbound {
    Outbound::GetBall {
        match_id: match_id.to_string(),
    }
}
