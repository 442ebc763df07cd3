//! Error types for the peer runtime

use proto::ProtoError;
use thiserror::Error;

/// Failure to hand a frame to the message channel
#[derive(Debug, Error)]
pub enum ChannelError {
    /// Not connected yet, or already closed
    #[error("Channel is not open")]
    Unavailable,

    #[error("Transport rejected frame: {0}")]
    Send(String),
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Proto(#[from] ProtoError),

    #[error(transparent)]
    Channel(#[from] ChannelError),
}

impl SyncError {
    /// Whether this is the benign "channel not up yet" case
    pub fn is_unavailable(&self) -> bool {
        matches!(self, SyncError::Channel(ChannelError::Unavailable))
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
