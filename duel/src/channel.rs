//! Channel endpoint backed by a tokio mpsc queue

use peer::{Channel, ChannelError};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

pub struct MpscChannel {
    tx: UnboundedSender<String>,
}

impl MpscChannel {
    pub fn new(tx: UnboundedSender<String>) -> Self {
        Self { tx }
    }
}

impl Channel for MpscChannel {
    fn is_open(&self) -> bool {
        !self.tx.is_closed()
    }

    fn send_text(&self, text: &str) -> Result<(), ChannelError> {
        self.tx
            .send(text.to_string())
            .map_err(|_| ChannelError::Unavailable)
    }
}

/// A sending endpoint and the queue its frames land in
pub fn link() -> (MpscChannel, UnboundedReceiver<String>) {
    let (tx, rx) = unbounded_channel();
    (MpscChannel::new(tx), rx)
}
