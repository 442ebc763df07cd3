//! Pointer input and paddle positions

use crate::network::{create_update_message, send_message, Channel};

/// Both paddle centre offsets as one peer currently knows them
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Paddles {
    pub local_y: f32,
    pub remote_y: f32,
}

/// Owns the local paddle (written from input) and the remote paddle
/// (written from peer updates).
#[derive(Debug, Clone)]
pub struct PaddleTracker {
    name: String,
    match_id: String,
    paddles: Paddles,
}

impl PaddleTracker {
    pub fn new(name: &str, match_id: &str) -> Self {
        Self {
            name: name.to_string(),
            match_id: match_id.to_string(),
            paddles: Paddles::default(),
        }
    }

    /// Record a pointer sample and tell the peer. Every sample is sent; no
    /// range check, no throttling. Returns whether the update left.
    pub fn on_local_input(&mut self, raw_y: f32, channel: &dyn Channel) -> bool {
        self.paddles.local_y = raw_y;
        let msg = create_update_message(&self.name, &self.match_id, raw_y);
        send_message(channel, &msg)
    }

    pub fn on_remote_update(&mut self, y: f32) {
        self.paddles.remote_y = y;
    }

    pub fn paddles(&self) -> Paddles {
        self.paddles
    }

    pub fn local_y(&self) -> f32 {
        self.paddles.local_y
    }

    pub fn remote_y(&self) -> f32 {
        self.paddles.remote_y
    }
}

/// Pointer offset relative to the canvas top edge
pub fn pointer_offset(client_y: f32, canvas_top: f32) -> f32 {
    client_y - canvas_top
}
