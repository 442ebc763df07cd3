//! Browser bindings
//!
//! The page owns the WebSocket, the canvas and the timers. It forwards
//! pointer moves and inbound text frames here, calls `tick` and `reconcile`
//! from its intervals, and draws whatever `frame_json` returns.

use crate::env::Environment;
use crate::error::ChannelError;
use crate::logging::{self, LineSink};
use crate::network::Channel;
use crate::{LoopState, Peer, PeerConfig};
use game_core::{GameRng, Role};
use tracing::Level;
use wasm_bindgen::prelude::*;
use web_sys::{console, WebSocket};

/// Text channel over a socket the page already opened
pub struct WebSocketChannel {
    ws: WebSocket,
}

impl WebSocketChannel {
    pub fn new(ws: WebSocket) -> Self {
        Self { ws }
    }
}

impl Channel for WebSocketChannel {
    fn is_open(&self) -> bool {
        self.ws.ready_state() == WebSocket::OPEN
    }

    fn send_text(&self, text: &str) -> Result<(), ChannelError> {
        self.ws
            .send_with_str(text)
            .map_err(|e| ChannelError::Send(format!("{:?}", e)))
    }
}

/// `performance.now()`, or `Date.now()` where there is no Performance API
pub struct PerformanceClock {
    performance: Option<web_sys::Performance>,
}

impl PerformanceClock {
    pub fn new() -> Self {
        Self {
            performance: web_sys::window().and_then(|w| w.performance()),
        }
    }
}

impl Default for PerformanceClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for PerformanceClock {
    fn now_ms(&self) -> f64 {
        match &self.performance {
            Some(p) => p.now(),
            None => js_sys::Date::now(),
        }
    }
}

/// devtools console, one call per event at the matching severity
pub struct ConsoleSink;

impl LineSink for ConsoleSink {
    fn line(&self, level: Level, text: &str) {
        let text = JsValue::from_str(text);
        match level {
            Level::ERROR => console::error_1(&text),
            Level::WARN => console::warn_1(&text),
            Level::INFO => console::info_1(&text),
            _ => console::debug_1(&text),
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if tracing::subscriber::set_global_default(logging::subscriber(ConsoleSink, Level::INFO))
        .is_err()
    {
        console::warn_1(&JsValue::from_str("tracing subscriber already installed"));
    }
}

#[wasm_bindgen]
pub struct WasmPeer {
    peer: Peer,
}

#[wasm_bindgen]
impl WasmPeer {
    #[wasm_bindgen(constructor)]
    pub fn new(ws: WebSocket, host: bool, match_id: &str, username: &str) -> WasmPeer {
        let role = if host { Role::Host } else { Role::Guest };
        let config = PeerConfig::new(role, match_id, username);
        WasmPeer {
            peer: Peer::new(
                config,
                Box::new(WebSocketChannel::new(ws)),
                Box::new(PerformanceClock::new()),
            ),
        }
    }

    pub fn on_pointer(&mut self, client_y: f32, canvas_top: f32) -> bool {
        self.peer
            .on_pointer(crate::input::pointer_offset(client_y, canvas_top))
    }

    /// Returns whether the frame was applied
    pub fn on_message(&mut self, raw: &str) -> bool {
        self.peer.on_message(raw).is_some()
    }

    /// Returns whether the tick collided
    pub fn tick(&mut self) -> bool {
        matches!(
            self.peer.tick(),
            crate::TickOutcome::Stepped { collided: true, .. }
        )
    }

    pub fn reconcile(&mut self) -> bool {
        self.peer.reconcile()
    }

    pub fn serve(&mut self, seed: u32) -> bool {
        let mut rng = GameRng::new(seed as u64);
        self.peer.serve(&mut rng).is_some()
    }

    pub fn teardown(&mut self) {
        self.peer.teardown();
    }

    pub fn is_active(&self) -> bool {
        self.peer.state() == LoopState::Active
    }

    pub fn state_string(&self) -> String {
        self.peer.state_string()
    }

    pub fn frame_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.peer.frame())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize frame: {}", e)))
    }
}
