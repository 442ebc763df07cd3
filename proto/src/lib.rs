//! Network protocol for Pong game
//!
//! Every frame is a JSON object `{ "type": ..., "data": ... }`. Outbound frames
//! are built from [`Outbound`]; inbound frames are read leniently into
//! [`Inbound`] so a peer tolerates the slightly different shapes relays produce.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const TYPE_UPDATE: &str = "update";
pub const TYPE_BALL: &str = "ball";
pub const TYPE_GET_BALL: &str = "get-ball";

#[derive(Debug, Error)]
pub enum ProtoError {
    /// Frame is not JSON or a payload has the wrong shape
    #[error("Malformed message: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("'{kind}' message is missing '{field}'")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },

    #[error("Ball state contains a non-finite component")]
    NonFinite,

    #[error("Failed to encode message: {0}")]
    Encode(serde_json::Error),
}

/// Full ball state as it travels on the wire
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

impl BallState {
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.vx.is_finite() && self.vy.is_finite()
    }
}

// ============================================================================
// Outbound
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum Outbound {
    /// Local paddle moved
    #[serde(rename = "update")]
    Update {
        name: String,
        #[serde(rename = "match")]
        match_id: String,
        position: f32,
    },

    /// Authoritative ball snapshot
    #[serde(rename = "ball")]
    Ball {
        #[serde(rename = "matchId")]
        match_id: String,
        ball: BallState,
    },

    /// Ask the peer to (re)send its ball
    #[serde(rename = "get-ball")]
    GetBall {
        #[serde(rename = "matchId")]
        match_id: String,
    },
}

impl Outbound {
    pub fn to_json(&self) -> Result<String, ProtoError> {
        serde_json::to_string(self).map_err(ProtoError::Encode)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Outbound::Update { .. } => TYPE_UPDATE,
            Outbound::Ball { .. } => TYPE_BALL,
            Outbound::GetBall { .. } => TYPE_GET_BALL,
        }
    }
}

// ============================================================================
// Inbound
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    /// Remote paddle centre offset
    Update { position: f32 },
    /// Authoritative ball snapshot
    Ball(BallState),
    /// Peer wants our ball
    GetBall { match_id: Option<String> },
    /// Any other tag; ignored by receivers
    Unknown(String),
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: Option<Value>,
    // Some relays put the paddle position next to `type`
    #[serde(default)]
    position: Option<f32>,
}

#[derive(Deserialize)]
struct UpdateData {
    #[serde(default)]
    position: Option<f32>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BallData {
    Wrapped { ball: BallState },
    Bare(BallState),
}

#[derive(Deserialize)]
struct GetBallData {
    #[serde(default, rename = "matchId")]
    match_id: Option<String>,
}

impl Inbound {
    /// Parse one raw frame
    pub fn parse(raw: &str) -> Result<Self, ProtoError> {
        let envelope: Envelope = serde_json::from_str(raw)?;

        match envelope.kind.as_str() {
            TYPE_UPDATE => {
                let nested = match envelope.data {
                    Some(data) => serde_json::from_value::<UpdateData>(data)?.position,
                    None => None,
                };
                let position = nested
                    .or(envelope.position)
                    .ok_or(ProtoError::MissingField {
                        kind: TYPE_UPDATE,
                        field: "position",
                    })?;
                if !position.is_finite() {
                    return Err(ProtoError::NonFinite);
                }
                Ok(Inbound::Update { position })
            }
            TYPE_BALL => {
                let data = envelope.data.ok_or(ProtoError::MissingField {
                    kind: TYPE_BALL,
                    field: "data",
                })?;
                let state = match serde_json::from_value::<BallData>(data)? {
                    BallData::Wrapped { ball } => ball,
                    BallData::Bare(ball) => ball,
                };
                if !state.is_finite() {
                    return Err(ProtoError::NonFinite);
                }
                Ok(Inbound::Ball(state))
            }
            TYPE_GET_BALL => {
                let match_id = match envelope.data {
                    Some(data) => serde_json::from_value::<GetBallData>(data)?.match_id,
                    None => None,
                };
                Ok(Inbound::GetBall { match_id })
            }
            _ => Ok(Inbound::Unknown(envelope.kind)),
        }
    }
}
