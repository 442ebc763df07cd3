//! Headless match between a host and a guest peer
//!
//! Both peers run in one process on a single-threaded runtime and talk over
//! in-memory queues, the same way two browsers would over a relay.

mod autopilot;
mod channel;

use autopilot::Autopilot;
use clap::Parser;
use game_core::{Config, GameRng, Role};
use peer::{Peer, PeerConfig, SystemClock};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tokio::time::{interval, sleep, MissedTickBehavior};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "duel", about = "Play a headless two-peer pong match")]
struct Cli {
    /// Match length in seconds
    #[arg(long, default_value_t = 10)]
    seconds: u64,

    /// Seed for the serve direction
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Simulation tick interval
    #[arg(long, default_value_t = 16)]
    tick_ms: u64,

    /// Interval between get-ball reconciliation passes
    #[arg(long, default_value_t = 100)]
    frame_ms: u64,

    /// Delay before the host serves
    #[arg(long, default_value_t = 500)]
    serve_delay_ms: u64,

    /// Paddle speed of the scripted players, px per second
    #[arg(long, default_value_t = 450.0, value_parser = parse_speed)]
    paddle_speed: f32,

    /// JSON file overriding any game config field
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum DuelError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

fn parse_speed(s: &str) -> Result<f32, String> {
    let speed: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if speed.is_finite() && speed >= 0.0 {
        Ok(speed)
    } else {
        Err(format!("speed must be a non-negative number, got {s}"))
    }
}

fn load_config(path: Option<&Path>) -> Result<Config, DuelError> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = std::fs::read_to_string(path).map_err(|source| DuelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), DuelError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let game = load_config(cli.config.as_deref())?;
    info!(?cli, "starting duel");

    let (to_guest, mut guest_inbox) = channel::link();
    let (to_host, mut host_inbox) = channel::link();

    let mut host = Peer::new(
        PeerConfig {
            game: game.clone(),
            ..PeerConfig::new(Role::Host, "duel", "host")
        },
        Box::new(to_guest),
        Box::new(SystemClock::new()),
    );
    let mut guest = Peer::new(
        PeerConfig {
            game: game.clone(),
            ..PeerConfig::new(Role::Guest, "duel", "guest")
        },
        Box::new(to_host),
        Box::new(SystemClock::new()),
    );

    let mid = game.arena_height / 2.0;
    let mut host_pilot = Autopilot::new(mid, cli.paddle_speed);
    let mut guest_pilot = Autopilot::new(mid, cli.paddle_speed);
    let mut rng = GameRng::new(cli.seed);

    let tick_period = Duration::from_millis(cli.tick_ms.max(1));
    let mut tick = interval(tick_period);
    tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut frame = interval(Duration::from_millis(cli.frame_ms.max(1)));
    frame.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let serve = sleep(Duration::from_millis(cli.serve_delay_ms));
    tokio::pin!(serve);
    let deadline = sleep(Duration::from_secs(cli.seconds));
    tokio::pin!(deadline);
    let mut served = false;

    loop {
        tokio::select! {
            _ = tick.tick() => {
                let dt = tick_period.as_secs_f32();
                host.on_pointer(host_pilot.follow(host.ball().map(|b| b.pos.y), dt));
                guest.on_pointer(guest_pilot.follow(guest.ball().map(|b| b.pos.y), dt));
                host.tick();
                guest.tick();
            }
            _ = frame.tick() => {
                host.reconcile();
                guest.reconcile();
            }
            Some(raw) = host_inbox.recv() => {
                host.on_message(&raw);
            }
            Some(raw) = guest_inbox.recv() => {
                guest.on_message(&raw);
            }
            _ = &mut serve, if !served => {
                served = true;
                if let Some(ball) = host.serve(&mut rng) {
                    debug!(vx = ball.vel.x, vy = ball.vel.y, "host served");
                }
            }
            _ = &mut deadline => break,
        }
    }

    host.teardown();
    guest.teardown();
    host_inbox.close();
    guest_inbox.close();

    for side in [&host, &guest] {
        let stats = side.receiver_stats();
        info!(
            role = ?side.role(),
            ticks = side.ticks(),
            published = side.published(),
            requests = side.requests_sent(),
            applied = stats.applied,
            rejected = stats.rejected,
            ball = ?side.ball().map(|b| (b.pos.x, b.pos.y)),
            "peer summary"
        );
    }

    if let (Some(a), Some(b)) = (host.ball(), guest.ball()) {
        info!(divergence = a.pos.distance(b.pos), "match over");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_path_gives_defaults() {
        assert_eq!(load_config(None).expect("defaults"), Config::default());
    }

    #[test]
    fn test_unreadable_config_reports_path() {
        let err = load_config(Some(Path::new("/nonexistent/duel.json"))).expect_err("missing");
        assert!(err.to_string().contains("/nonexistent/duel.json"));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["duel"]);
        assert_eq!(cli.seconds, 10);
        assert_eq!(cli.tick_ms, 16);
        assert!(cli.config.is_none());
        assert_eq!(cli.paddle_speed, 450.0);
    }

    #[test]
    fn test_paddle_speed_must_be_non_negative() {
        assert!(Cli::try_parse_from(["duel", "--paddle-speed=-1"]).is_err());
        assert!(Cli::try_parse_from(["duel", "--paddle-speed", "NaN"]).is_err());
        assert!(Cli::try_parse_from(["duel", "--paddle-speed", "inf"]).is_err());

        let cli = Cli::try_parse_from(["duel", "--paddle-speed", "0"]).expect("zero is allowed");
        assert_eq!(cli.paddle_speed, 0.0);
    }
}
