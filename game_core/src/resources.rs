/// Time resource for one simulation step
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32,  // Delta time for this step, seconds
    pub now: f32, // Total simulated time, seconds
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }

    /// Build a step from an elapsed wall-clock interval in milliseconds
    pub fn from_millis(elapsed_ms: f32, now: f32) -> Self {
        Self {
            dt: elapsed_ms / 1000.0,
            now,
        }
    }
}

/// Debounce for paddle hits.
///
/// While the ball still overlaps a paddle it just bounced off, the next tick
/// must not invert `vx` again. Lives with the simulation that owns it so two
/// matches never share it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionGuard {
    pub colliding: bool,
}

impl CollisionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        !self.colliding
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool, // Top/bottom
    pub ball_hit_side: bool, // Left/right
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.ball_hit_side = false;
    }

    /// Whether this step produced an event the peer must be told about.
    /// Side bounces are deliberately excluded.
    pub fn collided(&self) -> bool {
        self.ball_hit_paddle || self.ball_hit_wall
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_from_millis() {
        let time = Time::from_millis(250.0, 1.0);
        assert_eq!(time.dt, 0.25);
        assert_eq!(time.now, 1.0);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;
        events.ball_hit_side = true;

        events.clear();

        assert_eq!(events, Events::default());
    }

    #[test]
    fn test_side_bounce_is_not_a_collision() {
        let events = Events {
            ball_hit_side: true,
            ..Events::default()
        };
        assert!(!events.collided());

        let events = Events {
            ball_hit_wall: true,
            ..Events::default()
        };
        assert!(events.collided());
    }

    #[test]
    fn test_guard_starts_armed() {
        let guard = CollisionGuard::new();
        assert!(guard.is_armed());
    }
}
