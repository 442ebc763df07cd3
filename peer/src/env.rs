//! Clock abstraction so ticks can be driven by real or scripted time

#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

pub trait Environment {
    /// Monotonic milliseconds
    fn now_ms(&self) -> f64;
}

/// Wall clock backed by `Instant`
#[cfg(not(target_arch = "wasm32"))]
pub struct SystemClock {
    start: Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Environment for SystemClock {
    fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(a >= 0.0);
        assert!(b >= a);
    }
}
