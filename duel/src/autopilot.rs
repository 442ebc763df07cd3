//! Scripted pointer for headless play

/// Moves a paddle toward the ball at a bounded speed, so fast balls can be missed
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    y: f32,
    speed: f32, // px per second
}

impl Autopilot {
    /// Non-finite speeds hold the paddle still; negative speeds count as positive
    pub fn new(start_y: f32, speed: f32) -> Self {
        let speed = if speed.is_finite() { speed.abs() } else { 0.0 };
        Self { y: start_y, speed }
    }

    /// Next pointer position after `dt` seconds chasing `target`
    pub fn follow(&mut self, target: Option<f32>, dt: f32) -> f32 {
        if let Some(target) = target {
            let max_step = self.speed * dt;
            self.y += (target - self.y).clamp(-max_step, max_step);
        }
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_is_speed_limited() {
        let mut pilot = Autopilot::new(300.0, 100.0);
        assert_eq!(pilot.follow(Some(500.0), 0.5), 350.0);
        assert_eq!(pilot.follow(Some(360.0), 0.5), 360.0, "Stops on target");
    }

    #[test]
    fn test_holds_without_ball() {
        let mut pilot = Autopilot::new(120.0, 100.0);
        assert_eq!(pilot.follow(None, 1.0), 120.0);
        assert_eq!(pilot.follow(None, 1.0), 120.0);
    }

    #[test]
    fn test_bad_speed_does_not_panic() {
        let mut backwards = Autopilot::new(300.0, -100.0);
        assert_eq!(backwards.follow(Some(100.0), 0.5), 250.0);

        let mut nan = Autopilot::new(300.0, f32::NAN);
        assert_eq!(nan.follow(Some(100.0), 0.016), 300.0);
    }
}
