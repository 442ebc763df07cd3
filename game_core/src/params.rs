/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (logical canvas units)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const HOST_PADDLE_X: f32 = 10.0; // Left edge of the host paddle
    pub const GUEST_PADDLE_INSET: f32 = 20.0; // Guest paddle left edge = width - inset

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_INITIAL: f32 = 300.0; // units per second
    pub const SERVE_MAX_ANGLE: f32 = 0.785; // ~45 degrees either side of horizontal
}
