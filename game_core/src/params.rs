/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (pixels, origin top-left)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // gap between paddle and side edge
    pub const PADDLE_SPEED: f32 = 7.0; // pixels per tick
    pub const AI_MAX_SPEED: f32 = 6.0; // pixels per tick

    // AI tracking
    pub const AI_LOOKAHEAD_TICKS: f32 = 5.0;
    pub const AI_DEAD_ZONE: f32 = 10.0;
    pub const AI_JITTER_ZONE: f32 = 5.0;
    pub const AI_JITTER_CHANCE: f64 = 0.1;
    pub const AI_JITTER_STEP: f32 = 2.0;

    // Ball
    pub const BALL_SIZE: f32 = 7.0;
    pub const BALL_SERVE_SPEED_X: f32 = 5.0;
    pub const BALL_SERVE_SPEED_Y: f32 = 3.0;
    pub const BALL_SPIN_FACTOR: f32 = 0.1;
    pub const COLLISION_COOLDOWN_MS: f64 = 100.0;

    // Match
    pub const MATCH_LENGTHS: [u8; 3] = [3, 5, 7];
    pub const DEFAULT_MATCH_INDEX: usize = 1; // best of 5

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0; // one tick at 60 Hz
    pub const MAX_DT: f32 = 0.1; // longest frame fed to the accumulator
}
