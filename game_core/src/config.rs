use crate::components::Side;
use crate::params::Params;

/// Knobs for the AI paddle's tracking heuristic
#[derive(Debug, Clone, Copy)]
pub struct AiTuning {
    pub lookahead_ticks: f32,
    pub dead_zone: f32,
    pub jitter_zone: f32,
    pub jitter_chance: f64,
    pub jitter_step: f32,
}

impl Default for AiTuning {
    fn default() -> Self {
        Self {
            lookahead_ticks: Params::AI_LOOKAHEAD_TICKS,
            dead_zone: Params::AI_DEAD_ZONE,
            jitter_zone: Params::AI_JITTER_ZONE,
            jitter_chance: Params::AI_JITTER_CHANCE,
            jitter_step: Params::AI_JITTER_STEP,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ai_max_speed: f32,
    pub ai: AiTuning,
    pub ball_size: f32,
    pub ball_serve_speed_x: f32,
    pub ball_serve_speed_y: f32,
    pub ball_spin_factor: f32,
    pub collision_cooldown_ms: f64,
    pub match_lengths: Vec<u8>,
    pub default_match_index: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ai_max_speed: Params::AI_MAX_SPEED,
            ai: AiTuning::default(),
            ball_size: Params::BALL_SIZE,
            ball_serve_speed_x: Params::BALL_SERVE_SPEED_X,
            ball_serve_speed_y: Params::BALL_SERVE_SPEED_Y,
            ball_spin_factor: Params::BALL_SPIN_FACTOR,
            collision_cooldown_ms: Params::COLLISION_COOLDOWN_MS,
            match_lengths: Params::MATCH_LENGTHS.to_vec(),
            default_match_index: Params::DEFAULT_MATCH_INDEX,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_margin,
            Side::Ai => self.arena_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Y position (top edge) that vertically centers a paddle
    pub fn paddle_spawn_y(&self) -> f32 {
        self.arena_height / 2.0 - self.paddle_height / 2.0
    }

    /// Movement speed per tick for a paddle
    pub fn paddle_speed_for(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_speed,
            Side::Ai => self.ai_max_speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Player), 10.0, "Player paddle X position");
        assert_eq!(config.paddle_x(Side::Ai), 780.0, "AI paddle X position");
    }

    #[test]
    fn test_config_paddle_spawn_is_centered() {
        let config = Config::new();
        assert_eq!(config.paddle_spawn_y(), 250.0);
    }

    #[test]
    fn test_ai_is_slower_than_player() {
        let config = Config::new();
        assert!(config.paddle_speed_for(Side::Ai) < config.paddle_speed_for(Side::Player));
    }
}
