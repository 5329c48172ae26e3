use crate::audio::SoundCue;
use crate::components::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f64, // Total elapsed simulation time (seconds)
}

impl Time {
    pub fn new(dt: f32, now: f64) -> Self {
        Self { dt, now }
    }

    pub fn now_ms(&self) -> f64 {
        self.now * 1000.0
    }

    pub fn advance(&mut self, dt: f32) {
        self.dt = dt;
        self.now += dt as f64;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: crate::params::Params::FIXED_DT,
            now: 0.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u8,
    pub ai: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player = self.player.saturating_add(1),
            Side::Ai => self.ai = self.ai.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        }
    }

    pub fn has_winner(&self, games_to_win: u8) -> Option<Side> {
        if self.player >= games_to_win {
            Some(Side::Player)
        } else if self.ai >= games_to_win {
            Some(Side::Ai)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
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

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub player_scored: bool,
    pub ai_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_scored = false;
        self.ai_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn record_score(&mut self, side: Side) {
        match side {
            Side::Player => self.player_scored = true,
            Side::Ai => self.ai_scored = true,
        }
    }

    /// Sound cues to fire for this frame
    pub fn cues(&self) -> Vec<SoundCue> {
        let mut cues = Vec::new();
        if self.ball_hit_wall {
            cues.push(SoundCue::WallBounce);
        }
        if self.ball_hit_paddle {
            cues.push(SoundCue::PaddleHit);
        }
        if self.player_scored || self.ai_scored {
            cues.push(SoundCue::Score);
        }
        cues
    }
}

/// Ordered "best of N" choices and the current pick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchLength {
    options: Vec<u8>,
    selected: usize,
}

impl MatchLength {
    /// An empty option list falls back to a single best-of-1 match.
    pub fn new(options: Vec<u8>, selected: usize) -> Self {
        let options = if options.is_empty() { vec![1] } else { options };
        let selected = selected.min(options.len() - 1);
        Self { options, selected }
    }

    pub fn options(&self) -> &[u8] {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn best_of(&self) -> u8 {
        self.options[self.selected]
    }

    /// Points needed to take the match
    pub fn games_to_win(&self) -> u8 {
        (self.best_of() + 1) / 2
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % self.options.len();
    }

    pub fn prev(&mut self) {
        self.selected = (self.selected + self.options.len() - 1) % self.options.len();
    }

    /// Pick an option by its value. Returns false if it isn't offered.
    pub fn select(&mut self, best_of: u8) -> bool {
        match self.options.iter().position(|&n| n == best_of) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }
}

impl Default for MatchLength {
    fn default() -> Self {
        let config = crate::config::Config::default();
        Self::new(config.match_lengths, config.default_match_index)
    }
}

/// Discrete commands (key presses, not held keys)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Restart,
    NextMatchLength,
    PrevMatchLength,
    SelectMatchLength(u8),
    TogglePause,
}

/// Input sampled once per frame
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub commands: Vec<Command>,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held(up: bool, down: bool) -> Self {
        Self {
            up,
            down,
            commands: Vec::new(),
        }
    }

    pub fn with_command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    /// Net paddle direction: -1 up, 1 down, 0 idle or both held
    pub fn dir(&self) -> i8 {
        match (self.up, self.down) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }
}
