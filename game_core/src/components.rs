use glam::Vec2;
use rand::Rng;

use crate::config::{AiTuning, Config};
use crate::map::Aabb;
use crate::resources::GameRng;

/// Which end of the table a paddle (or a point) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player, // left, keyboard controlled
    Ai,     // right, auto-tracking
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Player => "Player",
            Side::Ai => "AI",
        }
    }
}

/// Paddle component - a vertical bat on a fixed x
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // top-left corner
    pub size: Vec2,
    pub speed: f32, // pixels per tick
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            pos: Vec2::new(config.paddle_x(side), config.paddle_spawn_y()),
            size: Vec2::new(config.paddle_width, config.paddle_height),
            speed: config.paddle_speed_for(side),
        }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Shift vertically and clamp into `[0, bound_height - height]`
    pub fn move_by(&mut self, delta: f32, bound_height: f32) {
        self.pos.y = (self.pos.y + delta).clamp(0.0, bound_height - self.size.y);
    }

    /// Heuristic AI step: chase the ball's predicted height.
    ///
    /// Holds still inside the dead zone; when nearly aligned it sometimes
    /// twitches by a small random step.
    pub fn auto_track(
        &mut self,
        ball: &Ball,
        bound_height: f32,
        tuning: &AiTuning,
        rng: &mut GameRng,
    ) {
        let paddle_center = self.center_y();
        let predicted_y = ball.center().y + ball.vel.y * tuning.lookahead_ticks;

        if predicted_y < paddle_center - tuning.dead_zone {
            self.move_by(-self.speed, bound_height);
        } else if predicted_y > paddle_center + tuning.dead_zone {
            self.move_by(self.speed, bound_height);
        }

        if (predicted_y - paddle_center).abs() < tuning.jitter_zone
            && rng.0.gen_bool(tuning.jitter_chance)
        {
            let step = if rng.0.gen_bool(0.5) {
                tuning.jitter_step
            } else {
                -tuning.jitter_step
            };
            self.move_by(step, bound_height);
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // top-left corner
    pub vel: Vec2, // pixels per tick
    pub size: Vec2,
    pub bounds: Vec2, // screen size
    pub spawn: Vec2,
    pub serve_speed: Vec2,
    pub spin_factor: f32,
    pub last_collision_ms: Option<f64>,
    pub collision_cooldown_ms: f64,
}

impl Ball {
    pub fn new(spawn: Vec2, vel: Vec2, config: &Config) -> Self {
        Self {
            pos: spawn,
            vel,
            size: Vec2::splat(config.ball_size),
            bounds: Vec2::new(config.arena_width, config.arena_height),
            spawn,
            serve_speed: Vec2::new(config.ball_serve_speed_x, config.ball_serve_speed_y),
            spin_factor: config.ball_spin_factor,
            last_collision_ms: None,
            collision_cooldown_ms: config.collision_cooldown_ms,
        }
    }

    /// Ball at `spawn` with a freshly randomized serve
    pub fn serve(spawn: Vec2, config: &Config, rng: &mut GameRng) -> Self {
        let mut ball = Self::new(spawn, Vec2::ZERO, config);
        ball.reset(rng);
        ball
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Move one tick. Returns true if the ball bounced off the top or bottom wall.
    pub fn advance(&mut self) -> bool {
        self.pos += self.vel;

        let floor = self.bounds.y - self.size.y;
        if self.pos.y <= 0.0 || self.pos.y >= floor {
            self.vel.y = -self.vel.y;
            // Clamp so the ball can't tunnel through or stick to the wall
            self.pos.y = if self.pos.y <= 0.0 { 0.0 } else { floor };
            return true;
        }
        false
    }

    /// Bounce off whichever paddle the ball is heading into.
    ///
    /// Contacts within the cooldown window are ignored so that one physical
    /// hit spanning several ticks counts once.
    pub fn resolve_collision(&mut self, player: &Paddle, ai: &Paddle, now_ms: f64) -> bool {
        if let Some(last) = self.last_collision_ms {
            if now_ms - last < self.collision_cooldown_ms {
                return false;
            }
        }

        let ball_rect = self.rect();

        if self.vel.x < 0.0 && ball_rect.intersects(&player.rect()) {
            self.vel.x = self.vel.x.abs();
            self.pos.x = player.rect().max.x;
            self.add_spin(player);
            self.last_collision_ms = Some(now_ms);
            return true;
        }

        if self.vel.x > 0.0 && ball_rect.intersects(&ai.rect()) {
            self.vel.x = -self.vel.x.abs();
            self.pos.x = ai.rect().min.x - self.size.x;
            self.add_spin(ai);
            self.last_collision_ms = Some(now_ms);
            return true;
        }

        false
    }

    fn add_spin(&mut self, paddle: &Paddle) {
        let offset = self.center().y - paddle.center_y();
        self.vel.y += offset * self.spin_factor;
    }

    /// Back to the spawn point with a random serve direction
    pub fn reset(&mut self, rng: &mut GameRng) {
        self.pos = self.spawn;

        let vx = if rng.0.gen_bool(0.5) {
            self.serve_speed.x
        } else {
            -self.serve_speed.x
        };
        let vy = if rng.0.gen_bool(0.5) {
            self.serve_speed.y
        } else {
            -self.serve_speed.y
        };
        self.vel = Vec2::new(vx, vy);
        self.last_collision_ms = None;
    }
}
