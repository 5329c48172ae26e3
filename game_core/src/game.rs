//! The engine object: owns every piece of mutable match state

use hecs::World;

use crate::{
    create_ball, create_paddle, step, Ball, Command, Config, Events, GameAction, GameFsm,
    GameMap, GameRng, GameState, InputSnapshot, MatchLength, Paddle, Params, Score, Side, Time,
};

pub struct Game {
    pub world: World,
    pub time: Time,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    match_length: MatchLength,
    fsm: GameFsm,
    winner: Option<Side>,
    paused: bool,
    accumulator: f32,
}

impl Game {
    pub fn new(config: Config, seed: u64) -> Self {
        let map = GameMap::from_config(&config);
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        create_paddle(&mut world, Side::Player, &config);
        create_paddle(&mut world, Side::Ai, &config);
        create_ball(&mut world, Ball::serve(map.ball_spawn(), &config, &mut rng));

        let match_length =
            MatchLength::new(config.match_lengths.clone(), config.default_match_index);

        Self {
            world,
            time: Time::default(),
            map,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            match_length,
            fsm: GameFsm::new(),
            winner: None,
            paused: false,
            accumulator: 0.0,
        }
    }

    pub fn state(&self) -> GameState {
        self.fsm.state()
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn match_length(&self) -> &MatchLength {
        &self.match_length
    }

    pub fn games_to_win(&self) -> u8 {
        self.match_length.games_to_win()
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    /// Advance by one rendered frame of `dt` seconds.
    ///
    /// Commands are applied first, then the simulation runs as many fixed
    /// ticks as the accumulated time allows. Returns the number of ticks run.
    pub fn update(&mut self, input: &InputSnapshot, dt: f32) -> u32 {
        self.events.clear();

        for &command in &input.commands {
            self.handle_command(command);
        }

        if !self.fsm.is_playing() || self.paused {
            self.accumulator = 0.0;
            return 0;
        }

        // Clamp dt after stalls
        self.accumulator += dt.clamp(0.0, Params::MAX_DT);

        let mut ticks = 0;
        while self.accumulator >= Params::FIXED_DT {
            self.accumulator -= Params::FIXED_DT;
            ticks += 1;
            self.tick(input);

            if !self.fsm.is_playing() {
                self.accumulator = 0.0;
                break;
            }
        }
        ticks
    }

    /// One fixed simulation tick. Does nothing outside of live play.
    pub fn tick(&mut self, input: &InputSnapshot) {
        if !self.fsm.is_playing() || self.paused {
            return;
        }

        self.time.advance(Params::FIXED_DT);

        let scorer = step(
            &mut self.world,
            &self.time,
            &self.map,
            &self.config,
            input,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );

        if scorer.is_some() {
            self.check_game_over();
        }
    }

    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Restart => {
                self.restart();
            }
            Command::NextMatchLength if self.fsm.is_game_over() => {
                self.match_length.next();
                self.log_match_length();
            }
            Command::PrevMatchLength if self.fsm.is_game_over() => {
                self.match_length.prev();
                self.log_match_length();
            }
            Command::SelectMatchLength(best_of) if self.fsm.is_game_over() => {
                if self.match_length.select(best_of) {
                    self.log_match_length();
                }
            }
            Command::TogglePause if self.fsm.is_playing() => {
                self.paused = !self.paused;
                log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
            }
            _ => {}
        }
    }

    /// Move to GameOver if either side has enough points
    fn check_game_over(&mut self) {
        if let Some(winner) = self.score.has_winner(self.games_to_win()) {
            if self.fsm.transition(GameAction::MatchWon).success {
                self.winner = Some(winner);
                log::info!(
                    "{} wins best of {} ({} - {})",
                    winner.label(),
                    self.match_length.best_of(),
                    self.score.player,
                    self.score.ai
                );
            }
        }
    }

    /// Start a new match with the current length. Only valid after GameOver.
    pub fn restart(&mut self) -> bool {
        if !self.fsm.transition(GameAction::Restart).success {
            return false;
        }

        self.score.reset();
        self.winner = None;
        self.paused = false;
        self.accumulator = 0.0;

        for (_e, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(&mut self.rng);
        }
        let spawn_y = self.config.paddle_spawn_y();
        for (_e, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.pos.y = spawn_y;
        }

        log::info!("New match: best of {}", self.match_length.best_of());
        true
    }

    fn log_match_length(&self) {
        log::info!(
            "Match length: best of {} (first to {})",
            self.match_length.best_of(),
            self.games_to_win()
        );
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Config::default(), 12345)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn idle() -> InputSnapshot {
        InputSnapshot::new()
    }

    /// Put the ball just past the AI's edge so the next tick scores for the player
    fn ball_past_ai(game: &mut Game) {
        let width = game.map.width;
        for (_e, ball) in game.world.query_mut::<&mut Ball>() {
            ball.pos = Vec2::new(width + 10.0, 300.0);
            ball.vel = Vec2::new(5.0, 0.0);
        }
    }

    fn ball_past_player(game: &mut Game) {
        for (_e, ball) in game.world.query_mut::<&mut Ball>() {
            ball.pos = Vec2::new(-10.0, 300.0);
            ball.vel = Vec2::new(-5.0, 0.0);
        }
    }

    fn end_match_for_player(game: &mut Game) {
        while game.state() == GameState::Playing {
            ball_past_ai(game);
            game.tick(&idle());
        }
    }

    #[test]
    fn test_new_game_starts_playing() {
        let game = Game::default();
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.score, Score::new());
        assert_eq!(game.winner(), None);
        assert_eq!(game.match_length().best_of(), 5);
        assert_eq!(game.games_to_win(), 3);
        assert!(game.ball().is_some());
        assert!(game.paddle(Side::Player).is_some());
        assert!(game.paddle(Side::Ai).is_some());
    }

    #[test]
    fn test_update_runs_fixed_ticks() {
        let mut game = Game::default();
        assert_eq!(game.update(&idle(), Params::FIXED_DT), 1);
        assert_eq!(game.update(&idle(), Params::FIXED_DT * 0.5), 0);
        assert_eq!(game.update(&idle(), 10.0), 6, "dt is clamped to MAX_DT");
    }

    #[test]
    fn test_player_wins_best_of_five() {
        let mut game = Game::default();
        for expected in 1..=3u8 {
            ball_past_ai(&mut game);
            game.tick(&idle());
            assert_eq!(game.score.player, expected);
        }
        assert_eq!(game.state(), GameState::GameOver);
        assert_eq!(game.winner(), Some(Side::Player));
    }

    #[test]
    fn test_ai_wins() {
        let mut game = Game::default();
        for _ in 0..3 {
            ball_past_player(&mut game);
            game.tick(&idle());
        }
        assert_eq!(game.state(), GameState::GameOver);
        assert_eq!(game.winner(), Some(Side::Ai));
        assert_eq!(game.score.ai, 3);
    }

    #[test]
    fn test_no_physics_after_game_over() {
        let mut game = Game::default();
        end_match_for_player(&mut game);
        let before = game.ball().unwrap().pos;
        let now = game.time.now;

        assert_eq!(game.update(&InputSnapshot::held(true, false), 0.05), 0);
        assert_eq!(game.ball().unwrap().pos, before);
        assert_eq!(game.time.now, now);
    }

    #[test]
    fn test_restart_resets_match_but_keeps_length() {
        let mut game = Game::default();
        game.handle_command(Command::NextMatchLength); // ignored while playing
        assert_eq!(game.match_length().best_of(), 5);

        end_match_for_player(&mut game);
        game.handle_command(Command::NextMatchLength);
        assert_eq!(game.games_to_win(), 4);
        assert_eq!(game.state(), GameState::GameOver, "Changing length stays in GameOver");

        for (_e, paddle) in game.world.query_mut::<&mut Paddle>() {
            paddle.pos.y = 0.0;
        }

        game.update(&idle().with_command(Command::Restart), 0.0);

        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.score, Score::new());
        assert_eq!(game.winner(), None);
        assert_eq!(game.match_length().best_of(), 7);
        assert_eq!(game.ball().unwrap().pos, game.map.ball_spawn());
        assert_eq!(game.paddle(Side::Player).unwrap().pos.y, 250.0);
        assert_eq!(game.paddle(Side::Ai).unwrap().pos.y, 250.0);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut game = Game::default();
        ball_past_ai(&mut game);
        game.tick(&idle());
        assert!(!game.restart());
        assert_eq!(game.score.player, 1);
    }

    #[test]
    fn test_select_match_length_directly() {
        let mut game = Game::default();
        end_match_for_player(&mut game);
        game.handle_command(Command::SelectMatchLength(3));
        assert_eq!(game.games_to_win(), 2);
        game.handle_command(Command::SelectMatchLength(9));
        assert_eq!(game.games_to_win(), 2, "Unknown length is ignored");
    }

    #[test]
    fn test_pause_suspends_ticks() {
        let mut game = Game::default();
        game.update(&idle().with_command(Command::TogglePause), 0.0);
        assert!(game.is_paused());
        assert_eq!(game.update(&idle(), 0.05), 0);

        game.update(&idle().with_command(Command::TogglePause), 0.0);
        assert!(!game.is_paused());
        assert!(game.update(&idle(), 0.05) > 0);
    }

    #[test]
    fn test_pause_ignored_after_game_over() {
        let mut game = Game::default();
        end_match_for_player(&mut game);
        game.handle_command(Command::TogglePause);
        assert!(!game.is_paused());
    }

    #[test]
    fn test_events_cleared_each_frame() {
        let mut game = Game::default();
        ball_past_ai(&mut game);
        game.update(&idle(), Params::FIXED_DT);
        assert!(game.events.player_scored);

        game.update(&idle(), Params::FIXED_DT);
        assert!(!game.events.player_scored);
    }
}
