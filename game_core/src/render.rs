//! Frame composition on top of an abstract drawing surface

use glam::Vec2;

use crate::{Aabb, Game, GameState, Side};

/// Linear RGBA, each channel in `0.0..=1.0`
pub type Color = [f32; 4];

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
pub const GREEN: Color = [0.0, 1.0, 0.0, 1.0];
pub const RED: Color = [1.0, 0.0, 0.0, 1.0];
pub const OVERLAY: Color = [0.0, 0.0, 0.0, 128.0 / 255.0];

pub const TEXT_LARGE: f32 = 48.0;
pub const TEXT_NORMAL: f32 = 30.0;
pub const TEXT_SMALL: f32 = 20.0;

/// Where a text position sits relative to the rendered string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

/// Drawing primitives a frontend provides. Shapes are painted in call order.
pub trait Graphics {
    fn fill_rect(&mut self, color: Color, rect: Aabb);
    fn fill_ellipse(&mut self, color: Color, rect: Aabb);
    fn line(&mut self, color: Color, from: Vec2, to: Vec2);
    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Color, anchor: Anchor);
}

pub const GAME_OVER_CONTROLS: [&str; 3] = [
    "↑/↓ - Change match length",
    "ENTER or R - Play Again",
    "ESC - Exit",
];

/// Draw one frame of the current game state
pub fn draw(game: &Game, gfx: &mut dyn Graphics) {
    draw_field(game, gfx);

    match game.state() {
        GameState::Playing => draw_hud(game, gfx),
        GameState::GameOver => draw_game_over(game, gfx),
    }
}

fn draw_field(game: &Game, gfx: &mut dyn Graphics) {
    let (w, h) = (game.map.width, game.map.height);

    for side in [Side::Player, Side::Ai] {
        if let Some(paddle) = game.paddle(side) {
            gfx.fill_rect(WHITE, paddle.rect());
        }
    }
    if let Some(ball) = game.ball() {
        gfx.fill_ellipse(WHITE, ball.rect());
    }

    gfx.line(WHITE, Vec2::new(w / 2.0, 0.0), Vec2::new(w / 2.0, h));

    gfx.text(
        &game.score.player.to_string(),
        Vec2::new(w / 4.0, 20.0),
        TEXT_NORMAL,
        WHITE,
        Anchor::TopLeft,
    );
    gfx.text(
        &game.score.ai.to_string(),
        Vec2::new(w * 3.0 / 4.0, 20.0),
        TEXT_NORMAL,
        WHITE,
        Anchor::TopLeft,
    );
}

fn draw_hud(game: &Game, gfx: &mut dyn Graphics) {
    let (w, h) = (game.map.width, game.map.height);

    gfx.text(
        &format!("Best of {}", game.match_length().best_of()),
        Vec2::new(10.0, h - 30.0),
        TEXT_SMALL,
        WHITE,
        Anchor::TopLeft,
    );

    if game.is_paused() {
        gfx.text("PAUSED", Vec2::new(w / 2.0, h / 2.0), TEXT_LARGE, WHITE, Anchor::Center);
    }
}

fn draw_game_over(game: &Game, gfx: &mut dyn Graphics) {
    let (w, h) = (game.map.width, game.map.height);
    let cx = w / 2.0;

    gfx.fill_rect(OVERLAY, Aabb::new(Vec2::ZERO, Vec2::new(w, h)));

    if let Some(winner) = game.winner() {
        let color = match winner {
            Side::Player => GREEN,
            Side::Ai => RED,
        };
        gfx.text(
            &format!("{} Wins!", winner.label()),
            Vec2::new(cx, h / 3.0),
            TEXT_LARGE,
            color,
            Anchor::Center,
        );
    }

    gfx.text(
        &format!("Final Score: {} - {}", game.score.player, game.score.ai),
        Vec2::new(cx, h / 2.0),
        TEXT_NORMAL,
        WHITE,
        Anchor::Center,
    );

    let options_y = h / 2.0 + 60.0;
    gfx.text(
        "Choose Match Length:",
        Vec2::new(cx, options_y),
        TEXT_NORMAL,
        WHITE,
        Anchor::Center,
    );

    let match_length = game.match_length();
    for (i, best_of) in match_length.options().iter().enumerate() {
        let color = if i == match_length.selected_index() {
            GREEN
        } else {
            WHITE
        };
        gfx.text(
            &format!("Best of {}", best_of),
            Vec2::new(cx, options_y + 40.0 + i as f32 * 25.0),
            TEXT_SMALL,
            color,
            Anchor::Center,
        );
    }

    let controls_y = options_y + 140.0;
    for (i, line) in GAME_OVER_CONTROLS.iter().enumerate() {
        gfx.text(
            line,
            Vec2::new(cx, controls_y + i as f32 * 25.0),
            TEXT_SMALL,
            WHITE,
            Anchor::Center,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ball, Command, InputSnapshot};

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Rect(Color, Aabb),
        Ellipse(Color, Aabb),
        Line(Color, Vec2, Vec2),
        Text(String, Vec2, f32, Color, Anchor),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Graphics for Recorder {
        fn fill_rect(&mut self, color: Color, rect: Aabb) {
            self.ops.push(Op::Rect(color, rect));
        }
        fn fill_ellipse(&mut self, color: Color, rect: Aabb) {
            self.ops.push(Op::Ellipse(color, rect));
        }
        fn line(&mut self, color: Color, from: Vec2, to: Vec2) {
            self.ops.push(Op::Line(color, from, to));
        }
        fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Color, anchor: Anchor) {
            self.ops.push(Op::Text(text.to_string(), pos, size, color, anchor));
        }
    }

    impl Recorder {
        fn find_text(&self, wanted: &str) -> Option<&Op> {
            self.ops
                .iter()
                .find(|op| matches!(op, Op::Text(t, ..) if t == wanted))
        }
    }

    fn finish_for(game: &mut Game, side: Side) {
        let x = match side {
            Side::Player => game.map.width + 10.0,
            Side::Ai => -10.0,
        };
        while game.state() == GameState::Playing {
            for (_e, ball) in game.world.query_mut::<&mut Ball>() {
                ball.pos = Vec2::new(x, 300.0);
            }
            game.tick(&InputSnapshot::new());
        }
    }

    #[test]
    fn test_playing_frame() {
        let game = Game::default();
        let mut gfx = Recorder::default();
        draw(&game, &mut gfx);

        let paddle = game.paddle(Side::Player).unwrap();
        assert_eq!(gfx.ops[0], Op::Rect(WHITE, paddle.rect()));
        assert!(matches!(&gfx.ops[2], Op::Ellipse(c, _) if *c == WHITE));
        assert_eq!(
            gfx.ops[3],
            Op::Line(WHITE, Vec2::new(400.0, 0.0), Vec2::new(400.0, 600.0))
        );
        assert_eq!(
            gfx.find_text("0"),
            Some(&Op::Text(
                "0".into(),
                Vec2::new(200.0, 20.0),
                TEXT_NORMAL,
                WHITE,
                Anchor::TopLeft
            ))
        );
        assert_eq!(
            gfx.find_text("Best of 5"),
            Some(&Op::Text(
                "Best of 5".into(),
                Vec2::new(10.0, 570.0),
                TEXT_SMALL,
                WHITE,
                Anchor::TopLeft
            ))
        );
        assert!(gfx.find_text("PAUSED").is_none());
        assert!(!gfx.ops.iter().any(|op| matches!(op, Op::Rect(c, _) if *c == OVERLAY)));
    }

    #[test]
    fn test_paused_banner() {
        let mut game = Game::default();
        game.update(&InputSnapshot::new().with_command(Command::TogglePause), 0.0);
        let mut gfx = Recorder::default();
        draw(&game, &mut gfx);
        assert!(gfx.find_text("PAUSED").is_some());
    }

    #[test]
    fn test_game_over_frame() {
        let mut game = Game::default();
        finish_for(&mut game, Side::Player);
        let mut gfx = Recorder::default();
        draw(&game, &mut gfx);

        // Field first, then the dimming overlay on top
        let overlay = gfx
            .ops
            .iter()
            .position(|op| matches!(op, Op::Rect(c, _) if *c == OVERLAY))
            .unwrap();
        let ball = gfx
            .ops
            .iter()
            .position(|op| matches!(op, Op::Ellipse(..)))
            .unwrap();
        assert!(ball < overlay);

        assert_eq!(
            gfx.find_text("Player Wins!"),
            Some(&Op::Text(
                "Player Wins!".into(),
                Vec2::new(400.0, 200.0),
                TEXT_LARGE,
                GREEN,
                Anchor::Center
            ))
        );
        assert!(gfx.find_text("Final Score: 3 - 0").is_some());
        assert!(gfx.find_text("Choose Match Length:").is_some());
        assert!(matches!(gfx.find_text("Best of 5"), Some(Op::Text(_, _, _, c, _)) if *c == GREEN));
        assert!(matches!(gfx.find_text("Best of 3"), Some(Op::Text(_, _, _, c, _)) if *c == WHITE));
        assert_eq!(
            gfx.find_text("ESC - Exit"),
            Some(&Op::Text(
                "ESC - Exit".into(),
                Vec2::new(400.0, 300.0 + 60.0 + 140.0 + 50.0),
                TEXT_SMALL,
                WHITE,
                Anchor::Center
            ))
        );
    }

    #[test]
    fn test_ai_win_is_red() {
        let mut game = Game::default();
        finish_for(&mut game, Side::Ai);
        let mut gfx = Recorder::default();
        draw(&game, &mut gfx);
        assert!(matches!(gfx.find_text("AI Wins!"), Some(Op::Text(_, _, _, c, _)) if *c == RED));
    }
}
