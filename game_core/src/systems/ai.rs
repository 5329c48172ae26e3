use crate::{Ball, Config, GameMap, GameRng, Paddle, Side};
use hecs::World;

/// Drive the AI paddle one tick toward the ball
pub fn track_ai(world: &mut World, map: &GameMap, config: &Config, rng: &mut GameRng) {
    let ball = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => *ball,
        None => return,
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Ai {
            paddle.auto_track(&ball, map.height, &config.ai, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn paddle_y(world: &World, side: Side) -> f32 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.pos.y)
            .unwrap()
    }

    #[test]
    fn test_only_ai_paddle_tracks() {
        let config = Config::new();
        let map = GameMap::from_config(&config);
        let mut world = World::new();
        let mut rng = GameRng::new(3);
        create_paddle(&mut world, Side::Player, &config);
        create_paddle(&mut world, Side::Ai, &config);
        create_ball(
            &mut world,
            Ball::new(Vec2::new(600.0, 40.0), Vec2::new(5.0, -3.0), &config),
        );

        track_ai(&mut world, &map, &config, &mut rng);

        assert_eq!(paddle_y(&world, Side::Ai), 250.0 - config.ai_max_speed);
        assert_eq!(paddle_y(&world, Side::Player), 250.0);
    }

    #[test]
    fn test_ai_catches_up_over_many_ticks() {
        let config = Config::new();
        let map = GameMap::from_config(&config);
        let mut world = World::new();
        let mut rng = GameRng::new(3);
        create_paddle(&mut world, Side::Ai, &config);
        create_ball(
            &mut world,
            Ball::new(Vec2::new(600.0, 520.0), Vec2::new(5.0, 0.0), &config),
        );

        for _ in 0..60 {
            track_ai(&mut world, &map, &config, &mut rng);
        }

        let center = paddle_y(&world, Side::Ai) + config.paddle_height / 2.0;
        assert!((center - 523.5).abs() <= config.ai.dead_zone + config.ai.jitter_step);
    }

    #[test]
    fn test_no_ball_no_movement() {
        let config = Config::new();
        let map = GameMap::from_config(&config);
        let mut world = World::new();
        let mut rng = GameRng::new(3);
        create_paddle(&mut world, Side::Ai, &config);

        track_ai(&mut world, &map, &config, &mut rng);
        assert_eq!(paddle_y(&world, Side::Ai), 250.0);
    }
}
