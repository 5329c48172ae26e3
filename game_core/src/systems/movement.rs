use crate::{Ball, Events, GameMap, InputSnapshot, Paddle, Side};
use hecs::World;

/// Apply the player's held keys to their paddle
pub fn move_player_paddle(world: &mut World, input: &InputSnapshot, map: &GameMap) {
    let dir = input.dir();
    if dir == 0 {
        return;
    }

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            let delta = dir as f32 * paddle.speed;
            paddle.move_by(delta, map.height);
        }
    }
}

/// Move ball based on velocity, bouncing off top and bottom walls
pub fn move_ball(world: &mut World, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.advance() {
            events.ball_hit_wall = true;
        }
    }
}
