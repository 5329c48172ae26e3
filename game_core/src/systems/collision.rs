use crate::{Ball, Events, Paddle, Side, Time};
use hecs::World;

/// Check ball collisions with both paddles
pub fn check_collisions(world: &mut World, time: &Time, events: &mut Events) {
    // Copy paddles out first so the ball can be borrowed mutably
    let mut player = None;
    let mut ai = None;
    for (_e, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Player => player = Some(*paddle),
            Side::Ai => ai = Some(*paddle),
        }
    }

    let (player, ai) = match (player, ai) {
        (Some(player), Some(ai)) => (player, ai),
        _ => return, // Need both paddles on the table
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.resolve_collision(&player, &ai, time.now_ms()) {
            events.ball_hit_paddle = true;
        }
    }
}
