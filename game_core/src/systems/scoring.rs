use crate::{Ball, Events, GameMap, GameRng, Score, Side};
use hecs::World;

/// Check if ball left the arena (scoring). Returns who took the point.
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    let mut scorer = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let side = if map.is_past_left(ball.pos.x) {
            Side::Ai
        } else if map.is_past_right(ball.pos.x) {
            Side::Player
        } else {
            continue;
        };

        score.increment(side);
        events.record_score(side);
        log::debug!(
            "{} scores ({} - {})",
            side.label(),
            score.player,
            score.ai
        );

        ball.reset(rng);
        scorer = Some(side);
    }

    scorer
}
