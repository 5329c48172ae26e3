pub mod audio;
pub mod clock;
pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use audio::*;
pub use clock::*;
pub use components::*;
pub use config::*;
pub use fsm::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one fixed tick of the rally. Returns the side that scored, if any.
///
/// Winning the match is decided by the caller; the AI still gets its
/// tracking step on the tick that ends the match.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &Time,
    map: &GameMap,
    config: &Config,
    input: &InputSnapshot,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    // 1. Player paddle from held keys
    move_player_paddle(world, input, map);

    // 2. Move ball (top/bottom walls)
    move_ball(world, events);

    // 3. Ball vs paddles
    check_collisions(world, time, events);

    // 4. Ball exited arena
    let scorer = check_scoring(world, map, score, events, rng);

    // 5. AI paddle
    track_ai(world, map, config, rng);

    scorer
}

/// Helper to create a paddle entity at its spawn position
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(side, config),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
