//! Headless autoplay driver
//!
//! Runs the engine without a renderer: a naive bot aims the cue ball at the
//! nearest object ball whenever the table has settled, shoots, and lets the
//! physics play out. Handy for watching the event stream and eyeballing
//! simulation behavior from the log.
//!
//! Usage: `pocket-run [seed] [ticks]`

use glam::Vec2;
use pocket_run::consts::MAX_SHOT_FORCE;
use pocket_run::sim::{GameEvent, GameState};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or_else(wall_clock_seed);
    let max_ticks: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(60_000);

    log::info!("Game initialized with seed: {seed}");

    let mut game = GameState::new(seed);
    game.set_force(MAX_SHOT_FORCE * 0.8);

    let mut shots = 0u32;
    let mut racks = 0u32;
    for _ in 0..max_ticks {
        if table_settled(&game) {
            if let Some(target) = nearest_object_ball(&game) {
                game.set_shooting_direction(target);
                game.shoot_ball();
                shots += 1;
            }
        }

        for event in game.update() {
            match event {
                GameEvent::BallPocketed { id } => {
                    log::info!("ball {id} pocketed, score {}", game.score);
                }
                GameEvent::CueBallPocketed => log::info!("scratch! cue ball pocketed"),
                GameEvent::TableCleared => log::info!("table cleared"),
                GameEvent::RackReset => {
                    racks += 1;
                    log::info!("new rack");
                }
            }
        }
    }

    println!(
        "{} shots over {} ticks: final score {}, {} re-rack(s)",
        shots, game.time_ticks, game.score, racks
    );
}

fn wall_clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn table_settled(game: &GameState) -> bool {
    game.balls.iter().all(|b| b.vel == Vec2::ZERO)
}

/// Aim target for the bot: the object ball closest to the cue ball
fn nearest_object_ball(game: &GameState) -> Option<Vec2> {
    let cue = game.cue_ball()?;
    game.balls
        .iter()
        .filter(|b| Some(b.id) != game.cue_ball_id())
        .min_by(|a, b| {
            (a.pos - cue.pos)
                .length_squared()
                .total_cmp(&(b.pos - cue.pos).length_squared())
        })
        .map(|b| b.pos)
}
