//! Per-tick orchestration
//!
//! One `update` call = one fixed simulation tick: advance physics over the
//! whole ball set, then apply the table rules (pocket detection, scoring,
//! restart conditions).

use serde::{Deserialize, Serialize};

use super::physics;
use super::state::GameState;
use crate::consts::SIM_DT;

/// What happened during one tick, for consumers that want notifications
/// instead of polling state. Purely informational: gameplay never depends on
/// whether the caller reads these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An object ball dropped into a pocket; score went up by one
    BallPocketed { id: u32 },
    /// The cue ball dropped into a pocket (scratch)
    CueBallPocketed,
    /// Every object ball is gone, only the cue ball remained
    TableCleared,
    /// The rack was rebuilt and the score reset
    RackReset,
}

impl GameState {
    /// Advance the simulation by one fixed tick (Δt = [`SIM_DT`]).
    ///
    /// Order matters: physics first, then pocket detection on the settled
    /// positions, then the restart check on whatever is left on the table.
    pub fn update(&mut self) -> Vec<GameEvent> {
        self.time_ticks += 1;
        physics::step(&mut self.balls, SIM_DT);

        // Pocket object balls. The cue ball is never removed here; scratching
        // it falls through to the restart check instead.
        let cue_id = self.cue_ball_id;
        let pockets = self.pockets;
        let mut pocketed: Vec<u32> = Vec::new();
        self.balls.retain(|ball| {
            let captured =
                Some(ball.id) != cue_id && pockets.iter().any(|p| p.captures(ball));
            if captured {
                pocketed.push(ball.id);
            }
            !captured
        });

        self.score += pocketed.len() as u32;
        if !pocketed.is_empty() {
            log::debug!(
                "pocketed {} ball(s) on tick {}, score now {}",
                pocketed.len(),
                self.time_ticks,
                self.score
            );
        }

        let mut events: Vec<GameEvent> = pocketed
            .into_iter()
            .map(|id| GameEvent::BallPocketed { id })
            .collect();

        // Restart conditions, checked after removal: a scratched cue ball, or
        // a cleared table (the cue ball is the single remaining ball).
        if let Some(cue) = self.cue_ball() {
            let scratched = self.pockets.iter().any(|p| p.captures(cue));
            let cleared = self.balls.len() == 1;
            if scratched || cleared {
                events.push(if scratched {
                    GameEvent::CueBallPocketed
                } else {
                    GameEvent::TableCleared
                });
                log::info!(
                    "re-racking on tick {} ({})",
                    self.time_ticks,
                    if scratched { "scratch" } else { "table cleared" }
                );
                self.restart_game();
                events.push(GameEvent::RackReset);
            }
        }

        events
    }
}
