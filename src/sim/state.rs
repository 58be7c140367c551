//! Game state and core simulation types
//!
//! The [`GameState`] owns the authoritative ball collection. Physics gets a
//! mutable slice of it once per tick; nothing else ever holds onto it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Cosmetic ball color, linear RGB in [0, 1]. Display-only, never feeds back
/// into the simulation.
pub type Color = [f32; 3];

/// The cue ball is always plain white
pub const CUE_BALL_COLOR: Color = [1.0, 1.0, 1.0];

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Stable identity; iteration order is rack-build order
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub mass: f32,
    pub color: Color,
}

impl Ball {
    pub fn new(id: u32, pos: Vec2, color: Color) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            mass: BALL_MASS,
            color,
        }
    }
}

/// A pocket: circular capture zone at a table corner or long-edge midpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pocket {
    pub pos: Vec2,
    pub radius: f32,
}

impl Pocket {
    /// True once the ball's center is inside the capture zone
    pub fn captures(&self, ball: &Ball) -> bool {
        (ball.pos - self.pos).length() < self.radius
    }
}

/// Four corners plus the midpoints of the two long edges
fn table_pockets() -> [Pocket; 6] {
    let radius = POCKET_RADIUS;
    [
        Pocket { pos: Vec2::new(0.0, 0.0), radius },
        Pocket { pos: Vec2::new(TABLE_WIDTH / 2.0, 0.0), radius },
        Pocket { pos: Vec2::new(TABLE_WIDTH, 0.0), radius },
        Pocket { pos: Vec2::new(0.0, TABLE_HEIGHT), radius },
        Pocket { pos: Vec2::new(TABLE_WIDTH / 2.0, TABLE_HEIGHT), radius },
        Pocket { pos: Vec2::new(TABLE_WIDTH, TABLE_HEIGHT), radius },
    ]
}

/// Complete game state (deterministic per seed, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG, used only for cosmetic rack colors
    rng: Pcg32,
    /// Balls in rack-build order; the cue ball is last after setup/reset
    pub balls: Vec<Ball>,
    pub pockets: [Pocket; 6],
    /// Pocketed object balls this run
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) cue_ball_id: Option<u32>,
    /// Unit aim direction; present only between aiming and the shot
    pub(crate) aim: Option<Vec2>,
    force: f32,
    next_id: u32,
}

impl GameState {
    /// Create a racked table ready for the first shot
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            balls: Vec::with_capacity(BALLS_NUMBER),
            pockets: table_pockets(),
            score: 0,
            time_ticks: 0,
            cue_ball_id: None,
            aim: None,
            force: 0.0,
            next_id: 1,
        };
        state.setup_balls();
        state
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Build the triangular rack left-of-center, then drop the cue ball at
    /// its fixed start. The cue ball is always the last push.
    fn setup_balls(&mut self) {
        let spacing = BALL_RADIUS * 2.0 * RACK_SPACING_FACTOR;
        let anchor = Vec2::new(TABLE_WIDTH * RACK_ANCHOR_X, TABLE_HEIGHT * RACK_ANCHOR_Y);

        let mut placed = 0;
        'rack: for row in 0..RACK_ROWS {
            for col in 0..=row {
                if placed == BALLS_NUMBER - 1 {
                    break 'rack;
                }
                let pos = Vec2::new(
                    anchor.x - row as f32 * spacing,
                    anchor.y - row as f32 * spacing / 2.0 + col as f32 * spacing,
                );
                let color = [self.rng.random(), self.rng.random(), self.rng.random()];
                let id = self.next_entity_id();
                self.balls.push(Ball::new(id, pos, color));
                placed += 1;
            }
        }

        let id = self.next_entity_id();
        let start = Vec2::new(TABLE_WIDTH * CUE_START_X, TABLE_HEIGHT * CUE_START_Y);
        self.balls.push(Ball::new(id, start, CUE_BALL_COLOR));
        self.cue_ball_id = Some(id);
    }

    /// Full reset: fresh rack, score and aim cleared. Reaches the same
    /// target state no matter what preceded it.
    pub(crate) fn restart_game(&mut self) {
        self.balls.clear();
        self.score = 0;
        self.aim = None;
        self.setup_balls();
    }

    pub fn cue_ball_id(&self) -> Option<u32> {
        self.cue_ball_id
    }

    pub fn cue_ball(&self) -> Option<&Ball> {
        let id = self.cue_ball_id?;
        self.balls.iter().find(|b| b.id == id)
    }

    /// Current aim as a unit vector, if a drag established one
    pub fn aim(&self) -> Option<Vec2> {
        self.aim
    }

    pub fn force(&self) -> f32 {
        self.force
    }

    /// Set the shot force. Clamped here as well as in the UI, so a rogue
    /// caller cannot launch balls at escape velocity.
    pub fn set_force(&mut self, force: f32) {
        self.force = force.clamp(0.0, MAX_SHOT_FORCE);
    }

    /// Aim from the cue ball toward a target point (e.g. the drag release
    /// position). No-op without a cue ball; a target on top of the cue ball
    /// has no direction and clears the aim instead.
    pub fn set_shooting_direction(&mut self, target: Vec2) {
        let Some(cue_pos) = self.cue_ball().map(|b| b.pos) else {
            return;
        };
        self.aim = (target - cue_pos).try_normalize();
    }

    /// Fire the cue ball along the current aim. Consumes the aim: the next
    /// shot needs a fresh [`set_shooting_direction`](Self::set_shooting_direction).
    /// No-op unless both a cue ball and an aim exist.
    pub fn shoot_ball(&mut self) {
        let (Some(id), Some(aim)) = (self.cue_ball_id, self.aim) else {
            return;
        };
        if let Some(ball) = self.balls.iter_mut().find(|b| b.id == id) {
            ball.vel = aim * self.force * SHOT_IMPULSE_SCALE;
        }
        self.aim = None;
    }
}
