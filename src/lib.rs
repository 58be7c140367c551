//! Pocket Run - a fixed-timestep 2D billiards simulation engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//!
//! Rendering and input are deliberately not part of this crate. A consumer
//! drives the engine by calling [`sim::GameState::update`] once per fixed
//! tick and polls the public state (balls, pockets, score, aim) each frame.

pub mod sim;

pub use sim::{Ball, GameEvent, GameState, Pocket};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (~60 Hz)
    pub const SIM_DT: f32 = 0.016;

    /// Table dimensions
    pub const TABLE_WIDTH: f32 = 1200.0;
    pub const TABLE_HEIGHT: f32 = 800.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 20.0;
    pub const BALL_MASS: f32 = 1.0;
    /// Total balls on the table, cue ball included
    pub const BALLS_NUMBER: usize = 16;

    /// Pocket capture radius
    pub const POCKET_RADIUS: f32 = 30.0;

    /// Per-tick velocity retention (rolling friction)
    pub const FRICTION: f32 = 0.995;
    /// Balls whose per-tick velocity decay is smaller than this snap to a full stop
    pub const STOP_THRESHOLD: f32 = 0.05;

    /// Triangular rack layout
    pub const RACK_ROWS: usize = 6;
    /// Rack apex, as fractions of the table size
    pub const RACK_ANCHOR_X: f32 = 0.33;
    pub const RACK_ANCHOR_Y: f32 = 0.5;
    /// Gap factor between racked balls (slightly more than touching)
    pub const RACK_SPACING_FACTOR: f32 = 1.05;

    /// Cue ball start, as fractions of the table size
    pub const CUE_START_X: f32 = 0.75;
    pub const CUE_START_Y: f32 = 0.5;

    /// Shot force range accepted by the core
    pub const MAX_SHOT_FORCE: f32 = 500.0;
    /// Velocity per unit of shot force
    pub const SHOT_IMPULSE_SCALE: f32 = 2.0;
}
