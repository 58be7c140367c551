//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (cosmetic ball colors)
//! - Stable iteration order (rack-build order, by entity ID)
//! - No rendering or platform dependencies

pub mod physics;
pub mod state;
pub mod tick;

pub use state::{Ball, GameState, Pocket};
pub use tick::GameEvent;
