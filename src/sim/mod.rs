//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Event-driven only (one evaluation per input event, no internal clock)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod avoid;
pub mod capture;
pub mod state;

pub use avoid::{avoidance_radius, flee_speed, pointer_move};
pub use capture::{CaptureOutcome, capture};
pub use state::{GameState, PlayArea};
