//! Catchball - a "discontinued product" notice page with a mouse-dodging ball
//!
//! Core modules:
//! - `sim`: Deterministic game logic (avoidance, capture, state)
//! - `effects`: Fire-and-forget celebration effects (confetti)
//! - `theme`: Light/dark theme flag

pub mod effects;
pub mod sim;
pub mod theme;

pub use effects::ConfettiBurst;
pub use sim::{GameState, PlayArea};
pub use theme::Theme;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Margin keeping the ball's drawn radius fully inside the play area
    pub const BALL_MARGIN: f32 = 30.0;
    /// Ball spawn position at session start
    pub const BALL_START_X: f32 = 200.0;
    pub const BALL_START_Y: f32 = 200.0;

    /// Avoidance radius `R(level) = max(0, BASE - PER_LEVEL * level)`
    pub const AVOID_RADIUS_BASE: f32 = 100.0;
    pub const AVOID_RADIUS_PER_LEVEL: f32 = 5.0;

    /// Flee speed `S(level) = BASE + PER_LEVEL * level`
    pub const FLEE_SPEED_BASE: f32 = 25.0;
    pub const FLEE_SPEED_PER_LEVEL: f32 = 7.0;

    /// Captures needed to advance one level
    pub const CAPTURES_PER_LEVEL: u32 = 3;

    /// Confetti burst fired on every capture
    pub const CONFETTI_PARTICLES: u32 = 150;
    pub const CONFETTI_SPREAD: f32 = 70.0;
    pub const CONFETTI_ORIGIN_Y: f32 = 0.6;
}

/// Unit vector at the given angle (radians)
#[inline]
pub fn angle_to_dir(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}
