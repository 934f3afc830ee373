//! Capture handling and level progression
//!
//! A capture is a click on the ball: score +1, level +1 every third point,
//! ball relocated uniformly at random, confetti handed to the shell.

use super::state::{GameState, PlayArea};
use crate::effects::ConfettiBurst;
use glam::Vec2;

/// Result of a capture, already committed to the state store
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureOutcome {
    pub score: u32,
    pub level: u32,
    pub ball_pos: Vec2,
    /// True when this capture fired the level -> level + 1 transition
    pub leveled_up: bool,
    /// Celebration config for the effects renderer (fire-and-forget)
    pub burst: ConfettiBurst,
}

/// Process one click on the ball.
///
/// Commits score, level, and the relocated ball position to `state` and
/// returns the outcome. An unusable area returns `None` and leaves the
/// state untouched (surface not measured yet).
pub fn capture(state: &mut GameState, area: &PlayArea) -> Option<CaptureOutcome> {
    if !area.is_valid() {
        return None;
    }

    let score = state.increment_score();
    let leveled_up = state.maybe_advance_level();
    let ball_pos = area.random_pos(state.rng_mut());
    state.set_ball_pos(ball_pos);

    Some(CaptureOutcome {
        score,
        level: state.level(),
        ball_pos,
        leveled_up,
        burst: ConfettiBurst::default(),
    })
}
