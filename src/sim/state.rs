//! Game state and play-area types
//!
//! The state store owns everything the page mutates: score, level, ball
//! position, theme flag, and the session RNG used for ball relocation.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::theme::Theme;

/// The bounded rectangle the ball lives in.
///
/// Width/height are read from the rendered surface at interaction time and
/// never stored across events. A rectangle too small to fit the ball margin
/// on both axes is unusable and every positioning operation must no-op.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl PlayArea {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Usable for positioning: finite and at least one margin wide per side.
    /// Guards the clamp and random draws below against degenerate rects
    /// (unmeasured surface, zero-size layout).
    pub fn is_valid(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 2.0 * BALL_MARGIN
            && self.height >= 2.0 * BALL_MARGIN
    }

    /// Clamp a position to `[margin, w-margin] x [margin, h-margin]`.
    ///
    /// Callers must check `is_valid` first.
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        Vec2::new(
            pos.x.clamp(BALL_MARGIN, self.width - BALL_MARGIN),
            pos.y.clamp(BALL_MARGIN, self.height - BALL_MARGIN),
        )
    }

    /// Uniform random position within the margin bounds, independent per axis.
    ///
    /// Callers must check `is_valid` first.
    pub fn random_pos(&self, rng: &mut Pcg32) -> Vec2 {
        Vec2::new(
            rng.random_range(BALL_MARGIN..=self.width - BALL_MARGIN),
            rng.random_range(BALL_MARGIN..=self.height - BALL_MARGIN),
        )
    }
}

fn detached_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete page state (deterministic for a given seed + event sequence)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Captures so far, never decremented
    score: u32,
    /// Starts at 1, +1 every third capture, unbounded
    level: u32,
    /// Ball position in play-area-local coordinates
    ball_pos: Vec2,
    /// Cosmetic only, independent of game state
    theme: Theme,
    #[serde(skip, default = "detached_rng")]
    rng: Pcg32,
}

impl GameState {
    /// Create session state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            score: 0,
            level: 1,
            ball_pos: Vec2::new(BALL_START_X, BALL_START_Y),
            theme: Theme::default(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn ball_pos(&self) -> Vec2 {
        self.ball_pos
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Overwrite the ball position. Callers pass already-clamped coordinates.
    pub fn set_ball_pos(&mut self, pos: Vec2) {
        self.ball_pos = pos;
    }

    /// Award one capture; returns the new score.
    pub fn increment_score(&mut self) -> u32 {
        self.score += 1;
        self.score
    }

    /// Advance the level when the score has just reached a positive multiple
    /// of [`CAPTURES_PER_LEVEL`]. Returns true when a level-up fired.
    pub fn maybe_advance_level(&mut self) -> bool {
        if self.score > 0 && self.score % CAPTURES_PER_LEVEL == 0 {
            self.level += 1;
            true
        } else {
            false
        }
    }

    /// Flip the theme flag. Touches no other state.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub(crate) fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }
}
