//! Pointer-avoidance engine
//!
//! One pure evaluation per pointer-move sample: decide whether the ball
//! flees the pointer and where it lands. The avoidance radius shrinks as
//! the level rises while the flee speed grows; both formulas are the
//! shipped tuning and stay exactly as-is.

use glam::Vec2;

use super::state::PlayArea;
use crate::angle_to_dir;
use crate::consts::*;

/// Distance threshold below which a pointer sample triggers a flee.
/// Clamped at zero: from level 20 up the ball never flees.
#[inline]
pub fn avoidance_radius(level: u32) -> f32 {
    (AVOID_RADIUS_BASE - AVOID_RADIUS_PER_LEVEL * level as f32).max(0.0)
}

/// Magnitude of the ball's positional jump when a flee triggers
#[inline]
pub fn flee_speed(level: u32) -> f32 {
    FLEE_SPEED_BASE + FLEE_SPEED_PER_LEVEL * level as f32
}

/// Evaluate one pointer-move sample.
///
/// Returns the ball's new (clamped) position when the pointer is inside the
/// avoidance radius, `None` otherwise. An unusable area yields `None` so a
/// not-yet-measured surface can never produce NaN coordinates.
pub fn pointer_move(pointer: Vec2, ball: Vec2, level: u32, area: &PlayArea) -> Option<Vec2> {
    if !area.is_valid() {
        return None;
    }

    let delta = pointer - ball;
    let distance = delta.length();
    if distance >= avoidance_radius(level) {
        return None;
    }

    // Retreat along the reversed ball->pointer axis
    let theta = delta.y.atan2(delta.x);
    let fled = ball - angle_to_dir(theta) * flee_speed(level);
    Some(area.clamp(fled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const AREA: PlayArea = PlayArea {
        width: 400.0,
        height: 400.0,
    };

    #[test]
    fn test_tuning_formulas_exact() {
        assert_eq!(avoidance_radius(1), 95.0);
        assert_eq!(avoidance_radius(10), 50.0);
        assert_eq!(avoidance_radius(20), 0.0);
        assert_eq!(avoidance_radius(25), 0.0);

        assert_eq!(flee_speed(1), 32.0);
        assert_eq!(flee_speed(5), 60.0);
        assert_eq!(flee_speed(20), 165.0);
    }

    #[test]
    fn test_far_pointer_no_movement() {
        let ball = Vec2::new(200.0, 200.0);
        // Level 1 radius is 95; 100 away is outside
        let pointer = Vec2::new(300.0, 200.0);
        assert_eq!(pointer_move(pointer, ball, 1, &AREA), None);
        // Exactly on the radius does not trigger
        let pointer = Vec2::new(295.0, 200.0);
        assert_eq!(pointer_move(pointer, ball, 1, &AREA), None);
    }

    #[test]
    fn test_near_pointer_flees_away() {
        let ball = Vec2::new(200.0, 200.0);
        let pointer = Vec2::new(220.0, 210.0);

        let new_pos = pointer_move(pointer, ball, 1, &AREA).expect("should flee");
        // distance 22.36 < 95, speed 32 along atan2(10, 20) reversed
        assert!((new_pos.x - 171.4).abs() < 0.1, "x = {}", new_pos.x);
        assert!((new_pos.y - 185.7).abs() < 0.1, "y = {}", new_pos.y);
        assert_ne!(new_pos, ball);

        // New position is farther from the pointer than before
        assert!(new_pos.distance(pointer) > ball.distance(pointer));
    }

    #[test]
    fn test_flee_clamps_at_edge() {
        let ball = Vec2::new(35.0, 35.0);
        let pointer = Vec2::new(50.0, 50.0);

        let new_pos = pointer_move(pointer, ball, 1, &AREA).expect("should flee");
        assert_eq!(new_pos, Vec2::new(30.0, 30.0));
    }

    #[test]
    fn test_pointer_on_ball_flees_along_x() {
        // atan2(0, 0) is 0, so a dead-center pointer pushes the ball in -x
        let ball = Vec2::new(200.0, 200.0);
        let new_pos = pointer_move(ball, ball, 1, &AREA).expect("should flee");
        assert_eq!(new_pos, Vec2::new(168.0, 200.0));
    }

    #[test]
    fn test_zero_radius_level_never_flees() {
        let ball = Vec2::new(200.0, 200.0);
        // Radius hits 0 at level 20; even a dead-center pointer is ignored
        assert_eq!(pointer_move(ball, ball, 20, &AREA), None);
        assert_eq!(pointer_move(Vec2::new(201.0, 200.0), ball, 30, &AREA), None);
    }

    #[test]
    fn test_invalid_area_is_noop() {
        let ball = Vec2::new(200.0, 200.0);
        let pointer = Vec2::new(205.0, 200.0);
        let degenerate = PlayArea::new(0.0, 0.0);
        assert_eq!(pointer_move(pointer, ball, 1, &degenerate), None);
        let unmeasured = PlayArea::new(-1.0, 400.0);
        assert_eq!(pointer_move(pointer, ball, 1, &unmeasured), None);
    }

    proptest! {
        #[test]
        fn prop_flee_result_always_in_bounds(
            bx in 0.0f32..800.0,
            by in 0.0f32..600.0,
            px in 0.0f32..800.0,
            py in 0.0f32..600.0,
            level in 1u32..30,
            w in 60.0f32..1200.0,
            h in 60.0f32..1200.0,
        ) {
            let area = PlayArea::new(w, h);
            if let Some(p) = pointer_move(
                Vec2::new(px, py),
                Vec2::new(bx, by),
                level,
                &area,
            ) {
                prop_assert!(p.x >= 30.0 && p.x <= w - 30.0);
                prop_assert!(p.y >= 30.0 && p.y <= h - 30.0);
                prop_assert!(p.x.is_finite() && p.y.is_finite());
            }
        }

        #[test]
        fn prop_triggers_only_inside_radius(
            bx in 0.0f32..400.0,
            by in 0.0f32..400.0,
            px in 0.0f32..400.0,
            py in 0.0f32..400.0,
            level in 1u32..30,
        ) {
            let ball = Vec2::new(bx, by);
            let pointer = Vec2::new(px, py);
            let moved = pointer_move(pointer, ball, level, &AREA).is_some();
            let inside = ball.distance(pointer) < avoidance_radius(level);
            prop_assert_eq!(moved, inside);
        }

        #[test]
        fn prop_interior_flee_moves_the_ball(
            // Ball deep enough inside that a level-1 jump can't be fully
            // clamped away on both axes
            bx in 100.0f32..300.0,
            by in 100.0f32..300.0,
            dx in -50.0f32..50.0,
            dy in -50.0f32..50.0,
        ) {
            let ball = Vec2::new(bx, by);
            let pointer = ball + Vec2::new(dx, dy);
            if let Some(p) = pointer_move(pointer, ball, 1, &AREA) {
                prop_assert_ne!(p, ball);
            }
        }
    }
}
