//! Scoring rules shared across games.

/// Streak threshold at which the point multiplier kicks in.
pub const STREAK_MULTIPLIER_THRESHOLD: u32 = 5;

/// Points per correct quiz answer (before the end-of-session time bonus).
pub const QUIZ_POINTS_PER_CORRECT: u32 = 10;

/// Scale base points by the current streak. At a streak of 5 or more the
/// award is 1.5x, computed in integer arithmetic (`base * 3 / 2`,
/// truncating). `streak` is the value *after* counting the answer being
/// scored.
pub fn streak_scaled_points(base: u32, streak: u32) -> u32 {
    if streak >= STREAK_MULTIPLIER_THRESHOLD {
        base * 3 / 2
    } else {
        base
    }
}

/// End-of-session time bonus from the average response time in seconds:
/// `max(0, (10 - avg) * 10)`, truncated. Slow play never earns a bonus
/// and never costs points. The same formula applies to every game that
/// grants a time bonus.
pub fn time_bonus(avg_response_secs: f64) -> u32 {
    let bonus = (10.0 - avg_response_secs) * 10.0;
    if bonus <= 0.0 {
        0
    } else {
        bonus as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_multiplier_below_threshold() {
        for streak in 0..5 {
            assert_eq!(streak_scaled_points(10, streak), 10);
            assert_eq!(streak_scaled_points(20, streak), 20);
        }
    }

    #[test]
    fn test_multiplier_at_threshold_and_above() {
        assert_eq!(streak_scaled_points(10, 5), 15);
        assert_eq!(streak_scaled_points(20, 5), 30);
        assert_eq!(streak_scaled_points(10, 12), 15);
    }

    #[test]
    fn test_multiplier_truncates_odd_bases() {
        // 15 * 3 / 2 = 22 in integer arithmetic
        assert_eq!(streak_scaled_points(15, 5), 22);
    }

    #[test]
    fn test_time_bonus_fast_play() {
        assert_eq!(time_bonus(0.0), 100);
        assert_eq!(time_bonus(2.5), 75);
        // Fractional results truncate: (10 - 3.25) * 10 = 67.5
        assert_eq!(time_bonus(3.25), 67);
    }

    #[test]
    fn test_time_bonus_boundary() {
        assert_eq!(time_bonus(10.0), 0);
        assert_eq!(time_bonus(60.0), 0);
    }

    #[test]
    fn test_time_bonus_never_negative() {
        assert_eq!(time_bonus(1000.0), 0);
    }
}
