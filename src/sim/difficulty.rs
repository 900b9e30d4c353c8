//! Difficulty curve
//!
//! Difficulty climbs by a fixed increment per cleared round and drops by
//! twice that after a lost life. The cap is checked *before* adding, so the
//! value can overshoot the nominal cap by one increment.

use crate::tuning::Tuning;

/// Difficulty after a completed round
pub fn next_difficulty(difficulty: u32, tuning: &Tuning) -> u32 {
    if difficulty <= tuning.difficulty_cap {
        difficulty + tuning.difficulty_increment
    } else {
        difficulty
    }
}

/// Difficulty after a life is lost
pub fn reduced_difficulty(difficulty: u32, tuning: &Tuning) -> u32 {
    let penalty = tuning.difficulty_increment * 2;
    if difficulty > penalty {
        (difficulty - penalty).max(tuning.base_difficulty)
    } else {
        tuning.base_difficulty
    }
}

/// Bombs dropped in a round played at `difficulty`
pub fn bomb_count(difficulty: u32, tuning: &Tuning) -> u32 {
    (difficulty as f32 * tuning.bomb_multiplier).floor() as u32 + tuning.base_bombs
}

/// Downward speed of a freshly dropped bomb
pub fn bomb_speed(difficulty: u32, tuning: &Tuning) -> f32 {
    tuning.bomb_base_speed + difficulty as f32
}

/// Horizontal speed of the bomber while dropping
pub fn bomber_speed(difficulty: u32, tuning: &Tuning) -> f32 {
    tuning.bomber_base_speed + difficulty as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_classic_curve_overshoots_cap_once() {
        let tuning = Tuning::classic();
        let mut d = tuning.base_difficulty;
        let mut seen = vec![d];
        for _ in 0..12 {
            d = next_difficulty(d, &tuning);
            seen.push(d);
        }
        assert_eq!(
            &seen[..11],
            &[10, 30, 50, 70, 90, 110, 130, 150, 170, 190, 190]
        );
        assert_eq!(d, 190);
    }

    #[test]
    fn test_reduction_is_non_linear() {
        let tuning = Tuning::classic();
        assert_eq!(reduced_difficulty(190, &tuning), 150);
        assert_eq!(reduced_difficulty(50, &tuning), 10);
        assert_eq!(reduced_difficulty(41, &tuning), 10);
        assert_eq!(reduced_difficulty(40, &tuning), 10);
        assert_eq!(reduced_difficulty(30, &tuning), 10);
        assert_eq!(reduced_difficulty(10, &tuning), 10);

        let gentle = Tuning::gentle();
        assert_eq!(reduced_difficulty(41, &gentle), 1);
        assert_eq!(reduced_difficulty(61, &gentle), 21);
        assert_eq!(reduced_difficulty(21, &gentle), 1);
    }

    #[test]
    fn test_bomb_count_floors() {
        let tuning = Tuning::classic();
        assert_eq!(bomb_count(10, &tuning), 10);
        assert_eq!(bomb_count(30, &tuning), 14);
        assert_eq!(bomb_count(1, &tuning), 8);
        assert_eq!(bomb_count(4, &tuning), 8);
        assert_eq!(bomb_count(190, &tuning), 46);
    }

    #[test]
    fn test_speeds_scale_with_difficulty() {
        let tuning = Tuning::classic();
        assert_eq!(bomb_speed(10, &tuning), 60.0);
        assert_eq!(bomber_speed(30, &tuning), 80.0);
    }

    proptest! {
        #[test]
        fn prop_difficulty_stays_in_band(steps in proptest::collection::vec(any::<bool>(), 0..64)) {
            let tuning = Tuning::classic();
            let mut d = tuning.base_difficulty;
            for won in steps {
                d = if won { next_difficulty(d, &tuning) } else { reduced_difficulty(d, &tuning) };
                prop_assert!(d >= tuning.base_difficulty);
                prop_assert!(d <= tuning.difficulty_cap + tuning.difficulty_increment);
            }
        }

        #[test]
        fn prop_reduction_matches_floor_rule(d in 10u32..=200) {
            let tuning = Tuning::classic();
            let expected = if d > 40 { (d - 40).max(10) } else { 10 };
            prop_assert_eq!(reduced_difficulty(d, &tuning), expected);
        }
    }
}
