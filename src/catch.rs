//! Catch simulation
//!
//! The harder a creature is to defeat, the harder it is to catch.

use rand::Rng;

/// Catch chance never drops below this, in percent.
pub const MIN_CATCH_PERCENT: f64 = 5.0;

/// Catch chance for a creature with zero base experience, in percent.
pub const BASE_CATCH_PERCENT: f64 = 50.0;

/// Percent chance of catching a creature: `max(5, 50 - base_experience / 10)`.
pub fn catch_probability(base_experience: u32) -> f64 {
    (BASE_CATCH_PERCENT - f64::from(base_experience) / 10.0).max(MIN_CATCH_PERCENT)
}

/// Rolls a whole number in `0..100` and succeeds when it lands under `probability`.
pub fn attempt_catch<R: Rng + ?Sized>(probability: f64, rng: &mut R) -> bool {
    let roll: u32 = rng.gen_range(0..100);
    f64::from(roll) < probability
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_probability_scales_with_experience() {
        assert_eq!(catch_probability(0), 50.0);
        assert_eq!(catch_probability(100), 40.0);
        assert_eq!(catch_probability(250), 25.0);
    }

    #[test]
    fn test_probability_floor() {
        assert_eq!(catch_probability(450), 5.0);
        assert_eq!(catch_probability(455), 5.0);
        assert_eq!(catch_probability(1000), 5.0);
        assert_eq!(catch_probability(u32::MAX), 5.0);
    }

    #[test]
    fn test_lowest_roll_always_catches() {
        // Roll of 0 is under even the floor
        let mut rng = StepRng::new(0, 0);
        assert!(attempt_catch(catch_probability(1000), &mut rng));
    }

    #[test]
    fn test_roll_above_chance_escapes() {
        // 2^28 maps to a roll of 6
        let mut rng = StepRng::new(1 << 28, 0);
        assert!(!attempt_catch(MIN_CATCH_PERCENT, &mut rng));
        assert!(attempt_catch(7.0, &mut rng));
    }

    #[test]
    fn test_zero_probability_never_catches() {
        let mut rng = StepRng::new(0, 0);
        assert!(!attempt_catch(0.0, &mut rng));
    }
}
