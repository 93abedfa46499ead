//! Multipliers applied to base weapon damage

use super::constants::{SEEKER_OF_MIGHT_MULTIPLIER, SKILL_SCALE, WEAPON_PERK_BONUS};

/// Skill level scaling: `1 + 0.5 × (skill / 100)`
///
/// 1.0 at skill 0, 1.5 at skill 100.
pub fn skill_multiplier(skill_level: f64) -> f64 {
    1.0 + SKILL_SCALE * (skill_level / 100.0)
}

/// Ranked damage perk: `1 + 0.20 × rank`
pub fn weapon_perk_multiplier(perk_rank: f64) -> f64 {
    1.0 + WEAPON_PERK_BONUS * perk_rank
}

/// Fortify enchantments and potions stack additively before scaling:
/// `1 + enchantment + potion`
pub fn fortify_multiplier(enchantment_bonus: f64, potion_bonus: f64) -> f64 {
    1.0 + enchantment_bonus + potion_bonus
}

pub fn seeker_of_might_multiplier(enabled: bool) -> f64 {
    if enabled {
        SEEKER_OF_MIGHT_MULTIPLIER
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_skill_endpoints() {
        assert!((skill_multiplier(0.0) - 1.0).abs() < f64::EPSILON);
        assert!((skill_multiplier(15.0) - 1.075).abs() < 1e-12);
        assert!((skill_multiplier(100.0) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_perk_endpoints() {
        assert!((weapon_perk_multiplier(0.0) - 1.0).abs() < f64::EPSILON);
        assert!((weapon_perk_multiplier(5.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_fortify_stacks_additively() {
        assert!((fortify_multiplier(0.0, 0.0) - 1.0).abs() < f64::EPSILON);
        // 2.0, not 1.5 × 1.5 = 2.25
        assert!((fortify_multiplier(0.5, 0.5) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_seeker_of_might() {
        assert!((seeker_of_might_multiplier(false) - 1.0).abs() < f64::EPSILON);
        assert!((seeker_of_might_multiplier(true) - 1.1).abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn skill_multiplier_is_monotonic(a in 0u32..=100, b in 0u32..=100) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(skill_multiplier(lo as f64) <= skill_multiplier(hi as f64));
        }

        #[test]
        fn skill_multiplier_stays_in_range(level in 0.0f64..=100.0) {
            let mult = skill_multiplier(level);
            prop_assert!((1.0..=1.5).contains(&mult));
        }

        #[test]
        fn perk_multiplier_is_linear(rank in 0u32..5) {
            let step = weapon_perk_multiplier(rank as f64 + 1.0) - weapon_perk_multiplier(rank as f64);
            prop_assert!((step - WEAPON_PERK_BONUS).abs() < 1e-12);
        }

        #[test]
        fn fortify_is_commutative(e in 0.0f64..5.0, p in 0.0f64..5.0) {
            prop_assert!((fortify_multiplier(e, p) - fortify_multiplier(p, e)).abs() < 1e-12);
        }
    }
}
