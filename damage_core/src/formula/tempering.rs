//! Tempering - smithing improvement added to base damage before scaling

use super::constants::{
    QUALITY_SKILL_OFFSET, TEMPERING_LEVEL_DIVISOR, TEMPERING_PERK_MULTIPLIER,
    WEAPON_QUALITY_FACTOR,
};
use super::displayed::SmithingInputs;
use super::multipliers::{fortify_multiplier, seeker_of_might_multiplier};
use serde::{Deserialize, Serialize};

/// Which tempering curve to use
///
/// `Approximate` is the canonical smooth curve. `QualityLevel` models the
/// game's stepped quality tiers and must be selected explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperingModel {
    #[default]
    Approximate,
    QualityLevel,
}

impl TemperingModel {
    pub fn name(&self) -> &'static str {
        match self {
            TemperingModel::Approximate => "Approximate",
            TemperingModel::QualityLevel => "Quality level",
        }
    }

    /// Improvement for a weapon with the given base damage
    pub fn bonus(&self, base_damage: f64, smithing: &SmithingInputs) -> f64 {
        let level = smithing.level as f64;
        match self {
            TemperingModel::Approximate => tempering_bonus(
                base_damage,
                level,
                smithing.has_perk,
                smithing.enchantment,
                smithing.potion,
                smithing.seeker_of_might,
            ),
            TemperingModel::QualityLevel => quality_level_tempering_bonus(
                level,
                smithing.has_perk,
                smithing.enchantment,
                smithing.potion,
                smithing.seeker_of_might,
            ),
        }
    }
}

/// Smooth tempering approximation:
/// `base × (level / 200) × perk × (1 + ench + potion) × seeker`
///
/// Returns exactly `0.0` when `smithing_level <= 0`.
pub fn tempering_bonus(
    base_damage: f64,
    smithing_level: f64,
    has_perk: bool,
    smithing_enchantment: f64,
    smithing_potion: f64,
    smithing_seeker: bool,
) -> f64 {
    if smithing_level <= 0.0 {
        return 0.0;
    }

    let perk = if has_perk { TEMPERING_PERK_MULTIPLIER } else { 1.0 };

    base_damage
        * (smithing_level / TEMPERING_LEVEL_DIVISOR)
        * perk
        * fortify_multiplier(smithing_enchantment, smithing_potion)
        * seeker_of_might_multiplier(smithing_seeker)
}

/// Stepped tempering curve based on item quality tiers
///
/// The perk doubles the effective skill above the offset; enchantments and
/// potions multiply it separately. Quality is the floor of
/// `(effective + 38) × 3 / 103`, and weapons get half the improvement an
/// armour piece would. Never negative.
pub fn quality_level_tempering_bonus(
    smithing_level: f64,
    has_perk: bool,
    smithing_enchantment: f64,
    smithing_potion: f64,
    smithing_seeker: bool,
) -> f64 {
    if smithing_level <= 0.0 {
        return 0.0;
    }

    let effective_skill = (smithing_level - QUALITY_SKILL_OFFSET)
        * if has_perk { 2.0 } else { 1.0 }
        * (1.0 + smithing_enchantment)
        * (1.0 + smithing_potion)
        * seeker_of_might_multiplier(smithing_seeker)
        + QUALITY_SKILL_OFFSET;

    let quality_level = ((effective_skill + 38.0) * 3.0 / 103.0).floor();

    ((3.6 * quality_level - 1.6) * WEAPON_QUALITY_FACTOR).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn smithing(level: u32, has_perk: bool) -> SmithingInputs {
        SmithingInputs {
            level,
            has_perk,
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_level_gives_exact_zero() {
        let bonus = tempering_bonus(25.0, 0.0, true, 0.75, 0.5, true);
        assert_eq!(bonus, 0.0);
        assert!(bonus.is_sign_positive());

        assert_eq!(tempering_bonus(25.0, -10.0, true, 1.0, 1.0, true), 0.0);
        assert_eq!(quality_level_tempering_bonus(0.0, true, 1.0, 1.0, true), 0.0);
    }

    #[test]
    fn test_smooth_curve() {
        // 10 × (100 / 200) = 5
        assert!((tempering_bonus(10.0, 100.0, false, 0.0, 0.0, false) - 5.0).abs() < 1e-12);
        // With perk: 5 × 1.5 = 7.5
        assert!((tempering_bonus(10.0, 100.0, true, 0.0, 0.0, false) - 7.5).abs() < 1e-12);
        // Enchant + potion stack additively: 7.5 × (1 + 0.75 + 0.5) = 16.875
        assert!((tempering_bonus(10.0, 100.0, true, 0.75, 0.5, false) - 16.875).abs() < 1e-9);
        // Seeker: × 1.1
        let with_seeker = tempering_bonus(10.0, 100.0, true, 0.75, 0.5, true);
        assert!((with_seeker - 16.875 * 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_quality_level_curve() {
        // Skill 100, no bonuses: effective = 100
        // quality = floor(138 × 3 / 103) = floor(4.019) = 4
        // bonus = (3.6 × 4 - 1.6) × 0.5 = 6.4
        let bonus = quality_level_tempering_bonus(100.0, false, 0.0, 0.0, false);
        assert!((bonus - 6.4).abs() < 1e-9);

        // Perk doubles effective skill above the offset:
        // effective = 86.71 × 2 + 13.29 = 186.71, quality = floor(6.545) = 6
        // bonus = (21.6 - 1.6) × 0.5 = 10
        let bonus = quality_level_tempering_bonus(100.0, true, 0.0, 0.0, false);
        assert!((bonus - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_quality_level_ignores_base_damage() {
        let input = smithing(100, true);
        let light = TemperingModel::QualityLevel.bonus(7.0, &input);
        let heavy = TemperingModel::QualityLevel.bonus(28.0, &input);
        assert_eq!(light, heavy);
    }

    #[test]
    fn test_model_dispatch() {
        let input = smithing(100, false);
        assert!((TemperingModel::Approximate.bonus(10.0, &input) - 5.0).abs() < 1e-12);
        assert!((TemperingModel::QualityLevel.bonus(10.0, &input) - 6.4).abs() < 1e-9);
        assert_eq!(TemperingModel::default(), TemperingModel::Approximate);
    }

    proptest! {
        #[test]
        fn tempering_is_never_negative(
            base in 0.0f64..50.0,
            level in -100.0f64..=100.0,
            perk in any::<bool>(),
            ench in 0.0f64..3.0,
            potion in 0.0f64..3.0,
            seeker in any::<bool>(),
        ) {
            prop_assert!(tempering_bonus(base, level, perk, ench, potion, seeker) >= 0.0);
            prop_assert!(quality_level_tempering_bonus(level, perk, ench, potion, seeker) >= 0.0);
        }
    }
}
