//! Calculator form - editable fields and their conversion to damage inputs

use damage_core::formula::constants::{MAX_PERK_RANK, MAX_SKILL, MIN_SKILL};
use damage_core::{AttackOptions, DamageInputs, SmithingInputs, WeaponCategory, WeaponProfile};

pub const MIN_BASE_DAMAGE: u32 = 1;
pub const MAX_BASE_DAMAGE: u32 = 35;
pub const MIN_AMMO_DAMAGE: u32 = 4;
pub const MAX_AMMO_DAMAGE: u32 = 35;
/// Percentage fields have no natural cap; keep the spinner bounded
pub const MAX_PERCENT: u32 = 1000;

/// One row of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    WeaponType,
    BaseDamage,
    AmmoDamage,
    SkillLevel,
    PerkRank,
    FortifyEnchantment,
    FortifyPotion,
    PowerAttackPerk,
    SneakGloves,
    SeekerOfMight,
    Tempering,
    SmithingLevel,
    SmithingPerk,
    SmithingEnchantment,
    SmithingPotion,
    SmithingSeeker,
}

impl Field {
    pub fn is_toggle(&self) -> bool {
        matches!(
            self,
            Field::PowerAttackPerk
                | Field::SneakGloves
                | Field::SeekerOfMight
                | Field::Tempering
                | Field::SmithingPerk
                | Field::SmithingSeeker
        )
    }

    /// Section header shown above this field, if it starts a section
    pub fn section(&self) -> Option<&'static str> {
        match self {
            Field::WeaponType => Some("Weapon"),
            Field::SkillLevel => Some("Weapon Proficiency"),
            Field::Tempering => Some("Smithing"),
            _ => None,
        }
    }
}

/// Raw form values, in the units the form shows (percentages as whole numbers)
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub category: WeaponCategory,
    pub base_damage: u32,
    pub ammo_damage: u32,
    pub skill_level: u32,
    pub perk_rank: u32,
    pub fortify_enchantment_pct: u32,
    pub fortify_potion_pct: u32,
    pub power_attack_perk: bool,
    pub sneak_gloves: bool,
    pub seeker_of_might: bool,
    pub tempering: bool,
    pub smithing_level: u32,
    pub smithing_perk: bool,
    pub smithing_enchantment_pct: u32,
    pub smithing_potion_pct: u32,
    pub smithing_seeker: bool,
}

impl Default for FormState {
    fn default() -> Self {
        FormState {
            category: WeaponCategory::OneHanded,
            base_damage: 18,
            ammo_damage: 24,
            skill_level: MAX_SKILL,
            perk_rank: MAX_PERK_RANK,
            fortify_enchantment_pct: 120,
            fortify_potion_pct: 50,
            power_attack_perk: false,
            sneak_gloves: false,
            seeker_of_might: false,
            tempering: false,
            smithing_level: MAX_SKILL,
            smithing_perk: false,
            smithing_enchantment_pct: 75,
            smithing_potion_pct: 50,
            smithing_seeker: false,
        }
    }
}

impl FormState {
    /// Fields that apply to the current weapon profile and tempering toggle
    pub fn visible_fields(&self, profile: &WeaponProfile) -> Vec<Field> {
        let mut fields = vec![Field::WeaponType, Field::BaseDamage];

        if profile.uses_ammo {
            fields.push(Field::AmmoDamage);
        }
        fields.extend([Field::SkillLevel, Field::PerkRank]);
        if profile.fortify_applies {
            fields.extend([Field::FortifyEnchantment, Field::FortifyPotion]);
        }
        if shows_power_perk(profile) {
            fields.push(Field::PowerAttackPerk);
        }
        if !profile.category.is_ranged() {
            fields.push(Field::SneakGloves);
        }
        fields.extend([Field::SeekerOfMight, Field::Tempering]);
        if self.tempering {
            fields.extend([
                Field::SmithingLevel,
                Field::SmithingPerk,
                Field::SmithingEnchantment,
                Field::SmithingPotion,
                Field::SmithingSeeker,
            ]);
        }

        fields
    }

    /// Label for a field, using the weapon's skill and perk names
    pub fn label(&self, field: Field, profile: &WeaponProfile) -> String {
        match field {
            Field::WeaponType => "Weapon Type".to_string(),
            Field::BaseDamage => "Base Damage".to_string(),
            Field::AmmoDamage => "Ammo Damage".to_string(),
            Field::SkillLevel => format!("{} Skill Level", profile.skill_name),
            Field::PerkRank => format!("{} Perk Rank", profile.perk_name),
            Field::FortifyEnchantment => format!("Fortify {} Enchantments %", profile.skill_name),
            Field::FortifyPotion => format!("Fortify {} Potion %", profile.skill_name),
            Field::PowerAttackPerk => format!("{} perk", profile.power_perk_name),
            Field::SneakGloves => "Sneak multiplier gloves".to_string(),
            Field::SeekerOfMight => "Seeker of Might (+10% damage)".to_string(),
            Field::Tempering => "Include tempering".to_string(),
            Field::SmithingLevel => "Smithing Skill Level".to_string(),
            Field::SmithingPerk => "Smithing perk".to_string(),
            Field::SmithingEnchantment => "Smithing Enchantments %".to_string(),
            Field::SmithingPotion => "Smithing Potion %".to_string(),
            Field::SmithingSeeker => "Seeker of Might (+10% smithing)".to_string(),
        }
    }

    pub fn value_text(&self, field: Field) -> String {
        match field {
            Field::WeaponType => self.category.name().to_string(),
            Field::BaseDamage => self.base_damage.to_string(),
            Field::AmmoDamage => self.ammo_damage.to_string(),
            Field::SkillLevel => self.skill_level.to_string(),
            Field::PerkRank => format!("{}/{}", self.perk_rank, MAX_PERK_RANK),
            Field::FortifyEnchantment => format!("{}%", self.fortify_enchantment_pct),
            Field::FortifyPotion => format!("{}%", self.fortify_potion_pct),
            Field::SmithingLevel => self.smithing_level.to_string(),
            Field::SmithingEnchantment => format!("{}%", self.smithing_enchantment_pct),
            Field::SmithingPotion => format!("{}%", self.smithing_potion_pct),
            toggle => checkbox(self.toggle_value(toggle)).to_string(),
        }
    }

    fn toggle_value(&self, field: Field) -> bool {
        match field {
            Field::PowerAttackPerk => self.power_attack_perk,
            Field::SneakGloves => self.sneak_gloves,
            Field::SeekerOfMight => self.seeker_of_might,
            Field::Tempering => self.tempering,
            Field::SmithingPerk => self.smithing_perk,
            Field::SmithingSeeker => self.smithing_seeker,
            _ => false,
        }
    }

    /// Step a numeric field (or cycle the weapon type) by `delta`, clamped to its range
    pub fn adjust(&mut self, field: Field, delta: i32) {
        match field {
            Field::WeaponType => self.cycle_category(delta),
            Field::BaseDamage => {
                step(&mut self.base_damage, delta, MIN_BASE_DAMAGE, MAX_BASE_DAMAGE)
            }
            Field::AmmoDamage => {
                step(&mut self.ammo_damage, delta, MIN_AMMO_DAMAGE, MAX_AMMO_DAMAGE)
            }
            Field::SkillLevel => step(&mut self.skill_level, delta, MIN_SKILL, MAX_SKILL),
            Field::PerkRank => step(&mut self.perk_rank, delta, 0, MAX_PERK_RANK),
            Field::FortifyEnchantment => {
                step(&mut self.fortify_enchantment_pct, delta, 0, MAX_PERCENT)
            }
            Field::FortifyPotion => step(&mut self.fortify_potion_pct, delta, 0, MAX_PERCENT),
            Field::SmithingLevel => step(&mut self.smithing_level, delta, MIN_SKILL, MAX_SKILL),
            Field::SmithingEnchantment => {
                step(&mut self.smithing_enchantment_pct, delta, 0, MAX_PERCENT)
            }
            Field::SmithingPotion => step(&mut self.smithing_potion_pct, delta, 0, MAX_PERCENT),
            toggle => {
                if delta != 0 {
                    self.toggle(toggle);
                }
            }
        }
    }

    pub fn toggle(&mut self, field: Field) {
        match field {
            Field::PowerAttackPerk => self.power_attack_perk = !self.power_attack_perk,
            Field::SneakGloves => self.sneak_gloves = !self.sneak_gloves,
            Field::SeekerOfMight => self.seeker_of_might = !self.seeker_of_might,
            Field::Tempering => self.tempering = !self.tempering,
            Field::SmithingPerk => self.smithing_perk = !self.smithing_perk,
            Field::SmithingSeeker => self.smithing_seeker = !self.smithing_seeker,
            Field::WeaponType => self.cycle_category(1),
            _ => {}
        }
    }

    fn cycle_category(&mut self, delta: i32) {
        let all = WeaponCategory::all();
        let current = all.iter().position(|c| *c == self.category).unwrap_or(0) as i32;
        let next = (current + delta).rem_euclid(all.len() as i32) as usize;
        self.category = all[next];
    }

    /// Damage inputs for the core; the calculator drops what the category ignores
    pub fn inputs(&self) -> DamageInputs {
        let mut inputs = DamageInputs::new(self.base_damage, self.skill_level)
            .with_perk_rank(self.perk_rank)
            .with_ammo(self.ammo_damage)
            .with_fortify(
                percent(self.fortify_enchantment_pct),
                percent(self.fortify_potion_pct),
            )
            .with_seeker_of_might(self.seeker_of_might);

        if self.tempering {
            inputs = inputs.with_smithing(SmithingInputs {
                level: self.smithing_level,
                has_perk: self.smithing_perk,
                enchantment: percent(self.smithing_enchantment_pct),
                potion: percent(self.smithing_potion_pct),
                seeker_of_might: self.smithing_seeker,
            });
        }

        inputs
    }

    /// Attack options, ignoring toggles that are hidden for this profile
    pub fn options(&self, profile: &WeaponProfile) -> AttackOptions {
        AttackOptions {
            power_attack_perk: self.power_attack_perk && shows_power_perk(profile),
            sneak_gloves: self.sneak_gloves && !profile.category.is_ranged(),
        }
    }
}

fn shows_power_perk(profile: &WeaponProfile) -> bool {
    profile.power_attack_enabled && profile.has_power_perk()
}

fn step(value: &mut u32, delta: i32, min: u32, max: u32) {
    let next = (*value as i64 + delta as i64).clamp(min as i64, max as i64);
    *value = next as u32;
}

fn percent(value: u32) -> f64 {
    value as f64 / 100.0
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}
