//! Saved results - flattened snapshots of calculations, exportable as CSV/JSON

mod csv;
mod log;

pub use self::csv::{write_csv, CSV_HEADERS};
pub use self::log::ResultLog;

use crate::calculator::DamageReport;
use crate::types::WeaponCategory;
use serde::{Deserialize, Serialize};

/// One saved calculation: every input and every derived output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedResultRecord {
    pub name: String,
    pub weapon_type: WeaponCategory,
    pub base_damage: u32,
    pub ammo_damage: u32,
    pub skill_level: u32,
    pub perk_rank: u32,
    pub fortify_enchantment: f64,
    pub fortify_potion: f64,
    pub power_attack_perk: bool,
    pub sneak_gloves: bool,
    pub seeker_of_might: bool,
    pub tempering: bool,
    pub smithing_level: u32,
    pub smithing_perk: bool,
    pub smithing_enchantment: f64,
    pub smithing_potion: f64,
    pub smithing_seeker_of_might: bool,
    pub tempering_bonus: f64,
    /// Inventory value (floored)
    pub displayed_damage: i64,
    pub actual_damage: f64,
    pub power_attack_damage: f64,
    pub sneak_attack_damage: f64,
    pub power_sneak_attack_damage: f64,
}

impl SavedResultRecord {
    pub fn from_report(name: impl Into<String>, report: &DamageReport) -> Self {
        let inputs = &report.inputs;
        let smithing = inputs.smithing.unwrap_or_default();

        SavedResultRecord {
            name: name.into(),
            weapon_type: report.category,
            base_damage: inputs.base_damage,
            ammo_damage: inputs.ammo_damage,
            skill_level: inputs.skill_level,
            perk_rank: inputs.perk_rank,
            fortify_enchantment: inputs.fortify_enchantment,
            fortify_potion: inputs.fortify_potion,
            power_attack_perk: report.options.power_attack_perk,
            sneak_gloves: report.options.sneak_gloves,
            seeker_of_might: inputs.seeker_of_might,
            tempering: inputs.tempering_enabled(),
            smithing_level: smithing.level,
            smithing_perk: smithing.has_perk,
            smithing_enchantment: smithing.enchantment,
            smithing_potion: smithing.potion,
            smithing_seeker_of_might: smithing.seeker_of_might,
            tempering_bonus: report.tempering_bonus,
            displayed_damage: report.displayed.floored(),
            actual_damage: report.displayed.value(),
            power_attack_damage: report.attacks.power_attack,
            sneak_attack_damage: report.attacks.sneak_attack,
            power_sneak_attack_damage: report.attacks.power_sneak_attack,
        }
    }

    /// Cell values in [`CSV_HEADERS`] order
    pub fn csv_fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.weapon_type.name().to_string(),
            self.base_damage.to_string(),
            self.ammo_damage.to_string(),
            self.skill_level.to_string(),
            self.perk_rank.to_string(),
            self.fortify_enchantment.to_string(),
            self.fortify_potion.to_string(),
            bool_cell(self.power_attack_perk),
            bool_cell(self.sneak_gloves),
            bool_cell(self.seeker_of_might),
            bool_cell(self.tempering),
            self.smithing_level.to_string(),
            bool_cell(self.smithing_perk),
            self.smithing_enchantment.to_string(),
            self.smithing_potion.to_string(),
            bool_cell(self.smithing_seeker_of_might),
            self.tempering_bonus.to_string(),
            self.displayed_damage.to_string(),
            self.actual_damage.to_string(),
            self.power_attack_damage.to_string(),
            self.sneak_attack_damage.to_string(),
            self.power_sneak_attack_damage.to_string(),
        ]
    }
}

fn bool_cell(value: bool) -> String {
    if value { "True" } else { "False" }.to_string()
}
