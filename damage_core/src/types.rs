//! Core types specific to damage_core

use crate::error::DamageError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Weapon category, each with its own skill and attack multipliers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponCategory {
    OneHanded,
    TwoHanded,
    Dagger,
    Archery,
}

impl WeaponCategory {
    /// Get all weapon categories, in form order
    pub fn all() -> &'static [WeaponCategory] {
        &[
            WeaponCategory::OneHanded,
            WeaponCategory::TwoHanded,
            WeaponCategory::Archery,
            WeaponCategory::Dagger,
        ]
    }

    /// Display name used in exports and the UI
    pub fn name(&self) -> &'static str {
        match self {
            WeaponCategory::OneHanded => "One-handed",
            WeaponCategory::TwoHanded => "Two-handed",
            WeaponCategory::Dagger => "Dagger",
            WeaponCategory::Archery => "Archery",
        }
    }

    /// Config key (matches the serde representation)
    pub fn key(&self) -> &'static str {
        match self {
            WeaponCategory::OneHanded => "one_handed",
            WeaponCategory::TwoHanded => "two_handed",
            WeaponCategory::Dagger => "dagger",
            WeaponCategory::Archery => "archery",
        }
    }

    pub fn is_ranged(&self) -> bool {
        matches!(self, WeaponCategory::Archery)
    }
}

impl fmt::Display for WeaponCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WeaponCategory {
    type Err = DamageError;

    /// Accepts either the display name ("Two-handed") or the config key ("two_handed")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        WeaponCategory::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(needle) || c.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DamageError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display_names() {
        for category in WeaponCategory::all() {
            let parsed: WeaponCategory = category.name().parse().unwrap();
            assert_eq!(parsed, *category);
        }
    }

    #[test]
    fn test_parse_keys_case_insensitive() {
        assert_eq!("TWO_HANDED".parse::<WeaponCategory>().unwrap(), WeaponCategory::TwoHanded);
        assert_eq!(" archery ".parse::<WeaponCategory>().unwrap(), WeaponCategory::Archery);
    }

    #[test]
    fn test_unknown_category() {
        let err = "Crossbow".parse::<WeaponCategory>().unwrap_err();
        assert!(matches!(err, DamageError::UnknownCategory(ref s) if s == "Crossbow"));
    }

    #[test]
    fn test_serde_key_matches() {
        #[derive(Deserialize)]
        struct Wrapper {
            category: WeaponCategory,
        }
        for category in WeaponCategory::all() {
            let toml = format!("category = \"{}\"", category.key());
            let parsed: Wrapper = toml::from_str(&toml).unwrap();
            assert_eq!(parsed.category, *category);
        }
    }

    #[test]
    fn test_only_archery_is_ranged() {
        let ranged: Vec<_> = WeaponCategory::all().iter().filter(|c| c.is_ranged()).collect();
        assert_eq!(ranged, vec![&WeaponCategory::Archery]);
    }
}
