//! Integration test: configure -> calculate -> save -> export
//!
//! Walks the same path the TUI takes through damage_core, for each weapon
//! category, and checks the exported CSV/JSON.

use damage_core::config::parse_calculator_config;
use damage_core::record::CSV_HEADERS;
use damage_core::{
    default_config, AttackOptions, DamageCalculator, DamageInputs, ResultLog, SmithingInputs,
    TemperingModel, WeaponCategory,
};
use std::fs;
use std::path::PathBuf;

fn temp_path(file: &str) -> PathBuf {
    std::env::temp_dir().join(format!("damage_tui_{}_{}", std::process::id(), file))
}

#[test]
fn test_reference_scenarios() {
    let calc = DamageCalculator::from_config(&default_config()).unwrap();

    let low = calc
        .calculate(WeaponCategory::OneHanded, &DamageInputs::new(10, 15), AttackOptions::default())
        .unwrap();
    assert!((low.displayed.value() - 10.75).abs() < 1e-9);

    let mid = calc
        .calculate(WeaponCategory::OneHanded, &DamageInputs::new(10, 100), AttackOptions::default())
        .unwrap();
    assert!((mid.displayed.value() - 15.0).abs() < 1e-9);

    let high = calc
        .calculate(
            WeaponCategory::OneHanded,
            &DamageInputs::new(10, 100).with_perk_rank(5),
            AttackOptions::default(),
        )
        .unwrap();
    assert!((high.displayed.value() - 30.0).abs() < 1e-9);
    assert!((high.attacks.power_attack - 60.0).abs() < 1e-9);
    assert!((high.attacks.sneak_attack - 180.0).abs() < 1e-9);
}

#[test]
fn test_full_session_export() {
    let calc = DamageCalculator::default();
    let mut log = ResultLog::new();

    // Dragonbone Mace, max skill, fully perked, tempered
    let mace = DamageInputs::new(17, 100)
        .with_perk_rank(5)
        .with_fortify(1.2, 0.5)
        .with_smithing(SmithingInputs {
            level: 100,
            has_perk: true,
            enchantment: 0.75,
            potion: 0.5,
            seeker_of_might: false,
        });
    let options = AttackOptions {
        power_attack_perk: true,
        sneak_gloves: true,
    };
    let report = calc.calculate(WeaponCategory::OneHanded, &mace, options).unwrap();
    log.save("Dragonbone Mace, max", &report);

    // Dragonbone Bow with Dragonbone Arrows
    let bow = DamageInputs::new(20, 100).with_perk_rank(5).with_ammo(25);
    let report = calc.calculate(WeaponCategory::Archery, &bow, options).unwrap();
    assert!((report.attacks.power_attack - report.displayed.value()).abs() < f64::EPSILON);
    log.save("Dragonbone Bow", &report);

    // Dagger ignores fortify
    let dagger = DamageInputs::new(11, 100).with_perk_rank(5).with_fortify(1.0, 1.0);
    let report = calc.calculate(WeaponCategory::Dagger, &dagger, options).unwrap();
    assert!((report.displayed.value() - 33.0).abs() < 1e-9);
    log.save("Daedric Dagger", &report);

    assert_eq!(log.len(), 3);

    let csv_path = temp_path("results.csv");
    log.write_csv(&csv_path).unwrap();
    let csv = fs::read_to_string(&csv_path).unwrap();
    let _ = fs::remove_file(&csv_path);

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], CSV_HEADERS.join(","));
    assert!(lines[1].starts_with("\"Dragonbone Mace, max\",One-handed,17,0,100,5,"));
    assert!(lines[2].starts_with("Dragonbone Bow,Archery,20,25,"));
    assert!(lines[3].starts_with("Daedric Dagger,Dagger,11,0,100,5,0,0,"));

    let json_path = temp_path("results.json");
    log.write_json(&json_path).unwrap();
    let json = fs::read_to_string(&json_path).unwrap();
    let _ = fs::remove_file(&json_path);

    let restored = ResultLog::from_json(&json).unwrap();
    assert_eq!(restored, log);
}

#[test]
fn test_configured_balance_changes_results() {
    let config = parse_calculator_config(
        r#"
tempering_model = "quality_level"

[weapons.two_handed]
power_attack_multiplier = 2.5
sneak_multiplier = 3.0
"#,
    )
    .unwrap();
    assert_eq!(config.tempering_model, TemperingModel::QualityLevel);

    let calc = DamageCalculator::from_config(&config).unwrap();
    let report = calc
        .calculate(WeaponCategory::TwoHanded, &DamageInputs::new(10, 100), AttackOptions::default())
        .unwrap();

    assert!((report.attacks.power_attack - 37.5).abs() < 1e-9);
    assert!((report.attacks.sneak_attack - 45.0).abs() < 1e-9);
    assert!((report.attacks.power_sneak_attack - 112.5).abs() < 1e-9);
}

#[test]
fn test_invalid_input_never_reaches_log() {
    let calc = DamageCalculator::default();
    let log = ResultLog::new();

    let result = calc.calculate(
        WeaponCategory::OneHanded,
        &DamageInputs::new(10, 100).with_perk_rank(9),
        AttackOptions::default(),
    );
    assert!(result.is_err());
    assert!(log.is_empty());
}
