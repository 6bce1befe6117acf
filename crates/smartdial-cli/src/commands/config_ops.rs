use std::fs;

use smartdial_core::keypad::{self, Keypad};
use smartdial_core::settings;

use super::die;

pub fn keypad_export() {
    print!("{}", keypad::default_toml());
}

pub fn keypad_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(keypad::parse_keypad_toml(&content), "Error: {}");
    let letters: usize = map.values().map(|v| v.len()).sum();
    println!("OK: {} keys, {} letters", map.len(), letters);
}

/// Install a custom keypad before anything touches `Keypad::global()`.
pub fn keypad_load(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(Keypad::init_custom(content), "Error: {}");
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: strip.slot_count={}, strip.max_name_highlights={}",
        s.strip.slot_count, s.strip.max_name_highlights
    );
}

/// Install custom settings before the first `settings()` call.
pub fn settings_load(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(settings::init_custom(content), "Error: {}");
}
