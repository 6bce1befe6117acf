use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

#[derive(Deserialize)]
struct KeypadConfig {
    digits: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum KeypadConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[digits] table is empty")]
    Empty,
    #[error("key must be a single ASCII digit: {0}")]
    InvalidKey(String),
    #[error("invalid letter {letter:?} on key {key}")]
    InvalidLetter { key: char, letter: char },
    #[error("letter assigned to more than one key: {0}")]
    DuplicateLetter(char),
    #[error("keypad already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<digit, lowercase letters>`.
pub fn parse_keypad_toml(toml_str: &str) -> Result<BTreeMap<char, String>, KeypadConfigError> {
    let config: KeypadConfig =
        toml::from_str(toml_str).map_err(|e| KeypadConfigError::Parse(e.to_string()))?;

    if config.digits.is_empty() {
        return Err(KeypadConfigError::Empty);
    }

    let mut seen = HashSet::new();
    let mut out = BTreeMap::new();
    for (key, letters) in config.digits {
        let mut chars = key.chars();
        let digit = match (chars.next(), chars.next()) {
            (Some(d), None) if d.is_ascii_digit() => d,
            _ => return Err(KeypadConfigError::InvalidKey(key)),
        };
        let mut normalized = String::with_capacity(letters.len());
        for letter in letters.chars() {
            if !letter.is_ascii_alphabetic() {
                return Err(KeypadConfigError::InvalidLetter { key: digit, letter });
            }
            let lower = letter.to_ascii_lowercase();
            if !seen.insert(lower) {
                return Err(KeypadConfigError::DuplicateLetter(lower));
            }
            normalized.push(lower);
        }
        out.insert(digit, normalized);
    }

    Ok(out)
}
