use std::sync::OnceLock;

use super::config::{parse_keypad_toml, KeypadConfigError};
use super::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Letter-to-digit lookup built from a validated keypad table.
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Indexed by `letter - 'a'`.
    letters: [Option<char>; 26],
}

impl Keypad {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), KeypadConfigError> {
        // Validate eagerly
        parse_keypad_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| KeypadConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Keypad {
        static INSTANCE: OnceLock<Keypad> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            // Both sources are validated before they get here (build.rs for the
            // embedded table, init_custom for overrides).
            Keypad::from_toml(toml_str).unwrap_or_default()
        })
    }

    /// Build a keypad from TOML text.
    pub fn from_toml(toml_str: &str) -> Result<Keypad, KeypadConfigError> {
        let map = parse_keypad_toml(toml_str)?;
        let mut letters = [None; 26];
        for (digit, chars) in &map {
            for c in chars.bytes() {
                if let Some(slot) = letters.get_mut(usize::from(c - b'a')) {
                    *slot = Some(*digit);
                }
            }
        }
        Ok(Keypad { letters })
    }

    /// The standard phone keypad.
    fn itu() -> Keypad {
        const KEYS: [(char, &str); 8] = [
            ('2', "abc"),
            ('3', "def"),
            ('4', "ghi"),
            ('5', "jkl"),
            ('6', "mno"),
            ('7', "pqrs"),
            ('8', "tuv"),
            ('9', "wxyz"),
        ];
        let mut letters = [None; 26];
        for (digit, chars) in KEYS {
            for c in chars.bytes() {
                if let Some(slot) = letters.get_mut(usize::from(c - b'a')) {
                    *slot = Some(digit);
                }
            }
        }
        Keypad { letters }
    }

    /// Digit printed on the key carrying `c`. Digits map to themselves;
    /// anything else unmapped yields `None`.
    pub fn digit_for(&self, c: char) -> Option<char> {
        if c.is_ascii_digit() {
            return Some(c);
        }
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let idx = usize::from(c.to_ascii_lowercase() as u8 - b'a');
        self.letters.get(idx).copied().flatten()
    }

    /// Keypad digits for `text`, dropping characters with no key.
    pub fn encode(&self, text: &str) -> String {
        text.chars().filter_map(|c| self.digit_for(c)).collect()
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Keypad::itu()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_embedded_table() {
        let embedded = Keypad::from_toml(DEFAULT_TOML).unwrap();
        let itu = Keypad::default();
        for c in 'a'..='z' {
            assert_eq!(embedded.digit_for(c), itu.digit_for(c), "letter {c}");
        }
    }

    #[test]
    fn test_digit_for_letters() {
        let keypad = Keypad::global();
        assert_eq!(keypad.digit_for('a'), Some('2'));
        assert_eq!(keypad.digit_for('L'), Some('5'));
        assert_eq!(keypad.digit_for('s'), Some('7'));
        assert_eq!(keypad.digit_for('z'), Some('9'));
    }

    #[test]
    fn test_digit_for_passthrough_and_unmapped() {
        let keypad = Keypad::global();
        assert_eq!(keypad.digit_for('7'), Some('7'));
        assert_eq!(keypad.digit_for(' '), None);
        assert_eq!(keypad.digit_for('李'), None);
        assert_eq!(keypad.digit_for('-'), None);
    }

    #[test]
    fn test_encode() {
        let keypad = Keypad::global();
        assert_eq!(keypad.encode("john"), "5646");
        assert_eq!(keypad.encode("lei"), "534");
        assert_eq!(keypad.encode("John Smith"), "564676484");
        assert_eq!(keypad.encode(""), "");
    }

    #[test]
    fn test_custom_layout() {
        let keypad = Keypad::from_toml("[digits]\n\"1\" = \"ab\"\n").unwrap();
        assert_eq!(keypad.digit_for('a'), Some('1'));
        assert_eq!(keypad.digit_for('c'), None);
    }
}
