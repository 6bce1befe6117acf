//! Keypad letter-to-digit mapping.
//!
//! The mapping is loaded from TOML (an ITU E.161 default is embedded) and
//! exposed as a lazily built global, the same way every other table in this
//! crate is configured.

mod config;
mod map;

pub use config::{parse_keypad_toml, KeypadConfigError};
pub use map::Keypad;

pub(crate) const DEFAULT_TOML: &str = include_str!("default_keypad.toml");

/// Returns the embedded default keypad TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
