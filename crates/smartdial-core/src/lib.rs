//! Highlight span resolution for smart-dial contact suggestions.
//!
//! Given a display name, the digits typed on the keypad and a candidate
//! span reported by the fuzzy name matcher, the resolver produces the
//! character range that should be highlighted. Chinese names are segmented
//! into Han characters and Latin runs and spelled in Pinyin so the keypad
//! digits can be compared against them.

pub mod keypad;
pub mod matcher;
pub mod resolver;
pub mod segment;
pub mod settings;
pub mod span;
pub mod unicode;

pub use matcher::{DigitMatcher, KeypadMatcher};
pub use resolver::{resolve_phone_highlight, HighlightResolver};
pub use segment::{Segment, SegmentKind};
pub use span::{DigitQuery, HighlightSpan, MatchPosition};
