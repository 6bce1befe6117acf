//! Boundary to the fuzzy name matcher, plus a keypad implementation of it.

use crate::keypad::Keypad;
use crate::segment::{split_into_segments, Segment};
use crate::span::DigitQuery;

/// Yes/no keypad match test.
///
/// The resolver only asks whether a piece of text could have produced the
/// typed digits. Ranking and position reporting stay with the implementor.
pub trait DigitMatcher {
    fn matches_combination(&self, text: &str, digits: &str) -> bool;
}

/// T9 matcher: the text matches when the keypad encoding of its full
/// spelling, or of its word initials, starts with the digits.
pub struct KeypadMatcher<'k> {
    keypad: &'k Keypad,
}

impl<'k> KeypadMatcher<'k> {
    pub fn new(keypad: &'k Keypad) -> Self {
        Self { keypad }
    }

    fn initials(&self, text: &str) -> String {
        let segments = split_into_segments(text);
        segments
            .iter()
            .flat_map(|seg| seg.spelling.split_whitespace())
            .filter_map(|word| word.chars().next())
            .filter_map(|c| self.keypad.digit_for(c))
            .collect()
    }
}

impl Default for KeypadMatcher<'static> {
    fn default() -> Self {
        Self::new(Keypad::global())
    }
}

impl DigitMatcher for KeypadMatcher<'_> {
    fn matches_combination(&self, text: &str, digits: &str) -> bool {
        if digits.is_empty() {
            return false;
        }
        let spelled: String = split_into_segments(text)
            .iter()
            .map(|s| s.spelling.as_str())
            .collect();
        self.keypad.encode(&spelled).starts_with(digits)
            || self.initials(text).starts_with(digits)
    }
}

/// Whether `segment` could have produced the digit query.
pub fn matches_digits(matcher: &dyn DigitMatcher, segment: &Segment, query: &DigitQuery) -> bool {
    matcher.matches_combination(&segment.spelling, query.as_str())
}
