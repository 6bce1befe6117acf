use smartdial_core::{HighlightSpan, KeypadMatcher, MatchPosition};

use super::entry;
use crate::{SharedDigits, SlotChange, SuggestionEntry, SuggestionStrip};

fn span(start: usize, end: usize) -> HighlightSpan {
    HighlightSpan { start, end }
}

#[test]
fn test_update_fills_slots() {
    let matcher = KeypadMatcher::default();
    let mut strip = SuggestionStrip::new(3);
    let mut john = entry("John Smith", "5551234", &[(0, 5)]);
    john.phone_match_position = Some(MatchPosition::new(0, 40));
    let entries = vec![john, entry("李雷", "5559876", &[(2, 5)])];

    let update = strip.update(&entries, "5646", &matcher);
    assert_eq!(update.query.as_str(), "5646");
    assert_eq!(
        update.changes,
        vec![SlotChange::Filled, SlotChange::Filled, SlotChange::Unchanged]
    );

    let views = strip.views();
    assert_eq!(views[0].name_highlights, vec![span(0, 4)]);
    assert_eq!(views[0].phone_highlight, Some(span(0, 7)));
    assert_eq!(views[1].entry.display_name, "李雷");
    assert_eq!(views[1].name_highlights, vec![span(1, 2)]);
    assert!(views[1].phone_highlight.is_none());
    assert!(views[2].is_empty());
}

#[test]
fn test_extra_entries_are_dropped() {
    let matcher = KeypadMatcher::default();
    let mut strip = SuggestionStrip::new(2);
    let entries = vec![
        entry("Ann", "1", &[]),
        entry("Bob", "2", &[]),
        entry("Cat", "3", &[]),
    ];
    let update = strip.update(&entries, "2", &matcher);
    assert_eq!(update.changes.len(), 2);
    assert_eq!(strip.views()[1].entry.display_name, "Bob");
}

#[test]
fn test_repeat_update_is_unchanged() {
    let matcher = KeypadMatcher::default();
    let mut strip = SuggestionStrip::new(3);
    let entries = vec![entry("John Smith", "5551234", &[(0, 5)])];
    strip.update(&entries, "5646", &matcher);

    let update = strip.update(&entries, "5646", &matcher);
    assert!(update.changes.iter().all(|c| *c == SlotChange::Unchanged));
    assert!(!update.has_visible_changes());
}

#[test]
fn test_new_digits_rehighlight() {
    let matcher = KeypadMatcher::default();
    let mut strip = SuggestionStrip::new(1);
    let entries = vec![entry("John Smith", "5551234", &[(0, 5)])];
    strip.update(&entries, "5646", &matcher);

    let update = strip.update(&entries, "564676484", &matcher);
    assert_eq!(update.changes, vec![SlotChange::Rehighlighted]);
    assert_eq!(strip.views()[0].name_highlights, vec![span(0, 10)]);
}

#[test]
fn test_replaced_and_cleared() {
    let matcher = KeypadMatcher::default();
    let mut strip = SuggestionStrip::new(2);
    strip.update(
        &[entry("Ann", "1", &[]), entry("Bob", "2", &[])],
        "2",
        &matcher,
    );

    let update = strip.update(&[entry("Cat", "3", &[])], "22", &matcher);
    assert_eq!(
        update.changes,
        vec![SlotChange::Replaced, SlotChange::Cleared]
    );
    assert!(update.has_visible_changes());
}

#[test]
fn test_empty_sentinel_leaves_slot_empty() {
    let matcher = KeypadMatcher::default();
    let mut strip = SuggestionStrip::new(2);
    let entries = vec![SuggestionEntry::empty(), entry("Bob", "2", &[(0, 2)])];
    let update = strip.update(&entries, "2", &matcher);
    assert_eq!(
        update.changes,
        vec![SlotChange::Unchanged, SlotChange::Filled]
    );
    assert!(strip.views()[0].is_empty());
    assert!(SuggestionEntry::empty().is_empty());
}

#[test]
fn test_digits_read_once_per_update() {
    let matcher = KeypadMatcher::default();
    let digits = SharedDigits::new();
    digits.set("564");
    let mut strip = SuggestionStrip::new(1);
    let entries = vec![entry("John Smith", "5551234", &[(0, 4)])];

    let update = strip.update(&entries, &digits, &matcher);
    digits.push('6');
    assert_eq!(update.query.as_str(), "564");
    assert_eq!(strip.views()[0].name_highlights, vec![span(0, 3)]);
    assert_eq!(digits.pop(), Some('6'));
}

#[test]
fn test_name_highlights_capped() {
    let matcher = KeypadMatcher::default();
    // "wang" and "ming" within "wangxiaoming".
    let entries = vec![entry("王小明", "1", &[(0, 4), (8, 12)])];

    let mut strip = SuggestionStrip::new(1);
    strip.update(&entries, "9", &matcher);
    assert_eq!(strip.views()[0].name_highlights, vec![span(0, 1), span(2, 3)]);

    let mut capped = SuggestionStrip::new(1).with_max_name_highlights(1);
    capped.update(&entries, "9", &matcher);
    assert_eq!(capped.views()[0].name_highlights, vec![span(0, 1)]);
}

#[test]
fn test_clear() {
    let matcher = KeypadMatcher::default();
    let mut strip = SuggestionStrip::new(3);
    strip.update(
        &[entry("Ann", "1", &[]), entry("Bob", "2", &[])],
        "2",
        &matcher,
    );
    let changes = strip.clear();
    assert_eq!(
        changes,
        vec![
            SlotChange::Cleared,
            SlotChange::Cleared,
            SlotChange::Unchanged
        ]
    );
    assert!(strip.views().iter().all(|v| v.is_empty()));
}

#[test]
fn test_with_settings_uses_defaults() {
    let strip = SuggestionStrip::with_settings();
    assert_eq!(strip.slot_count(), 3);
}
