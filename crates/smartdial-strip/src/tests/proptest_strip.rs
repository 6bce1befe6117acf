//! Property-based tests for the suggestion strip.
//!
//! Random entries, candidate spans and digit buffers are pushed through
//! `SuggestionStrip::update`; every resolved highlight must stay inside the
//! string it marks.

use proptest::prelude::*;

use smartdial_core::{KeypadMatcher, MatchPosition};

use crate::{SlotChange, SuggestionEntry, SuggestionStrip};

fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(vec![
            "John Smith", "Bob", "李雷", "王小明", "Tom李雷", "李Tom", "李王 Tom", "-李Amy", "  李 ",
        ])
        .prop_map(str::to_string),
        1 => "[a-zA-Z 李雷王明-]{0,10}",
    ]
}

fn arb_position() -> impl Strategy<Value = MatchPosition> {
    prop_oneof![
        4 => (-5i32..15, -5i32..15),
        1 => (any::<i32>(), any::<i32>()),
    ]
    .prop_map(|(start, end)| MatchPosition::new(start, end))
}

fn arb_entry() -> impl Strategy<Value = SuggestionEntry> {
    (
        arb_name(),
        "[0-9]{0,12}",
        prop::collection::vec(arb_position(), 0..4),
        prop::option::of(arb_position()),
    )
        .prop_map(|(name, number, positions, phone)| SuggestionEntry {
            contact_uri: format!("content://contacts/{name}"),
            display_name: name,
            phone_number: number,
            match_positions: positions,
            phone_match_position: phone,
        })
}

proptest! {
    #[test]
    fn highlights_stay_in_bounds(
        entries in prop::collection::vec(arb_entry(), 0..6),
        digits in "[0-9]{0,10}",
        slots in 1usize..5,
    ) {
        let matcher = KeypadMatcher::default();
        let mut strip = SuggestionStrip::new(slots);
        let update = strip.update(&entries, digits.as_str(), &matcher);
        prop_assert_eq!(update.changes.len(), slots);

        for view in strip.views() {
            let name_len = view.entry.display_name.chars().count();
            for span in &view.name_highlights {
                prop_assert!(span.start < span.end, "{:?}", span);
                prop_assert!(span.end <= name_len, "{:?} on {:?}", span, view.entry.display_name);
            }
            for pair in view.name_highlights.windows(2) {
                prop_assert!(pair[0].end < pair[1].start);
            }
            if let Some(span) = view.phone_highlight {
                prop_assert!(span.start < span.end);
                prop_assert!(span.end <= view.entry.phone_number.chars().count());
            }
        }
    }

    #[test]
    fn identical_update_changes_nothing(
        entries in prop::collection::vec(arb_entry(), 0..6),
        digits in "[0-9]{0,10}",
    ) {
        let matcher = KeypadMatcher::default();
        let mut strip = SuggestionStrip::new(3);
        strip.update(&entries, digits.as_str(), &matcher);
        let again = strip.update(&entries, digits.as_str(), &matcher);
        prop_assert!(again.changes.iter().all(|c| *c == SlotChange::Unchanged));
    }

    #[test]
    fn phone_start_never_moves(
        number in "[0-9]{1,12}",
        pos in arb_position(),
    ) {
        if let Some(span) = smartdial_core::resolve_phone_highlight(&number, pos) {
            prop_assert_eq!(span.start as i64, i64::from(pos.start));
        }
    }
}
