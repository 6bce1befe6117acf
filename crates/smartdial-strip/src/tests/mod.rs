mod basic;
mod proptest_strip;

use smartdial_core::MatchPosition;

use crate::SuggestionEntry;

pub(super) fn entry(name: &str, number: &str, positions: &[(i32, i32)]) -> SuggestionEntry {
    SuggestionEntry {
        display_name: name.to_string(),
        phone_number: number.to_string(),
        match_positions: positions
            .iter()
            .map(|&(s, e)| MatchPosition::new(s, e))
            .collect(),
        phone_match_position: None,
        contact_uri: format!("content://contacts/{name}"),
    }
}
