use serde::{Deserialize, Serialize};

use smartdial_core::{HighlightSpan, MatchPosition};

/// One contact suggestion as produced by the name/number matcher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionEntry {
    pub display_name: String,
    pub phone_number: String,
    /// Candidate spans on the display name, in matcher order.
    #[serde(default)]
    pub match_positions: Vec<MatchPosition>,
    #[serde(default)]
    pub phone_match_position: Option<MatchPosition>,
    pub contact_uri: String,
}

impl SuggestionEntry {
    /// The "no suggestion in this slot" sentinel.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.contact_uri.is_empty() && self.display_name.is_empty() && self.phone_number.is_empty()
    }
}

/// What a slot shows after an update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SlotView {
    pub entry: SuggestionEntry,
    pub name_highlights: Vec<HighlightSpan>,
    pub phone_highlight: Option<HighlightSpan>,
}

impl SlotView {
    pub fn is_empty(&self) -> bool {
        self.entry.is_empty()
    }
}

/// How a slot changed relative to the previous update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotChange {
    /// Same contact, same highlights.
    Unchanged,
    /// Empty slot received a contact.
    Filled,
    /// Contact removed, slot is now empty.
    Cleared,
    /// A different contact took the slot.
    Replaced,
    /// Same contact, highlights moved with the new digits.
    Rehighlighted,
}

impl SlotChange {
    pub(crate) fn between(old: &SlotView, new: &SlotView) -> Self {
        match (old.is_empty(), new.is_empty()) {
            (true, true) => SlotChange::Unchanged,
            (true, false) => SlotChange::Filled,
            (false, true) => SlotChange::Cleared,
            (false, false) if old.entry.contact_uri != new.entry.contact_uri => {
                SlotChange::Replaced
            }
            (false, false)
                if old.name_highlights != new.name_highlights
                    || old.phone_highlight != new.phone_highlight =>
            {
                SlotChange::Rehighlighted
            }
            (false, false) => SlotChange::Unchanged,
        }
    }

    /// Whether a renderer has to redraw the slot.
    pub fn is_visible(&self) -> bool {
        !matches!(self, SlotChange::Unchanged)
    }
}
