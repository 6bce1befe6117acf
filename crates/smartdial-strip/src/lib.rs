//! Fixed-size suggestion strip shown above the dialpad.
//!
//! `SuggestionStrip` owns the slot contents. Each update snapshots the digit
//! buffer once, assigns the ranked entries to slots, resolves the name and
//! number highlights for every slot and reports how each slot changed so the
//! renderer can pick between a cross-fade and an in-place refresh.

mod digits;
mod entry;

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use smartdial_core::settings::settings;
use smartdial_core::{resolve_phone_highlight, DigitMatcher, DigitQuery, HighlightResolver};

pub use digits::{DigitSource, SharedDigits};
pub use entry::{SlotChange, SlotView, SuggestionEntry};

/// Result of one strip update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripUpdate {
    /// The digit snapshot every highlight in this update was resolved against.
    pub query: DigitQuery,
    pub changes: Vec<SlotChange>,
}

impl StripUpdate {
    /// Whether any slot needs redrawing.
    pub fn has_visible_changes(&self) -> bool {
        self.changes.iter().any(SlotChange::is_visible)
    }
}

pub struct SuggestionStrip {
    slots: Vec<SlotView>,
    max_name_highlights: usize,
}

impl SuggestionStrip {
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![SlotView::default(); slot_count],
            max_name_highlights: usize::MAX,
        }
    }

    /// Strip sized and capped from the global settings.
    pub fn with_settings() -> Self {
        let strip = &settings().strip;
        Self::new(strip.slot_count).with_max_name_highlights(strip.max_name_highlights)
    }

    pub fn with_max_name_highlights(mut self, max: usize) -> Self {
        self.max_name_highlights = max;
        self
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn views(&self) -> &[SlotView] {
        &self.slots
    }

    /// Assign `entries` to the slots in order. Extra entries are dropped and
    /// missing ones leave the slot empty.
    pub fn update<S: DigitSource + ?Sized>(
        &mut self,
        entries: &[SuggestionEntry],
        digits: &S,
        matcher: &dyn DigitMatcher,
    ) -> StripUpdate {
        let query = DigitQuery::new(digits.current_digits());
        let _span = debug_span!(
            "strip_update",
            digits = query.as_str(),
            entries = entries.len(),
            slots = self.slots.len()
        )
        .entered();

        let resolver = HighlightResolver::new(matcher);
        let mut changes = Vec::with_capacity(self.slots.len());
        for (i, slot) in self.slots.iter_mut().enumerate() {
            let view = match entries.get(i) {
                Some(entry) if !entry.is_empty() => {
                    assign_entry(entry, &resolver, &query, self.max_name_highlights)
                }
                _ => SlotView::default(),
            };
            let change = SlotChange::between(slot, &view);
            *slot = view;
            changes.push(change);
        }

        debug!(?changes);
        StripUpdate { query, changes }
    }

    /// Empty every slot.
    pub fn clear(&mut self) -> Vec<SlotChange> {
        self.slots
            .iter_mut()
            .map(|slot| {
                let change = SlotChange::between(slot, &SlotView::default());
                *slot = SlotView::default();
                change
            })
            .collect()
    }
}

fn assign_entry(
    entry: &SuggestionEntry,
    resolver: &HighlightResolver<'_>,
    query: &DigitQuery,
    max_name_highlights: usize,
) -> SlotView {
    let mut name_highlights =
        resolver.resolve_name_highlights(&entry.display_name, &entry.match_positions, query);
    name_highlights.truncate(max_name_highlights);
    let phone_highlight = entry
        .phone_match_position
        .and_then(|p| resolve_phone_highlight(&entry.phone_number, p));
    SlotView {
        entry: entry.clone(),
        name_highlights,
        phone_highlight,
    }
}
