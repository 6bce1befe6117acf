//! Highlight span correction.
//!
//! The name matcher reports candidate spans that do not always line up with
//! the displayed string: Latin names come back one character too long, and
//! spans on Chinese names are computed against the segmented Pinyin form.
//! `HighlightResolver` maps a candidate back onto the display name and clamps
//! it. The rule is picked from a small decision table:
//!
//! | name                                   | rule            |
//! |----------------------------------------|-----------------|
//! | no Han characters                      | `Latin`         |
//! | fewer segments than characters         | `Clustered`     |
//! | one segment per character, end too far | `Overflow`      |
//! | one segment per character              | `PerCharacter`  |
//!
//! Every rule feeds the same final clamp, so the result is always inside the
//! name or `None`.

mod chinese;

use tracing::{debug, debug_span};

use crate::matcher::DigitMatcher;
use crate::segment::{is_chinese_text, split_into_segments};
use crate::span::{merge_spans, DigitQuery, HighlightSpan, MatchPosition};
use crate::unicode::char_len;

use chinese::ChineseName;

/// Correction rule applied to a name candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rule {
    Latin,
    Clustered,
    Overflow,
    PerCharacter,
}

/// Candidate span under correction. Signed and wide so intermediate values
/// can leave the string before the clamp brings them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Working {
    pub start: i64,
    pub end: i64,
}

impl From<MatchPosition> for Working {
    fn from(p: MatchPosition) -> Self {
        Self {
            start: i64::from(p.start),
            end: i64::from(p.end),
        }
    }
}

pub(crate) fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// Resolves name highlights against the digits typed so far.
pub struct HighlightResolver<'m> {
    matcher: &'m dyn DigitMatcher,
}

impl<'m> HighlightResolver<'m> {
    pub fn new(matcher: &'m dyn DigitMatcher) -> Self {
        Self { matcher }
    }

    /// Correct one candidate span on `display_name`.
    ///
    /// Returns `None` for an empty name, a candidate with `start >= end`, or
    /// a span that collapses once clamped.
    pub fn resolve_name_highlight(
        &self,
        display_name: &str,
        candidate: MatchPosition,
        query: &DigitQuery,
    ) -> Option<HighlightSpan> {
        let _span = debug_span!(
            "resolve_name_highlight",
            display_name,
            start = candidate.start,
            end = candidate.end,
            digits = query.as_str()
        )
        .entered();

        if display_name.is_empty() || candidate.is_degenerate() {
            debug!("nothing to highlight");
            return None;
        }

        let display_len = to_i64(char_len(display_name));
        let digits_len = to_i64(query.len());
        let input = Working::from(candidate);

        let (rule, corrected) = if is_chinese_text(display_name) {
            let name = ChineseName {
                name: display_name,
                segments: split_into_segments(display_name),
                display_len,
                query,
                matcher: self.matcher,
            };
            name.correct(input)
        } else {
            (
                Rule::Latin,
                latin_rule(display_name, input, digits_len, display_len),
            )
        };

        let resolved = clamp(corrected, display_len, digits_len);
        debug!(
            ?rule,
            corrected_start = corrected.start,
            corrected_end = corrected.end,
            resolved = ?resolved
        );
        resolved
    }

    /// Resolve every candidate on a name and merge the results.
    pub fn resolve_name_highlights(
        &self,
        display_name: &str,
        candidates: &[MatchPosition],
        query: &DigitQuery,
    ) -> Vec<HighlightSpan> {
        let spans = candidates
            .iter()
            .filter_map(|c| self.resolve_name_highlight(display_name, *c, query))
            .collect();
        merge_spans(spans)
    }
}

/// Clamp-only correction for a phone number candidate. `start` is never
/// moved; a candidate starting outside the number yields `None`.
pub fn resolve_phone_highlight(
    phone_number: &str,
    candidate: MatchPosition,
) -> Option<HighlightSpan> {
    if phone_number.is_empty() || candidate.is_degenerate() {
        return None;
    }
    let len = to_i64(char_len(phone_number));
    let start = i64::from(candidate.start);
    let end = i64::from(candidate.end).min(len);
    if start < 0 || start >= end {
        return None;
    }
    Some(HighlightSpan {
        start: usize::try_from(start).ok()?,
        end: usize::try_from(end).ok()?,
    })
}

/// Latin names always highlight from the first character. The matcher's end
/// is one past the match, unless the query spells out the whole name.
fn latin_rule(name: &str, input: Working, digits_len: i64, display_len: i64) -> Working {
    let stripped_len = to_i64(name.chars().filter(|c| *c != ' ').count());
    if digits_len == stripped_len {
        Working {
            start: 0,
            end: display_len,
        }
    } else {
        Working {
            start: 0,
            end: input.end.saturating_sub(1),
        }
    }
}

/// Bring a corrected span inside `[0, display_len]`.
///
/// A start past the end means the rules had nothing better to offer; fall
/// back to a prefix as long as the query when that fits.
fn clamp(span: Working, display_len: i64, digits_len: i64) -> Option<HighlightSpan> {
    let mut start = span.start;
    let mut end = span.end.min(display_len);
    if start > display_len && digits_len <= display_len {
        start = 0;
        end = digits_len;
    }
    let start = start.clamp(0, display_len);
    let end = end.clamp(start, display_len);
    if start == end {
        return None;
    }
    Some(HighlightSpan {
        start: usize::try_from(start).ok()?,
        end: usize::try_from(end).ok()?,
    })
}
