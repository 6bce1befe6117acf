use crate::matcher::{matches_digits, DigitMatcher};
use crate::segment::{is_first_segment_chinese, join_spellings, Segment};
use crate::span::DigitQuery;
use crate::unicode::char_len;

use super::{to_i64, Rule, Working};

/// A Chinese or mixed-script name with its segmentation.
///
/// Candidate spans on these names index the spelled form (Pinyin for Han
/// characters). Walks run over spelling lengths and land on display offsets;
/// `start` anchors taken from a segment use its display length.
pub(super) struct ChineseName<'a> {
    pub name: &'a str,
    pub segments: Vec<Segment>,
    pub display_len: i64,
    pub query: &'a DigitQuery,
    pub matcher: &'a dyn DigitMatcher,
}

impl ChineseName<'_> {
    pub fn correct(&self, input: Working) -> (Rule, Working) {
        // Latin runs or dropped whitespace collapse several characters into
        // one segment.
        if self.segment_count() < self.display_len {
            return (Rule::Clustered, self.clustered(input));
        }
        if self.preserves_length() && input.end > self.display_len {
            return (Rule::Overflow, self.remap(input));
        }
        (Rule::PerCharacter, self.per_character(input))
    }

    fn clustered(&self, input: Working) -> Working {
        let (Some(first), Some(last)) = (self.segments.first(), self.segments.last()) else {
            return input;
        };
        let count = self.segment_count();
        let digits_len = to_i64(self.query.len());

        if is_first_segment_chinese(self.name) {
            // Latin lead, Chinese tail: try to anchor on the tail.
            if self.matches(last) {
                let matched = input.end.saturating_sub(input.start);
                let start = to_i64(first.text_len());
                let end = start.saturating_add(matched);
                if end > self.display_len {
                    let start = count.saturating_sub(1);
                    return Working {
                        start,
                        end: digits_len.saturating_add(start),
                    };
                }
                return Working { start, end };
            }

            let mut mapped = self.remap(input);
            if mapped.end > self.display_len {
                let before_last = self.spelled_len(self.segments.len().saturating_sub(1));
                mapped.end = count
                    .saturating_sub(1)
                    .saturating_add(digits_len)
                    .saturating_sub(before_last);
            }
            return mapped;
        }

        // Chinese lead: a query matching the first word keeps the matcher's span.
        if self.matches(first) {
            return input;
        }

        let tail_start = count.saturating_sub(to_i64(last.text_len()));
        if input.end > self.display_len && tail_start != 0 {
            let start = count.saturating_sub(1);
            return Working {
                start,
                end: digits_len.saturating_add(start),
            };
        }

        let start = to_i64(first.text_len());
        let mut end = match self.segments.iter().skip(1).position(|s| self.matches(s)) {
            Some(offset) => start.saturating_add(to_i64(offset + 1)),
            None => input.end,
        };
        if end < start {
            end = start.saturating_add(end);
        }
        Working { start, end }
    }

    fn per_character(&self, input: Working) -> Working {
        let Some(first) = self.segments.first() else {
            return input;
        };
        let short_query = self.query.len() <= first.spelling_len();
        if short_query && !self.two_letter_lead(first) {
            // Keep the matcher's end while it is in range and the query does
            // not start on the first character.
            if input.end <= self.display_len && !self.matches(first) {
                return input;
            }
        }
        self.remap(input)
    }

    /// Three digits whose first two spell the first two letters of `first`.
    fn two_letter_lead(&self, first: &Segment) -> bool {
        if self.query.len() != 3 {
            return false;
        }
        let lead: String = first.spelling.chars().take(2).collect();
        lead.chars().count() == 2
            && self
                .matcher
                .matches_combination(&lead, self.query.prefix(2))
    }

    fn matches(&self, segment: &Segment) -> bool {
        matches_digits(self.matcher, segment, self.query)
    }

    fn segment_count(&self) -> i64 {
        to_i64(self.segments.len())
    }

    /// The spelled form is as long as the name itself, so spelled and display
    /// offsets coincide.
    fn preserves_length(&self) -> bool {
        to_i64(char_len(&join_spellings(&self.segments))) == self.display_len
    }

    /// Spelled length of the first `n` segments.
    fn spelled_len(&self, n: usize) -> i64 {
        self.segments
            .iter()
            .take(n)
            .map(|s| to_i64(s.spelling_len()))
            .fold(0, i64::saturating_add)
    }

    /// Map a spelled-space span onto display offsets. Ends the segments
    /// cannot reach are left as they are.
    fn remap(&self, input: Working) -> Working {
        Working {
            start: self.start_of(input.start).unwrap_or(input.start),
            end: self.walk(input.end).unwrap_or(input.end),
        }
    }

    /// Display offset of the segment holding spelled position `pos`.
    fn start_of(&self, pos: i64) -> Option<i64> {
        let mut spelled: i64 = 0;
        let mut display: i64 = 0;
        for segment in &self.segments {
            spelled = spelled.saturating_add(to_i64(segment.spelling_len()));
            if pos < spelled {
                return Some(display);
            }
            display = display.saturating_add(to_i64(segment.text_len()));
        }
        None
    }

    /// Display offset just past the first segment at which the running
    /// spelled length reaches `target`. On a one-segment-per-character name
    /// this is the segment's 1-based index.
    fn walk(&self, target: i64) -> Option<i64> {
        let mut spelled: i64 = 0;
        let mut display: i64 = 0;
        for segment in &self.segments {
            spelled = spelled.saturating_add(to_i64(segment.spelling_len()));
            display = display.saturating_add(to_i64(segment.text_len()));
            if spelled >= target {
                return Some(display);
            }
        }
        None
    }
}
