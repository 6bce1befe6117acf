//! Span and query value types shared by the resolver and the strip.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::unicode::{byte_offset, char_len};

/// Raw `[start, end)` candidate reported by the name or number matcher.
///
/// Nothing about it is trusted: it may be inverted, negative or past the end
/// of the string it refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchPosition {
    pub start: i32,
    pub end: i32,
}

impl MatchPosition {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// A candidate with `start >= end` carries no highlight.
    pub fn is_degenerate(&self) -> bool {
        self.start >= self.end
    }
}

/// Corrected highlight range in character indices.
///
/// Always satisfies `start < end <= len` for the string it was resolved
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
}

impl HighlightSpan {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Byte range of this span within `text`, for slicing.
    pub fn byte_range(&self, text: &str) -> Range<usize> {
        byte_offset(text, self.start)..byte_offset(text, self.end)
    }

    /// The highlighted substring of `text`.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.byte_range(text)).unwrap_or("")
    }
}

/// Sort spans and coalesce the ones that overlap or touch.
pub fn merge_spans(mut spans: Vec<HighlightSpan>) -> Vec<HighlightSpan> {
    spans.sort();
    let mut out: Vec<HighlightSpan> = Vec::with_capacity(spans.len());
    for span in spans {
        match out.last_mut() {
            Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
            _ => out.push(span),
        }
    }
    out
}

/// One consistent read of the keypad buffer.
///
/// Text and length are captured together so a resolution never mixes the
/// length of one keystroke with the text of the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitQuery {
    text: String,
    len: usize,
}

impl DigitQuery {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = char_len(&text);
        Self { text, len }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The first `n` characters of the query.
    pub fn prefix(&self, n: usize) -> &str {
        &self.text[..byte_offset(&self.text, n)]
    }
}
