//! Word segmentation of contact display names.
//!
//! A Chinese (or mixed-script) name is split into one segment per Han
//! character plus one segment per Latin/digit run, so the keypad query can be
//! compared with each word on its own. Every segment carries its Pinyin or
//! lowercased spelling next to the original text.

use pinyin::ToPinyin;
use serde::Serialize;

use crate::unicode::{char_len, is_han};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// A single Han character.
    Han,
    /// A run of non-Han letters or digits.
    Latin,
    /// Punctuation or any other standalone symbol.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// The characters of the display name this segment covers.
    pub text: String,
    /// Keypad alphabet form: toneless Pinyin, lowercased Latin, or the
    /// character itself when no reading is known.
    pub spelling: String,
    pub kind: SegmentKind,
}

impl Segment {
    fn han(c: char) -> Self {
        let spelling = match c.to_pinyin() {
            Some(p) => p.plain().replace('ü', "v"),
            None => c.to_string(),
        };
        Self {
            text: c.to_string(),
            spelling,
            kind: SegmentKind::Han,
        }
    }

    fn latin(run: &str) -> Self {
        Self {
            text: run.to_string(),
            spelling: run.to_lowercase(),
            kind: SegmentKind::Latin,
        }
    }

    fn other(c: char) -> Self {
        Self {
            text: c.to_string(),
            spelling: c.to_string(),
            kind: SegmentKind::Other,
        }
    }

    /// Length in display characters.
    pub fn text_len(&self) -> usize {
        char_len(&self.text)
    }

    /// Length in keypad letters.
    pub fn spelling_len(&self) -> usize {
        char_len(&self.spelling)
    }
}

/// True when `name` contains at least one Han character.
pub fn is_chinese_text(name: &str) -> bool {
    name.chars().any(is_han)
}

/// True when `name` opens with a non-Han run and Chinese follows, e.g.
/// "Tom李雷". Decides which end of the name the query is aligned against.
pub fn is_first_segment_chinese(name: &str) -> bool {
    let Some(first) = name.chars().find(|c| !c.is_whitespace()) else {
        return false;
    };
    !is_han(first) && is_chinese_text(name)
}

/// Split a display name into segments.
///
/// A name without Han characters is returned whole as a single segment.
pub fn split_into_segments(name: &str) -> Vec<Segment> {
    if name.is_empty() {
        return Vec::new();
    }
    if !is_chinese_text(name) {
        return vec![Segment::latin(name)];
    }

    let mut segments = Vec::new();
    let mut run = String::new();
    for c in name.chars() {
        if !is_han(c) && c.is_alphanumeric() {
            run.push(c);
            continue;
        }
        if !run.is_empty() {
            segments.push(Segment::latin(&run));
            run.clear();
        }
        if is_han(c) {
            segments.push(Segment::han(c));
        } else if !c.is_whitespace() {
            segments.push(Segment::other(c));
        }
    }
    if !run.is_empty() {
        segments.push(Segment::latin(&run));
    }
    segments
}

/// Concatenated spelling of every segment.
pub fn fully_expanded_pinyin(name: &str) -> String {
    join_spellings(&split_into_segments(name))
}

/// Concatenated spelling of already split segments.
pub fn join_spellings(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.spelling.as_str()).collect()
}
