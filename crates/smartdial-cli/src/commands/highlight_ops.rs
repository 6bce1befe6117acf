use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

use smartdial_core::segment::{
    fully_expanded_pinyin, is_chinese_text, is_first_segment_chinese, split_into_segments, Segment,
};
use smartdial_core::{
    resolve_phone_highlight, DigitQuery, HighlightResolver, HighlightSpan, KeypadMatcher,
    MatchPosition,
};
use smartdial_strip::{SlotChange, SlotView, SuggestionEntry, SuggestionStrip};

use super::die;

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// One line of a batch input file.
#[derive(Debug, Deserialize)]
pub struct BatchCase {
    pub name: String,
    pub digits: String,
    pub start: i32,
    pub end: i32,
}

/// One line of a batch output file.
#[derive(Debug, Serialize)]
pub struct BatchResult {
    pub name: String,
    pub digits: String,
    pub candidate: MatchPosition,
    pub highlight: Option<HighlightSpan>,
    pub highlighted: Option<String>,
}

#[derive(Serialize)]
struct SegmentReport<'a> {
    name: &'a str,
    chinese: bool,
    first_segment_chinese: bool,
    pinyin: String,
    segments: Vec<Segment>,
}

pub fn segment_cmd(name: &str, json: bool) {
    let report = SegmentReport {
        name,
        chinese: is_chinese_text(name),
        first_segment_chinese: is_first_segment_chinese(name),
        pinyin: fully_expanded_pinyin(name),
        segments: split_into_segments(name),
    };
    if json {
        println!("{}", die!(serde_json::to_string_pretty(&report), "Error: {}"));
        return;
    }
    println!(
        "{name}  chinese={} first_segment_chinese={} pinyin={}",
        report.chinese, report.first_segment_chinese, report.pinyin
    );
    for (i, seg) in report.segments.iter().enumerate() {
        println!("  {i:>2}  {:<8} {:<10} {:?}", seg.text, seg.spelling, seg.kind);
    }
}

pub fn resolve_cmd(name: &str, digits: &str, start: i32, end: i32, json: bool) {
    let matcher = KeypadMatcher::default();
    let result = resolve_case(
        &HighlightResolver::new(&matcher),
        BatchCase {
            name: name.to_string(),
            digits: digits.to_string(),
            start,
            end,
        },
    );
    print_result(&result, json);
}

pub fn phone_cmd(number: &str, start: i32, end: i32, json: bool) {
    let candidate = MatchPosition::new(start, end);
    let highlight = resolve_phone_highlight(number, candidate);
    let result = BatchResult {
        name: number.to_string(),
        digits: String::new(),
        candidate,
        highlight,
        highlighted: highlight.map(|h| h.slice(number).to_string()),
    };
    print_result(&result, json);
}

pub fn batch_cmd(input_file: &str, output_file: Option<&str>) {
    let input = die!(fs::File::open(input_file), "Error opening {input_file}: {}");
    let reader = BufReader::new(input);
    let count = match output_file {
        Some(path) => {
            let out = die!(fs::File::create(path), "Error creating {path}: {}");
            die!(run_batch(reader, BufWriter::new(out)), "Error: {}")
        }
        None => die!(run_batch(reader, io::stdout().lock()), "Error: {}"),
    };
    eprintln!("{count} cases resolved");
}

/// Resolve every JSONL case from `reader`, writing one JSONL result per case.
/// Blank lines are skipped. Returns the number of cases resolved.
pub fn run_batch<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<usize, BatchError> {
    let matcher = KeypadMatcher::default();
    let resolver = HighlightResolver::new(&matcher);
    let mut count = 0;
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let case: BatchCase =
            serde_json::from_str(&line).map_err(|source| BatchError::Json { line: i + 1, source })?;
        let result = resolve_case(&resolver, case);
        serde_json::to_writer(&mut writer, &result)
            .map_err(|source| BatchError::Json { line: i + 1, source })?;
        writeln!(writer)?;
        count += 1;
    }
    writer.flush()?;
    debug!(count, "batch finished");
    Ok(count)
}

/// Load suggestion entries (a JSON array) and show how the strip lays them out.
pub fn strip_cmd(entries_file: &str, digits: &str, json: bool) {
    let content = die!(fs::read_to_string(entries_file), "Error reading {entries_file}: {}");
    let entries: Vec<SuggestionEntry> = die!(serde_json::from_str(&content), "Error: {}");
    let matcher = KeypadMatcher::default();
    let mut strip = SuggestionStrip::with_settings();
    let update = strip.update(&entries, digits, &matcher);

    if json {
        #[derive(Serialize)]
        struct Slot<'a> {
            change: SlotChange,
            view: &'a SlotView,
        }
        let slots: Vec<Slot> = update
            .changes
            .iter()
            .zip(strip.views())
            .map(|(change, view)| Slot {
                change: *change,
                view,
            })
            .collect();
        println!("{}", die!(serde_json::to_string_pretty(&slots), "Error: {}"));
        return;
    }

    for (i, view) in strip.views().iter().enumerate() {
        if view.is_empty() {
            println!("  [{i}] (empty)");
            continue;
        }
        let marked = mark(&view.entry.display_name, &view.name_highlights);
        let number = match view.phone_highlight {
            Some(h) => mark(&view.entry.phone_number, &[h]),
            None => view.entry.phone_number.clone(),
        };
        println!("  [{i}] {marked}  {number}");
    }
}

fn resolve_case(resolver: &HighlightResolver<'_>, case: BatchCase) -> BatchResult {
    let candidate = MatchPosition::new(case.start, case.end);
    let highlight =
        resolver.resolve_name_highlight(&case.name, candidate, &DigitQuery::new(case.digits.as_str()));
    BatchResult {
        highlighted: highlight.map(|h| h.slice(&case.name).to_string()),
        name: case.name,
        digits: case.digits,
        candidate,
        highlight,
    }
}

fn print_result(result: &BatchResult, json: bool) {
    if json {
        println!("{}", die!(serde_json::to_string(result), "Error: {}"));
        return;
    }
    match result.highlight {
        Some(h) => println!(
            "{}  [{}, {}) -> [{}, {})  {}",
            mark(&result.name, &[h]),
            result.candidate.start,
            result.candidate.end,
            h.start,
            h.end,
            result.highlighted.as_deref().unwrap_or("")
        ),
        None => println!(
            "{}  [{}, {}) -> no highlight",
            result.name, result.candidate.start, result.candidate.end
        ),
    }
}

/// Wrap highlighted ranges in brackets. `spans` must be sorted and disjoint.
fn mark(text: &str, spans: &[HighlightSpan]) -> String {
    let mut out = String::with_capacity(text.len() + spans.len() * 2);
    let mut rest = spans.iter().peekable();
    for (i, c) in text.chars().enumerate() {
        if rest.peek().is_some_and(|s| s.start == i) {
            out.push('[');
        }
        out.push(c);
        if rest.peek().is_some_and(|s| s.end == i + 1) {
            out.push(']');
            rest.next();
        }
    }
    out
}
