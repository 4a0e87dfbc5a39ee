pub mod lines;
pub mod values;

use crate::model::{upsert_quantity, ForecastRecord, ParseWarning, ParsedForecast, QuantityEntry};
use crate::shipping;
use chrono::NaiveDate;
use lines::sanitize_lines;
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;
use values::parse_quantity;

/// Line prefix that opens a new per-part section.
const PART_HEADER: &str = "Part Number:";

/// A date's quantity sits exactly this many lines below the date line.
/// This is the cadence of the source documents' text stream; treated as a
/// black-box constant.
const VALUE_OFFSET: usize = 7;

/// Delivery dates in the source stream are two-digit day/month/year
/// groups; four-digit years only appear after shipping-date re-keying and
/// are never scanned.
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d{2}/\d{2}/\d{2})\b").unwrap());

static DIGIT_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Scanner configuration.
#[derive(Debug, Clone, Default)]
pub struct SegmentOptions {
    /// Line prefix (a week label) that starts suppression: subsequent lines
    /// are ignored until the next `Part Number:` header. Off by default;
    /// the label depends on the document stream being processed.
    pub skip_marker: Option<String>,
    /// Sort records by their earliest parseable date key after scanning.
    /// Ids are assigned before sorting and keep their appearance order.
    pub sort_by_earliest_date: bool,
}

/// Part section being accumulated between two `Part Number:` headers.
#[derive(Debug, Default)]
struct Accumulator {
    part_number: String,
    quantities: Vec<QuantityEntry>,
}

/// Scanner state. `Suppressing` still owns the accumulator so a suppressed
/// section flushes like any other at the next header or at end of input.
#[derive(Debug)]
enum ScanState {
    /// No part header seen yet; nothing to attach data to.
    Idle,
    Accumulating(Accumulator),
    /// Ignoring lines until the next part header.
    Suppressing(Accumulator),
}

impl ScanState {
    fn into_accumulator(self) -> Option<Accumulator> {
        match self {
            ScanState::Idle => None,
            ScanState::Accumulating(acc) | ScanState::Suppressing(acc) => Some(acc),
        }
    }
}

/// Segment document text into per-part forecast records.
///
/// Never fails: a malformed section degrades to defaulted fields plus an
/// advisory warning, matching the best-effort policy of the rest of the
/// pipeline.
pub fn segment(text: &str, options: &SegmentOptions) -> ParsedForecast {
    let lines = sanitize_lines(text);
    let mut out = ParsedForecast::default();
    let mut state = ScanState::Idle;

    let mut i = 0;
    while i < lines.len() {
        let line = &lines[i];

        if line.starts_with(PART_HEADER) {
            if let Some(acc) = std::mem::replace(&mut state, ScanState::Idle).into_accumulator() {
                flush(acc, &mut out.records);
            }

            let mut acc = Accumulator::default();
            match lines.get(i + 1).and_then(|next| first_digit_run(next)) {
                Some(digits) => {
                    acc.part_number = digits;
                    // the digit line is consumed, not scanned again
                    i += 1;
                }
                None => out.warnings.push(ParseWarning {
                    line: i,
                    reason: "no digits on the line after a part header".into(),
                }),
            }
            state = ScanState::Accumulating(acc);
        } else if is_skip_marker(line, options) {
            tracing::debug!(line = i, "skip marker hit, suppressing until next part header");
            state = match state {
                ScanState::Idle => ScanState::Suppressing(Accumulator::default()),
                ScanState::Accumulating(acc) | ScanState::Suppressing(acc) => {
                    ScanState::Suppressing(acc)
                }
            };
        } else {
            match &mut state {
                ScanState::Accumulating(acc) => {
                    if let Some(date) = DATE_RE.captures(line).map(|c| c[1].to_string()) {
                        let quantity = match lines.get(i + VALUE_OFFSET) {
                            Some(value_line) => parse_quantity(value_line),
                            None => {
                                out.warnings.push(ParseWarning {
                                    line: i,
                                    reason: format!(
                                        "date {date} has no value line {VALUE_OFFSET} lines ahead"
                                    ),
                                });
                                Decimal::ZERO
                            }
                        };
                        upsert_quantity(&mut acc.quantities, date, quantity);
                    }
                }
                ScanState::Suppressing(_) => out.suppressed_lines += 1,
                ScanState::Idle => {}
            }
        }

        i += 1;
    }

    if let Some(acc) = state.into_accumulator() {
        flush(acc, &mut out.records);
    }

    if options.sort_by_earliest_date {
        sort_by_earliest_date(&mut out.records);
    }

    if !out.warnings.is_empty() {
        tracing::warn!(count = out.warnings.len(), "segmentation had anomalies");
    }
    tracing::debug!(
        records = out.records.len(),
        suppressed = out.suppressed_lines,
        "segmentation finished"
    );

    out
}

/// Append a finished section, assigning the next `item_<n>` id. Sections
/// that never produced a part number are dropped.
fn flush(acc: Accumulator, records: &mut Vec<ForecastRecord>) {
    if acc.part_number.is_empty() {
        return;
    }
    let id = format!("item_{}", records.len() + 1);
    records.push(ForecastRecord::new(id, acc.part_number, acc.quantities));
}

fn first_digit_run(line: &str) -> Option<String> {
    DIGIT_RUN_RE.find(line).map(|m| m.as_str().to_string())
}

fn is_skip_marker(line: &str, options: &SegmentOptions) -> bool {
    options
        .skip_marker
        .as_deref()
        .is_some_and(|marker| line.starts_with(marker))
}

/// Stable sort by earliest parseable date key; records with no parseable
/// date sort last.
fn sort_by_earliest_date(records: &mut [ForecastRecord]) {
    records.sort_by_key(|r| earliest_date(r).unwrap_or(NaiveDate::MAX));
}

fn earliest_date(record: &ForecastRecord) -> Option<NaiveDate> {
    record
        .quantities
        .iter()
        .filter_map(|e| shipping::parse_date(&e.date))
        .min()
}
