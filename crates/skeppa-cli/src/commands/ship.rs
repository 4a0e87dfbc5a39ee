use skeppa_core::error::SkeppaError;
use skeppa_core::extraction::pdftotext::PdftotextExtractor;
use skeppa_core::model::ForecastRecord;
use skeppa_core::parsing::SegmentOptions;
use skeppa_core::state::AppState;
use std::path::{Path, PathBuf};

use crate::output;

pub fn run(
    input_file: PathBuf,
    transit_time: Option<String>,
    set: Vec<String>,
    output_format: &str,
    skip_after: Option<String>,
) -> Result<(), SkeppaError> {
    let records = load_records(&input_file, skip_after)?;

    let mut state = AppState::new();
    state.replace(records);

    // A global transit time must be valid; it applies to every record.
    if let Some(days) = &transit_time {
        let ids: Vec<String> = state.records().iter().map(|r| r.id.clone()).collect();
        for id in ids {
            state.set_transit_time(&id, days)?;
        }
    }

    // Per-record overrides are best-effort: an invalid entry reports its
    // validation message and leaves that record as it was.
    for pair in &set {
        match apply_pair(&mut state, pair) {
            Ok(()) => {}
            Err(e) => eprintln!("warning: {e}"),
        }
    }

    match output_format {
        "json" => output::json::print(state.records())?,
        _ => print!("{}", output::table::format_records(state.records())),
    }

    Ok(())
}

/// Load records from a PDF (extracting first) or a pre-extracted JSON file.
fn load_records(
    input_file: &Path,
    skip_after: Option<String>,
) -> Result<Vec<ForecastRecord>, SkeppaError> {
    let is_json = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        let json_bytes = std::fs::read(input_file)?;
        let records: Vec<ForecastRecord> = serde_json::from_slice(&json_bytes)?;
        Ok(records)
    } else {
        let options = SegmentOptions {
            skip_marker: skip_after,
            ..Default::default()
        };
        let pdf_bytes = std::fs::read(input_file)?;
        let extractor = PdftotextExtractor::new();
        Ok(skeppa_core::extract_pdf(&pdf_bytes, &extractor, &options)?.records)
    }
}

/// Parse and apply one `ID=DAYS` pair.
fn apply_pair(state: &mut AppState, pair: &str) -> Result<(), SkeppaError> {
    let (id, days) = pair.split_once('=').ok_or_else(|| {
        SkeppaError::InvalidTransitTime {
            input: pair.to_string(),
            reason: "expected ID=DAYS".into(),
        }
    })?;
    state.set_transit_time(id.trim(), days)
}
