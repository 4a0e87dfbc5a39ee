use skeppa_core::error::SkeppaError;
use skeppa_core::extraction::pdftotext::PdftotextExtractor;
use skeppa_core::parsing::SegmentOptions;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
    skip_after: Option<String>,
    sort_by_earliest: bool,
) -> Result<(), SkeppaError> {
    let options = SegmentOptions {
        skip_marker: skip_after,
        sort_by_earliest_date: sort_by_earliest,
    };

    let pdf_bytes = std::fs::read(&input_file)?;
    let extractor = PdftotextExtractor::new();
    let parsed = skeppa_core::extract_pdf(&pdf_bytes, &extractor, &options)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&parsed.records)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} record(s), written to {}",
                parsed.records.len(),
                path.display()
            );
            for w in &parsed.warnings {
                eprintln!("  warning: line {}: {}", w.line, w.reason);
            }
            if parsed.suppressed_lines > 0 {
                eprintln!(
                    "  {} line(s) suppressed after skip marker",
                    parsed.suppressed_lines
                );
            }
        }
        None => {
            match output_format {
                "json" => output::json::print(&parsed.records)?,
                _ => print!("{}", output::table::format_records(&parsed.records)),
            }
            for w in &parsed.warnings {
                eprintln!("warning: line {}: {}", w.line, w.reason);
            }
        }
    }

    Ok(())
}
