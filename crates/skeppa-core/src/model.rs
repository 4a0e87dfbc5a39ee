use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One delivery-date -> quantity pair scraped from a forecast document.
///
/// The date keeps its source formatting (`dd/mm/yy` or `dd/mm/yyyy`);
/// two-digit years mean 2000+yy and are normalized whenever the date is
/// actually computed on (see [`crate::shipping`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityEntry {
    pub date: String,
    pub quantity: Decimal,
}

/// Per-part forecast extracted from one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRecord {
    /// Synthetic key, `item_<n>` in order of appearance (1-based).
    pub id: String,
    /// Digits read from the line following a `Part Number:` header.
    pub part_number: String,
    /// Ordered date -> quantity mapping. Order of first appearance; a later
    /// occurrence of the same date overwrites the earlier quantity in place.
    pub quantities: Vec<QuantityEntry>,
    /// Transit lead time in business days.
    #[serde(default)]
    pub transit_time: u32,
}

impl ForecastRecord {
    pub fn new(id: String, part_number: String, quantities: Vec<QuantityEntry>) -> Self {
        ForecastRecord {
            id,
            part_number,
            quantities,
            transit_time: 0,
        }
    }

    pub fn quantity_for(&self, date: &str) -> Option<Decimal> {
        self.quantities
            .iter()
            .find(|e| e.date == date)
            .map(|e| e.quantity)
    }
}

/// Upsert into an ordered date -> quantity mapping.
pub(crate) fn upsert_quantity(entries: &mut Vec<QuantityEntry>, date: String, quantity: Decimal) {
    match entries.iter_mut().find(|e| e.date == date) {
        Some(existing) => existing.quantity = quantity,
        None => entries.push(QuantityEntry { date, quantity }),
    }
}

/// Advisory note about a tolerated anomaly in the scanned text.
///
/// Anomalies never fail an extraction; the affected field is defaulted and
/// the anomaly is reported here instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseWarning {
    /// Index into the sanitized line sequence.
    pub line: usize,
    pub reason: String,
}

/// Output of one segmentation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedForecast {
    pub records: Vec<ForecastRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ParseWarning>,
    /// Lines dropped by the skip-marker suppression.
    #[serde(default)]
    pub suppressed_lines: usize,
}
