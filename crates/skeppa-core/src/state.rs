//! In-memory application state: the record set from the most recent
//! extraction. Single-threaded; every mutation is either a whole-value
//! replacement or goes through the validated edit entrypoint.

use crate::error::SkeppaError;
use crate::model::{upsert_quantity, ForecastRecord, QuantityEntry};
use crate::shipping;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    records: Vec<ForecastRecord>,
}

impl AppState {
    pub fn new() -> Self {
        AppState::default()
    }

    pub fn records(&self) -> &[ForecastRecord] {
        &self.records
    }

    /// A new extraction replaces the record set wholesale.
    pub fn replace(&mut self, records: Vec<ForecastRecord>) {
        self.records = records;
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Edit entrypoint for a record's transit time.
    ///
    /// Validates the raw input first; on a validation failure or an unknown
    /// id the state is left untouched and the error carries the
    /// user-visible message. On success the record's quantities are re-keyed
    /// by shipping date.
    pub fn set_transit_time(&mut self, record_id: &str, input: &str) -> Result<(), SkeppaError> {
        let days = shipping::parse_transit_time(input)?;
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| SkeppaError::UnknownRecord(record_id.to_string()))?;
        apply_transit_time(record, days);
        Ok(())
    }
}

/// Set a record's transit time and re-key its quantities by shipping date.
///
/// The old keys are discarded, not merged: each delivery date is walked
/// back by `days` business days and the quantity lands under the resulting
/// `dd/mm/yyyy` key. Two delivery dates that collapse to the same shipping
/// date collapse to one entry, in mapping order. A key that is not a
/// parseable date is kept unshifted.
pub fn apply_transit_time(record: &mut ForecastRecord, days: u32) {
    record.transit_time = days;

    let mut shifted: Vec<QuantityEntry> = Vec::with_capacity(record.quantities.len());
    for entry in record.quantities.drain(..) {
        match shipping::shipping_date(&entry.date, days) {
            Some(shipping_key) => upsert_quantity(&mut shifted, shipping_key, entry.quantity),
            None => {
                tracing::warn!(
                    record = %record.id,
                    date = %entry.date,
                    "unparseable date key kept unshifted"
                );
                upsert_quantity(&mut shifted, entry.date, entry.quantity);
            }
        }
    }
    record.quantities = shifted;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(id: &str, part: &str, dates: &[(&str, rust_decimal::Decimal)]) -> ForecastRecord {
        ForecastRecord::new(
            id.into(),
            part.into(),
            dates
                .iter()
                .map(|(date, quantity)| QuantityEntry {
                    date: date.to_string(),
                    quantity: *quantity,
                })
                .collect(),
        )
    }

    #[test]
    fn test_replace_and_clear() {
        let mut state = AppState::new();
        state.replace(vec![record("item_1", "111", &[])]);
        assert_eq!(state.records().len(), 1);
        state.replace(vec![record("item_1", "222", &[]), record("item_2", "333", &[])]);
        assert_eq!(state.records().len(), 2);
        state.clear();
        assert!(state.records().is_empty());
    }

    #[test]
    fn test_edit_rekeys_by_shipping_date() {
        let mut state = AppState::new();
        // 01/02/24 is a Thursday
        state.replace(vec![record("item_1", "111", &[("01/02/24", dec!(100))])]);
        state.set_transit_time("item_1", "1").unwrap();

        let r = &state.records()[0];
        assert_eq!(r.transit_time, 1);
        assert_eq!(r.quantity_for("31/01/2024"), Some(dec!(100)));
        assert_eq!(r.quantity_for("01/02/24"), None);
    }

    #[test]
    fn test_edit_with_zero_normalizes_keys() {
        let mut state = AppState::new();
        state.replace(vec![record("item_1", "111", &[("01/02/24", dec!(100))])]);
        state.set_transit_time("item_1", "0").unwrap();
        assert_eq!(state.records()[0].quantity_for("01/02/2024"), Some(dec!(100)));
    }

    #[test]
    fn test_invalid_input_leaves_record_untouched() {
        let mut state = AppState::new();
        state.replace(vec![record("item_1", "111", &[("01/02/24", dec!(100))])]);

        for bad in ["-1", "abc", ""] {
            let err = state.set_transit_time("item_1", bad).unwrap_err();
            assert!(matches!(err, SkeppaError::InvalidTransitTime { .. }));
        }

        let r = &state.records()[0];
        assert_eq!(r.transit_time, 0);
        assert_eq!(r.quantity_for("01/02/24"), Some(dec!(100)));
    }

    #[test]
    fn test_unknown_record_id() {
        let mut state = AppState::new();
        state.replace(vec![record("item_1", "111", &[])]);
        let err = state.set_transit_time("item_9", "1").unwrap_err();
        assert!(matches!(err, SkeppaError::UnknownRecord(_)));
    }

    #[test]
    fn test_only_the_addressed_record_changes() {
        let mut state = AppState::new();
        state.replace(vec![
            record("item_1", "111", &[("01/02/24", dec!(100))]),
            record("item_2", "222", &[("01/02/24", dec!(250))]),
        ]);
        state.set_transit_time("item_2", "1").unwrap();

        assert_eq!(state.records()[0].quantity_for("01/02/24"), Some(dec!(100)));
        assert_eq!(state.records()[1].quantity_for("31/01/2024"), Some(dec!(250)));
    }

    #[test]
    fn test_colliding_shipping_dates_collapse() {
        // Saturday 03/02/24 and Sunday 04/02/24 both walk back to Friday
        let mut r = record(
            "item_1",
            "111",
            &[("03/02/24", dec!(10)), ("04/02/24", dec!(20))],
        );
        apply_transit_time(&mut r, 1);
        assert_eq!(r.quantities.len(), 1);
        assert_eq!(r.quantity_for("02/02/2024"), Some(dec!(20)));
    }

    #[test]
    fn test_unparseable_key_kept_unshifted() {
        let mut r = record(
            "item_1",
            "111",
            &[("tbd", dec!(5)), ("01/02/24", dec!(100))],
        );
        apply_transit_time(&mut r, 1);
        assert_eq!(r.quantity_for("tbd"), Some(dec!(5)));
        assert_eq!(r.quantity_for("31/01/2024"), Some(dec!(100)));
    }

    #[test]
    fn test_edits_are_cumulative() {
        // Re-editing shifts the already-shifted keys; callers that need an
        // absolute shift re-extract first.
        let mut r = record("item_1", "111", &[("01/02/24", dec!(100))]);
        apply_transit_time(&mut r, 1);
        assert_eq!(r.quantity_for("31/01/2024"), Some(dec!(100)));
        apply_transit_time(&mut r, 1);
        assert_eq!(r.quantity_for("30/01/2024"), Some(dec!(100)));
    }
}
