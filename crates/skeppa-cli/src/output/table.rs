use skeppa_core::model::ForecastRecord;

/// Render records as one table block per part: a column header per date
/// key and the transit time in the block header.
pub fn format_records(records: &[ForecastRecord]) -> String {
    let mut out = String::new();

    if records.is_empty() {
        out.push_str("No records found.\n");
        return out;
    }

    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "=== Part {} ({}) ===\n",
            record.part_number, record.id
        ));
        out.push_str(&format!(
            "  transit time: {} business day(s)\n\n",
            record.transit_time
        ));

        if record.quantities.is_empty() {
            out.push_str("  (no forecast dates)\n");
            continue;
        }

        let width = record
            .quantities
            .iter()
            .map(|e| e.date.len())
            .max()
            .unwrap_or(10);

        for entry in &record.quantities {
            out.push_str(&format!(
                "  {:<width$}  {}\n",
                entry.date,
                entry.quantity,
                width = width
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use skeppa_core::model::QuantityEntry;

    #[test]
    fn test_empty() {
        assert_eq!(format_records(&[]), "No records found.\n");
    }

    #[test]
    fn test_one_record_block() {
        let records = vec![ForecastRecord::new(
            "item_1".into(),
            "12345".into(),
            vec![
                QuantityEntry {
                    date: "01/02/24".into(),
                    quantity: 100.into(),
                },
                QuantityEntry {
                    date: "31/01/2024".into(),
                    quantity: 40.into(),
                },
            ],
        )];
        let rendered = format_records(&records);
        assert!(rendered.contains("=== Part 12345 (item_1) ==="));
        assert!(rendered.contains("transit time: 0 business day(s)"));
        assert!(rendered.contains("01/02/24"));
        assert!(rendered.contains("40"));
    }
}
