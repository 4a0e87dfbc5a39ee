//! Back-calculation of shipping dates from delivery dates.
//!
//! Transit time is measured strictly in business days: walking backward
//! from the delivery date, Saturdays and Sundays never consume transit
//! budget.

use crate::error::SkeppaError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Parse a `dd/mm/yy` or `dd/mm/yyyy` date key. Two-digit years below 100
/// get 2000 added. Impossible dates yield `None`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let mut parts = s.trim().split('/');
    let day: u32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let mut year: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    if year < 100 {
        year += 2000;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Format a date the way re-keyed quantities are keyed: `dd/mm/yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Validate a raw transit-time input. Empty, non-numeric, and negative
/// input is rejected with a user-facing message.
pub fn parse_transit_time(raw: &str) -> Result<u32, SkeppaError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SkeppaError::InvalidTransitTime {
            input: raw.to_string(),
            reason: "must not be empty".into(),
        });
    }
    match trimmed.parse::<i64>() {
        Ok(days) if days >= 0 => Ok(days as u32),
        Ok(_) => Err(SkeppaError::InvalidTransitTime {
            input: raw.to_string(),
            reason: "must not be negative".into(),
        }),
        Err(_) => Err(SkeppaError::InvalidTransitTime {
            input: raw.to_string(),
            reason: "must be a whole number of business days".into(),
        }),
    }
}

/// Compute the shipping date for a delivery date key.
///
/// Walks backward one calendar day at a time and decrements the remaining
/// budget only on non-weekend days, so weekends are skipped outright. A
/// transit time of zero returns the delivery date itself, reformatted to
/// `dd/mm/yyyy`. Returns `None` when the delivery date is absent or not a
/// parseable date.
pub fn shipping_date(delivery: &str, transit_days: u32) -> Option<String> {
    let mut date = parse_date(delivery)?;
    let mut remaining = transit_days;
    while remaining > 0 {
        date = date - Duration::days(1);
        if !is_weekend(date) {
            remaining -= 1;
        }
    }
    Some(format_date(date))
}
