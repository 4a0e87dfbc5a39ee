use skeppa_core::error::SkeppaError;
use skeppa_core::model::ForecastRecord;

pub fn print(records: &[ForecastRecord]) -> Result<(), SkeppaError> {
    let json = serde_json::to_string_pretty(records)?;
    println!("{json}");
    Ok(())
}
