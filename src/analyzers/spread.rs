use crate::models::WeatherRecord;

/// Select the observation with the smallest temperature spread.
///
/// Empty input yields `None`; a single record short-circuits. Ties keep the
/// earliest record in input order (the sort is stable), and the caller's
/// collection is never reordered.
pub fn smallest_spread(records: &[WeatherRecord]) -> Option<&WeatherRecord> {
    match records {
        [] => None,
        [only] => Some(only),
        _ => {
            let mut by_spread: Vec<&WeatherRecord> = records.iter().collect();
            by_spread.sort_by_key(|r| r.spread());
            by_spread.first().copied()
        }
    }
}
