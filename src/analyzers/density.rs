use crate::models::CountryRecord;

/// Select the record with the highest population density.
///
/// Empty input yields `None`; a single record short-circuits. Ties keep the
/// earliest record in input order (the sort is stable), and the caller's
/// collection is never reordered.
pub fn highest_density(records: &[CountryRecord]) -> Option<&CountryRecord> {
    match records {
        [] => None,
        [only] => Some(only),
        _ => {
            let mut by_density: Vec<&CountryRecord> = records.iter().collect();
            by_density.sort_by(|a, b| b.density().total_cmp(&a.density()));
            by_density.first().copied()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, population: i64, area: f64) -> CountryRecord {
        CountryRecord {
            name: name.to_string(),
            capital: "Capital".to_string(),
            accession: "1958".to_string(),
            population,
            area,
            gdp: 1000,
            hdi: 0.9,
            meps: 20,
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(highest_density(&[]).is_none());
    }

    #[test]
    fn test_single_record() {
        let records = vec![record("Malta", 516_000, 316.0)];
        assert_eq!(highest_density(&records).unwrap().name, "Malta");
    }

    #[test]
    fn test_highest_density_wins() {
        // Densities roughly 232.5, 421.7, 104.1.
        let records = vec![
            record("Germany", 83_000_000, 357_000.0),
            record("Netherlands", 17_500_000, 41_500.0),
            record("France", 67_000_000, 643_800.0),
        ];

        let winner = highest_density(&records).unwrap();
        assert_eq!(winner.name, "Netherlands");
        assert!((winner.density() - 421.7).abs() < 0.1);
    }

    #[test]
    fn test_tie_keeps_first_in_input_order() {
        let records = vec![
            record("A", 1_000, 10.0),
            record("B", 2_000, 20.0),
            record("C", 500, 10.0),
        ];

        assert_eq!(highest_density(&records).unwrap().name, "A");
    }

    #[test]
    fn test_input_not_reordered() {
        let records = vec![
            record("France", 67_000_000, 643_800.0),
            record("Netherlands", 17_500_000, 41_500.0),
        ];
        let _ = highest_density(&records);
        assert_eq!(records[0].name, "France");
    }

    #[test]
    fn test_result_not_less_than_any_other() {
        let records = vec![
            record("Germany", 83_000_000, 357_000.0),
            record("Netherlands", 17_500_000, 41_500.0),
            record("France", 67_000_000, 643_800.0),
        ];

        let winner = highest_density(&records).unwrap();
        assert!(records.iter().all(|r| winner.density() >= r.density()));
        assert!(records.iter().any(|r| winner.density() > r.density()));
    }

    #[test]
    fn test_idempotent() {
        let records = vec![
            record("Germany", 83_000_000, 357_000.0),
            record("Netherlands", 17_500_000, 41_500.0),
        ];
        let first = highest_density(&records).unwrap().name.clone();
        assert_eq!(highest_density(&records).unwrap().name, first);
    }
}
