use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// National statistics for a single country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CountryRecord {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1))]
    pub capital: String,

    pub accession: String,

    #[validate(range(min = 1))]
    pub population: i64,

    /// Area in square kilometres.
    #[validate(range(exclusive_min = 0.0))]
    pub area: f64,

    /// GDP in millions of US dollars.
    #[validate(range(min = 0))]
    pub gdp: i64,

    #[validate(range(min = 0.0, max = 1.0))]
    pub hdi: f64,

    #[validate(range(min = 1))]
    pub meps: i32,
}

impl CountryRecord {
    /// Population density in people per square kilometre.
    ///
    /// A zero area yields 0.0 rather than a division error, though
    /// validation never materializes such a record.
    pub fn density(&self) -> f64 {
        if self.area == 0.0 {
            return 0.0;
        }
        self.population as f64 / self.area
    }
}

impl fmt::Display for CountryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (capital {}, population {}, area {} km², density {:.1}/km²)",
            self.name,
            self.capital,
            self.population,
            self.area,
            self.density()
        )
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
    fn test_density() {
        let austria = record("Austria", 8_926_000, 83_855.0);
        assert!((austria.density() - 106.4).abs() < 0.1);
    }

    #[test]
    fn test_density_zero_area() {
        let mut broken = record("Nowhere", 1000, 1.0);
        broken.area = 0.0;
        assert_eq!(broken.density(), 0.0);
    }

    #[test]
    fn test_valid_record() {
        assert!(record("Austria", 8_926_000, 83_855.0).validate().is_ok());
    }

    #[test]
    fn test_hdi_bounds() {
        let mut r = record("Austria", 1000, 10.0);
        r.hdi = 0.0;
        assert!(r.validate().is_ok());
        r.hdi = 1.0;
        assert!(r.validate().is_ok());
        r.hdi = 1.5;
        assert!(r.validate().is_err());
        r.hdi = -0.1;
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_invalid_area_and_population() {
        let mut r = record("Austria", 1000, 10.0);
        r.area = 0.0;
        assert!(r.validate().is_err());
        r.area = 10.0;
        r.population = 0;
        assert!(r.validate().is_err());
    }
}
