use std::path::Path;

use tracing::{error, info};

use crate::analyzers::{highest_density, smallest_spread};
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::mappers::{country, weather, CountryRowMapper, WeatherRowMapper};
use crate::readers::CsvRecordReader;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Weather { file, strict } => report_smallest_spread(&file, strict),

        Commands::Countries { file, strict } => report_highest_density(&file, strict),

        Commands::Report {
            weather_file,
            countries_file,
            strict,
        } => {
            // The two pipelines are independent: one failing must not stop
            // the other.
            if let Err(e) = report_smallest_spread(&weather_file, strict) {
                error!("Weather pipeline failed: {e}");
            }
            if let Err(e) = report_highest_density(&countries_file, strict) {
                error!("Countries pipeline failed: {e}");
            }
            Ok(())
        }
    }
}

fn report_smallest_spread(path: &Path, strict: bool) -> Result<()> {
    info!("Finding the day with the smallest temperature spread");

    let mapper = WeatherRowMapper::new(!strict);
    let reader = CsvRecordReader::new();
    let records = reader.read_all(path, &weather::csv_format(), &mapper)?;

    match smallest_spread(&records) {
        Some(day) => println!(
            "Day {} has the smallest temperature spread: {}",
            day.day,
            day.spread()
        ),
        None => println!("No valid weather records in {}", path.display()),
    }

    Ok(())
}

fn report_highest_density(path: &Path, strict: bool) -> Result<()> {
    info!("Finding the country with the highest population density");

    let mapper = CountryRowMapper::new(!strict);
    let reader = CsvRecordReader::new();
    let records = reader.read_all(path, &country::csv_format(), &mapper)?;

    match highest_density(&records) {
        Some(country) => println!(
            "{} has the highest population density: {:.1} people/km²",
            country.name,
            country.density()
        ),
        None => println!("No valid country records in {}", path.display()),
    }

    Ok(())
}
