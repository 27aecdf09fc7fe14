use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "extrema-processor")]
#[command(about = "Compute per-dataset extremes from delimited-text records")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the day with the smallest temperature spread
    Weather {
        #[arg(short, long, default_value = "data/weather.csv")]
        file: PathBuf,

        #[arg(long, help = "Abort on the first invalid row instead of skipping it")]
        strict: bool,
    },

    /// Find the country with the highest population density
    Countries {
        #[arg(short, long, default_value = "data/countries.csv")]
        file: PathBuf,

        #[arg(long, help = "Abort on the first invalid row instead of skipping it")]
        strict: bool,
    },

    /// Run both pipelines and report both extremes
    Report {
        #[arg(long, default_value = "data/weather.csv")]
        weather_file: PathBuf,

        #[arg(long, default_value = "data/countries.csv")]
        countries_file: PathBuf,

        #[arg(long, help = "Abort on the first invalid row instead of skipping it")]
        strict: bool,
    },
}
