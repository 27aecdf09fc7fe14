pub mod country;
pub mod weather;

pub use country::CountryRecord;
pub use weather::WeatherRecord;
