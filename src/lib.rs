pub mod analyzers;
pub mod cli;
pub mod error;
pub mod mappers;
pub mod models;
pub mod readers;

pub use error::{PipelineError, Result};
