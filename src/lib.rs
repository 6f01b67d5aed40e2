pub mod analyzer;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;

pub use analyzer::{Analyzer, DatasetAnalyzer};
pub use error::{ConfigError, DatasetError, FieldError};
pub use loader::{CsvDatasetLoader, DatasetLoader, DEFAULT_SEPARATOR};
pub use model::{AnalysisReport, PriceSplit, Record, ReviewCount, TopReviewed, YearMode};
