// Analyzer module: aggregates submodules for the different catalog queries.

pub mod dataset_analyzer;
pub mod price_split;
pub mod release_year;
pub mod reviews;

// Re-export the main Analyzer implementation for ease of use.
pub use dataset_analyzer::{Analyzer, DatasetAnalyzer};
