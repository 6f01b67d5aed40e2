use crate::analyzer::price_split::price_split;
use crate::analyzer::release_year::busiest_year;
use crate::analyzer::reviews::most_positive;
use crate::error::DatasetError;
use crate::loader::{CsvDatasetLoader, DatasetLoader};
use crate::model::{AnalysisReport, PriceSplit, Record, TopReviewed, YearMode};
use chrono::Utc;
use std::path::Path;
use tracing::debug;

/// Read-only queries over a loaded catalog.
pub trait Analyzer {
    fn calculate_price_percentages(&self) -> PriceSplit;
    fn get_year_with_most_games(&self) -> YearMode;
    fn get_game_with_most_positive_reviews(&self) -> Option<String>;
}

/// Holds one dataset, loaded once and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct DatasetAnalyzer {
    records: Vec<Record>,
}

impl DatasetAnalyzer {
    /// Loads `path` with the given single-byte field separator.
    pub fn new(path: impl AsRef<Path>, separator: u8) -> Result<Self, DatasetError> {
        Self::with_loader(path, &CsvDatasetLoader::new(separator))
    }

    pub fn with_loader<L: DatasetLoader>(
        path: impl AsRef<Path>,
        loader: &L,
    ) -> Result<Self, DatasetError> {
        let records = loader.load(path.as_ref())?;
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Like `get_game_with_most_positive_reviews`, but keeps the count.
    pub fn top_reviewed(&self) -> Option<TopReviewed> {
        most_positive(&self.records)
    }

    /// Runs every query and bundles the results.
    pub fn report(&self) -> AnalysisReport {
        AnalysisReport {
            total_records: self.len(),
            price_split: self.calculate_price_percentages(),
            busiest_year: self.get_year_with_most_games(),
            top_reviewed: self.top_reviewed(),
            generated_at: Utc::now(),
        }
    }
}

impl Analyzer for DatasetAnalyzer {
    fn calculate_price_percentages(&self) -> PriceSplit {
        let split = price_split(&self.records);
        debug!("Price split: free = {:.2}%, paid = {:.2}%", split.free, split.paid);
        split
    }

    fn get_year_with_most_games(&self) -> YearMode {
        let mode = busiest_year(&self.records);
        debug!("Busiest release year: {}", mode);
        mode
    }

    fn get_game_with_most_positive_reviews(&self) -> Option<String> {
        self.top_reviewed().map(|top| top.name)
    }
}
