use crate::model::{Record, YearMode, RELEASE_DATE_COLUMN};
use std::collections::HashMap;
use tracing::warn;

/// Pulls the year out of a release date.
///
/// Two dialects are recognized:
/// - long form with a comma ("Jan 4, 2019"): the last whitespace token;
/// - slash form without a comma ("mar/17"): "20" followed by the last segment.
///
/// Anything else yields `None`. The slash form assumes the 2000s.
pub fn extract_year(release_date: &str) -> Option<String> {
    if release_date.contains(',') {
        release_date.split_whitespace().last().map(str::to_string)
    } else if release_date.contains('/') {
        release_date
            .rsplit('/')
            .next()
            .map(|suffix| format!("20{}", suffix))
    } else {
        None
    }
}

/// Year of a single record, or `None` when it cannot be determined.
/// Extraction failures are logged and never abort the caller.
pub fn record_year(record: &Record) -> Option<String> {
    match record.require(RELEASE_DATE_COLUMN) {
        Ok(raw) => extract_year(raw),
        Err(e) => {
            warn!("Skipping release date: {}", e);
            None
        }
    }
}

/// Occurrence counts per year, iterated in first-seen order.
#[derive(Debug, Default)]
pub struct YearTally {
    counts: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl YearTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, year: String) {
        match self.index.get(&year) {
            Some(&pos) => self.counts[pos].1 += 1,
            None => {
                self.index.insert(year.clone(), self.counts.len());
                self.counts.push((year, 1));
            }
        }
    }

    pub fn get(&self, year: &str) -> usize {
        self.index.get(year).map_or(0, |&pos| self.counts[pos].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(year, count)| (year.as_str(), *count))
    }

    /// Every year sharing the highest count, in first-seen order.
    pub fn modes(&self) -> Vec<String> {
        let Some(max) = self.counts.iter().map(|(_, count)| *count).max() else {
            return Vec::new();
        };
        self.counts
            .iter()
            .filter(|(_, count)| *count == max)
            .map(|(year, _)| year.clone())
            .collect()
    }
}

pub fn tally_years(records: &[Record]) -> YearTally {
    let mut tally = YearTally::new();
    for year in records.iter().filter_map(record_year) {
        tally.add(year);
    }
    tally
}

/// Year with the most releases, or the tied years when several share the maximum.
pub fn busiest_year(records: &[Record]) -> YearMode {
    let mut modes = tally_years(records).modes();
    match modes.len() {
        0 => YearMode::None,
        1 => YearMode::Single(modes.remove(0)),
        _ => YearMode::Tied(modes),
    }
}
