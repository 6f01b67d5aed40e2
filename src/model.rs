// Core structs: Record, PriceSplit, YearMode, TopReviewed, AnalysisReport
use chrono::{DateTime, Utc};
use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use crate::error::FieldError;

pub const PRICE_COLUMN: &str = "Price";
pub const RELEASE_DATE_COLUMN: &str = "Release date";
pub const POSITIVE_COLUMN: &str = "Positive";
pub const NAME_COLUMN: &str = "Name";

/// One catalog row: column name to raw text value. No coercion is ever applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Like `get`, but a missing column is an error the caller has to recover from.
    pub fn require(&self, column: &str) -> Result<&str, FieldError> {
        self.get(column).ok_or_else(|| FieldError::Missing {
            column: column.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Share of free and paid entries, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceSplit {
    #[serde(rename = "Free")]
    pub free: f64,
    #[serde(rename = "Paid")]
    pub paid: f64,
}

impl PriceSplit {
    pub const EMPTY: PriceSplit = PriceSplit { free: 0.0, paid: 0.0 };
}

/// Year(s) with the most releases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearMode {
    /// No record had an extractable year.
    None,
    Single(String),
    /// Several years share the top count, in first-seen order.
    Tied(Vec<String>),
}

impl fmt::Display for YearMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearMode::None => write!(f, "none"),
            YearMode::Single(year) => write!(f, "{}", year),
            YearMode::Tied(years) => write!(f, "{}", years.join(", ")),
        }
    }
}

// Single -> "2019", Tied -> ["2019", "2020"], None -> []
impl Serialize for YearMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            YearMode::Single(year) => serializer.serialize_str(year),
            YearMode::None => serializer.serialize_seq(Some(0))?.end(),
            YearMode::Tied(years) => {
                let mut seq = serializer.serialize_seq(Some(years.len()))?;
                for year in years {
                    seq.serialize_element(year)?;
                }
                seq.end()
            }
        }
    }
}

/// Non-negative review count of any magnitude, kept as digits without leading zeros.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReviewCount(String);

impl ReviewCount {
    /// Accepts non-empty ASCII digit strings only.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let digits = raw.trim_start_matches('0');
        let digits = if digits.is_empty() { "0" } else { digits };
        Some(Self(digits.to_string()))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Without leading zeros, a longer digit string is always the larger number.
impl Ord for ReviewCount {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for ReviewCount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ReviewCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Entry holding the highest positive review count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopReviewed {
    pub name: String,
    pub positive: ReviewCount,
}

/// All query results for one dataset.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub total_records: usize,
    pub price_split: PriceSplit,
    pub busiest_year: YearMode,
    pub top_reviewed: Option<TopReviewed>,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_reports_missing_column() {
        let record = Record::from_pairs([("Name", "Portal")]);
        assert_eq!(record.require("Name").ok(), Some("Portal"));
        assert_eq!(
            record.require("Price"),
            Err(FieldError::Missing {
                column: "Price".into()
            })
        );
    }

    #[test]
    fn year_mode_serializes_like_its_shape() {
        let single = serde_json::to_string(&YearMode::Single("2019".into())).unwrap();
        let tied =
            serde_json::to_string(&YearMode::Tied(vec!["2019".into(), "2020".into()])).unwrap();
        let none = serde_json::to_string(&YearMode::None).unwrap();

        assert_eq!(single, "\"2019\"");
        assert_eq!(tied, "[\"2019\",\"2020\"]");
        assert_eq!(none, "[]");
    }

    #[test]
    fn review_count_strips_leading_zeros() {
        assert_eq!(ReviewCount::parse("0042").unwrap().as_str(), "42");
        assert!(ReviewCount::parse("000").unwrap().is_zero());
        assert_eq!(ReviewCount::parse(""), None);
        assert_eq!(ReviewCount::parse("-5"), None);
        assert_eq!(ReviewCount::parse("1,000"), None);
    }

    #[test]
    fn review_count_orders_by_value_beyond_u64() {
        let huge = ReviewCount::parse("18446744073709551616").unwrap();
        let max = ReviewCount::parse("18446744073709551615").unwrap();
        let small = ReviewCount::parse("0009").unwrap();

        assert!(huge > max);
        assert!(max > small);
        assert!(ReviewCount::parse("10").unwrap() > ReviewCount::parse("9").unwrap());
        assert_eq!(
            ReviewCount::parse("007").unwrap().cmp(&ReviewCount::parse("7").unwrap()),
            Ordering::Equal
        );
    }

    #[test]
    fn year_mode_display() {
        assert_eq!(YearMode::Single("2021".into()).to_string(), "2021");
        assert_eq!(
            YearMode::Tied(vec!["2019".into(), "2020".into()]).to_string(),
            "2019, 2020"
        );
        assert_eq!(YearMode::None.to_string(), "none");
    }

    #[test]
    fn price_split_uses_capitalized_keys() {
        let json = serde_json::to_value(PriceSplit { free: 25.0, paid: 75.0 }).unwrap();
        assert_eq!(json["Free"], 25.0);
        assert_eq!(json["Paid"], 75.0);
    }
}
