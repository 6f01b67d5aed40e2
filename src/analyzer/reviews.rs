use crate::model::{Record, ReviewCount, TopReviewed, NAME_COLUMN, POSITIVE_COLUMN};
use tracing::warn;

/// Positive review count of a record.
///
/// Only non-empty, all-ASCII-digit values count. Anything else (empty, signed,
/// decimal, with separators) is `None`. Counts of any magnitude are accepted.
pub fn positive_reviews(record: &Record) -> Option<ReviewCount> {
    record.get(POSITIVE_COLUMN).and_then(ReviewCount::parse)
}

/// Entry with the most positive reviews.
///
/// The running maximum starts at 0 and only a strictly greater count replaces it,
/// so the first entry reaching the maximum wins and a dataset where every count
/// is "0" has no winner.
pub fn most_positive(records: &[Record]) -> Option<TopReviewed> {
    let mut best: Option<TopReviewed> = None;

    for record in records {
        let Some(count) = positive_reviews(record) else {
            continue;
        };
        if count.is_zero() {
            continue;
        }
        if best.as_ref().is_some_and(|top| count <= top.positive) {
            continue;
        }
        match record.require(NAME_COLUMN) {
            Ok(name) => {
                best = Some(TopReviewed {
                    name: name.to_string(),
                    positive: count,
                });
            }
            Err(e) => warn!("Skipping review leader candidate: {}", e),
        }
    }

    best
}
