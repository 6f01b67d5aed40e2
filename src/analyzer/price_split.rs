use crate::model::{PriceSplit, Record, PRICE_COLUMN};

/// Raw text marking a free entry. Compared as text: "0" or "0.00" count as paid.
pub const FREE_PRICE: &str = "0.0";

pub fn is_free(record: &Record) -> bool {
    record.get(PRICE_COLUMN) == Some(FREE_PRICE)
}

/// Percentage of free and paid entries. An empty dataset yields zero for both.
pub fn price_split(records: &[Record]) -> PriceSplit {
    let total = records.len();
    if total == 0 {
        return PriceSplit::EMPTY;
    }

    let free = records.iter().filter(|r| is_free(r)).count();
    let paid = total - free;

    PriceSplit {
        free: free as f64 / total as f64 * 100.0,
        paid: paid as f64 / total as f64 * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(price: &str) -> Record {
        Record::from_pairs([(PRICE_COLUMN, price)])
    }

    #[test]
    fn empty_dataset_is_zero_zero() {
        assert_eq!(price_split(&[]), PriceSplit { free: 0.0, paid: 0.0 });
    }

    #[test]
    fn free_matches_literal_text_only() {
        assert!(is_free(&priced("0.0")));
        assert!(!is_free(&priced("0")));
        assert!(!is_free(&priced("0.00")));
        assert!(!is_free(&priced(" 0.0")));
    }

    #[test]
    fn missing_price_counts_as_paid() {
        let records = vec![priced("0.0"), Record::from_pairs([("Name", "Orphan")])];
        let split = price_split(&records);
        assert_eq!(split, PriceSplit { free: 50.0, paid: 50.0 });
    }

    #[test]
    fn percentages_sum_to_hundred() {
        let records = vec![priced("0.0"), priced("0"), priced("4.99")];
        let split = price_split(&records);

        assert!((split.free - 100.0 / 3.0).abs() < 1e-9);
        assert!((split.free + split.paid - 100.0).abs() < 1e-9);
    }
}
