use super::entities::CoinRecord;
use super::value_objects::FilterKey;

/// Domain service - narrows a record set to the active filter.
pub struct RecordFilter;

impl RecordFilter {
    /// `All` passes the records through untouched (same order, same
    /// length); a coin id keeps only matching records, preserving
    /// relative order. The result may be empty. Pure, no mutation.
    pub fn apply(records: &[CoinRecord], filter: &FilterKey) -> Vec<CoinRecord> {
        match filter {
            FilterKey::All => records.to_vec(),
            FilterKey::Id(id) => records.iter().filter(|r| &r.id == id).cloned().collect(),
        }
    }
}

/// Polarity of a flagged change. Non-negative counts as up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertDirection {
    Up,
    Down,
}

/// Outcome of evaluating one record against the alert threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertSignal {
    pub exceeds: bool,
    pub direction: AlertDirection,
}

/// Domain service - flags records whose 24h change magnitude crosses
/// the configured threshold.
pub struct AlertEvaluator;

impl AlertEvaluator {
    /// The threshold is trusted here; the configuration boundary
    /// rejects non-positive values before they are ever stored.
    /// Records without a change value never exceed.
    pub fn evaluate(record: &CoinRecord, threshold: f64) -> AlertSignal {
        match record.price_change_24h {
            Some(change) => AlertSignal {
                exceeds: change.magnitude() >= threshold,
                direction: if change.is_non_negative() {
                    AlertDirection::Up
                } else {
                    AlertDirection::Down
                },
            },
            None => AlertSignal { exceeds: false, direction: AlertDirection::Up },
        }
    }
}
