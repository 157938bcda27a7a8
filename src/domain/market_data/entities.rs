pub use super::value_objects::{CoinId, FilterKey, Percent, Price, Trend, Volume};
use serde::{Deserialize, Serialize};

/// Domain entity - trailing price series backing a sparkline.
///
/// Ordered oldest-first. May be empty, in which case rendering is a
/// no-op for the owning record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceSeries(Vec<f64>);

impl PriceSeries {
    pub fn new(samples: Vec<f64>) -> Self {
        Self(samples)
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<f64> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.0.last().copied()
    }

    pub fn min(&self) -> Option<f64> {
        if self.0.is_empty() {
            return None;
        }
        Some(self.0.iter().fold(f64::INFINITY, |a, &b| a.min(b)))
    }

    pub fn max(&self) -> Option<f64> {
        if self.0.is_empty() {
            return None;
        }
        Some(self.0.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b)))
    }

    /// Rising when the last sample is at or above the first.
    /// An empty series reads as rising so charts default to the calm color.
    pub fn trend(&self) -> Trend {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) if last < first => Trend::Falling,
            _ => Trend::Rising,
        }
    }
}

impl From<Vec<f64>> for PriceSeries {
    fn from(samples: Vec<f64>) -> Self {
        Self(samples)
    }
}

/// Domain entity - one tracked instrument's latest market state.
///
/// Immutable once fetched; every successful sync replaces the whole
/// record set instead of patching records in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinRecord {
    pub id: CoinId,
    pub name: String,
    pub symbol: String,
    pub image: String,
    pub current_price: Price,
    pub market_cap_rank: Option<u32>,
    pub price_change_24h: Option<Percent>,
    pub total_volume: Volume,
    pub high_24h: Price,
    pub low_24h: Price,
    pub market_cap: Price,
    pub ath: Price,
    pub atl: Price,
    pub sparkline: PriceSeries,
}

impl CoinRecord {
    pub fn trend(&self) -> Trend {
        self.sparkline.trend()
    }
}

/// The full record collection from the most recent successful sync,
/// together with the active filter and its derived view.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSnapshot {
    records: Vec<CoinRecord>,
    filter: FilterKey,
}

impl MarketSnapshot {
    pub fn new(records: Vec<CoinRecord>, filter: FilterKey) -> Self {
        Self { records, filter }
    }

    pub fn records(&self) -> &[CoinRecord] {
        &self.records
    }

    pub fn filter(&self) -> &FilterKey {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: FilterKey) {
        self.filter = filter;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The filtered view recomputed from the current records and filter.
    pub fn filtered(&self) -> Vec<CoinRecord> {
        super::services::RecordFilter::apply(&self.records, &self.filter)
    }
}
