use crate::domain::errors::AppError;
use crate::domain::market_data::{CoinRecord, Currency};

/// Inbound port for the market data source.
///
/// Upstream failure shows up either as `Err` or as an empty record set;
/// the scheduler treats both the same way for retry purposes.
#[allow(async_fn_in_trait)]
pub trait MarketDataSource {
    async fn fetch_market_records(
        &self,
        page: u32,
        per_page: u32,
        currency: Currency,
    ) -> Result<Vec<CoinRecord>, AppError>;
}
