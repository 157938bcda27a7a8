use crate::domain::errors::{AppError, FetchResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{
    CoinId, CoinRecord, Currency, MarketDataSource, Percent, Price, PriceSeries, Volume,
};
use gloo::net::http::Request;
use serde::Deserialize;

/// HTTP client for the CoinGecko markets endpoint.
#[derive(Clone)]
pub struct CoinGeckoHttpClient {
    base_url: String,
}

impl Default for CoinGeckoHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

/// DTO for one `coins/markets` entry. Upstream nulls out individual
/// numeric fields now and then, so everything optional defaults.
#[derive(Debug, Deserialize)]
struct MarketDto {
    id: String,
    name: String,
    symbol: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    current_price: Option<f64>,
    #[serde(default)]
    market_cap_rank: Option<u32>,
    #[serde(default)]
    price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    total_volume: Option<f64>,
    #[serde(default)]
    high_24h: Option<f64>,
    #[serde(default)]
    low_24h: Option<f64>,
    #[serde(default)]
    market_cap: Option<f64>,
    #[serde(default)]
    ath: Option<f64>,
    #[serde(default)]
    atl: Option<f64>,
    #[serde(default)]
    sparkline_in_7d: Option<SparklineDto>,
}

#[derive(Debug, Deserialize)]
struct SparklineDto {
    #[serde(default)]
    price: Vec<f64>,
}

impl MarketDto {
    /// Converts the DTO into the domain record.
    fn to_domain_record(self) -> CoinRecord {
        CoinRecord {
            id: CoinId::from(self.id),
            name: self.name,
            symbol: self.symbol.to_uppercase(),
            image: self.image,
            current_price: Price::from(self.current_price.unwrap_or(0.0)),
            market_cap_rank: self.market_cap_rank,
            price_change_24h: self.price_change_percentage_24h.map(Percent::from),
            total_volume: Volume::from(self.total_volume.unwrap_or(0.0)),
            high_24h: Price::from(self.high_24h.unwrap_or(0.0)),
            low_24h: Price::from(self.low_24h.unwrap_or(0.0)),
            market_cap: Price::from(self.market_cap.unwrap_or(0.0)),
            ath: Price::from(self.ath.unwrap_or(0.0)),
            atl: Price::from(self.atl.unwrap_or(0.0)),
            sparkline: PriceSeries::new(self.sparkline_in_7d.map(|s| s.price).unwrap_or_default()),
        }
    }
}

impl CoinGeckoHttpClient {
    pub fn new() -> Self {
        Self { base_url: "https://api.coingecko.com/api/v3".to_string() }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    fn markets_url(&self, page: u32, per_page: u32, currency: Currency) -> String {
        format!(
            "{}/coins/markets?vs_currency={}&order=market_cap_desc&per_page={}&page={}&sparkline=true&price_change_percentage=24h",
            self.base_url,
            currency.to_query_str(),
            per_page,
            page
        )
    }

    /// Fetches the top markets page, sparkline included.
    pub async fn fetch_markets(
        &self,
        page: u32,
        per_page: u32,
        currency: Currency,
    ) -> FetchResult<Vec<CoinRecord>> {
        let url = self.markets_url(page, per_page, currency);

        get_logger().info(
            LogComponent::Infrastructure("CoinGecko"),
            &format!("📡 Fetching top {} markets (page {})", per_page, page),
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| AppError::Fetch(format!("Failed to send request: {e:?}")))?;

        if !response.ok() {
            return Err(AppError::Fetch(format!(
                "HTTP error: {} - {}",
                response.status(),
                response.status_text()
            )));
        }

        let dtos: Vec<MarketDto> = response
            .json()
            .await
            .map_err(|e| AppError::Fetch(format!("Failed to parse JSON: {e:?}")))?;

        let records: Vec<CoinRecord> = dtos.into_iter().map(MarketDto::to_domain_record).collect();

        get_logger().info(
            LogComponent::Infrastructure("CoinGecko"),
            &format!("✅ Successfully fetched {} market records", records.len()),
        );

        Ok(records)
    }
}

impl MarketDataSource for CoinGeckoHttpClient {
    async fn fetch_market_records(
        &self,
        page: u32,
        per_page: u32,
        currency: Currency,
    ) -> FetchResult<Vec<CoinRecord>> {
        self.fetch_markets(page, per_page, currency).await
    }
}
