use derive_more::{Constructor, Deref, DerefMut, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - quoted price in the active currency
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, DerefMut, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - traded volume over the 24h window
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, DerefMut, Constructor, Serialize, Deserialize)]
pub struct Volume(f64);

impl Volume {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - percent change over a fixed window
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, DerefMut, Constructor, Serialize, Deserialize)]
pub struct Percent(f64);

impl Percent {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn magnitude(&self) -> f64 {
        self.0.abs()
    }

    pub fn is_non_negative(&self) -> bool {
        self.0 >= 0.0
    }
}

impl PartialOrd for Percent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - upstream instrument identity (e.g. "bitcoin")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, DerefMut, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct CoinId(String);

impl CoinId {
    pub fn new(id: String) -> Result<Self, String> {
        if id.is_empty() {
            return Err("Coin id cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CoinId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CoinId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Value Object - quote currency accepted by the data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum Currency {
    #[strum(serialize = "usd")]
    #[serde(rename = "usd")]
    Usd,

    #[strum(serialize = "eur")]
    #[serde(rename = "eur")]
    Eur,

    #[strum(serialize = "btc")]
    #[serde(rename = "btc")]
    Btc,
}

impl Currency {
    pub fn to_query_str(&self) -> &str {
        self.as_ref()
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::Usd
    }
}

/// Value Object - active record filter. `All` is the `"all"` sentinel
/// coming from the filter select; anything else narrows to one coin id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterKey {
    All,
    Id(CoinId),
}

impl FilterKey {
    pub const ALL_SENTINEL: &'static str = "all";

    pub fn parse(raw: &str) -> Self {
        if raw == Self::ALL_SENTINEL {
            Self::All
        } else {
            Self::Id(CoinId::from(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => Self::ALL_SENTINEL,
            Self::Id(id) => id.value(),
        }
    }
}

impl Default for FilterKey {
    fn default() -> Self {
        Self::All
    }
}

/// Trend direction of a price series, decided by its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum Trend {
    #[strum(serialize = "rising")]
    Rising,
    #[strum(serialize = "falling")]
    Falling,
}
