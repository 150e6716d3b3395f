use serde::{Deserialize, Serialize};

/// A price as returned by the API: usually a number, but echoed verbatim otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceValue {
    Number(f64),
    Raw(String),
}

/// Price, 24h change and market cap of one coin in one currency.
#[derive(Debug, Clone, PartialEq)]
pub struct CryptoQuote {
    pub id: String,
    pub currency: String,
    pub price: PriceValue,
    pub change_24h: Option<f64>,
    pub market_cap: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingCoin {
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub market_cap_rank: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub market_cap_rank: Option<u64>,
}

/// The API uses `0` and `null` interchangeably for "no rank".
pub(crate) fn known_rank(rank: Option<u64>) -> Option<u64> {
    rank.filter(|r| *r != 0)
}
