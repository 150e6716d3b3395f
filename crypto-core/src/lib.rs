//! Core library for the `crypto` console.
//!
//! This crate defines:
//! - Configuration (API root, request timeout, default currency)
//! - The request error taxonomy
//! - Abstraction over a market-data provider, with a CoinGecko implementation
//! - Menu parsing and the text blocks the console prints

pub mod config;
pub mod error;
pub mod format;
pub mod menu;
pub mod model;
pub mod provider;
pub mod render;

pub use config::Config;
pub use error::FetchError;
pub use menu::MenuChoice;
pub use model::{CryptoQuote, PriceValue, SearchResult, TrendingCoin};
pub use provider::{MarketDataProvider, provider_from_config};
