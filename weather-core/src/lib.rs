//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration (service URL, request timeout)
//! - The request error taxonomy
//! - Abstraction over a current-conditions provider, with a wttr.in implementation
//! - Condition indicators and report rendering
//!
//! It is used by `weather-cli`, but the provider trait lets tests swap in canned responses.

pub mod config;
pub mod error;
pub mod indicator;
pub mod model;
pub mod provider;
pub mod report;

pub use config::Config;
pub use error::FetchError;
pub use indicator::{Indicator, indicator_for};
pub use model::WeatherReading;
pub use provider::{WeatherProvider, provider_from_config};
