//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - The typed schema of the wttr.in `j1` document
//! - Forecast extraction (today / weekly / monthly views) and weekly aggregation
//! - The Indonesian weather translation table
//! - Transport abstraction over the weather service, and configuration
//!
//! Extraction is pure and synchronous; only [`service::fetch_forecast`] and the
//! providers perform I/O.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod provider;
pub mod raw;
pub mod service;
pub mod translation;

pub use aggregate::{DailyEntry, aggregate};
pub use config::Config;
pub use error::{ErrorKind, ExtractionError, ForecastError};
pub use extract::extract;
pub use model::{Forecast, ForecastKind, ForecastRecord, ForecastRequest};
pub use provider::{WeatherProvider, provider_from_config, wttr::WttrProvider};
pub use raw::RawWeatherResponse;
pub use service::fetch_forecast;
pub use translation::{Translation, WeatherTranslationTable};
