use crate::{Config, RawWeatherResponse, provider::wttr::WttrProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod wttr;

/// Source of raw forecast documents.
///
/// Implementations only fetch and decode; interpreting the document is the
/// extractor's job.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch(&self, city: &str) -> anyhow::Result<RawWeatherResponse>;
}

/// Construct the wttr.in provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let provider = WttrProvider::from_config(config)?;
    Ok(Box::new(provider))
}
