use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use crate::{Config, RawWeatherResponse};

use super::WeatherProvider;

/// Fetches `{base_url}/{city}?format=j1` from wttr.in.
#[derive(Debug, Clone)]
pub struct WttrProvider {
    base_url: Url,
    http: Client,
}

impl WttrProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let parsed =
            Url::parse(base_url).with_context(|| format!("Invalid base URL: {base_url}"))?;

        if parsed.cannot_be_a_base() {
            return Err(anyhow!("Invalid base URL: {base_url} cannot carry a path"));
        }

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { base_url: parsed, http })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.base_url, config.timeout())
    }

    fn forecast_url(&self, city: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("Base URL {} cannot carry a path", self.base_url))?
            .pop_if_empty()
            .push(city);

        Ok(url)
    }
}

#[async_trait]
impl WeatherProvider for WttrProvider {
    async fn fetch(&self, city: &str) -> Result<RawWeatherResponse> {
        let url = self.forecast_url(city.trim())?;
        debug!(%url, "requesting wttr.in forecast");

        let res = self
            .http
            .get(url)
            .query(&[("format", "j1")])
            .send()
            .await
            .context("Failed to send request to wttr.in")?;

        let status = res.status();
        let body = res.text().await.context("Failed to read wttr.in response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "wttr.in request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: RawWeatherResponse =
            serde_json::from_str(&body).context("Failed to parse wttr.in JSON")?;

        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
