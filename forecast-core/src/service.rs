use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::{
    error::ForecastError,
    extract::extract,
    model::{Forecast, ForecastRequest},
    provider::WeatherProvider,
};

/// Fetches the raw document for `request.city` and extracts the requested view.
///
/// Transport failures become [`ForecastError::FetchFailed`] and never reach
/// the extractor.
pub async fn fetch_forecast(
    provider: &dyn WeatherProvider,
    request: &ForecastRequest,
    now: NaiveDateTime,
) -> Result<Forecast, ForecastError> {
    let raw = provider.fetch(&request.city).await.map_err(|err| {
        warn!(city = %request.city, error = %format!("{err:#}"), "weather fetch failed");
        ForecastError::from(err)
    })?;

    debug!(city = %request.city, kind = %request.kind, "weather document received");

    let records = extract(&raw, request.kind, &request.city, now)?;

    Ok(Forecast { kind: request.kind, records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ErrorKind,
        model::ForecastKind,
        provider::wttr::WttrProvider,
        raw::RawWeatherResponse,
    };
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug)]
    struct StaticProvider(serde_json::Value);

    #[async_trait]
    impl WeatherProvider for StaticProvider {
        async fn fetch(&self, _city: &str) -> anyhow::Result<RawWeatherResponse> {
            Ok(serde_json::from_value(self.0.clone())?)
        }
    }

    #[derive(Debug)]
    struct FailingProvider;

    #[async_trait]
    impl WeatherProvider for FailingProvider {
        async fn fetch(&self, _city: &str) -> anyhow::Result<RawWeatherResponse> {
            Err(anyhow::anyhow!("operation timed out"))
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap().and_hms_opt(14, 0, 0).unwrap()
    }

    fn request(city: &str, kind: ForecastKind) -> ForecastRequest {
        ForecastRequest { city: city.to_string(), kind }
    }

    #[tokio::test]
    async fn today_lookup_returns_records() {
        let provider = StaticProvider(serde_json::json!({
            "current_condition": [{
                "temp_C": "22",
                "windspeedKmph": "36",
                "weatherDesc": [{ "value": "Partly cloudy" }]
            }]
        }));

        let forecast = fetch_forecast(&provider, &request("denpasar", ForecastKind::Today), now())
            .await
            .unwrap();

        assert_eq!(forecast.kind, ForecastKind::Today);
        assert_eq!(forecast.records.len(), 1);
        assert_eq!(forecast.records[0].city, "Denpasar");
        assert_eq!(forecast.records[0].humidity, None);
    }

    #[tokio::test]
    async fn fetch_failure_is_reported_as_fetch_failed() {
        let err = fetch_forecast(&FailingProvider, &request("Denpasar", ForecastKind::Weekly), now())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::FetchFailed);
        assert!(err.detail().contains("timed out"));
    }

    #[tokio::test]
    async fn missing_section_is_reported_without_records() {
        let provider = StaticProvider(serde_json::json!({ "current_condition": [] }));

        let err = fetch_forecast(&provider, &request("Denpasar", ForecastKind::Monthly), now())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MissingRequiredSection);
    }

    #[tokio::test]
    async fn server_error_through_http_provider_is_fetch_failed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/Denpasar"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let provider = WttrProvider::new(&mock_server.uri(), Duration::from_secs(5)).unwrap();
        let err = fetch_forecast(&provider, &request("Denpasar", ForecastKind::Today), now())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::FetchFailed);
        assert!(err.detail().contains("503"));
    }

    fn hourly() -> Vec<serde_json::Value> {
        (0..8)
            .map(|i| {
                let desc = if i == 4 { "Light rain" } else { "Mist" };
                serde_json::json!({
                    "time": (i * 300).to_string(),
                    "tempC": (18 + i).to_string(),
                    "windspeedKmph": "18",
                    "humidity": "80",
                    "FeelsLikeC": (18 + i).to_string(),
                    "weatherDesc": [{ "value": desc }]
                })
            })
            .collect()
    }

    fn week_of_days(n: usize) -> Vec<serde_json::Value> {
        (0..n)
            .map(|i| {
                serde_json::json!({
                    "date": format!("2025-03-{:02}", i + 1),
                    "maxtempC": "29",
                    "mintempC": "21",
                    "hourly": hourly()
                })
            })
            .collect()
    }

    async fn serve(city: &str, body: serde_json::Value) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/{city}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[tokio::test]
    async fn weekly_lookup_over_http() {
        let hourly = hourly();
        let mock_server = serve(
            "Bogor",
            serde_json::json!({
                "weather": [
                    { "date": "2025-03-01", "maxtempC": "29", "mintempC": "21", "hourly": hourly },
                    { "date": "2025-03-02", "maxtempC": "28", "mintempC": "20", "hourly": hourly }
                ]
            }),
        )
        .await;

        let provider = WttrProvider::new(&mock_server.uri(), Duration::from_secs(5)).unwrap();
        let forecast = fetch_forecast(&provider, &request("Bogor", ForecastKind::Weekly), now())
            .await
            .unwrap();

        assert_eq!(forecast.records.len(), 2);
        assert_eq!(forecast.records[0].weather_condition, "Light rain");
        assert_eq!(forecast.records[0].temperature, 22);
        assert_eq!(forecast.records[0].wind_speed_ms, Some(5.0));
        assert_eq!(forecast.records[1].max_temp, Some(28));
    }

    #[tokio::test]
    async fn wrongly_typed_field_outside_the_week_is_ignored_over_http() {
        let mut days = week_of_days(10);
        days[9]["hourly"][0]["tempC"] = serde_json::json!(true);
        let mock_server = serve("Bogor", serde_json::json!({ "weather": days })).await;

        let provider = WttrProvider::new(&mock_server.uri(), Duration::from_secs(5)).unwrap();
        let forecast = fetch_forecast(&provider, &request("Bogor", ForecastKind::Weekly), now())
            .await
            .unwrap();

        assert_eq!(forecast.records.len(), 7);
    }

    #[tokio::test]
    async fn wrongly_typed_field_inside_the_week_is_malformed_over_http() {
        let mut days = week_of_days(10);
        days[2]["hourly"][4]["tempC"] = serde_json::json!(true);
        let mock_server = serve("Bogor", serde_json::json!({ "weather": days })).await;

        let provider = WttrProvider::new(&mock_server.uri(), Duration::from_secs(5)).unwrap();
        let err = fetch_forecast(&provider, &request("Bogor", ForecastKind::Weekly), now())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MalformedField);
        assert!(err.detail().contains("weather[2].hourly[4].temp"));
    }
}
