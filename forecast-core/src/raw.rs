//! Typed schema of the wttr.in `format=j1` document.
//!
//! Only the keys the extractor reads are modelled. Every section that may be
//! missing is an `Option`, so a partial document still deserializes and the
//! extractor decides what is required for the requested forecast kind.

use std::borrow::Cow;

use serde::Deserialize;

/// wttr.in sends every scalar as a JSON string; plain numbers are accepted too.
///
/// Any other JSON type lands in `Other`, so one odd field does not fail the
/// whole document. The extractor reports it only if it actually reads it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Other(serde_json::Value),
}

impl Scalar {
    /// Textual form of a string or number; `None` for any other JSON type.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Scalar::Text(s) => Some(Cow::Borrowed(s.as_str())),
            Scalar::Number(n) => Some(Cow::Owned(n.to_string())),
            Scalar::Other(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Text(s) => write!(f, "{s:?}"),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Other(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawText {
    pub value: Scalar,
}

/// One observation: the current condition or a three-hourly forecast slot.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawSample {
    #[serde(rename = "weatherDesc", default)]
    pub weather_desc: Vec<RawText>,

    /// `temp_C` on the current condition, `tempC` on hourly slots.
    #[serde(rename = "temp_C", alias = "tempC")]
    pub temp_c: Option<Scalar>,

    #[serde(rename = "windspeedKmph")]
    pub windspeed_kmph: Option<Scalar>,

    pub humidity: Option<Scalar>,

    #[serde(rename = "FeelsLikeC")]
    pub feels_like_c: Option<Scalar>,

    /// `HHMM` without zero padding (`"0"`, `"300"`, `"1500"`). Hourly only.
    pub time: Option<Scalar>,
}

impl RawSample {
    pub fn description(&self) -> Option<&str> {
        self.weather_desc.first().and_then(|d| d.value.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawDay {
    /// `YYYY-MM-DD`
    pub date: Option<Scalar>,

    #[serde(rename = "maxtempC")]
    pub max_temp_c: Option<Scalar>,

    #[serde(rename = "mintempC")]
    pub min_temp_c: Option<Scalar>,

    #[serde(default)]
    pub hourly: Vec<RawSample>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawWeatherResponse {
    pub current_condition: Option<Vec<RawSample>>,
    pub weather: Option<Vec<RawDay>>,
}
