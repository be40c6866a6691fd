use chrono::NaiveDateTime;

/// km/h → m/s.
pub const KMH_TO_MS: f64 = 0.277778;

/// Which view of the forecast to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForecastKind {
    Today,
    Weekly,
    Monthly,
}

impl ForecastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastKind::Today => "today",
            ForecastKind::Weekly => "weekly",
            ForecastKind::Monthly => "monthly",
        }
    }

    pub const fn all() -> &'static [ForecastKind] {
        &[ForecastKind::Today, ForecastKind::Weekly, ForecastKind::Monthly]
    }
}

impl std::fmt::Display for ForecastKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct ForecastRequest {
    pub city: String,
    pub kind: ForecastKind,
}

/// One normalized forecast entry, ready for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRecord {
    /// Observation time, or the week start for monthly records.
    pub timestamp: NaiveDateTime,
    /// Week end; monthly only.
    pub end_timestamp: Option<NaiveDateTime>,
    pub city: String,
    /// Untranslated service phrase.
    pub weather_condition: String,
    pub temperature: i32,
    pub wind_speed_ms: Option<f64>,
    pub humidity: Option<String>,
    pub feels_like: Option<String>,
    pub min_temp: Option<i32>,
    pub max_temp: Option<i32>,
}

/// A successful lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub kind: ForecastKind,
    pub records: Vec<ForecastRecord>,
}

/// Converts km/h to m/s, rounded to two decimals.
pub fn kmh_to_ms(kmh: f64) -> f64 {
    (kmh * KMH_TO_MS * 100.0).round() / 100.0
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_alpha = false;

    for c in input.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}
