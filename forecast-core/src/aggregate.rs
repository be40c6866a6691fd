//! Reduces a week of daily entries to a single monthly-view record.

use chrono::{Duration, NaiveDateTime};

use crate::model::ForecastRecord;

/// The parts of a day the monthly view needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyEntry {
    pub max_temp: i32,
    pub min_temp: i32,
    /// Weather phrase of the day's midday (index 4) sample.
    pub midday_condition: String,
}

/// Builds the record for one week bucket. Returns `None` for an empty bucket.
pub fn aggregate(
    days: &[DailyEntry],
    city: &str,
    week_start: NaiveDateTime,
) -> Option<ForecastRecord> {
    let max_temp = days.iter().map(|d| d.max_temp).max()?;
    let min_temp = days.iter().map(|d| d.min_temp).min()?;
    let weather_condition = mode(days.iter().map(|d| d.midday_condition.as_str()))?;

    let sum: i64 = days.iter().map(|d| i64::from(d.max_temp)).sum();
    let temperature = (sum as f64 / days.len() as f64).round() as i32;

    Some(ForecastRecord {
        timestamp: week_start,
        end_timestamp: Some(week_start + Duration::days(6)),
        city: city.to_string(),
        weather_condition: weather_condition.to_string(),
        temperature,
        wind_speed_ms: None,
        humidity: None,
        feels_like: None,
        min_temp: Some(min_temp),
        max_temp: Some(max_temp),
    })
}

/// Most frequent value; ties go to the value that appeared first.
pub fn mode<'a, I>(values: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    // (value, count) in first-appearance order
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for value in values {
        match counts.iter().position(|&(v, _)| v == value) {
            Some(i) => counts[i].1 += 1,
            None => counts.push((value, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (value, n) in counts {
        if best.is_none_or(|(_, top)| n > top) {
            best = Some((value, n));
        }
    }

    best.map(|(value, _)| value)
}
