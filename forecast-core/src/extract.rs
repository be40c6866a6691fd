//! Turns a raw wttr.in response into the today / weekly / monthly views.
//!
//! Extraction is a pure function of `(response, kind, city, now)`: no I/O and
//! no state between calls. Any required field that is missing or cannot be
//! parsed aborts the whole call with [`ExtractionError::MalformedField`].

use std::borrow::Cow;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use tracing::debug;

use crate::{
    aggregate::{DailyEntry, aggregate},
    error::ExtractionError,
    model::{ForecastKind, ForecastRecord, kmh_to_ms, title_case},
    raw::{RawDay, RawSample, RawWeatherResponse, Scalar},
};

const TODAY_MAX_RECORDS: usize = 3;
const WEEK_DAYS: usize = 7;
const MONTH_WEEKS: usize = 4;
/// Hourly slot used as the representative sample of a day (12:00).
const MIDDAY_INDEX: usize = 4;

/// Builds the records for `kind`. `city` is title-cased into every record.
pub fn extract(
    response: &RawWeatherResponse,
    kind: ForecastKind,
    city: &str,
    now: NaiveDateTime,
) -> Result<Vec<ForecastRecord>, ExtractionError> {
    let city = title_case(city.trim());

    let records = match kind {
        ForecastKind::Today => extract_today(response, &city, now)?,
        ForecastKind::Weekly => extract_weekly(response, &city)?,
        ForecastKind::Monthly => extract_monthly(response, &city, now)?,
    };

    debug!(%kind, city = %city, count = records.len(), "extracted forecast records");
    Ok(records)
}

/// Current condition plus up to two later hours of the first forecast day.
///
/// Only `weather[0]` is scanned, so late in the evening the result holds just
/// the current record; tomorrow's early hours are never included.
fn extract_today(
    response: &RawWeatherResponse,
    city: &str,
    now: NaiveDateTime,
) -> Result<Vec<ForecastRecord>, ExtractionError> {
    let current = response
        .current_condition
        .as_deref()
        .and_then(<[_]>::first)
        .ok_or_else(|| ExtractionError::missing_section("current_condition"))?;

    let mut records = vec![sample_record(current, "current_condition[0]", city, now)?];

    let Some(first_day) = response.weather.as_deref().and_then(<[_]>::first) else {
        return Ok(records);
    };

    let mut last_hour = now.hour();
    for (i, sample) in first_day.hourly.iter().enumerate() {
        if records.len() >= TODAY_MAX_RECORDS {
            break;
        }

        let path = format!("weather[0].hourly[{i}]");
        let hour = parse_hour(&path, sample.time.as_ref())?;
        if hour <= last_hour {
            continue;
        }

        let timestamp = now
            .date()
            .and_hms_opt(hour, 0, 0)
            .ok_or_else(|| ExtractionError::malformed(format!("{path}.time"), "hour out of range"))?;

        records.push(sample_record(sample, &path, city, timestamp)?);
        last_hour = hour;
    }

    Ok(records)
}

/// One record per day (first seven), sampled at midday.
fn extract_weekly(
    response: &RawWeatherResponse,
    city: &str,
) -> Result<Vec<ForecastRecord>, ExtractionError> {
    let days = required_days(response)?;

    days.iter()
        .take(WEEK_DAYS)
        .enumerate()
        .map(|(i, day)| -> Result<ForecastRecord, ExtractionError> {
            let path = format!("weather[{i}]");
            let date = parse_date(&format!("{path}.date"), day.date.as_ref())?;
            let midday = midday_sample(&path, day)?;

            let mut record = sample_record(
                midday,
                &format!("{path}.hourly[{MIDDAY_INDEX}]"),
                city,
                date.and_time(NaiveTime::MIN),
            )?;
            record.max_temp = Some(parse_i32(&format!("{path}.maxtempC"), day.max_temp_c.as_ref())?);
            record.min_temp = Some(parse_i32(&format!("{path}.mintempC"), day.min_temp_c.as_ref())?);

            Ok(record)
        })
        .collect()
}

/// Four week buckets over the first 28 days; empty buckets are skipped.
fn extract_monthly(
    response: &RawWeatherResponse,
    city: &str,
    now: NaiveDateTime,
) -> Result<Vec<ForecastRecord>, ExtractionError> {
    let days = required_days(response)?;
    let days = &days[..days.len().min(MONTH_WEEKS * WEEK_DAYS)];

    let mut records = Vec::with_capacity(MONTH_WEEKS);
    for (bucket, chunk) in days.chunks(WEEK_DAYS).enumerate() {
        let entries = chunk
            .iter()
            .enumerate()
            .map(|(j, day)| daily_entry(bucket * WEEK_DAYS + j, day))
            .collect::<Result<Vec<_>, _>>()?;

        let week_start = now + Duration::days((bucket * WEEK_DAYS) as i64);
        records.extend(aggregate(&entries, city, week_start));
    }

    Ok(records)
}

fn required_days(response: &RawWeatherResponse) -> Result<&[RawDay], ExtractionError> {
    response.weather.as_deref().ok_or_else(|| ExtractionError::missing_section("weather"))
}

fn midday_sample<'a>(path: &str, day: &'a RawDay) -> Result<&'a RawSample, ExtractionError> {
    day.hourly.get(MIDDAY_INDEX).ok_or_else(|| {
        ExtractionError::malformed(
            format!("{path}.hourly[{MIDDAY_INDEX}]"),
            format!("day has only {} hourly samples", day.hourly.len()),
        )
    })
}

fn daily_entry(index: usize, day: &RawDay) -> Result<DailyEntry, ExtractionError> {
    let path = format!("weather[{index}]");
    let midday = midday_sample(&path, day)?;

    Ok(DailyEntry {
        max_temp: parse_i32(&format!("{path}.maxtempC"), day.max_temp_c.as_ref())?,
        min_temp: parse_i32(&format!("{path}.mintempC"), day.min_temp_c.as_ref())?,
        midday_condition: description(&format!("{path}.hourly[{MIDDAY_INDEX}]"), midday)?,
    })
}

fn sample_record(
    sample: &RawSample,
    path: &str,
    city: &str,
    timestamp: NaiveDateTime,
) -> Result<ForecastRecord, ExtractionError> {
    let wind_kmh = parse_f64(&format!("{path}.windspeedKmph"), sample.windspeed_kmph.as_ref())?;

    Ok(ForecastRecord {
        timestamp,
        end_timestamp: None,
        city: city.to_string(),
        weather_condition: description(path, sample)?,
        temperature: parse_i32(&format!("{path}.temp"), sample.temp_c.as_ref())?,
        wind_speed_ms: Some(kmh_to_ms(wind_kmh)),
        humidity: optional_text(sample.humidity.as_ref()),
        feels_like: optional_text(sample.feels_like_c.as_ref()),
        min_temp: None,
        max_temp: None,
    })
}

/// Optional fields are carried verbatim; a wrongly typed one counts as absent.
fn optional_text(value: Option<&Scalar>) -> Option<String> {
    value.and_then(Scalar::as_text).map(Cow::into_owned)
}

fn description(path: &str, sample: &RawSample) -> Result<String, ExtractionError> {
    sample
        .description()
        .map(str::to_string)
        .ok_or_else(|| {
            ExtractionError::malformed(format!("{path}.weatherDesc"), "missing or not a string")
        })
}

fn require<'a>(field: &str, value: Option<&'a Scalar>) -> Result<&'a Scalar, ExtractionError> {
    value.ok_or_else(|| ExtractionError::malformed(field, "missing"))
}

/// A present string or number; other JSON types are malformed.
fn require_text<'a>(
    field: &str,
    value: Option<&'a Scalar>,
) -> Result<Cow<'a, str>, ExtractionError> {
    let scalar = require(field, value)?;
    scalar.as_text().ok_or_else(|| {
        ExtractionError::malformed(field, format!("expected a string or number, got {scalar}"))
    })
}

fn parse_i32(field: &str, value: Option<&Scalar>) -> Result<i32, ExtractionError> {
    let text = require_text(field, value)?;
    text.trim()
        .parse()
        .map_err(|_| ExtractionError::malformed(field, format!("expected an integer, got {text:?}")))
}

fn parse_f64(field: &str, value: Option<&Scalar>) -> Result<f64, ExtractionError> {
    let text = require_text(field, value)?;
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ExtractionError::malformed(field, format!("expected a number, got {text:?}")))
}

/// `HHMM` → hour of day.
fn parse_hour(path: &str, value: Option<&Scalar>) -> Result<u32, ExtractionError> {
    let field = format!("{path}.time");
    let text = require_text(&field, value)?;
    let hhmm: u32 = text
        .trim()
        .parse()
        .map_err(|_| ExtractionError::malformed(&field, format!("expected HHMM, got {text:?}")))?;

    Ok(hhmm / 100)
}

fn parse_date(field: &str, value: Option<&Scalar>) -> Result<NaiveDate, ExtractionError> {
    let scalar = require(field, value)?;
    let text = scalar
        .as_str()
        .ok_or_else(|| ExtractionError::malformed(field, format!("expected a date string, got {scalar}")))?;

    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|e| ExtractionError::malformed(field, format!("{e}: {text:?}")))
}
