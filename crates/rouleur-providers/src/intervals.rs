// ABOUTME: intervals.icu activity normalization into validated ActivityRecords
// ABOUTME: Skips malformed raw records with diagnostics instead of failing the run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rouleur

use chrono::NaiveDate;
use rouleur_core::models::ActivityRecord;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Length of the `YYYY-MM-DD` prefix of a provider timestamp
const DATE_PREFIX_LEN: usize = 10;

/// Raw intervals.icu activity payload, limited to the fields the pipeline
/// consumes.
///
/// Every listed key must be present. `icu_average_watts` may be null for
/// activities without a power meter, but the key itself is required.
#[derive(Debug, Deserialize)]
struct RawActivity {
    /// Local start timestamp; the first ten characters carry the date
    start_date_local: String,
    /// Moving time in seconds
    moving_time: f64,
    /// Per-activity training load score
    icu_training_load: f64,
    /// Average power in watts
    #[serde(deserialize_with = "nullable_number")]
    icu_average_watts: Option<f64>,
    /// Provider activity type
    #[serde(rename = "type")]
    activity_type: String,
    /// Energy expenditure in kilocalories
    calories: f64,
}

/// Deserialize an optional number while still requiring the key itself.
///
/// A bare `Option` field would silently default on a missing key; routing
/// through `deserialize_with` keeps the key mandatory.
fn nullable_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::deserialize(deserializer)
}

#[derive(Debug, thiserror::Error)]
enum NormalizeError {
    #[error("record shape mismatch: {source}")]
    Shape {
        #[from]
        source: serde_json::Error,
    },
    #[error("start date '{value}' does not begin with a calendar date")]
    Date { value: String },
}

/// Normalize a sequence of raw provider records.
///
/// Malformed records are skipped with a diagnostic, never raised; survivor
/// order is preserved. Duplicate dates are kept; deduplication happens
/// downstream when the load calculator buckets the series.
#[must_use]
pub fn normalize_activities(raw: &[Value]) -> Vec<ActivityRecord> {
    raw.iter().filter_map(normalize_activity).collect()
}

/// Normalize a single raw record, or `None` when it is malformed.
#[must_use]
pub fn normalize_activity(raw: &Value) -> Option<ActivityRecord> {
    match try_normalize(raw) {
        Ok(record) => Some(record),
        Err(reason) => {
            warn!(%reason, available_keys = ?raw_keys(raw), "Skipping malformed activity record");
            None
        }
    }
}

fn try_normalize(raw: &Value) -> Result<ActivityRecord, NormalizeError> {
    let activity: RawActivity = serde_json::from_value(raw.clone())?;
    let date = parse_record_date(&activity.start_date_local)?;

    Ok(ActivityRecord {
        date,
        duration_hours: activity.moving_time / SECONDS_PER_HOUR,
        training_stress: activity.icu_training_load,
        average_power: activity.icu_average_watts,
        activity_type: activity.activity_type,
        calories: activity.calories,
    })
}

/// Parse the `YYYY-MM-DD` prefix of a provider timestamp.
fn parse_record_date(start_date_local: &str) -> Result<NaiveDate, NormalizeError> {
    let prefix = start_date_local
        .get(..DATE_PREFIX_LEN)
        .unwrap_or(start_date_local);
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").map_err(|_| NormalizeError::Date {
        value: start_date_local.to_owned(),
    })
}

fn raw_keys(raw: &Value) -> Vec<&str> {
    raw.as_object()
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default()
}
