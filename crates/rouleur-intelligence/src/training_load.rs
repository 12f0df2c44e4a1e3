// ABOUTME: Chronic/acute training load over a dense daily stress series
// ABOUTME: Exponential moving average recurrence with 42-day and 7-day windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rouleur

use chrono::NaiveDate;
use rouleur_core::models::{ActivityRecord, TrainingLoad};
use std::collections::BTreeMap;
use tracing::debug;

use crate::errors::IntelligenceError;

/// Effective window of the chronic (fitness) moving average, in days
pub const CTL_DAYS: u32 = 42;

/// Effective window of the acute (fatigue) moving average, in days
pub const ATL_DAYS: u32 = 7;

/// Compute chronic and acute training load from normalized activities.
///
/// Stress scores are bucketed per calendar date (summing same-day entries),
/// the bucketed series is reindexed to contiguous daily frequency with
/// zero-stress rest days filled in, and the exponential moving average is
/// evaluated at the most recent day for the [`CTL_DAYS`] and [`ATL_DAYS`]
/// windows. Rest days must appear as explicit zeros: a decay computed over a
/// sparse series that skips them is a different metric.
///
/// Values are returned unrounded. A trailing run of zero-stress days decays
/// both metrics toward zero.
///
/// # Errors
///
/// Returns [`IntelligenceError::EmptyActivitySeries`] when `activities` is
/// empty.
pub fn compute_training_load(
    activities: &[ActivityRecord],
) -> Result<TrainingLoad, IntelligenceError> {
    let daily = dense_daily_stress(activities)?;

    let chronic = ewma_last(&daily, f64::from(CTL_DAYS));
    let acute = ewma_last(&daily, f64::from(ATL_DAYS));
    debug!(days = daily.len(), chronic, acute, "computed training load");

    Ok(TrainingLoad { chronic, acute })
}

/// Bucket per-activity stress by date and reindex to contiguous daily
/// frequency between the earliest and latest observed dates.
fn dense_daily_stress(activities: &[ActivityRecord]) -> Result<Vec<f64>, IntelligenceError> {
    let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for activity in activities {
        *buckets.entry(activity.date).or_insert(0.0) += activity.training_stress;
    }

    let (Some((&first, _)), Some((&last, _))) =
        (buckets.first_key_value(), buckets.last_key_value())
    else {
        return Err(IntelligenceError::EmptyActivitySeries);
    };

    let capacity = usize::try_from((last - first).num_days()).unwrap_or(0) + 1;
    let mut series = Vec::with_capacity(capacity);
    let mut day = first;
    loop {
        series.push(buckets.get(&day).copied().unwrap_or(0.0));
        if day >= last {
            break;
        }
        // succ_opt is None only at the calendar maximum, which `last` bounds.
        let Some(next) = day.succ_opt() else { break };
        day = next;
    }

    Ok(series)
}

/// Evaluate the exponential moving average recurrence at the series end.
///
/// Standard span-parameterized form: `alpha = 2 / (span + 1)`, seeded with
/// `y_0 = x_0`, then `y_t = alpha * x_t + (1 - alpha) * y_{t-1}`.
fn ewma_last(series: &[f64], span: f64) -> f64 {
    let alpha = 2.0 / (span + 1.0);
    let mut values = series.iter().copied();
    let Some(first) = values.next() else {
        return 0.0;
    };
    values.fold(first, |previous, value| {
        alpha.mul_add(value - previous, previous)
    })
}
