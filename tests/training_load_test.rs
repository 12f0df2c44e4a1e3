// ABOUTME: Unit tests for chronic/acute training-load computation
// ABOUTME: Covers bucketing, dense reindexing, decay behavior, and the empty precondition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rouleur

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rouleur::intelligence::{compute_training_load, IntelligenceError, ATL_DAYS, CTL_DAYS};
use rouleur::models::ActivityRecord;

const EPSILON: f64 = 1e-9;

fn record(date: &str, training_stress: f64) -> ActivityRecord {
    ActivityRecord {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        duration_hours: 1.0,
        training_stress,
        average_power: Some(180.0),
        activity_type: "Ride".to_owned(),
        calories: 600.0,
    }
}

/// Reference recurrence: `alpha = 2 / (span + 1)`, seeded with the first
/// value.
fn expected_ewma(series: &[f64], span: f64) -> f64 {
    let alpha = 2.0 / (span + 1.0);
    series
        .iter()
        .copied()
        .reduce(|previous, value| alpha * value + (1.0 - alpha) * previous)
        .unwrap()
}

#[test]
fn test_empty_series_is_a_precondition_violation() {
    let result = compute_training_load(&[]);
    assert!(matches!(result, Err(IntelligenceError::EmptyActivitySeries)));
}

#[test]
fn test_single_activity_seeds_both_averages() {
    let load = compute_training_load(&[record("2025-07-01", 80.0)]).unwrap();
    assert!((load.chronic - 80.0).abs() < EPSILON);
    assert!((load.acute - 80.0).abs() < EPSILON);
    assert!(load.balance().abs() < EPSILON);
}

#[test]
fn test_same_day_entries_are_summed_before_averaging() {
    let activities = [record("2025-07-01", 50.0), record("2025-07-01", 30.0)];
    let load = compute_training_load(&activities).unwrap();
    assert!((load.chronic - 80.0).abs() < EPSILON);
    assert!((load.acute - 80.0).abs() < EPSILON);
}

#[test]
fn test_interior_gaps_are_filled_with_zero_stress_days() {
    // Two activities with a rest day between them: the dense series is
    // [100, 0, 100], not [100, 100].
    let activities = [record("2025-07-01", 100.0), record("2025-07-03", 100.0)];
    let load = compute_training_load(&activities).unwrap();

    let dense = [100.0, 0.0, 100.0];
    assert!((load.chronic - expected_ewma(&dense, f64::from(CTL_DAYS))).abs() < EPSILON);
    assert!((load.acute - expected_ewma(&dense, f64::from(ATL_DAYS))).abs() < EPSILON);

    // With span 7, alpha is 0.25: 100 -> 75 -> 81.25.
    assert!((load.acute - 81.25).abs() < EPSILON);

    // A sparse two-day series would have produced a different acute value.
    let sparse = [100.0, 100.0];
    assert!((load.acute - expected_ewma(&sparse, f64::from(ATL_DAYS))).abs() > 1.0);
}

#[test]
fn test_trailing_zero_stress_days_decay_both_metrics() {
    let active_only = [record("2025-06-01", 100.0)];
    let with_idle_tail = [record("2025-06-01", 100.0), record("2025-06-15", 0.0)];

    let fresh = compute_training_load(&active_only).unwrap();
    let decayed = compute_training_load(&with_idle_tail).unwrap();

    assert!(decayed.chronic < fresh.chronic);
    assert!(decayed.acute < fresh.acute);
    assert!(decayed.chronic > 0.0);
    assert!(decayed.acute > 0.0);
    // The short window decays much faster than the long one.
    assert!(decayed.acute < decayed.chronic);
}

#[test]
fn test_balance_is_chronic_minus_acute_and_loads_stay_non_negative() {
    let activities = [
        record("2025-07-01", 10.0),
        record("2025-07-04", 0.0),
        record("2025-07-09", 140.0),
    ];
    let load = compute_training_load(&activities).unwrap();

    assert!(load.chronic >= 0.0);
    assert!(load.acute >= 0.0);
    assert!((load.balance() - (load.chronic - load.acute)).abs() < EPSILON);

    // A heavy day after a light week: fatigue outruns fitness, so balance
    // goes negative.
    assert!(load.balance() < 0.0);
}

#[test]
fn test_input_order_does_not_matter() {
    let ordered = [
        record("2025-07-01", 50.0),
        record("2025-07-02", 70.0),
        record("2025-07-03", 90.0),
    ];
    let shuffled = [
        record("2025-07-03", 90.0),
        record("2025-07-01", 50.0),
        record("2025-07-02", 70.0),
    ];
    let a = compute_training_load(&ordered).unwrap();
    let b = compute_training_load(&shuffled).unwrap();
    assert!((a.chronic - b.chronic).abs() < EPSILON);
    assert!((a.acute - b.acute).abs() < EPSILON);
}

#[test]
fn test_28_day_history_against_reference_recurrence() {
    let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let mut activities = Vec::new();
    let mut dense = vec![0.0; 28];
    for (offset, stress) in [(0, 60.0), (2, 85.0), (5, 110.0), (9, 40.0), (27, 95.0)] {
        let date = start + chrono::Days::new(offset);
        activities.push(record(&date.format("%Y-%m-%d").to_string(), stress));
        dense[usize::try_from(offset).unwrap()] = stress;
    }

    let load = compute_training_load(&activities).unwrap();
    assert!((load.chronic - expected_ewma(&dense, f64::from(CTL_DAYS))).abs() < EPSILON);
    assert!((load.acute - expected_ewma(&dense, f64::from(ATL_DAYS))).abs() < EPSILON);
}
