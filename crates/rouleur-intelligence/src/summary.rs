// ABOUTME: Aggregates the trailing week and computed load into the weekly summary
// ABOUTME: Filter-and-sum over normalized records with one-decimal rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rouleur

use chrono::{Days, NaiveDate};
use rouleur_core::config::{PlanConstraints, DEFAULT_PRIMARY_GOAL};
use rouleur_core::models::{
    ActivityRecord, Goals, RecentMetrics, SevenDayTotals, SummaryConstraints, TrainingLoad,
    WeeklySummary,
};

/// Length of the trailing window aggregated into the summary, in days
const SUMMARY_WINDOW_DAYS: u64 = 7;

/// Aggregate the trailing week and the computed load into the summary handed
/// to the plan generator.
///
/// The window is `[reference_date - 7 days, reference_date]` inclusive; the
/// reference date is passed in rather than read from a clock so the builder
/// stays pure. Stress and hour totals are rounded to one decimal; the load
/// fields pass through unrounded.
#[must_use]
pub fn build_weekly_summary(
    activities: &[ActivityRecord],
    load: TrainingLoad,
    constraints: &PlanConstraints,
    reference_date: NaiveDate,
) -> WeeklySummary {
    let window_start = reference_date - Days::new(SUMMARY_WINDOW_DAYS);
    let last_week = || activities.iter().filter(|a| a.date >= window_start);

    let training_stress = round_one_decimal(last_week().map(|a| a.training_stress).sum());
    let hours = round_one_decimal(last_week().map(|a| a.duration_hours).sum());

    WeeklySummary {
        recent_metrics: RecentMetrics {
            last_7d: SevenDayTotals {
                training_stress,
                hours,
            },
            last_28d: load,
        },
        constraints: SummaryConstraints {
            max_hours_week: constraints.max_hours_week,
            sessions_per_week: constraints.sessions_per_week,
        },
        goals: Goals {
            primary: constraints
                .primary_goal
                .clone()
                .unwrap_or_else(|| DEFAULT_PRIMARY_GOAL.to_owned()),
        },
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
