// ABOUTME: Weekly summary serialized verbatim into the coach prompt
// ABOUTME: Fixed nested key layout for recent metrics, constraints, and goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rouleur

use serde::Serialize;

use super::activity::TrainingLoad;

/// Last-7-day aggregate totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SevenDayTotals {
    /// Sum of per-activity stress scores, rounded to one decimal
    pub training_stress: f64,
    /// Sum of moving hours, rounded to one decimal
    pub hours: f64,
}

/// Recent training metrics: trailing-week totals plus the load computed over
/// the full lookback window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecentMetrics {
    /// Totals over the trailing seven days
    pub last_7d: SevenDayTotals,
    /// Training load over the full 28-day lookback window, unrounded
    pub last_28d: TrainingLoad,
}

/// Weekly volume constraints echoed to the plan generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryConstraints {
    /// Hard cap on weekly training hours
    pub max_hours_week: f64,
    /// Number of sessions the athlete can fit into the week
    pub sessions_per_week: u32,
}

/// Training goals echoed to the plan generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Goals {
    /// Primary training goal, for example `increase_ftp`
    pub primary: String,
}

/// Structured weekly summary handed to the plan-generation collaborator.
///
/// The serialized key layout is part of the external contract: it is
/// included verbatim in the prompt sent to the language model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummary {
    /// Aggregated recent metrics
    pub recent_metrics: RecentMetrics,
    /// Weekly volume constraints
    pub constraints: SummaryConstraints,
    /// Training goals
    pub goals: Goals,
}
