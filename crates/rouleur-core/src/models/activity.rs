// ABOUTME: Normalized activity records and exponentially-weighted training load
// ABOUTME: Immutable value types produced by the normalizer and load calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rouleur

use chrono::NaiveDate;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// A single normalized training activity.
///
/// Created once per raw provider entry during normalization and immutable
/// thereafter. A record missing a date or a stress score is never partially
/// constructed; the normalizer drops the raw entry instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    /// Local calendar date the activity started
    pub date: NaiveDate,
    /// Moving time in hours
    pub duration_hours: f64,
    /// Unitless per-activity stress score from the provider
    pub training_stress: f64,
    /// Average power in watts, when the provider reported one
    pub average_power: Option<f64>,
    /// Provider activity type, for example `Ride` or `VirtualRide`
    pub activity_type: String,
    /// Energy expenditure in kilocalories
    pub calories: f64,
}

/// Exponentially-weighted training load at the end of the daily stress series.
///
/// `chronic` (42-day window) is a proxy for fitness, `acute` (7-day window)
/// for fatigue. Both are evaluated at the same most-recent day of the dense
/// daily series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingLoad {
    /// Chronic training load: long-window exponentially-weighted average
    pub chronic: f64,
    /// Acute training load: short-window exponentially-weighted average
    pub acute: f64,
}

impl TrainingLoad {
    /// Training stress balance: chronic minus acute.
    ///
    /// Negative balance indicates accumulated fatigue relative to fitness.
    #[must_use]
    pub fn balance(&self) -> f64 {
        self.chronic - self.acute
    }
}

impl Serialize for TrainingLoad {
    // Balance is derived but serialized alongside the stored fields: the
    // downstream coach prompt keys on TSB.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("TrainingLoad", 3)?;
        state.serialize_field("chronic", &self.chronic)?;
        state.serialize_field("acute", &self.acute)?;
        state.serialize_field("balance", &self.balance())?;
        state.end()
    }
}
