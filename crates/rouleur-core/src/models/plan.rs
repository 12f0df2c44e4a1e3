// ABOUTME: Workout plan structure parsed from the model's JSON payload
// ABOUTME: Three-level Workout/Segment/Step types plus verbatim target values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rouleur

use serde::{Deserialize, Serialize};
use std::fmt;

/// A power or cadence target carried verbatim from the model response.
///
/// The model may emit a bare number (`50`) or a textual range (`"85-95"`,
/// `"Ramp 50-60"`). The codec renders the value as given and never
/// interprets or validates its content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TargetValue {
    /// Integral target, for example a flat percentage
    Integer(i64),
    /// Fractional target
    Float(f64),
    /// Textual target, for example a ramp or a range
    Text(String),
}

impl TargetValue {
    /// Whether a cadence carrying this value gets rendered.
    ///
    /// Zero and empty values count as absent, so the step line ends after
    /// the percent sign.
    #[must_use]
    pub fn is_set(&self) -> bool {
        match self {
            Self::Integer(value) => *value != 0,
            Self::Float(value) => *value != 0.0,
            Self::Text(text) => !text.is_empty(),
        }
    }
}

impl fmt::Display for TargetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// One step inside a workout segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Step duration in whole minutes
    #[serde(rename = "duration_m")]
    pub duration_minutes: u32,
    /// Power target, rendered as given (flat percentage or ramp range)
    #[serde(rename = "power_pct")]
    pub power_target: TargetValue,
    /// Optional cadence target; zero or empty counts as unset
    #[serde(rename = "rpm", default, skip_serializing_if = "Option::is_none")]
    pub cadence_target: Option<TargetValue>,
}

/// An ordered group of steps, optionally repeated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Segment title, for example `Warmup` or `Main set`
    pub title: String,
    /// Repeat count; `0` and `1` render as a bare title
    pub repeats: u32,
    /// Ordered steps; may be empty
    pub steps: Vec<Step>,
}

/// A single day's workout parsed from the model response.
///
/// Owned exclusively by the codec invocation that parsed it; rendering
/// consumes it read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Weekday label from the plan; not consumed by the workout-file renderer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    /// Workout title
    pub workout_name: String,
    /// Human-readable description
    pub description: String,
    /// Ordered segments; may be empty
    pub segments: Vec<Segment>,
}
