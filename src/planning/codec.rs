// ABOUTME: Parses model plan responses and renders the intervals.icu workout file
// ABOUTME: Deterministic text codec over the delimiter-separated JSON workout list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rouleur

use rouleur_core::models::{Segment, Step, Workout};
use serde_json::Value;
use tracing::warn;

use crate::errors::{PlanError, PlanResult};

/// Token separating the human-readable plan from the JSON workout list
pub const JSON_DELIMITER: &str = "###JSON_START###";

/// Fixed output when the JSON portion of the response is not valid JSON
pub const PARSE_FAILURE_MESSAGE: &str = "Failed to parse workout JSON.";

/// Convert a raw model response into the plain-text workout file.
///
/// The response is split on the first [`JSON_DELIMITER`]; everything after
/// it is parsed as a JSON array of workouts and rendered with
/// [`render_workout_file`]. A missing delimiter or an empty list yields an
/// empty string. Syntactically invalid JSON is recoverable: a diagnostic is
/// logged and the fixed [`PARSE_FAILURE_MESSAGE`] is returned as the output.
///
/// # Errors
///
/// Returns [`PlanError::MalformedPlan`] when the JSON parses but does not
/// describe a workout list (for example a workout missing `workout_name`).
/// That is fatal to this render call; callers either validate upstream or
/// degrade to plan text without a workout file.
pub fn response_to_workout_file(response: &str) -> PlanResult<String> {
    let Some((_, json_part)) = response.split_once(JSON_DELIMITER) else {
        return Ok(String::new());
    };

    let payload: Value = match serde_json::from_str(json_part.trim()) {
        Ok(payload) => payload,
        Err(error) => {
            warn!(%error, "Failed to parse JSON from model response");
            return Ok(PARSE_FAILURE_MESSAGE.to_owned());
        }
    };

    let workouts: Vec<Workout> =
        serde_json::from_value(payload).map_err(|source| PlanError::MalformedPlan { source })?;

    Ok(render_workout_file(&workouts))
}

/// Render parsed workouts into the importable plain-text format.
///
/// One block per workout in input order, each closed by a blank separator
/// line on top of the blank line ending its last segment. Rendering is
/// read-only and idempotent.
#[must_use]
pub fn render_workout_file(workouts: &[Workout]) -> String {
    let mut file = String::new();
    for workout in workouts {
        file.push_str(&format!("Title: {}\n\n", workout.workout_name));
        file.push_str(&format!("Description: {}\n\n", workout.description));

        for segment in &workout.segments {
            file.push_str(&segment_header(segment));
            for step in &segment.steps {
                file.push_str(&step_line(step));
            }
            file.push('\n');
        }

        file.push_str("\n\n");
    }
    file
}

/// Format a segment header: `<title>` with a ` <repeats>x` suffix only when
/// the segment repeats more than once.
fn segment_header(segment: &Segment) -> String {
    if segment.repeats > 1 {
        format!("{} {}x\n", segment.title, segment.repeats)
    } else {
        format!("{}\n", segment.title)
    }
}

/// Format a step line: `- <duration>m <power>%`, with a cadence suffix only
/// for set cadence values.
fn step_line(step: &Step) -> String {
    let mut line = format!("- {}m {}%", step.duration_minutes, step.power_target);
    if let Some(cadence) = &step.cadence_target {
        if cadence.is_set() {
            line.push_str(&format!(" {cadence}rpm"));
        }
    }
    line.push('\n');
    line
}
