// ABOUTME: Unit tests for the workout-file codec over model plan responses
// ABOUTME: Covers delimiter handling, JSON failure modes, and exact rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rouleur

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

use rouleur::errors::PlanError;
use rouleur::models::Workout;
use rouleur::planning::codec::{
    render_workout_file, response_to_workout_file, JSON_DELIMITER, PARSE_FAILURE_MESSAGE,
};
use serde_json::{json, Value};

/// Build a model response from a leading text part and a JSON payload.
fn response_with(workouts: &Value) -> String {
    format!("Here is your plan:{JSON_DELIMITER}{workouts}")
}

fn sweetspot_workouts() -> Value {
    json!([
        {
            "workout_name": "Sweetspot",
            "description": "A tough sweetspot session.",
            "segments": [
                {
                    "title": "Warmup",
                    "repeats": 1,
                    "steps": [
                        {"duration_m": 10, "power_pct": 50, "rpm": 90},
                        {"duration_m": 5, "power_pct": 60},
                    ],
                },
                {
                    "title": "Main set",
                    "repeats": 2,
                    "steps": [
                        {"duration_m": 15, "power_pct": 90, "rpm": 85},
                        {"duration_m": 5, "power_pct": 50},
                    ],
                },
                {
                    "title": "Cooldown",
                    "repeats": 1,
                    "steps": [{"duration_m": 10, "power_pct": 40}],
                },
            ],
        },
    ])
}

#[test]
fn test_valid_response_renders_exact_workout_file() {
    let expected = "Title: Sweetspot\n\n\
        Description: A tough sweetspot session.\n\n\
        Warmup\n\
        - 10m 50% 90rpm\n\
        - 5m 60%\n\n\
        Main set 2x\n\
        - 15m 90% 85rpm\n\
        - 5m 50%\n\n\
        Cooldown\n\
        - 10m 40%\n\n\n\n";

    let output = response_to_workout_file(&response_with(&sweetspot_workouts())).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn test_rendering_is_idempotent() {
    let workouts: Vec<Workout> = serde_json::from_value(sweetspot_workouts()).unwrap();
    assert_eq!(render_workout_file(&workouts), render_workout_file(&workouts));
}

#[test]
fn test_missing_delimiter_yields_empty_output() {
    let output = response_to_workout_file(r#"{"plan": "some plan"}"#).unwrap();
    assert!(output.is_empty());
}

#[test]
fn test_empty_json_array_yields_empty_output() {
    let output = response_to_workout_file(&format!("Plan:{JSON_DELIMITER}[]")).unwrap();
    assert!(output.is_empty());
}

#[test]
fn test_invalid_json_yields_parse_failure_sentinel() {
    let response = format!("Here is your plan:{JSON_DELIMITER}this is not json");
    let output = response_to_workout_file(&response).unwrap();
    assert_eq!(output, PARSE_FAILURE_MESSAGE);
}

#[test]
fn test_whitespace_around_json_is_tolerated() {
    let response = format!("Plan:{JSON_DELIMITER}\n\n  []  \n");
    let output = response_to_workout_file(&response).unwrap();
    assert!(output.is_empty());
}

#[test]
fn test_workout_with_no_segments() {
    let workouts = json!([
        {
            "workout_name": "No Segments",
            "description": "This workout has no segments.",
            "segments": [],
        },
    ]);
    let expected = "Title: No Segments\n\nDescription: This workout has no segments.\n\n\n\n";
    assert_eq!(response_to_workout_file(&response_with(&workouts)).unwrap(), expected);
}

#[test]
fn test_segment_with_no_steps() {
    let workouts = json!([
        {
            "workout_name": "No Steps",
            "description": "This workout has a segment with no steps.",
            "segments": [{"title": "Empty Segment", "repeats": 1, "steps": []}],
        },
    ]);
    let expected =
        "Title: No Steps\n\nDescription: This workout has a segment with no steps.\n\n\
         Empty Segment\n\n\n\n";
    assert_eq!(response_to_workout_file(&response_with(&workouts)).unwrap(), expected);
}

#[test]
fn test_segment_repeats_boundary() {
    for (repeats, expected_header) in [(0, "Main set\n"), (1, "Main set\n"), (3, "Main set 3x\n")] {
        let workouts = json!([
            {
                "workout_name": "Repeats Test",
                "description": "Testing segment repeats.",
                "segments": [
                    {
                        "title": "Main set",
                        "repeats": repeats,
                        "steps": [{"duration_m": 5, "power_pct": 80}],
                    },
                ],
            },
        ]);
        let expected = format!(
            "Title: Repeats Test\n\nDescription: Testing segment repeats.\n\n\
             {expected_header}- 5m 80%\n\n\n\n"
        );
        assert_eq!(
            response_to_workout_file(&response_with(&workouts)).unwrap(),
            expected,
            "repeats = {repeats}"
        );
    }
}

#[test]
fn test_ramp_power_and_range_cadence_render_verbatim() {
    let workouts = json!([
        {
            "day": "Tuesday",
            "workout_name": "Openers",
            "description": "Short ride with openers.",
            "segments": [
                {
                    "title": "Warmup",
                    "repeats": 1,
                    "steps": [{"duration_m": 10, "power_pct": "Ramp 50-60", "rpm": "85-95"}],
                },
            ],
        },
    ]);
    let output = response_to_workout_file(&response_with(&workouts)).unwrap();
    assert!(output.contains("- 10m Ramp 50-60% 85-95rpm\n"));
}

#[test]
fn test_zero_and_empty_cadence_are_suppressed() {
    let workouts = json!([
        {
            "workout_name": "Cadence Edge",
            "description": "Cadence suppression cases.",
            "segments": [
                {
                    "title": "Main set",
                    "repeats": 1,
                    "steps": [
                        {"duration_m": 5, "power_pct": 70, "rpm": 0},
                        {"duration_m": 5, "power_pct": 70, "rpm": ""},
                        {"duration_m": 5, "power_pct": 70, "rpm": null},
                    ],
                },
            ],
        },
    ]);
    let output = response_to_workout_file(&response_with(&workouts)).unwrap();
    for line in output.lines().filter(|line| line.starts_with('-')) {
        assert_eq!(line, "- 5m 70%");
    }
}

#[test]
fn test_multiple_workouts_concatenate_in_input_order() {
    let workouts = json!([
        {
            "workout_name": "First",
            "description": "Day one.",
            "segments": [],
        },
        {
            "workout_name": "Second",
            "description": "Day two.",
            "segments": [],
        },
    ]);
    let output = response_to_workout_file(&response_with(&workouts)).unwrap();
    assert_eq!(
        output,
        "Title: First\n\nDescription: Day one.\n\n\n\n\
         Title: Second\n\nDescription: Day two.\n\n\n\n"
    );
}

#[test]
fn test_malformed_workout_shape_is_fatal() {
    // Well-formed JSON, but the first workout is missing workout_name.
    let workouts = json!([
        {
            "description": "Missing the name.",
            "segments": [],
        },
    ]);
    let result = response_to_workout_file(&response_with(&workouts));
    assert!(matches!(result, Err(PlanError::MalformedPlan { .. })));
}

#[test]
fn test_non_array_json_shape_is_fatal() {
    let response = format!("Plan:{JSON_DELIMITER}{{\"workouts\": []}}");
    let result = response_to_workout_file(&response);
    assert!(matches!(result, Err(PlanError::MalformedPlan { .. })));
}

#[test]
fn test_everything_after_first_delimiter_is_json() {
    // A second delimiter occurrence is part of the JSON document and keeps
    // the payload from parsing as JSON, which is the recoverable path.
    let response = format!("Plan:{JSON_DELIMITER}[]{JSON_DELIMITER}[]");
    let output = response_to_workout_file(&response).unwrap();
    assert_eq!(output, PARSE_FAILURE_MESSAGE);
}
