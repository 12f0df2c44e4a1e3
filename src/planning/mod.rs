// ABOUTME: Weekly plan pipeline wiring normalization, load, summary, and codec
// ABOUTME: Collaborators are injected; codec shape failures degrade gracefully
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rouleur

//! # Planning Pipeline
//!
//! One invocation runs the full chain over locally-owned data:
//!
//! ```text
//! ActivitySource -> normalize -> training load -> weekly summary
//!     -> PlanGenerator -> workout-file codec -> assembled plan
//! ```
//!
//! Invocations share no state, so any number may run concurrently.

/// Workout-file codec for model responses
pub mod codec;

use chrono::{Local, NaiveDate};
use rouleur_core::config::PlanningConfig;
use rouleur_core::models::WeeklySummary;
use rouleur_intelligence::{build_weekly_summary, compute_training_load};
use rouleur_providers::{normalize_activities, ActivitySource};
use tracing::{debug, error, info};

use crate::errors::{PlanError, PlanResult};
use crate::llm::PlanGenerator;

/// Section heading under which the workout file is appended to the plan
const WORKOUT_FILE_HEADING: &str = "## intervals.icu workout file (txt)";

/// Result of one planning pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyPlan {
    /// Full plan markdown, including the workout-file section when one was
    /// rendered
    pub plan: String,
    /// Rendered workout file (or the parse-failure sentinel); `None` when
    /// the model emitted a structurally malformed workout list
    pub workout_file: Option<String>,
    /// The summary handed to the generator
    pub summary: WeeklySummary,
}

/// Run the weekly planning pipeline once, anchored at today's local date.
///
/// Fetches raw records from `source`, normalizes them, computes the training
/// load, builds the weekly summary, asks `generator` for a plan, and renders
/// the workout file. A structurally malformed workout list degrades to
/// "plan text present, workout file generation failed" instead of aborting
/// the run.
///
/// # Errors
///
/// Returns an error when retrieval fails, when no record survives
/// normalization, or when the generator collaborator fails.
pub async fn generate_weekly_plan(
    source: &dyn ActivitySource,
    generator: &dyn PlanGenerator,
    config: &PlanningConfig,
) -> PlanResult<WeeklyPlan> {
    generate_weekly_plan_at(source, generator, config, Local::now().date_naive()).await
}

/// [`generate_weekly_plan`] with an explicit reference date anchoring the
/// trailing-week window.
///
/// # Errors
///
/// See [`generate_weekly_plan`].
pub async fn generate_weekly_plan_at(
    source: &dyn ActivitySource,
    generator: &dyn PlanGenerator,
    config: &PlanningConfig,
    reference_date: NaiveDate,
) -> PlanResult<WeeklyPlan> {
    let raw = source.recent_activities(config.lookback_days).await?;
    let activities = normalize_activities(&raw);
    debug!(
        fetched = raw.len(),
        normalized = activities.len(),
        "normalized activity records"
    );

    let load = compute_training_load(&activities)?;
    let summary = build_weekly_summary(&activities, load, &config.constraints, reference_date);

    let response = generator.generate(&summary, config.language_model).await?;
    info!(
        model = %config.language_model,
        response_chars = response.len(),
        "received plan response"
    );

    let workout_file = match codec::response_to_workout_file(&response) {
        Ok(file) => Some(file),
        Err(PlanError::MalformedPlan { source: json_error }) => {
            error!(%json_error, "Workout file generation failed; returning plan text only");
            None
        }
        Err(other) => return Err(other),
    };

    let plan = assemble_plan(&response, workout_file.as_deref());
    Ok(WeeklyPlan {
        plan,
        workout_file,
        summary,
    })
}

/// Append the workout file to the plan text under a fenced section.
///
/// Skipped when there is nothing to append: either rendering failed or the
/// response carried no workouts.
fn assemble_plan(response: &str, workout_file: Option<&str>) -> String {
    match workout_file {
        Some(file) if !file.is_empty() => {
            format!("{response}\n\n{WORKOUT_FILE_HEADING}\n\n```text\n\n{file}\n```")
        }
        _ => response.to_owned(),
    }
}
