// ABOUTME: Plan-generator boundary for language-model collaborators
// ABOUTME: Async trait over the summary-to-response-text contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rouleur

//! # Plan Generator Boundary
//!
//! The language-model invocation (prompt construction and the provider
//! HTTP call) lives behind [`PlanGenerator`]. The pipeline hands the
//! collaborator the [`WeeklySummary`] and the configured closed
//! [`LanguageModel`] variant, and receives raw response text back. The
//! response is expected to carry the
//! [`JSON_DELIMITER`](crate::planning::codec::JSON_DELIMITER) token followed
//! by the machine-readable workout list; the codec copes when it does not.

use async_trait::async_trait;
use rouleur_core::config::LanguageModel;
use rouleur_core::models::WeeklySummary;

use crate::errors::PlanResult;

/// Boundary trait for the plan-generation collaborator.
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Produce the raw model response for the given athlete summary.
    ///
    /// Implementations serialize the summary into their prompt verbatim and
    /// dispatch on `model` exhaustively.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::PlanGeneration`](crate::errors::PlanError) when
    /// the collaborator fails.
    async fn generate(&self, summary: &WeeklySummary, model: LanguageModel)
        -> PlanResult<String>;
}
