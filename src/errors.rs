// ABOUTME: Unified error type for the planning pipeline
// ABOUTME: Aggregates provider, intelligence, config, and codec failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rouleur

use rouleur_core::config::ConfigError;
use rouleur_intelligence::IntelligenceError;
use rouleur_providers::ProviderError;
use thiserror::Error;

/// Convenience result alias for pipeline operations.
pub type PlanResult<T> = Result<T, PlanError>;

/// Errors surfaced by the planning pipeline.
///
/// Recoverable conditions (skipped activity records, syntactically invalid
/// plan JSON) never reach this type; they degrade in place with a logged
/// diagnostic. Everything here is fatal to the invocation that raised it.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Raw activity retrieval failed
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Load computation was invoked on an empty activity series
    #[error(transparent)]
    Intelligence(#[from] IntelligenceError),

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The plan-generator collaborator failed
    #[error("Plan generation failed: {message}")]
    PlanGeneration {
        /// Failure description from the generator implementation
        message: String,
    },

    /// The model emitted well-formed JSON whose shape is not a workout list
    #[error("Model response JSON does not describe a workout list")]
    MalformedPlan {
        /// Underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
}
