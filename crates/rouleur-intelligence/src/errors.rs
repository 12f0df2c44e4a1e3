// ABOUTME: Error types for training-load computation
// ABOUTME: Structured thiserror enums surfaced through the pipeline error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rouleur

/// Errors from training intelligence computations.
#[derive(Debug, thiserror::Error)]
pub enum IntelligenceError {
    /// The load calculator was invoked on an empty activity series.
    ///
    /// Callers must guard against zero-length input: an exponential average
    /// has no defined value at the end of an empty series, and returning a
    /// silent zero would masquerade as a real measurement.
    #[error("Cannot compute training load over an empty activity series")]
    EmptyActivitySeries,
}
