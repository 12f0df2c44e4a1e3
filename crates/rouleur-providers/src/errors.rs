// ABOUTME: Error types for activity-source implementations
// ABOUTME: Structured failures for retrieval and payload decoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rouleur

/// Errors surfaced by [`ActivitySource`](crate::ActivitySource)
/// implementations.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The upstream provider could not be reached or answered with an error
    #[error("Activity provider request failed: {message}")]
    Fetch {
        /// Failure description from the implementation
        message: String,
    },

    /// The provider payload was not decodable as a JSON array of records
    #[error("Activity provider returned an undecodable payload")]
    Decode {
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}
