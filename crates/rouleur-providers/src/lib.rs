// ABOUTME: Activity-provider boundary for the Rouleur pipeline
// ABOUTME: Raw-record normalization, the async source trait, and the cache abstraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rouleur

//! # Rouleur Providers
//!
//! The boundary between the planning core and the external activity-tracking
//! provider:
//!
//! - [`ActivitySource`]: async trait a concrete client implements to hand
//!   the pipeline raw JSON records; all HTTP and caching concerns live on
//!   the implementation side of this seam
//! - [`intervals`]: normalization of raw intervals.icu records into
//!   validated [`ActivityRecord`](rouleur_core::models::ActivityRecord)s
//! - [`cache`]: the explicit get/put-with-ttl cache abstraction source
//!   implementations use instead of ad-hoc file-timestamp checks

/// Cache abstraction owned by source implementations
pub mod cache;
/// Provider error types
pub mod errors;
/// intervals.icu raw-record normalization
pub mod intervals;

pub use cache::{ActivityCache, MemoryCache};
pub use errors::ProviderError;
pub use intervals::{normalize_activities, normalize_activity};

use async_trait::async_trait;

/// Boundary trait for the external activity-tracking provider.
///
/// The pipeline only ever sees the returned raw records; retrieval,
/// authentication, and caching are owned by the implementation.
#[async_trait]
pub trait ActivitySource: Send + Sync {
    /// Fetch the raw activity records for the trailing `lookback_days` days.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] when the upstream provider cannot be
    /// reached or answers with an undecodable payload.
    async fn recent_activities(
        &self,
        lookback_days: u32,
    ) -> Result<Vec<serde_json::Value>, ProviderError>;
}
