// ABOUTME: Training intelligence for the Rouleur planning pipeline
// ABOUTME: Exponentially-weighted load computation and weekly summary building
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rouleur

//! # Rouleur Intelligence
//!
//! Pure, synchronous computations over normalized activity records:
//!
//! - [`training_load`]: chronic/acute exponentially-weighted training load
//!   over a dense daily stress series
//! - [`summary`]: aggregation of the trailing week plus constraints into the
//!   [`WeeklySummary`](rouleur_core::models::WeeklySummary) handed to the
//!   plan generator
//!
//! Nothing here performs I/O; inputs are owned snapshots and every function
//! is safe to call from concurrent pipeline invocations.

/// Intelligence error types
pub mod errors;
/// Weekly summary aggregation
pub mod summary;
/// Chronic/acute training-load computation
pub mod training_load;

pub use errors::IntelligenceError;
pub use summary::build_weekly_summary;
pub use training_load::{compute_training_load, ATL_DAYS, CTL_DAYS};
