// ABOUTME: Main library entry point for the Rouleur cycling coach core
// ABOUTME: Wires the planning pipeline, workout codec, generator boundary, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rouleur
#![deny(unsafe_code)]

//! # Rouleur
//!
//! The training-load and plan-codec pipeline behind an AI cycling coach:
//! recent activities in, an importable weekly workout plan out.
//!
//! ## Architecture
//!
//! The pipeline is a pure, synchronous transformation over in-memory data,
//! with its two external collaborators injected behind async traits:
//!
//! - **Providers** ([`providers`]): normalize raw activity records from the
//!   activity-tracking provider; the [`providers::ActivitySource`] trait is
//!   the retrieval seam
//! - **Intelligence** ([`intelligence`]): chronic/acute training load over a
//!   dense daily stress series, plus the weekly summary
//! - **Planning** ([`planning`]): the orchestration entry point and the
//!   codec that turns a model response into the intervals.icu `.txt`
//!   workout format
//! - **LLM boundary** ([`llm`]): the [`llm::PlanGenerator`] trait hiding
//!   prompt construction and the provider HTTP call
//!
//! ## Example
//!
//! ```rust,no_run
//! use rouleur::config::PlanningConfig;
//! use rouleur::planning::generate_weekly_plan;
//! # async fn example(
//! #     source: &dyn rouleur::providers::ActivitySource,
//! #     generator: &dyn rouleur::llm::PlanGenerator,
//! # ) -> rouleur::errors::PlanResult<()> {
//! let config = PlanningConfig::from_env()?;
//! let weekly = generate_weekly_plan(source, generator, &config).await?;
//! println!("{}", weekly.plan);
//! # Ok(())
//! # }
//! ```

/// Unified error type for the planning pipeline
pub mod errors;
/// Plan-generator boundary for language-model collaborators
pub mod llm;
/// Logging configuration and setup
pub mod logging;
/// Planning pipeline and workout-file codec
pub mod planning;

pub use rouleur_core::{config, models};
pub use rouleur_intelligence as intelligence;
pub use rouleur_providers as providers;
