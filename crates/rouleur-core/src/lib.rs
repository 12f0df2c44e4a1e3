// ABOUTME: Core data model and configuration for the Rouleur planning pipeline
// ABOUTME: Defines activity records, training load, summaries, and workout plan types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rouleur

//! # Rouleur Core
//!
//! Shared types for the training-load and plan-codec pipeline:
//!
//! - **Models**: [`models::ActivityRecord`], [`models::TrainingLoad`],
//!   [`models::WeeklySummary`], and the [`models::Workout`] plan structure
//!   parsed from model responses
//! - **Config**: explicit per-invocation configuration, including the closed
//!   [`config::LanguageModel`] variant set
//!
//! All types are plain owned values; nothing in this crate performs I/O or
//! holds shared mutable state.

/// Configuration types passed explicitly into each pipeline invocation
pub mod config;
/// Data model shared across the pipeline crates
pub mod models;
