// ABOUTME: Logging configuration and structured logging setup
// ABOUTME: Env-filter based tracing with json, pretty, and compact output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rouleur

//! Structured logging for pipeline diagnostics.
//!
//! The pipeline reports recoverable conditions (skipped activity records,
//! unparseable plan JSON) through `tracing` rather than through return
//! values; install a subscriber with [`init`] to see them.

use std::env;
use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON format for production logging
    Json,
    /// Human-readable format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables.
    ///
    /// Reads `ROULEUR_LOG_LEVEL` and `ROULEUR_LOG_FORMAT`
    /// (`json` / `pretty` / `compact`).
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let level = env::var("ROULEUR_LOG_LEVEL").unwrap_or(defaults.level);
        let format = match env::var("ROULEUR_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => defaults.format,
        };
        Self { level, format }
    }

    /// Initialize the global tracing subscriber.
    ///
    /// `RUST_LOG` takes precedence over the configured level when set.
    ///
    /// # Errors
    ///
    /// Returns an error when a global subscriber is already installed.
    pub fn init(&self) -> Result<(), tracing_subscriber::util::TryInitError> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.clone()));
        let registry = tracing_subscriber::registry().with(filter);

        match self.format {
            LogFormat::Json => registry
                .with(fmt::layer().json().with_writer(io::stderr))
                .try_init(),
            LogFormat::Pretty => registry
                .with(fmt::layer().with_writer(io::stderr))
                .try_init(),
            LogFormat::Compact => registry
                .with(fmt::layer().compact().with_target(false).with_writer(io::stderr))
                .try_init(),
        }
    }
}
