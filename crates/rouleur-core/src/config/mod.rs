// ABOUTME: Explicit pipeline configuration and the supported language models
// ABOUTME: Environment-only loading; values are passed into each invocation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rouleur

//! # Pipeline Configuration
//!
//! Configuration is an explicit value handed into each pipeline invocation.
//! There is no global settings object and nothing here mutates at runtime;
//! [`PlanningConfig::from_env`] reads the `ROULEUR_*` environment once and
//! the caller owns the result.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Default activity-history window requested from the source, in days
pub const DEFAULT_LOOKBACK_DAYS: u32 = 28;

/// Default primary goal when the caller leaves it unspecified
pub const DEFAULT_PRIMARY_GOAL: &str = "increase_ftp";

/// Errors raised while loading or parsing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configured language model is not one of the supported variants
    #[error("Unknown language model '{value}'. Supported: {supported}")]
    UnknownLanguageModel {
        /// Raw value that failed to parse
        value: String,
        /// Comma-separated list of supported identifiers
        supported: &'static str,
    },

    /// A numeric environment value failed to parse
    #[error("Invalid value '{value}' for {key}")]
    InvalidNumber {
        /// Environment variable name
        key: &'static str,
        /// Raw value that failed to parse
        value: String,
    },
}

/// Supported language-model providers, matched exhaustively.
///
/// A closed variant set: adding a provider means adding a variant and the
/// compiler walks every dispatch site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LanguageModel {
    /// OpenAI GPT-5 mini
    Gpt5Mini,
    /// Google Gemini Flash
    GeminiFlash,
}

impl LanguageModel {
    /// Environment variable selecting the model
    pub const ENV_VAR: &'static str = "ROULEUR_LANGUAGE_MODEL";

    const SUPPORTED: &'static str = "gpt-5-mini, gemini-flash";

    /// Provider-side model identifier used by generator implementations
    #[must_use]
    pub const fn api_id(self) -> &'static str {
        match self {
            Self::Gpt5Mini => "gpt-5-mini-2025-08-07",
            Self::GeminiFlash => "gemini-flash-latest",
        }
    }
}

impl Default for LanguageModel {
    fn default() -> Self {
        Self::GeminiFlash
    }
}

impl fmt::Display for LanguageModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Gpt5Mini => "gpt-5-mini",
            Self::GeminiFlash => "gemini-flash",
        };
        f.write_str(name)
    }
}

impl FromStr for LanguageModel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gpt-5-mini" => Ok(Self::Gpt5Mini),
            "gemini-flash" => Ok(Self::GeminiFlash),
            other => Err(ConfigError::UnknownLanguageModel {
                value: other.to_owned(),
                supported: Self::SUPPORTED,
            }),
        }
    }
}

/// Weekly planning constraints supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConstraints {
    /// Hard cap on weekly training hours
    pub max_hours_week: f64,
    /// Number of sessions the athlete can fit into the week
    pub sessions_per_week: u32,
    /// Primary training goal; [`DEFAULT_PRIMARY_GOAL`] when unset
    pub primary_goal: Option<String>,
}

impl Default for PlanConstraints {
    fn default() -> Self {
        Self {
            max_hours_week: 8.0,
            sessions_per_week: 4,
            primary_goal: None,
        }
    }
}

/// Configuration for one planning pipeline invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanningConfig {
    /// Language model used by the plan generator
    pub language_model: LanguageModel,
    /// How many days of activity history to request from the source
    pub lookback_days: u32,
    /// Weekly constraints echoed into the summary
    pub constraints: PlanConstraints,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            language_model: LanguageModel::default(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            constraints: PlanConstraints::default(),
        }
    }
}

impl PlanningConfig {
    /// Load configuration from `ROULEUR_*` environment variables.
    ///
    /// Unset variables fall back to defaults. Set-but-invalid values are
    /// rejected rather than silently coerced.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let language_model = match env::var(LanguageModel::ENV_VAR) {
            Ok(raw) => raw.parse()?,
            Err(_) => LanguageModel::default(),
        };

        let defaults = PlanConstraints::default();
        let constraints = PlanConstraints {
            max_hours_week: parse_env("ROULEUR_MAX_HOURS_WEEK", defaults.max_hours_week)?,
            sessions_per_week: parse_env("ROULEUR_SESSIONS_PER_WEEK", defaults.sessions_per_week)?,
            primary_goal: env::var("ROULEUR_PRIMARY_GOAL").ok(),
        };

        Ok(Self {
            language_model,
            lookback_days: parse_env("ROULEUR_LOOKBACK_DAYS", DEFAULT_LOOKBACK_DAYS)?,
            constraints,
        })
    }
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        Err(_) => Ok(default),
    }
}
