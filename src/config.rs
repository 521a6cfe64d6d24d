// ABOUTME: Tracker configuration with environment variable overrides
// ABOUTME: Defaults reproduce the fixed tracking behavior exactly
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Formcoach

//! # Tracker Configuration
//!
//! The rep-detection thresholds are compile-time constants; they define
//! what counts as a repetition. The visibility gate is the one knob exposed
//! here, and its default reproduces the stock behavior; overriding it only
//! changes how aggressively occluded frames are dropped.

use std::env;

use tracing::warn;

use crate::constants::visibility;

/// Environment variable overriding the landmark visibility gate
pub const ENV_VISIBILITY_THRESHOLD: &str = "FORMCOACH_VISIBILITY_THRESHOLD";

/// Runtime configuration for [`crate::tracker::RepTracker`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerConfig {
    /// Minimum landmark confidence; frames with any required landmark at or
    /// below this value are skipped
    pub visibility_threshold: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: visibility::MIN_CONFIDENCE,
        }
    }
}

impl TrackerConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// An unparsable or out-of-range override is ignored with a warning
    /// rather than rejected; tracking should start regardless.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = env::var(ENV_VISIBILITY_THRESHOLD) {
            match raw.parse::<f64>() {
                Ok(value) if (0.0..=1.0).contains(&value) => {
                    config.visibility_threshold = value;
                }
                _ => warn!(
                    value = %raw,
                    "ignoring invalid {ENV_VISIBILITY_THRESHOLD}, expected a number in [0, 1]"
                ),
            }
        }

        config
    }
}
