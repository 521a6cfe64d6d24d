// ABOUTME: Error types for the Formcoach tracking engine
// ABOUTME: Provides the unified CoachError enum and CoachResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Fitness

//! # Unified Error Handling
//!
//! All fallible operations in the engine return [`CoachResult`]. Nothing in
//! this crate is fatal by design: a bad frame is skipped, a rejected record
//! leaves in-memory session state untouched for retry.

use thiserror::Error;

/// Result alias used throughout the engine
pub type CoachResult<T> = Result<T, CoachError>;

/// Errors produced by the tracking engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoachError {
    /// A rule set asked for a landmark the frame does not carry
    #[error("landmark '{landmark}' missing from frame")]
    MissingLandmark {
        /// Name of the missing landmark
        landmark: &'static str,
    },

    /// A frame failed structural validation before rule evaluation
    #[error("malformed landmark frame: {details}")]
    MalformedFrame {
        /// Details about what was wrong with the frame
        details: String,
    },

    /// A string did not parse into a known exercise kind
    #[error("unknown exercise type '{value}'")]
    UnknownExercise {
        /// The unrecognized input string
        value: String,
    },

    /// A session record field was outside its allowed range
    #[error("invalid session record: {field} {reason}")]
    InvalidRecord {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// The session store failed to complete an operation
    #[error("session storage failed: {details}")]
    Storage {
        /// Backend-specific failure details
        details: String,
    },
}

impl CoachError {
    /// Create a "missing landmark" error
    #[must_use]
    pub const fn missing_landmark(landmark: &'static str) -> Self {
        Self::MissingLandmark { landmark }
    }

    /// Create a "malformed frame" error
    #[must_use]
    pub fn malformed_frame(details: impl Into<String>) -> Self {
        Self::MalformedFrame {
            details: details.into(),
        }
    }

    /// Create an "invalid record" error
    #[must_use]
    pub fn invalid_record(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            field,
            reason: reason.into(),
        }
    }

    /// Create a "storage" error
    #[must_use]
    pub fn storage(details: impl Into<String>) -> Self {
        Self::Storage {
            details: details.into(),
        }
    }

    /// Whether the caller can retry the operation without losing state.
    ///
    /// Storage failures never consume the in-memory session, so a save can
    /// always be attempted again.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Storage { .. } | Self::InvalidRecord { .. })
    }
}
