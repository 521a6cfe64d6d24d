// ABOUTME: Live tracking session state and the persisted session record
// ABOUTME: Validation limits mirror the session storage API contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Fitness

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{feedback, limits};
use crate::errors::{CoachError, CoachResult};
use crate::models::{ExerciseKind, RepStage};

/// Snapshot of a live tracking session.
///
/// Owned exclusively by the session aggregator; the tracker mutates it only
/// through rule outcomes. `rep_count` increases by exactly 1 per completed
/// repetition and resets only on an exercise switch or a new session.
/// `last_spoken` carries the speech de-duplication state explicitly so the
/// whole session is inspectable and serializable as one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Completed repetitions this session
    pub rep_count: u32,
    /// Current phase of the movement cycle
    pub stage: RepStage,
    /// Latest non-empty feedback, kept for display between frames
    pub last_feedback: String,
    /// Last feedback that was actually narrated; gates repeat narration
    pub last_spoken: String,
    /// When the session (or the current exercise) started
    pub started_at: DateTime<Utc>,
}

impl SessionState {
    /// Fresh state at the given stage and start time
    #[must_use]
    pub fn new(stage: RepStage, started_at: DateTime<Utc>) -> Self {
        Self {
            rep_count: 0,
            stage,
            last_feedback: feedback::LETS_START.to_owned(),
            last_spoken: String::new(),
            started_at,
        }
    }
}

/// A finished exercise session in its persisted form.
///
/// Produced from [`SessionState`] on an explicit save and handed to a
/// session store. Field names serialize in camelCase to match the session
/// storage API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSessionRecord {
    /// Record identifier
    pub id: Uuid,
    /// Owner of the session
    pub user_id: Uuid,
    /// Which exercise was tracked
    pub exercise_type: ExerciseKind,
    /// Display name shown in session lists
    pub exercise_name: String,
    /// Completed repetitions
    pub reps: u32,
    /// Session length in seconds
    #[serde(rename = "duration")]
    pub duration_seconds: u32,
    /// Estimated calories burned (reps × per-exercise rate)
    pub calories_burned: f64,
    /// When tracking started
    pub start_time: DateTime<Utc>,
    /// When tracking ended
    pub end_time: Option<DateTime<Utc>>,
    /// Distinct coaching messages heard during the session
    pub feedback: Vec<String>,
    /// Date the record belongs to, used for streaks and windows
    pub date: DateTime<Utc>,
}

impl ExerciseSessionRecord {
    /// Check the record against the storage limits.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::InvalidRecord`] naming the first offending
    /// field. A rejected record is never partially stored; the caller keeps
    /// its in-memory state and may correct and retry.
    pub fn validate(&self) -> CoachResult<()> {
        if self.reps > limits::MAX_REPS {
            return Err(CoachError::invalid_record(
                "reps",
                format!("must be at most {}", limits::MAX_REPS),
            ));
        }
        if self.duration_seconds > limits::MAX_DURATION_SECONDS {
            return Err(CoachError::invalid_record(
                "duration",
                format!("must be at most {} seconds", limits::MAX_DURATION_SECONDS),
            ));
        }
        if !(0.0..=limits::MAX_CALORIES).contains(&self.calories_burned) {
            return Err(CoachError::invalid_record(
                "caloriesBurned",
                format!("must be between 0 and {}", limits::MAX_CALORIES),
            ));
        }
        let name = self.exercise_name.trim();
        if name.is_empty() {
            return Err(CoachError::invalid_record("exerciseName", "must not be empty"));
        }
        if name.chars().count() > limits::MAX_NAME_LENGTH {
            return Err(CoachError::invalid_record(
                "exerciseName",
                format!("must be at most {} characters", limits::MAX_NAME_LENGTH),
            ));
        }
        if let Some(end) = self.end_time {
            if end < self.start_time {
                return Err(CoachError::invalid_record(
                    "endTime",
                    "must not precede startTime",
                ));
            }
        }
        Ok(())
    }
}
