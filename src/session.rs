// ABOUTME: Live session aggregation over SessionState
// ABOUTME: Rep accounting, speech de-duplication, and conversion to stored records
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Formcoach

//! # Session Aggregation
//!
//! [`SessionAggregator`] owns the [`SessionState`] of the active tracking
//! session. The tracker feeds it rule outcomes; the UI reads snapshots; an
//! explicit save converts it into an [`ExerciseSessionRecord`]. Switching the
//! exercise resets everything, including the speech de-duplication memory.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{ExerciseKind, ExerciseSessionRecord, RepStage, SessionState};
use crate::rules::ExerciseRule;

/// Accumulates rep count, stage, feedback, and timing for one tracking
/// session of one exercise.
#[derive(Debug, Clone)]
pub struct SessionAggregator {
    exercise: ExerciseKind,
    state: SessionState,
    feedback_log: Vec<String>,
}

impl SessionAggregator {
    /// Start a fresh session for `exercise`, stamped now
    #[must_use]
    pub fn new(exercise: ExerciseKind) -> Self {
        Self {
            exercise,
            state: SessionState::new(exercise.initial_stage(), Utc::now()),
            feedback_log: Vec::new(),
        }
    }

    /// The exercise this session is tracking
    #[must_use]
    pub const fn exercise(&self) -> ExerciseKind {
        self.exercise
    }

    /// Borrow the live state
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Immutable copy of the current state, for display or persistence
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.clone()
    }

    /// Discard everything and start over for `exercise`.
    ///
    /// Zeroes the rep count, assigns the exercise's initial stage, restamps
    /// the start time, and clears both the feedback log and the last-spoken
    /// memory so the first message of the new session is narrated again.
    pub fn reset(&mut self, exercise: ExerciseKind) {
        *self = Self::new(exercise);
    }

    /// Apply a rule outcome's stage transition and rep completion
    pub fn advance(&mut self, stage: RepStage, rep_completed: bool) {
        self.state.stage = stage;
        if rep_completed {
            self.state.rep_count += 1;
        }
    }

    /// Record a non-empty feedback message and decide whether to narrate it.
    ///
    /// The message always becomes `last_feedback` for display. It should be
    /// spoken only when it differs from the previously spoken text; frames
    /// arrive ~30×/s and an unchanged correction must not be narrated on
    /// every one of them. Returns `true` when the caller should emit speech.
    pub fn record_feedback(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        self.state.last_feedback = text.to_owned();
        if text == self.state.last_spoken {
            return false;
        }
        self.state.last_spoken = text.to_owned();
        self.feedback_log.push(text.to_owned());
        true
    }

    /// Distinct coaching messages heard so far, in first-heard order
    #[must_use]
    pub fn feedback_log(&self) -> &[String] {
        &self.feedback_log
    }

    /// Convert the session into its persisted form.
    ///
    /// Duration comes from the session clock, calories from the per-exercise
    /// rate. The aggregator itself is untouched: a failed save can be
    /// retried from the same live state.
    #[must_use]
    pub fn finish(&self, user_id: Uuid, ended_at: DateTime<Utc>) -> ExerciseSessionRecord {
        let elapsed = (ended_at - self.state.started_at).num_seconds().max(0);
        let duration_seconds = u32::try_from(elapsed).unwrap_or(u32::MAX);

        ExerciseSessionRecord {
            id: Uuid::new_v4(),
            user_id,
            exercise_type: self.exercise,
            exercise_name: self.exercise.display_title().to_owned(),
            reps: self.state.rep_count,
            duration_seconds,
            calories_burned: f64::from(self.state.rep_count) * self.exercise.calories_per_rep(),
            start_time: self.state.started_at,
            end_time: Some(ended_at),
            feedback: self.feedback_log.clone(),
            date: ended_at,
        }
    }
}
