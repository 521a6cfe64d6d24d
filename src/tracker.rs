// ABOUTME: Frame dispatcher driving the per-exercise rule sets
// ABOUTME: Visibility gating, failure boundary, and session bookkeeping per frame
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Formcoach

//! # Frame Dispatcher
//!
//! [`RepTracker`] is the entry point of the tracking loop. Frames arrive one
//! per camera tick (~30/s) and are processed to completion before the next.
//! Processing is O(1) per frame, so the producer paces itself and no queueing
//! is needed. Three behaviors live at this boundary:
//!
//! - **Visibility gating**: a frame missing any required landmark, or
//!   carrying one at low confidence, is skipped silently. Occlusion and
//!   partial-body framing are normal; skipping beats guessing.
//! - **Failure boundary**: a rule evaluation error is logged and the frame
//!   treated as saying nothing. One bad frame never stops tracking.
//! - **Atomic exercise switch**: switching resets session state before the
//!   next frame can be dispatched, so no frame is processed against a stale
//!   stage.

use chrono::Utc;
use tracing::{debug, trace, warn};
use uuid::Uuid;

use crate::config::TrackerConfig;
use crate::models::{ExerciseKind, ExerciseSessionRecord, LandmarkFrame, SessionState};
use crate::rules::ExerciseRule;
use crate::session::SessionAggregator;

/// What one frame produced, surfaced to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameOutcome {
    /// Rep count after this frame
    pub rep_count: u32,
    /// Whether this frame completed a repetition
    pub rep_completed: bool,
    /// Feedback to display, `None` when the frame said nothing
    pub feedback: Option<String>,
    /// Feedback to narrate, `None` when unchanged since the last narration
    pub speech: Option<String>,
}

/// The tracking loop: one exercise, one session, one frame at a time.
#[derive(Debug, Clone)]
pub struct RepTracker {
    config: TrackerConfig,
    session: SessionAggregator,
}

impl RepTracker {
    /// Track `exercise` with default configuration
    #[must_use]
    pub fn new(exercise: ExerciseKind) -> Self {
        Self::with_config(exercise, TrackerConfig::default())
    }

    /// Track `exercise` with explicit configuration
    #[must_use]
    pub fn with_config(exercise: ExerciseKind, config: TrackerConfig) -> Self {
        Self {
            config,
            session: SessionAggregator::new(exercise),
        }
    }

    /// The currently active exercise
    #[must_use]
    pub const fn exercise(&self) -> ExerciseKind {
        self.session.exercise()
    }

    /// Banner title for the active exercise
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.session.exercise().display_title()
    }

    /// Immutable copy of the live session state
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.session.snapshot()
    }

    /// Switch the active exercise.
    ///
    /// Always resets the session (rep count to zero, stage to the new
    /// exercise's initial stage), even when switching to the same exercise.
    /// The reset completes before this method returns, so the next dispatched
    /// frame can never observe a stale stage.
    pub fn switch_exercise(&mut self, exercise: ExerciseKind) {
        debug!(from = %self.session.exercise(), to = %exercise, "switching exercise");
        self.session.reset(exercise);
    }

    /// Process one landmark frame.
    ///
    /// Never fails: frames that cannot be processed (occlusion, low
    /// confidence, rule error) produce a quiet outcome and tracking
    /// continues with the next frame.
    pub fn process_frame(&mut self, frame: &LandmarkFrame) -> FrameOutcome {
        let exercise = self.session.exercise();

        let all_visible = exercise.required_landmarks().iter().all(|&point| {
            frame
                .get(point)
                .is_some_and(|landmark| landmark.is_visible(self.config.visibility_threshold))
        });
        if !all_visible {
            trace!(exercise = %exercise, "required landmarks occluded, skipping frame");
            return self.quiet_outcome();
        }

        match exercise.process(frame, self.session.state().stage) {
            Ok(outcome) => {
                self.session.advance(outcome.stage, outcome.rep_completed);

                let feedback = outcome.feedback_text();
                let mut speech = None;
                if let Some(text) = &feedback {
                    if self.session.record_feedback(text) {
                        speech = Some(text.clone());
                    }
                }

                FrameOutcome {
                    rep_count: self.session.state().rep_count,
                    rep_completed: outcome.rep_completed,
                    feedback,
                    speech,
                }
            }
            Err(error) => {
                warn!(exercise = %exercise, %error, "rule evaluation failed, dropping frame");
                self.quiet_outcome()
            }
        }
    }

    /// Convert the session into its persisted form, ended now.
    ///
    /// The tracker keeps its live state; a failed save can be retried, and
    /// tracking can simply continue afterwards.
    #[must_use]
    pub fn finish(&self, user_id: Uuid) -> ExerciseSessionRecord {
        self.session.finish(user_id, Utc::now())
    }

    /// Convert the session into its persisted form with an explicit end time
    #[must_use]
    pub fn finish_at(
        &self,
        user_id: Uuid,
        ended_at: chrono::DateTime<Utc>,
    ) -> ExerciseSessionRecord {
        self.session.finish(user_id, ended_at)
    }

    fn quiet_outcome(&self) -> FrameOutcome {
        FrameOutcome {
            rep_count: self.session.state().rep_count,
            rep_completed: false,
            feedback: None,
            speech: None,
        }
    }
}
