// ABOUTME: Session persistence abstraction for finished exercise sessions
// ABOUTME: Async SessionStore trait with query filtering, plus the in-memory backend
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Formcoach

//! # Session Storage
//!
//! Saving is the engine's only asynchronous boundary, and it is
//! fire-and-forget from the tracker's perspective: a failed save reports an
//! error but never mutates or discards live session state, so the user can
//! retry. All store implementations must uphold that contract: validate
//! first, then store, never partially.

/// In-memory session store
pub mod memory;

pub use memory::MemorySessionStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::constants::listing;
use crate::errors::CoachResult;
use crate::models::{ExerciseKind, ExerciseSessionRecord};

/// Filters for listing a user's stored sessions.
///
/// Defaults match the session API: newest first, capped at
/// [`listing::DEFAULT_LIMIT`] records, no type or date filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionQuery {
    /// Whose sessions to list
    pub user_id: Uuid,
    /// Only sessions of this exercise, when set
    pub exercise_type: Option<ExerciseKind>,
    /// Only sessions dated at or after this instant, when set
    pub start_date: Option<DateTime<Utc>>,
    /// Only sessions dated at or before this instant, when set
    pub end_date: Option<DateTime<Utc>>,
    /// Maximum number of records returned, `None` for unbounded
    pub limit: Option<usize>,
}

impl SessionQuery {
    /// All sessions for one user, with default limit and no filters
    #[must_use]
    pub const fn for_user(user_id: Uuid) -> Self {
        Self {
            user_id,
            exercise_type: None,
            start_date: None,
            end_date: None,
            limit: Some(listing::DEFAULT_LIMIT),
        }
    }

    /// Restrict to one exercise kind
    #[must_use]
    pub const fn with_exercise(mut self, exercise: ExerciseKind) -> Self {
        self.exercise_type = Some(exercise);
        self
    }

    /// Restrict to sessions dated at or after `start`
    #[must_use]
    pub const fn with_start_date(mut self, start: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Restrict to sessions dated at or before `end`
    #[must_use]
    pub const fn with_end_date(mut self, end: DateTime<Utc>) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Cap the number of returned records
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Remove the record cap, for aggregation over a full window
    #[must_use]
    pub const fn unlimited(mut self) -> Self {
        self.limit = None;
        self
    }

    /// Whether `record` passes every filter of this query
    #[must_use]
    pub fn matches(&self, record: &ExerciseSessionRecord) -> bool {
        if record.user_id != self.user_id {
            return false;
        }
        if let Some(exercise) = self.exercise_type {
            if record.exercise_type != exercise {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if record.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if record.date > end {
                return false;
            }
        }
        true
    }
}

/// Storage abstraction for finished exercise sessions.
///
/// All implementations must provide a consistent interface for the
/// engine, the statistics layer, and binaries.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Validate and store a finished session, returning its id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::CoachError::InvalidRecord`] when the record
    /// fails validation and [`crate::errors::CoachError::Storage`] on
    /// backend failure. Either way nothing was stored and the caller's
    /// in-memory state is intact for retry.
    async fn save_session(&self, record: &ExerciseSessionRecord) -> CoachResult<Uuid>;

    /// Fetch one of a user's sessions by id
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::CoachError::Storage`] on backend failure.
    async fn get_session(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> CoachResult<Option<ExerciseSessionRecord>>;

    /// List a user's sessions matching `query`, newest first
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::CoachError::Storage`] on backend failure.
    async fn list_sessions(&self, query: &SessionQuery)
        -> CoachResult<Vec<ExerciseSessionRecord>>;

    /// Delete one of a user's sessions, returning whether it existed
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::CoachError::Storage`] on backend failure.
    async fn delete_session(&self, user_id: Uuid, id: Uuid) -> CoachResult<bool>;
}
