// ABOUTME: In-memory session store backing tests, benches, and the simulator
// ABOUTME: Shared vector behind an async RwLock, newest-first listing
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Formcoach

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use super::{SessionQuery, SessionStore};
use crate::constants::limits;
use crate::errors::CoachResult;
use crate::models::ExerciseSessionRecord;

/// In-memory [`SessionStore`] implementation.
///
/// Clones share the same underlying storage, so a store handed to the
/// statistics layer sees sessions saved through any other handle.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    records: Arc<tokio::sync::RwLock<Vec<ExerciseSessionRecord>>>,
}

impl MemorySessionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records across all users
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn save_session(&self, record: &ExerciseSessionRecord) -> CoachResult<Uuid> {
        let mut stored = record.clone();
        stored.exercise_name = stored
            .exercise_name
            .trim()
            .chars()
            .take(limits::MAX_NAME_LENGTH)
            .collect();
        stored.validate()?;

        debug!(id = %stored.id, exercise = %stored.exercise_type, reps = stored.reps, "saving session");
        let id = stored.id;
        self.records.write().await.push(stored);
        Ok(id)
    }

    async fn get_session(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> CoachResult<Option<ExerciseSessionRecord>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|record| record.id == id && record.user_id == user_id)
            .cloned())
    }

    async fn list_sessions(
        &self,
        query: &SessionQuery,
    ) -> CoachResult<Vec<ExerciseSessionRecord>> {
        let records = self.records.read().await;
        let mut matching: Vec<ExerciseSessionRecord> = records
            .iter()
            .filter(|record| query.matches(record))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.date.cmp(&a.date));
        if let Some(limit) = query.limit {
            matching.truncate(limit);
        }
        Ok(matching)
    }

    async fn delete_session(&self, user_id: Uuid, id: Uuid) -> CoachResult<bool> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|record| !(record.id == id && record.user_id == user_id));
        Ok(records.len() < before)
    }
}
