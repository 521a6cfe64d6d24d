// ABOUTME: Progress statistics over stored exercise sessions
// ABOUTME: Totals, weekly counts, day streaks, and per-exercise breakdowns
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Formcoach

//! # Progress Statistics
//!
//! Aggregation over a day-window of session records: totals, the trailing
//! week's session count, the consecutive-day streak, a per-exercise
//! breakdown, and the most recent sessions. [`compute_progress`] is pure and
//! takes the reference instant explicitly; [`progress_for_user`] is the
//! store-backed convenience.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::stats;
use crate::errors::CoachResult;
use crate::models::{ExerciseKind, ExerciseSessionRecord};
use crate::store::{SessionQuery, SessionStore};

/// The reporting window a stats report covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsPeriod {
    /// Start of the window (midnight, `days` days back)
    pub start_date: DateTime<Utc>,
    /// End of the window (last instant of the reference day)
    pub end_date: DateTime<Utc>,
    /// Window length in days
    pub days: u32,
}

/// Aggregate totals over the window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressTotals {
    /// Repetitions across all sessions
    pub total_reps: u64,
    /// Estimated calories, rounded once at aggregation
    pub total_calories_burned: u64,
    /// Number of sessions
    pub total_sessions: usize,
    /// Exercise time in whole minutes
    #[serde(rename = "totalDuration")]
    pub total_duration_minutes: u64,
    /// Mean repetitions per session, rounded; zero when there are none
    pub average_reps_per_session: u64,
}

/// Session count over the trailing seven days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyActivity {
    /// Sessions since the start of the trailing week
    pub sessions: usize,
}

/// Consecutive-day exercise streak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Length of the streak in days
    pub days: u32,
}

/// Per-exercise slice of the window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseBreakdown {
    /// Sessions of this exercise
    pub count: usize,
    /// Repetitions of this exercise
    pub total_reps: u64,
}

/// Full progress report for one user and window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    /// The window this report covers
    pub period: StatsPeriod,
    /// Aggregate totals
    pub totals: ProgressTotals,
    /// Trailing-week activity
    pub weekly: WeeklyActivity,
    /// Consecutive-day streak
    pub streak: StreakSummary,
    /// Per-exercise breakdown
    pub breakdown: HashMap<ExerciseKind, ExerciseBreakdown>,
    /// The most recent sessions in the window, newest first
    pub recent_sessions: Vec<ExerciseSessionRecord>,
}

fn start_of_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Aggregate `records` over the `days`-long window ending at `now`.
///
/// Records outside the window are ignored, so callers may pass a user's full
/// history. The streak scan runs backward from `now`'s date and tolerates a
/// missing *today* (a day that is not over yet cannot break a streak) but
/// stops at the first earlier gap, capped at
/// [`stats::STREAK_SCAN_DAYS`].
#[must_use]
pub fn compute_progress(
    records: &[ExerciseSessionRecord],
    days: u32,
    now: DateTime<Utc>,
) -> ProgressStats {
    let start_date = start_of_day(now - Duration::days(i64::from(days)));
    let end_date = start_of_day(now) + Duration::days(1) - Duration::milliseconds(1);

    let in_window: Vec<&ExerciseSessionRecord> = records
        .iter()
        .filter(|record| record.date >= start_date && record.date <= end_date)
        .collect();

    let total_reps: u64 = in_window.iter().map(|r| u64::from(r.reps)).sum();
    let total_calories: f64 = in_window.iter().map(|r| r.calories_burned).sum();
    let total_duration_seconds: u64 = in_window
        .iter()
        .map(|r| u64::from(r.duration_seconds))
        .sum();
    let total_sessions = in_window.len();

    let average_reps_per_session = if total_sessions > 0 {
        let average = total_reps as f64 / total_sessions as f64;
        average.round() as u64
    } else {
        0
    };

    let weekly_start = start_of_day(now - Duration::days(stats::WEEKLY_WINDOW_DAYS));
    let weekly_sessions = in_window
        .iter()
        .filter(|record| record.date >= weekly_start)
        .count();

    let active_days: HashSet<NaiveDate> =
        in_window.iter().map(|record| record.date.date_naive()).collect();
    let mut streak = 0_u32;
    for day_offset in 0..stats::STREAK_SCAN_DAYS {
        let day = (now - Duration::days(day_offset)).date_naive();
        if active_days.contains(&day) {
            streak += 1;
        } else if day_offset > 0 {
            break;
        }
    }

    let mut breakdown: HashMap<ExerciseKind, ExerciseBreakdown> = HashMap::new();
    for record in &in_window {
        let slice = breakdown.entry(record.exercise_type).or_default();
        slice.count += 1;
        slice.total_reps += u64::from(record.reps);
    }

    let mut recent: Vec<ExerciseSessionRecord> = in_window.iter().copied().cloned().collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(stats::RECENT_SESSION_COUNT);

    ProgressStats {
        period: StatsPeriod {
            start_date,
            end_date,
            days,
        },
        totals: ProgressTotals {
            total_reps,
            total_calories_burned: total_calories.round() as u64,
            total_sessions,
            total_duration_minutes: ((total_duration_seconds as f64) / 60.0).round() as u64,
            average_reps_per_session,
        },
        weekly: WeeklyActivity {
            sessions: weekly_sessions,
        },
        streak: StreakSummary { days: streak },
        breakdown,
        recent_sessions: recent,
    }
}

/// Fetch a user's window of sessions from `store` and aggregate it.
///
/// # Errors
///
/// Propagates storage failures; the aggregation itself cannot fail.
pub async fn progress_for_user<S>(
    store: &S,
    user_id: Uuid,
    days: u32,
) -> CoachResult<ProgressStats>
where
    S: SessionStore + ?Sized,
{
    let now = Utc::now();
    let query = SessionQuery::for_user(user_id)
        .with_start_date(start_of_day(now - Duration::days(i64::from(days))))
        .unlimited();
    let records = store.list_sessions(&query).await?;
    Ok(compute_progress(&records, days, now))
}
