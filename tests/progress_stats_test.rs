// ABOUTME: Integration tests for progress-statistics aggregation
// ABOUTME: Totals, weekly windows, streak semantics, breakdowns, and recency caps
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Formcoach

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, Duration, Utc};
use formcoach::models::{ExerciseKind, ExerciseSessionRecord};
use formcoach::stats::{compute_progress, progress_for_user};
use formcoach::store::{MemorySessionStore, SessionStore};
use uuid::Uuid;

fn record(
    user_id: Uuid,
    exercise: ExerciseKind,
    reps: u32,
    duration_seconds: u32,
    date: DateTime<Utc>,
) -> ExerciseSessionRecord {
    ExerciseSessionRecord {
        id: Uuid::new_v4(),
        user_id,
        exercise_type: exercise,
        exercise_name: exercise.display_title().to_owned(),
        reps,
        duration_seconds,
        calories_burned: f64::from(reps) * exercise.calories_per_rep(),
        start_time: date - Duration::seconds(i64::from(duration_seconds)),
        end_time: Some(date),
        feedback: Vec::new(),
        date,
    }
}

#[test]
fn totals_cover_the_window() {
    let user = Uuid::new_v4();
    let now = Utc::now();
    let records = vec![
        record(user, ExerciseKind::Squats, 10, 300, now),
        record(user, ExerciseKind::Pushups, 20, 600, now - Duration::days(1)),
        record(user, ExerciseKind::Squats, 30, 300, now - Duration::days(2)),
    ];

    let stats = compute_progress(&records, 30, now);

    assert_eq!(stats.totals.total_reps, 60);
    assert_eq!(stats.totals.total_sessions, 3);
    assert_eq!(stats.totals.total_duration_minutes, 20);
    assert_eq!(stats.totals.average_reps_per_session, 20);
    // 10*0.15 + 20*0.10 + 30*0.15 = 8.0
    assert_eq!(stats.totals.total_calories_burned, 8);
    assert_eq!(stats.period.days, 30);
}

#[test]
fn average_is_zero_for_an_empty_window() {
    let stats = compute_progress(&[], 30, Utc::now());
    assert_eq!(stats.totals.total_sessions, 0);
    assert_eq!(stats.totals.average_reps_per_session, 0);
    assert_eq!(stats.streak.days, 0);
    assert!(stats.breakdown.is_empty());
    assert!(stats.recent_sessions.is_empty());
}

#[test]
fn old_records_fall_outside_the_window() {
    let user = Uuid::new_v4();
    let now = Utc::now();
    let records = vec![
        record(user, ExerciseKind::Squats, 10, 300, now),
        record(user, ExerciseKind::Squats, 99, 300, now - Duration::days(40)),
    ];

    let stats = compute_progress(&records, 30, now);
    assert_eq!(stats.totals.total_reps, 10);
    assert_eq!(stats.totals.total_sessions, 1);
}

#[test]
fn weekly_counts_only_the_trailing_week() {
    let user = Uuid::new_v4();
    let now = Utc::now();
    let records = vec![
        record(user, ExerciseKind::Squats, 10, 300, now),
        record(user, ExerciseKind::Squats, 10, 300, now - Duration::days(3)),
        record(user, ExerciseKind::Squats, 10, 300, now - Duration::days(20)),
    ];

    let stats = compute_progress(&records, 30, now);
    assert_eq!(stats.weekly.sessions, 2);
    assert_eq!(stats.totals.total_sessions, 3);
}

#[test]
fn streak_counts_consecutive_days_through_today() {
    let user = Uuid::new_v4();
    let now = Utc::now();
    let records: Vec<_> = (0..3)
        .map(|day| record(user, ExerciseKind::Squats, 10, 300, now - Duration::days(day)))
        .collect();

    let stats = compute_progress(&records, 30, now);
    assert_eq!(stats.streak.days, 3);
}

#[test]
fn streak_breaks_at_the_first_gap() {
    let user = Uuid::new_v4();
    let now = Utc::now();
    let records = vec![
        record(user, ExerciseKind::Squats, 10, 300, now),
        // yesterday missing
        record(user, ExerciseKind::Squats, 10, 300, now - Duration::days(2)),
        record(user, ExerciseKind::Squats, 10, 300, now - Duration::days(3)),
    ];

    let stats = compute_progress(&records, 30, now);
    assert_eq!(stats.streak.days, 1);
}

#[test]
fn streak_tolerates_a_missing_today() {
    // The day is not over; not having exercised yet must not zero the streak.
    let user = Uuid::new_v4();
    let now = Utc::now();
    let records = vec![
        record(user, ExerciseKind::Squats, 10, 300, now - Duration::days(1)),
        record(user, ExerciseKind::Squats, 10, 300, now - Duration::days(2)),
    ];

    let stats = compute_progress(&records, 30, now);
    assert_eq!(stats.streak.days, 2);
}

#[test]
fn breakdown_splits_by_exercise() {
    let user = Uuid::new_v4();
    let now = Utc::now();
    let records = vec![
        record(user, ExerciseKind::Squats, 10, 300, now),
        record(user, ExerciseKind::Squats, 12, 300, now - Duration::days(1)),
        record(user, ExerciseKind::JumpingJacks, 40, 300, now),
    ];

    let stats = compute_progress(&records, 30, now);
    let squats = stats.breakdown[&ExerciseKind::Squats];
    assert_eq!(squats.count, 2);
    assert_eq!(squats.total_reps, 22);
    let jacks = stats.breakdown[&ExerciseKind::JumpingJacks];
    assert_eq!(jacks.count, 1);
    assert_eq!(jacks.total_reps, 40);
    assert!(!stats.breakdown.contains_key(&ExerciseKind::Pushups));
}

#[test]
fn recent_sessions_cap_at_ten_newest_first() {
    let user = Uuid::new_v4();
    let now = Utc::now();
    let records: Vec<_> = (0..12)
        .map(|hour| {
            record(
                user,
                ExerciseKind::Squats,
                hour,
                60,
                now - Duration::hours(i64::from(hour)),
            )
        })
        .collect();

    let stats = compute_progress(&records, 30, now);
    assert_eq!(stats.recent_sessions.len(), 10);
    assert_eq!(stats.recent_sessions[0].reps, 0, "newest record leads");
    assert!(stats
        .recent_sessions
        .windows(2)
        .all(|pair| pair[0].date >= pair[1].date));
}

#[tokio::test]
async fn store_backed_progress_matches_the_saved_sessions() {
    let store = MemorySessionStore::new();
    let user = Uuid::new_v4();
    let other = Uuid::new_v4();
    let now = Utc::now();

    store
        .save_session(&record(user, ExerciseKind::Squats, 10, 300, now))
        .await
        .unwrap();
    store
        .save_session(&record(
            user,
            ExerciseKind::Pushups,
            20,
            600,
            now - Duration::days(1),
        ))
        .await
        .unwrap();
    store
        .save_session(&record(other, ExerciseKind::Squats, 99, 300, now))
        .await
        .unwrap();

    let stats = progress_for_user(&store, user, 30).await.unwrap();
    assert_eq!(stats.totals.total_reps, 30);
    assert_eq!(stats.totals.total_sessions, 2);
    assert_eq!(stats.streak.days, 2);
}
