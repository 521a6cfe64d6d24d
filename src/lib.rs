// ABOUTME: Main library entry point for the Formcoach tracking engine
// ABOUTME: Rep counting, coaching feedback, session storage, and progress statistics
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Formcoach

#![deny(unsafe_code)]

//! # Formcoach
//!
//! A pose-driven exercise repetition tracking and coaching engine. The
//! engine consumes per-frame body-landmark sequences from an external
//! pose-estimation source, detects completed repetitions through per-exercise
//! state machines, emits real-time form feedback, and aggregates finished
//! sessions into persisted records and progress statistics.
//!
//! ## Architecture
//!
//! - **rules**: one fixed-threshold rule set per exercise, pure and
//!   independently testable
//! - **tracker**: the frame dispatcher (visibility gating, rule dispatch,
//!   and the per-frame failure boundary)
//! - **session**: live session aggregation with speech de-duplication
//! - **store**: async session persistence behind the [`store::SessionStore`]
//!   trait
//! - **stats**: progress aggregation (totals, streaks, breakdowns)
//!
//! ## Example
//!
//! ```rust
//! use formcoach::models::ExerciseKind;
//! use formcoach::tracker::RepTracker;
//!
//! let mut tracker = RepTracker::new(ExerciseKind::Squats);
//! // Feed frames from the pose source as they arrive:
//! // let outcome = tracker.process_frame(&frame);
//! assert_eq!(tracker.snapshot().rep_count, 0);
//! ```

// Foundation types live in formcoach-core; re-export them so consumers only
// depend on this crate.
pub use formcoach_core::{constants, errors, geometry, models};

/// Tracker configuration with environment overrides
pub mod config;

/// Structured logging setup built on `tracing`
pub mod logging;

/// Per-exercise repetition rule sets
pub mod rules;

/// Live session aggregation and record conversion
pub mod session;

/// Progress statistics over stored sessions
pub mod stats;

/// Session persistence trait and in-memory backend
pub mod store;

/// Synthetic pose fixtures shared by tests, benches, and the simulator
pub mod test_utils;

/// Frame dispatcher and tracking loop entry point
pub mod tracker;
