// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Tracking thresholds, feedback strings, calorie rates, and record limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Fitness

//! Constants module
//!
//! Application constants grouped by domain. The tracking thresholds are part
//! of the rep-detection contract and are deliberately not runtime-tunable;
//! changing one changes which movements count as a repetition.

/// Landmark visibility gating
pub mod visibility {
    /// Minimum detection confidence for a landmark to be trusted.
    ///
    /// Frames where any required landmark is at or below this value are
    /// skipped entirely: no stage change, no feedback. The comparison is
    /// strictly greater-than.
    pub const MIN_CONFIDENCE: f64 = 0.7;
}

/// Stage-transition and form-check thresholds, per exercise
pub mod thresholds {
    /// Knee angle below which a squat enters the contracted stage (degrees)
    pub const SQUAT_KNEE_CONTRACTED: f64 = 100.0;
    /// Knee angle above which a contracted squat completes a rep (degrees)
    pub const SQUAT_KNEE_EXTENDED: f64 = 160.0;
    /// Back angle below which a contracted squat draws a posture warning (degrees)
    pub const SQUAT_BACK_MIN: f64 = 80.0;
    /// Horizontal knee travel past the ankle that draws a warning (normalized x)
    pub const KNEE_OVER_TOE_TOLERANCE: f64 = 0.05;

    /// Elbow angle below which a pushup enters the contracted stage (degrees)
    pub const PUSHUP_ELBOW_CONTRACTED: f64 = 90.0;
    /// Elbow angle above which a contracted pushup completes a rep (degrees)
    pub const PUSHUP_ELBOW_EXTENDED: f64 = 160.0;
    /// Back angle below which a pushup draws a posture warning, any stage (degrees)
    pub const PUSHUP_BACK_MIN: f64 = 160.0;
    /// Shoulder-to-wrist vertical clearance for full pushup depth (normalized y)
    pub const PUSHUP_CHEST_DEPTH: f64 = 0.05;
    /// Hip-shoulder-elbow angle above which elbows count as flared (degrees)
    pub const PUSHUP_ELBOW_FLARE_MAX: f64 = 80.0;

    /// Elbow angle above which a curl returns to the resting stage (degrees)
    pub const CURL_ELBOW_EXTENDED: f64 = 160.0;
    /// Elbow angle below which a resting curl completes a rep (degrees)
    pub const CURL_ELBOW_CONTRACTED: f64 = 45.0;
    /// Vertical shoulder-to-elbow drift that draws a warning (normalized y)
    pub const CURL_ELBOW_DRIFT: f64 = 0.05;

    /// Ankle spread as a multiple of shoulder width for the "out" stage
    pub const JACK_SPREAD_RATIO: f64 = 1.5;
}

/// Coaching feedback strings surfaced to the user
pub mod feedback {
    /// Emitted exactly once per completed repetition
    pub const GOOD_REP: &str = "Good Rep!";
    /// Squat depth correction
    pub const GO_DEEPER: &str = "Go deeper!";
    /// Posture correction shared by squats and pushups
    pub const KEEP_BACK_STRAIGHT: &str = "Keep your back straight!";
    /// Squat knee-tracking correction
    pub const KNEES_BEHIND_TOES: &str = "Keep knees behind toes!";
    /// Pushup depth correction
    pub const LOWER_CHEST: &str = "Lower your chest more!";
    /// Pushup elbow-flare correction
    pub const TUCK_ELBOWS: &str = "Tuck your elbows in!";
    /// Curl elbow-drift correction
    pub const KEEP_ELBOW_STILL: &str = "Keep your elbow still!";
    /// Banner shown before the first feedback of a session
    pub const LETS_START: &str = "Let's start!";
}

/// Estimated calories burned per repetition, by exercise
pub mod calories {
    /// Squats and front squats
    pub const SQUATS_PER_REP: f64 = 0.15;
    /// Pushups
    pub const PUSHUPS_PER_REP: f64 = 0.10;
    /// Bicep curls
    pub const BICEP_CURLS_PER_REP: f64 = 0.05;
    /// Jumping jacks
    pub const JUMPING_JACKS_PER_REP: f64 = 0.20;
}

/// Validation limits for persisted session records
pub mod limits {
    /// Maximum repetitions a single session record may carry
    pub const MAX_REPS: u32 = 10_000;
    /// Maximum session duration in seconds (24 hours)
    pub const MAX_DURATION_SECONDS: u32 = 86_400;
    /// Maximum estimated calories for a single session
    pub const MAX_CALORIES: f64 = 5_000.0;
    /// Maximum stored length of an exercise display name
    pub const MAX_NAME_LENGTH: usize = 100;
}

/// Progress-statistics windows
pub mod stats {
    /// Default reporting window in days
    pub const DEFAULT_PERIOD_DAYS: u32 = 30;
    /// Trailing window for the weekly session count, in days
    pub const WEEKLY_WINDOW_DAYS: i64 = 7;
    /// Upper bound on the consecutive-day streak scan
    pub const STREAK_SCAN_DAYS: i64 = 365;
    /// Number of recent sessions included in a stats report
    pub const RECENT_SESSION_COUNT: usize = 10;
}

/// Session-listing defaults
pub mod listing {
    /// Default maximum number of sessions returned by a query
    pub const DEFAULT_LIMIT: usize = 100;
}
