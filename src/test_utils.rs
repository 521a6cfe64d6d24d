// ABOUTME: Synthetic pose fixtures for exercising the tracking engine without a camera
// ABOUTME: Frame builders and canonical rep-cycle frames shared by tests, benches, and the simulator
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Formcoach

//! Synthetic pose fixtures.
//!
//! Frames here are geometrically exact: each canonical pose is constructed
//! so the measured joint angles land comfortably past the rule thresholds,
//! with clean form (no incidental corrective feedback). Tests that need a
//! form fault build their own variant on top of [`frame_with`].

use formcoach_core::models::{ExerciseKind, Landmark, LandmarkFrame, PoseLandmark};

/// Length of the pose source's frame layout
pub const POSE_FRAME_LEN: usize = 33;

/// Build a full-length frame with the given points fully visible and every
/// other slot zeroed and invisible
#[must_use]
pub fn frame_with(points: &[(PoseLandmark, f64, f64)]) -> LandmarkFrame {
    frame_with_visibility(points, 1.0)
}

/// Build a full-length frame with the given points at a chosen visibility
#[must_use]
pub fn frame_with_visibility(
    points: &[(PoseLandmark, f64, f64)],
    visibility: f64,
) -> LandmarkFrame {
    let mut landmarks = vec![Landmark::new(0.0, 0.0, 0.0); POSE_FRAME_LEN];
    for &(point, x, y) in points {
        landmarks[point.index()] = Landmark::new(x, y, visibility);
    }
    LandmarkFrame::new(landmarks)
}

/// Standing tall, leg straight: knee angle 180°
#[must_use]
pub fn squat_extended() -> LandmarkFrame {
    frame_with(&[
        (PoseLandmark::LeftShoulder, 0.5, 0.1),
        (PoseLandmark::LeftHip, 0.5, 0.3),
        (PoseLandmark::LeftKnee, 0.5, 0.6),
        (PoseLandmark::LeftAnkle, 0.5, 0.9),
    ])
}

/// At depth with clean form: knee angle 90°, hips level with the knees,
/// back upright, knees behind the toes
#[must_use]
pub fn squat_contracted() -> LandmarkFrame {
    frame_with(&[
        (PoseLandmark::LeftShoulder, 0.8, 0.2),
        (PoseLandmark::LeftHip, 0.8, 0.6),
        (PoseLandmark::LeftKnee, 0.5, 0.6),
        (PoseLandmark::LeftAnkle, 0.5, 0.9),
    ])
}

/// Hips above knees: front squat at the top
#[must_use]
pub fn front_squat_extended() -> LandmarkFrame {
    frame_with(&[
        (PoseLandmark::LeftHip, 0.45, 0.5),
        (PoseLandmark::RightHip, 0.55, 0.5),
        (PoseLandmark::LeftKnee, 0.45, 0.7),
        (PoseLandmark::RightKnee, 0.55, 0.7),
    ])
}

/// Hips below knees: front squat at depth
#[must_use]
pub fn front_squat_contracted() -> LandmarkFrame {
    frame_with(&[
        (PoseLandmark::LeftHip, 0.45, 0.75),
        (PoseLandmark::RightHip, 0.55, 0.75),
        (PoseLandmark::LeftKnee, 0.45, 0.7),
        (PoseLandmark::RightKnee, 0.55, 0.7),
    ])
}

/// Plank with arms locked out: elbow angle 180°, back straight
#[must_use]
pub fn pushup_extended() -> LandmarkFrame {
    frame_with(&[
        (PoseLandmark::LeftShoulder, 0.3, 0.6),
        (PoseLandmark::LeftElbow, 0.3, 0.75),
        (PoseLandmark::LeftWrist, 0.3, 0.9),
        (PoseLandmark::LeftHip, 0.6, 0.6),
        (PoseLandmark::LeftKnee, 0.9, 0.6),
    ])
}

/// Chest lowered with clean form: elbow angle ≈74°, back straight, chest
/// below the depth line, elbows tucked
#[must_use]
pub fn pushup_contracted() -> LandmarkFrame {
    frame_with(&[
        (PoseLandmark::LeftShoulder, 0.3, 0.6),
        (PoseLandmark::LeftElbow, 0.42, 0.68),
        (PoseLandmark::LeftWrist, 0.3, 0.78),
        (PoseLandmark::LeftHip, 0.6, 0.6),
        (PoseLandmark::LeftKnee, 0.9, 0.6),
    ])
}

/// Arm hanging extended: elbow angle 180°, elbow level with the shoulder
/// so the drift check stays quiet
#[must_use]
pub fn curl_extended() -> LandmarkFrame {
    frame_with(&[
        (PoseLandmark::LeftShoulder, 0.3, 0.5),
        (PoseLandmark::LeftElbow, 0.5, 0.5),
        (PoseLandmark::LeftWrist, 0.7, 0.5),
    ])
}

/// Arm curled: elbow angle 30°
#[must_use]
pub fn curl_contracted() -> LandmarkFrame {
    frame_with(&[
        (PoseLandmark::LeftShoulder, 0.3, 0.5),
        (PoseLandmark::LeftElbow, 0.5, 0.5),
        (PoseLandmark::LeftWrist, 0.327, 0.6),
    ])
}

/// Arms overhead, feet spread past 1.5× shoulder width
#[must_use]
pub fn jack_out() -> LandmarkFrame {
    frame_with(&[
        (PoseLandmark::LeftShoulder, 0.4, 0.4),
        (PoseLandmark::RightShoulder, 0.6, 0.4),
        (PoseLandmark::LeftWrist, 0.35, 0.2),
        (PoseLandmark::RightWrist, 0.65, 0.2),
        (PoseLandmark::LeftAnkle, 0.3, 0.9),
        (PoseLandmark::RightAnkle, 0.7, 0.9),
    ])
}

/// Arms down, feet together inside shoulder width
#[must_use]
pub fn jack_in() -> LandmarkFrame {
    frame_with(&[
        (PoseLandmark::LeftShoulder, 0.4, 0.4),
        (PoseLandmark::RightShoulder, 0.6, 0.4),
        (PoseLandmark::LeftWrist, 0.38, 0.6),
        (PoseLandmark::RightWrist, 0.62, 0.6),
        (PoseLandmark::LeftAnkle, 0.45, 0.9),
        (PoseLandmark::RightAnkle, 0.55, 0.9),
    ])
}

/// The frame sequence for exactly one clean repetition of `exercise`,
/// starting from the exercise's initial stage
#[must_use]
pub fn rep_cycle(exercise: ExerciseKind) -> Vec<LandmarkFrame> {
    match exercise {
        ExerciseKind::Squats => vec![squat_contracted(), squat_extended()],
        ExerciseKind::FrontSquats => vec![front_squat_contracted(), front_squat_extended()],
        ExerciseKind::Pushups => vec![pushup_contracted(), pushup_extended()],
        ExerciseKind::BicepCurls => vec![curl_extended(), curl_contracted()],
        ExerciseKind::JumpingJacks => vec![jack_out(), jack_in()],
    }
}
