// ABOUTME: Squat rule set tracked from a side view
// ABOUTME: Knee-angle stage machine with depth, posture, and knee-tracking checks
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Formcoach

use formcoach_core::constants::{feedback, thresholds};
use formcoach_core::errors::CoachResult;
use formcoach_core::geometry::joint_angle;
use formcoach_core::models::{LandmarkFrame, PoseLandmark, RepStage};
use tracing::debug;

use super::RuleOutcome;

pub(super) const REQUIRED_LANDMARKS: &[PoseLandmark] = &[
    PoseLandmark::LeftShoulder,
    PoseLandmark::LeftHip,
    PoseLandmark::LeftKnee,
    PoseLandmark::LeftAnkle,
];

/// Side-view squat: contracted when the knee angle closes below 100°, rep
/// counted when it reopens past 160°. Form checks run only while contracted;
/// a rep-completing frame has already left the contracted stage by the time
/// they are evaluated.
pub(super) fn process(frame: &LandmarkFrame, stage: RepStage) -> CoachResult<RuleOutcome> {
    let shoulder = frame.require(PoseLandmark::LeftShoulder)?;
    let hip = frame.require(PoseLandmark::LeftHip)?;
    let knee = frame.require(PoseLandmark::LeftKnee)?;
    let ankle = frame.require(PoseLandmark::LeftAnkle)?;

    let knee_angle = joint_angle(hip, knee, ankle);
    let back_angle = joint_angle(shoulder, hip, knee);
    debug!(stage = %stage, knee_angle, back_angle, "squat frame");

    let mut outcome = RuleOutcome::quiet(stage);

    if knee_angle < thresholds::SQUAT_KNEE_CONTRACTED {
        outcome.stage = RepStage::Down;
    }
    if knee_angle > thresholds::SQUAT_KNEE_EXTENDED && outcome.stage == RepStage::Down {
        outcome.rep_completed = true;
        outcome.feedback.push(feedback::GOOD_REP);
        outcome.stage = RepStage::Up;
    }
    if outcome.stage == RepStage::Down {
        // y grows downward: hip.y < knee.y means the hips never broke parallel.
        if hip.y < knee.y {
            outcome.feedback.push(feedback::GO_DEEPER);
        }
        if back_angle < thresholds::SQUAT_BACK_MIN {
            outcome.feedback.push(feedback::KEEP_BACK_STRAIGHT);
        }
        if knee.x > ankle.x + thresholds::KNEE_OVER_TOE_TOLERANCE {
            outcome.feedback.push(feedback::KNEES_BEHIND_TOES);
        }
    }

    Ok(outcome)
}
