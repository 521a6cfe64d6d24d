// ABOUTME: Pushup rule set tracked from a side view
// ABOUTME: Elbow-angle stage machine with posture, depth, and elbow-flare checks
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
    PoseLandmark::LeftElbow,
    PoseLandmark::LeftWrist,
    PoseLandmark::LeftHip,
    PoseLandmark::LeftKnee,
];

/// Side-view pushup: contracted when the elbow closes below 90°, rep counted
/// when it reopens past 160°.
///
/// The back-angle check runs on every frame regardless of stage; back
/// posture matters throughout the rep, not just at the bottom. The depth and
/// elbow-flare checks run only while contracted.
pub(super) fn process(frame: &LandmarkFrame, stage: RepStage) -> CoachResult<RuleOutcome> {
    let shoulder = frame.require(PoseLandmark::LeftShoulder)?;
    let elbow = frame.require(PoseLandmark::LeftElbow)?;
    let wrist = frame.require(PoseLandmark::LeftWrist)?;
    let hip = frame.require(PoseLandmark::LeftHip)?;
    let knee = frame.require(PoseLandmark::LeftKnee)?;

    let elbow_angle = joint_angle(shoulder, elbow, wrist);
    let back_angle = joint_angle(shoulder, hip, knee);
    let shoulder_angle = joint_angle(hip, shoulder, elbow);
    debug!(stage = %stage, elbow_angle, back_angle, shoulder_angle, "pushup frame");

    let mut outcome = RuleOutcome::quiet(stage);

    if elbow_angle < thresholds::PUSHUP_ELBOW_CONTRACTED {
        outcome.stage = RepStage::Down;
    }
    if elbow_angle > thresholds::PUSHUP_ELBOW_EXTENDED && outcome.stage == RepStage::Down {
        outcome.rep_completed = true;
        outcome.feedback.push(feedback::GOOD_REP);
        outcome.stage = RepStage::Up;
    }
    if back_angle < thresholds::PUSHUP_BACK_MIN {
        outcome.feedback.push(feedback::KEEP_BACK_STRAIGHT);
    }
    if outcome.stage == RepStage::Down {
        if shoulder.y > wrist.y - thresholds::PUSHUP_CHEST_DEPTH {
            outcome.feedback.push(feedback::LOWER_CHEST);
        }
        if shoulder_angle > thresholds::PUSHUP_ELBOW_FLARE_MAX {
            outcome.feedback.push(feedback::TUCK_ELBOWS);
        }
    }

    Ok(outcome)
}
