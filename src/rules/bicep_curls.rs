// ABOUTME: Bicep curl rule set tracked on the left arm
// ABOUTME: Elbow-angle stage machine with an inverted rest stage and drift check
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
];

/// Bicep curl: the convention is inverted relative to the other up/down
/// exercises. `Down` is the *resting* stage (arm hanging extended, elbow
/// past 160°) and the rep completes on the curl, when the elbow closes
/// below 45° out of the rest stage. The elbow-drift check runs every frame.
pub(super) fn process(frame: &LandmarkFrame, stage: RepStage) -> CoachResult<RuleOutcome> {
    let shoulder = frame.require(PoseLandmark::LeftShoulder)?;
    let elbow = frame.require(PoseLandmark::LeftElbow)?;
    let wrist = frame.require(PoseLandmark::LeftWrist)?;

    let elbow_angle = joint_angle(shoulder, elbow, wrist);
    debug!(stage = %stage, elbow_angle, "bicep curl frame");

    let mut outcome = RuleOutcome::quiet(stage);

    if elbow_angle > thresholds::CURL_ELBOW_EXTENDED {
        outcome.stage = RepStage::Down;
    }
    if elbow_angle < thresholds::CURL_ELBOW_CONTRACTED && outcome.stage == RepStage::Down {
        outcome.rep_completed = true;
        outcome.feedback.push(feedback::GOOD_REP);
        outcome.stage = RepStage::Up;
    }
    if (shoulder.y - elbow.y).abs() > thresholds::CURL_ELBOW_DRIFT {
        outcome.feedback.push(feedback::KEEP_ELBOW_STILL);
    }

    Ok(outcome)
}
