// ABOUTME: Front squat rule set tracked from a front view
// ABOUTME: Stage machine over averaged hip and knee heights, no form checks
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Formcoach

use formcoach_core::constants::feedback;
use formcoach_core::errors::CoachResult;
use formcoach_core::models::{LandmarkFrame, PoseLandmark, RepStage};
use tracing::debug;

use super::RuleOutcome;

pub(super) const REQUIRED_LANDMARKS: &[PoseLandmark] = &[
    PoseLandmark::LeftHip,
    PoseLandmark::RightHip,
    PoseLandmark::LeftKnee,
    PoseLandmark::RightKnee,
];

/// Front-view squat: no usable knee angle from the front, so depth is judged
/// by averaged hip height dropping below averaged knee height. No form
/// checks from this view.
pub(super) fn process(frame: &LandmarkFrame, stage: RepStage) -> CoachResult<RuleOutcome> {
    let left_hip = frame.require(PoseLandmark::LeftHip)?;
    let right_hip = frame.require(PoseLandmark::RightHip)?;
    let left_knee = frame.require(PoseLandmark::LeftKnee)?;
    let right_knee = frame.require(PoseLandmark::RightKnee)?;

    let hip_y = (left_hip.y + right_hip.y) / 2.0;
    let knee_y = (left_knee.y + right_knee.y) / 2.0;
    debug!(stage = %stage, hip_y, knee_y, "front squat frame");

    let mut outcome = RuleOutcome::quiet(stage);

    // Hips numerically below the knees means the squat is at depth.
    if hip_y > knee_y {
        outcome.stage = RepStage::Down;
    }
    if hip_y < knee_y && outcome.stage == RepStage::Down {
        outcome.rep_completed = true;
        outcome.feedback.push(feedback::GOOD_REP);
        outcome.stage = RepStage::Up;
    }

    Ok(outcome)
}
