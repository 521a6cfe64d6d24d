// ABOUTME: Jumping jack rule set tracked from a front view
// ABOUTME: In/out stage machine over arm height and ankle spread
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Formcoach

use formcoach_core::constants::{feedback, thresholds};
use formcoach_core::errors::CoachResult;
use formcoach_core::models::{LandmarkFrame, PoseLandmark, RepStage};
use tracing::debug;

use super::RuleOutcome;

pub(super) const REQUIRED_LANDMARKS: &[PoseLandmark] = &[
    PoseLandmark::LeftShoulder,
    PoseLandmark::RightShoulder,
    PoseLandmark::LeftWrist,
    PoseLandmark::RightWrist,
    PoseLandmark::LeftAnkle,
    PoseLandmark::RightAnkle,
];

/// Jumping jack: `Out` when both wrists rise above their shoulders and the
/// ankles spread past 1.5× shoulder width. The rep counts on the return:
/// left wrist back below the shoulder with the ankles inside shoulder width.
pub(super) fn process(frame: &LandmarkFrame, stage: RepStage) -> CoachResult<RuleOutcome> {
    let left_shoulder = frame.require(PoseLandmark::LeftShoulder)?;
    let right_shoulder = frame.require(PoseLandmark::RightShoulder)?;
    let left_wrist = frame.require(PoseLandmark::LeftWrist)?;
    let right_wrist = frame.require(PoseLandmark::RightWrist)?;
    let left_ankle = frame.require(PoseLandmark::LeftAnkle)?;
    let right_ankle = frame.require(PoseLandmark::RightAnkle)?;

    let shoulder_width = (left_shoulder.x - right_shoulder.x).abs();
    let ankle_spread = (left_ankle.x - right_ankle.x).abs();
    let arms_up = left_wrist.y < left_shoulder.y && right_wrist.y < right_shoulder.y;
    let legs_out = ankle_spread > shoulder_width * thresholds::JACK_SPREAD_RATIO;
    debug!(stage = %stage, arms_up, legs_out, ankle_spread, shoulder_width, "jumping jack frame");

    let mut outcome = RuleOutcome::quiet(stage);

    if arms_up && legs_out {
        outcome.stage = RepStage::Out;
    }
    if left_wrist.y > left_shoulder.y
        && ankle_spread < shoulder_width
        && outcome.stage == RepStage::Out
    {
        outcome.rep_completed = true;
        outcome.feedback.push(feedback::GOOD_REP);
        outcome.stage = RepStage::In;
    }

    Ok(outcome)
}
