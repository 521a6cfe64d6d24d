// ABOUTME: Integration tests for the per-exercise rule sets through the ExerciseRule trait
// ABOUTME: Stage transitions, rep completion, form checks, and error paths per exercise
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Formcoach

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use formcoach::constants::feedback;
use formcoach::errors::CoachError;
use formcoach::models::{ExerciseKind, LandmarkFrame, PoseLandmark, RepStage};
use formcoach::rules::ExerciseRule;
use formcoach::test_utils::{
    curl_contracted, curl_extended, frame_with, front_squat_contracted, front_squat_extended,
    jack_in, jack_out, pushup_contracted, pushup_extended, squat_contracted, squat_extended,
};

// === Initial stages ===

#[test]
fn initial_stages_follow_each_exercise_convention() {
    assert_eq!(ExerciseKind::Squats.initial_stage(), RepStage::Up);
    assert_eq!(ExerciseKind::FrontSquats.initial_stage(), RepStage::Up);
    assert_eq!(ExerciseKind::Pushups.initial_stage(), RepStage::Up);
    // Curls rest extended, which is the Down stage for this exercise
    assert_eq!(ExerciseKind::BicepCurls.initial_stage(), RepStage::Down);
    assert_eq!(ExerciseKind::JumpingJacks.initial_stage(), RepStage::In);
}

// === Squats ===

#[test]
fn squat_cycle_counts_one_rep_with_good_rep_feedback() {
    let down = ExerciseKind::Squats
        .process(&squat_contracted(), RepStage::Up)
        .unwrap();
    assert_eq!(down.stage, RepStage::Down);
    assert!(!down.rep_completed);
    assert!(down.feedback.is_empty(), "clean depth frame should be quiet");

    let up = ExerciseKind::Squats
        .process(&squat_extended(), down.stage)
        .unwrap();
    assert_eq!(up.stage, RepStage::Up);
    assert!(up.rep_completed);
    assert_eq!(up.feedback, vec![feedback::GOOD_REP]);
}

#[test]
fn squat_without_prior_descent_never_completes() {
    let outcome = ExerciseKind::Squats
        .process(&squat_extended(), RepStage::Up)
        .unwrap();
    assert!(!outcome.rep_completed);
    assert_eq!(outcome.stage, RepStage::Up);
}

#[test]
fn shallow_squat_draws_go_deeper_while_contracted() {
    // Knee angle just under the contraction threshold with the hip still
    // above the knee.
    let shallow = frame_with(&[
        (PoseLandmark::LeftShoulder, 0.8, 0.15),
        (PoseLandmark::LeftHip, 0.8, 0.55),
        (PoseLandmark::LeftKnee, 0.5, 0.6),
        (PoseLandmark::LeftAnkle, 0.5, 0.9),
    ]);
    let outcome = ExerciseKind::Squats.process(&shallow, RepStage::Up).unwrap();
    assert_eq!(outcome.stage, RepStage::Down);
    assert_eq!(outcome.feedback, vec![feedback::GO_DEEPER]);
}

#[test]
fn rounded_back_draws_posture_warning_while_contracted() {
    // Torso folded over the knee: back angle ~70 degrees.
    let folded = frame_with(&[
        (PoseLandmark::LeftShoulder, 0.492, 0.225),
        (PoseLandmark::LeftHip, 0.76, 0.45),
        (PoseLandmark::LeftKnee, 0.5, 0.6),
        (PoseLandmark::LeftAnkle, 0.5, 0.9),
    ]);
    let outcome = ExerciseKind::Squats
        .process(&folded, RepStage::Down)
        .unwrap();
    assert!(outcome.feedback.contains(&feedback::KEEP_BACK_STRAIGHT));
}

#[test]
fn knee_past_toes_draws_tracking_warning_while_contracted() {
    let knees_forward = frame_with(&[
        (PoseLandmark::LeftShoulder, 0.82, 0.2),
        (PoseLandmark::LeftHip, 0.82, 0.6),
        (PoseLandmark::LeftKnee, 0.52, 0.6),
        (PoseLandmark::LeftAnkle, 0.45, 0.9),
    ]);
    let outcome = ExerciseKind::Squats
        .process(&knees_forward, RepStage::Down)
        .unwrap();
    assert_eq!(outcome.feedback, vec![feedback::KNEES_BEHIND_TOES]);
    assert_eq!(outcome.stage, RepStage::Down);
}

#[test]
fn squat_form_checks_stay_quiet_while_extended() {
    // Same body, upright: no contracted-only feedback in the Up stage.
    let outcome = ExerciseKind::Squats
        .process(&squat_extended(), RepStage::Up)
        .unwrap();
    assert!(outcome.feedback.is_empty());
}

// === Front squats ===

#[test]
fn front_squat_cycle_counts_one_rep() {
    let down = ExerciseKind::FrontSquats
        .process(&front_squat_contracted(), RepStage::Up)
        .unwrap();
    assert_eq!(down.stage, RepStage::Down);
    assert!(down.feedback.is_empty(), "front squats have no form checks");

    let up = ExerciseKind::FrontSquats
        .process(&front_squat_extended(), down.stage)
        .unwrap();
    assert!(up.rep_completed);
    assert_eq!(up.stage, RepStage::Up);
    assert_eq!(up.feedback, vec![feedback::GOOD_REP]);
}

// === Pushups ===

#[test]
fn pushup_cycle_counts_one_rep_with_clean_form() {
    let down = ExerciseKind::Pushups
        .process(&pushup_contracted(), RepStage::Up)
        .unwrap();
    assert_eq!(down.stage, RepStage::Down);
    assert!(down.feedback.is_empty(), "clean bottom frame should be quiet");

    let up = ExerciseKind::Pushups
        .process(&pushup_extended(), down.stage)
        .unwrap();
    assert!(up.rep_completed);
    assert_eq!(up.feedback, vec![feedback::GOOD_REP]);
}

#[test]
fn pushup_back_check_fires_in_any_stage() {
    // Sagging hips at the top of the movement. The back-posture check is the
    // one form check that runs regardless of stage; pin that behavior.
    let sagging = frame_with(&[
        (PoseLandmark::LeftShoulder, 0.3, 0.6),
        (PoseLandmark::LeftElbow, 0.3, 0.75),
        (PoseLandmark::LeftWrist, 0.3, 0.9),
        (PoseLandmark::LeftHip, 0.6, 0.68),
        (PoseLandmark::LeftKnee, 0.9, 0.6),
    ]);
    let outcome = ExerciseKind::Pushups.process(&sagging, RepStage::Up).unwrap();
    assert_eq!(outcome.stage, RepStage::Up);
    assert_eq!(outcome.feedback, vec![feedback::KEEP_BACK_STRAIGHT]);
}

#[test]
fn high_chest_draws_depth_warning_while_contracted() {
    // Elbow bent but the chest held well above the wrists.
    let high_chest = frame_with(&[
        (PoseLandmark::LeftShoulder, 0.3, 0.6),
        (PoseLandmark::LeftElbow, 0.42, 0.68),
        (PoseLandmark::LeftWrist, 0.3, 0.63),
        (PoseLandmark::LeftHip, 0.6, 0.6),
        (PoseLandmark::LeftKnee, 0.9, 0.6),
    ]);
    let outcome = ExerciseKind::Pushups
        .process(&high_chest, RepStage::Up)
        .unwrap();
    assert_eq!(outcome.stage, RepStage::Down);
    assert_eq!(outcome.feedback, vec![feedback::LOWER_CHEST]);
}

#[test]
fn flared_elbows_draw_tuck_warning_while_contracted() {
    let flared = frame_with(&[
        (PoseLandmark::LeftShoulder, 0.3, 0.6),
        (PoseLandmark::LeftElbow, 0.28, 0.75),
        (PoseLandmark::LeftWrist, 0.2, 0.85),
        (PoseLandmark::LeftHip, 0.6, 0.6),
        (PoseLandmark::LeftKnee, 0.9, 0.6),
    ]);
    let outcome = ExerciseKind::Pushups
        .process(&flared, RepStage::Down)
        .unwrap();
    assert_eq!(outcome.stage, RepStage::Down);
    assert_eq!(outcome.feedback, vec![feedback::TUCK_ELBOWS]);
}

// === Bicep curls ===

#[test]
fn curl_completes_on_the_curl_up_not_the_extension() {
    // The rest stage is Down with the arm extended.
    let resting = ExerciseKind::BicepCurls
        .process(&curl_extended(), RepStage::Down)
        .unwrap();
    assert_eq!(resting.stage, RepStage::Down);
    assert!(!resting.rep_completed);

    // The rep counts on the contraction, inverted relative to squats.
    let curled = ExerciseKind::BicepCurls
        .process(&curl_contracted(), resting.stage)
        .unwrap();
    assert!(curled.rep_completed);
    assert_eq!(curled.stage, RepStage::Up);
    assert_eq!(curled.feedback, vec![feedback::GOOD_REP]);
}

#[test]
fn full_curl_sequence_counts_exactly_once() {
    // 170° → 30° → 170°: one rep, at the transition below 45°.
    let mut stage = ExerciseKind::BicepCurls.initial_stage();
    let mut reps = 0;
    for frame in [curl_extended(), curl_contracted(), curl_extended()] {
        let outcome = ExerciseKind::BicepCurls.process(&frame, stage).unwrap();
        stage = outcome.stage;
        if outcome.rep_completed {
            reps += 1;
        }
    }
    assert_eq!(reps, 1);
    assert_eq!(stage, RepStage::Down, "extension returns the arm to rest");
}

#[test]
fn drifting_elbow_draws_warning_in_any_stage() {
    // Elbow a tenth of the frame below the shoulder.
    let drifting = frame_with(&[
        (PoseLandmark::LeftShoulder, 0.3, 0.4),
        (PoseLandmark::LeftElbow, 0.5, 0.5),
        (PoseLandmark::LeftWrist, 0.7, 0.6),
    ]);
    let outcome = ExerciseKind::BicepCurls
        .process(&drifting, RepStage::Up)
        .unwrap();
    assert!(outcome.feedback.contains(&feedback::KEEP_ELBOW_STILL));
}

// === Jumping jacks ===

#[test]
fn jumping_jack_cycle_counts_one_rep() {
    let out = ExerciseKind::JumpingJacks
        .process(&jack_out(), RepStage::In)
        .unwrap();
    assert_eq!(out.stage, RepStage::Out);
    assert!(!out.rep_completed);

    let back_in = ExerciseKind::JumpingJacks
        .process(&jack_in(), out.stage)
        .unwrap();
    assert!(back_in.rep_completed);
    assert_eq!(back_in.stage, RepStage::In);
    assert_eq!(back_in.feedback, vec![feedback::GOOD_REP]);
}

#[test]
fn jack_needs_both_arms_and_legs_to_reach_out() {
    // Legs spread but arms down: no stage change.
    let legs_only = frame_with(&[
        (PoseLandmark::LeftShoulder, 0.4, 0.4),
        (PoseLandmark::RightShoulder, 0.6, 0.4),
        (PoseLandmark::LeftWrist, 0.38, 0.6),
        (PoseLandmark::RightWrist, 0.62, 0.6),
        (PoseLandmark::LeftAnkle, 0.3, 0.9),
        (PoseLandmark::RightAnkle, 0.7, 0.9),
    ]);
    let outcome = ExerciseKind::JumpingJacks
        .process(&legs_only, RepStage::In)
        .unwrap();
    assert_eq!(outcome.stage, RepStage::In);
    assert!(!outcome.rep_completed);
}

// === Error paths ===

#[test]
fn missing_landmarks_fail_without_panicking() {
    let empty = LandmarkFrame::new(Vec::new());
    for exercise in ExerciseKind::ALL {
        let error = exercise
            .process(&empty, exercise.initial_stage())
            .unwrap_err();
        assert!(
            matches!(error, CoachError::MissingLandmark { .. }),
            "{exercise} returned {error:?}"
        );
    }
}

#[test]
fn required_landmark_lists_match_what_the_rules_read() {
    // A frame carrying exactly the required landmarks must process cleanly.
    for exercise in ExerciseKind::ALL {
        let points: Vec<(PoseLandmark, f64, f64)> = exercise
            .required_landmarks()
            .iter()
            .enumerate()
            .map(|(i, &p)| (p, 0.1 + 0.07 * i as f64, 0.2 + 0.05 * i as f64))
            .collect();
        let frame = frame_with(&points);
        assert!(
            exercise.process(&frame, exercise.initial_stage()).is_ok(),
            "{exercise} read a landmark outside its required list"
        );
    }
}
