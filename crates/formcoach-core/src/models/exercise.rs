// ABOUTME: Exercise kind enumeration and repetition stage type
// ABOUTME: Parsing, display titles, and calorie rates for the supported exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Fitness

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::calories;
use crate::errors::CoachError;

/// The exercises the engine can track.
///
/// Each kind selects a rule set with its own required landmarks, initial
/// stage, and thresholds. The set is closed: session records only exist for
/// exercises the tracker itself counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    /// Barbell/bodyweight squats, tracked from a side view
    #[default]
    Squats,
    /// Front squats, tracked from a front view via hip/knee height
    FrontSquats,
    /// Pushups, tracked from a side view
    Pushups,
    /// Bicep curls, tracked on the left arm
    BicepCurls,
    /// Jumping jacks, tracked from a front view
    JumpingJacks,
}

impl ExerciseKind {
    /// Every supported exercise, in menu order
    pub const ALL: [Self; 5] = [
        Self::Squats,
        Self::FrontSquats,
        Self::Pushups,
        Self::BicepCurls,
        Self::JumpingJacks,
    ];

    /// Canonical identifier, matching the persisted `exerciseType` values
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Squats => "squats",
            Self::FrontSquats => "front_squats",
            Self::Pushups => "pushups",
            Self::BicepCurls => "bicep_curls",
            Self::JumpingJacks => "jumping_jacks",
        }
    }

    /// Banner title shown while this exercise is being tracked
    #[must_use]
    pub const fn display_title(self) -> &'static str {
        match self {
            Self::Squats => "SQUATS (SIDE VIEW)",
            Self::FrontSquats => "FRONT SQUATS",
            Self::Pushups => "PUSHUPS",
            Self::BicepCurls => "BICEP CURLS",
            Self::JumpingJacks => "JUMPING JACKS",
        }
    }

    /// Estimated calories burned per repetition of this exercise
    #[must_use]
    pub const fn calories_per_rep(self) -> f64 {
        match self {
            Self::Squats | Self::FrontSquats => calories::SQUATS_PER_REP,
            Self::Pushups => calories::PUSHUPS_PER_REP,
            Self::BicepCurls => calories::BICEP_CURLS_PER_REP,
            Self::JumpingJacks => calories::JUMPING_JACKS_PER_REP,
        }
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseKind {
    type Err = CoachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "squats" => Ok(Self::Squats),
            "front_squats" => Ok(Self::FrontSquats),
            "pushups" => Ok(Self::Pushups),
            "bicep_curls" => Ok(Self::BicepCurls),
            "jumping_jacks" => Ok(Self::JumpingJacks),
            other => Err(CoachError::UnknownExercise {
                value: other.to_owned(),
            }),
        }
    }
}

/// Phase of the repetition cycle.
///
/// Reps are detected by a phase *transition* back to the starting phase
/// rather than a single threshold crossing, which prevents double-counting
/// while the body hovers at the boundary. Squats, front squats, and pushups
/// cycle Up→Down→Up; bicep curls rest at Down and complete on the curl Up;
/// jumping jacks cycle In→Out→In.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepStage {
    /// Extended phase of an up/down movement
    Up,
    /// Contracted phase of an up/down movement
    Down,
    /// Closed phase of a jumping jack
    In,
    /// Spread phase of a jumping jack
    Out,
}

impl RepStage {
    /// Identifier used in logs and serialized state
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

impl fmt::Display for RepStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
