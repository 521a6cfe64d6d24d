// ABOUTME: Body landmark types produced by an external pose-estimation source
// ABOUTME: Normalized coordinates with detection confidence, indexed per frame
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Fitness

use serde::{Deserialize, Serialize};

use crate::errors::{CoachError, CoachResult};

/// A single body landmark in normalized image coordinates.
///
/// `x` and `y` are in `[0, 1]` with the origin at the top-left of the image,
/// so *smaller* `y` is *higher* on screen. `visibility` is the pose source's
/// detection confidence in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position, normalized to image width
    pub x: f64,
    /// Vertical position, normalized to image height (grows downward)
    pub y: f64,
    /// Detection confidence in `[0, 1]`
    pub visibility: f64,
}

impl Landmark {
    /// Create a landmark from raw pose-source values
    #[must_use]
    pub const fn new(x: f64, y: f64, visibility: f64) -> Self {
        Self { x, y, visibility }
    }

    /// Whether the landmark's confidence is strictly above `threshold`
    #[must_use]
    pub fn is_visible(&self, threshold: f64) -> bool {
        self.visibility > threshold
    }
}

/// Named indices into a pose frame.
///
/// The numbering is owned by the external pose-estimation library
/// (MediaPipe's 33-point body schema) and is consumed here as opaque
/// indices. Only the points the rule sets actually read are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoseLandmark {
    /// Left shoulder (index 11)
    LeftShoulder,
    /// Right shoulder (index 12)
    RightShoulder,
    /// Left elbow (index 13)
    LeftElbow,
    /// Right elbow (index 14)
    RightElbow,
    /// Left wrist (index 15)
    LeftWrist,
    /// Right wrist (index 16)
    RightWrist,
    /// Left hip (index 23)
    LeftHip,
    /// Right hip (index 24)
    RightHip,
    /// Left knee (index 25)
    LeftKnee,
    /// Right knee (index 26)
    RightKnee,
    /// Left ankle (index 27)
    LeftAnkle,
    /// Right ankle (index 28)
    RightAnkle,
}

impl PoseLandmark {
    /// Position of this landmark in the pose source's frame layout
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::LeftShoulder => 11,
            Self::RightShoulder => 12,
            Self::LeftElbow => 13,
            Self::RightElbow => 14,
            Self::LeftWrist => 15,
            Self::RightWrist => 16,
            Self::LeftHip => 23,
            Self::RightHip => 24,
            Self::LeftKnee => 25,
            Self::RightKnee => 26,
            Self::LeftAnkle => 27,
            Self::RightAnkle => 28,
        }
    }

    /// Human-readable landmark name for logs and errors
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
        }
    }
}

impl std::fmt::Display for PoseLandmark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One camera frame's worth of landmarks, ordered by pose-source index.
///
/// Frames are transient: they are processed to completion and dropped,
/// never persisted. A frame may be shorter than the full pose schema when
/// the source truncates low-confidence tails; accessors treat out-of-range
/// indices as absent landmarks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LandmarkFrame {
    landmarks: Vec<Landmark>,
}

impl LandmarkFrame {
    /// Wrap an ordered landmark sequence from the pose source
    #[must_use]
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    /// Look up a landmark, `None` when the frame does not carry it
    #[must_use]
    pub fn get(&self, point: PoseLandmark) -> Option<&Landmark> {
        self.landmarks.get(point.index())
    }

    /// Look up a landmark that a rule set requires to proceed
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::MissingLandmark`] when the frame does not carry
    /// the point. The dispatcher treats this as a skipped frame, not a crash.
    pub fn require(&self, point: PoseLandmark) -> CoachResult<&Landmark> {
        self.get(point)
            .ok_or(CoachError::MissingLandmark {
                landmark: point.name(),
            })
    }

    /// The raw landmark sequence, in pose-source order
    #[must_use]
    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// Number of landmarks in the frame
    #[must_use]
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// Whether the frame carries no landmarks at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }
}
