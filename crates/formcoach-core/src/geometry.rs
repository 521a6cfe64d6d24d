// ABOUTME: Joint-angle calculation over normalized image coordinates
// ABOUTME: Pure geometry shared by every exercise rule set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Fitness

//! Joint-angle geometry.
//!
//! Landmarks arrive in normalized `[0, 1]` image coordinates with the y axis
//! growing downward. All rule sets measure joints through [`joint_angle`].

use crate::models::Landmark;

/// Unsigned angle at vertex `b` formed by the segments `b→a` and `b→c`,
/// in degrees, always in `[0, 180]`.
///
/// Computed as the absolute difference of the two `atan2` headings. The raw
/// difference can land anywhere in `[0, 360)` because each heading lives in
/// `(-180, 180]`; results past 180 are reflex angles of the same joint and
/// are folded back as `360 - angle`.
///
/// Coincident points (`a == b` or `c == b`) leave one segment without a
/// direction. Under occlusion or a tracking glitch normalized coordinates can
/// genuinely collide, so this is not an error: the function returns `0.0`,
/// meaning "no measurable bend". Callers compare against thresholds and a
/// zero angle never completes a repetition.
#[must_use]
pub fn joint_angle(a: &Landmark, b: &Landmark, c: &Landmark) -> f64 {
    if (a.x == b.x && a.y == b.y) || (c.x == b.x && c.y == b.y) {
        return 0.0;
    }

    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let mut angle = radians.to_degrees().abs();
    if angle > 180.0 {
        angle = 360.0 - angle;
    }
    angle
}
