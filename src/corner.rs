// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use squircle_path::Scalar;

#[cfg(all(not(feature = "std"), feature = "no-std-float"))]
use squircle_path::NoStdFloat;

const SQRT_2: f32 = core::f32::consts::SQRT_2;

/// A rectangle corner.
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Corners in the order a path visits them, starting from the top edge.
    pub const CLOCKWISE: [Corner; 4] = [
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
        Corner::TopLeft,
    ];
}

/// Distances that describe a single smoothed corner.
///
/// All values are measured along the corner's own axes: the edge that leads into the corner
/// and the edge that leaves it. A corner is drawn as a cubic curve that leaves the edge
/// `p` away from the corner point, a circular arc of `arc_measure` degrees,
/// and a mirrored cubic curve that joins the next edge `p` away from the corner point.
///
/// The first curve uses `a` and `a + b` as control offsets along the edge and ends
/// `a + b + c` along and `d` across it. That is where the arc starts.
/// The arc ends `arc_section_length` further in both directions.
#[derive(Copy, Clone, PartialEq, Debug)]
pub(crate) struct CornerGeometry {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub p: f32,
    pub arc_section_length: f32,
    pub arc_measure: f32,
    pub radius: f32,
    pub smoothing: f32,
}

impl CornerGeometry {
    /// Solves a corner.
    ///
    /// `radius` should already be clamped to `budget`, which is half of the shorter side.
    /// `smoothing` must be in the 0..=1 range.
    ///
    /// Returns `None` for a zero radius, which is a sharp corner.
    pub fn solve(radius: f32, budget: f32, smoothing: f32) -> Option<Self> {
        if !(radius > 0.0) {
            return None;
        }

        debug_assert!(smoothing >= 0.0 && smoothing <= 1.0);

        let p = ((1.0 + smoothing) * radius).min(budget);

        // The smoothed part cannot claim more than the budget,
        // so large corners on short sides get less smoothing.
        let max_smoothing = budget / radius - 1.0;
        let effective_smoothing = smoothing.min(max_smoothing).max(0.0);
        if effective_smoothing != smoothing {
            log::trace!(
                "Corner smoothing reduced from {} to {} for radius {}.",
                smoothing,
                effective_smoothing,
                radius
            );
        }

        let arc_measure = 90.0 * (1.0 - effective_smoothing);
        let arc_section_length = (arc_measure.half()).to_radians().sin() * radius * SQRT_2;

        let angle_alpha = (90.0 - arc_measure).half();
        let p3_to_p4_distance = radius * (angle_alpha.half()).to_radians().tan();

        let angle_beta = (45.0 * effective_smoothing).to_radians();
        let c = p3_to_p4_distance * angle_beta.cos();
        let d = c * angle_beta.tan();

        let b = (p - arc_section_length - c - d) / 3.0;
        let a = 2.0 * b;

        debug_assert!(p <= budget);

        Some(CornerGeometry {
            a,
            b,
            c,
            d,
            p,
            arc_section_length,
            arc_measure,
            radius,
            smoothing: effective_smoothing,
        })
    }
}
