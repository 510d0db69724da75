// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

// Every public entry point funnels its numbers through here,
// so the geometry code below can rely on finite, non-negative input.

use squircle_path::Scalar;

/// The largest accepted length or coordinate.
///
/// Larger values, infinities included, are clamped to it.
/// Chosen so that sums of a handful of lengths still fit into `f32`.
pub const MAX_LENGTH: f32 = 1.0e30;

/// Normalizes a width, height, radius or inset.
///
/// NaN and negative values become zero, too large values become [`MAX_LENGTH`].
pub(crate) fn length(value: f32) -> f32 {
    if value >= 0.0 && value <= MAX_LENGTH {
        return value;
    }

    let fixed = if value > MAX_LENGTH { MAX_LENGTH } else { 0.0 };
    log::debug!("Length {} is out of range. Using {} instead.", value, fixed);
    fixed
}

/// Normalizes an origin coordinate.
///
/// NaN becomes zero, too large values are clamped to `±MAX_LENGTH`.
pub(crate) fn coordinate(value: f32) -> f32 {
    if value.is_nan() {
        log::debug!("Coordinate is NaN. Using 0 instead.");
        return 0.0;
    }

    let fixed = value.bound(-MAX_LENGTH, MAX_LENGTH);
    if fixed != value {
        log::debug!("Coordinate {} is out of range. Using {} instead.", value, fixed);
    }

    fixed
}

/// Normalizes a smoothing factor into the 0..=1 range.
///
/// NaN becomes zero.
pub(crate) fn smoothing(value: f32) -> f32 {
    if value.is_nan() {
        log::debug!("Smoothing is NaN. Using 0 instead.");
        return 0.0;
    }

    let fixed = value.bound(0.0, 1.0);
    if fixed != value {
        log::debug!("Smoothing {} is out of range. Using {} instead.", value, fixed);
    }

    fixed
}
