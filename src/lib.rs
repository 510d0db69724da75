// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

/*!
`squircle` generates rectangle paths with smooth, continuously curved corners.

A regular rounded rectangle joins a straight edge with a circular arc,
which causes a visible "kink" where the curvature jumps from zero.
A squircle corner blends the edge into a shorter arc using two cubic Bezier curves.
How much of the corner is blended is controlled by a smoothing factor:
0 is a regular rounded rectangle and 1 is the smoothest possible corner.

```
use squircle::{BorderRadii, Squircle};

let path = Squircle::new(100.0, 100.0, BorderRadii::uniform(20.0), 0.6).to_path();
assert!(path.is_closed());
```

The produced [`Path`] contains lines, cubic curves and exact circular arcs.
Use [`Path::cubics`] when a renderer doesn't support arcs.

All coordinates are in a y-down space and the contour always goes clockwise.

Every input is accepted. Invalid numbers are clamped to the nearest valid value,
so path generation never fails.
*/

#![no_std]
#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::float_cmp)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::neg_cmp_op_on_partial_ord)]

cfg_if::cfg_if! {
    if #[cfg(feature = "std")] {
        extern crate std;
    } else if #[cfg(not(feature = "no-std-float"))] {
        compile_error!("You have to activate either the `std` or the `no-std-float` feature.");
    }
}

mod corner;
mod insets;
mod radii;
mod sanitize;
mod squircle;

pub use corner::Corner;
pub use insets::EdgeInsets;
pub use radii::{BorderRadii, CornerRadii};
pub use sanitize::MAX_LENGTH;
pub use squircle::{PushSquircle, Squircle};

pub use squircle_path::*;

/// Smoothing used when none is requested.
///
/// Produces a regular rounded rectangle.
pub const DEFAULT_SMOOTHING: f32 = 0.0;

/// Creates a squircle path in the `0..width`, `0..height` area.
///
/// A shorthand for [`Squircle::new`] followed by [`Squircle::to_path`].
///
/// Never fails. NaN and negative sizes and radii are treated as zero,
/// `smoothing` is clamped into the 0..=1 range.
pub fn squircle_path(radii: BorderRadii, width: f32, height: f32, smoothing: f32) -> Path {
    Squircle::new(width, height, radii, smoothing).to_path()
}

/// Creates a regular rounded rectangle path in the `0..width`, `0..height` area.
///
/// Same as [`squircle_path`] with [`DEFAULT_SMOOTHING`].
pub fn rounded_rect_path(radii: BorderRadii, width: f32, height: f32) -> Path {
    squircle_path(radii, width, height, DEFAULT_SMOOTHING)
}
