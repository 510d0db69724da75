// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::corner::Corner;
use crate::sanitize;

/// A requested radius of a single corner.
///
/// CSS allows elliptical corners, so a radius has a horizontal and a vertical part.
/// Elliptical corners are not supported by the path generator:
/// the smaller of the two parts is used.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub struct CornerRadii {
    /// Radius along the horizontal edge.
    pub horizontal: f32,
    /// Radius along the vertical edge.
    pub vertical: f32,
}

impl CornerRadii {
    /// A sharp corner.
    pub const ZERO: Self = CornerRadii {
        horizontal: 0.0,
        vertical: 0.0,
    };

    /// Creates new `CornerRadii`.
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        CornerRadii {
            horizontal,
            vertical,
        }
    }

    /// Creates a circular corner radius.
    pub fn uniform(radius: f32) -> Self {
        CornerRadii::new(radius, radius)
    }

    /// Checks that the corner is sharp.
    pub fn is_zero(&self) -> bool {
        self.resolve() == 0.0
    }

    /// Reduces an elliptical radius to a single one.
    ///
    /// The result is finite and non-negative, but not yet limited by the rectangle size.
    pub fn resolve(&self) -> f32 {
        sanitize::length(self.horizontal).min(sanitize::length(self.vertical))
    }

    pub(crate) fn sanitized(&self) -> Self {
        CornerRadii::new(
            sanitize::length(self.horizontal),
            sanitize::length(self.vertical),
        )
    }
}

impl From<f32> for CornerRadii {
    fn from(radius: f32) -> Self {
        CornerRadii::uniform(radius)
    }
}

/// Radii of all four corners of a rectangle.
///
/// Values are in the same units as the rectangle size.
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub struct BorderRadii {
    pub top_left: CornerRadii,
    pub top_right: CornerRadii,
    pub bottom_left: CornerRadii,
    pub bottom_right: CornerRadii,
}

impl BorderRadii {
    /// Creates new `BorderRadii`.
    ///
    /// Note that the bottom corners are passed left to right,
    /// unlike the clockwise order used by CSS.
    pub fn new(
        top_left: CornerRadii,
        top_right: CornerRadii,
        bottom_left: CornerRadii,
        bottom_right: CornerRadii,
    ) -> Self {
        BorderRadii {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// Creates `BorderRadii` with the same circular radius on every corner.
    pub fn uniform(radius: f32) -> Self {
        let r = CornerRadii::uniform(radius);
        BorderRadii::new(r, r, r, r)
    }

    /// Returns the radius of the specified corner.
    pub fn get(&self, corner: Corner) -> CornerRadii {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
        }
    }

    /// Returns a mutable reference to the radius of the specified corner.
    pub fn get_mut(&mut self, corner: Corner) -> &mut CornerRadii {
        match corner {
            Corner::TopLeft => &mut self.top_left,
            Corner::TopRight => &mut self.top_right,
            Corner::BottomRight => &mut self.bottom_right,
            Corner::BottomLeft => &mut self.bottom_left,
        }
    }

    /// Returns the common radius when all four corners resolve to the same value.
    pub fn as_uniform(&self) -> Option<f32> {
        let r = self.top_left.resolve();
        let same = Corner::CLOCKWISE.iter().all(|c| self.get(*c).resolve() == r);
        if same {
            Some(r)
        } else {
            None
        }
    }

    /// Checks that all corners are sharp.
    pub fn is_zero(&self) -> bool {
        self.as_uniform() == Some(0.0)
    }

    pub(crate) fn sanitized(&self) -> Self {
        BorderRadii::new(
            self.top_left.sanitized(),
            self.top_right.sanitized(),
            self.bottom_left.sanitized(),
            self.bottom_right.sanitized(),
        )
    }
}

impl From<f32> for BorderRadii {
    fn from(radius: f32) -> Self {
        BorderRadii::uniform(radius)
    }
}

impl From<CornerRadii> for BorderRadii {
    fn from(radii: CornerRadii) -> Self {
        BorderRadii::new(radii, radii, radii, radii)
    }
}
