// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::radii::{BorderRadii, CornerRadii};
use crate::sanitize;
use crate::squircle::Squircle;

/// Widths of the four edges of a rectangle, like border widths.
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub struct EdgeInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    /// Creates new `EdgeInsets`.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        EdgeInsets {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates `EdgeInsets` with the same width on every edge.
    pub fn uniform(width: f32) -> Self {
        EdgeInsets::new(width, width, width, width)
    }

    /// Returns insets multiplied by `factor`.
    pub fn scaled(&self, factor: f32) -> Self {
        EdgeInsets::new(
            self.left * factor,
            self.top * factor,
            self.right * factor,
            self.bottom * factor,
        )
    }

    fn sanitized(&self) -> Self {
        EdgeInsets::new(
            sanitize::length(self.left),
            sanitize::length(self.top),
            sanitize::length(self.right),
            sanitize::length(self.bottom),
        )
    }
}

impl BorderRadii {
    /// Returns radii of a curve that runs `insets` inside of the current one.
    ///
    /// Horizontal radii shrink by the left or right width, vertical ones by the top or bottom one.
    /// Negative results become zero.
    pub fn inset_by(&self, insets: &EdgeInsets) -> Self {
        let i = insets.sanitized();
        let shrink = |r: CornerRadii, h: f32, v: f32| {
            let r = r.sanitized();
            CornerRadii::new((r.horizontal - h).max(0.0), (r.vertical - v).max(0.0))
        };

        BorderRadii::new(
            shrink(self.top_left, i.left, i.top),
            shrink(self.top_right, i.right, i.top),
            shrink(self.bottom_left, i.left, i.bottom),
            shrink(self.bottom_right, i.right, i.bottom),
        )
    }

    /// Returns radii of a curve that runs `spread` outside of the current one.
    ///
    /// Sharp corner axes stay sharp. A negative `spread` shrinks the radii.
    pub fn outset_by(&self, spread: f32) -> Self {
        let spread = sanitize::coordinate(spread);
        let grow = |r: f32| {
            if r > 0.0 {
                sanitize::length(r + spread)
            } else {
                0.0
            }
        };
        let grow_corner = |r: CornerRadii| {
            let r = r.sanitized();
            CornerRadii::new(grow(r.horizontal), grow(r.vertical))
        };

        BorderRadii::new(
            grow_corner(self.top_left),
            grow_corner(self.top_right),
            grow_corner(self.bottom_left),
            grow_corner(self.bottom_right),
        )
    }
}

impl Squircle {
    /// Returns the area inside of a border.
    ///
    /// Useful as a clip for the content or the background.
    ///
    /// Borders wider than the squircle produce a zero-sized result.
    pub fn inner(&self, widths: &EdgeInsets) -> Squircle {
        let w = widths.sanitized();
        Squircle::new(
            self.width() - w.left - w.right,
            self.height() - w.top - w.bottom,
            self.radii().inset_by(&w),
            self.smoothing(),
        )
        .at(self.x() + w.left, self.y() + w.top)
    }

    /// Returns the line through the middle of a border.
    ///
    /// Stroking this shape with the border width paints the border.
    pub fn border_center(&self, widths: &EdgeInsets) -> Squircle {
        self.inner(&widths.scaled(0.5))
    }

    /// Returns a shape grown by `spread` in every direction.
    ///
    /// Used for shadow spread. A negative `spread` shrinks the shape.
    pub fn outset(&self, spread: f32) -> Squircle {
        let spread = sanitize::coordinate(spread);
        Squircle::new(
            self.width() + spread * 2.0,
            self.height() + spread * 2.0,
            self.radii().outset_by(spread),
            self.smoothing(),
        )
        .at(self.x() - spread, self.y() - spread)
    }

    /// Returns the line through the middle of an outline.
    ///
    /// The outline is drawn `offset` away from the edge and is `width` wide.
    pub fn outline(&self, width: f32, offset: f32) -> Squircle {
        let width = sanitize::length(width);
        let offset = sanitize::coordinate(offset);
        self.outset(width * 0.5 + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_radii() {
        let radii = BorderRadii::new(
            CornerRadii::new(10.0, 12.0),
            CornerRadii::uniform(10.0),
            CornerRadii::ZERO,
            CornerRadii::new(3.0, 20.0),
        );
        let insets = EdgeInsets::new(1.0, 2.0, 4.0, 8.0);
        let inner = radii.inset_by(&insets);
        assert_eq!(inner.top_left, CornerRadii::new(9.0, 10.0));
        assert_eq!(inner.top_right, CornerRadii::new(6.0, 8.0));
        assert_eq!(inner.bottom_left, CornerRadii::ZERO);
        assert_eq!(inner.bottom_right, CornerRadii::new(0.0, 12.0));
    }

    #[test]
    fn outset_radii() {
        let radii = BorderRadii::new(
            CornerRadii::new(10.0, 0.0),
            CornerRadii::uniform(10.0),
            CornerRadii::ZERO,
            CornerRadii::uniform(2.0),
        );
        let outer = radii.outset_by(5.0);
        assert_eq!(outer.top_left, CornerRadii::new(15.0, 0.0));
        assert_eq!(outer.top_right, CornerRadii::uniform(15.0));
        assert_eq!(outer.bottom_left, CornerRadii::ZERO);

        let smaller = radii.outset_by(-5.0);
        assert_eq!(smaller.top_right, CornerRadii::uniform(5.0));
        assert_eq!(smaller.bottom_right, CornerRadii::ZERO);
    }

    #[test]
    fn invalid_insets() {
        let radii = BorderRadii::uniform(10.0);
        let insets = EdgeInsets::new(f32::NAN, -4.0, f32::INFINITY, 2.0);
        let inner = radii.inset_by(&insets);
        assert_eq!(inner.top_left, CornerRadii::uniform(10.0));
        assert_eq!(inner.top_right, CornerRadii::new(0.0, 10.0));
        assert_eq!(inner.bottom_right, CornerRadii::new(0.0, 8.0));
    }

    #[test]
    fn scaled() {
        assert_eq!(
            EdgeInsets::new(2.0, 4.0, 6.0, 8.0).scaled(0.5),
            EdgeInsets::new(1.0, 2.0, 3.0, 4.0)
        );
    }
}
