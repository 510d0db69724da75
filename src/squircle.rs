// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use squircle_path::{Path, PathBuilder, Point, Rect};

use crate::corner::{Corner, CornerGeometry};
use crate::radii::BorderRadii;
use crate::sanitize;

/// A rectangle with smoothed corners.
///
/// All values are sanitized on construction: NaN and negative sizes and radii become zero,
/// infinities are clamped to [`MAX_LENGTH`], smoothing is clamped into the 0..=1 range.
/// Therefore any `Squircle` can be converted into a path.
///
/// [`MAX_LENGTH`]: crate::MAX_LENGTH
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Squircle {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    radii: BorderRadii,
    smoothing: f32,
}

impl Squircle {
    /// Creates a new `Squircle` at the origin.
    ///
    /// `smoothing` of 0 produces a regular rounded rectangle.
    pub fn new(width: f32, height: f32, radii: BorderRadii, smoothing: f32) -> Self {
        Squircle {
            x: 0.0,
            y: 0.0,
            width: sanitize::length(width),
            height: sanitize::length(height),
            radii: radii.sanitized(),
            smoothing: sanitize::smoothing(smoothing),
        }
    }

    /// Creates a new `Squircle` that occupies `rect`.
    pub fn from_rect(rect: Rect, radii: BorderRadii, smoothing: f32) -> Self {
        Squircle::new(rect.width(), rect.height(), radii, smoothing).at(rect.x(), rect.y())
    }

    /// Moves the top-left corner to the specified position.
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = sanitize::coordinate(x);
        self.y = sanitize::coordinate(y);
        self
    }

    /// Returns the X position.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Returns the Y position.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Returns the width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the height.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns the requested corner radii.
    pub fn radii(&self) -> BorderRadii {
        self.radii
    }

    /// Returns the requested smoothing.
    ///
    /// Each corner may use less, see [`effective_smoothing`](Squircle::effective_smoothing).
    pub fn smoothing(&self) -> f32 {
        self.smoothing
    }

    /// Returns the maximum distance from a corner point
    /// that a single corner may occupy along an edge.
    ///
    /// Half of the shorter side.
    pub fn budget(&self) -> f32 {
        self.width.min(self.height) * 0.5
    }

    /// Returns the radius a corner is actually drawn with.
    pub fn effective_radius(&self, corner: Corner) -> f32 {
        self.radii.get(corner).resolve().min(self.budget())
    }

    /// Returns the smoothing a corner is actually drawn with.
    ///
    /// Large corners on short sides have less room for smoothing.
    /// Sharp corners always return 0.
    pub fn effective_smoothing(&self, corner: Corner) -> f32 {
        self.corner_geometry(corner).map(|g| g.smoothing).unwrap_or(0.0)
    }

    /// Returns the distance from a corner point at which the edge starts to curve.
    ///
    /// Sharp corners return 0.
    pub fn corner_extent(&self, corner: Corner) -> f32 {
        self.corner_geometry(corner).map(|g| g.p).unwrap_or(0.0)
    }

    pub(crate) fn corner_geometry(&self, corner: Corner) -> Option<CornerGeometry> {
        CornerGeometry::solve(self.effective_radius(corner), self.budget(), self.smoothing)
    }

    /// Converts the squircle into a closed path.
    ///
    /// The contour starts on the top edge and goes clockwise.
    pub fn to_path(&self) -> Path {
        let mut pb = PathBuilder::with_capacity(18, 34);
        pb.push_squircle(self);
        match pb.finish() {
            Some(path) => path,
            None => {
                // Unreachable with sanitized values, but the result must be drawable anyway.
                log::warn!("Failed to build a squircle path. Using an empty rect instead.");
                PathBuilder::from_rect(Rect::default())
            }
        }
    }
}

/// An extension trait that adds squircles to [`PathBuilder`].
pub trait PushSquircle {
    /// Adds a closed squircle contour.
    ///
    /// The contour starts on the top edge and goes clockwise.
    fn push_squircle(&mut self, squircle: &Squircle);
}

impl PushSquircle for PathBuilder {
    fn push_squircle(&mut self, squircle: &Squircle) {
        let geometries = solve_corners(squircle);

        let first = CornerFrame::new(Corner::CLOCKWISE[0], squircle);
        let start = first.start(geometries[0].map(|g| g.p).unwrap_or(0.0));
        self.move_to(start.x, start.y);

        for (corner, geometry) in Corner::CLOCKWISE.iter().zip(geometries.iter()) {
            let frame = CornerFrame::new(*corner, squircle);
            match geometry {
                Some(g) => {
                    line_to_if_needed(self, frame.start(g.p));
                    frame.push_smooth(self, g);
                }
                None => line_to_if_needed(self, frame.point),
            }
        }

        line_to_if_needed(self, start);
        self.close();
    }
}

fn line_to_if_needed(pb: &mut PathBuilder, p: Point) {
    if pb.last_point() != Some(p) {
        pb.line_to(p.x, p.y);
    }
}

// In clockwise order.
fn solve_corners(squircle: &Squircle) -> [Option<CornerGeometry>; 4] {
    if let Some(radius) = squircle.radii.as_uniform() {
        let radius = radius.min(squircle.budget());
        let g = CornerGeometry::solve(radius, squircle.budget(), squircle.smoothing);
        return [g; 4];
    }

    let mut geometries = [None; 4];
    for (g, corner) in geometries.iter_mut().zip(Corner::CLOCKWISE.iter()) {
        *g = squircle.corner_geometry(*corner);
    }

    geometries
}

/// A corner in its own coordinate system.
///
/// Every corner is drawn the same way: by moving along the incoming edge
/// and then turning towards the outgoing one.
struct CornerFrame {
    point: Point,
    // Unit direction of the edge that ends at the corner.
    incoming: Point,
    // Unit direction of the edge that starts at the corner.
    outgoing: Point,
    // Angle from the arc center to the corner point, in degrees.
    diagonal: f32,
}

impl CornerFrame {
    fn new(corner: Corner, squircle: &Squircle) -> Self {
        let left = squircle.x;
        let top = squircle.y;
        let right = squircle.x + squircle.width;
        let bottom = squircle.y + squircle.height;

        match corner {
            Corner::TopRight => CornerFrame {
                point: Point::from_xy(right, top),
                incoming: Point::from_xy(1.0, 0.0),
                outgoing: Point::from_xy(0.0, 1.0),
                diagonal: -45.0,
            },
            Corner::BottomRight => CornerFrame {
                point: Point::from_xy(right, bottom),
                incoming: Point::from_xy(0.0, 1.0),
                outgoing: Point::from_xy(-1.0, 0.0),
                diagonal: 45.0,
            },
            Corner::BottomLeft => CornerFrame {
                point: Point::from_xy(left, bottom),
                incoming: Point::from_xy(-1.0, 0.0),
                outgoing: Point::from_xy(0.0, -1.0),
                diagonal: 135.0,
            },
            Corner::TopLeft => CornerFrame {
                point: Point::from_xy(left, top),
                incoming: Point::from_xy(0.0, -1.0),
                outgoing: Point::from_xy(1.0, 0.0),
                diagonal: 225.0,
            },
        }
    }

    /// Maps a point from the corner space, where `along` goes in the `incoming` direction
    /// and `across` goes in the `outgoing` one.
    fn map(&self, origin: Point, along: f32, across: f32) -> Point {
        origin + self.incoming.scaled(along) + self.outgoing.scaled(across)
    }

    fn start(&self, p: f32) -> Point {
        self.map(self.point, -p, 0.0)
    }

    fn push_smooth(&self, pb: &mut PathBuilder, g: &CornerGeometry) {
        let start = self.start(g.p);

        let p1 = self.map(start, g.a, 0.0);
        let p2 = self.map(start, g.a + g.b, 0.0);
        let arc_start = self.map(start, g.a + g.b + g.c, g.d);
        pb.cubic_to(p1.x, p1.y, p2.x, p2.y, arc_start.x, arc_start.y);

        let center = self.map(self.point, -g.radius, g.radius);
        pb.arc_to(
            center.x,
            center.y,
            g.radius,
            self.diagonal - g.arc_measure * 0.5,
            g.arc_measure,
        );

        // The second curve mirrors the first one along the outgoing edge.
        let p3 = self.map(self.point, 0.0, g.p - g.a - g.b);
        let p4 = self.map(self.point, 0.0, g.p - g.a);
        let end = self.map(self.point, 0.0, g.p);
        pb.cubic_to(p3.x, p3.y, p4.x, p4.y, end.x, end.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CornerRadii;
    use squircle_path::PathVerb;

    #[test]
    fn sanitized_on_construction() {
        let s = Squircle::new(f32::NAN, -5.0, BorderRadii::uniform(-1.0), 3.0)
            .at(f32::NAN, f32::INFINITY);
        assert_eq!(s.width(), 0.0);
        assert_eq!(s.height(), 0.0);
        assert_eq!(s.smoothing(), 1.0);
        assert_eq!(s.x(), 0.0);
        assert_eq!(s.y(), crate::MAX_LENGTH);
        assert_eq!(s.radii(), BorderRadii::uniform(0.0));
    }

    #[test]
    fn effective_radius() {
        let radii = BorderRadii::new(
            CornerRadii::new(10.0, 4.0),
            CornerRadii::uniform(30.0),
            CornerRadii::ZERO,
            CornerRadii::uniform(f32::INFINITY),
        );
        let s = Squircle::new(40.0, 100.0, radii, 0.5);
        assert_eq!(s.budget(), 20.0);
        assert_eq!(s.effective_radius(Corner::TopLeft), 4.0);
        assert_eq!(s.effective_radius(Corner::TopRight), 20.0);
        assert_eq!(s.effective_radius(Corner::BottomLeft), 0.0);
        assert_eq!(s.effective_radius(Corner::BottomRight), 20.0);

        assert_eq!(s.effective_smoothing(Corner::TopLeft), 0.5);
        assert_eq!(s.effective_smoothing(Corner::TopRight), 0.0);
        assert_eq!(s.effective_smoothing(Corner::BottomLeft), 0.0);
        assert_eq!(s.corner_extent(Corner::TopLeft), 6.0);
        assert_eq!(s.corner_extent(Corner::BottomLeft), 0.0);
    }

    #[test]
    fn uniform_fast_path_matches() {
        let s = Squircle::new(120.0, 80.0, BorderRadii::uniform(25.0), 0.8);
        let fast = solve_corners(&s);
        for (g, corner) in fast.iter().zip(Corner::CLOCKWISE.iter()) {
            assert_eq!(*g, s.corner_geometry(*corner));
        }
    }

    #[test]
    fn arcs_follow_curves() {
        let s = Squircle::new(100.0, 60.0, BorderRadii::uniform(20.0), 0.6).at(5.0, 7.0);
        let path = s.to_path();

        // No connecting lines around arcs.
        for w in path.verbs().windows(3) {
            if w[1] == PathVerb::Arc {
                assert_eq!(w[0], PathVerb::Cubic);
                assert_eq!(w[2], PathVerb::Cubic);
            }
        }
        assert_eq!(path.arcs().len(), 4);
    }

    #[test]
    fn frames_are_rotations() {
        let s = Squircle::new(10.0, 10.0, BorderRadii::default(), 0.0);
        for corner in Corner::CLOCKWISE.iter() {
            let f = CornerFrame::new(*corner, &s);
            // Turning right in a y-down space.
            assert_eq!(f.incoming.cross(f.outgoing), 1.0);
        }
    }
}
