// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use arrayvec::ArrayVec;

use crate::{Point, Rect, Transform};

#[cfg(all(not(feature = "std"), feature = "no-std-float"))]
use crate::NoStdFloat;

/// A circular arc.
///
/// Angles are in degrees and are measured from the positive X axis towards the positive
/// Y axis, which is clockwise in a y-down coordinate system.
/// A positive `sweep_angle` goes clockwise as well.
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Arc {
    pub center: Point,
    pub radius: f32,
    pub start_angle: f32,
    pub sweep_angle: f32,
}

impl Arc {
    /// Creates a new `Arc`.
    ///
    /// The sweep is limited to a full turn in either direction.
    pub fn new(center: Point, radius: f32, start_angle: f32, sweep_angle: f32) -> Self {
        Arc {
            center,
            radius,
            start_angle,
            sweep_angle: sweep_angle.max(-360.0).min(360.0),
        }
    }

    /// Returns the angle at which the arc ends.
    pub fn end_angle(&self) -> f32 {
        self.start_angle + self.sweep_angle
    }

    /// Returns a point on the arc's circle at the specified angle.
    pub fn point_at(&self, angle: f32) -> Point {
        let a = angle.to_radians();
        Point::from_xy(
            self.center.x + self.radius * a.cos(),
            self.center.y + self.radius * a.sin(),
        )
    }

    /// Returns the first point of the arc.
    pub fn start_point(&self) -> Point {
        self.point_at(self.start_angle)
    }

    /// Returns the last point of the arc.
    pub fn end_point(&self) -> Point {
        self.point_at(self.end_angle())
    }

    /// Checks that the arc goes clockwise on screen.
    pub fn is_clockwise(&self) -> bool {
        self.sweep_angle >= 0.0
    }

    /// Returns the tight bounds of the arc.
    ///
    /// Includes both end points and every axis extreme the arc passes through.
    pub fn bounds(&self) -> Option<Rect> {
        let mut points: ArrayVec<Point, 6> = ArrayVec::new();
        points.push(self.start_point());
        points.push(self.end_point());

        let (lo, hi) = if self.sweep_angle >= 0.0 {
            (self.start_angle, self.end_angle())
        } else {
            (self.end_angle(), self.start_angle)
        };

        // A full turn crosses at most four quadrant boundaries.
        let mut angle = (lo / 90.0).floor() * 90.0 + 90.0;
        while angle < hi && !points.is_full() {
            points.push(self.point_at(angle));
            angle += 90.0;
        }

        Rect::from_points(&points)
    }

    /// Converts the arc into cubic Bezier curves.
    ///
    /// Each curve covers at most 90 degrees. Every item contains the two control points
    /// followed by the end point. The start point of the first curve is `start_point()`.
    ///
    /// Returns no curves for a zero sweep.
    pub fn to_cubics(&self) -> ArrayVec<[Point; 3], 4> {
        let mut cubics = ArrayVec::new();
        if self.sweep_angle == 0.0 || !self.sweep_angle.is_finite() {
            return cubics;
        }

        let count = ((self.sweep_angle.abs() / 90.0).ceil() as usize).max(1).min(4);
        let step = self.sweep_angle / count as f32;
        // https://pomax.github.io/bezierinfo/#circles_cubic
        let k = 4.0 / 3.0 * (step.to_radians() / 4.0).tan() * self.radius;

        let mut angle = self.start_angle;
        let mut p0 = self.start_point();
        for i in 0..count {
            let next_angle = if i + 1 == count {
                self.end_angle()
            } else {
                angle + step
            };

            let p3 = self.point_at(next_angle);
            let t0 = unit_tangent(angle);
            let t1 = unit_tangent(next_angle);
            let p1 = p0 + t0.scaled(k);
            let p2 = p3 - t1.scaled(k);
            cubics.push([p1, p2, p3]);

            angle = next_angle;
            p0 = p3;
        }

        cubics
    }

    /// Returns a transformed arc.
    ///
    /// Only transforms that map circles to circles are supported.
    /// See [`Transform::similarity`].
    pub fn transform(&self, ts: Transform) -> Option<Self> {
        let (scale, mirrored) = ts.similarity()?;

        let center = ts.map_point(self.center);
        let start = ts.map_point(self.start_point());
        let start_angle = (start.y - center.y).atan2(start.x - center.x).to_degrees();
        let sweep_angle = if mirrored {
            -self.sweep_angle
        } else {
            self.sweep_angle
        };

        let arc = Arc::new(center, self.radius * scale, start_angle, sweep_angle);
        if arc.center.is_finite() && arc.radius.is_finite() && arc.start_angle.is_finite() {
            Some(arc)
        } else {
            None
        }
    }
}

fn unit_tangent(angle: f32) -> Point {
    let a = angle.to_radians();
    Point::from_xy(-a.sin(), a.cos())
}
