// Copyright 2006 The Android Open Source Project
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use alloc::string::String;
use alloc::vec::Vec;

use crate::path_builder::PathBuilder;
use crate::transform::Transform;
use crate::{Arc, Point, Rect};

/// A path verb.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum PathVerb {
    Move,
    Line,
    Cubic,
    Arc,
    Close,
}

/// A Bezier and circular arc path.
///
/// Can be created via [`PathBuilder`].
/// Where [`PathBuilder`] can be created from the [`Path`] using [`clear`] to reuse the allocation.
///
/// Path is immutable and uses compact storage, where segment types, points and arcs are stored
/// separately. Use can access path segments via [`Path::verbs`] and [`Path::points`],
/// or via [`Path::segments`]
///
/// Each arc also stores its end point in the points list, so [`Path::points`] always
/// contains every on-curve point of the path.
///
/// # Guarantees
///
/// - Has a valid, precomputed bounds, arcs included.
/// - All points are finite.
/// - Has at least two segments.
/// - Each contour starts with a MoveTo.
/// - No duplicated Move.
/// - No duplicated Close.
/// - Zero-length contours are allowed.
///
/// [`PathBuilder`]: struct.PathBuilder.html
/// [`clear`]: struct.Path.html#method.clear
#[derive(Clone, PartialEq)]
pub struct Path {
    pub(crate) verbs: Vec<PathVerb>,
    pub(crate) points: Vec<Point>,
    pub(crate) arcs: Vec<Arc>,
    pub(crate) bounds: Rect,
}

impl Path {
    /// Returns the number of segments in the path.
    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    /// Checks if path is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the bounds of the path.
    ///
    /// The value is already calculated.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns an internal vector of verbs.
    pub fn verbs(&self) -> &[PathVerb] {
        &self.verbs
    }

    /// Returns an internal vector of points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns points as a flat list of `x, y` pairs.
    pub fn points_as_f32(&self) -> &[f32] {
        bytemuck::cast_slice(&self.points)
    }

    /// Returns an internal vector of arcs.
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    /// Returns the last point of the path.
    pub fn last_point(&self) -> Option<Point> {
        self.points.last().cloned()
    }

    /// Checks that the last contour is closed.
    pub fn is_closed(&self) -> bool {
        self.verbs.last() == Some(&PathVerb::Close)
    }

    /// Returns a transformed path.
    ///
    /// Arcs stay arcs when the transform maps circles to circles.
    /// Otherwise they are converted into cubic curves first.
    ///
    /// Some points may become NaN/inf therefore this method can fail.
    pub fn transform(mut self, ts: Transform) -> Option<Self> {
        if ts.is_identity() {
            return Some(self);
        }

        if !self.arcs.is_empty() && ts.similarity().is_none() {
            self = self.cubics()?;
        }

        ts.map_points(&mut self.points);
        for arc in &mut self.arcs {
            *arc = arc.transform(ts)?;
        }

        self.bounds = compute_bounds(&self.points, &self.arcs)?;

        Some(self)
    }

    /// Returns a path moved by the specified offset.
    pub fn offset(self, dx: f32, dy: f32) -> Option<Self> {
        self.transform(Transform::from_translate(dx, dy))
    }

    /// Returns a copy of the path with all arcs converted into cubic curves.
    ///
    /// Useful for renderers without arc support.
    pub fn cubics(&self) -> Option<Self> {
        let mut pb = PathBuilder::with_capacity(self.verbs.len() + self.arcs.len() * 3, self.points.len() * 3);
        for segment in self.segments() {
            match segment {
                PathSegment::MoveTo(p) => pb.move_to(p.x, p.y),
                PathSegment::LineTo(p) => pb.line_to(p.x, p.y),
                PathSegment::CubicTo(p1, p2, p) => pb.cubic_to(p1.x, p1.y, p2.x, p2.y, p.x, p.y),
                PathSegment::ArcTo(arc) => {
                    for [p1, p2, p] in arc.to_cubics() {
                        pb.cubic_to(p1.x, p1.y, p2.x, p2.y, p.x, p.y);
                    }
                }
                PathSegment::Close => pb.close(),
            }
        }

        pb.finish()
    }

    /// Returns an iterator over path's segments.
    pub fn segments(&self) -> PathSegmentsIter {
        PathSegmentsIter {
            path: self,
            verb_index: 0,
            points_index: 0,
            arcs_index: 0,
        }
    }

    /// Returns the path as SVG path data, like `M 10 20 L 30 40 Z`.
    pub fn to_svg_data(&self) -> String {
        let mut s = String::new();
        // Writing into a String never fails.
        let _ = write_svg_data(self, &mut s);
        s
    }

    /// Clears the path and returns a `PathBuilder` that will reuse an allocated memory.
    pub fn clear(mut self) -> PathBuilder {
        self.verbs.clear();
        self.points.clear();
        self.arcs.clear();

        PathBuilder {
            verbs: self.verbs,
            points: self.points,
            arcs: self.arcs,
            last_move_to_index: 0,
            move_to_required: true,
        }
    }
}

pub(crate) fn compute_bounds(points: &[Point], arcs: &[Arc]) -> Option<Rect> {
    let mut bounds = Rect::from_points(points)?;
    for arc in arcs {
        bounds = bounds.union(&arc.bounds()?)?;
    }

    Some(bounds)
}

fn write_svg_data(path: &Path, s: &mut String) -> core::fmt::Result {
    use core::fmt::Write;

    for segment in path.segments() {
        match segment {
            PathSegment::MoveTo(p) => s.write_fmt(format_args!("M {} {} ", p.x, p.y))?,
            PathSegment::LineTo(p) => s.write_fmt(format_args!("L {} {} ", p.x, p.y))?,
            PathSegment::CubicTo(p0, p1, p2) => s.write_fmt(format_args!(
                "C {} {} {} {} {} {} ",
                p0.x, p0.y, p1.x, p1.y, p2.x, p2.y
            ))?,
            PathSegment::ArcTo(arc) => {
                // SVG cannot draw a full circle with a single arc command.
                let halves = if arc.sweep_angle.abs() >= 360.0 { 2 } else { 1 };
                let step = arc.sweep_angle / halves as f32;
                let sweep_flag = if arc.is_clockwise() { 1 } else { 0 };
                let large_arc = if step.abs() > 180.0 { 1 } else { 0 };
                for i in 1..=halves {
                    let p = arc.point_at(arc.start_angle + step * i as f32);
                    s.write_fmt(format_args!(
                        "A {} {} 0 {} {} {} {} ",
                        arc.radius, arc.radius, large_arc, sweep_flag, p.x, p.y
                    ))?;
                }
            }
            PathSegment::Close => s.write_fmt(format_args!("Z "))?,
        }
    }

    s.pop(); // ' '
    Ok(())
}

impl core::fmt::Debug for Path {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Path")
            .field("segments", &self.to_svg_data())
            .field("bounds", &self.bounds)
            .finish()
    }
}

/// A path segment.
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
    ArcTo(Arc),
    Close,
}

/// A path segments iterator.
#[allow(missing_debug_implementations)]
#[derive(Clone)]
pub struct PathSegmentsIter<'a> {
    path: &'a Path,
    verb_index: usize,
    points_index: usize,
    arcs_index: usize,
}

impl<'a> Iterator for PathSegmentsIter<'a> {
    type Item = PathSegment;

    fn next(&mut self) -> Option<Self::Item> {
        let verb = *self.path.verbs.get(self.verb_index)?;
        self.verb_index += 1;

        match verb {
            PathVerb::Move => {
                self.points_index += 1;
                Some(PathSegment::MoveTo(self.path.points[self.points_index - 1]))
            }
            PathVerb::Line => {
                self.points_index += 1;
                Some(PathSegment::LineTo(self.path.points[self.points_index - 1]))
            }
            PathVerb::Cubic => {
                self.points_index += 3;
                Some(PathSegment::CubicTo(
                    self.path.points[self.points_index - 3],
                    self.path.points[self.points_index - 2],
                    self.path.points[self.points_index - 1],
                ))
            }
            PathVerb::Arc => {
                self.points_index += 1;
                self.arcs_index += 1;
                Some(PathSegment::ArcTo(self.path.arcs[self.arcs_index - 1]))
            }
            PathVerb::Close => Some(PathSegment::Close),
        }
    }
}
