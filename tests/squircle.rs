use squircle::*;

fn assert_near(a: Point, b: Point) {
    assert!(a.equals_within_tolerance(b, 0.001), "{:?} != {:?}", a, b);
}

fn assert_rect_near(a: Rect, b: Rect) {
    assert!((a.left() - b.left()).abs() < 0.001, "{:?} != {:?}", a, b);
    assert!((a.top() - b.top()).abs() < 0.001, "{:?} != {:?}", a, b);
    assert!((a.right() - b.right()).abs() < 0.001, "{:?} != {:?}", a, b);
    assert!((a.bottom() - b.bottom()).abs() < 0.001, "{:?} != {:?}", a, b);
}

fn assert_closed(path: &Path) {
    assert!(path.is_closed());
    assert_eq!(path.verbs()[0], PathVerb::Move);
    assert_eq!(path.points().first(), path.points().last());
}

#[test]
fn figma_like_corner() {
    let path = squircle_path(BorderRadii::uniform(20.0), 100.0, 100.0, 0.6);
    assert_closed(&path);

    assert_eq!(path.points()[0], Point::from_xy(68.0, 0.0));
    assert_eq!(path.arcs().len(), 4);
    for arc in path.arcs() {
        assert!((arc.radius - 20.0).abs() < 0.001);
        assert!((arc.sweep_angle - 36.0).abs() < 0.001);
    }

    let arc = path.arcs()[0];
    assert_near(arc.center, Point::from_xy(80.0, 20.0));
    assert!((arc.start_angle - -63.0).abs() < 0.001);

    // Each edge is entered and left exactly `p` away from the corner.
    assert!(path.points().contains(&Point::from_xy(100.0, 32.0)));
    assert!(path.points().contains(&Point::from_xy(100.0, 68.0)));
    assert!(path.points().contains(&Point::from_xy(32.0, 100.0)));
    assert!(path.points().contains(&Point::from_xy(0.0, 32.0)));

    assert_rect_near(path.bounds(), Rect::from_ltrb(0.0, 0.0, 100.0, 100.0).unwrap());
}

#[test]
fn verbs_order() {
    let path = squircle_path(BorderRadii::uniform(20.0), 100.0, 100.0, 0.6);
    let corner = [PathVerb::Cubic, PathVerb::Arc, PathVerb::Cubic];
    let mut expected = vec![PathVerb::Move];
    for i in 0..4 {
        if i != 0 {
            expected.push(PathVerb::Line);
        }
        expected.extend_from_slice(&corner);
    }
    expected.push(PathVerb::Line);
    expected.push(PathVerb::Close);

    assert_eq!(path.verbs(), expected.as_slice());
}

#[test]
fn radius_limited_by_short_side() {
    let squircle = Squircle::new(40.0, 100.0, BorderRadii::uniform(30.0), 1.0);
    for corner in Corner::CLOCKWISE.iter() {
        assert_eq!(squircle.effective_radius(*corner), 20.0);
        assert_eq!(squircle.effective_smoothing(*corner), 0.0);
        assert_eq!(squircle.corner_extent(*corner), 20.0);
    }

    let path = squircle.to_path();
    assert_closed(&path);
    for arc in path.arcs() {
        assert!((arc.sweep_angle - 90.0).abs() < 0.001);
    }

    // Top and bottom edges are fully consumed by the corners.
    assert_eq!(path.verbs(), &[
        PathVerb::Move,
        PathVerb::Cubic, PathVerb::Arc, PathVerb::Cubic,
        PathVerb::Line,
        PathVerb::Cubic, PathVerb::Arc, PathVerb::Cubic,
        PathVerb::Cubic, PathVerb::Arc, PathVerb::Cubic,
        PathVerb::Line,
        PathVerb::Cubic, PathVerb::Arc, PathVerb::Cubic,
        PathVerb::Close,
    ]);
}

#[test]
fn sharp_rect() {
    let path = squircle_path(BorderRadii::default(), 100.0, 50.0, 0.5);
    assert_closed(&path);
    assert_eq!(path.to_svg_data(), "M 100 0 L 100 50 L 0 50 L 0 0 L 100 0 Z");
}

#[test]
fn sharp_corners_pass_through_corner_points() {
    let radii = BorderRadii::new(
        CornerRadii::ZERO,
        CornerRadii::uniform(10.0),
        CornerRadii::uniform(10.0),
        CornerRadii::new(10.0, 0.0),
    );
    let path = squircle_path(radii, 100.0, 60.0, 0.6);
    assert_closed(&path);

    let segments: Vec<_> = path.segments().collect();
    assert!(segments.contains(&PathSegment::LineTo(Point::from_xy(0.0, 0.0))));
    assert!(segments.contains(&PathSegment::LineTo(Point::from_xy(100.0, 60.0))));
    assert_eq!(path.arcs().len(), 2);
}

#[test]
fn zero_smoothing_is_rounded_rect() {
    let path = rounded_rect_path(BorderRadii::uniform(10.0), 100.0, 60.0);
    assert_eq!(path, squircle_path(BorderRadii::uniform(10.0), 100.0, 60.0, 0.0));
    assert_closed(&path);

    let mut prev = path.points()[0];
    for segment in path.segments() {
        match segment {
            PathSegment::CubicTo(p1, p2, p) => {
                // Degenerate curves.
                assert_near(p1, prev);
                assert_near(p2, prev);
                assert_near(p, prev);
                prev = p;
            }
            PathSegment::ArcTo(arc) => {
                assert!((arc.sweep_angle - 90.0).abs() < 0.001);
                assert_eq!(arc.radius, 10.0);
                assert_near(arc.start_point(), prev);
                prev = arc.end_point();
            }
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => prev = p,
            PathSegment::Close => {}
        }
    }

    let arc = path.arcs()[1];
    assert_near(arc.center, Point::from_xy(90.0, 50.0));
    assert_near(arc.start_point(), Point::from_xy(100.0, 50.0));
    assert_near(arc.end_point(), Point::from_xy(90.0, 60.0));
}

#[test]
fn curves_are_continuous() {
    let radii = BorderRadii::new(
        CornerRadii::uniform(5.0),
        CornerRadii::uniform(25.0),
        CornerRadii::uniform(15.0),
        CornerRadii::new(40.0, 30.0),
    );
    let path = squircle_path(radii, 120.0, 80.0, 0.8);

    let mut prev = None;
    for segment in path.segments() {
        match segment {
            PathSegment::ArcTo(arc) => {
                assert_near(arc.start_point(), prev.unwrap());
                prev = Some(arc.end_point());
            }
            PathSegment::CubicTo(_, _, p) | PathSegment::MoveTo(p) | PathSegment::LineTo(p) => {
                prev = Some(p)
            }
            PathSegment::Close => {}
        }
    }
}

#[test]
fn budget_is_never_exceeded() {
    let radii = [0.0, 1.0, 10.0, 24.0, 25.0, 26.0, 100.0];
    let smoothings = [0.0, 0.3, 0.6, 1.0];
    for &r in radii.iter() {
        for &s in smoothings.iter() {
            let squircle = Squircle::new(80.0, 50.0, BorderRadii::uniform(r), s);
            for corner in Corner::CLOCKWISE.iter() {
                assert!(squircle.corner_extent(*corner) <= squircle.budget());
            }

            let bounds = squircle.to_path().bounds();
            assert!(bounds.left() >= -0.001 && bounds.top() >= -0.001);
            assert!(bounds.right() <= 80.001 && bounds.bottom() <= 50.001);
        }
    }
}

#[test]
fn smoothing_is_monotonic() {
    let sweep = |s: f32| squircle_path(BorderRadii::uniform(20.0), 200.0, 200.0, s).arcs()[0].sweep_angle;
    let mut prev = sweep(0.0);
    for i in 1..=10 {
        let next = sweep(i as f32 / 10.0);
        assert!(next < prev);
        prev = next;
    }

    // Clamped at 24 / 20 - 1 = 0.2
    let sweep = |s: f32| squircle_path(BorderRadii::uniform(20.0), 48.0, 100.0, s).arcs()[0].sweep_angle;
    let limit = sweep(0.2);
    assert!(sweep(0.1) > limit);
    assert!((sweep(0.5) - limit).abs() < 0.001);
    assert!((sweep(1.0) - limit).abs() < 0.001);
}

#[test]
fn square_is_symmetric() {
    let path = squircle_path(BorderRadii::uniform(30.0), 100.0, 100.0, 0.7);
    let rotated = path.clone().transform(Transform::from_rotate_at(90.0, 50.0, 50.0)).unwrap();

    // The rotated contour starts at another corner, but covers the same points.
    for p in rotated.points() {
        assert!(
            path.points().iter().any(|o| o.equals_within_tolerance(*p, 0.001)),
            "{:?} is not on the original path", p
        );
    }

    for arc in rotated.arcs() {
        assert!(path.arcs().iter().any(|o| {
            o.center.equals_within_tolerance(arc.center, 0.001)
                && (o.sweep_angle - arc.sweep_angle).abs() < 0.001
        }));
    }
}

#[test]
fn uniform_and_per_corner_paths_match() {
    // Different requests that resolve to the same radius on every corner.
    let radii = BorderRadii::new(
        CornerRadii::uniform(20.0),
        CornerRadii::uniform(25.0),
        CornerRadii::uniform(30.0),
        CornerRadii::uniform(100.0),
    );
    assert_eq!(radii.as_uniform(), None);

    let per_corner = squircle_path(radii, 40.0, 100.0, 0.5);
    let uniform = squircle_path(BorderRadii::uniform(20.0), 40.0, 100.0, 0.5);
    assert_eq!(per_corner, uniform);
}

#[test]
fn empty_size() {
    let path = squircle_path(BorderRadii::uniform(10.0), 0.0, 0.0, 0.6);
    assert_eq!(path.verbs(), &[PathVerb::Move, PathVerb::Close]);
    assert_eq!(path.to_svg_data(), "M 0 0 Z");
}

#[test]
fn zero_width() {
    let path = squircle_path(BorderRadii::uniform(10.0), 0.0, 50.0, 0.6);
    assert_closed(&path);
    assert_eq!(path.to_svg_data(), "M 0 0 L 0 50 L 0 0 Z");
}

#[test]
fn invalid_input() {
    let path = squircle_path(BorderRadii::uniform(f32::NAN), f32::NAN, -10.0, f32::NAN);
    assert_eq!(path.to_svg_data(), "M 0 0 Z");

    let path = squircle_path(BorderRadii::uniform(-5.0), 100.0, 50.0, -1.0);
    assert_eq!(path.to_svg_data(), "M 100 0 L 100 50 L 0 50 L 0 0 L 100 0 Z");

    // Too large smoothing acts as 1.
    assert_eq!(
        squircle_path(BorderRadii::uniform(10.0), 100.0, 100.0, 5.0),
        squircle_path(BorderRadii::uniform(10.0), 100.0, 100.0, 1.0)
    );

    let path = squircle_path(BorderRadii::uniform(f32::INFINITY), f32::INFINITY, 100.0, 0.5);
    assert_closed(&path);
    assert_eq!(path.arcs().len(), 4);
}

#[test]
fn positioned() {
    let squircle = Squircle::new(100.0, 60.0, BorderRadii::uniform(12.0), 0.6).at(10.0, 20.0);
    let path = squircle.to_path();
    let expected = squircle_path(BorderRadii::uniform(12.0), 100.0, 60.0, 0.6)
        .offset(10.0, 20.0)
        .unwrap();

    for (a, b) in path.points().iter().zip(expected.points()) {
        assert_near(*a, *b);
    }
    assert_rect_near(path.bounds(), Rect::from_xywh(10.0, 20.0, 100.0, 60.0).unwrap());

    let from_rect = Squircle::from_rect(
        Rect::from_xywh(10.0, 20.0, 100.0, 60.0).unwrap(),
        BorderRadii::uniform(12.0),
        0.6,
    );
    assert_eq!(from_rect, squircle);
}

#[test]
fn push_multiple() {
    let mut pb = PathBuilder::new();
    pb.push_squircle(&Squircle::new(10.0, 10.0, BorderRadii::uniform(2.0), 0.5));
    pb.push_squircle(&Squircle::new(10.0, 10.0, BorderRadii::uniform(2.0), 0.5).at(20.0, 0.0));
    let path = pb.finish().unwrap();

    let moves = path.verbs().iter().filter(|v| **v == PathVerb::Move).count();
    let closes = path.verbs().iter().filter(|v| **v == PathVerb::Close).count();
    assert_eq!(moves, 2);
    assert_eq!(closes, 2);
    assert_rect_near(path.bounds(), Rect::from_ltrb(0.0, 0.0, 30.0, 10.0).unwrap());
}

#[test]
fn lowered_to_cubics() {
    let path = squircle_path(BorderRadii::uniform(20.0), 100.0, 100.0, 0.6);
    let cubics = path.cubics().unwrap();
    assert!(cubics.arcs().is_empty());
    assert!(!cubics.verbs().contains(&PathVerb::Arc));
    assert_eq!(cubics.points().first(), cubics.points().last());
    assert_rect_near(cubics.bounds(), path.bounds());
}
