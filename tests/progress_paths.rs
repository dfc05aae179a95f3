use pill_progress::prelude::*;

const SIZES: [(f32, f32); 6] = [
    (300.0, 100.0),
    (1000.0, 100.0),
    (64.0, 64.0),
    (101.0, 100.0),
    (480.0, 48.0),
    (30.0, 24.0),
];

fn samples() -> impl Iterator<Item = f32> {
    (0..200).map(|i| i as f32 / 200.0)
}

fn element_points(element: &PathElement) -> Vec<Point> {
    pill_progress::renderer::flatten_element(element, 0.5)
}

#[test]
fn lit_length_is_conserved() {
    for progression in [0.05, 0.3, 0.75, 1.0] {
        let computer = PathComputer::new(StyleConfig::default().progression_percent(progression));
        for (w, h) in SIZES {
            let geometry = ButtonGeometry::new(w, h).unwrap();
            let expected = progression * geometry.full_length();
            for a in samples() {
                let paths = computer.compute(a, &geometry);
                let lit = paths.lit_length();
                assert!(
                    (lit - expected).abs() < 1e-2 * expected.max(1.0),
                    "{}x{} a={} p={}: lit {} expected {}",
                    w,
                    h,
                    a,
                    progression,
                    lit,
                    expected
                );
            }
        }
    }
}

#[test]
fn spans_do_not_overlap() {
    let computer = PathComputer::new(StyleConfig::default());
    for (w, h) in SIZES {
        let geometry = ButtonGeometry::new(w, h).unwrap();
        for a in samples() {
            let paths = computer.compute(a, &geometry);
            let mut spans: Vec<LitSpan> = paths.spans().to_vec();
            assert_eq!(spans.len(), paths.progress.len());
            spans.sort_by(|x, y| x.start.total_cmp(&y.start));
            for pair in spans.windows(2) {
                assert!(
                    pair[0].end <= pair[1].start + 1e-3,
                    "{}x{} a={}: {:?} overlaps {:?}",
                    w,
                    h,
                    a,
                    pair[0],
                    pair[1]
                );
            }
            for span in &spans {
                assert!(span.start >= 0.0 && span.end <= geometry.full_length() + 1e-3);
            }
        }
    }
}

#[test]
fn element_extent_matches_span_length() {
    let computer = PathComputer::new(StyleConfig::default());
    let geometry = ButtonGeometry::new(300.0, 100.0).unwrap();
    for a in samples() {
        let paths = computer.compute(a, &geometry);
        for (element, span) in paths.progress.iter().zip(paths.spans()) {
            let extent = match *element {
                PathElement::Rect(rect) => rect.width,
                PathElement::RingSegment {
                    outer_radius,
                    sweep_angle,
                    ..
                } => outer_radius * sweep_angle.to_radians(),
                PathElement::Arc { .. } => panic!("progress path never holds open arcs"),
            };
            assert!((extent - span.length()).abs() < 1e-2, "a={}", a);
        }
    }
}

#[test]
fn compute_is_idempotent() {
    let computer = PathComputer::new(StyleConfig::default());
    let geometry = ButtonGeometry::new(300.0, 100.0).unwrap();
    for a in samples() {
        assert_eq!(computer.compute(a, &geometry), computer.compute(a, &geometry));
    }
}

#[test]
fn compute_into_reuses_buffers() {
    let computer = PathComputer::new(StyleConfig::default());
    let geometry = ButtonGeometry::new(300.0, 100.0).unwrap();
    let mut paths = PillPaths::new();
    for a in samples() {
        computer.compute_into(a, &geometry, &mut paths);
    }
    let capacity = paths.progress.capacity();
    for a in samples() {
        computer.compute_into(a, &geometry, &mut paths);
        assert_eq!(paths, computer.compute(a, &geometry));
    }
    assert_eq!(paths.progress.capacity(), capacity);
}

/// Position of the band's tail edge (the first contour point of the first
/// non-wrapped element) moves by no more than the perimeter distance travelled.
#[test]
fn progress_is_continuous() {
    let computer = PathComputer::new(StyleConfig::default());
    for (w, h) in SIZES {
        let geometry = ButtonGeometry::new(w, h).unwrap();
        let eps = 1e-3;
        let mut a = 0.0;
        while a + eps < 1.0 {
            let before = computer.compute(a, &geometry);
            let after = computer.compute(a + eps, &geometry);
            assert!((before.lit_length() - after.lit_length()).abs() < 1e-2);

            let tail_before = before.spans()[0].start;
            let tail_after = after.spans()[0].start;
            let step = eps * geometry.full_length();
            assert!(
                (tail_after - tail_before - step).abs() < 1e-2 * step.max(1.0),
                "{}x{} a={}",
                w,
                h,
                a
            );
            a += 0.0371;
        }
    }
}

#[test]
fn loop_point_is_seamless() {
    let computer = PathComputer::new(StyleConfig::default());
    let geometry = ButtonGeometry::new(300.0, 100.0).unwrap();
    let end = computer.compute(1.0 - 1e-6, &geometry);
    let start = computer.compute(0.0, &geometry);
    assert!((end.lit_length() - start.lit_length()).abs() < 1e-2);

    // Just before the loop point the window is almost entirely the wrapped part.
    let wrapped: f32 = end.spans().iter().filter(|s| s.wrapped).map(|s| s.length()).sum();
    assert!((wrapped - start.lit_length()).abs() < 0.05);
    assert_eq!(start.spans()[0].start, 0.0);
    assert_eq!(start.border, end.border);
    assert_eq!(start.background, end.background);
}

#[test]
fn circle_button_only_lights_caps() {
    let computer = PathComputer::new(StyleConfig::default());
    let geometry = ButtonGeometry::new(64.0, 64.0).unwrap();
    for a in samples() {
        let paths = computer.compute(a, &geometry);
        assert!(!paths
            .lit_segments()
            .intersects(SegmentMask::TOP | SegmentMask::BOTTOM));
        for element in paths.progress.iter() {
            assert!(matches!(element, PathElement::RingSegment { .. }));
        }
        // The border rect collapses to zero width without failing.
        match paths.border.elements()[0] {
            PathElement::Rect(rect) => assert_eq!(rect.width, 0.0),
            ref other => panic!("unexpected element {:?}", other),
        }
    }
}

#[test]
fn full_wrap_keeps_both_ends() {
    let computer = PathComputer::new(StyleConfig::default().progression_percent(0.3));
    let geometry = ButtonGeometry::new(300.0, 100.0).unwrap();
    let paths = computer.compute(0.95, &geometry);
    let kinds: Vec<(SegmentKind, bool)> = paths.spans().iter().map(|s| (s.kind, s.wrapped)).collect();
    assert_eq!(kinds, vec![(SegmentKind::LeftCap, false), (SegmentKind::Top, true)]);
    assert!((paths.lit_length() - 0.3 * geometry.full_length()).abs() < 1e-2);
}

#[test]
fn reference_pill_at_start() {
    // 300x100: extRadius 50, segment 200, half circle 157.08, full 714.16.
    let geometry = ButtonGeometry::new(300.0, 100.0).unwrap();
    assert!((geometry.full_length() - 714.16).abs() < 0.01);
    let paths = PathComputer::new(StyleConfig::default()).compute(0.0, &geometry);
    assert!((paths.lit_length() - 214.25).abs() < 0.01);
    match paths.progress.elements()[0] {
        PathElement::Rect(rect) => {
            assert_eq!(rect.x, 50.0);
            assert_eq!(rect.y, 0.0);
            assert_eq!(rect.width, 200.0);
            assert_eq!(rect.height, 12.0);
        }
        ref other => panic!("unexpected element {:?}", other),
    }
    // The top edge holds 200 of the 214.25 lit pixels; the rest runs onto the right cap.
    let spans = paths.spans();
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[1].kind, SegmentKind::RightCap);
    assert!((spans[1].end - spans[1].start - 14.25).abs() < 0.01);
    assert!(matches!(
        paths.progress.elements()[1],
        PathElement::RingSegment { start_angle, .. } if start_angle == -90.0
    ));
}

#[test]
fn output_is_always_finite() {
    let styles = [
        StyleConfig::default(),
        StyleConfig::new(0.0, 0.0),
        StyleConfig::new(500.0, 1.0),
        StyleConfig::new(f32::NAN, f32::NAN),
    ];
    let progresses = [0.0, 0.5, 0.999_999, 1.0, -3.2, 17.5, f32::NAN, f32::INFINITY];
    for style in styles {
        let computer = PathComputer::new(style);
        for (w, h) in SIZES.iter().copied().chain([(1.0, 1.0), (1e6, 0.5)]) {
            let geometry = ButtonGeometry::new(w, h).unwrap();
            for a in progresses {
                let paths = computer.compute(a, &geometry);
                for path in [&paths.border, &paths.progress, &paths.background] {
                    for element in path {
                        for p in element_points(element) {
                            assert!(p.x.is_finite() && p.y.is_finite(), "{:?}", element);
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn unlaid_out_button_is_a_no_op() {
    let computer = PathComputer::new(StyleConfig::default());
    let mut paths = PillPaths::new();
    for (w, h) in [(0.0, 0.0), (300.0, 0.0), (0.0, 100.0), (-5.0, -5.0)] {
        computer.compute_for_size(0.4, w, h, &mut paths).unwrap();
        assert!(paths.is_empty());
    }
}
