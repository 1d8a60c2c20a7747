use measure_arrow::{
    dimension::{draw_measurement_arrow, MeasurementRequest},
    geometry::{distance, Point},
    io::parse_requests_json,
    render::{DrawCommand, RecordingSurface, Surface, TextAlignment, TextBaseline},
    styles::{ArrowPosition, TextAlign, TextAnchor},
};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

fn example() -> MeasurementRequest {
    let mut req = MeasurementRequest::new(Point::new(100.0, 100.0), Point::new(300.0, 100.0));
    req.distance_line.offset_from_point = 25.0;
    req.text.align = TextAlign::Center;
    req.arrows.filled = true;
    req.extend_after_start_arrow = 20.0;
    req.extend_after_end_arrow = 20.0;
    req
}

#[test]
fn end_to_end_example() {
    init();
    let mut s = RecordingSurface::new();
    let layout = draw_measurement_arrow(&mut s, &example()).unwrap();

    // guide lines: vertical, 50 long, at x = 100 and x = 300
    let strokes: Vec<_> = s.strokes().collect();
    let first = &strokes[0].0[0].points;
    assert!(close(first[0], Point::new(100.0, 100.0)));
    assert!(close(first[1], Point::new(100.0, 150.0)));
    let second = &strokes[1].0[0].points;
    assert!(close(second[0], Point::new(300.0, 100.0)));
    assert!(close(second[1], Point::new(300.0, 150.0)));

    // dimension line at y = 125, extended 20 on each side
    let line = &strokes[2].0[0].points;
    assert!(close(line[0], Point::new(80.0, 125.0)));
    assert!(close(line[1], Point::new(320.0, 125.0)));

    // filled heads at the line ends
    assert!(close(layout.arrowheads[0].tip, Point::new(100.0, 125.0)));
    assert!(close(layout.arrowheads[1].tip, Point::new(300.0, 125.0)));
    let fills = s
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Fill { .. }))
        .count();
    assert_eq!(fills, 2);

    // label centered one text height above the midpoint
    assert_eq!(layout.text, "200px");
    assert!(close(layout.midpoint, Point::new(200.0, 125.0)));
    assert!(close(layout.text_anchor, Point::new(200.0, 113.0)));
    match s.commands().last().unwrap() {
        DrawCommand::Text {
            text,
            origin,
            align,
            baseline,
            ..
        } => {
            assert_eq!(text, "200px");
            assert!(close(*origin, Point::new(200.0, 113.0)));
            assert_eq!(*align, TextAlignment::Center);
            assert_eq!(*baseline, TextBaseline::Top);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn axis_aligned_offsets() {
    let mut s = RecordingSurface::new();
    let mut req = MeasurementRequest::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
    let layout = draw_measurement_arrow(&mut s, &req).unwrap();
    assert!(close(layout.pilar_lines[0].to, Point::new(0.0, 50.0)));
    assert!(close(layout.pilar_lines[1].to, Point::new(100.0, 50.0)));
    assert!(close(layout.distance_line.start_offset, Point::new(0.0, 0.0)));

    req.distance_line.offset_from_point = 25.0;
    let layout = draw_measurement_arrow(&mut s, &req).unwrap();
    assert!(close(layout.distance_line.start_offset, Point::new(0.0, 25.0)));
    assert!(close(layout.distance_line.end_offset, Point::new(100.0, 25.0)));
}

#[test]
fn extension_moves_end_along_direction() {
    let start = Point::new(20.0, 30.0);
    let end = Point::new(-16.0, 78.0);
    let mut req = MeasurementRequest::new(start, end);
    req.arrows.position = ArrowPosition::Outside;
    let base = draw_measurement_arrow(&mut RecordingSurface::new(), &req).unwrap();
    req.extend_after_end_arrow = 12.5;
    let longer = draw_measurement_arrow(&mut RecordingSurface::new(), &req).unwrap();

    let len = distance(start, end);
    let unit = Point::new((end.x - start.x) / len, (end.y - start.y) / len);
    let expected = base
        .distance_line
        .end_extend
        .offset(12.5 * unit.x, 12.5 * unit.y);
    assert!(close(longer.distance_line.end_extend, expected));
    assert!(close(longer.distance_line.start_extend, base.distance_line.start_extend));
}

#[test]
fn unknown_anchor_matches_middle_center() {
    let mut req = MeasurementRequest::new(Point::new(3.0, 9.0), Point::new(80.0, 41.0));
    req.text.position = TextAnchor::parse("upsideDown");
    let a = draw_measurement_arrow(&mut RecordingSurface::new(), &req).unwrap();
    req.text.position = TextAnchor::MiddleCenter;
    let b = draw_measurement_arrow(&mut RecordingSurface::new(), &req).unwrap();
    assert_eq!(a.text_anchor, b.text_anchor);
}

fn painted_alignment(position: &str) -> (TextAlignment, TextBaseline) {
    let json = format!(
        r#"{{"startPoint":{{"x":10,"y":10}},"endPoint":{{"x":90,"y":40}},
            "textParams":{{"position":"{position}"}}}}"#
    );
    let requests = parse_requests_json(&json).unwrap();
    let mut s = RecordingSurface::new();
    draw_measurement_arrow(&mut s, &requests[0]).unwrap();
    match s.commands().last().unwrap() {
        DrawCommand::Text {
            align, baseline, ..
        } => (*align, *baseline),
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn unknown_anchor_aligns_by_name() {
    init();
    assert_eq!(
        painted_alignment("sideways"),
        (TextAlignment::Left, TextBaseline::Top)
    );
    assert_eq!(
        painted_alignment("topCenterish"),
        (TextAlignment::Center, TextBaseline::Top)
    );
    assert_eq!(
        painted_alignment("middleCenter"),
        (TextAlignment::Center, TextBaseline::Middle)
    );
}

#[test]
fn sequential_calls_do_not_leak_style() {
    let mut s = RecordingSurface::new();
    s.set_stroke_color("#123456").unwrap();
    s.set_line_width(3.0);
    let before = s.state().clone();

    let mut first = MeasurementRequest::new(Point::new(0.0, 0.0), Point::new(50.0, 0.0));
    first.pilar_lines.color = "#ff0000".into();
    first.distance_line.thickness = 6.0;
    draw_measurement_arrow(&mut s, &first).unwrap();
    assert_eq!(s.state(), &before);

    let mut second = MeasurementRequest::new(Point::new(0.0, 20.0), Point::new(0.0, 90.0));
    second.arrows.color = "blue".into();
    second.arrows.thickness = 2.0;
    second.text.rotation = 45.0;
    draw_measurement_arrow(&mut s, &second).unwrap();
    assert_eq!(s.state(), &before);
    assert_eq!(s.depth(), 0);
}

#[test]
fn rotated_segment_label_follows_line() {
    let mut s = RecordingSurface::new();
    let req = MeasurementRequest::new(Point::new(0.0, 0.0), Point::new(0.0, 100.0));
    let layout = draw_measurement_arrow(&mut s, &req).unwrap();
    assert!((layout.angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    // topCenter sits one text height on the left-hand side of a downward line
    let w = layout.text_width;
    let expected = Point::new(12.0, 50.0 + w / 2.0);
    assert!(close(layout.text_anchor, expected), "{:?}", layout.text_anchor);
}
