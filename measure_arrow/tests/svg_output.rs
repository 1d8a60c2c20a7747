use assert_fs::prelude::*;
use measure_arrow::{
    dimension::{draw_measurement_arrow, MeasurementRequest},
    geometry::Point,
    io::{read_requests_json, write_requests_json},
    render::SvgSurface,
    styles::{ArrowPosition, TextAnchor},
};
use predicates::prelude::*;

#[test]
fn write_measurement_svg() {
    let mut surface = SvgSurface::new();
    let mut req = MeasurementRequest::new(Point::new(50.0, 50.0), Point::new(250.0, 150.0));
    req.arrows.filled = true;
    req.text.position = TextAnchor::BottomLeft;
    draw_measurement_arrow(&mut surface, &req).unwrap();
    // two guide lines, the dimension line, two filled heads (fill + stroke) and the label
    assert_eq!(surface.element_count(), 8);

    let dir = assert_fs::TempDir::new().unwrap();
    let file = dir.child("measure.svg");
    surface
        .write_svg(file.path().to_str().unwrap(), 300.0, 200.0)
        .unwrap();
    file.assert(predicate::str::contains("<svg"));
    file.assert(predicate::str::contains(">224px</text>"));
    file.assert(predicate::str::contains("text-anchor='start'"));
    file.assert(predicate::str::contains("dominant-baseline='text-after-edge'"));
    dir.close().unwrap();
}

#[test]
fn open_arrowheads_have_no_fill() {
    let mut surface = SvgSurface::new();
    let req = MeasurementRequest::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
    draw_measurement_arrow(&mut surface, &req).unwrap();
    let doc = surface.finish(120.0, 80.0);
    assert!(!doc.contains("stroke='none'"));
    assert_eq!(surface.element_count(), 6);
}

#[test]
fn requests_round_trip_through_file() {
    let mut inside = MeasurementRequest::new(Point::new(1.0, 1.0), Point::new(9.0, 1.0));
    inside.arrows.position = ArrowPosition::Inside;
    inside.text.text = "gap".into();
    let requests = vec![
        MeasurementRequest::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
        inside,
    ];

    let dir = assert_fs::TempDir::new().unwrap();
    let file = dir.child("requests.json");
    let path = file.path().to_str().unwrap();
    write_requests_json(path, &requests).unwrap();
    file.assert(predicate::str::contains("\"arrowsParams\""));
    let back = read_requests_json(path).unwrap();
    assert_eq!(back, requests);
    dir.close().unwrap();
}
