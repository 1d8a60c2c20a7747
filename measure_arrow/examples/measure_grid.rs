//! Draws one measurement per label slot into `measure_grid.svg`.

use measure_arrow::{
    dimension::{draw_measurement_arrow, MeasurementRequest},
    geometry::Point,
    render::SvgSurface,
    styles::{TextAlign, TextAnchor},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let mut surface = SvgSurface::new();
    for (i, anchor) in TextAnchor::ALL.into_iter().enumerate() {
        let x = 60.0 + (i % 3) as f64 * 260.0;
        let y = 60.0 + (i / 3) as f64 * 180.0;
        let mut req = MeasurementRequest::new(Point::new(x, y), Point::new(x + 180.0, y + 30.0));
        req.distance_line.offset_from_point = 30.0;
        req.text.text = anchor.to_string();
        req.text.position = anchor;
        req.text.align = TextAlign::Center;
        req.arrows.filled = true;
        req.extend_after_start_arrow = 10.0;
        req.extend_after_end_arrow = 10.0;
        draw_measurement_arrow(&mut surface, &req)?;
    }
    surface.write_svg("measure_grid.svg", 820.0, 600.0)?;
    println!("Wrote measure_grid.svg");
    Ok(())
}
