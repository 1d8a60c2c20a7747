//! Core library for drawing annotated measurement arrows.
//!
//! The entry point is [`dimension::draw_measurement_arrow`], which paints a
//! dimension between two points on any [`render::Surface`].

pub mod dimension;
pub mod geometry;
pub mod io;
pub mod render;
pub mod styles;

pub use dimension::{draw_measurement_arrow, MeasurementLayout, MeasurementRequest};
pub use geometry::{rotate_point, Point};
pub use render::{RecordingSurface, Surface, SurfaceError, SvgSurface};
