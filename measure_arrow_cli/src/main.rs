use std::fs::File;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use measure_arrow::{
    dimension::{draw_measurement_arrow, MeasurementRequest},
    geometry::Point,
    io::read_requests_json,
    render::{svg, RecordingSurface, SvgSurface},
    styles::{
        ArrowPosition, ArrowStyle, DistanceLineStyle, PilarLineStyle, TextAlign, TextAnchor,
        TextStyle,
    },
};

/// Style options shared by the commands that build a request from arguments.
#[derive(Args, Debug, Clone)]
struct StyleArgs {
    /// Length of the guide lines.
    #[arg(long, default_value_t = 50.0)]
    pilar_height: f64,
    #[arg(long, default_value_t = 1.0)]
    pilar_thickness: f64,
    #[arg(long, default_value = "#000000")]
    pilar_color: String,
    /// Perpendicular offset of the dimension line.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    offset: f64,
    #[arg(long, default_value_t = 1.0)]
    line_thickness: f64,
    #[arg(long, default_value = "#000000")]
    line_color: String,
    /// Label slot, e.g. topCenter or bottomRight.
    #[arg(long, default_value = "topCenter")]
    text_position: TextAnchor,
    #[arg(long, default_value = "#000000")]
    text_color: String,
    #[arg(long, default_value_t = 12.0)]
    text_size: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    text_offset_x: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    text_offset_y: f64,
    /// Extra label rotation in degrees.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    text_rotation: f64,
    /// inside, outside or center.
    #[arg(long, default_value = "inside")]
    text_align: TextAlign,
    /// Custom label; the rounded distance is shown when omitted.
    #[arg(long, default_value = "")]
    text: String,
    /// inside or outside.
    #[arg(long, default_value = "outside")]
    arrow_position: ArrowPosition,
    #[arg(long, default_value_t = 1.0)]
    arrow_thickness: f64,
    #[arg(long, default_value = "#000000")]
    arrow_color: String,
    /// Draw closed, filled arrowheads.
    #[arg(long)]
    filled: bool,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    extend_start: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    extend_end: f64,
}

impl StyleArgs {
    fn request(&self, start: Point, end: Point) -> MeasurementRequest {
        MeasurementRequest {
            start_point: start,
            end_point: end,
            pilar_lines: PilarLineStyle {
                height: self.pilar_height,
                thickness: self.pilar_thickness,
                color: self.pilar_color.clone(),
            },
            distance_line: DistanceLineStyle {
                offset_from_point: self.offset,
                thickness: self.line_thickness,
                color: self.line_color.clone(),
            },
            text: TextStyle {
                position: self.text_position.clone(),
                color: self.text_color.clone(),
                size: self.text_size,
                offset_x: self.text_offset_x,
                offset_y: self.text_offset_y,
                rotation: self.text_rotation,
                align: self.text_align,
                text: self.text.clone(),
            },
            arrows: ArrowStyle {
                position: self.arrow_position,
                thickness: self.arrow_thickness,
                color: self.arrow_color.clone(),
                filled: self.filled,
            },
            extend_after_start_arrow: self.extend_start,
            extend_after_end_arrow: self.extend_end,
        }
    }
}

/// Command line host for the measurement arrow renderer.
#[derive(Parser)]
#[command(name = "measure_arrow_cli", version)]
struct Cli {
    /// Width of the SVG canvas
    #[arg(long, default_value_t = svg::DEFAULT_WIDTH, global = true)]
    width: f64,
    /// Height of the SVG canvas
    #[arg(long, default_value_t = svg::DEFAULT_HEIGHT, global = true)]
    height: f64,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw one measurement arrow between two points into an SVG file.
    Draw {
        #[arg(allow_negative_numbers = true)]
        x1: f64,
        #[arg(allow_negative_numbers = true)]
        y1: f64,
        #[arg(allow_negative_numbers = true)]
        x2: f64,
        #[arg(allow_negative_numbers = true)]
        y2: f64,
        output: String,
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Draw every request of a JSON file onto one SVG canvas.
    Render { input: String, output: String },
    /// Print the computed layout of a measurement arrow as JSON.
    Layout {
        #[arg(allow_negative_numbers = true)]
        x1: f64,
        #[arg(allow_negative_numbers = true)]
        y1: f64,
        #[arg(allow_negative_numbers = true)]
        x2: f64,
        #[arg(allow_negative_numbers = true)]
        y2: f64,
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Draw the reference example: 200px between (100,100) and (300,100).
    Example { output: String },
}

/// The request the reference host draws on start-up.
fn example_request() -> MeasurementRequest {
    let mut request = MeasurementRequest::new(Point::new(100.0, 100.0), Point::new(300.0, 100.0));
    request.distance_line.offset_from_point = 25.0;
    request.text.align = TextAlign::Center;
    request.arrows.filled = true;
    request.extend_after_start_arrow = 20.0;
    request.extend_after_end_arrow = 20.0;
    request
}

fn draw_svg(
    requests: &[MeasurementRequest],
    output: &str,
    width: f64,
    height: f64,
) -> Result<(), String> {
    log::info!("drawing {} measurements into {}", requests.len(), output);
    let mut surface = SvgSurface::new();
    for (idx, request) in requests.iter().enumerate() {
        draw_measurement_arrow(&mut surface, request)
            .map_err(|e| format!("Error drawing measurement {}: {}", idx + 1, e))?;
    }
    surface
        .write_svg(output, width, height)
        .map_err(|e| format!("Error writing {}: {}", output, e))?;
    println!("Wrote {} ({} measurements)", output, requests.len());
    Ok(())
}

fn print_layout(request: &MeasurementRequest) -> Result<(), String> {
    let mut surface = RecordingSurface::new();
    let layout = draw_measurement_arrow(&mut surface, request).map_err(|e| format!("Error: {e}"))?;
    let json = serde_json::to_string_pretty(&layout).map_err(|e| format!("Error: {e}"))?;
    println!("{json}");
    Ok(())
}

fn init_logging() {
    if let Ok(path) = std::env::var("MEASURE_ARROW_LOG") {
        match File::create(&path) {
            Ok(file) => {
                env_logger::Builder::from_default_env()
                    .target(env_logger::Target::Pipe(Box::new(file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Failed to create log file {}: {}", path, e);
                env_logger::Builder::from_default_env().init();
            }
        }
    } else {
        env_logger::Builder::from_default_env().init();
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Draw {
            x1,
            y1,
            x2,
            y2,
            output,
            style,
        } => {
            let request = style.request(Point::new(x1, y1), Point::new(x2, y2));
            draw_svg(&[request], &output, cli.width, cli.height)
        }
        Commands::Render { input, output } => match read_requests_json(&input) {
            Ok(requests) => draw_svg(&requests, &output, cli.width, cli.height),
            Err(e) => Err(format!("Error reading {}: {}", input, e)),
        },
        Commands::Layout {
            x1,
            y1,
            x2,
            y2,
            style,
        } => print_layout(&style.request(Point::new(x1, y1), Point::new(x2, y2))),
        Commands::Example { output } => {
            draw_svg(&[example_request()], &output, cli.width, cli.height)
        }
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}
