//! Section plot of traced rays.
//!
//! Rasterises each ray path as a polyline and every layer boundary as a
//! horizontal line into an RGB image, then saves it as PNG. Boundary colours
//! come from a seeded generator so the same survey always produces the same
//! image.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strata_core::LayerStack;
use strata_math::{max_value, min_value, Interval, MathError, Point};
use thiserror::Error;

use crate::ray::RayTrace;

/// Errors that can occur while plotting.
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("No rays to plot")]
    NothingToPlot,

    #[error("Image of {width}x{height} is too small for a {margin}px margin")]
    InvalidSize { width: u32, height: u32, margin: u32 },

    #[error("Cannot plot non-finite coordinate ({x}, {y})")]
    NonFinitePoint { x: f64, y: f64 },

    #[error("Cannot plot non-finite boundary depth {0}")]
    NonFiniteDepth(f64),

    #[error("Plot extent is too large to map onto pixels")]
    ExtentOverflow,

    #[error("Layout error: {0}")]
    Math(#[from] MathError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type PlotResult<T> = Result<T, PlotError>;

/// Ray colours, cycled in launch order.
const RAY_PALETTE: [[u8; 3]; 6] = [
    [214, 39, 40],
    [31, 119, 180],
    [44, 160, 44],
    [148, 103, 189],
    [255, 127, 14],
    [23, 190, 207],
];

/// Plot configuration.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Empty border around the plotted area, in pixels
    pub margin: u32,
    /// Seed for boundary colours
    pub seed: u64,
    pub background: Rgb<u8>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            margin: 20,
            seed: 1,
            background: Rgb([255, 255, 255]),
        }
    }
}

/// Maps world coordinates onto pixel coordinates (y axis pointing up).
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlotFrame {
    x_range: Interval,
    y_range: Interval,
    width: u32,
    height: u32,
    margin: u32,
}

impl PlotFrame {
    pub(crate) fn to_pixel(&self, p: Point) -> (i64, i64) {
        let inner_w = (self.width - 1 - 2 * self.margin) as f64;
        let inner_h = (self.height - 1 - 2 * self.margin) as f64;
        let px = self.margin as f64 + self.x_range.normalize(p.x) * inner_w;
        let py = self.margin as f64 + (1.0 - self.y_range.normalize(p.y)) * inner_h;
        (px.round() as i64, py.round() as i64)
    }
}

/// Compute the world extents covering every path, the origin column and
/// every boundary.
fn plot_frame(
    traces: &[RayTrace],
    depths: &[f64],
    config: &PlotConfig,
) -> PlotResult<PlotFrame> {
    if config.width <= 2 * config.margin + 1 || config.height <= 2 * config.margin + 1 {
        return Err(PlotError::InvalidSize {
            width: config.width,
            height: config.height,
            margin: config.margin,
        });
    }

    if let Some(p) = traces.iter().flat_map(|t| t.path.iter()).find(|p| !p.is_finite()) {
        return Err(PlotError::NonFinitePoint { x: p.x, y: p.y });
    }
    if let Some(&depth) = depths.iter().find(|d| !d.is_finite()) {
        return Err(PlotError::NonFiniteDepth(depth));
    }

    let mut xs: Vec<f64> = traces.iter().flat_map(|t| t.path.iter().map(|p| p.x)).collect();
    xs.push(0.0);
    let x_range = Interval::new(min_value(&xs)?, max_value(&xs)?);

    let path_ys = traces
        .iter()
        .flat_map(|t| t.path.iter())
        .fold(Interval::EMPTY, |range, p| range.include(p.y));
    let depth_ys = depths.iter().fold(Interval::EMPTY, |range, &d| range.include(d));
    let y_range = Interval::surrounding(&path_ys, &depth_ys);

    // Spans wider than f64::MAX would break the pixel mapping
    if !x_range.size().is_finite() || !y_range.size().is_finite() {
        return Err(PlotError::ExtentOverflow);
    }

    Ok(PlotFrame {
        x_range,
        y_range,
        width: config.width,
        height: config.height,
        margin: config.margin,
    })
}

/// Draw a line between two pixels (Bresenham), clipped to the image.
fn draw_line(image: &mut RgbImage, from: (i64, i64), to: (i64, i64), color: Rgb<u8>) {
    let (mut x0, mut y0) = from;
    let (x1, y1) = to;
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if x0 >= 0 && y0 >= 0 && (x0 as u32) < image.width() && (y0 as u32) < image.height() {
            image.put_pixel(x0 as u32, y0 as u32, color);
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Render ray paths over the layer boundaries of `stack`.
///
/// Boundaries start at the first ray's origin depth and span the full
/// horizontal extent of the rays.
pub fn render_plot(stack: &LayerStack, traces: &[RayTrace], config: &PlotConfig) -> PlotResult<RgbImage> {
    let first = traces.first().ok_or(PlotError::NothingToPlot)?;
    let depths = stack.boundary_depths(first.origin.y);
    let frame = plot_frame(traces, &depths, config)?;

    let mut image: RgbImage = ImageBuffer::from_pixel(config.width, config.height, config.background);

    let mut rng = StdRng::seed_from_u64(config.seed);
    for &depth in &depths {
        let color = Rgb([rng.gen::<u8>(), rng.gen::<u8>(), rng.gen::<u8>()]);
        let left = frame.to_pixel(Point::new(frame.x_range.min, depth));
        let right = frame.to_pixel(Point::new(frame.x_range.max, depth));
        draw_line(&mut image, left, right, color);
    }

    for (i, trace) in traces.iter().enumerate() {
        let color = Rgb(RAY_PALETTE[i % RAY_PALETTE.len()]);
        for segment in trace.path.windows(2) {
            draw_line(&mut image, frame.to_pixel(segment[0]), frame.to_pixel(segment[1]), color);
        }
    }

    log::debug!(
        "Plotted {} rays and {} boundaries, x in [{:.1}, {:.1}], y in [{:.1}, {:.1}]",
        traces.len(),
        depths.len(),
        frame.x_range.min,
        frame.x_range.max,
        frame.y_range.min,
        frame.y_range.max
    );

    Ok(image)
}

/// Save a plot as PNG.
pub fn save_plot<P: AsRef<Path>>(image: &RgbImage, path: P) -> PlotResult<()> {
    image.save(path.as_ref())?;
    log::info!("Plot saved as {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracer::trace;
    use strata_core::Survey;

    fn default_traces() -> (LayerStack, Vec<RayTrace>) {
        let survey = Survey::default();
        let stack = survey.layer_stack().unwrap();
        let traces = trace(&stack, &survey.origin_points(), &survey.launch_angles()).unwrap();
        (stack, traces)
    }

    #[test]
    fn test_plot_dimensions_and_content() {
        let (stack, traces) = default_traces();
        let config = PlotConfig {
            width: 200,
            height: 150,
            ..Default::default()
        };
        let image = render_plot(&stack, &traces, &config).unwrap();

        assert_eq!(image.dimensions(), (200, 150));
        assert!(image.pixels().any(|p| *p != config.background));
    }

    #[test]
    fn test_plot_is_deterministic() {
        let (stack, traces) = default_traces();
        let config = PlotConfig::default();

        let a = render_plot(&stack, &traces, &config).unwrap();
        let b = render_plot(&stack, &traces, &config).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_ray_end_points_are_drawn() {
        let (stack, traces) = default_traces();
        let config = PlotConfig::default();
        let depths = stack.boundary_depths(0.0);
        let frame = plot_frame(&traces, &depths, &config).unwrap();
        let image = render_plot(&stack, &traces, &config).unwrap();

        // Rays are drawn after boundaries, so path vertices keep the ray colour
        for (i, trace) in traces.iter().enumerate() {
            let (x, y) = frame.to_pixel(trace.end_point());
            let expected = Rgb(RAY_PALETTE[i % RAY_PALETTE.len()]);
            let drawn = *image.get_pixel(x as u32, y as u32);
            // A later ray may overdraw a shared pixel
            let later = (i + 1..traces.len()).map(|j| Rgb(RAY_PALETTE[j % RAY_PALETTE.len()]));
            assert!(drawn == expected || later.into_iter().any(|c| c == drawn));
        }
    }

    #[test]
    fn test_frame_keeps_points_inside_margin() {
        let (_, traces) = default_traces();
        let config = PlotConfig::default();
        let frame = plot_frame(&traces, &[0.0, -3500.0], &config).unwrap();

        let (x, y) = frame.to_pixel(Point::new(0.0, 0.0));
        assert!(x >= config.margin as i64 && y == config.margin as i64);
        let (_, bottom) = frame.to_pixel(Point::new(0.0, -3500.0));
        assert_eq!(bottom, (config.height - 1 - config.margin) as i64);
    }

    #[test]
    fn test_overflowing_path_rejected() {
        // tan(80°) pushes the horizontal offset past f64::MAX
        let stack = LayerStack::new(&[-1e308], &[300.0]).unwrap();
        let traces = trace(&stack, &[Point::ZERO], &[80.0_f64.to_radians()]).unwrap();
        assert!(traces[0].end_point().x.is_infinite());

        let err = render_plot(&stack, &traces, &PlotConfig::default()).unwrap_err();
        assert!(matches!(err, PlotError::NonFinitePoint { .. }));
    }

    #[test]
    fn test_overflowing_extent_rejected() {
        // Each point is finite but the vertical span is not
        let stack = LayerStack::new(&[-1e308, -1e308], &[300.0, 300.0]).unwrap();
        let traces = trace(&stack, &[Point::new(0.0, 1e308)], &[0.0]).unwrap();
        assert!(traces[0].path.iter().all(|p| p.is_finite()));

        let err = render_plot(&stack, &traces, &PlotConfig::default()).unwrap_err();
        assert!(matches!(err, PlotError::ExtentOverflow));
    }

    #[test]
    fn test_empty_traces_rejected() {
        let (stack, _) = default_traces();
        let err = render_plot(&stack, &[], &PlotConfig::default()).unwrap_err();
        assert!(matches!(err, PlotError::NothingToPlot));
    }

    #[test]
    fn test_tiny_image_rejected() {
        let (stack, traces) = default_traces();
        let config = PlotConfig {
            width: 30,
            height: 30,
            margin: 20,
            ..Default::default()
        };
        assert!(matches!(
            render_plot(&stack, &traces, &config),
            Err(PlotError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_draw_line_clips() {
        let mut image: RgbImage = ImageBuffer::from_pixel(10, 10, Rgb([0, 0, 0]));
        draw_line(&mut image, (-5, 5), (15, 5), Rgb([255, 0, 0]));
        for x in 0..10 {
            assert_eq!(*image.get_pixel(x, 5), Rgb([255, 0, 0]));
        }
        assert_eq!(*image.get_pixel(0, 4), Rgb([0, 0, 0]));
    }
}
