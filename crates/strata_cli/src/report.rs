//! Console report of traced rays, in degrees.

use strata_math::radians_to_degrees;
use strata_tracer::{FlatTrace, RayTrace};

/// Format one ray: launch angle, every coordinate with the angle the ray
/// leaves it with, and the status message.
pub fn format_trace(trace: &RayTrace) -> String {
    let mut lines = Vec::with_capacity(trace.path.len() + 2);
    lines.push(format!("Launch: {:.2}°", radians_to_degrees(trace.launch_angle)));

    for (i, point) in trace.path.iter().enumerate() {
        // Past the last crossed interface the ray keeps its final angle
        let angle = angle_in_layer(trace, i.min(trace.angles.len()));
        lines.push(format!(
            "Coordinate: [{:.2}, {:.2}], θ: {:.2}°",
            point.x,
            point.y,
            radians_to_degrees(angle)
        ));
    }

    lines.push(trace.message.clone());
    join_lines(&lines)
}

/// Angle the ray travels with inside `layer`.
fn angle_in_layer(trace: &RayTrace, layer: usize) -> f64 {
    layer
        .checked_sub(1)
        .and_then(|k| trace.angles.get(k))
        .copied()
        .unwrap_or(trace.launch_angle)
}

/// Format the flattened batch.
pub fn format_flat(flat: &FlatTrace) -> String {
    let coords: Vec<String> = flat
        .path
        .iter()
        .map(|p| format!("[{:.2}, {:.2}]", p.x, p.y))
        .collect();
    let angles: Vec<String> = flat
        .angles
        .iter()
        .map(|a| format!("{:.2}°", radians_to_degrees(*a)))
        .collect();

    join_lines(&[
        format!("Coordinates: {}", coords.join(" ")),
        format!("Angles: {}", angles.join(" ")),
        flat.message.clone(),
    ])
}

/// Newline-terminate every line.
fn join_lines(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_math::degrees_to_radians;
    use strata_tracer::{flatten, trace_ray, LayerStack, Point};

    #[test]
    fn test_format_two_layer_trace() {
        let stack = LayerStack::new(&[-500.0, -300.0], &[200.0, 400.0]).unwrap();
        let ray = trace_ray(&stack, Point::ZERO, degrees_to_radians(-5.0)).unwrap();
        let text = format_trace(&ray);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Launch: -5.00°");
        assert_eq!(lines[1], "Coordinate: [0.00, 0.00], θ: -5.00°");
        assert_eq!(lines[2], "Coordinate: [43.74, -500.00], θ: -10.04°");
        assert!(lines[3].starts_with("Coordinate: [") && lines[3].ends_with("θ: -10.04°"));
        assert!(lines[4].starts_with("Ray traced through all 2 layers"));
    }

    #[test]
    fn test_format_flat() {
        let stack = LayerStack::new(&[-500.0, -300.0], &[200.0, 400.0]).unwrap();
        let ray = trace_ray(&stack, Point::ZERO, degrees_to_radians(-5.0)).unwrap();
        let text = format_flat(&flatten(&[ray]));

        assert!(text.starts_with("Coordinates: [0.00, 0.00] [43.74, -500.00] "));
        assert!(text.contains("Angles: -10.04°\n"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_every_line_is_terminated() {
        let stack = LayerStack::new(&[-100.0, -100.0], &[100.0, 600.0]).unwrap();
        let ray = trace_ray(&stack, Point::ZERO, degrees_to_radians(60.0)).unwrap();
        let text = format_trace(&ray);

        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), ray.path.len() + 2);
        assert!(text.lines().last().unwrap().starts_with("Total internal reflection"));
    }
}
