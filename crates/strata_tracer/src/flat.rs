//! Flattened batch output.
//!
//! Older drivers consume one coordinate list, one angle list and one status
//! string for the whole batch instead of a record per ray. [`flatten`]
//! concatenates per-ray results in launch-angle order.

use strata_core::{LayerStack, TraceResult};
use strata_math::Point;

use crate::ray::RayTrace;
use crate::tracer::trace;

/// Concatenated results of a batch trace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatTrace {
    /// Every ray's path, one after another
    pub path: Vec<Point>,

    /// Every ray's refraction angles, one after another (radians)
    pub angles: Vec<f64>,

    /// Every ray's status message, newline separated
    pub message: String,
}

/// Concatenate per-ray results, preserving order.
pub fn flatten(traces: &[RayTrace]) -> FlatTrace {
    let mut flat = FlatTrace {
        path: Vec::with_capacity(traces.iter().map(|t| t.path.len()).sum()),
        angles: Vec::with_capacity(traces.iter().map(|t| t.angles.len()).sum()),
        message: String::new(),
    };

    for (i, trace) in traces.iter().enumerate() {
        flat.path.extend_from_slice(&trace.path);
        flat.angles.extend_from_slice(&trace.angles);
        if i > 0 {
            flat.message.push('\n');
        }
        flat.message.push_str(&trace.message);
    }

    flat
}

/// Trace from raw slices and return the flattened form.
///
/// Equivalent to building a [`LayerStack`], calling [`trace`] and
/// [`flatten`]ing the result.
pub fn trace_flat(
    thicknesses: &[f64],
    velocities: &[f64],
    origins: &[Point],
    launch_angles: &[f64],
) -> TraceResult<FlatTrace> {
    let stack = LayerStack::new(thicknesses, velocities)?;
    let traces = trace(&stack, origins, launch_angles)?;
    Ok(flatten(&traces))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::TraceError;
    use strata_math::degrees_to_radians;

    #[test]
    fn test_flatten_concatenates_in_order() {
        let stack = LayerStack::new(&[-500.0, -300.0], &[100.0, 600.0]).unwrap();
        let angles = [degrees_to_radians(-5.0), degrees_to_radians(70.0)];
        let traces = trace(&stack, &[Point::ZERO], &angles).unwrap();
        let flat = flatten(&traces);

        assert_eq!(flat.path.len(), traces[0].path.len() + traces[1].path.len());
        assert_eq!(&flat.path[..3], traces[0].path.as_slice());
        assert_eq!(&flat.path[3..], traces[1].path.as_slice());

        // Only the first ray crossed an interface
        assert_eq!(flat.angles, traces[0].angles);
        assert_eq!(flat.message.lines().count(), 2);
        assert!(flat.message.lines().nth(1).unwrap().starts_with("Total internal reflection"));
    }

    #[test]
    fn test_trace_flat_two_layer_scenario() {
        let flat = trace_flat(
            &[-500.0, -300.0],
            &[200.0, 400.0],
            &[Point::ZERO],
            &[degrees_to_radians(-5.0)],
        )
        .unwrap();

        assert_eq!(flat.path.len(), 3);
        assert_eq!(flat.angles.len(), 1);
        assert!((flat.path[1].x - 43.74).abs() < 0.01);
    }

    #[test]
    fn test_trace_flat_rejects_mismatched_stack() {
        let err = trace_flat(&[-500.0], &[200.0, 400.0], &[Point::ZERO], &[0.1]).unwrap_err();
        assert!(matches!(err, TraceError::InvalidInput(_)));
    }

    #[test]
    fn test_flatten_empty() {
        assert_eq!(flatten(&[]), FlatTrace::default());
    }
}
