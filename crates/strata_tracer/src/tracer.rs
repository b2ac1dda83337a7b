//! Layer-by-layer ray tracing.
//!
//! Each ray starts at its origin in layer 0 and is advanced across one layer
//! at a time:
//! - horizontal offset `thickness * tan(angle)`, vertical offset `thickness`
//! - Snell's law at the interface to the next layer
//! - early stop on total internal reflection
//!
//! Rays never interact, so a batch can be traced in parallel with rayon.
//! Both batch entry points return results in launch-angle order.

use rayon::prelude::*;
use strata_core::{LayerStack, TraceError, TraceResult};
use strata_math::{radians_to_degrees, Interval, Point};

use crate::ray::{RayStatus, RayTrace};
use crate::snell::{refract, Refraction};

/// Launch angles must lie strictly inside (-π/2, π/2).
const LAUNCH_DOMAIN: Interval = Interval {
    min: -std::f64::consts::FRAC_PI_2,
    max: std::f64::consts::FRAC_PI_2,
};

fn validate_launch_angle(angle: f64) -> TraceResult<()> {
    if !LAUNCH_DOMAIN.surrounds(angle) {
        return Err(TraceError::invalid(format!(
            "launch angle {} rad must be finite and inside (-π/2, π/2)",
            angle
        )));
    }
    Ok(())
}

fn validate_origin(origin: Point) -> TraceResult<()> {
    if !origin.is_finite() {
        return Err(TraceError::invalid(format!(
            "ray origin ({}, {}) must be finite",
            origin.x, origin.y
        )));
    }
    Ok(())
}

/// Pair every launch angle with its origin.
///
/// A single origin is shared by all angles; otherwise origins and angles
/// pair element-wise and must have the same length.
fn pair_rays(origins: &[Point], launch_angles: &[f64]) -> TraceResult<Vec<(Point, f64)>> {
    if launch_angles.is_empty() {
        return Err(TraceError::invalid("at least one launch angle is required"));
    }

    let pairs: Vec<(Point, f64)> = match origins.len() {
        0 => return Err(TraceError::invalid("at least one ray origin is required")),
        1 => launch_angles.iter().map(|&a| (origins[0], a)).collect(),
        n if n == launch_angles.len() => {
            origins.iter().copied().zip(launch_angles.iter().copied()).collect()
        }
        n => {
            return Err(TraceError::invalid(format!(
                "{} origins cannot be paired with {} launch angles",
                n,
                launch_angles.len()
            )))
        }
    };

    for &(origin, angle) in &pairs {
        validate_origin(origin)?;
        validate_launch_angle(angle)?;
    }
    Ok(pairs)
}

/// Trace one ray through the stack.
///
/// Total internal reflection is reported through the returned status; the
/// only errors are invalid origins or launch angles.
pub fn trace_ray(stack: &LayerStack, origin: Point, launch_angle: f64) -> TraceResult<RayTrace> {
    validate_origin(origin)?;
    validate_launch_angle(launch_angle)?;
    Ok(trace_validated(stack, origin, launch_angle))
}

fn trace_validated(stack: &LayerStack, origin: Point, launch_angle: f64) -> RayTrace {
    let layers = stack.layers();
    let mut path = Vec::with_capacity(layers.len() + 1);
    let mut angles = Vec::with_capacity(layers.len().saturating_sub(1));

    let mut position = origin;
    let mut angle = launch_angle;
    path.push(position);

    for (index, layer) in layers.iter().enumerate() {
        position += Point::new(layer.thickness * angle.tan(), layer.thickness);
        path.push(position);

        let Some(next) = layers.get(index + 1) else {
            break;
        };

        match refract(angle, layer.velocity, next.velocity) {
            Refraction::Transmitted(refracted) => {
                log::trace!(
                    "interface {}: {:.4}° -> {:.4}° at ({:.3}, {:.3})",
                    index,
                    radians_to_degrees(angle),
                    radians_to_degrees(refracted),
                    position.x,
                    position.y
                );
                angle = refracted;
                angles.push(angle);
            }
            Refraction::Reflected { critical_angle } => {
                let message = format!(
                    "Total internal reflection at interface {} (depth {:.2}): incidence {:.2}° exceeds critical angle {:.2}° ({} -> {})",
                    index,
                    position.y,
                    radians_to_degrees(angle.abs()),
                    radians_to_degrees(critical_angle),
                    layer.velocity,
                    next.velocity
                );
                log::debug!("{}", message);
                return RayTrace {
                    origin,
                    launch_angle,
                    path,
                    angles,
                    status: RayStatus::TotalInternalReflection {
                        interface: index,
                        critical_angle,
                    },
                    message,
                };
            }
        }
    }

    let message = format!(
        "Ray traced through all {} layers, exit angle {:.2}°",
        layers.len(),
        radians_to_degrees(angles.last().copied().unwrap_or(launch_angle))
    );
    log::debug!("{}", message);
    RayTrace {
        origin,
        launch_angle,
        path,
        angles,
        status: RayStatus::Completed,
        message,
    }
}

/// Trace every launch angle sequentially.
///
/// All inputs are validated before the first ray is traced. A single origin
/// is shared by every angle; otherwise `origins` and `launch_angles` pair up
/// element-wise.
pub fn trace(stack: &LayerStack, origins: &[Point], launch_angles: &[f64]) -> TraceResult<Vec<RayTrace>> {
    let pairs = pair_rays(origins, launch_angles)?;
    let traces: Vec<RayTrace> = pairs
        .iter()
        .map(|&(origin, angle)| trace_validated(stack, origin, angle))
        .collect();
    log_summary(&traces);
    Ok(traces)
}

/// Trace every launch angle in parallel.
///
/// Produces exactly the same output, in the same order, as [`trace`].
pub fn trace_parallel(
    stack: &LayerStack,
    origins: &[Point],
    launch_angles: &[f64],
) -> TraceResult<Vec<RayTrace>> {
    let pairs = pair_rays(origins, launch_angles)?;
    let traces: Vec<RayTrace> = pairs
        .par_iter()
        .map(|&(origin, angle)| trace_validated(stack, origin, angle))
        .collect();
    log_summary(&traces);
    Ok(traces)
}

fn log_summary(traces: &[RayTrace]) {
    let reflected = traces.iter().filter(|t| !t.status.is_completed()).count();
    log::info!(
        "Traced {} rays: {} completed, {} totally reflected",
        traces.len(),
        traces.len() - reflected,
        reflected
    );
}
