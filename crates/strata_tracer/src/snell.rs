//! Snell's law at a flat, horizontal velocity interface.
//!
//! Angles are measured from the vertical (the interface normal), in radians.
//! `sin(θ1) / v1 = sin(θ2) / v2`.

/// Outcome of a ray meeting an interface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Refraction {
    /// The ray continues into the next layer at this angle.
    Transmitted(f64),

    /// The ray is at or beyond the interface's critical angle.
    Reflected { critical_angle: f64 },
}

impl Refraction {
    /// The transmitted angle, if the ray got through.
    pub fn transmitted(self) -> Option<f64> {
        match self {
            Refraction::Transmitted(angle) => Some(angle),
            Refraction::Reflected { .. } => None,
        }
    }
}

/// Apply Snell's law to a ray crossing from `velocity_from` into `velocity_to`.
///
/// Only a slow-to-fast interface can reflect. A sine ratio of exactly 1
/// (grazing transmission) counts as reflection there, since the ray would
/// never reach the next interface. Equal velocities pass the angle through
/// unchanged.
#[inline]
pub fn refract(angle: f64, velocity_from: f64, velocity_to: f64) -> Refraction {
    if velocity_to == velocity_from {
        return Refraction::Transmitted(angle);
    }

    let sine = velocity_to / velocity_from * angle.sin();

    // Check for total internal reflection
    if let Some(critical_angle) = critical_angle(velocity_from, velocity_to) {
        if sine.abs() >= 1.0 {
            return Refraction::Reflected { critical_angle };
        }
    }

    Refraction::Transmitted(sine.clamp(-1.0, 1.0).asin())
}

/// Critical angle of an interface, if it has one.
///
/// Only a slow-to-fast interface (`velocity_to > velocity_from`) can reflect.
#[inline]
pub fn critical_angle(velocity_from: f64, velocity_to: f64) -> Option<f64> {
    if velocity_to > velocity_from {
        Some((velocity_from / velocity_to).asin())
    } else {
        None
    }
}
