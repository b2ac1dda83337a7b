//! Result types for a single traced ray.

use std::fmt;

use strata_math::Point;

/// How a ray's trace ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RayStatus {
    /// The ray crossed every interface and left the base of the stack.
    Completed,

    /// The ray met an interface beyond its critical angle and could not transmit.
    TotalInternalReflection {
        /// Index of the reflecting interface (between layer `interface` and `interface + 1`)
        interface: usize,
        /// Critical angle of that interface, in radians
        critical_angle: f64,
    },
}

impl RayStatus {
    /// True if the ray made it through the whole stack.
    pub fn is_completed(&self) -> bool {
        matches!(self, RayStatus::Completed)
    }
}

impl fmt::Display for RayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RayStatus::Completed => write!(f, "Completed"),
            RayStatus::TotalInternalReflection { .. } => write!(f, "TotalInternalReflection"),
        }
    }
}

/// The computed path of one ray through a layer stack.
#[derive(Debug, Clone, PartialEq)]
pub struct RayTrace {
    /// Starting point of the ray
    pub origin: Point,

    /// Launch angle in radians
    pub launch_angle: f64,

    /// Origin followed by one point at the base of each layer traversed
    pub path: Vec<Point>,

    /// Angle after each interface crossed, in radians
    pub angles: Vec<f64>,

    pub status: RayStatus,

    /// Human-readable explanation of the status
    pub message: String,
}

impl RayTrace {
    /// Number of interfaces the ray crossed.
    pub fn boundaries_crossed(&self) -> usize {
        self.angles.len()
    }

    /// Angle the ray left the trace with: the last refracted angle, or the
    /// launch angle if no interface was crossed.
    pub fn exit_angle(&self) -> f64 {
        self.angles.last().copied().unwrap_or(self.launch_angle)
    }

    /// Last point of the path.
    pub fn end_point(&self) -> Point {
        self.path.last().copied().unwrap_or(self.origin)
    }
}
