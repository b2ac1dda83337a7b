// Re-export glam for convenience
pub use glam::*;

// Strata math types
mod angle;
mod interval;

pub use angle::{degrees_to_radians, max_value, min_value, radians_to_degrees, MathError, MathResult};
pub use interval::Interval;

/// A point in the vertical section plane (x horizontal, y vertical).
pub type Point = DVec2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creation() {
        let p = Point::new(43.74, -500.0);
        assert_eq!(p.x, 43.74);
        assert_eq!(p.y, -500.0);
    }

    #[test]
    fn test_point_operations() {
        let a = Point::new(1.0, -2.0);
        let b = Point::new(4.0, -5.0);
        assert_eq!(a + b, Point::new(5.0, -7.0));
    }
}
