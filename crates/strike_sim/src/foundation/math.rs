//! Math utilities and types
//!
//! Provides the fundamental 2-D math types used by the simulation.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Compute the Euclidean distance between two positions
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).magnitude()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_three_four_five() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert_relative_eq!(distance(a, b), 5.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Vec2::new(-2.0, 7.5);
        let b = Vec2::new(10.0, -1.25);
        assert_relative_eq!(distance(a, b), distance(b, a));
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = Vec2::new(123.0, -456.0);
        assert_relative_eq!(distance(a, a), 0.0);
    }
}
