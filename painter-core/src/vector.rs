/// Vector types and helpers shared by the whole pipeline
use nalgebra::{Vector2, Vector3};

/// A point or direction in model/world space
pub type Vec3 = Vector3<f64>;

/// A point in screen space
pub type Vec2 = Vector2<f64>;

/// Magnitudes below this are treated as zero when normalizing.
pub const UNIT_EPSILON: f64 = 1e-3;

/// Normalize `v`, returning the zero vector for near-zero input
/// instead of dividing by a vanishing length.
pub fn unit(v: &Vec3) -> Vec3 {
    let length = v.norm();
    if length < UNIT_EPSILON {
        return Vec3::zeros();
    }
    v / length
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn test_unit_has_length_one() {
        for v in [
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-0.002, 0.0, 0.0),
            Vec3::new(120.0, -7.5, 33.0),
        ] {
            assert_float_eq!(unit(&v).norm(), 1.0, abs <= 1e-12);
        }
    }

    #[test]
    fn test_unit_of_tiny_vector_is_zero() {
        assert_eq!(unit(&Vec3::new(0.0005, 0.0005, 0.0)), Vec3::zeros());
        assert_eq!(unit(&Vec3::zeros()), Vec3::zeros());
    }

    #[test]
    fn test_nan_propagates() {
        let v = unit(&Vec3::new(f64::NAN, 1.0, 1.0));
        // NaN length fails the epsilon check, so the division runs and spreads NaN
        assert!(v.x.is_nan() && v.y.is_nan());
    }
}
