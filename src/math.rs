//! Math utility functions.

use euclid::default::Vector3D;
use num_traits::Float;

use crate::color::{Component, Components};

type Vector = Vector3D<Component>;

/// Returns true if the value is too small to be distinguished from zero.
pub fn almost_zero<T: Float>(value: T) -> bool {
    value.abs() < T::epsilon()
}

/// Clamp a value to the range 0 to 1. NaN becomes 0.
pub fn clamp_unit<T: Float>(value: T) -> T {
    if value.is_nan() {
        T::zero()
    } else {
        value.max(T::zero()).min(T::one())
    }
}

/// Weighted sum of the three components.
pub fn weighted_sum(components: &Components, weights: &Components) -> Component {
    let Components(x, y, z) = *components;
    let Components(wx, wy, wz) = *weights;
    Vector::new(x, y, z).dot(Vector::new(wx, wy, wz))
}

/// Round to the given number of decimal places, the way a fixed point
/// decimal string would be written.
pub fn round_to(value: Component, places: usize) -> Component {
    format_fixed(value, places).parse().unwrap_or(value)
}

/// Format a value with exactly the given number of decimal places.
pub fn format_fixed(value: Component, places: usize) -> String {
    format!("{:.*}", places, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_sum_is_a_dot_product() {
        let sum = weighted_sum(&Components(1.0, 2.0, 3.0), &Components(0.5, 0.25, 2.0));
        assert_eq!(sum, 7.0);
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(4.478089453577214, 2), 4.48);
        assert_eq!(round_to(21.0, 2), 21.0);
        assert_eq!(round_to(106.04223, 3), 106.042);
        assert_eq!(format_fixed(1.0, 2), "1.00");
        assert_eq!(format_fixed(15.3012, 2), "15.30");
    }

    #[test]
    fn clamping() {
        assert_eq!(clamp_unit(1.5), 1.0);
        assert_eq!(clamp_unit(-0.5), 0.0);
        assert_eq!(clamp_unit(Component::NAN), 0.0);
        assert!(almost_zero(0.0));
        assert!(!almost_zero(0.001));
    }
}
