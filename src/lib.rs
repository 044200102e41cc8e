mod certora;
mod error;
mod number;

use std::ops::Add;

pub use error::{Error, Result};
pub use number::Number;

/// Adds two numbers together.
/// Returns whatever `A + B` produces; overflow and rounding follow the operand type
/// (e.g. `u64` panics on overflow in debug builds and wraps in release builds).
pub fn add<A, B>(a: A, b: B) -> A::Output
where
    A: Add<B>,
{
    a + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_positive() {
        assert_eq!(add(5i64, 3i64), 8);
    }

    #[test]
    fn test_add_negative() {
        assert_eq!(add(-5i64, -3i64), -8);
    }

    #[test]
    fn test_add_mixed() {
        assert_eq!(add(10i64, -5i64), 5);
    }

    #[test]
    fn test_add_zero() {
        assert_eq!(add(0i64, 5i64), 5);
        assert_eq!(add(5i64, 0i64), 5);
    }

    #[test]
    fn test_add_commutes() {
        for (a, b) in [(5i64, 3i64), (-5, -3), (10, -5), (0, 5), (i64::MAX, 0)] {
            assert_eq!(add(a, b), add(b, a));
        }
    }

    #[test]
    fn test_add_floats() {
        assert_eq!(add(1.5f64, 2.25f64), 3.75);
        assert_eq!(add(-0.5f64, 0.5f64), 0.0);
    }

    #[test]
    fn test_add_large_numbers() {
        assert_eq!(add(u64::MAX - 1, 1u64), u64::MAX);
    }

    #[test]
    fn test_add_numbers_promotes() {
        let sum = add(Number::from(5i64), Number::from(0.5f64));
        assert!(sum.is_float());
        assert_eq!(sum, Number::Float(5.5));

        let sum = add(Number::from(5i64), Number::from(3i64));
        assert!(sum.is_int());
        assert_eq!(sum, Number::Int(8));
    }
}
