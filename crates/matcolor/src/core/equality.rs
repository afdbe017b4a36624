/// Test macro for asserting the approximate equality of floating point numbers.
///
/// The optional third argument is the absolute tolerance, which defaults to
/// `1e-4`. Not-a-number never is close enough to anything.
///
/// # Panics
///
/// This macro panics if the two numbers differ by more than the tolerance. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[cfg(test)]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        $crate::core::assert_close_enough!($f1, $f2, 1e-4)
    };
    ($f1:expr, $f2:expr, $tolerance:expr $(,)?) => {{
        let (f1, f2, tolerance): (f64, f64, f64) = ($f1, $f2, $tolerance);
        assert!(
            $crate::core::is_close_enough(f1, f2, tolerance),
            "quantities differ by more than {}:\n{:?}\n{:?}",
            tolerance,
            f1,
            f2
        );
    }};
}

#[cfg(test)]
pub(crate) use assert_close_enough;

/// Determine whether the two numbers differ by at most the tolerance.
#[cfg(test)]
#[inline]
pub(crate) fn is_close_enough(f1: f64, f2: f64, tolerance: f64) -> bool {
    (f1 - f2).abs() <= tolerance
}

/// Determine whether two hues in degrees are within the tolerance, taking the
/// wrap-around at 360º into account.
#[cfg(test)]
#[inline]
pub(crate) fn is_same_hue(h1: f64, h2: f64, tolerance: f64) -> bool {
    crate::core::difference_degrees(h1, h2) <= tolerance
}

#[cfg(test)]
mod test {
    use super::{is_close_enough, is_same_hue};

    #[test]
    fn test_close_enough() {
        assert!(is_close_enough(1.0, 1.00005, 1e-4));
        assert!(!is_close_enough(1.0, 1.0002, 1e-4));
        assert!(!is_close_enough(f64::NAN, f64::NAN, 1.0));
        assert!(is_same_hue(359.95, 0.02, 0.1));
        assert!(!is_same_hue(180.0, 0.0, 0.1));
    }
}
