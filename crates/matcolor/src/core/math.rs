/// A 3 by 3 matrix in row-major order.
pub type Matrix = [[f64; 3]; 3];

/// The identity matrix.
#[rustfmt::skip]
pub(crate) const IDENTITY: Matrix = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
];

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
pub(crate) fn multiply(matrix: &Matrix, vector: &[f64; 3]) -> [f64; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

/// Multiply the two 3 by 3 matrices with each other.
#[cfg(test)]
pub(crate) fn multiply_matrices(left: &Matrix, right: &Matrix) -> Matrix {
    let mut result = [[0.0; 3]; 3];
    for (row, result_row) in result.iter_mut().enumerate() {
        for (column, cell) in result_row.iter_mut().enumerate() {
            *cell = left[row][0].mul_add(
                right[0][column],
                left[row][1].mul_add(right[1][column], left[row][2] * right[2][column]),
            );
        }
    }
    result
}

/// Scale each column of the matrix by the corresponding vector element.
pub(crate) fn scale_columns(matrix: &Matrix, factors: &[f64; 3]) -> Matrix {
    let mut result = *matrix;
    for row in result.iter_mut() {
        for (cell, factor) in row.iter_mut().zip(factors) {
            *cell *= factor;
        }
    }
    result
}

/// Invert the 3 by 3 matrix.
///
/// This function computes the inverse through the adjugate. It returns `None`
/// for singular matrices, whose determinant is zero.
pub(crate) fn invert(matrix: &Matrix) -> Option<Matrix> {
    let [[a, b, c], [d, e, f], [g, h, i]] = *matrix;

    let cofactor1 = e * i - f * h;
    let cofactor2 = f * g - d * i;
    let cofactor3 = d * h - e * g;

    let determinant = a * cofactor1 + b * cofactor2 + c * cofactor3;
    if determinant == 0.0 || !determinant.is_finite() {
        return None;
    }

    let inverse = determinant.recip();
    Some([
        [
            cofactor1 * inverse,
            (c * h - b * i) * inverse,
            (b * f - c * e) * inverse,
        ],
        [
            cofactor2 * inverse,
            (a * i - c * g) * inverse,
            (c * d - a * f) * inverse,
        ],
        [
            cofactor3 * inverse,
            (b * g - a * h) * inverse,
            (a * e - b * d) * inverse,
        ],
    ])
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine the sign of the number as -1, 0, or 1.
///
/// Unlike [`f64::signum`], this function maps both zeros to zero.
#[inline]
pub(crate) fn signum(value: f64) -> f64 {
    if value < 0.0 {
        -1.0
    } else if value == 0.0 {
        0.0
    } else {
        1.0
    }
}

/// Linearly interpolate between start and stop.
#[inline]
pub(crate) fn lerp(start: f64, stop: f64, amount: f64) -> f64 {
    (1.0 - amount) * start + amount * stop
}

/// Normalize the angle in degrees to `0..360`.
#[inline]
pub(crate) fn sanitize_degrees(degrees: f64) -> f64 {
    let degrees = degrees % 360.0;
    if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

/// Normalize the integral angle in degrees to `0..360`.
#[inline]
pub(crate) fn sanitize_degrees_int(degrees: i32) -> i32 {
    degrees.rem_euclid(360)
}

/// Determine the shorter angular distance between two hues in degrees.
#[cfg(test)]
pub(crate) fn difference_degrees(a: f64, b: f64) -> f64 {
    180.0 - ((a - b).abs() - 180.0).abs()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::assert_close_enough;

    #[test]
    fn test_invert() {
        #[rustfmt::skip]
        let matrix: Matrix = [
            [ 2.0, -1.0,  0.0],
            [-1.0,  2.0, -1.0],
            [ 0.0, -1.0,  2.0],
        ];

        let inverse = invert(&matrix).unwrap();
        let product = multiply_matrices(&matrix, &inverse);
        for (row, expected_row) in product.iter().zip(IDENTITY.iter()) {
            for (cell, expected) in row.iter().zip(expected_row) {
                assert_close_enough!(*cell, *expected, 1e-12);
            }
        }

        assert_eq!(invert(&[[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 0.0, 1.0]]), None);
    }

    #[test]
    fn test_degrees() {
        assert_eq!(sanitize_degrees(-30.0), 330.0);
        assert_eq!(sanitize_degrees(725.0), 5.0);
        assert_eq!(sanitize_degrees_int(-1), 359);
        assert_eq!(sanitize_degrees_int(360), 0);
        assert_eq!(difference_degrees(350.0, 10.0), 20.0);
        assert_eq!(signum(-0.0), 0.0);
        assert_eq!(lerp(0.59, 0.69, 1.0), 0.69);
    }
}
