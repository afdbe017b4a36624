use std::f64::consts::PI;
use std::sync::OnceLock;

use crate::core::{invert, lerp, multiply, y_from_lstar, Matrix, IDENTITY, WHITE_POINT_D65};

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const XYZ_TO_CAM16RGB: Matrix = [
    [  0.401288, 0.650173, -0.051461 ],
    [ -0.250268, 1.204414,  0.045854 ],
    [ -0.002079, 0.048952,  0.953127 ],
];

/// Get the matrix for converting CAM16 RGB back to XYZ.
pub(crate) fn cam16rgb_to_xyz() -> &'static Matrix {
    static MATRIX: OnceLock<Matrix> = OnceLock::new();
    MATRIX.get_or_init(|| invert(&XYZ_TO_CAM16RGB).unwrap_or(IDENTITY))
}

/// The adaptation state for computing CAM16 correlates.
///
/// Viewing conditions capture the white point, the adapting luminance, the
/// lightness of the background, the surround, and whether the illuminant is
/// discounted. Since they only depend on these parameters, the values computed
/// from them are calculated once, upon creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewingConditions {
    n: f64,
    aw: f64,
    nbb: f64,
    ncb: f64,
    c: f64,
    nc: f64,
    rgb_d: [f64; 3],
    fl: f64,
    fl_root: f64,
    z: f64,
}

impl ViewingConditions {
    /// Create new viewing conditions.
    ///
    /// The white point is in XYZ with Y = 100. The adapting luminance is in
    /// cd/m². The background lightness is a CIE L* and clamped to a minimum of
    /// 0.1. The surround ranges from 0 (dark) over 1 (dim) to 2 (average).
    pub fn new(
        white_point: [f64; 3],
        adapting_luminance: f64,
        background_lstar: f64,
        surround: f64,
        discount_illuminant: bool,
    ) -> Self {
        let background_lstar = background_lstar.max(0.1);

        let rgb_w = multiply(&XYZ_TO_CAM16RGB, &white_point);

        let f = 0.8 + surround / 10.0;
        let c = if 0.9 <= f {
            lerp(0.59, 0.69, (f - 0.9) * 10.0)
        } else {
            lerp(0.525, 0.59, (f - 0.8) * 10.0)
        };

        let d = if discount_illuminant {
            1.0
        } else {
            f * (1.0 - (1.0 / 3.6) * ((-adapting_luminance - 42.0) / 92.0).exp())
        };
        let d = d.clamp(0.0, 1.0);

        let nc = f;
        let rgb_d = [
            d * (100.0 / rgb_w[0]) + 1.0 - d,
            d * (100.0 / rgb_w[1]) + 1.0 - d,
            d * (100.0 / rgb_w[2]) + 1.0 - d,
        ];

        let k = 1.0 / (5.0 * adapting_luminance + 1.0);
        let k4 = k * k * k * k;
        let k4f = 1.0 - k4;
        let fl = k4 * adapting_luminance + 0.1 * k4f * k4f * (5.0 * adapting_luminance).cbrt();

        let n = y_from_lstar(background_lstar) / white_point[1];
        let z = 1.48 + n.sqrt();
        let nbb = 0.725 / n.powf(0.2);
        let ncb = nbb;

        let adapted = |index: usize| (fl * rgb_d[index] * rgb_w[index] / 100.0).powf(0.42);
        let response = |index: usize| {
            let af = adapted(index);
            400.0 * af / (af + 27.13)
        };
        let [ra, ga, ba] = [response(0), response(1), response(2)];
        let aw = (2.0 * ra + ga + 0.05 * ba) * nbb;

        Self {
            n,
            aw,
            nbb,
            ncb,
            c,
            nc,
            rgb_d,
            fl,
            fl_root: fl.powf(0.25),
            z,
        }
    }

    /// Create viewing conditions with default parameters but the given
    /// background lightness.
    pub fn with_background_lstar(background_lstar: f64) -> Self {
        Self::new(
            WHITE_POINT_D65,
            200.0 / PI * y_from_lstar(50.0) / 100.0,
            background_lstar,
            2.0,
            false,
        )
    }

    /// Get the default viewing conditions.
    ///
    /// They have D65 as white point, the luminance of a mid-gray background as
    /// adapting luminance, L* = 50 as background, an average surround, and do
    /// not discount the illuminant. The instance is created on first use and
    /// lives for the rest of the process.
    pub fn standard() -> &'static Self {
        static STANDARD: OnceLock<ViewingConditions> = OnceLock::new();
        STANDARD.get_or_init(|| Self::with_background_lstar(50.0))
    }

    /// Get the background induction factor.
    pub fn n(&self) -> f64 {
        self.n
    }

    /// Get the achromatic response to the white point.
    pub fn aw(&self) -> f64 {
        self.aw
    }

    /// Get the brightness background induction factor.
    pub fn nbb(&self) -> f64 {
        self.nbb
    }

    /// Get the chromatic background induction factor.
    pub fn ncb(&self) -> f64 {
        self.ncb
    }

    /// Get the impact of the surround.
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Get the chromatic induction factor.
    pub fn nc(&self) -> f64 {
        self.nc
    }

    /// Get the per-channel discounting factors.
    pub fn rgb_d(&self) -> [f64; 3] {
        self.rgb_d
    }

    /// Get the luminance-level adaptation factor.
    pub fn fl(&self) -> f64 {
        self.fl
    }

    /// Get the fourth root of the luminance-level adaptation factor.
    pub fn fl_root(&self) -> f64 {
        self.fl_root
    }

    /// Get the base exponential nonlinearity.
    pub fn z(&self) -> f64 {
        self.z
    }
}

impl Default for ViewingConditions {
    fn default() -> Self {
        *Self::standard()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::{assert_close_enough, multiply_matrices};

    #[test]
    fn test_standard() {
        let vc = ViewingConditions::standard();
        assert_close_enough!(vc.n(), 0.18418651851244416);
        assert_close_enough!(vc.aw(), 29.980997194447333);
        assert_close_enough!(vc.nbb(), 1.0169191804458755);
        assert_close_enough!(vc.ncb(), 1.0169191804458755);
        assert_close_enough!(vc.c(), 0.69);
        assert_close_enough!(vc.nc(), 1.0);
        assert_close_enough!(vc.fl(), 0.3884814537800353);
        assert_close_enough!(vc.fl_root(), 0.7894826179304937);
        assert_close_enough!(vc.z(), 1.909169568483652);

        let [r, g, b] = vc.rgb_d();
        assert_close_enough!(r, 1.02117770275752);
        assert_close_enough!(g, 0.9863077294280124);
        assert_close_enough!(b, 0.9339605082802299);

        assert!(std::ptr::eq(vc, ViewingConditions::standard()));
        assert_eq!(ViewingConditions::default(), *vc);
    }

    #[test]
    fn test_background() {
        let vc = ViewingConditions::with_background_lstar(0.0);
        assert_eq!(vc, ViewingConditions::with_background_lstar(0.1));

        let dark = ViewingConditions::new(WHITE_POINT_D65, 11.72, 20.0, 0.0, false);
        assert_close_enough!(dark.c(), 0.525);
        assert!(dark.n() < ViewingConditions::standard().n());

        let discounted = ViewingConditions::new(WHITE_POINT_D65, 11.72, 50.0, 2.0, true);
        let [r, g, b] = discounted.rgb_d();
        assert!(1.0 < r && g < 1.0 && b < 1.0);
    }

    #[test]
    fn test_cam16_matrix() {
        let product = multiply_matrices(&XYZ_TO_CAM16RGB, cam16rgb_to_xyz());
        for (row, expected_row) in product.iter().zip(IDENTITY.iter()) {
            for (cell, expected) in row.iter().zip(expected_row) {
                assert_close_enough!(*cell, *expected, 1e-9);
            }
        }
    }
}
