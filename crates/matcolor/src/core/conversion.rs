use std::sync::OnceLock;

use super::math::{invert, multiply, scale_columns, Matrix, IDENTITY};

// --------------------------------------------------------------------------------------------------------------------
// Packed ARGB

/// Pack the 24-bit RGB coordinates into an opaque ARGB integer.
#[inline]
pub(crate) const fn argb_from_rgb(r: u8, g: u8, b: u8) -> u32 {
    0xff00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Unpack the ARGB integer into its 24-bit RGB coordinates.
#[inline]
pub(crate) const fn rgb_from_argb(argb: u32) -> [u8; 3] {
    [(argb >> 16) as u8, (argb >> 8) as u8, argb as u8]
}

// --------------------------------------------------------------------------------------------------------------------
// Transfer function

/// Convert the gamma-corrected sRGB coordinate to linear sRGB.
///
/// The result ranges `0..=100`, matching the scale of XYZ.
#[inline]
pub(crate) fn linearized(component: u8) -> f64 {
    let normalized = component as f64 / 255.0;
    if normalized <= 0.040449936 {
        normalized / 12.92 * 100.0
    } else {
        ((normalized + 0.055) / 1.055).powf(2.4) * 100.0
    }
}

/// Convert the linear sRGB coordinate in `0..=100` to the gamma-corrected
/// coordinate in `0..=255` without rounding or clamping.
#[inline]
pub(crate) fn true_delinearized(component: f64) -> f64 {
    let normalized = component / 100.0;
    let delinearized = if normalized <= 0.0031308 {
        normalized * 12.92
    } else {
        1.055 * normalized.powf(1.0 / 2.4) - 0.055
    };
    delinearized * 255.0
}

/// Convert the linear sRGB coordinate in `0..=100` to a gamma-corrected
/// 8-bit coordinate, rounding and clamping as necessary.
#[inline]
pub(crate) fn delinearized(component: f64) -> u8 {
    true_delinearized(component).round().clamp(0.0, 255.0) as u8
}

// --------------------------------------------------------------------------------------------------------------------
// XYZ

/// The D65 white point with Y normalized to 100.
pub const WHITE_POINT_D65: [f64; 3] = [95.047, 100.0, 108.883];

/// The chromaticity of the D65 white point.
pub const D65_CHROMATICITY: [f64; 2] = [0.31272, 0.32903];

/// The chromaticities of the sRGB red, green, and blue primaries.
pub const SRGB_PRIMARIES: [[f64; 2]; 3] = [[0.64, 0.33], [0.30, 0.60], [0.15, 0.06]];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const SRGB_TO_XYZ: Matrix = [
    [ 0.41233895, 0.35762064, 0.18051042 ],
    [ 0.2126,     0.7152,     0.0722     ],
    [ 0.01932141, 0.11916382, 0.95034478 ],
];

/// Get the matrix for converting XYZ to linear sRGB.
///
/// The matrix is the inverse of the sRGB to XYZ matrix and computed on first
/// use.
pub(crate) fn xyz_to_srgb() -> &'static Matrix {
    static MATRIX: OnceLock<Matrix> = OnceLock::new();
    MATRIX.get_or_init(|| invert(&SRGB_TO_XYZ).unwrap_or(IDENTITY))
}

/// Derive the matrix for converting linear RGB to XYZ from the chromaticities
/// of the RGB primaries and the white point.
///
/// The resulting matrix maps white `[1, 1, 1]` to the white point with Y
/// equal to 100. It returns `None` if the primaries are collinear.
pub fn rgb_to_xyz_from_primaries(primaries: &[[f64; 2]; 3], white: &[f64; 2]) -> Option<Matrix> {
    #[inline]
    fn to_xyz(chromaticity: &[f64; 2]) -> [f64; 3] {
        let [x, y] = *chromaticity;
        [x / y, 1.0, (1.0 - x - y) / y]
    }

    let [red, green, blue] = [
        to_xyz(&primaries[0]),
        to_xyz(&primaries[1]),
        to_xyz(&primaries[2]),
    ];
    let matrix = [
        [red[0], green[0], blue[0]],
        [red[1], green[1], blue[1]],
        [red[2], green[2], blue[2]],
    ];

    let [wx, wy, wz] = to_xyz(white);
    let scale = multiply(&invert(&matrix)?, &[100.0 * wx, 100.0 * wy, 100.0 * wz]);
    Some(scale_columns(&matrix, &scale))
}

/// Convert the ARGB integer to XYZ.
pub(crate) fn xyz_from_argb(argb: u32) -> [f64; 3] {
    let [r, g, b] = rgb_from_argb(argb);
    multiply(&SRGB_TO_XYZ, &[linearized(r), linearized(g), linearized(b)])
}

/// Convert the linear sRGB coordinates in `0..=100` to an opaque ARGB integer.
pub(crate) fn argb_from_linrgb(linrgb: &[f64; 3]) -> u32 {
    argb_from_rgb(
        delinearized(linrgb[0]),
        delinearized(linrgb[1]),
        delinearized(linrgb[2]),
    )
}

/// Convert the XYZ coordinates to an opaque ARGB integer, clamping out-of-gamut
/// coordinates.
pub(crate) fn argb_from_xyz(xyz: &[f64; 3]) -> u32 {
    argb_from_linrgb(&multiply(xyz_to_srgb(), xyz))
}

// --------------------------------------------------------------------------------------------------------------------
// CIE L* and CIELAB

const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn lab_inv_f(ft: f64) -> f64 {
    let ft3 = ft * ft * ft;
    if ft3 > EPSILON {
        ft3
    } else {
        (116.0 * ft - 16.0) / KAPPA
    }
}

/// Convert CIE L* to the relative luminance Y in `0..=100`.
#[inline]
pub fn y_from_lstar(lstar: f64) -> f64 {
    100.0 * lab_inv_f((lstar + 16.0) / 116.0)
}

/// Convert the relative luminance Y in `0..=100` to CIE L*.
#[inline]
pub fn lstar_from_y(y: f64) -> f64 {
    lab_f(y / 100.0) * 116.0 - 16.0
}

/// Compute the CIE L* of the ARGB integer.
pub(crate) fn lstar_from_argb(argb: u32) -> f64 {
    lstar_from_y(xyz_from_argb(argb)[1])
}

/// Compute the opaque gray ARGB integer with the given CIE L*.
pub(crate) fn argb_from_lstar(lstar: f64) -> u32 {
    let component = delinearized(y_from_lstar(lstar));
    argb_from_rgb(component, component, component)
}

/// Convert the ARGB integer to CIELAB under D65.
pub(crate) fn lab_from_argb(argb: u32) -> [f64; 3] {
    let [x, y, z] = xyz_from_argb(argb);
    let fx = lab_f(x / WHITE_POINT_D65[0]);
    let fy = lab_f(y / WHITE_POINT_D65[1]);
    let fz = lab_f(z / WHITE_POINT_D65[2]);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}
