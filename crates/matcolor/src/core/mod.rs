mod contrast;
mod conversion;
mod equality;
mod math;
mod string;

// contrast
pub use contrast::{darker, darker_unsafe, lighter, lighter_unsafe, ratio_of_tones};

// conversion
pub(crate) use conversion::{
    argb_from_linrgb, argb_from_lstar, argb_from_xyz, lab_from_argb, lstar_from_argb,
    true_delinearized, xyz_from_argb,
};
#[cfg(test)]
pub(crate) use conversion::{linearized, rgb_from_argb};
pub use conversion::{
    lstar_from_y, rgb_to_xyz_from_primaries, y_from_lstar, D65_CHROMATICITY, SRGB_PRIMARIES,
    WHITE_POINT_D65,
};

// equality
#[cfg(test)]
pub(crate) use equality::{assert_close_enough, is_close_enough, is_same_hue};

// math
pub use math::Matrix;
#[cfg(test)]
pub(crate) use math::{difference_degrees, multiply_matrices};
pub(crate) use math::{
    invert, lerp, multiply, sanitize_degrees, sanitize_degrees_int, signum, IDENTITY,
};

// string
pub(crate) use string::{format_rgb_hex, format_rgba_hex, parse_hex};
