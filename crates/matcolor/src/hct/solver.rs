//! Solving for the sRGB color closest to a requested hue, chroma, and tone.
//!
//! The solver first tries Newton's method on CAM16 lightness J. If that does
//! not converge on an in-gamut color, the requested chroma exceeds the gamut
//! and the solver instead locates the target hue on the plane of constant
//! luminance Y cutting through the linear sRGB cube. It first bisects the
//! polygon formed by the plane's intersections with the cube's edges down to
//! a segment and then bisects that segment along each axis, using the planes
//! where 8-bit coordinates change as stops.

use std::f64::consts::{PI, TAU};

use crate::cam::ViewingConditions;
use crate::core::{
    argb_from_linrgb, argb_from_lstar, multiply, sanitize_degrees, signum, true_delinearized,
    y_from_lstar, Matrix,
};

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const SCALED_DISCOUNT_FROM_LINRGB: Matrix = [
    [ 0.001200833568784504,  0.002389694492170889,  0.0002795742885861124 ],
    [ 0.0005891086651375999, 0.0029785502573438758, 0.0003270666104008398 ],
    [ 0.00010146692491640572, 0.0005364214359186694, 0.0032979401770712076 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINRGB_FROM_SCALED_DISCOUNT: Matrix = [
    [  1373.2198709594231,  -1100.4251190754821,  -7.278681089101213 ],
    [  -271.815969077903,     559.6580465940733, -32.46047482791194  ],
    [     1.9622899599665666, -57.173814538844006, 308.7233197812385 ],
];

const Y_FROM_LINRGB: [f64; 3] = [0.2126, 0.7152, 0.0722];

type Point = [f64; 3];

// --------------------------------------------------------------------------------------------------------------------

#[inline]
fn sanitize_radians(angle: f64) -> f64 {
    (angle + 4.0 * TAU) % TAU
}

/// Determine the linear coordinate of the plane where the 8-bit coordinate
/// changes from `index` to `index + 1`.
#[inline]
fn critical_plane(index: f64) -> f64 {
    let normalized = (index + 0.5) / 255.0;
    if normalized <= 0.040449936 {
        normalized / 12.92 * 100.0
    } else {
        ((normalized + 0.055) / 1.055).powf(2.4) * 100.0
    }
}

#[inline]
fn chromatic_adaptation(component: f64) -> f64 {
    let af = component.abs().powf(0.42);
    signum(component) * 400.0 * af / (af + 27.13)
}

#[inline]
fn inverse_chromatic_adaptation(adapted: f64) -> f64 {
    let magnitude = adapted.abs();
    let base = (27.13 * magnitude / (400.0 - magnitude)).max(0.0);
    signum(adapted) * base.powf(1.0 / 0.42)
}

/// Compute the CAM16 hue in radians `-π..=π` of the linear sRGB color.
fn hue_of(linrgb: &Point) -> f64 {
    let [r, g, b] = multiply(&SCALED_DISCOUNT_FROM_LINRGB, linrgb);
    let ra = chromatic_adaptation(r);
    let ga = chromatic_adaptation(g);
    let ba = chromatic_adaptation(b);

    let a = (11.0 * ra - 12.0 * ga + ba) / 11.0;
    let b = (ra + ga - 2.0 * ba) / 9.0;
    b.atan2(a)
}

/// Determine whether `b` lies on the arc going counter-clockwise from `a` to
/// `c`.
#[inline]
fn are_in_cyclic_order(a: f64, b: f64, c: f64) -> bool {
    sanitize_radians(b - a) < sanitize_radians(c - a)
}

/// Find the point on the segment from source to target whose coordinate for
/// the axis has the given value.
fn set_coordinate(source: &Point, coordinate: f64, target: &Point, axis: usize) -> Point {
    let t = (coordinate - source[axis]) / (target[axis] - source[axis]);
    [
        source[0] + (target[0] - source[0]) * t,
        source[1] + (target[1] - source[1]) * t,
        source[2] + (target[2] - source[2]) * t,
    ]
}

#[inline]
fn is_bounded(x: f64) -> bool {
    (0.0..=100.0).contains(&x)
}

/// Get the n-th intersection of the plane with luminance Y and the edges of
/// the linear sRGB cube.
///
/// Each of the twelve edges of the cube fixes two coordinates at 0 or 100.
/// This function solves for the third coordinate and returns `None` if the
/// plane does not intersect the edge.
fn nth_vertex(y: f64, n: usize) -> Option<Point> {
    let [kr, kg, kb] = Y_FROM_LINRGB;
    let coordinate_a = if n % 4 <= 1 { 0.0 } else { 100.0 };
    let coordinate_b = if n % 2 == 0 { 0.0 } else { 100.0 };

    let point = if n < 4 {
        let (g, b) = (coordinate_a, coordinate_b);
        [(y - g * kg - b * kb) / kr, g, b]
    } else if n < 8 {
        let (b, r) = (coordinate_a, coordinate_b);
        [r, (y - r * kr - b * kb) / kg, b]
    } else {
        let (r, g) = (coordinate_a, coordinate_b);
        [r, g, (y - r * kr - g * kg) / kb]
    };

    point.iter().all(|c| is_bounded(*c)).then_some(point)
}

/// Find the two vertices of the constant luminance polygon that enclose the
/// target hue.
fn bisect_to_segment(y: f64, target_hue: f64) -> (Point, Point) {
    let mut segment: Option<(Point, f64, Point, f64)> = None;
    let mut uncut = true;

    for mid in (0..12).filter_map(|n| nth_vertex(y, n)) {
        let mid_hue = hue_of(&mid);

        let Some((left, left_hue, right, right_hue)) = segment.as_mut() else {
            segment = Some((mid, mid_hue, mid, mid_hue));
            continue;
        };

        if uncut || are_in_cyclic_order(*left_hue, mid_hue, *right_hue) {
            uncut = false;
            if are_in_cyclic_order(*left_hue, target_hue, mid_hue) {
                *right = mid;
                *right_hue = mid_hue;
            } else {
                *left = mid;
                *left_hue = mid_hue;
            }
        }
    }

    segment.map_or(([-1.0; 3], [-1.0; 3]), |(left, _, right, _)| (left, right))
}

/// Find the color on the gamut boundary with the target hue and luminance.
fn bisect_to_limit(y: f64, target_hue: f64) -> Point {
    let (mut left, mut right) = bisect_to_segment(y, target_hue);
    let mut left_hue = hue_of(&left);

    for axis in 0..3 {
        if left[axis] == right[axis] {
            continue;
        }

        let left_value = true_delinearized(left[axis]);
        let right_value = true_delinearized(right[axis]);
        let (mut left_plane, mut right_plane) = if left[axis] < right[axis] {
            ((left_value - 0.5).floor(), (right_value - 0.5).ceil())
        } else {
            ((left_value - 0.5).ceil(), (right_value - 0.5).floor())
        };

        for _ in 0..8 {
            if (right_plane - left_plane).abs() <= 1.0 {
                break;
            }

            let mid_plane = ((left_plane + right_plane) / 2.0).floor();
            let mid = set_coordinate(&left, critical_plane(mid_plane), &right, axis);
            let mid_hue = hue_of(&mid);

            if are_in_cyclic_order(left_hue, target_hue, mid_hue) {
                right = mid;
                right_plane = mid_plane;
            } else {
                left = mid;
                left_hue = mid_hue;
                left_plane = mid_plane;
            }
        }
    }

    [
        (left[0] + right[0]) / 2.0,
        (left[1] + right[1]) / 2.0,
        (left[2] + right[2]) / 2.0,
    ]
}

/// Solve for the color with the hue, chroma, and luminance Y by applying
/// Newton's method to CAM16 lightness J.
///
/// This function returns `None` if the color is out of gamut.
fn find_result_by_j(hue_radians: f64, chroma: f64, y: f64) -> Option<u32> {
    let vc = ViewingConditions::standard();

    // Initial estimate of J from Y
    let mut j = y.sqrt() * 11.0;

    let t_inner_coefficient = 1.0 / (1.64 - 0.29_f64.powf(vc.n())).powf(0.73);
    let e_hue = 0.25 * ((hue_radians + 2.0).cos() + 3.8);
    let p1 = e_hue * (50000.0 / 13.0) * vc.nc() * vc.ncb();
    let (h_sin, h_cos) = hue_radians.sin_cos();

    for round in 0..5 {
        let j_normalized = j / 100.0;
        let alpha = if chroma == 0.0 || j == 0.0 {
            0.0
        } else {
            chroma / j_normalized.sqrt()
        };
        let t = (alpha * t_inner_coefficient).powf(1.0 / 0.9);
        let ac = vc.aw() * j_normalized.powf(1.0 / vc.c() / vc.z());
        let p2 = ac / vc.nbb();
        let gamma =
            23.0 * (p2 + 0.305) * t / (23.0 * p1 + 11.0 * t * h_cos + 108.0 * t * h_sin);
        let a = gamma * h_cos;
        let b = gamma * h_sin;

        let ra = (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0;
        let ga = (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0;
        let ba = (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0;

        let scaled = [
            inverse_chromatic_adaptation(ra),
            inverse_chromatic_adaptation(ga),
            inverse_chromatic_adaptation(ba),
        ];
        let linrgb = multiply(&LINRGB_FROM_SCALED_DISCOUNT, &scaled);
        if linrgb.iter().any(|c| *c < 0.0) {
            return None;
        }

        let [kr, kg, kb] = Y_FROM_LINRGB;
        let fnj = kr * linrgb[0] + kg * linrgb[1] + kb * linrgb[2];
        if fnj <= 0.0 {
            return None;
        }

        if round == 4 || (fnj - y).abs() < 0.002 {
            if linrgb.iter().any(|c| 100.01 < *c) {
                return None;
            }
            return Some(argb_from_linrgb(&linrgb));
        }

        // Iterate with Newton's method, using 2 * fn(j) / j as the derivative
        j -= (fnj - y) * j / (2.0 * fnj);
    }

    None
}

/// Solve for the sRGB color with the hue, chroma, and tone.
///
/// If the requested chroma is out of gamut, this function returns the color
/// with the same hue and tone that has the highest chroma still in gamut. If
/// the chroma is negligible or the tone is at either extreme, it returns the
/// gray with the tone.
pub(crate) fn solve_to_argb(hue: f64, chroma: f64, tone: f64) -> u32 {
    if chroma < 0.0001 || !(0.0001..=99.9999).contains(&tone) {
        return argb_from_lstar(tone);
    }

    let hue_radians = sanitize_degrees(hue) / 180.0 * PI;
    let y = y_from_lstar(tone);

    find_result_by_j(hue_radians, chroma, y)
        .unwrap_or_else(|| argb_from_linrgb(&bisect_to_limit(y, hue_radians)))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::{assert_close_enough, linearized};

    #[test]
    fn test_critical_planes() {
        assert_close_enough!(critical_plane(0.0), 0.015176349177441876, 1e-12);
        assert_close_enough!(critical_plane(254.0), 99.5545, 1e-3);
        for index in 0..255_u8 {
            let plane = critical_plane(index as f64);
            assert!(linearized(index) < plane && plane < linearized(index + 1));
        }
    }

    #[test]
    fn test_vertices() {
        let y = y_from_lstar(50.0);
        let vertices: Vec<_> = (0..12).filter_map(|n| nth_vertex(y, n)).collect();
        assert!(3 <= vertices.len());
        for [r, g, b] in vertices {
            let [kr, kg, kb] = Y_FROM_LINRGB;
            assert_close_enough!(kr * r + kg * g + kb * b, y, 1e-9);
        }
    }

    #[test]
    fn test_extremes() {
        assert_eq!(solve_to_argb(120.0, 50.0, 0.0), 0xff000000);
        assert_eq!(solve_to_argb(120.0, 50.0, 100.0), 0xffffffff);
        let gray = solve_to_argb(120.0, 0.0, 50.0);
        assert_eq!(gray, argb_from_lstar(50.0));
    }
}
