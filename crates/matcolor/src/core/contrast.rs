use super::conversion::{lstar_from_y, y_from_lstar};

/// The tolerance for accepting a computed contrast ratio below the requested
/// one.
const RATIO_EPSILON: f64 = 0.04;

/// The tone offset applied to results, which compensates for rounding when
/// converting back to 8-bit sRGB.
const TONE_OFFSET: f64 = 0.4;

/// Compute the contrast ratio of two relative luminances in `0..=100`.
#[inline]
pub(crate) fn ratio_of_ys(y1: f64, y2: f64) -> f64 {
    let lighter = y1.max(y2);
    let darker = y1.min(y2);
    (lighter + 5.0) / (darker + 5.0)
}

/// Compute the contrast ratio of two tones.
///
/// The result ranges from 1 for identical tones to 21 for black and white.
/// Tones outside `0..=100` are clamped.
pub fn ratio_of_tones(tone1: f64, tone2: f64) -> f64 {
    ratio_of_ys(
        y_from_lstar(tone1.clamp(0.0, 100.0)),
        y_from_lstar(tone2.clamp(0.0, 100.0)),
    )
}

/// Find the tone lighter than the given one with at least the given contrast
/// ratio.
///
/// This function returns -1 if the tone is out of bounds or no such tone
/// exists.
pub fn lighter(tone: f64, ratio: f64) -> f64 {
    if !(0.0..=100.0).contains(&tone) {
        return -1.0;
    }

    let dark_y = y_from_lstar(tone);
    let light_y = ratio * (dark_y + 5.0) - 5.0;
    let actual = ratio_of_ys(light_y, dark_y);
    if actual < ratio && RATIO_EPSILON < (actual - ratio).abs() {
        return -1.0;
    }

    let result = lstar_from_y(light_y) + TONE_OFFSET;
    if (0.0..=100.0).contains(&result) {
        result
    } else {
        -1.0
    }
}

/// Find the tone darker than the given one with at least the given contrast
/// ratio.
///
/// This function returns -1 if the tone is out of bounds or no such tone
/// exists.
pub fn darker(tone: f64, ratio: f64) -> f64 {
    if !(0.0..=100.0).contains(&tone) {
        return -1.0;
    }

    let light_y = y_from_lstar(tone);
    let dark_y = (light_y + 5.0) / ratio - 5.0;
    let actual = ratio_of_ys(light_y, dark_y);
    if actual < ratio && RATIO_EPSILON < (actual - ratio).abs() {
        return -1.0;
    }

    let result = lstar_from_y(dark_y) - TONE_OFFSET;
    if (0.0..=100.0).contains(&result) {
        result
    } else {
        -1.0
    }
}

/// Find a lighter tone like [`lighter`] but fall back on white (100).
pub fn lighter_unsafe(tone: f64, ratio: f64) -> f64 {
    let result = lighter(tone, ratio);
    if result < 0.0 {
        100.0
    } else {
        result
    }
}

/// Find a darker tone like [`darker`] but fall back on black (0).
pub fn darker_unsafe(tone: f64, ratio: f64) -> f64 {
    darker(tone, ratio).max(0.0)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::assert_close_enough;

    #[test]
    fn test_ratio() {
        assert_close_enough!(ratio_of_tones(0.0, 100.0), 21.0, 1e-9);
        assert_close_enough!(ratio_of_tones(100.0, 0.0), 21.0, 1e-9);
        assert_close_enough!(ratio_of_tones(-10.0, 120.0), 21.0, 1e-9);
        assert_close_enough!(ratio_of_tones(50.0, 50.0), 1.0, 1e-9);
    }

    #[test]
    fn test_lighter_and_darker() {
        let tone = lighter(20.0, 4.5);
        assert!(20.0 < tone && tone <= 100.0);
        assert!(ratio_of_tones(20.0, tone) >= 4.5);

        let tone = darker(90.0, 4.5);
        assert!(0.0 <= tone && tone < 90.0);
        assert!(ratio_of_tones(90.0, tone) >= 4.5);

        assert_eq!(lighter(90.0, 21.0), -1.0);
        assert_eq!(darker(10.0, 21.0), -1.0);
        assert_eq!(lighter(-1.0, 3.0), -1.0);
        assert_eq!(lighter_unsafe(90.0, 21.0), 100.0);
        assert_eq!(darker_unsafe(10.0, 21.0), 0.0);
    }
}
