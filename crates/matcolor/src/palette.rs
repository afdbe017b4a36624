//! Tonal palettes and the key colors they are built around.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::hct::Hct;
use crate::rgb::StandardRgb;

/// A chroma exceeding that of any sRGB color, which makes the solver return
/// the most chromatic color at a hue and tone.
const MAX_CHROMA: f64 = 200.0;

/// The tone towards which the key color search gravitates.
const PIVOT_TONE: u8 = 50;

const CHROMA_EPSILON: f64 = 0.01;

/// The search for a tonal palette's key color.
///
/// The key color has the requested hue and, among the tones whose maximum
/// chroma is sufficient for the requested chroma, the tone closest to 50. If
/// no tone is sufficient, the search converges on the tone with the highest
/// maximum chroma.
#[derive(Debug)]
pub struct KeyColor {
    hue: f64,
    requested_chroma: f64,
    max_chroma_by_tone: RefCell<HashMap<u8, f64>>,
}

impl KeyColor {
    /// Create a new key color search.
    pub fn new(hue: f64, requested_chroma: f64) -> Self {
        Self {
            hue,
            requested_chroma,
            max_chroma_by_tone: RefCell::new(HashMap::new()),
        }
    }

    /// Determine the maximum chroma achievable for the hue at the tone.
    fn max_chroma(&self, tone: u8) -> f64 {
        *self
            .max_chroma_by_tone
            .borrow_mut()
            .entry(tone)
            .or_insert_with(|| Hct::new(self.hue, MAX_CHROMA, tone as f64).chroma())
    }

    /// Find the key color.
    pub fn create(&self) -> Hct {
        self.search(|_| ())
    }

    /// Find the key color, invoking the callback with each tone tried by the
    /// binary search.
    fn search<F>(&self, mut on_step: F) -> Hct
    where
        F: FnMut(u8),
    {
        let mut lower = 0_u8;
        let mut upper = 100_u8;

        while lower < upper {
            let mid = (lower + upper) / 2;
            on_step(mid);

            let is_ascending = self.max_chroma(mid) < self.max_chroma(mid + 1);
            let is_sufficient = self.requested_chroma - CHROMA_EPSILON <= self.max_chroma(mid);

            if is_sufficient {
                // Bias towards the pivot tone
                if lower.abs_diff(PIVOT_TONE) < upper.abs_diff(PIVOT_TONE) {
                    upper = mid;
                } else {
                    if lower == mid {
                        return self.found(lower);
                    }
                    lower = mid;
                }
            } else if is_ascending {
                lower = mid + 1;
            } else {
                upper = mid;
            }
        }

        self.found(lower)
    }

    fn found(&self, tone: u8) -> Hct {
        tracing::trace!(
            hue = self.hue,
            chroma = self.requested_chroma,
            tone,
            "found key color"
        );
        Hct::new(self.hue, self.requested_chroma, tone as f64)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A hue and chroma realized at different tones.
///
/// A tonal palette memoizes the colors for the tones it has been asked for.
/// Two palettes with the same hue and chroma produce the same colors.
#[derive(Clone, Debug)]
pub struct TonalPalette {
    hue: f64,
    chroma: f64,
    key_color: Hct,
    cache: RefCell<HashMap<u8, u32>>,
}

impl TonalPalette {
    /// The canonical tones of a tonal palette.
    pub const TONES: [u8; 13] = [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 95, 99, 100];

    fn with_key_color(hue: f64, chroma: f64, key_color: Hct) -> Self {
        Self {
            hue,
            chroma,
            key_color,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Create a new tonal palette for the seed color.
    ///
    /// The palette takes its hue and chroma from the key color found for the
    /// seed's hue and chroma, not from the seed itself.
    pub fn from_rgb(seed: StandardRgb) -> Self {
        Self::from_argb(seed.to_argb())
    }

    /// Create a new tonal palette for the packed ARGB seed color.
    pub fn from_argb(seed: u32) -> Self {
        let seed = Hct::from_argb(seed);
        let key_color = KeyColor::new(seed.hue(), seed.chroma()).create();
        Self::with_key_color(key_color.hue(), key_color.chroma(), key_color)
    }

    /// Create a new tonal palette with the hue and chroma.
    pub fn from_hue_and_chroma(hue: f64, chroma: f64) -> Self {
        Self::with_key_color(hue, chroma, KeyColor::new(hue, chroma).create())
    }

    /// Create a new tonal palette with the color's hue and chroma and the
    /// color as key color.
    pub fn from_hct(hct: Hct) -> Self {
        Self::with_key_color(hct.hue(), hct.chroma(), hct)
    }

    /// Get the hue.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Get the chroma.
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// Get the key color.
    pub fn key_color(&self) -> &Hct {
        &self.key_color
    }

    /// Get the packed ARGB color with the tone.
    pub fn tone(&self, tone: u8) -> u32 {
        *self
            .cache
            .borrow_mut()
            .entry(tone)
            .or_insert_with(|| Hct::new(self.hue, self.chroma, tone as f64).to_argb())
    }

    /// Get the sRGB color with the tone.
    pub fn get_color(&self, tone: u8) -> StandardRgb {
        StandardRgb::from_argb(self.tone(tone))
    }

    /// Get the color with the fractional tone.
    ///
    /// Unlike [`TonalPalette::tone`], this method does not memoize its results.
    pub fn hct(&self, tone: f64) -> Hct {
        Hct::new(self.hue, self.chroma, tone)
    }
}

#[cfg(test)]
mod test {
    use super::{KeyColor, TonalPalette};
    use crate::core::{assert_close_enough, is_same_hue};
    use crate::rgb::StandardRgb;

    #[test]
    fn test_key_color_sequence() {
        let mut tones = Vec::new();
        let key = KeyColor::new(50.0, 3.0).search(|tone| tones.push(tone));
        assert_eq!(tones, vec![50, 75, 62, 56, 53, 51, 50]);
        assert_close_enough!(key.tone(), 50.0, 0.5);
        assert_close_enough!(key.chroma(), 3.0, 0.5);
    }

    #[test]
    fn test_key_color_peak_sequence() {
        // No tone reaches chroma 200, so every step climbs towards the peak.
        let search = KeyColor::new(149.0, 200.0);
        let mut tones = Vec::new();
        let key = search.search(|tone| tones.push(tone));
        assert_eq!(&tones[..2], &[50, 75]);

        let (mut lower, mut upper) = (0_u8, 100_u8);
        for &mid in &tones {
            assert_eq!(mid, (lower + upper) / 2);
            assert!(search.max_chroma(mid) < 200.0 - super::CHROMA_EPSILON);
            if search.max_chroma(mid) < search.max_chroma(mid + 1) {
                lower = mid + 1;
            } else {
                upper = mid;
            }
        }
        assert_eq!(lower, upper);
        assert_close_enough!(key.tone(), lower as f64, 1.0);

        // The search ends on a local maximum
        assert!(search.max_chroma(lower - 1) < search.max_chroma(lower));
        assert!(search.max_chroma(lower + 1) <= search.max_chroma(lower));
    }

    #[test]
    fn test_key_color() {
        let key = KeyColor::new(50.0, 60.0).create();
        assert!(is_same_hue(key.hue(), 50.0, 1.0));
        assert_close_enough!(key.chroma(), 60.0, 0.5);
        assert!(0.0 < key.tone() && key.tone() < 100.0);

        // The chroma peaks at 89.6 for tone 87.9.
        let key = KeyColor::new(149.0, 200.0).create();
        assert!(is_same_hue(key.hue(), 149.0, 1.0));
        assert!(89.0 < key.chroma());
        assert!(0.0 < key.tone() && key.tone() < 100.0);
    }

    #[test]
    fn test_palette() {
        let palette = TonalPalette::from_hue_and_chroma(270.0, 36.0);
        assert_eq!(palette.tone(0), 0xff000000);
        assert_eq!(palette.tone(100), 0xffffffff);
        for tone in TonalPalette::TONES {
            let color = palette.tone(tone);
            assert_eq!(palette.tone(tone), color);
            assert_eq!(palette.get_color(tone).to_argb(), color);
        }

        let twin = TonalPalette::from_hue_and_chroma(270.0, 36.0);
        for tone in 0..=100 {
            assert_eq!(twin.tone(tone), palette.tone(tone));
        }
    }

    #[test]
    fn test_seed() -> Result<(), crate::error::ColorFormatError> {
        let seed: StandardRgb = "#63A002FF".parse()?;
        let palette = TonalPalette::from_rgb(seed);
        assert_eq!(palette.hue(), palette.key_color().hue());
        assert_eq!(palette.chroma(), palette.key_color().chroma());
        assert!(is_same_hue(palette.hue(), 125.0, 15.0));

        let fixed = TonalPalette::from_hct(*palette.key_color());
        assert_eq!(fixed.tone(40), palette.tone(40));
        Ok(())
    }
}
