//! The HCT color space.
//!
//! HCT combines the hue and chroma of CAM16 under the default viewing
//! conditions with CIE L* as tone. Since tone directly determines relative
//! luminance, contrast between HCT colors is a function of their tones alone.

mod solver;

use crate::cam::{Cam16, ViewingConditions};
use crate::core::{lstar_from_argb, lstar_from_y};
use crate::rgb::StandardRgb;

pub(crate) use solver::solve_to_argb;

/// A color in hue, chroma, and tone.
///
/// Creating an HCT color from a hue, chroma, and tone solves for the closest
/// sRGB color. If the requested chroma is not achievable for the hue and tone,
/// the solver picks the most chromatic color still in gamut. Consequently, an
/// HCT color always reports the hue, chroma, and tone of the sRGB color it
/// represents, which may differ from the requested values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hct {
    hue: f64,
    chroma: f64,
    tone: f64,
    argb: u32,
}

impl Hct {
    /// Create a new HCT color from its hue in degrees, chroma, and tone.
    pub fn new(hue: f64, chroma: f64, tone: f64) -> Self {
        Self::from_argb(solve_to_argb(hue, chroma, tone))
    }

    /// Create a new HCT color from the packed ARGB color.
    pub fn from_argb(argb: u32) -> Self {
        let cam = Cam16::from_argb(argb);
        Self {
            hue: cam.hue(),
            chroma: cam.chroma(),
            tone: lstar_from_argb(argb),
            argb,
        }
    }

    /// Create a new HCT color from the sRGB color.
    pub fn from_rgb(rgb: StandardRgb) -> Self {
        Self::from_argb(rgb.to_argb())
    }

    /// Get the hue in degrees `0..360`.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Get the chroma.
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// Get the tone, i.e., CIE L* in `0..=100`.
    pub fn tone(&self) -> f64 {
        self.tone
    }

    /// Get the packed ARGB color.
    pub fn to_argb(&self) -> u32 {
        self.argb
    }

    /// Get the sRGB color.
    pub fn to_rgb(&self) -> StandardRgb {
        StandardRgb::from_argb(self.argb)
    }

    /// Create a new HCT color with this color's chroma and tone but the given
    /// hue.
    #[must_use]
    pub fn with_hue(&self, hue: f64) -> Self {
        Self::new(hue, self.chroma, self.tone)
    }

    /// Create a new HCT color with this color's hue and tone but the given
    /// chroma.
    #[must_use]
    pub fn with_chroma(&self, chroma: f64) -> Self {
        Self::new(self.hue, chroma, self.tone)
    }

    /// Create a new HCT color with this color's hue and chroma but the given
    /// tone.
    #[must_use]
    pub fn with_tone(&self, tone: f64) -> Self {
        Self::new(self.hue, self.chroma, tone)
    }

    /// Translate this color into one that, under the default viewing
    /// conditions, looks like this color under the given viewing conditions.
    #[must_use]
    pub fn in_viewing_conditions(&self, vc: &ViewingConditions) -> Self {
        let viewed = Cam16::from_argb(self.argb).xyz_in_viewing_conditions(vc);
        let recast =
            Cam16::from_xyz_in_viewing_conditions(&viewed, ViewingConditions::standard());
        Self::new(recast.hue(), recast.chroma(), lstar_from_y(viewed[1]))
    }
}

impl From<StandardRgb> for Hct {
    fn from(value: StandardRgb) -> Self {
        Self::from_rgb(value)
    }
}

impl From<Hct> for StandardRgb {
    fn from(value: Hct) -> Self {
        value.to_rgb()
    }
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::Hct;
    use crate::cam::ViewingConditions;
    use crate::core::{assert_close_enough, is_same_hue, rgb_from_argb};

    fn assert_same_argb(expected: u32, actual: u32) {
        for (c1, c2) in rgb_from_argb(expected).iter().zip(rgb_from_argb(actual)) {
            assert!(
                c1.abs_diff(c2) <= 1,
                "#{:08x} differs from #{:08x}",
                expected,
                actual
            );
        }
    }

    #[test]
    fn test_red() {
        let red = Hct::from_argb(0xffff0000);
        assert_close_enough!(red.hue(), 27.41, 0.1);
        assert_close_enough!(red.chroma(), 113.36, 0.1);
        assert_close_enough!(red.tone(), 53.23, 0.1);

        let solved = Hct::new(red.hue(), red.chroma(), red.tone());
        assert_same_argb(0xffff0000, solved.to_argb());
    }

    #[test]
    fn test_gamut_limit() {
        let color = Hct::new(282.79, 200.0, 30.0);
        assert!(color.chroma() < 200.0);
        assert!(is_same_hue(color.hue(), 282.79, 2.0));
        assert_close_enough!(color.tone(), 30.0, 0.5);

        let gray = Hct::new(90.0, 0.0, 50.0);
        let [r, g, b] = rgb_from_argb(gray.to_argb());
        assert!(r == g && g == b);
        assert_close_enough!(gray.tone(), 50.0, 0.5);
    }

    #[test]
    fn test_round_trip() {
        let mut rng = StdRng::seed_from_u64(0x63a002);
        for _ in 0..1_000 {
            let argb = 0xff000000 | (rng.random::<u32>() & 0x00ff_ffff);
            let hct = Hct::from_argb(argb);
            let solved = Hct::new(hct.hue(), hct.chroma(), hct.tone());
            assert_same_argb(argb, solved.to_argb());
        }
    }

    #[test]
    fn test_with_tone() {
        let color = Hct::from_argb(0xff63a002);
        let lighter = color.with_tone(90.0);
        assert_close_enough!(lighter.tone(), 90.0, 0.5);
        assert!(is_same_hue(lighter.hue(), color.hue(), 2.0));

        let same = color.in_viewing_conditions(ViewingConditions::standard());
        assert_same_argb(color.to_argb(), same.to_argb());
    }
}
