//! Detection and correction of universally disliked colors.
//!
//! Dark yellow-greens evoke bile and mud and are consistently rated as
//! unpleasant. Lightening them to tone 70 makes them acceptable.

use crate::hct::Hct;

/// Determine whether the color is disliked.
///
/// A color is disliked if its rounded hue is in `90..=111`, its rounded chroma
/// exceeds 16, and its rounded tone is less than 65.
pub fn is_disliked(hct: &Hct) -> bool {
    let hue_passes = (90.0..=111.0).contains(&hct.hue().round());
    let chroma_passes = 16.0 < hct.chroma().round();
    let tone_passes = hct.tone().round() < 65.0;

    hue_passes && chroma_passes && tone_passes
}

/// Lighten the color to tone 70 if it is disliked or return it unchanged
/// otherwise.
pub fn fix_if_disliked(hct: Hct) -> Hct {
    if is_disliked(&hct) {
        Hct::new(hct.hue(), hct.chroma(), 70.0)
    } else {
        hct
    }
}

#[cfg(test)]
mod test {
    use super::{fix_if_disliked, is_disliked};
    use crate::core::assert_close_enough;
    use crate::hct::Hct;

    #[test]
    fn test_dislike() {
        let color = Hct::new(100.0, 20.0, 60.0);
        assert!(is_disliked(&color));

        let fixed = fix_if_disliked(color);
        assert!(!is_disliked(&fixed));
        assert_close_enough!(fixed.tone(), 70.0, 0.5);
        assert_close_enough!(fixed.hue(), color.hue(), 1.0);
        assert_close_enough!(fixed.chroma(), color.chroma(), 1.0);
    }

    #[test]
    fn test_liked() {
        for color in [
            Hct::new(100.0, 20.0, 70.0),
            Hct::new(100.0, 10.0, 60.0),
            Hct::new(200.0, 40.0, 40.0),
        ] {
            assert!(!is_disliked(&color));
            assert_eq!(fix_if_disliked(color), color);
        }
    }
}
