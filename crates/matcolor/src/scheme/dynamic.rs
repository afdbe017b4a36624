use super::roles::Role;
use super::{DynamicScheme, Palette};
use crate::core::{darker, darker_unsafe, lerp, lighter, lighter_unsafe, ratio_of_tones};
use crate::hct::Hct;

/// The contrast ratios a color needs against its background at the contrast
/// levels -1, 0, 0.5, and 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContrastCurve {
    low: f64,
    normal: f64,
    medium: f64,
    high: f64,
}

impl ContrastCurve {
    /// Create a new contrast curve.
    pub const fn new(low: f64, normal: f64, medium: f64, high: f64) -> Self {
        Self {
            low,
            normal,
            medium,
            high,
        }
    }

    /// Get the contrast ratio for the contrast level, interpolating linearly
    /// between the four stops.
    pub fn get(&self, level: f64) -> f64 {
        if level <= -1.0 {
            self.low
        } else if level < 0.0 {
            lerp(self.low, self.normal, level + 1.0)
        } else if level < 0.5 {
            lerp(self.normal, self.medium, level / 0.5)
        } else if level < 1.0 {
            lerp(self.medium, self.high, (level - 0.5) / 0.5)
        } else {
            self.high
        }
    }
}

/// The direction in which a tone-delta pair keeps its two roles apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TonePolarity {
    /// The first role is darker.
    Darker,
    /// The first role is lighter.
    Lighter,
    /// The first role is nearer to the background.
    Nearer,
    /// The first role is farther from the background.
    Farther,
}

/// A constraint keeping two roles at least `delta` tones apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneDeltaPair {
    pub role_a: Role,
    pub role_b: Role,
    pub delta: f64,
    pub polarity: TonePolarity,
    /// Whether both roles move out of the 50–59 zone together.
    pub stay_together: bool,
}

impl ToneDeltaPair {
    /// Create a new tone-delta pair.
    pub const fn new(
        role_a: Role,
        role_b: Role,
        delta: f64,
        polarity: TonePolarity,
        stay_together: bool,
    ) -> Self {
        Self {
            role_a,
            role_b,
            delta,
            polarity,
            stay_together,
        }
    }
}

/// The rules for resolving a role to a color.
///
/// A dynamic color picks a palette and a base tone. If it has a background,
/// the tone is adjusted to meet the contrast curve's ratio against that
/// background at the scheme's contrast level. If it belongs to a tone-delta
/// pair, the tone is also kept apart from the other role's.
#[derive(Clone, Copy, Debug)]
pub struct DynamicColor {
    pub role: Role,
    pub palette: Palette,
    pub tone: fn(&DynamicScheme) -> f64,
    pub is_background: bool,
    pub background: Option<fn(&DynamicScheme) -> Role>,
    pub second_background: Option<Role>,
    pub contrast_curve: Option<ContrastCurve>,
    pub tone_delta_pair: Option<ToneDeltaPair>,
}

impl DynamicColor {
    /// Create a new dynamic color with a base tone only.
    pub(crate) const fn new(role: Role, palette: Palette, tone: fn(&DynamicScheme) -> f64) -> Self {
        Self {
            role,
            palette,
            tone,
            is_background: false,
            background: None,
            second_background: None,
            contrast_curve: None,
            tone_delta_pair: None,
        }
    }

    pub(crate) const fn background(mut self) -> Self {
        self.is_background = true;
        self
    }

    pub(crate) const fn on(
        mut self,
        background: fn(&DynamicScheme) -> Role,
        curve: ContrastCurve,
    ) -> Self {
        self.background = Some(background);
        self.contrast_curve = Some(curve);
        self
    }

    pub(crate) const fn also_on(mut self, second_background: Role) -> Self {
        self.second_background = Some(second_background);
        self
    }

    pub(crate) const fn paired(mut self, pair: ToneDeltaPair) -> Self {
        self.tone_delta_pair = Some(pair);
        self
    }

    fn contrast_ratio(&self, scheme: &DynamicScheme) -> f64 {
        self.contrast_curve
            .map_or(1.0, |curve| curve.get(scheme.contrast_level()))
    }

    /// Resolve this color's tone in the scheme.
    pub fn get_tone(&self, scheme: &DynamicScheme) -> f64 {
        let decreasing_contrast = scheme.contrast_level() < 0.0;

        if let Some(pair) = self.tone_delta_pair {
            return self.get_paired_tone(scheme, &pair, decreasing_contrast);
        }

        let mut answer = (self.tone)(scheme);
        let Some(background) = self.background else {
            return answer;
        };

        let background_tone = background(scheme).spec().get_tone(scheme);
        let desired_ratio = self.contrast_ratio(scheme);

        if ratio_of_tones(background_tone, answer) < desired_ratio || decreasing_contrast {
            answer = foreground_tone(background_tone, desired_ratio);
        }

        if self.is_background && (50.0..60.0).contains(&answer) {
            answer = if desired_ratio <= ratio_of_tones(49.0, background_tone) {
                49.0
            } else {
                60.0
            };
        }

        let Some(second_background) = self.second_background else {
            return answer;
        };

        // Find a tone with sufficient contrast against both backgrounds
        let tone1 = background_tone;
        let tone2 = second_background.spec().get_tone(scheme);
        let upper = tone1.max(tone2);
        let lower = tone1.min(tone2);

        if desired_ratio <= ratio_of_tones(upper, answer)
            && desired_ratio <= ratio_of_tones(lower, answer)
        {
            return answer;
        }

        let light_option = lighter(upper, desired_ratio);
        let dark_option = darker(lower, desired_ratio);

        if tone_prefers_light_foreground(tone1) || tone_prefers_light_foreground(tone2) {
            return if light_option < 0.0 {
                100.0
            } else {
                light_option
            };
        }

        match (0.0 <= light_option, 0.0 <= dark_option) {
            (true, false) => light_option,
            (false, true) => dark_option,
            _ if dark_option < 0.0 => 0.0,
            _ => dark_option,
        }
    }

    fn get_paired_tone(
        &self,
        scheme: &DynamicScheme,
        pair: &ToneDeltaPair,
        decreasing_contrast: bool,
    ) -> f64 {
        let background_tone = self
            .background
            .map_or(50.0, |background| background(scheme).spec().get_tone(scheme));

        let a_is_nearer = match pair.polarity {
            TonePolarity::Nearer => true,
            TonePolarity::Farther => false,
            TonePolarity::Lighter => !scheme.is_dark(),
            TonePolarity::Darker => scheme.is_dark(),
        };
        let (nearer, farther) = if a_is_nearer {
            (pair.role_a.spec(), pair.role_b.spec())
        } else {
            (pair.role_b.spec(), pair.role_a.spec())
        };
        let am_nearer = self.role == nearer.role;
        let expansion = if scheme.is_dark() { 1.0 } else { -1.0 };
        let delta = pair.delta;

        let resolve = |color: &DynamicColor| {
            let ratio = color.contrast_ratio(scheme);
            let initial = (color.tone)(scheme);
            if decreasing_contrast || ratio_of_tones(background_tone, initial) < ratio {
                foreground_tone(background_tone, ratio)
            } else {
                initial
            }
        };

        let mut near_tone = resolve(&nearer);
        let mut far_tone = resolve(&farther);

        if (far_tone - near_tone) * expansion < delta {
            far_tone = (near_tone + delta * expansion).clamp(0.0, 100.0);
            if (far_tone - near_tone) * expansion < delta {
                near_tone = (far_tone - delta * expansion).clamp(0.0, 100.0);
            }
        }

        // Avoid the awkward zone between 50 and 59
        let avoid = |near_tone: &mut f64, far_tone: &mut f64| {
            if 0.0 < expansion {
                *near_tone = 60.0;
                *far_tone = far_tone.max(*near_tone + delta * expansion);
            } else {
                *near_tone = 49.0;
                *far_tone = far_tone.min(*near_tone + delta * expansion);
            }
        };

        if (50.0..60.0).contains(&near_tone) {
            avoid(&mut near_tone, &mut far_tone);
        } else if (50.0..60.0).contains(&far_tone) {
            if pair.stay_together {
                avoid(&mut near_tone, &mut far_tone);
            } else {
                far_tone = if 0.0 < expansion { 60.0 } else { 49.0 };
            }
        }

        if am_nearer {
            near_tone
        } else {
            far_tone
        }
    }

    /// Resolve this color in the scheme.
    pub fn get_hct(&self, scheme: &DynamicScheme) -> Hct {
        scheme.palette(self.palette).hct(self.get_tone(scheme))
    }

    /// Resolve this color in the scheme to a packed ARGB color.
    pub fn get_argb(&self, scheme: &DynamicScheme) -> u32 {
        let tone = self.get_tone(scheme);
        let palette = scheme.palette(self.palette);

        // Integral tones come from the palette's memo
        if tone.fract() == 0.0 && (0.0..=100.0).contains(&tone) {
            palette.tone(tone as u8)
        } else {
            palette.hct(tone).to_argb()
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine whether light text reads better on the tone.
pub(crate) fn tone_prefers_light_foreground(tone: f64) -> bool {
    tone.round() < 60.0
}

/// Find the tone of a foreground color with at least the contrast ratio
/// against the background tone.
///
/// This function prefers light foregrounds on darker backgrounds and dark
/// foregrounds otherwise, unless only the other direction meets the ratio.
pub(crate) fn foreground_tone(background_tone: f64, ratio: f64) -> f64 {
    let lighter_tone = lighter_unsafe(background_tone, ratio);
    let darker_tone = darker_unsafe(background_tone, ratio);
    let lighter_ratio = ratio_of_tones(lighter_tone, background_tone);
    let darker_ratio = ratio_of_tones(darker_tone, background_tone);

    if tone_prefers_light_foreground(background_tone) {
        let negligible_difference = (lighter_ratio - darker_ratio).abs() < 0.1
            && lighter_ratio < ratio
            && darker_ratio < ratio;
        if ratio <= lighter_ratio || darker_ratio <= lighter_ratio || negligible_difference {
            lighter_tone
        } else {
            darker_tone
        }
    } else if ratio <= darker_ratio || lighter_ratio <= darker_ratio {
        darker_tone
    } else {
        lighter_tone
    }
}

/// Find the tone closest to the given one at which the hue reaches the chroma.
///
/// Starting with the tone, this function moves towards darker or lighter
/// tones until the chroma is reached or stops increasing.
pub(crate) fn find_desired_chroma_by_tone(
    hue: f64,
    chroma: f64,
    tone: f64,
    by_decreasing_tone: bool,
) -> f64 {
    let mut answer = tone;
    let mut closest = Hct::new(hue, chroma, tone);
    if chroma <= closest.chroma() {
        return answer;
    }

    let step = if by_decreasing_tone { -1.0 } else { 1.0 };
    let mut chroma_peak = closest.chroma();

    while closest.chroma() < chroma && (0.0..=100.0).contains(&(answer + step)) {
        answer += step;
        let candidate = Hct::new(hue, chroma, answer);
        if candidate.chroma() < chroma_peak {
            break;
        } else if (candidate.chroma() - chroma).abs() < 0.4 {
            break;
        }

        if (candidate.chroma() - chroma).abs() < (closest.chroma() - chroma).abs() {
            closest = candidate;
        }
        chroma_peak = chroma_peak.max(candidate.chroma());
    }

    answer
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::assert_close_enough;

    #[test]
    fn test_contrast_curve() {
        let curve = ContrastCurve::new(3.0, 4.5, 7.0, 11.0);
        assert_eq!(curve.get(-2.0), 3.0);
        assert_eq!(curve.get(-1.0), 3.0);
        assert_close_enough!(curve.get(-0.5), 3.75, 1e-12);
        assert_eq!(curve.get(0.0), 4.5);
        assert_close_enough!(curve.get(0.25), 5.75, 1e-12);
        assert_eq!(curve.get(0.5), 7.0);
        assert_close_enough!(curve.get(0.75), 9.0, 1e-12);
        assert_eq!(curve.get(1.0), 11.0);
        assert_eq!(curve.get(1.5), 11.0);
    }

    #[test]
    fn test_foreground_tone() {
        let tone = foreground_tone(90.0, 4.5);
        assert!(tone < 90.0);
        assert!(4.5 <= ratio_of_tones(tone, 90.0));

        let tone = foreground_tone(20.0, 4.5);
        assert!(20.0 < tone);
        assert!(4.5 <= ratio_of_tones(tone, 20.0));

        assert!(tone_prefers_light_foreground(59.4));
        assert!(!tone_prefers_light_foreground(59.5));
    }

    #[test]
    fn test_desired_chroma() {
        // Reachable chroma leaves the tone as is
        assert_eq!(find_desired_chroma_by_tone(270.0, 0.0, 90.0, true), 90.0);
        let reachable = Hct::new(270.0, 10.0, 90.0).chroma();
        assert!(reachable < 10.0);
        assert_eq!(find_desired_chroma_by_tone(270.0, reachable - 1.0, 90.0, true), 90.0);

        // Rounding to 8 bits loses a little chroma, so the search takes a step
        let tone = find_desired_chroma_by_tone(270.0, 10.0, 90.0, true);
        assert!((89.0..90.0).contains(&tone));

        // Blue only reaches high chroma at darker tones
        let tone = find_desired_chroma_by_tone(270.0, 60.0, 90.0, true);
        assert!(tone < 90.0);
    }
}
