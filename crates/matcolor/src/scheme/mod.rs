//! Dynamic color schemes.
//!
//! A [`DynamicScheme`] derives six tonal palettes from a source color
//! according to a [`Variant`] and resolves each semantic [`Role`] to a color
//! drawn from one of them. Role colors depend on light or dark mode and on the
//! contrast level, but never change the scheme.

mod dynamic;
mod roles;

use std::rc::Rc;

pub use dynamic::{ContrastCurve, DynamicColor, ToneDeltaPair, TonePolarity};
pub use roles::Role;

use crate::core::sanitize_degrees;
use crate::dislike::fix_if_disliked;
use crate::hct::Hct;
use crate::palette::TonalPalette;
use crate::rgb::StandardRgb;
use crate::temperature::TemperatureCache;

/// A selector for one of a scheme's tonal palettes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Palette {
    /// The palette for the most prominent roles.
    Primary,
    /// The palette for less prominent accents.
    Secondary,
    /// The palette for contrasting accents.
    Tertiary,
    /// The palette for surfaces and their text.
    Neutral,
    /// The palette for outlines and surface variants.
    NeutralVariant,
    /// The palette for error roles.
    Error,
}

/// The version of the Material design rules used for resolving roles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpecVersion {
    #[default]
    Spec2021,
}

/// The platform a scheme is designed for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Platform {
    #[default]
    Phone,
    Watch,
}

// --------------------------------------------------------------------------------------------------------------------

/// The palettes of a scheme.
#[derive(Debug)]
struct Palettes {
    primary: TonalPalette,
    secondary: TonalPalette,
    tertiary: TonalPalette,
    neutral: TonalPalette,
    neutral_variant: TonalPalette,
    error: TonalPalette,
}

impl Palettes {
    fn new(
        primary: (f64, f64),
        secondary: (f64, f64),
        tertiary: TonalPalette,
        neutral: (f64, f64),
        neutral_variant: (f64, f64),
    ) -> Self {
        let palette = |(hue, chroma): (f64, f64)| {
            TonalPalette::from_hue_and_chroma(sanitize_degrees(hue), chroma)
        };

        Self {
            primary: palette(primary),
            secondary: palette(secondary),
            tertiary,
            neutral: palette(neutral),
            neutral_variant: palette(neutral_variant),
            error: palette((25.0, 84.0)),
        }
    }

    fn with_tertiary(
        primary: (f64, f64),
        secondary: (f64, f64),
        tertiary: (f64, f64),
        neutral: (f64, f64),
        neutral_variant: (f64, f64),
    ) -> Self {
        let tertiary = TonalPalette::from_hue_and_chroma(sanitize_degrees(tertiary.0), tertiary.1);
        Self::new(primary, secondary, tertiary, neutral, neutral_variant)
    }
}

/// Rotate the hue by the amount for the band it falls into.
///
/// The bands are delimited by consecutive entries of `hues`. A hue on a band
/// boundary is not rotated.
fn rotated_hue(hue: f64, hues: &[f64], rotations: &[f64]) -> f64 {
    if rotations.len() == 1 {
        return sanitize_degrees(hue + rotations[0]);
    }

    for (index, window) in hues.windows(2).enumerate() {
        if window[0] < hue && hue < window[1] {
            return sanitize_degrees(hue + rotations[index]);
        }
    }
    hue
}

const VIBRANT_HUES: [f64; 9] = [0.0, 41.0, 61.0, 101.0, 131.0, 181.0, 251.0, 301.0, 360.0];
const VIBRANT_SECONDARY_ROTATIONS: [f64; 9] =
    [18.0, 15.0, 10.0, 12.0, 15.0, 18.0, 15.0, 12.0, 12.0];
const VIBRANT_TERTIARY_ROTATIONS: [f64; 9] =
    [35.0, 30.0, 20.0, 25.0, 30.0, 35.0, 30.0, 25.0, 25.0];

const EXPRESSIVE_HUES: [f64; 9] = [0.0, 21.0, 51.0, 121.0, 151.0, 191.0, 271.0, 321.0, 360.0];
const EXPRESSIVE_SECONDARY_ROTATIONS: [f64; 9] =
    [45.0, 95.0, 45.0, 20.0, 45.0, 90.0, 45.0, 45.0, 45.0];
const EXPRESSIVE_TERTIARY_ROTATIONS: [f64; 9] =
    [120.0, 120.0, 20.0, 45.0, 20.0, 15.0, 20.0, 120.0, 120.0];

fn monochrome(source: &Hct) -> Palettes {
    let h = source.hue();
    Palettes::with_tertiary((h, 0.0), (h, 0.0), (h, 0.0), (h, 0.0), (h, 0.0))
}

fn neutral(source: &Hct) -> Palettes {
    let h = source.hue();
    Palettes::with_tertiary((h, 12.0), (h, 8.0), (h, 16.0), (h, 2.0), (h, 2.0))
}

fn tonal_spot(source: &Hct) -> Palettes {
    let h = source.hue();
    Palettes::with_tertiary((h, 36.0), (h, 16.0), (h + 60.0, 24.0), (h, 6.0), (h, 8.0))
}

fn vibrant(source: &Hct) -> Palettes {
    let h = source.hue();
    Palettes::with_tertiary(
        (h, 200.0),
        (rotated_hue(h, &VIBRANT_HUES, &VIBRANT_SECONDARY_ROTATIONS), 24.0),
        (rotated_hue(h, &VIBRANT_HUES, &VIBRANT_TERTIARY_ROTATIONS), 32.0),
        (h, 10.0),
        (h, 12.0),
    )
}

fn expressive(source: &Hct) -> Palettes {
    let h = source.hue();
    Palettes::with_tertiary(
        (h + 240.0, 40.0),
        (rotated_hue(h, &EXPRESSIVE_HUES, &EXPRESSIVE_SECONDARY_ROTATIONS), 24.0),
        (rotated_hue(h, &EXPRESSIVE_HUES, &EXPRESSIVE_TERTIARY_ROTATIONS), 32.0),
        (h + 15.0, 8.0),
        (h + 15.0, 12.0),
    )
}

fn fidelity(source: &Hct) -> Palettes {
    let (h, c) = (source.hue(), source.chroma());
    let complement = TemperatureCache::new(*source).complement();
    Palettes::new(
        (h, c),
        (h, (c - 32.0).max(c * 0.5)),
        TonalPalette::from_hct(fix_if_disliked(complement)),
        (h, c / 8.0),
        (h, c / 8.0 + 4.0),
    )
}

fn content(source: &Hct) -> Palettes {
    let (h, c) = (source.hue(), source.chroma());
    let analogous = TemperatureCache::new(*source).analogous_colors(3, 6);
    let tertiary = analogous.get(2).copied().unwrap_or(*source);
    Palettes::new(
        (h, c),
        (h, (c - 32.0).max(c * 0.5)),
        TonalPalette::from_hct(fix_if_disliked(tertiary)),
        (h, c / 8.0),
        (h, c / 8.0 + 4.0),
    )
}

fn rainbow(source: &Hct) -> Palettes {
    let h = source.hue();
    Palettes::with_tertiary((h, 48.0), (h, 16.0), (h + 60.0, 24.0), (h, 0.0), (h, 0.0))
}

fn fruit_salad(source: &Hct) -> Palettes {
    let h = source.hue();
    Palettes::with_tertiary((h - 50.0, 48.0), (h - 50.0, 36.0), (h, 36.0), (h, 10.0), (h, 16.0))
}

/// A style of deriving palettes from the source color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// All palettes are grayscale.
    Monochrome,
    /// Nearly grayscale with a hint of the source hue.
    Neutral,
    /// Low chroma palettes with a tertiary hue 60º away. The default.
    #[default]
    TonalSpot,
    /// Maximum chroma primary with rotated secondary and tertiary hues.
    Vibrant,
    /// Playful palettes with the primary hue rotated away from the source.
    Expressive,
    /// Palettes that stay faithful to the source's chroma, with a tertiary
    /// palette based on the complement.
    Fidelity,
    /// Palettes that stay faithful to the source's chroma, with a tertiary
    /// palette based on an analogous color.
    Content,
    /// Colorful accents on grayscale neutrals.
    Rainbow,
    /// Accents with hues rotated 50º away from the source.
    FruitSalad,
}

impl Variant {
    /// All variants.
    pub const ALL: [Variant; 9] = [
        Variant::Monochrome,
        Variant::Neutral,
        Variant::TonalSpot,
        Variant::Vibrant,
        Variant::Expressive,
        Variant::Fidelity,
        Variant::Content,
        Variant::Rainbow,
        Variant::FruitSalad,
    ];

    const DERIVATIONS: [fn(&Hct) -> Palettes; 9] = [
        monochrome,
        neutral,
        tonal_spot,
        vibrant,
        expressive,
        fidelity,
        content,
        rainbow,
        fruit_salad,
    ];

    /// Get the variant's name.
    pub const fn name(&self) -> &'static str {
        match self {
            Variant::Monochrome => "monochrome",
            Variant::Neutral => "neutral",
            Variant::TonalSpot => "tonal_spot",
            Variant::Vibrant => "vibrant",
            Variant::Expressive => "expressive",
            Variant::Fidelity => "fidelity",
            Variant::Content => "content",
            Variant::Rainbow => "rainbow",
            Variant::FruitSalad => "fruit_salad",
        }
    }

    fn derive_palettes(self, source: &Hct) -> Palettes {
        Self::DERIVATIONS[self as usize](source)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A color scheme derived from a source color.
///
/// Cloning a scheme or changing its contrast level shares the palettes and
/// their memoized tones.
#[derive(Clone, Debug)]
pub struct DynamicScheme {
    source: Hct,
    variant: Variant,
    is_dark: bool,
    contrast_level: f64,
    spec_version: SpecVersion,
    platform: Platform,
    palettes: Rc<Palettes>,
}

impl DynamicScheme {
    /// Create a new scheme for phones with the 2021 rules.
    ///
    /// The contrast level ranges from -1 for reduced over 0 for standard to 1
    /// for high contrast.
    pub fn new(source: Hct, variant: Variant, is_dark: bool, contrast_level: f64) -> Self {
        Self::with_platform(
            source,
            variant,
            is_dark,
            contrast_level,
            SpecVersion::default(),
            Platform::default(),
        )
    }

    /// Create a new scheme following the design rules version for the platform.
    pub fn with_platform(
        source: Hct,
        variant: Variant,
        is_dark: bool,
        contrast_level: f64,
        spec_version: SpecVersion,
        platform: Platform,
    ) -> Self {
        tracing::trace!(
            argb = source.to_argb(),
            %variant,
            is_dark,
            contrast_level,
            "deriving scheme palettes"
        );

        Self {
            source,
            variant,
            is_dark,
            contrast_level,
            spec_version,
            platform,
            palettes: Rc::new(variant.derive_palettes(&source)),
        }
    }

    /// Create a copy of this scheme with another contrast level.
    pub fn with_contrast_level(&self, contrast_level: f64) -> Self {
        Self {
            contrast_level,
            ..self.clone()
        }
    }

    /// Get the source color.
    pub fn source(&self) -> &Hct {
        &self.source
    }

    /// Get the variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Determine whether the scheme is dark.
    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// Get the contrast level.
    pub fn contrast_level(&self) -> f64 {
        self.contrast_level
    }

    /// Get the version of the design rules.
    pub fn spec_version(&self) -> SpecVersion {
        self.spec_version
    }

    /// Get the target platform.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Get the selected palette.
    pub fn palette(&self, palette: Palette) -> &TonalPalette {
        let palettes = &*self.palettes;
        match palette {
            Palette::Primary => &palettes.primary,
            Palette::Secondary => &palettes.secondary,
            Palette::Tertiary => &palettes.tertiary,
            Palette::Neutral => &palettes.neutral,
            Palette::NeutralVariant => &palettes.neutral_variant,
            Palette::Error => &palettes.error,
        }
    }

    /// Get the primary palette.
    pub fn primary_palette(&self) -> &TonalPalette {
        self.palette(Palette::Primary)
    }

    /// Get the secondary palette.
    pub fn secondary_palette(&self) -> &TonalPalette {
        self.palette(Palette::Secondary)
    }

    /// Get the tertiary palette.
    pub fn tertiary_palette(&self) -> &TonalPalette {
        self.palette(Palette::Tertiary)
    }

    /// Get the neutral palette.
    pub fn neutral_palette(&self) -> &TonalPalette {
        self.palette(Palette::Neutral)
    }

    /// Get the neutral variant palette.
    pub fn neutral_variant_palette(&self) -> &TonalPalette {
        self.palette(Palette::NeutralVariant)
    }

    /// Get the error palette.
    pub fn error_palette(&self) -> &TonalPalette {
        self.palette(Palette::Error)
    }

    /// Resolve the role's tone.
    pub fn get_tone(&self, role: Role) -> f64 {
        role.spec().get_tone(self)
    }

    /// Resolve the role's color.
    pub fn get_hct(&self, role: Role) -> Hct {
        role.spec().get_hct(self)
    }

    /// Resolve the role's color as packed ARGB.
    pub fn get_argb(&self, role: Role) -> u32 {
        role.spec().get_argb(self)
    }

    /// Resolve the role's color as sRGB.
    pub fn get_rgb(&self, role: Role) -> StandardRgb {
        StandardRgb::from_argb(self.get_argb(role))
    }
}

#[cfg(test)]
mod test {
    use std::rc::Rc;

    use super::{
        rotated_hue, DynamicScheme, Palette, Role, Variant, EXPRESSIVE_HUES,
        EXPRESSIVE_SECONDARY_ROTATIONS, VIBRANT_HUES, VIBRANT_SECONDARY_ROTATIONS,
        VIBRANT_TERTIARY_ROTATIONS,
    };
    use crate::core::{assert_close_enough, sanitize_degrees};
    use crate::hct::Hct;

    const SEED: u32 = 0xff63a002;

    #[test]
    fn test_rotated_hue() {
        assert_eq!(rotated_hue(100.0, &VIBRANT_HUES, &VIBRANT_SECONDARY_ROTATIONS), 110.0);
        assert_eq!(rotated_hue(100.0, &VIBRANT_HUES, &VIBRANT_TERTIARY_ROTATIONS), 120.0);
        assert_eq!(rotated_hue(350.0, &EXPRESSIVE_HUES, &EXPRESSIVE_SECONDARY_ROTATIONS), 35.0);
        // Boundaries stay put
        assert_eq!(rotated_hue(41.0, &VIBRANT_HUES, &VIBRANT_SECONDARY_ROTATIONS), 41.0);
        assert_eq!(rotated_hue(10.0, &[], &[30.0]), 40.0);
    }

    #[test]
    fn test_tonal_spot() {
        let source = Hct::from_argb(SEED);
        let scheme = DynamicScheme::new(source, Variant::TonalSpot, false, 0.0);
        let h = source.hue();

        for (palette, hue, chroma) in [
            (Palette::Primary, h, 36.0),
            (Palette::Secondary, h, 16.0),
            (Palette::Tertiary, sanitize_degrees(h + 60.0), 24.0),
            (Palette::Neutral, h, 6.0),
            (Palette::NeutralVariant, h, 8.0),
            (Palette::Error, 25.0, 84.0),
        ] {
            let palette = scheme.palette(palette);
            assert_close_enough!(palette.hue(), hue, 1e-9);
            assert_close_enough!(palette.chroma(), chroma, 1e-9);
        }
    }

    #[test]
    fn test_variants() {
        let source = Hct::from_argb(SEED);
        let h = source.hue();

        let scheme = DynamicScheme::new(source, Variant::Monochrome, false, 0.0);
        assert_eq!(scheme.primary_palette().chroma(), 0.0);
        assert_eq!(scheme.tertiary_palette().chroma(), 0.0);
        let primary = scheme.get_rgb(Role::Primary);
        assert_eq!(primary.red(), primary.green());
        assert_eq!(primary.green(), primary.blue());

        let scheme = DynamicScheme::new(source, Variant::Expressive, false, 0.0);
        assert_close_enough!(scheme.primary_palette().hue(), sanitize_degrees(h + 240.0), 1e-9);
        assert_close_enough!(scheme.neutral_palette().hue(), sanitize_degrees(h + 15.0), 1e-9);

        let scheme = DynamicScheme::new(source, Variant::FruitSalad, false, 0.0);
        assert_close_enough!(scheme.secondary_palette().hue(), sanitize_degrees(h - 50.0), 1e-9);
        assert_close_enough!(scheme.secondary_palette().chroma(), 36.0, 1e-9);

        let scheme = DynamicScheme::new(source, Variant::Content, false, 0.0);
        let c = source.chroma();
        assert_close_enough!(scheme.primary_palette().chroma(), c, 1e-9);
        assert_close_enough!(scheme.secondary_palette().chroma(), (c - 32.0).max(c / 2.0), 1e-9);
        assert_close_enough!(scheme.neutral_variant_palette().chroma(), c / 8.0 + 4.0, 1e-9);

        for variant in Variant::ALL {
            let scheme = DynamicScheme::new(source, variant, true, 0.0);
            assert_eq!(scheme.variant(), variant);
            for role in Role::ALL {
                let tone = scheme.get_tone(role);
                assert!((0.0..=100.0).contains(&tone), "{variant} {role} {tone}");
            }
        }
    }

    #[test]
    fn test_with_contrast_level() {
        let scheme = DynamicScheme::new(Hct::from_argb(SEED), Variant::TonalSpot, false, 0.0);
        let high = scheme.with_contrast_level(1.0);
        assert!(Rc::ptr_eq(&scheme.palettes, &high.palettes));
        assert_eq!(high.contrast_level(), 1.0);
        assert_eq!(high.is_dark(), scheme.is_dark());

        // More contrast pushes the primary further from the light surface
        assert!(high.get_tone(Role::Primary) <= scheme.get_tone(Role::Primary));
        assert_eq!(scheme.get_tone(Role::Shadow), 0.0);
    }
}
