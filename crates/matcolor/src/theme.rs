//! Material themes and their cache.

use std::borrow::Cow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::ops::Index;

use crate::error::ColorFormatError;
use crate::hct::Hct;
use crate::rgb::StandardRgb;
use crate::scheme::{DynamicScheme, Role, Variant};

/// A theme's contrast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Contrast {
    /// The default contrast, level 0.
    #[default]
    Standard,
    /// Medium contrast, level 0.5.
    Medium,
    /// High contrast, level 1.
    High,
}

impl Contrast {
    /// Get the contrast level used for resolving roles.
    pub const fn level(&self) -> f64 {
        match self {
            Contrast::Standard => 0.0,
            Contrast::Medium => 0.5,
            Contrast::High => 1.0,
        }
    }

    /// Get the contrast for the level.
    ///
    /// Levels other than 0.0, 0.5, and 1.0 fall back on standard contrast.
    pub fn from_level(level: f64) -> Self {
        if level == 0.0 {
            Contrast::Standard
        } else if level == 0.5 {
            Contrast::Medium
        } else if level == 1.0 {
            Contrast::High
        } else {
            tracing::debug!(level, "falling back on standard contrast");
            Contrast::Standard
        }
    }

    /// Get the lowercase name, e.g., "medium".
    pub const fn name(&self) -> &'static str {
        match self {
            Contrast::Standard => "standard",
            Contrast::Medium => "medium",
            Contrast::High => "high",
        }
    }
}

impl std::fmt::Display for Contrast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A theme, i.e., the colors for all roles derived from a seed color.
///
/// A theme is a snapshot. Index it by [`Role`] or use the named accessors.
#[derive(Clone, Debug)]
pub struct MaterialTheme {
    seed: StandardRgb,
    is_dark: bool,
    contrast: Contrast,
    scheme: DynamicScheme,
    colors: [StandardRgb; Role::COUNT],
}

macro_rules! role_accessors {
    ($($name:ident => $role:ident),* $(,)?) => {
        impl MaterialTheme {
            $(
                #[doc = concat!("Get the ", stringify!($name), " color.")]
                #[inline]
                pub fn $name(&self) -> StandardRgb {
                    self[Role::$role]
                }
            )*
        }
    }
}

impl MaterialTheme {
    /// Derive a new theme from the seed color.
    pub fn new(seed: StandardRgb, is_dark: bool, contrast: Contrast, variant: Variant) -> Self {
        let scheme = DynamicScheme::new(Hct::from_rgb(seed), variant, is_dark, contrast.level());
        Self::with_scheme(seed, contrast, scheme)
    }

    /// Derive a new tonal spot theme from the seed color in hexadecimal
    /// notation.
    pub fn from_rgba_hex(
        seed: &str,
        is_dark: bool,
        contrast: Contrast,
    ) -> Result<Self, ColorFormatError> {
        let seed = StandardRgb::from_rgba_hex(seed)?;
        Ok(Self::new(seed, is_dark, contrast, Variant::default()))
    }

    fn with_scheme(seed: StandardRgb, contrast: Contrast, scheme: DynamicScheme) -> Self {
        let colors = Role::ALL.map(|role| scheme.get_rgb(role));
        Self {
            seed,
            is_dark: scheme.is_dark(),
            contrast,
            scheme,
            colors,
        }
    }

    /// Derive this theme at another contrast.
    ///
    /// The new theme shares this theme's palettes.
    pub fn with_contrast(&self, contrast: Contrast) -> Self {
        let scheme = self.scheme.with_contrast_level(contrast.level());
        Self::with_scheme(self.seed, contrast, scheme)
    }

    /// Get the seed color.
    pub fn seed(&self) -> StandardRgb {
        self.seed
    }

    /// Determine whether this theme is for dark mode.
    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// Get this theme's contrast.
    pub fn contrast(&self) -> Contrast {
        self.contrast
    }

    /// Get the scheme the theme's colors were resolved with.
    pub fn scheme(&self) -> &DynamicScheme {
        &self.scheme
    }

    /// Iterate over all roles and their colors.
    pub fn colors(&self) -> impl Iterator<Item = (Role, StandardRgb)> + '_ {
        Role::ALL.into_iter().zip(self.colors.iter().copied())
    }
}

role_accessors! {
    background => Background,
    on_background => OnBackground,
    surface => Surface,
    surface_dim => SurfaceDim,
    surface_bright => SurfaceBright,
    surface_container_lowest => SurfaceContainerLowest,
    surface_container_low => SurfaceContainerLow,
    surface_container => SurfaceContainer,
    surface_container_high => SurfaceContainerHigh,
    surface_container_highest => SurfaceContainerHighest,
    on_surface => OnSurface,
    surface_variant => SurfaceVariant,
    on_surface_variant => OnSurfaceVariant,
    inverse_surface => InverseSurface,
    inverse_on_surface => InverseOnSurface,
    outline => Outline,
    outline_variant => OutlineVariant,
    shadow => Shadow,
    scrim => Scrim,
    surface_tint => SurfaceTint,
    primary => Primary,
    on_primary => OnPrimary,
    primary_container => PrimaryContainer,
    on_primary_container => OnPrimaryContainer,
    inverse_primary => InversePrimary,
    secondary => Secondary,
    on_secondary => OnSecondary,
    secondary_container => SecondaryContainer,
    on_secondary_container => OnSecondaryContainer,
    tertiary => Tertiary,
    on_tertiary => OnTertiary,
    tertiary_container => TertiaryContainer,
    on_tertiary_container => OnTertiaryContainer,
    error => Error,
    on_error => OnError,
    error_container => ErrorContainer,
    on_error_container => OnErrorContainer,
    primary_fixed => PrimaryFixed,
    primary_fixed_dim => PrimaryFixedDim,
    on_primary_fixed => OnPrimaryFixed,
    on_primary_fixed_variant => OnPrimaryFixedVariant,
    secondary_fixed => SecondaryFixed,
    secondary_fixed_dim => SecondaryFixedDim,
    on_secondary_fixed => OnSecondaryFixed,
    on_secondary_fixed_variant => OnSecondaryFixedVariant,
    tertiary_fixed => TertiaryFixed,
    tertiary_fixed_dim => TertiaryFixedDim,
    on_tertiary_fixed => OnTertiaryFixed,
    on_tertiary_fixed_variant => OnTertiaryFixedVariant,
}

impl Index<Role> for MaterialTheme {
    type Output = StandardRgb;

    fn index(&self, role: Role) -> &Self::Output {
        &self.colors[role as usize]
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A cache of standard contrast themes by seed color and mode.
///
/// Medium and high contrast themes are derived from the cached standard
/// contrast theme on every request and never cached themselves. The cache
/// lives as long as its owner and is not shared between threads.
#[derive(Debug, Default)]
pub struct ThemeCache {
    variant: Variant,
    light: HashMap<u32, MaterialTheme>,
    dark: HashMap<u32, MaterialTheme>,
}

impl ThemeCache {
    /// Create a new, empty cache of tonal spot themes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new, empty cache of themes with the variant.
    pub fn with_variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Get the variant used for deriving themes.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Get the theme for the packed ARGB seed color.
    ///
    /// If the cache has no theme for the seed and mode, this method derives
    /// the standard contrast theme and caches it. Standard contrast themes are
    /// borrowed from the cache, other contrasts are derived from it.
    pub fn get(&mut self, seed: u32, is_dark: bool, contrast: Contrast) -> Cow<'_, MaterialTheme> {
        let variant = self.variant;
        let themes = if is_dark {
            &mut self.dark
        } else {
            &mut self.light
        };

        let standard = match themes.entry(seed) {
            Entry::Occupied(entry) => {
                tracing::debug!(seed, is_dark, "theme cache hit");
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                tracing::debug!(seed, is_dark, "theme cache miss");
                entry.insert(MaterialTheme::new(
                    StandardRgb::from_argb(seed),
                    is_dark,
                    Contrast::Standard,
                    variant,
                ))
            }
        };

        match contrast {
            Contrast::Standard => Cow::Borrowed(standard),
            _ => Cow::Owned(standard.with_contrast(contrast)),
        }
    }

    /// Get the theme for the seed color in hexadecimal notation.
    pub fn get_from_rgba_hex(
        &mut self,
        seed: &str,
        is_dark: bool,
        contrast: Contrast,
    ) -> Result<Cow<'_, MaterialTheme>, ColorFormatError> {
        let seed = StandardRgb::from_rgba_hex(seed)?;
        Ok(self.get(seed.to_argb(), is_dark, contrast))
    }

    /// Get the number of cached themes.
    pub fn len(&self) -> usize {
        self.light.len() + self.dark.len()
    }

    /// Determine whether this cache holds no themes.
    pub fn is_empty(&self) -> bool {
        self.light.is_empty() && self.dark.is_empty()
    }

    /// Remove all cached themes.
    pub fn clear(&mut self) {
        tracing::debug!(themes = self.len(), "clearing theme cache");
        self.light.clear();
        self.dark.clear();
    }
}

#[cfg(test)]
mod test {
    use std::borrow::Cow;

    use super::{Contrast, MaterialTheme, ThemeCache};
    use crate::error::ColorFormatError;
    use crate::hct::Hct;
    use crate::rgb::StandardRgb;
    use crate::scheme::{DynamicScheme, Role, Variant};

    const SEED: &str = "#63A002FF";

    #[test]
    fn test_light_theme() -> Result<(), ColorFormatError> {
        let theme = MaterialTheme::from_rgba_hex(SEED, false, Contrast::Standard)?;
        assert_eq!(theme.seed().to_rgba_hex(), "#63a002ff");
        assert!(!theme.is_dark());
        assert_eq!(theme.primary().to_rgb_hex(), "#4c662b");
        assert_eq!(theme.on_primary().to_rgb_hex(), "#ffffff");
        assert_eq!(theme.primary_container().to_rgb_hex(), "#cdeda3");
        assert_eq!(theme.on_primary_container().to_rgb_hex(), "#354e16");
        assert_eq!(theme[Role::Primary], theme.primary());
        Ok(())
    }

    #[test]
    fn test_dark_theme() -> Result<(), ColorFormatError> {
        let theme = MaterialTheme::from_rgba_hex(SEED, true, Contrast::Standard)?;
        assert!(theme.is_dark());
        assert_eq!(theme.primary().to_rgb_hex(), "#b1d18a");
        assert_eq!(theme.on_primary().to_rgb_hex(), "#1f3701");
        assert_eq!(theme.primary_container().to_rgb_hex(), "#354e16");
        assert_eq!(theme.on_primary_container().to_rgb_hex(), "#cdeda3");
        Ok(())
    }

    #[test]
    fn test_cache() -> Result<(), ColorFormatError> {
        let seed = StandardRgb::from_rgba_hex(SEED)?.to_argb();
        let mut cache = ThemeCache::new();
        assert!(cache.is_empty());

        let first: Vec<_> = cache.get(seed, false, Contrast::Standard).colors().collect();
        {
            let theme = cache.get(seed, false, Contrast::Standard);
            assert!(matches!(theme, Cow::Borrowed(_)));
            assert_eq!(theme.colors().collect::<Vec<_>>(), first);
        }
        assert_eq!(cache.len(), 1);

        let medium: Vec<_> = {
            let theme = cache.get(seed, false, Contrast::Medium);
            assert!(matches!(theme, Cow::Owned(_)));
            assert_eq!(theme.contrast(), Contrast::Medium);
            theme.colors().collect()
        };
        assert_eq!(cache.len(), 1);

        let scheme = DynamicScheme::new(
            Hct::from_argb(seed),
            Variant::TonalSpot,
            false,
            Contrast::Medium.level(),
        );
        for (role, color) in medium {
            assert_eq!(color, scheme.get_rgb(role), "{role}");
        }

        cache.get_from_rgba_hex(SEED, true, Contrast::High)?;
        assert_eq!(cache.len(), 2);
        assert_eq!(
            cache.get_from_rgba_hex("#63A0", true, Contrast::High).err(),
            Some(ColorFormatError::UnexpectedLength)
        );

        cache.clear();
        assert!(cache.is_empty());
        Ok(())
    }

    #[test]
    fn test_contrast() {
        assert_eq!(Contrast::from_level(0.0), Contrast::Standard);
        assert_eq!(Contrast::from_level(0.5), Contrast::Medium);
        assert_eq!(Contrast::from_level(1.0), Contrast::High);
        assert_eq!(Contrast::from_level(0.7), Contrast::Standard);
        assert_eq!(Contrast::from_level(f64::NAN), Contrast::Standard);
        assert_eq!(Contrast::High.to_string(), "high");
    }
}
