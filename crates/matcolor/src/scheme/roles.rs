//! The semantic roles of a color scheme and the rules for resolving them.

use super::dynamic::{
    find_desired_chroma_by_tone, foreground_tone, ContrastCurve, DynamicColor, ToneDeltaPair,
    TonePolarity,
};
use super::{DynamicScheme, Palette, Variant};
use crate::dislike::fix_if_disliked;

/// A semantic role of a color scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Background,
    OnBackground,
    Surface,
    SurfaceDim,
    SurfaceBright,
    SurfaceContainerLowest,
    SurfaceContainerLow,
    SurfaceContainer,
    SurfaceContainerHigh,
    SurfaceContainerHighest,
    OnSurface,
    SurfaceVariant,
    OnSurfaceVariant,
    InverseSurface,
    InverseOnSurface,
    Outline,
    OutlineVariant,
    Shadow,
    Scrim,
    SurfaceTint,
    Primary,
    OnPrimary,
    PrimaryContainer,
    OnPrimaryContainer,
    InversePrimary,
    Secondary,
    OnSecondary,
    SecondaryContainer,
    OnSecondaryContainer,
    Tertiary,
    OnTertiary,
    TertiaryContainer,
    OnTertiaryContainer,
    Error,
    OnError,
    ErrorContainer,
    OnErrorContainer,
    PrimaryFixed,
    PrimaryFixedDim,
    OnPrimaryFixed,
    OnPrimaryFixedVariant,
    SecondaryFixed,
    SecondaryFixedDim,
    OnSecondaryFixed,
    OnSecondaryFixedVariant,
    TertiaryFixed,
    TertiaryFixedDim,
    OnTertiaryFixed,
    OnTertiaryFixedVariant,
}

impl Role {
    /// The number of roles.
    pub const COUNT: usize = 49;

    /// All roles in declaration order.
    pub const ALL: [Role; Role::COUNT] = {
        use Role::*;
        [
            Background,
            OnBackground,
            Surface,
            SurfaceDim,
            SurfaceBright,
            SurfaceContainerLowest,
            SurfaceContainerLow,
            SurfaceContainer,
            SurfaceContainerHigh,
            SurfaceContainerHighest,
            OnSurface,
            SurfaceVariant,
            OnSurfaceVariant,
            InverseSurface,
            InverseOnSurface,
            Outline,
            OutlineVariant,
            Shadow,
            Scrim,
            SurfaceTint,
            Primary,
            OnPrimary,
            PrimaryContainer,
            OnPrimaryContainer,
            InversePrimary,
            Secondary,
            OnSecondary,
            SecondaryContainer,
            OnSecondaryContainer,
            Tertiary,
            OnTertiary,
            TertiaryContainer,
            OnTertiaryContainer,
            Error,
            OnError,
            ErrorContainer,
            OnErrorContainer,
            PrimaryFixed,
            PrimaryFixedDim,
            OnPrimaryFixed,
            OnPrimaryFixedVariant,
            SecondaryFixed,
            SecondaryFixedDim,
            OnSecondaryFixed,
            OnSecondaryFixedVariant,
            TertiaryFixed,
            TertiaryFixedDim,
            OnTertiaryFixed,
            OnTertiaryFixedVariant,
        ]
    };

    /// Get the role's name in snake case.
    pub const fn name(&self) -> &'static str {
        use Role::*;
        match self {
            Background => "background",
            OnBackground => "on_background",
            Surface => "surface",
            SurfaceDim => "surface_dim",
            SurfaceBright => "surface_bright",
            SurfaceContainerLowest => "surface_container_lowest",
            SurfaceContainerLow => "surface_container_low",
            SurfaceContainer => "surface_container",
            SurfaceContainerHigh => "surface_container_high",
            SurfaceContainerHighest => "surface_container_highest",
            OnSurface => "on_surface",
            SurfaceVariant => "surface_variant",
            OnSurfaceVariant => "on_surface_variant",
            InverseSurface => "inverse_surface",
            InverseOnSurface => "inverse_on_surface",
            Outline => "outline",
            OutlineVariant => "outline_variant",
            Shadow => "shadow",
            Scrim => "scrim",
            SurfaceTint => "surface_tint",
            Primary => "primary",
            OnPrimary => "on_primary",
            PrimaryContainer => "primary_container",
            OnPrimaryContainer => "on_primary_container",
            InversePrimary => "inverse_primary",
            Secondary => "secondary",
            OnSecondary => "on_secondary",
            SecondaryContainer => "secondary_container",
            OnSecondaryContainer => "on_secondary_container",
            Tertiary => "tertiary",
            OnTertiary => "on_tertiary",
            TertiaryContainer => "tertiary_container",
            OnTertiaryContainer => "on_tertiary_container",
            Error => "error",
            OnError => "on_error",
            ErrorContainer => "error_container",
            OnErrorContainer => "on_error_container",
            PrimaryFixed => "primary_fixed",
            PrimaryFixedDim => "primary_fixed_dim",
            OnPrimaryFixed => "on_primary_fixed",
            OnPrimaryFixedVariant => "on_primary_fixed_variant",
            SecondaryFixed => "secondary_fixed",
            SecondaryFixedDim => "secondary_fixed_dim",
            OnSecondaryFixed => "on_secondary_fixed",
            OnSecondaryFixedVariant => "on_secondary_fixed_variant",
            TertiaryFixed => "tertiary_fixed",
            TertiaryFixedDim => "tertiary_fixed_dim",
            OnTertiaryFixed => "on_tertiary_fixed",
            OnTertiaryFixedVariant => "on_tertiary_fixed_variant",
        }
    }

    /// Look up the role with the given name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.name() == name)
    }

    /// Get the rules for resolving this role.
    pub fn spec(self) -> DynamicColor {
        use Palette::{Error as ErrorPalette, Neutral, NeutralVariant};
        use Palette::{Primary as PrimaryPalette, Secondary as SecondaryPalette};
        use Palette::Tertiary as TertiaryPalette;
        use Role::*;

        let role = self;
        match self {
            // ------------------------------------------------------------------------------- Surfaces
            Background | Surface => {
                DynamicColor::new(role, Neutral, |s| dark_light(s, 6.0, 98.0)).background()
            }
            OnBackground => DynamicColor::new(role, Neutral, |s| dark_light(s, 90.0, 10.0))
                .on(|_| Background, ContrastCurve::new(3.0, 3.0, 4.5, 7.0)),
            SurfaceDim => DynamicColor::new(role, Neutral, |s| {
                if s.is_dark() {
                    6.0
                } else {
                    ContrastCurve::new(87.0, 87.0, 80.0, 75.0).get(s.contrast_level())
                }
            })
            .background(),
            SurfaceBright => DynamicColor::new(role, Neutral, |s| {
                if s.is_dark() {
                    ContrastCurve::new(24.0, 24.0, 29.0, 34.0).get(s.contrast_level())
                } else {
                    98.0
                }
            })
            .background(),
            SurfaceContainerLowest => DynamicColor::new(role, Neutral, |s| {
                if s.is_dark() {
                    ContrastCurve::new(4.0, 4.0, 2.0, 0.0).get(s.contrast_level())
                } else {
                    100.0
                }
            })
            .background(),
            SurfaceContainerLow => DynamicColor::new(role, Neutral, |s| {
                surface_container(s, (10.0, 10.0, 11.0, 12.0), (96.0, 96.0, 96.0, 95.0))
            })
            .background(),
            SurfaceContainer => DynamicColor::new(role, Neutral, |s| {
                surface_container(s, (12.0, 12.0, 16.0, 20.0), (94.0, 94.0, 92.0, 90.0))
            })
            .background(),
            SurfaceContainerHigh => DynamicColor::new(role, Neutral, |s| {
                surface_container(s, (17.0, 17.0, 21.0, 25.0), (92.0, 92.0, 88.0, 85.0))
            })
            .background(),
            SurfaceContainerHighest => DynamicColor::new(role, Neutral, |s| {
                surface_container(s, (22.0, 22.0, 26.0, 30.0), (90.0, 90.0, 84.0, 80.0))
            })
            .background(),
            OnSurface => DynamicColor::new(role, Neutral, |s| dark_light(s, 90.0, 10.0))
                .on(highest_surface, ContrastCurve::new(4.5, 7.0, 11.0, 21.0)),
            SurfaceVariant => {
                DynamicColor::new(role, NeutralVariant, |s| dark_light(s, 30.0, 90.0)).background()
            }
            OnSurfaceVariant => {
                DynamicColor::new(role, NeutralVariant, |s| dark_light(s, 80.0, 30.0))
                    .on(highest_surface, ContrastCurve::new(3.0, 4.5, 7.0, 11.0))
            }
            InverseSurface => DynamicColor::new(role, Neutral, |s| dark_light(s, 90.0, 20.0)),
            InverseOnSurface => DynamicColor::new(role, Neutral, |s| dark_light(s, 20.0, 95.0))
                .on(|_| InverseSurface, ContrastCurve::new(4.5, 7.0, 11.0, 21.0)),
            Outline => DynamicColor::new(role, NeutralVariant, |s| dark_light(s, 60.0, 50.0))
                .on(highest_surface, ContrastCurve::new(1.5, 3.0, 4.5, 7.0)),
            OutlineVariant => {
                DynamicColor::new(role, NeutralVariant, |s| dark_light(s, 30.0, 80.0))
                    .on(highest_surface, ContrastCurve::new(1.0, 1.0, 3.0, 4.5))
            }
            Shadow | Scrim => DynamicColor::new(role, Neutral, |_| 0.0),
            SurfaceTint => {
                DynamicColor::new(role, PrimaryPalette, |s| dark_light(s, 80.0, 40.0)).background()
            }

            // -------------------------------------------------------------------------------- Primary
            Primary => DynamicColor::new(role, PrimaryPalette, |s| {
                if is_monochrome(s) {
                    dark_light(s, 100.0, 0.0)
                } else {
                    dark_light(s, 80.0, 40.0)
                }
            })
            .background()
            .on(highest_surface, ContrastCurve::new(3.0, 4.5, 7.0, 7.0))
            .paired(nearer_pair(PrimaryContainer, Primary)),
            OnPrimary => DynamicColor::new(role, PrimaryPalette, |s| {
                if is_monochrome(s) {
                    dark_light(s, 10.0, 90.0)
                } else {
                    dark_light(s, 20.0, 100.0)
                }
            })
            .on(|_| Primary, ContrastCurve::new(4.5, 7.0, 11.0, 21.0)),
            PrimaryContainer => DynamicColor::new(role, PrimaryPalette, |s| {
                if is_fidelity(s) {
                    s.source().tone()
                } else if is_monochrome(s) {
                    dark_light(s, 85.0, 25.0)
                } else {
                    dark_light(s, 30.0, 90.0)
                }
            })
            .background()
            .on(highest_surface, ContrastCurve::new(1.0, 1.0, 3.0, 4.5))
            .paired(nearer_pair(PrimaryContainer, Primary)),
            OnPrimaryContainer => DynamicColor::new(role, PrimaryPalette, |s| {
                if is_fidelity(s) {
                    foreground_tone((PrimaryContainer.spec().tone)(s), 4.5)
                } else if is_monochrome(s) {
                    dark_light(s, 0.0, 100.0)
                } else {
                    dark_light(s, 90.0, 30.0)
                }
            })
            .on(|_| PrimaryContainer, ContrastCurve::new(3.0, 4.5, 7.0, 11.0)),
            InversePrimary => {
                DynamicColor::new(role, PrimaryPalette, |s| dark_light(s, 40.0, 80.0))
                    .on(|_| InverseSurface, ContrastCurve::new(3.0, 4.5, 7.0, 7.0))
            }

            // ------------------------------------------------------------------------------ Secondary
            Secondary => {
                DynamicColor::new(role, SecondaryPalette, |s| dark_light(s, 80.0, 40.0))
                    .background()
                    .on(highest_surface, ContrastCurve::new(3.0, 4.5, 7.0, 7.0))
                    .paired(nearer_pair(SecondaryContainer, Secondary))
            }
            OnSecondary => DynamicColor::new(role, SecondaryPalette, |s| {
                if is_monochrome(s) {
                    dark_light(s, 10.0, 100.0)
                } else {
                    dark_light(s, 20.0, 100.0)
                }
            })
            .on(|_| Secondary, ContrastCurve::new(4.5, 7.0, 11.0, 21.0)),
            SecondaryContainer => DynamicColor::new(role, SecondaryPalette, |s| {
                let initial = dark_light(s, 30.0, 90.0);
                if is_monochrome(s) {
                    dark_light(s, 30.0, 85.0)
                } else if !is_fidelity(s) {
                    initial
                } else {
                    let palette = s.secondary_palette();
                    find_desired_chroma_by_tone(
                        palette.hue(),
                        palette.chroma(),
                        initial,
                        !s.is_dark(),
                    )
                }
            })
            .background()
            .on(highest_surface, ContrastCurve::new(1.0, 1.0, 3.0, 4.5))
            .paired(nearer_pair(SecondaryContainer, Secondary)),
            OnSecondaryContainer => DynamicColor::new(role, SecondaryPalette, |s| {
                if is_monochrome(s) {
                    dark_light(s, 90.0, 10.0)
                } else if !is_fidelity(s) {
                    dark_light(s, 90.0, 30.0)
                } else {
                    foreground_tone((SecondaryContainer.spec().tone)(s), 4.5)
                }
            })
            .on(|_| SecondaryContainer, ContrastCurve::new(3.0, 4.5, 7.0, 11.0)),

            // ------------------------------------------------------------------------------- Tertiary
            Tertiary => DynamicColor::new(role, TertiaryPalette, |s| {
                if is_monochrome(s) {
                    dark_light(s, 90.0, 25.0)
                } else {
                    dark_light(s, 80.0, 40.0)
                }
            })
            .background()
            .on(highest_surface, ContrastCurve::new(3.0, 4.5, 7.0, 7.0))
            .paired(nearer_pair(TertiaryContainer, Tertiary)),
            OnTertiary => DynamicColor::new(role, TertiaryPalette, |s| {
                if is_monochrome(s) {
                    dark_light(s, 10.0, 90.0)
                } else {
                    dark_light(s, 20.0, 100.0)
                }
            })
            .on(|_| Tertiary, ContrastCurve::new(4.5, 7.0, 11.0, 21.0)),
            TertiaryContainer => DynamicColor::new(role, TertiaryPalette, |s| {
                if is_monochrome(s) {
                    dark_light(s, 60.0, 49.0)
                } else if !is_fidelity(s) {
                    dark_light(s, 30.0, 90.0)
                } else {
                    fix_if_disliked(s.tertiary_palette().hct(s.source().tone())).tone()
                }
            })
            .background()
            .on(highest_surface, ContrastCurve::new(1.0, 1.0, 3.0, 4.5))
            .paired(nearer_pair(TertiaryContainer, Tertiary)),
            OnTertiaryContainer => DynamicColor::new(role, TertiaryPalette, |s| {
                if is_monochrome(s) {
                    dark_light(s, 0.0, 100.0)
                } else if !is_fidelity(s) {
                    dark_light(s, 90.0, 30.0)
                } else {
                    foreground_tone((TertiaryContainer.spec().tone)(s), 4.5)
                }
            })
            .on(|_| TertiaryContainer, ContrastCurve::new(3.0, 4.5, 7.0, 11.0)),

            // ---------------------------------------------------------------------------------- Error
            Error => DynamicColor::new(role, ErrorPalette, |s| dark_light(s, 80.0, 40.0))
                .background()
                .on(highest_surface, ContrastCurve::new(3.0, 4.5, 7.0, 7.0))
                .paired(nearer_pair(ErrorContainer, Error)),
            OnError => DynamicColor::new(role, ErrorPalette, |s| dark_light(s, 20.0, 100.0))
                .on(|_| Error, ContrastCurve::new(4.5, 7.0, 11.0, 21.0)),
            ErrorContainer => {
                DynamicColor::new(role, ErrorPalette, |s| dark_light(s, 30.0, 90.0))
                    .background()
                    .on(highest_surface, ContrastCurve::new(1.0, 1.0, 3.0, 4.5))
                    .paired(nearer_pair(ErrorContainer, Error))
            }
            OnErrorContainer => DynamicColor::new(role, ErrorPalette, |s| {
                if is_monochrome(s) {
                    dark_light(s, 90.0, 10.0)
                } else {
                    dark_light(s, 90.0, 30.0)
                }
            })
            .on(|_| ErrorContainer, ContrastCurve::new(3.0, 4.5, 7.0, 11.0)),

            // ---------------------------------------------------------------------------------- Fixed
            PrimaryFixed => fixed(role, PrimaryPalette, |s| mono_or(s, 40.0, 90.0))
                .paired(fixed_pair(PrimaryFixed, PrimaryFixedDim)),
            PrimaryFixedDim => fixed(role, PrimaryPalette, |s| mono_or(s, 30.0, 80.0))
                .paired(fixed_pair(PrimaryFixed, PrimaryFixedDim)),
            OnPrimaryFixed => DynamicColor::new(role, PrimaryPalette, |s| mono_or(s, 100.0, 10.0))
                .on(|_| PrimaryFixedDim, ContrastCurve::new(4.5, 7.0, 11.0, 21.0))
                .also_on(PrimaryFixed),
            OnPrimaryFixedVariant => {
                DynamicColor::new(role, PrimaryPalette, |s| mono_or(s, 90.0, 30.0))
                    .on(|_| PrimaryFixedDim, ContrastCurve::new(3.0, 4.5, 7.0, 11.0))
                    .also_on(PrimaryFixed)
            }
            SecondaryFixed => fixed(role, SecondaryPalette, |s| mono_or(s, 80.0, 90.0))
                .paired(fixed_pair(SecondaryFixed, SecondaryFixedDim)),
            SecondaryFixedDim => fixed(role, SecondaryPalette, |s| mono_or(s, 70.0, 80.0))
                .paired(fixed_pair(SecondaryFixed, SecondaryFixedDim)),
            OnSecondaryFixed => DynamicColor::new(role, SecondaryPalette, |_| 10.0)
                .on(|_| SecondaryFixedDim, ContrastCurve::new(4.5, 7.0, 11.0, 21.0))
                .also_on(SecondaryFixed),
            OnSecondaryFixedVariant => {
                DynamicColor::new(role, SecondaryPalette, |s| mono_or(s, 25.0, 30.0))
                    .on(|_| SecondaryFixedDim, ContrastCurve::new(3.0, 4.5, 7.0, 11.0))
                    .also_on(SecondaryFixed)
            }
            TertiaryFixed => fixed(role, TertiaryPalette, |s| mono_or(s, 40.0, 90.0))
                .paired(fixed_pair(TertiaryFixed, TertiaryFixedDim)),
            TertiaryFixedDim => fixed(role, TertiaryPalette, |s| mono_or(s, 30.0, 80.0))
                .paired(fixed_pair(TertiaryFixed, TertiaryFixedDim)),
            OnTertiaryFixed => {
                DynamicColor::new(role, TertiaryPalette, |s| mono_or(s, 100.0, 10.0))
                    .on(|_| TertiaryFixedDim, ContrastCurve::new(4.5, 7.0, 11.0, 21.0))
                    .also_on(TertiaryFixed)
            }
            OnTertiaryFixedVariant => {
                DynamicColor::new(role, TertiaryPalette, |s| mono_or(s, 90.0, 30.0))
                    .on(|_| TertiaryFixedDim, ContrastCurve::new(3.0, 4.5, 7.0, 11.0))
                    .also_on(TertiaryFixed)
            }
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

#[inline]
fn dark_light(scheme: &DynamicScheme, dark: f64, light: f64) -> f64 {
    if scheme.is_dark() {
        dark
    } else {
        light
    }
}

#[inline]
fn mono_or(scheme: &DynamicScheme, monochrome: f64, otherwise: f64) -> f64 {
    if is_monochrome(scheme) {
        monochrome
    } else {
        otherwise
    }
}

#[inline]
fn is_monochrome(scheme: &DynamicScheme) -> bool {
    scheme.variant() == Variant::Monochrome
}

#[inline]
fn is_fidelity(scheme: &DynamicScheme) -> bool {
    matches!(scheme.variant(), Variant::Fidelity | Variant::Content)
}

fn surface_container(
    scheme: &DynamicScheme,
    dark: (f64, f64, f64, f64),
    light: (f64, f64, f64, f64),
) -> f64 {
    let (low, normal, medium, high) = if scheme.is_dark() { dark } else { light };
    ContrastCurve::new(low, normal, medium, high).get(scheme.contrast_level())
}

/// Get the surface with the most contrast against foregrounds.
fn highest_surface(scheme: &DynamicScheme) -> Role {
    if scheme.is_dark() {
        Role::SurfaceBright
    } else {
        Role::SurfaceDim
    }
}

const fn nearer_pair(container: Role, accent: Role) -> ToneDeltaPair {
    ToneDeltaPair::new(container, accent, 10.0, TonePolarity::Nearer, false)
}

const fn fixed_pair(fixed: Role, fixed_dim: Role) -> ToneDeltaPair {
    ToneDeltaPair::new(fixed, fixed_dim, 10.0, TonePolarity::Lighter, true)
}

fn fixed(role: Role, palette: Palette, tone: fn(&DynamicScheme) -> f64) -> DynamicColor {
    DynamicColor::new(role, palette, tone)
        .background()
        .on(highest_surface, ContrastCurve::new(1.0, 1.0, 3.0, 4.5))
}

#[cfg(test)]
mod test {
    use super::Role;
    use crate::core::assert_close_enough;
    use crate::hct::Hct;
    use crate::scheme::{DynamicScheme, Variant};

    #[test]
    fn test_roles() {
        for (index, role) in Role::ALL.iter().enumerate() {
            assert_eq!(*role as usize, index);
            assert_eq!(Role::from_name(role.name()), Some(*role));
            assert_eq!(role.spec().role, *role);
        }
        assert_eq!(Role::from_name("primary_container"), Some(Role::PrimaryContainer));
        assert_eq!(Role::from_name("tertiary_fixed_dimmer"), None);
        assert_eq!(format!("{}", Role::OnSurfaceVariant), "on_surface_variant");
    }

    #[test]
    fn test_fidelity_on_container() {
        let source = Hct::from_argb(0xffff0000);
        let scheme = DynamicScheme::new(source, Variant::Fidelity, true, 0.0);

        // The container leaves the awkward zone, but its text keys off the
        // container's base tone.
        let container = Role::PrimaryContainer.spec();
        assert_close_enough!((container.tone)(&scheme), 53.233, 0.01);
        assert_close_enough!(scheme.get_tone(Role::PrimaryContainer), 60.0, 1e-9);
        assert_close_enough!(scheme.get_tone(Role::OnPrimaryContainer), 7.148, 0.01);
    }
}
