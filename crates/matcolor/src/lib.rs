//! # Material Colors
//!
//! Matcolor derives Material color themes from a single seed color. It
//! implements the CAM16 color appearance model, the HCT color space built on
//! top of it, and the tonal palettes and dynamic schemes that turn a seed into
//! the colors of a user interface.
//!
//!
//! ## 1. Overview
//!
//! Matcolor's main abstractions are:
//!
//!   * [`Hct`](hct::Hct) represents a color by **hue, chroma, and tone**.
//!     Hue and chroma come from CAM16, tone is CIE L*. Creating an HCT color
//!     solves for the closest sRGB color, reducing chroma as necessary to stay
//!     in gamut.
//!   * [`TonalPalette`](palette::TonalPalette) fixes hue and chroma and
//!     varies tone, which makes it easy to pick colors with sufficient
//!     contrast.
//!   * [`DynamicScheme`](scheme::DynamicScheme) derives six palettes from a
//!     source color according to a [`Variant`](scheme::Variant) and resolves
//!     semantic [`Role`](scheme::Role)s, such as the primary color or the text
//!     on it, to palette tones meeting a contrast level.
//!   * [`MaterialTheme`](theme::MaterialTheme) is a snapshot of all role
//!     colors for a seed, dark or light mode, and [`Contrast`](theme::Contrast).
//!     [`ThemeCache`](theme::ThemeCache) caches standard contrast themes and
//!     derives medium and high contrast themes from them.
//!
//! [`StandardRgb`] is the 8-bit sRGB color with alpha that goes in as seed and
//! comes out as role color. It parses from and formats as hexadecimal strings.
//!
//!
//! ## 2. Example
//!
//! ```
//! # use matcolor::error::ColorFormatError;
//! use matcolor::theme::{Contrast, ThemeCache};
//!
//! let mut cache = ThemeCache::new();
//! let theme = cache.get_from_rgba_hex("#63A002FF", false, Contrast::Standard)?;
//! assert_eq!(theme.primary().to_rgb_hex(), "#4c662b");
//! assert_eq!(theme.on_primary().to_rgb_hex(), "#ffffff");
//! # Ok::<(), ColorFormatError>(())
//! ```
//!
//!
//! ## 3. Features
//!
//! The optional `serde` feature implements serialization for [`StandardRgb`],
//! which serializes as a `#rrggbbaa` string, as well as for themes.
//!
//! The library logs with [`tracing`] but leaves installing a subscriber to
//! applications. Cache hits and misses log at debug level, key color searches
//! and scheme derivation at trace level.
//!
//!
//! ## 4. Concurrency
//!
//! Palettes, schemes, and themes memoize colors in cells and hence are neither
//! `Send` nor `Sync`. Applications that derive themes on several threads need
//! one cache per thread. The default viewing conditions are computed once and
//! shared by all threads.

mod core;
mod rgb;
#[cfg(feature = "serde")]
mod serialize;

pub mod cam;
pub mod dislike;
pub mod error;
pub mod hct;
pub mod palette;
pub mod scheme;
pub mod temperature;
pub mod theme;

pub mod contrast {
    //! Contrast between tones.
    //!
    //! Since tone is CIE L*, it determines relative luminance and hence the
    //! WCAG 2 contrast ratio between two colors. The `lighter` and `darker`
    //! functions return -1 if the ratio cannot be met.
    pub use crate::core::{darker, darker_unsafe, lighter, lighter_unsafe, ratio_of_tones};
}

pub mod conversion {
    //! Conversion between tone and relative luminance as well as the sRGB
    //! constants used throughout.
    pub use crate::core::{
        lstar_from_y, rgb_to_xyz_from_primaries, y_from_lstar, Matrix, D65_CHROMATICITY,
        SRGB_PRIMARIES, WHITE_POINT_D65,
    };
}

pub use rgb::StandardRgb;
